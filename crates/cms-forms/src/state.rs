// File: src/state.rs
// Purpose: Per-field and per-form runtime state

use std::collections::HashMap;

use cms_forms_validation::{lookup, ValidationRule};

use crate::error::{FormError, FormResult};
use crate::listeners::{EventSource, ListenerRegistry, SyncReport};
use crate::spec::{FieldSpec, Trigger};

/// Live state of one control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub valid: bool,
    /// Message from the last failed blur or submit check
    pub error: Option<String>,
}

/// Message used when a mandatory field is left empty
pub fn required_message(field: &str) -> String {
    format!("The {} field is required.", field)
}

#[derive(Debug, Clone)]
pub(crate) struct FieldControl {
    pub(crate) spec: FieldSpec,
    pub(crate) active_rule: Option<ValidationRule>,
    pub(crate) mandatory: bool,
    /// Set once `set_active_rule` has replaced the declared validator
    pub(crate) reassigned: bool,
    pub(crate) state: FieldState,
}

impl FieldControl {
    fn new(spec: FieldSpec) -> Self {
        let mut control = Self {
            active_rule: spec.initial_rule(),
            mandatory: spec.mandatory,
            reassigned: false,
            spec,
            state: FieldState::default(),
        };
        control.refresh_validity();
        control
    }

    /// Recompute `valid` against the active validator
    pub(crate) fn refresh_validity(&mut self) {
        self.state.valid = self.failure().is_none();
    }

    /// Why the active validator rejects the current value, if it does
    pub(crate) fn failure(&self) -> Option<String> {
        if !self.mandatory {
            return None;
        }
        if self.state.value.is_empty() {
            return Some(required_message(&self.spec.name));
        }
        let rule = self.active_rule?;
        let entry = lookup(rule);
        if entry.pattern.test(&self.state.value) {
            None
        } else {
            Some(
                self.spec
                    .validation_message
                    .clone()
                    .unwrap_or_else(|| entry.message.to_string()),
            )
        }
    }

    /// Rules checked when the field loses focus.
    ///
    /// Declared on-focus-lost rules until the validator is reassigned; after
    /// that only the active rule, and nothing for an inert field.
    pub(crate) fn blur_rules(&self) -> Vec<ValidationRule> {
        if self.reassigned {
            self.active_rule.into_iter().collect()
        } else {
            self.spec.rules_for(Trigger::OnFocusLost).collect()
        }
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.state.value = value;
        self.refresh_validity();
    }

    pub(crate) fn clear_value(&mut self) {
        self.set_value(String::new());
    }

    pub(crate) fn reset(&mut self) {
        self.state.touched = false;
        self.state.error = None;
        self.clear_value();
    }
}

/// A form instance built from a list of [`FieldSpec`]s.
///
/// Owns the state of every field and the listeners attached for it.
#[derive(Debug, Clone)]
pub struct Form {
    controls: Vec<FieldControl>,
    index: HashMap<String, usize>,
    pub(crate) listeners: ListenerRegistry,
}

impl Form {
    pub(crate) fn from_specs(specs: Vec<FieldSpec>) -> FormResult<Self> {
        let mut controls = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        for (position, spec) in specs.into_iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(FormError::MissingFieldName(position));
            }
            if index.insert(spec.name.clone(), position).is_some() {
                return Err(FormError::DuplicateField(spec.name));
            }
            controls.push(FieldControl::new(spec));
        }

        Ok(Self {
            controls,
            index,
            listeners: ListenerRegistry::default(),
        })
    }

    pub(crate) fn control(&self, name: &str) -> FormResult<&FieldControl> {
        self.index
            .get(name)
            .map(|&i| &self.controls[i])
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub(crate) fn control_mut(&mut self, name: &str) -> FormResult<&mut FieldControl> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.controls[i]),
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    pub(crate) fn controls_mut(&mut self) -> impl Iterator<Item = &mut FieldControl> {
        self.controls.iter_mut()
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.control(name).ok().map(|c| &c.state)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|state| state.value.as_str())
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.controls
            .iter()
            .map(|c| (c.spec.name.as_str(), &c.state))
    }

    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.control(name).ok().map(|c| &c.spec)
    }

    pub fn active_rule(&self, name: &str) -> FormResult<Option<ValidationRule>> {
        Ok(self.control(name)?.active_rule)
    }

    pub fn is_mandatory(&self, name: &str) -> FormResult<bool> {
        Ok(self.control(name)?.mandatory)
    }

    /// Replace a value wholesale (paste, autofill). No keystroke masking applies.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        self.control_mut(name)?.set_value(value.into());
        Ok(())
    }

    /// Put every field back to empty and untouched
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            control.reset();
        }
    }

    /// Logical AND of every field's `valid` flag
    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|c| c.state.valid)
    }

    /// Bring listeners in line with the elements the rendering layer has mounted.
    ///
    /// Call this whenever the mounted element list changes. Pairs that are
    /// already attached are left alone, so repeated calls never stack handlers.
    pub fn sync_listeners<S: EventSource + ?Sized>(&mut self, source: &mut S) -> SyncReport {
        let specs: Vec<&FieldSpec> = self.controls.iter().map(|c| &c.spec).collect();
        self.listeners.sync(&specs, source)
    }

    /// Detach every listener this form holds
    pub fn detach_listeners<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        self.listeners.clear(source)
    }
}
