// File: src/spec.rs
// Purpose: Declarative description of form fields

use cms_forms_validation::ValidationRule;
use serde::{Deserialize, Serialize};

/// When a field's rule is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigger {
    /// Each character about to be typed into the field
    #[serde(rename = "change-character", alias = "keypress")]
    OnChangeCharacter,
    /// The field losing focus
    #[serde(rename = "focus-lost", alias = "focusout")]
    OnFocusLost,
}

/// One `{trigger, rule}` pair on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEvent {
    pub trigger: Trigger,
    pub rule: ValidationRule,
}

impl FieldEvent {
    pub fn new(trigger: Trigger, rule: ValidationRule) -> Self {
        Self { trigger, rule }
    }
}

/// Declaration of a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(default)]
    pub mandatory: bool,

    /// Overrides the rule's default message
    #[serde(default)]
    pub validation_message: Option<String>,

    #[serde(default)]
    pub events: Vec<FieldEvent>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mandatory: false,
            validation_message: None,
            events: Vec::new(),
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    pub fn on_change_character(mut self, rule: ValidationRule) -> Self {
        self.events.push(FieldEvent::new(Trigger::OnChangeCharacter, rule));
        self
    }

    pub fn on_focus_lost(mut self, rule: ValidationRule) -> Self {
        self.events.push(FieldEvent::new(Trigger::OnFocusLost, rule));
        self
    }

    /// Rule installed as the structural validator when the form is built
    pub fn initial_rule(&self) -> Option<ValidationRule> {
        if self.mandatory {
            self.events.first().map(|event| event.rule)
        } else {
            None
        }
    }

    /// Rules bound to one trigger, in declaration order
    pub fn rules_for(&self, trigger: Trigger) -> impl Iterator<Item = ValidationRule> + '_ {
        self.events
            .iter()
            .filter(move |event| event.trigger == trigger)
            .map(|event| event.rule)
    }

    pub fn listens_to(&self, trigger: Trigger) -> bool {
        self.rules_for(trigger).next().is_some()
    }
}
