// File: src/engine.rs
// Purpose: Keystroke masking, blur checks, rule reassignment and submit verdicts

use cms_forms_validation::{lookup, ValidationRule};
use serde::{Deserialize, Serialize};

use crate::error::FormResult;
use crate::listeners::ElementId;
use crate::notifier::{Notifier, Severity};
use crate::spec::{FieldSpec, Trigger};
use crate::state::{required_message, Form};

/// Engine behaviour knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Empty a field after reporting an invalid value on blur
    #[serde(default = "default_true")]
    pub clear_on_invalid_blur: bool,

    /// Title of every validation notification
    #[serde(default = "default_notification_title")]
    pub notification_title: String,
}

fn default_true() -> bool {
    true
}

fn default_notification_title() -> String {
    "Validation Error".to_string()
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            clear_on_invalid_blur: true,
            notification_title: default_notification_title(),
        }
    }
}

/// Raw input delivered by a listened element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    FocusLost,
}

/// Whether a typed character made it into the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerdict {
    Accepted,
    Vetoed { rule: ValidationRule },
}

/// What a blur check found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurOutcome {
    Passed,
    Required { message: String },
    Invalid { rule: ValidationRule, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Key(KeyVerdict),
    Blur(BlurOutcome),
    /// No listener is bound for this element and trigger
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// Submit-time result across every field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub first_failure_message: Option<String>,
    pub failures: Vec<FieldFailure>,
}

impl Verdict {
    /// Failure recorded for one field, if any
    pub fn failure(&self, field: &str) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

/// Runs validation for forms built from [`FieldSpec`]s.
///
/// The engine holds no per-form state; every operation takes the [`Form`]
/// it acts on.
#[derive(Debug)]
pub struct FormEngine<N> {
    notifier: N,
    options: EngineOptions,
}

impl<N: Notifier> FormEngine<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_options(notifier, EngineOptions::default())
    }

    pub fn with_options(notifier: N, options: EngineOptions) -> Self {
        Self { notifier, options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Build a form. Mandatory fields get their first event's rule as validator.
    pub fn build_form(&self, specs: Vec<FieldSpec>) -> FormResult<Form> {
        let form = Form::from_specs(specs)?;
        tracing::debug!("Built form with {} fields", form.fields().count());
        Ok(form)
    }

    /// A character is about to be typed into `field`.
    ///
    /// Each on-change-character rule sees the lone character; the first rule
    /// it fails vetoes the keystroke. Accepted characters are appended.
    pub fn on_char(&self, form: &mut Form, field: &str, ch: char) -> FormResult<KeyVerdict> {
        let control = form.control_mut(field)?;

        for rule in control.spec.rules_for(Trigger::OnChangeCharacter) {
            if !lookup(rule).pattern.test_char(ch) {
                tracing::debug!("Vetoed {:?} in field `{}` ({})", ch, field, rule);
                return Ok(KeyVerdict::Vetoed { rule });
            }
        }

        let mut value = std::mem::take(&mut control.state.value);
        value.push(ch);
        control.set_value(value);
        Ok(KeyVerdict::Accepted)
    }

    /// `field` lost focus.
    ///
    /// An empty mandatory field, or a non-empty value failing an on-focus-lost
    /// rule, is reported through the notifier and the field is emptied. Once
    /// [`set_active_rule`](Self::set_active_rule) has run, the active rule
    /// replaces the declared ones.
    pub fn on_focus_lost(&self, form: &mut Form, field: &str) -> FormResult<BlurOutcome> {
        let control = form.control_mut(field)?;
        control.state.touched = true;

        if !control.spec.listens_to(Trigger::OnFocusLost) {
            return Ok(BlurOutcome::Passed);
        }

        if control.state.value.is_empty() {
            if control.mandatory {
                let message = required_message(field);
                self.report(&message);
                control.state.error = Some(message.clone());
                control.clear_value();
                return Ok(BlurOutcome::Required { message });
            }
        } else {
            for rule in control.blur_rules() {
                let entry = lookup(rule);
                if entry.pattern.test(&control.state.value) {
                    continue;
                }

                // A custom message only applies to single-event fields
                let message = match &control.spec.validation_message {
                    Some(custom) if control.spec.events.len() == 1 => custom.clone(),
                    _ => entry.message.to_string(),
                };
                self.report(&message);
                control.state.error = Some(message.clone());
                if self.options.clear_on_invalid_blur {
                    control.clear_value();
                } else {
                    // The rejected text stays visible, so the field cannot count as valid
                    control.state.valid = false;
                }
                return Ok(BlurOutcome::Invalid { rule, message });
            }
        }

        control.state.error = None;
        Ok(BlurOutcome::Passed)
    }

    /// Route an event from a listened element to its field
    pub fn dispatch(
        &self,
        form: &mut Form,
        element: ElementId,
        event: InputEvent,
    ) -> FormResult<EventOutcome> {
        let trigger = match event {
            InputEvent::Char(_) => Trigger::OnChangeCharacter,
            InputEvent::FocusLost => Trigger::OnFocusLost,
        };
        let Some(field) = form.listeners.field_for(element, trigger).map(str::to_owned) else {
            tracing::debug!("No {:?} listener on {}; ignoring event", trigger, element);
            return Ok(EventOutcome::Ignored);
        };

        match event {
            InputEvent::Char(ch) => self.on_char(form, &field, ch).map(EventOutcome::Key),
            InputEvent::FocusLost => self.on_focus_lost(form, &field).map(EventOutcome::Blur),
        }
    }

    /// Swap the structural validator of `field` and reset it.
    ///
    /// `None` leaves the field without a pattern; with `mandatory == false`
    /// the field is inert for submit purposes.
    pub fn set_active_rule(
        &self,
        form: &mut Form,
        field: &str,
        rule: Option<ValidationRule>,
        mandatory: bool,
    ) -> FormResult<()> {
        let control = form.control_mut(field)?;
        control.active_rule = rule;
        control.mandatory = mandatory;
        control.reassigned = true;
        control.reset();
        tracing::debug!(
            "Field `{}` now uses {:?} (mandatory: {})",
            field,
            rule.map(ValidationRule::id),
            mandatory
        );
        Ok(())
    }

    /// Re-check every mandatory field and mark all fields touched.
    ///
    /// Values are left as they are; only `valid`, `touched` and `error` change.
    pub fn validate_all(&self, form: &mut Form) -> Verdict {
        let mut failures = Vec::new();

        for control in form.controls_mut() {
            control.state.touched = true;
            let failure = control.failure();
            control.state.valid = failure.is_none();
            control.state.error = failure.clone();
            if let Some(message) = failure {
                failures.push(FieldFailure {
                    field: control.spec.name.clone(),
                    message,
                });
            }
        }

        let verdict = Verdict {
            is_valid: failures.is_empty(),
            first_failure_message: failures.first().map(|f| f.message.clone()),
            failures,
        };
        tracing::debug!(
            "Form validation: valid={} failures={}",
            verdict.is_valid,
            verdict.failures.len()
        );
        verdict
    }

    fn report(&self, message: &str) {
        self.notifier
            .notify(message, &self.options.notification_title, Severity::Error);
    }
}
