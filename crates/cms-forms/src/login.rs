// File: src/login.rs
// Purpose: Console login form with switchable email/mobile identification

use cms_forms_validation::ValidationRule;
use serde::Serialize;

use crate::engine::{FormEngine, Verdict};
use crate::error::FormResult;
use crate::notifier::Notifier;
use crate::spec::FieldSpec;
use crate::state::Form;

pub const EMAIL_FIELD: &str = "email";
pub const MOBILE_FIELD: &str = "mobile";
pub const PASSWORD_FIELD: &str = "password";

/// Which identifier the user signs in with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierMode {
    Email,
    Mobile,
}

impl IdentifierMode {
    pub fn field(self) -> &'static str {
        match self {
            IdentifierMode::Email => EMAIL_FIELD,
            IdentifierMode::Mobile => MOBILE_FIELD,
        }
    }

    pub fn rule(self) -> ValidationRule {
        match self {
            IdentifierMode::Email => ValidationRule::EmailId,
            IdentifierMode::Mobile => ValidationRule::MobileNoWithSeries,
        }
    }

    pub fn other(self) -> Self {
        match self {
            IdentifierMode::Email => IdentifierMode::Mobile,
            IdentifierMode::Mobile => IdentifierMode::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Identifier {
    Email(String),
    Mobile(String),
}

/// Payload handed to the login request once the form passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    #[serde(flatten)]
    pub identifier: Identifier,
    pub password: String,
}

/// Field declarations of the login screen
pub fn login_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(EMAIL_FIELD)
            .mandatory()
            .on_focus_lost(ValidationRule::EmailId),
        FieldSpec::new(MOBILE_FIELD)
            .on_change_character(ValidationRule::NumberOnly)
            .on_focus_lost(ValidationRule::MobileNoWithSeries),
        FieldSpec::new(PASSWORD_FIELD).mandatory(),
    ]
}

pub struct LoginForm<'e, N> {
    engine: &'e FormEngine<N>,
    form: Form,
    mode: IdentifierMode,
    show_password: bool,
    identifier_show_error: bool,
    password_show_error: bool,
}

impl<'e, N: Notifier> LoginForm<'e, N> {
    pub fn new(engine: &'e FormEngine<N>) -> FormResult<Self> {
        Ok(Self {
            form: engine.build_form(login_fields())?,
            engine,
            mode: IdentifierMode::Email,
            show_password: false,
            identifier_show_error: false,
            password_show_error: false,
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn mode(&self) -> IdentifierMode {
        self.mode
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn identifier_show_error(&self) -> bool {
        self.identifier_show_error
    }

    pub fn password_show_error(&self) -> bool {
        self.password_show_error
    }

    /// Inputs the rendering layer should mount right now
    pub fn mounted_fields(&self) -> [&'static str; 2] {
        [self.mode.field(), PASSWORD_FIELD]
    }

    /// Switch between email and mobile sign-in. Both identifier fields are emptied.
    pub fn toggle_identifier(&mut self) -> FormResult<()> {
        let next = self.mode.other();
        self.engine
            .set_active_rule(&mut self.form, self.mode.field(), None, false)?;
        self.engine
            .set_active_rule(&mut self.form, next.field(), Some(next.rule()), true)?;
        self.mode = next;
        self.identifier_show_error = false;
        tracing::debug!("Login identifier switched to {:?}", next);
        Ok(())
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validate everything; hand back credentials or the failed verdict
    pub fn submit(&mut self) -> Result<LoginCredentials, Verdict> {
        let verdict = self.engine.validate_all(&mut self.form);

        if !verdict.is_valid {
            self.identifier_show_error = verdict.failure(self.mode.field()).is_some();
            self.password_show_error = verdict.failure(PASSWORD_FIELD).is_some();
            return Err(verdict);
        }

        self.identifier_show_error = false;
        self.password_show_error = false;

        let value = |field: &str| self.form.value(field).unwrap_or_default().to_string();
        let identifier = match self.mode {
            IdentifierMode::Email => Identifier::Email(value(EMAIL_FIELD)),
            IdentifierMode::Mobile => Identifier::Mobile(value(MOBILE_FIELD)),
        };
        tracing::info!("Login submitted via {:?}", self.mode);

        Ok(LoginCredentials {
            identifier,
            password: value(PASSWORD_FIELD),
        })
    }
}
