// File: src/config.rs
// Purpose: Form definitions and engine options from forms.toml

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::EngineOptions;
use crate::notifier::ToastOptions;
use crate::spec::FieldSpec;

/// Contents of `forms.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub engine: EngineOptions,

    #[serde(default)]
    pub toast: ToastOptions,

    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

/// A named, declarative form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults and no predefined forms
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forms config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse forms config: {:?}", path))
    }

    /// Load configuration from the default path (./forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("forms.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Field specs of a named form
    pub fn form(&self, name: &str) -> Option<&[FieldSpec]> {
        self.forms
            .iter()
            .find(|form| form.name == name)
            .map(|form| form.fields.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{FieldEvent, Trigger};
    use cms_forms_validation::ValidationRule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert!(config.engine.clear_on_invalid_blur);
        assert_eq!(config.engine.notification_title, "Validation Error");
        assert!(config.toast.close_button);
        assert!(config.toast.progress_bar);
        assert!(config.forms.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = FormsConfig::from_toml_str("  \n").unwrap();
        assert!(config.engine.clear_on_invalid_blur);
        assert!(config.form("login").is_none());
    }

    #[test]
    fn test_form_definitions() {
        let toml = r#"
            [engine]
            clear_on_invalid_blur = false

            [toast]
            progress_bar = false

            [[forms]]
            name = "branch"

            [[forms.fields]]
            name = "ifsc"
            mandatory = true
            validation_message = "IFSC looks wrong"
            events = [{ trigger = "focus-lost", rule = "IFSCCode" }]

            [[forms.fields]]
            name = "pincode"
            events = [
                { trigger = "keypress", rule = "NumberOnly" },
                { trigger = "focusout", rule = "Pincode" },
            ]
        "#;
        let config = FormsConfig::from_toml_str(toml).unwrap();
        assert!(!config.engine.clear_on_invalid_blur);
        assert_eq!(config.engine.notification_title, "Validation Error");
        assert!(config.toast.close_button);
        assert!(!config.toast.progress_bar);

        let fields = config.form("branch").unwrap();
        assert_eq!(
            fields[0],
            FieldSpec::new("ifsc")
                .mandatory()
                .message("IFSC looks wrong")
                .on_focus_lost(ValidationRule::IfscCode)
        );
        assert_eq!(
            fields[1].events,
            vec![
                FieldEvent::new(Trigger::OnChangeCharacter, ValidationRule::NumberOnly),
                FieldEvent::new(Trigger::OnFocusLost, ValidationRule::Pincode),
            ]
        );
        assert!(!fields[1].mandatory);
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let toml = r#"
            [[forms]]
            name = "kyc"

            [[forms.fields]]
            name = "pan"
            events = [{ trigger = "focus-lost", rule = "PanCard" }]
        "#;
        let err = FormsConfig::from_toml_str(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown validation rule: PanCard"));
    }

    #[test]
    fn test_field_without_name_is_rejected() {
        let toml = r#"
            [[forms]]
            name = "kyc"

            [[forms.fields]]
            mandatory = true
        "#;
        assert!(FormsConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_bundled_forms_toml() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../forms.toml");
        let config = FormsConfig::load(path).unwrap();
        let fields = config.form("bank-branch").unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].initial_rule(), Some(ValidationRule::IfscCode));
        assert_eq!(fields[1].initial_rule(), Some(ValidationRule::NumberOnly));
        assert_eq!(fields[2].initial_rule(), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = FormsConfig::load("does/not/exist/forms.toml").unwrap();
        assert!(config.forms.is_empty());
    }
}
