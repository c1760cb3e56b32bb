//! Rule catalog: rule -> compiled pattern -> default message

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{UnknownRuleError, ValidationRule};

/// A compiled rule pattern.
///
/// `full` must match the whole input; every entry of `requires` must match
/// somewhere in it. The extra requirements stand in for look-ahead groups,
/// which the `regex` engine does not support.
#[derive(Debug)]
pub struct Pattern {
    full: Regex,
    requires: Vec<Regex>,
}

impl Pattern {
    fn compile(full: &str, requires: &[&str]) -> Self {
        // Built-in patterns are constants; a compile failure is a bug in this file.
        let compile = |src: &str| Regex::new(src).expect("built-in rule pattern must compile");
        Self {
            full: compile(full),
            requires: requires.iter().map(|src| compile(*src)).collect(),
        }
    }

    /// Test a value (or a single keystroke) against the pattern
    pub fn test(&self, value: &str) -> bool {
        self.full.is_match(value) && self.requires.iter().all(|re| re.is_match(value))
    }

    /// Test one character, as keystroke masking does
    pub fn test_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.test(ch.encode_utf8(&mut buf))
    }

    /// Source of the whole-value pattern
    pub fn as_str(&self) -> &str {
        self.full.as_str()
    }
}

/// One catalog entry
#[derive(Debug)]
pub struct RuleEntry {
    pub rule: ValidationRule,
    pub pattern: Pattern,
    pub message: &'static str,
}

/// (whole-value pattern, must-contain patterns, default message)
type Definition = (&'static str, &'static [&'static str], &'static str);

fn definition(rule: ValidationRule) -> Definition {
    match rule {
        ValidationRule::AlphanumericOnly => (
            r"^[a-zA-Z0-9]*$",
            &[],
            "Only alphanumeric characters are allowed.",
        ),
        ValidationRule::NumberOnly => (r"^[0-9]*$", &[], "Only numbers are allowed."),
        ValidationRule::LettersOnly => (r"^[a-zA-Z]*$", &[], "Only letters are allowed."),
        ValidationRule::LettersWithWhiteSpace => (
            r"^[a-zA-Z\s]*$",
            &[],
            "Only letters and spaces are allowed.",
        ),
        ValidationRule::DecimalOnly => (
            r"^[0-9]*\.?[0-9]*$",
            &[],
            "Enter a valid decimal number.",
        ),
        ValidationRule::EmailId => (
            r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$",
            &[],
            "Please enter a valid email address.",
        ),
        ValidationRule::Pincode => (
            r"^[1-9][0-9]{5}$",
            &[],
            "Enter a valid 6-digit pincode.",
        ),
        ValidationRule::IfscCode => (
            r"^[A-Z]{4}0[A-Z0-9]{6}$",
            &[],
            "Enter a valid IFSC code (e.g., ABCD0123456).",
        ),
        ValidationRule::Address => (
            r"^[a-zA-Z0-9\s,.-]*$",
            &[],
            "Enter a valid address with letters, numbers, and basic punctuation.",
        ),
        ValidationRule::MobileNoWithSeries => (r"^[0-9]*$", &[], "Enter a valid mobile number."),
        ValidationRule::AgeAbove18Years => (
            r"^[0-9]*$",
            &[],
            "Enter a valid age (numbers only).",
        ),
        ValidationRule::AccountNumber => (r"^[0-9]*$", &[], "Enter a valid account number."),
        ValidationRule::HouseOrSurveyNumber => (
            r"^[a-zA-Z0-9/-]*$",
            &[],
            "Enter a valid house or survey number.",
        ),
        ValidationRule::PasswordStrength => (
            r"^[a-zA-Z0-9]{8,}$",
            &[r"[a-z]", r"[A-Z]", r"[0-9]"],
            "Password must be at least 8 characters long with an uppercase letter, lowercase letter, and number.",
        ),
        ValidationRule::MobileWithCountryCode => (
            r"^\+[1-9][0-9]{1,14}$",
            &[],
            "Enter a valid mobile number with country code (e.g., +1234567890).",
        ),
        ValidationRule::NoSpecialChars => (
            r#"^[^!@#$%^&*()_+=\[\]{};':"\\|,.<>/?-]*$"#,
            &[],
            "Special characters are not allowed.",
        ),
    }
}

static CATALOG: Lazy<Vec<RuleEntry>> = Lazy::new(|| {
    ValidationRule::ALL
        .iter()
        .map(|&rule| {
            let (full, requires, message) = definition(rule);
            RuleEntry {
                rule,
                pattern: Pattern::compile(full, requires),
                message,
            }
        })
        .collect()
});

/// Look up the pattern and default message for a rule
pub fn lookup(rule: ValidationRule) -> &'static RuleEntry {
    // ALL lists the variants in declaration order, so the discriminant is the index
    &CATALOG[rule as usize]
}

/// Look up a rule by its textual id
pub fn lookup_id(id: &str) -> Result<&'static RuleEntry, UnknownRuleError> {
    let rule: ValidationRule = id.parse()?;
    Ok(lookup(rule))
}
