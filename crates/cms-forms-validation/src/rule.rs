//! Validation rule identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// A named pattern-matching policy applied to a form field.
///
/// The textual ids (`"EmailID"`, `"IFSCCode"`, ...) are what form
/// definitions use on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ValidationRule {
    AlphanumericOnly,
    NumberOnly,
    LettersOnly,
    LettersWithWhiteSpace,
    DecimalOnly,
    EmailId,
    Pincode,
    IfscCode,
    Address,
    MobileNoWithSeries,
    AgeAbove18Years,
    AccountNumber,
    HouseOrSurveyNumber,
    PasswordStrength,
    MobileWithCountryCode,
    NoSpecialChars,
}

/// Raised when a rule id does not name a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation rule: {0}")]
pub struct UnknownRuleError(pub String);

impl ValidationRule {
    /// Every registered rule, in catalog order
    pub const ALL: [ValidationRule; 16] = [
        ValidationRule::AlphanumericOnly,
        ValidationRule::NumberOnly,
        ValidationRule::LettersOnly,
        ValidationRule::LettersWithWhiteSpace,
        ValidationRule::DecimalOnly,
        ValidationRule::EmailId,
        ValidationRule::Pincode,
        ValidationRule::IfscCode,
        ValidationRule::Address,
        ValidationRule::MobileNoWithSeries,
        ValidationRule::AgeAbove18Years,
        ValidationRule::AccountNumber,
        ValidationRule::HouseOrSurveyNumber,
        ValidationRule::PasswordStrength,
        ValidationRule::MobileWithCountryCode,
        ValidationRule::NoSpecialChars,
    ];

    /// Stable textual id
    pub const fn id(self) -> &'static str {
        match self {
            ValidationRule::AlphanumericOnly => "AlphanumericOnly",
            ValidationRule::NumberOnly => "NumberOnly",
            ValidationRule::LettersOnly => "LettersOnly",
            ValidationRule::LettersWithWhiteSpace => "LettersWithWhiteSpace",
            ValidationRule::DecimalOnly => "DecimalOnly",
            ValidationRule::EmailId => "EmailID",
            ValidationRule::Pincode => "Pincode",
            ValidationRule::IfscCode => "IFSCCode",
            ValidationRule::Address => "Address",
            ValidationRule::MobileNoWithSeries => "MobileNoWithSeries",
            ValidationRule::AgeAbove18Years => "AgeAbove18Years",
            ValidationRule::AccountNumber => "AccountNumber",
            ValidationRule::HouseOrSurveyNumber => "HouseOrSurveyNumber",
            ValidationRule::PasswordStrength => "PasswordStrength",
            ValidationRule::MobileWithCountryCode => "MobileWithCountryCode",
            ValidationRule::NoSpecialChars => "NoSpecialChars",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ValidationRule {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.id() == s)
            .ok_or_else(|| UnknownRuleError(s.to_string()))
    }
}

impl TryFrom<String> for ValidationRule {
    type Error = UnknownRuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for ValidationRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
