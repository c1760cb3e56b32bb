//! CMS Forms Validation
//!
//! The rule catalog behind CMS form fields. Every [`ValidationRule`] maps to
//! exactly one compiled [`Pattern`] and one default message.
//!
//! ```rust
//! use cms_forms_validation::{lookup, ValidationRule};
//!
//! let entry = lookup(ValidationRule::Pincode);
//! assert!(entry.pattern.test("560001"));
//! assert!(!entry.pattern.test("060001"));
//! assert_eq!(entry.message, "Enter a valid 6-digit pincode.");
//! ```

pub mod catalog;
pub mod rule;

pub use catalog::{lookup, lookup_id, Pattern, RuleEntry};
pub use rule::{UnknownRuleError, ValidationRule};
