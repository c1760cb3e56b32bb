//! # cms-forms
//!
//! Declarative form validation for the CMS console.
//!
//! ## Quick Start
//!
//! ```rust
//! use cms_forms::{FieldSpec, FormEngine, KeyVerdict, ToastNotifier, ValidationRule};
//!
//! let engine = FormEngine::new(ToastNotifier::default());
//! let mut form = engine
//!     .build_form(vec![
//!         FieldSpec::new("pincode")
//!             .mandatory()
//!             .on_change_character(ValidationRule::NumberOnly)
//!             .on_focus_lost(ValidationRule::Pincode),
//!     ])
//!     .unwrap();
//!
//! // Keystrokes are masked by the on-change-character rule
//! assert!(matches!(engine.on_char(&mut form, "pincode", 'x').unwrap(), KeyVerdict::Vetoed { .. }));
//! for ch in "560001".chars() {
//!     engine.on_char(&mut form, "pincode", ch).unwrap();
//! }
//!
//! // Submit-time gate
//! assert!(engine.validate_all(&mut form).is_valid);
//! ```
//!
//! ## Architecture
//!
//! - **`cms-forms-validation`** - the rule catalog (patterns and default messages)
//! - **`spec`** - field declarations
//! - **`state`** - per-field and per-form state
//! - **`engine`** - keystroke masking, blur checks, rule swaps, submit verdicts
//! - **`listeners`** - (element, trigger) bookkeeping against the rendering layer
//! - **`notifier`** - the notification seam and a toast queue
//! - **`config`** - `forms.toml` loading
//! - **`login`** - the console login form

pub mod config;
pub mod engine;
pub mod error;
pub mod listeners;
pub mod login;
pub mod notifier;
pub mod spec;
pub mod state;

pub use cms_forms_validation::{self as validation, ValidationRule};

pub use config::{FormDefinition, FormsConfig};
pub use engine::{
    BlurOutcome, EngineOptions, EventOutcome, FieldFailure, FormEngine, InputEvent, KeyVerdict,
    Verdict,
};
pub use error::{FormError, FormResult};
pub use listeners::{ElementId, EventSource, ListenerRegistry, MountedElement, SyncReport};
pub use login::{Identifier, IdentifierMode, LoginCredentials, LoginForm};
pub use notifier::{Notifier, Severity, Toast, ToastNotifier, ToastOptions, UnknownSeverityError};
pub use spec::{FieldEvent, FieldSpec, Trigger};
pub use state::{FieldState, Form};
