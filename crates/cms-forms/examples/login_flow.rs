//! Walks the login form through a failed and a successful submit.
//!
//! Run with: cargo run -p cms-forms --example login_flow

use cms_forms::login::{MOBILE_FIELD, PASSWORD_FIELD};
use cms_forms::{FormEngine, FormsConfig, LoginForm, ToastNotifier};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let config = FormsConfig::load_default()?;
    let engine = FormEngine::with_options(ToastNotifier::new(config.toast), config.engine);
    let mut login = LoginForm::new(&engine)?;

    if let Err(verdict) = login.submit() {
        println!("Submit blocked: {:?}", verdict.first_failure_message);
    }

    login.toggle_identifier()?;
    for ch in "98765x43210".chars() {
        engine.on_char(login.form_mut(), MOBILE_FIELD, ch)?;
    }
    engine.on_focus_lost(login.form_mut(), MOBILE_FIELD)?;
    login.form_mut().set_value(PASSWORD_FIELD, "Pass1234")?;

    match login.submit() {
        Ok(credentials) => println!("Payload: {}", serde_json::to_string(&credentials)?),
        Err(verdict) => println!("Still invalid: {:?}", verdict.failures),
    }

    for toast in engine.notifier().drain() {
        println!("[{}] {}: {}", toast.severity, toast.title, toast.message);
    }
    Ok(())
}
