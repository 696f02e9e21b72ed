//! Contact Form Example
//!
//! Plays a scripted session against the contact form controller:
//! - an empty submit that shakes the form
//! - typing into each field with debounced feedback
//! - a valid submit through the simulated transport
//!
//! UI calls are printed to stdout; controller logs go to `contact-form.log`.

use std::fs::File;
use std::time::Duration;

use contact_form::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tokio::sync::mpsc;

// ============================================================================
// Console UI
// ============================================================================

struct ConsoleUi;

impl UiAdapter for ConsoleUi {
    fn render_field_result(&self, key: &str, valid: bool, message: &str) {
        if valid {
            println!("  {:<8} ✓", key);
        } else {
            println!("  {:<8} ✗ {}", key, message);
        }
    }

    fn clear_field_visual(&self, _key: &str) {}

    fn set_submit_loading(&self, loading: bool) {
        if loading {
            println!("Sending...");
        }
    }

    fn show_success(&self) {
        println!("Message sent! Thanks for reaching out.");
    }

    fn show_failure(&self, message: &str) {
        println!("Could not send: {}", message);
    }

    fn reset_all(&self) {
        println!("Form cleared.");
    }

    fn shake(&self, active: bool) {
        if active {
            println!("*shake*");
        }
    }
}

fn input(key: &str, value: &str) -> FormEvent {
    FormEvent::Input {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[tokio::main]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("contact-form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config = FormConfig::default().with_success_display(Duration::from_secs(1));
    let mut form = match ContactFormBuilder::new()
        .config(config)
        .build(ConsoleUi, SimulatedTransport::default())
    {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let (tx, rx) = mpsc::channel(32);
    let script = async move {
        let steps = [
            FormEvent::Submit,
            input("name", "Ada Lovelace"),
            FormEvent::Blur("name".into()),
            input("email", "ada@"),
            FormEvent::Blur("email".into()),
            input("email", "ada@example.com"),
            input("subject", "Engines"),
            input("message", "About the analytical engine."),
            FormEvent::Submit,
        ];
        for step in steps {
            if tx.send(step).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
    };

    tokio::join!(script, form.run(rx));
}
