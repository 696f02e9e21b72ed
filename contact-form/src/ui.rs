//! Presentation seam.
//!
//! The controller never touches presentation directly. Everything visible goes
//! through a [`UiAdapter`], so a DOM binding, a terminal front end or a test
//! recorder can sit behind the same form logic.

/// Receives validation and submission results and renders them.
pub trait UiAdapter: Send + Sync {
    /// Show a field's validation outcome. `message` is empty when valid.
    fn render_field_result(&self, key: &str, valid: bool, message: &str);

    /// Remove error styling and message from a field.
    fn clear_field_visual(&self, key: &str);

    /// Toggle the submit control's loading state.
    fn set_submit_loading(&self, loading: bool);

    /// Show the submission success indicator.
    fn show_success(&self);

    /// Show a submission failure message.
    fn show_failure(&self, message: &str);

    /// Clear every field, message and indicator.
    fn reset_all(&self);

    /// Start or stop the invalid-submit shake.
    fn shake(&self, active: bool);
}

/// Adapter that writes every UI call to the `log` facade.
///
/// Useful for headless runs and as a starting point for real adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUi;

impl UiAdapter for LogUi {
    fn render_field_result(&self, key: &str, valid: bool, message: &str) {
        if valid {
            log::info!("[{}] ok", key);
        } else {
            log::info!("[{}] {}", key, message);
        }
    }

    fn clear_field_visual(&self, key: &str) {
        log::debug!("[{}] cleared", key);
    }

    fn set_submit_loading(&self, loading: bool) {
        log::info!("submit loading: {}", loading);
    }

    fn show_success(&self) {
        log::info!("Message sent");
    }

    fn show_failure(&self, message: &str) {
        log::info!("Send failed: {}", message);
    }

    fn reset_all(&self) {
        log::info!("form reset");
    }

    fn shake(&self, active: bool) {
        log::debug!("shake: {}", active);
    }
}
