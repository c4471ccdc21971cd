//! Status spinner shown while a request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner line carrying the tutor's status text
///
/// Hidden entirely when progress is disabled (e.g. `--quiet`).
pub struct StatusSpinner {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl StatusSpinner {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Show `message`, starting the spinner if needed.
    pub fn show(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match bar.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(message.to_string());
                pb.enable_steady_tick(Duration::from_millis(80));
                *bar = Some(pb);
            }
        }
    }

    /// Remove the spinner line, if any.
    pub fn clear(&self) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl Drop for StatusSpinner {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_never_activates() {
        let spinner = StatusSpinner::new(false);
        spinner.show("Calling /v1/chat/completions ...");
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_show_then_clear() {
        let spinner = StatusSpinner::new(true);
        spinner.show("Calling /v1/chat/completions ...");
        assert!(spinner.is_active());
        spinner.show("Done.");
        assert!(spinner.is_active());
        spinner.clear();
        assert!(!spinner.is_active());
    }
}
