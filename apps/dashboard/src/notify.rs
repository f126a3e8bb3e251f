//! # Alerts, Notices and Prompts
//!
//! Every blocking interaction a page has with the admin goes through
//! [`Notifier`]: failure alerts, success notices, delete confirmations and
//! form prompts.
//!
//! ```text
//!   Page ──► Notifier ──┬──► TerminalNotifier  (stderr / stdout / inquire)
//!                       └──► ScriptedNotifier  (tests: records, answers)
//! ```

use inquire::{Confirm, Password, PasswordDisplayMode, Text};

use crate::error::AppResult;

/// Blocking interaction with the admin.
pub trait Notifier {
    /// Failure alert.
    fn alert(&self, message: &str);

    /// Success notice.
    fn notice(&self, message: &str);

    /// Yes/no question; `detail` is shown under the title.
    fn confirm(&self, title: &str, detail: Option<&str>) -> AppResult<bool>;

    /// Single line of input. `secret` hides what is typed.
    fn prompt(&self, label: &str, secret: bool) -> AppResult<String>;
}

// =============================================================================
// Terminal
// =============================================================================

/// Notifier for an interactive terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    /// `assume_yes` answers every confirmation with yes without asking.
    pub fn new(assume_yes: bool) -> Self {
        TerminalNotifier { assume_yes }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("✖ {}", message);
    }

    fn notice(&self, message: &str) {
        println!("✔ {}", message);
    }

    fn confirm(&self, title: &str, detail: Option<&str>) -> AppResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        let mut question = Confirm::new(title).with_default(false);
        if let Some(detail) = detail {
            question = question.with_help_message(detail);
        }
        Ok(question.prompt()?)
    }

    fn prompt(&self, label: &str, secret: bool) -> AppResult<String> {
        let answer = if secret {
            Password::new(label)
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?
        } else {
            Text::new(label).prompt()?
        };
        Ok(answer)
    }
}

// =============================================================================
// Scripted (tests)
// =============================================================================

#[cfg(test)]
pub use scripted::ScriptedNotifier;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let notifier = TerminalNotifier::new(true);
        assert!(notifier.confirm("Delete Item?", None).unwrap());
    }

    #[test]
    fn test_scripted_defaults_to_no() {
        let notifier = ScriptedNotifier::new();
        assert!(!notifier.confirm("Delete Item?", Some("sure?")).unwrap());
        assert_eq!(notifier.confirms.borrow().len(), 1);
        assert!(notifier.prompt("Email", false).is_err());
    }
}
