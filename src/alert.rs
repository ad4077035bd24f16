//! Session-change alerts.
//!
//! Every switch rings the terminal bell, shows a desktop notification, and
//! optionally speaks the announcement. None of these may abort the timer, so
//! failures are only logged.

use std::io::Write;
use std::process::{Command, Stdio};

use notify_rust::Notification;

use crate::config::NotificationConfig;
use crate::timer::SessionKind;

/// Receives session-change events.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Announce that `next` is the upcoming session.
    fn notify(&mut self, next: SessionKind);
}

/// Bell, desktop notification, and optional speech.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    config: NotificationConfig,
}

impl DesktopNotifier {
    /// Create a notifier from the notifications config section.
    #[must_use]
    pub const fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    fn ring_bell() {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::warn!("Failed to ring terminal bell: {e}");
        }
    }

    fn show_desktop(next: SessionKind) {
        let result = Notification::new()
            .summary(&format!("Pomodoro: {next}"))
            .body(next.announcement())
            .appname("pomodoro")
            .show();

        if let Err(e) = result {
            tracing::warn!("Desktop notification failed: {e}");
        }
    }

    fn speak(command: &str, message: &str) {
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return;
        };

        let spawned = Command::new(program)
            .args(parts)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            tracing::warn!("Speech command '{program}' failed: {e}");
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, next: SessionKind) {
        tracing::info!("Session change: {next} is up next");

        if self.config.bell {
            Self::ring_bell();
        }
        if self.config.desktop {
            Self::show_desktop(next);
        }
        if let Some(command) = self.config.speech_command.as_deref() {
            Self::speak(command, next.announcement());
        }
    }
}
