//! Desktop notification hook for coding-assistant events.
//!
//! The assistant emits lifecycle events, each tagged with a `type`. When it
//! stops to ask for permission (`permission.asked`), the hook raises a
//! desktop notification through a [`Notifier`]. Notifying is fire-and-forget:
//! failures are logged and otherwise ignored.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::io;
//!
//! use amlich::notification::{Event, EventHook, Notifier};
//!
//! #[derive(Default)]
//! struct Counter(Cell<usize>);
//!
//! impl Notifier for Counter {
//!     fn notify(&self, _title: &str, _message: &str) -> io::Result<()> {
//!         self.0.set(self.0.get() + 1);
//!         Ok(())
//!     }
//! }
//!
//! let hook = EventHook::new(Counter::default());
//! hook.handle(&Event::new("session.idle"));
//! hook.handle(&Event::new("permission.asked"));
//! assert_eq!(1, hook.notifier().0.get());
//! ```

use std::io::{self, BufRead};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{debug, info, warn};

/// Event type that triggers a notification.
pub const PERMISSION_ASKED: &str = "permission.asked";
/// Notification title.
pub const TITLE: &str = "OpenCode";
/// Notification body.
pub const MESSAGE: &str = "Approval needed";
/// Program run by [`CommandNotifier::default`].
pub const DEFAULT_COMMAND: &str = "notify-netcat";

/// An application lifecycle event. Fields other than `type` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Something able to show a notification to the user.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> io::Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, title: &str, message: &str) -> io::Result<()> {
        (**self).notify(title, message)
    }
}

/// Runs an external program as `<program> <title> <message>`.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, title: &str, message: &str) -> io::Result<()> {
        let status = Command::new(&self.program)
            .arg(title)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Dispatches events to a [`Notifier`].
#[derive(Debug)]
pub struct EventHook<N> {
    notifier: N,
}

impl<N: Notifier> EventHook<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handles one event. Returns `true` if a notification was attempted,
    /// whether or not it succeeded.
    pub fn handle(&self, event: &Event) -> bool {
        if event.kind != PERMISSION_ASKED {
            debug!(kind = %event.kind, "ignoring event");
            return false;
        }
        match self.notifier.notify(TITLE, MESSAGE) {
            Ok(()) => info!("permission request notified"),
            Err(e) => warn!(error = %e, "notification failed"),
        }
        true
    }

    /// Handles one event encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not an object with a string
    /// `type` field.
    pub fn handle_json(&self, json: &str) -> Result<bool, serde_json::Error> {
        let event: Event = serde_json::from_str(json)?;
        Ok(self.handle(&event))
    }

    /// Handles newline-delimited JSON events until end of input. Blank lines
    /// are skipped; malformed ones are logged and skipped.
    ///
    /// Returns the number of notifications attempted.
    ///
    /// # Errors
    ///
    /// Only read errors of `input` are returned.
    pub fn run<R: BufRead>(&self, input: R) -> io::Result<usize> {
        let mut notified = 0;
        for (line_num, line) in (1usize..).zip(input.lines()) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.handle_json(&line) {
                Ok(true) => notified += 1,
                Ok(false) => {}
                Err(e) => warn!(line_num, error = %e, "skipping malformed event"),
            }
        }
        Ok(notified)
    }
}
