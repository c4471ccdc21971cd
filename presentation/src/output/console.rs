//! Console transcript view

use crate::progress::StatusSpinner;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tutor_application::TranscriptView;
use tutor_domain::Role;

/// Colored role prefix for a transcript line
pub fn role_prefix(role: Role) -> String {
    match role {
        Role::User => "> ".bold().to_string(),
        Role::Assistant => "assistant> ".cyan().bold().to_string(),
        Role::System => "system> ".yellow().bold().to_string(),
    }
}

/// [`TranscriptView`] printing to a terminal
///
/// Entries are written as `<role>> <text>`. The newest entry stays open so
/// an incremental reveal can keep appending to it; the next entry or status
/// line terminates it. While submit is disabled the status shows as a
/// spinner, otherwise as a dimmed line. The last busy status is printed once
/// submit is re-enabled.
pub struct ConsoleTranscriptView<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    spinner: StatusSpinner,
    show_status: bool,
    echo_user: bool,
    line_open: AtomicBool,
    submit_enabled: AtomicBool,
    busy_status: Mutex<Option<String>>,
}

impl ConsoleTranscriptView {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleTranscriptView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            spinner: StatusSpinner::new(true),
            show_status: true,
            echo_user: true,
            line_open: AtomicBool::new(false),
            submit_enabled: AtomicBool::new(true),
            busy_status: Mutex::new(None),
        }
    }

    /// Hide spinner and status lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_status = !quiet;
        self.spinner = StatusSpinner::new(!quiet);
        self
    }

    /// Whether user turns are printed. A line editor already shows them.
    pub fn with_user_echo(mut self, echo: bool) -> Self {
        self.echo_user = echo;
        self
    }

    /// Terminate the open entry, if any.
    pub fn finish(&self) {
        let mut out = self.out();
        self.close_line(&mut out);
        let _ = out.flush();
    }

    pub fn into_inner(self) -> W {
        self.spinner.clear();
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn out(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn close_line(&self, out: &mut W) {
        if self.line_open.swap(false, Ordering::SeqCst) {
            let _ = writeln!(out);
        }
    }

    fn print_status(&self, status: &str) {
        let mut out = self.out();
        self.close_line(&mut out);
        let _ = writeln!(out, "{}", status.dimmed());
        let _ = out.flush();
    }
}

impl<W: Write + Send> TranscriptView for ConsoleTranscriptView<W> {
    fn append_entry(&self, role: Role, content: &str) {
        if role == Role::User && !self.echo_user {
            return;
        }
        self.spinner.clear();

        let mut out = self.out();
        self.close_line(&mut out);
        let _ = write!(out, "{}{}", role_prefix(role), content);
        let _ = out.flush();
        self.line_open.store(true, Ordering::SeqCst);
    }

    fn append_to_last(&self, chunk: &str) {
        let mut out = self.out();
        let _ = write!(out, "{}", chunk);
        let _ = out.flush();
    }

    fn set_status(&self, status: &str) {
        if !self.show_status {
            return;
        }
        if !self.submit_enabled.load(Ordering::SeqCst) {
            self.spinner.show(status);
            *self.busy_status.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(status.to_string());
            return;
        }
        self.print_status(status);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.store(enabled, Ordering::SeqCst);
        if !enabled {
            return;
        }

        self.spinner.clear();
        let last = self
            .busy_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match last {
            Some(status) => self.print_status(&status),
            None => self.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ConsoleTranscriptView<Vec<u8>> {
        colored::control::set_override(false);
        ConsoleTranscriptView::new(Vec::new()).quiet(false)
    }

    fn text(view: ConsoleTranscriptView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_entries_carry_role_prefixes() {
        let view = view();
        view.append_entry(Role::User, "What is X?");
        view.append_entry(Role::Assistant, "X is Y.");
        view.append_entry(Role::System, "Dummy mode enabled.");
        view.finish();

        assert_eq!(
            text(view),
            "> What is X?\nassistant> X is Y.\nsystem> Dummy mode enabled.\n"
        );
    }

    #[test]
    fn test_incremental_chunks_extend_last_entry() {
        let view = view();
        view.append_entry(Role::Assistant, "");
        for chunk in ["Hel", "lo ", "the", "re"] {
            view.append_to_last(chunk);
        }
        view.set_submit_enabled(true);

        assert_eq!(text(view), "assistant> Hello there\n");
    }

    #[test]
    fn test_user_echo_can_be_disabled() {
        let view = view().with_user_echo(false);
        view.append_entry(Role::User, "hidden");
        view.append_entry(Role::Assistant, "shown");
        view.finish();

        assert_eq!(text(view), "assistant> shown\n");
    }

    #[test]
    fn test_status_prints_when_idle_and_spins_when_busy() {
        let view = view();
        view.append_entry(Role::Assistant, "Tutor ready.");
        view.set_status("Ready.");

        view.set_submit_enabled(false);
        view.set_status("Calling /v1/chat/completions ...");
        view.set_status("Done.");
        view.set_submit_enabled(true);

        assert_eq!(text(view), "assistant> Tutor ready.\nReady.\nDone.\n");
    }

    #[test]
    fn test_failure_status_outlives_the_spinner() {
        let view = view();
        view.set_submit_enabled(false);
        view.set_status("Calling /v1/chat/completions ...");
        view.append_entry(Role::Assistant, "Request failed: HTTP 502");
        view.set_status("Error calling API.");
        view.set_submit_enabled(true);

        view.set_submit_enabled(false);
        view.set_submit_enabled(true);

        assert_eq!(
            text(view),
            "assistant> Request failed: HTTP 502\nError calling API.\n"
        );
    }

    #[test]
    fn test_quiet_hides_status() {
        colored::control::set_override(false);
        let view = ConsoleTranscriptView::new(Vec::new()).quiet(true);
        view.set_status("Ready.");
        assert_eq!(text(view), "");
    }
}
