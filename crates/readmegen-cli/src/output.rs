//! Everything `readmegen` prints to stdout goes through [`OutputManager`].

use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour is off when the flag or config asks, or when stdout is not a
    /// terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Write `msg` unless quiet, styled by `style` when colour is on.
    fn emit(&self, msg: &str, style: impl FnOnce(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(msg)
        } else {
            self.term.write_line(&style(msg))
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg, |m| m.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(&format!("\u{2713} {msg}"), |m| m.green().to_string())
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(&format!("\u{26a0} {msg}"), |m| m.yellow().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(&format!("\u{2139} {msg}"), |m| m.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(text, |t| t.cyan().bold().to_string())
    }

    /// Secondary detail such as template previews.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        self.emit(text, |t| t.dimmed().to_string())
    }

    /// Spinner on stderr while slow work runs.
    ///
    /// `None` in quiet mode or when stderr is not a terminal, so piped
    /// output stays clean. Callers finish it with `finish_and_clear`.
    pub fn spinner(&self, msg: &str) -> Option<ProgressBar> {
        if self.quiet || !io::stderr().is_terminal() {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_owned());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}
