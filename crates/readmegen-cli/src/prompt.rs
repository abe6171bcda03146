//! Terminal prompts behind a small trait, so `init` can be driven by a
//! script in tests.

use crate::error::CliResult;

/// The three questions `init` knows how to ask.
pub trait Prompter {
    /// Free text. An empty answer returns `default` when one is given.
    fn input(&self, prompt: &str, default: Option<&str>) -> CliResult<String>;

    /// Index into `items`. Escape cancels.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<usize>;

    /// Yes or no. Escape cancels.
    fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool>;

    /// Tell the user why their last answer was rejected.
    fn report(&self, message: &str);
}

/// Prompter for the current terminal.
#[cfg(feature = "interactive")]
pub fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
pub fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
pub use terminal::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod terminal {
    use std::io;

    use console::Term;
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use owo_colors::OwoColorize;

    use super::Prompter;
    use crate::error::{CliError, CliResult};

    /// [`Prompter`] over `dialoguer`, drawing on stderr.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
        term: Term,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
                term: Term::stderr(),
            }
        }
    }

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "terminal prompt failed".into(),
            source: io::Error::other(e),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&self, prompt: &str, default: Option<&str>) -> CliResult<String> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true);
            if let Some(default) = default {
                input = input.default(default.to_owned());
            }
            input.interact_text_on(&self.term).map_err(prompt_failed)
        }

        fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<usize> {
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact_on_opt(&self.term)
                .map_err(prompt_failed)?
                .ok_or(CliError::Cancelled)
        }

        fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact_on_opt(&self.term)
                .map_err(prompt_failed)?
                .ok_or(CliError::Cancelled)
        }

        fn report(&self, message: &str) {
            // Best effort.
            let _ = self
                .term
                .write_line(&format!("{} {}", "\u{2717}".red().bold(), message.red()));
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedPrompter;
