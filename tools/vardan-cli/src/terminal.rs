//! Terminal implementations of the cart's user-interaction seams.

use dialoguer::Confirm;
use vardan_commerce::cart::{LinkOpener, Prompter};

use crate::output::Output;

/// Confirmations through an interactive prompt; notices through [`Output`].
pub struct TerminalPrompter {
    output: Output,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(output: Output, assume_yes: bool) -> Self {
        Self { output, assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // A closed stdin reads as "no".
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.output.warn(message);
    }

    fn notify(&mut self, message: &str) {
        self.output.success(message);
    }
}

/// Keeps the last opened link so the command can print it.
#[derive(Debug, Default)]
pub struct PrintedLink {
    last: Option<String>,
}

impl PrintedLink {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl LinkOpener for PrintedLink {
    fn open(&mut self, url: &str) {
        self.last = Some(url.to_string());
    }
}
