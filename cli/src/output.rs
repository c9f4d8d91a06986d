//! Terminal output utilities for styled CLI output.
//!
//! All user-facing text goes through [`Output`] so styling stays consistent.

use console::{Term, style};
use std::fmt::Display;

#[cfg(test)]
use std::sync::{Arc, Mutex};

enum Sink {
    Term(Term),
    /// Captured plain text, for tests.
    #[cfg(test)]
    Buffer(Arc<Mutex<String>>),
}

/// Terminal output helper for consistent styled output.
pub struct Output {
    sink: Sink,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            sink: Sink::Term(Term::stdout()),
        }
    }

    /// Output that records unstyled lines into the returned buffer.
    #[cfg(test)]
    pub fn captured() -> (Self, Arc<Mutex<String>>) {
        let buffer = Arc::new(Mutex::new(String::new()));
        let out = Self {
            sink: Sink::Buffer(Arc::clone(&buffer)),
        };
        (out, buffer)
    }

    fn write_line(&self, line: &str) {
        match &self.sink {
            Sink::Term(term) => drop(term.write_line(line)),
            #[cfg(test)]
            Sink::Buffer(buffer) => {
                if let Ok(mut buffer) = buffer.lock() {
                    buffer.push_str(&console::strip_ansi_codes(line));
                    buffer.push('\n');
                }
            }
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        self.write_line(&format!("{} {}", style("✓").green().bold(), message));
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        self.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        self.write_line(&message.to_string());
    }

    pub fn newline(&self) {
        self.write_line("");
    }

    /// Print a header with emphasis.
    pub fn header(&self, message: impl Display) {
        self.write_line(&style(message).bold().cyan().to_string());
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        self.write_line(&style(message).dim().to_string());
    }

    /// Print the status filter bar; the selected button is highlighted.
    pub fn filter_bar(&self, buttons: impl IntoIterator<Item = (String, bool)>) {
        let rendered: Vec<String> = buttons
            .into_iter()
            .map(|(caption, selected)| {
                if selected {
                    style(format!("[{caption}]")).bold().blue().to_string()
                } else {
                    style(format!(" {caption} ")).dim().to_string()
                }
            })
            .collect();
        self.write_line(&rendered.join(" "));
    }

    /// Print a labeled value.
    pub fn labeled(&self, label: impl Display, value: impl Display) {
        self.write_line(&format!("{}: {}", style(label).dim(), value));
    }

    /// Print a total summary line.
    pub fn total(&self, shown: usize, total: usize) {
        self.write_line(&format!(
            "\n{}: {}",
            style("Showing").bold(),
            style(format!("{shown} of {total} application(s)")).cyan()
        ));
    }
}
