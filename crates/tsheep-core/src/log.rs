//! Colourised line output for the installer
//!
//! Every user-visible line goes through [`Logger`], so installer and lister
//! output can be captured in tests by handing it a `Vec<u8>`.

use console::Style;
use std::io::{self, Write};

/// Colour of a logged line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Hint,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Info => Style::new().blue(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Hint => Style::new().cyan(),
        }
    }
}

/// Line writer with optional ANSI colouring
pub struct Logger<W: Write = io::Stdout> {
    out: W,
    colored: bool,
}

impl Logger<io::Stdout> {
    /// Logger on stdout, coloured when the terminal supports it
    #[must_use]
    pub fn stdout() -> Self {
        let colored = console::colors_enabled();
        Self::new(io::stdout(), colored)
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Write one line in the given tone
    pub fn line(&mut self, tone: Tone, message: impl AsRef<str>) {
        let message = message.as_ref();
        let result = if self.colored && tone != Tone::Plain {
            writeln!(
                self.out,
                "{}",
                tone.style().force_styling(true).apply_to(message)
            )
        } else {
            writeln!(self.out, "{message}")
        };
        // Nothing sensible to report a closed stdout to.
        if let Err(e) = result {
            tracing::debug!(error = %e, "failed to write log line");
        }
    }

    pub fn plain(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Plain, message);
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Info, message);
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Success, message);
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Warning, message);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Error, message);
    }

    pub fn hint(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Hint, message);
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
