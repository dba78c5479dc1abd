//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// The display points at the span's starting line:
///
/// ```text
///  --> <path>:<line>:<column>
///   ┃
/// 1 ┃ let = 5;
///   ┃     help: ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_location = self.span.start_location();
        let line = self
            .span
            .source_file()
            .get_line(start_location.line)
            .unwrap();

        // the column (exclusive) at which the underline stops; a span that
        // continues past this line is underlined to the end of the line
        let end_column = match self.span.end_location() {
            Some(end_location) if end_location.line == start_location.line => end_location.column,
            _ => line.chars().count() + 1,
        };

        let line_number = start_location.line.to_string();
        let gutter_width = line_number.len();

        writeln!(
            f,
            "{:gutter_width$} {} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().full_path().display(),
            start_location.line,
            start_location.column
        )?;

        writeln!(
            f,
            "{:gutter_width$} {}",
            "",
            Style::Bold.with(Color::Cyan.with("┃"))
        )?;

        write!(
            f,
            "{} {} ",
            Style::Bold.with(Color::Cyan.with(&line_number)),
            Style::Bold.with(Color::Cyan.with("┃"))
        )?;

        for (index, char) in line.chars().enumerate() {
            let column = index + 1;

            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                if column >= start_location.column && column < end_column {
                    write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                    )?;
                } else {
                    write!(f, "{char}")?;
                }
            }
        }
        writeln!(f)?;

        if let Some(help_display) = &self.help_display {
            write!(
                f,
                "{:gutter_width$} {} ",
                "",
                Style::Bold.with(Color::Cyan.with("┃"))
            )?;

            for char in line.chars().take(start_location.column - 1) {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            writeln!(f, "{}: {help_display}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}
