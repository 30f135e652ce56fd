//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the source text is attached, labels are rendered as
//! `--> file:line:col` headers followed by the source line and an underline.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceContext<'src> {
    text: &'src str,
    lines: LineOffsetTable,
    path: Option<String>,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach source text so labels render as line/column snippets.
    #[must_use]
    pub fn with_source(mut self, text: &'src str) -> Self {
        self.source = Some(SourceContext {
            text,
            lines: LineOffsetTable::build(text),
            path: None,
        });
        self
    }

    /// Name the attached source in `-->` headers.
    ///
    /// Has no effect unless [`with_source`](Self::with_source) was called.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        if let Some(source) = &mut self.source {
            source.path = Some(path.into());
        }
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label_message(&mut self, label: &Label) {
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&label.message, color);
    }

    /// Render a label without source context: `--> 3..8: message`.
    fn write_bare_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.write_label_message(label);
        let _ = writeln!(self.writer);
    }

    /// Render a label as a snippet of the attached source.
    fn write_snippet_label(&mut self, label: &Label) {
        let Some(source) = &self.source else {
            self.write_bare_label(label);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
        let line_text = source
            .lines
            .line_text(source.text, line)
            .unwrap_or_default()
            .to_string();
        let header = match &source.path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };

        // Underline stops at the end of the first line of the span.
        let line_chars = line_text.chars().count();
        let start_col = (col as usize).saturating_sub(1);
        let span_chars = source
            .text
            .get(label.span.to_range())
            .map_or(0, |text| text.chars().count());
        let width = span_chars
            .min(line_chars.saturating_sub(start_col))
            .max(1);
        let mark = if label.is_primary { "^" } else { "-" };

        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        let _ = writeln!(self.writer, "{pad}--> {header}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{gutter} | {line_text}");
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(start_col));
        let underline = mark.repeat(width);
        if label.is_primary {
            self.write_colored(&underline, colors::ERROR);
        } else {
            self.write_colored(&underline, colors::SECONDARY);
        }
        let _ = write!(self.writer, " ");
        self.write_label_message(label);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_snippet_label(label);
            } else {
                self.write_bare_label(label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
