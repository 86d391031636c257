//! Colored, line-oriented console logger.
//!
//! Each call writes exactly one line of the form
//!
//! ```text
//! ESC[<color>m [<label>]ESC[0m <message>
//! ```
//!
//! flushes the stream, then blocks the calling thread for a fixed pause
//! ([`DEFAULT_PAUSE`] unless configured otherwise). The pause serialises log
//! calls; callers that need to emit lines quickly construct a [`Console`]
//! with a shorter pause.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

/// Pause applied after every line when none is configured.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

const RESET: &str = "\x1b[0m";

/// Classification of a log line. Controls only its display template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Display template for a severity: SGR color code and bracketed label.
struct Template {
    color: &'static str,
    label: &'static str,
}

// Indexed by `Severity as usize`.
const TEMPLATES: [Template; 4] = [
    Template { color: "\x1b[36m", label: "[info]" },
    Template { color: "\x1b[32m", label: "[success]" },
    Template { color: "\x1b[33m", label: "[warning]" },
    Template { color: "\x1b[31m", label: "[error]" },
];

impl Severity {
    /// Parse a severity tag. Matching is exact; anything else, including
    /// differently cased or padded tags, falls back to [`Severity::Info`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Bracketed label, e.g. `[error]`.
    pub fn label(self) -> &'static str {
        self.template().label
    }

    fn template(self) -> &'static Template {
        &TEMPLATES[self as usize]
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        f.write_str(&label[1..label.len() - 1])
    }
}

/// Render a single log line (without the trailing newline).
pub fn format_log(message: &str, severity: Severity) -> String {
    let t = severity.template();
    format!("{} {}{RESET} {message}", t.color, t.label)
}

/// Line writer over any [`Write`] sink with a fixed post-write pause.
#[derive(Debug)]
pub struct Console<W> {
    writer: W,
    pause: Duration,
}

impl<W: Write> Console<W> {
    /// Wrap `writer`, sleeping for `pause` after each line.
    pub fn new(writer: W, pause: Duration) -> Self {
        Self { writer, pause }
    }

    /// Write one formatted line, flush, then pause.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer. The pause is skipped
    /// if the write fails.
    pub fn log(&mut self, message: &str, severity: Severity) -> io::Result<()> {
        writeln!(self.writer, "{}", format_log(message, severity))?;
        self.writer.flush()?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }

    /// Consume the console, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Console<io::Stdout> {
    /// Console over the process's standard output.
    pub fn stdout(pause: Duration) -> Self {
        Self::new(io::stdout(), pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn capture(message: &str, tag: &str) -> String {
        let mut console = Console::new(Vec::new(), Duration::ZERO);
        console.log(message, Severity::from_tag(tag)).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn error_line_is_red_with_label() {
        let out = capture("hi", "error");
        assert_eq!(out, "\x1b[31m [error]\x1b[0m hi\n");
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        let out = capture("hi", "unknown-severity");
        assert_eq!(out, "\x1b[36m [info]\x1b[0m hi\n");
    }

    #[test]
    fn each_severity_has_its_own_template() {
        assert!(capture("ok", "success").starts_with("\x1b[32m [success]"));
        assert!(capture("careful", "warning").starts_with("\x1b[33m [warning]"));
        assert!(capture("fyi", "info").starts_with("\x1b[36m [info]"));
    }

    #[test]
    fn tags_match_exactly() {
        assert_eq!(Severity::from_tag("error"), Severity::Error);
        assert_eq!(Severity::from_tag("ERROR"), Severity::Info);
        assert_eq!(Severity::from_tag(" error"), Severity::Info);
        assert_eq!(Severity::from_tag("Warning"), Severity::Info);
        assert_eq!("".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!(capture("hi", "ERROR"), "\x1b[36m [info]\x1b[0m hi\n");
    }

    #[test]
    fn display_is_bare_tag() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::default().to_string(), "info");
    }

    #[test]
    fn lines_accumulate_in_order() {
        let mut console = Console::new(Vec::new(), Duration::ZERO);
        console.log("first", Severity::Info).unwrap();
        console.log("second", Severity::Error).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].contains("[error]"));
    }

    #[test]
    fn pause_blocks_after_write() {
        let pause = Duration::from_millis(30);
        let mut console = Console::new(Vec::new(), pause);
        let start = Instant::now();
        console.log("wait", Severity::Info).unwrap();
        assert!(start.elapsed() >= pause);
    }
}
