//! Console logger shared by the git workflow steps

use colored::*;
use std::io::Write;

/// Logger for git operations with consistent formatting
///
/// Every line is prefixed with the repository name in cyan/bold. Commands
/// are echoed the way they would be typed in a shell so the output reads
/// like a transcript of the equivalent `git` session.
///
/// ## Example
///
/// ```rust,no_run
/// use gitploy::git::Logger;
///
/// let logger = Logger::new("gitploy-dev");
/// logger.echo("git push");
/// logger.success("Successfully pushed");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    label: String,
    /// Route all output to stderr, keeping stdout for machine-readable output
    stderr: bool,
}

impl Logger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stderr: false,
        }
    }

    /// Same logger, writing to stderr
    pub fn with_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        if self.stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Echo the shell equivalent of the step about to run
    pub fn echo(&self, command: &str) {
        self.emit(format_args!(
            "{} | {} {}",
            self.label.cyan().bold(),
            "$".dimmed(),
            command.bold()
        ));
    }

    pub fn info(&self, msg: &str) {
        self.emit(format_args!("{} | {}", self.label.cyan().bold(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.emit(format_args!("{} | {}", self.label.cyan().bold(), msg.green()));
    }

    pub fn warn(&self, msg: &str) {
        self.emit(format_args!("{} | {}", self.label.cyan().bold(), msg.yellow()));
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} | {}", self.label.cyan().bold(), msg.red());
    }

    /// Print multi-line detail output (commit dumps, status listings) indented
    pub fn block(&self, text: &str) {
        for line in text.lines() {
            self.emit(format_args!("{} |   {}", self.label.cyan().bold(), line));
        }
    }

    /// Overwrite the current line with a progress update
    pub fn progress(&self, msg: &str, done: bool) {
        let line = format!("\r{} | {}", self.label.cyan().bold(), msg.dimmed());
        let end = if done { "\n" } else { "" };
        if self.stderr {
            let mut err = std::io::stderr();
            let _ = write!(err, "{line}{end}");
            let _ = err.flush();
        } else {
            let mut out = std::io::stdout();
            let _ = write!(out, "{line}{end}");
            let _ = out.flush();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("gitploy")
    }
}
