use crate::object::Object;
use crate::token::{Token, Type};

/// Collects the error state of a single run.
///
/// The driver owns one reporter and passes it by mutable reference into the
/// scanner, parser, resolver and interpreter. Static errors suppress the
/// stages after the one that reported them; runtime errors stop execution.
#[derive(Debug, Default)]
pub struct Reporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Returns if a lexical, parse or resolution error was reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Returns if a runtime error was reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Resets the error state between prompt lines.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Every error type must implement this trait.
pub trait Error {
    /// Prints the error message and records it in the reporter.
    fn throw(&self, reporter: &mut Reporter);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn throw(&self, reporter: &mut Reporter) {
        eprintln!("[line {line}] Error: {message}", line = self.line, message = self.message);
        reporter.had_error = true;
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn throw(&self, reporter: &mut Reporter) {
        if self.token.r#type == Type::EOF {
            eprintln!(
                "[line {line}] Error at end: {message}",
                line = self.token.line,
                message = self.message
            );
        } else {
            eprintln!(
                "[line {line}] Error at '{lexeme}': {message}",
                line = self.token.line,
                lexeme = self.token.lexeme,
                message = self.message
            );
        }

        reporter.had_error = true;
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn throw(&self, reporter: &mut Reporter) {
        eprintln!(
            "[line {line}] Error at '{lexeme}': {message}",
            line = self.token.line,
            lexeme = self.token.lexeme,
            message = self.message
        );

        reporter.had_error = true;
    }
}

/// Represents an error that occurs during runtime.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn throw(&self, reporter: &mut Reporter) {
        eprintln!(
            "{message}\n[line {line}]",
            message = self.message,
            line = self.token.line
        );

        reporter.had_runtime_error = true;
    }
}

/// Non-error unwinds used by the interpreter as internal control flow.
///
/// Statement execution propagates these up the recursive evaluator. A return
/// is caught by the innermost function call, break and continue by the
/// innermost loop. Runtime errors travel the same channel so that every exit
/// path restores the enclosing environment frames, but only they surface to
/// the user.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Break,
    Continue,
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
