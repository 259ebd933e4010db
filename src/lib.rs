//! Flint is a small, dynamically typed scripting language with lexical
//! scoping, first-class functions and single-inheritance classes. It is a
//! tree-walk interpreter with a hand-written recursive descent parser.
//!
//! Execution of a program is a one-shot pipeline over four stages:
//!
//! ## Scanning
//! The [`scanner`] converts source text into a flat list of tokens. Scan
//! errors (an unterminated string, a stray character) are reported as they
//! are found and scanning continues, so a single run surfaces every lexical
//! problem at once.
//!
//! ## Parsing
//! The [`parser`] is a recursive descent parser that turns the token list
//! into statements and expressions. On a syntax error it reports once,
//! discards tokens until the next statement boundary and keeps parsing. For
//! loops are desugared into while loops here.
//!
//! ## Resolving
//! The [`resolver`] is a static pass over the AST that binds every variable
//! reference to the lexical scope that declares it, recording the number of
//! frames between the two. It also rejects programs that are syntactically
//! valid but semantically wrong, like `return` at the top level or a class
//! inheriting from itself.
//!
//! ## Interpreting
//! The [`interpreter`] walks the resolved AST and evaluates it against a
//! chain of environment frames. Functions capture the frame they were
//! declared in; classes bundle their methods with an optional superclass.
//! Errors the earlier stages cannot see, like adding a string to a number,
//! are reported here and stop the program.
//!
//! The three stages before interpretation share one [`error::Reporter`],
//! which the driver consults to decide whether to keep going and which exit
//! code to use.

use std::fs;
use std::io::Write;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use error::Reporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The driver: owns the interpreter, the diagnostics sink and the expression
/// id counter that keeps resolution keys unique across prompt lines.
#[allow(non_camel_case_types)]
pub struct flint<'a> {
    interpreter: Interpreter<'a>,
    reporter: Reporter,
    next_id: usize,
}

impl<'a> flint<'a> {
    /// Creates a new driver. Program output (the `print` statement) is
    /// written to `output`.
    pub fn new(output: &'a mut dyn Write) -> Self {
        flint {
            interpreter: Interpreter::new(output),
            reporter: Reporter::new(),
            next_id: 0,
        }
    }

    /// Returns if a lexical, parse or resolution error was reported.
    pub fn had_error(&self) -> bool {
        self.reporter.had_error()
    }

    /// Returns if a runtime error was reported.
    pub fn had_runtime_error(&self) -> bool {
        self.reporter.had_runtime_error()
    }

    /// Runs a script file. The caller decides the exit code from the error
    /// state afterwards.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(&contents);
    }

    /// Runs an interactive prompt. The interpreter, its globals and its
    /// resolution map live across lines; error flags reset per line.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("to initialize the line editor");

        let history = home::home_dir().map(|dir| dir.join(".flint_history"));
        if let Some(history) = &history {
            let _ = editor.load_history(history);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    self.reporter.reset();
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(history) = &history {
            let _ = editor.save_history(history);
        }
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source, &mut self.reporter).scan_tokens();

        if self.reporter.had_error() {
            return;
        }

        let mut parser = Parser::new(tokens, self.next_id, &mut self.reporter);
        let statements = parser.parse();
        self.next_id = parser.next_id();

        if self.reporter.had_error() {
            return;
        }

        Resolver::new(&mut self.interpreter, &mut self.reporter).resolve(&statements);

        if self.reporter.had_error() {
            return;
        }

        self.interpreter.interpret(&statements, &mut self.reporter);
    }
}
