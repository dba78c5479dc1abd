//! Contains the entry point of the Ember front-end: parsing a source file
//! given on the command line, or an interactive read-parse-print loop when no
//! file is given.

use std::{
    cell::Cell,
    fmt::Display,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use ember_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use ember_lexical::lexer::Lexer;
use ember_syntax::parser;

/// The prompt printed before every line the read-parse-print loop reads.
const PROMPT: &str = ">> ";

/// The command line arguments of the `ember` binary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Parser)]
#[clap(name = "ember", about = "The Ember programming language front-end.")]
pub struct Argument {
    /// The source file to parse; starts an interactive session when omitted.
    pub file: Option<PathBuf>,

    /// Prints the syntax tree of the program instead of its canonical
    /// rendering.
    #[clap(long)]
    pub dump_syntax: bool,
}

/// A diagnostic handler that prints every diagnostic it receives to the
/// standard error stream and remembers whether it has printed anything.
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    const fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Runs the program with the given command line arguments, returning its exit
/// code.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    match argument.file {
        Some(file) => run_file(&file, argument.dump_syntax),
        None => run_interactive(argument.dump_syntax),
    }
}

fn print_program(program: &ember_syntax::syntax_tree::program::Program, dump_syntax: bool) {
    if dump_syntax {
        println!("{program:#?}");
    } else {
        println!("{program}");
    }
}

fn run_file(path: &Path, dump_syntax: bool) -> ExitCode {
    let source_file = match SourceFile::load(path.to_owned()) {
        Ok(source_file) => source_file,
        Err(source_file::Error::IoError(error)) => {
            eprintln!(
                "{}",
                Message::new(Severity::Error, format!("{}: {error}", path.display()))
            );
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::new();
    let mut parser = parser::Parser::new(Lexer::new(&source_file));
    let program = parser.parse_program(&printer);

    if printer.has_printed() {
        return ExitCode::FAILURE;
    }

    print_program(&program, dump_syntax);
    ExitCode::SUCCESS
}

fn run_interactive(dump_syntax: bool) -> ExitCode {
    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_owned());
    println!("Hello {user}! This is the Ember programming language.");
    println!("Feel free to type in commands; press Ctrl+D to exit.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        if let Err(error) = io::stdout().flush() {
            eprintln!("{}", Message::new(Severity::Error, error));
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            // end of input
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(error) => {
                eprintln!("{}", Message::new(Severity::Error, error));
                return ExitCode::FAILURE;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        let source_file = SourceFile::new(line.clone(), PathBuf::from("<interactive>"));
        let printer = Printer::new();
        let mut parser = parser::Parser::new(Lexer::new(&source_file));
        let program = parser.parse_program(&printer);

        // the errors have already been printed; the malformed parts of the
        // line are simply absent from the printed program
        print_program(&program, dump_syntax);
    }
}
