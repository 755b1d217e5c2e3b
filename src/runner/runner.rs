use crate::environment::Environment;
use crate::evaluator::eval;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::repl;
use encoding_rs::UTF_8;
use encoding_rs_io::DecodeReaderBytesBuilder;
use log::debug;
use std::fs::File;
use std::io;
use std::io::Read;

/// Runs a script file to completion. Parse errors go to stderr and exit
/// with 65; a runtime error object exits with 70. Scripts talk through
/// `puts`, so the final program value is not printed.
pub fn run_file(path: &str) -> io::Result<()> {
    debug!("running script {path}");

    let file = File::open(path)?;
    // decode as UTF-8, stripping a BOM and replacing anything malformed
    let mut reader = DecodeReaderBytesBuilder::new()
        .encoding(Some(UTF_8))
        .build(file);
    let mut source = String::new();
    reader.read_to_string(&mut source)?;

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("{path}: parser errors:");
        for message in parser.errors() {
            eprintln!("\t{message}");
        }
        std::process::exit(65);
    }

    let env = Environment::new_global();
    let evaluated = eval(&program, &env);
    if evaluated.is_error() {
        eprintln!("{evaluated}");
        std::process::exit(70);
    }
    Ok(())
}

/// Greets the current user and hands control to the interactive loop.
pub fn run_prompt() {
    let username = users::get_current_username()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "there".to_string());

    println!("Hello {username}! This is the Lemur programming language!");
    println!("Feel free to type in commands, or 'quit' to leave.");
    repl::start();
}
