use crate::environment::Environment;
use crate::evaluator::eval;
use crate::lexer::Lexer;
use crate::parser::Parser;
use colored::Colorize;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";

const LEMUR_FACE: &str = r#"
   /\_____/\
  ( o     o )
  (  =^_^=  )
   (")___(")
"#;

/*
One environment lives for the whole session, so bindings made on one line
are visible on the next. Parse errors never reach the evaluator; they are
printed under a fixed banner, one indented line each, and the loop moves
on.
*/
pub fn start() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("could not initialise the line editor: {err}");
            return;
        }
    };
    let env = Environment::new_global();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(line);

                let lexer = Lexer::new(line);
                let mut parser = Parser::new(lexer);
                let program = parser.parse_program();

                if !parser.errors().is_empty() {
                    print_parse_errors(parser.errors());
                    continue;
                }

                let evaluated = eval(&program, &env);
                debug!("evaluated line to a {}", evaluated.kind());
                println!("{evaluated}");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("could not read line: {err}");
                break;
            }
        }
    }
}

fn print_parse_errors(errors: &[String]) {
    println!("{LEMUR_FACE}");
    println!(
        "{}",
        "Woops! We ran into some trouble here!".red()
    );
    println!(" parser errors:");
    for message in errors {
        println!("\t{message}");
    }
}
