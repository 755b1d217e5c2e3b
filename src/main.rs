use lemur::runner::{run_file, run_prompt};
use std::env;

fn main() -> std::io::Result<()> {
    env_logger::init();

    // args always includes the program name in args[0]
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1])?,
        _ => {
            eprintln!("Usage: lemur [script]");
            std::process::exit(64);
        }
    }
    Ok(())
}
