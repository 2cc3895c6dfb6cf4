use std::io::{self, Read};
use std::process::ExitCode;

use syncheck::{lexer::lexer::tokenize, parser::parser::parse};

fn main() -> ExitCode {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .expect("Failed to read input!");

    let tokens = tokenize(source, None);

    match parse(tokens) {
        Ok(()) => {
            println!("Parsing completed successfully.");
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Syntax error: {}", error);
            ExitCode::FAILURE
        }
    }
}
