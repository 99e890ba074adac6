use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use shunt::{evaluate, evaluator::vars::ValueSource};

/// shunt is a small arithmetic expression evaluator. Variables in the
/// expression are prompted for on standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read the expression from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

/// Resolves variables by asking on standard input, one line per variable.
struct PromptSource {
    stdin: io::Stdin,
}

impl ValueSource for PromptSource {
    fn value_for(&mut self, name: &str) -> String {
        eprint!("{name} = ");
        let _ = io::stderr().flush();

        let mut reply = String::new();
        match self.stdin.lock().read_line(&mut reply) {
            Ok(_) => reply,
            Err(_) => String::new(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut source = PromptSource { stdin: io::stdin() };

    match evaluate(&expression, &mut source) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
