mod cli;
mod error;
mod repl;
mod runtime;
mod syntax;

use std::process;

use clap::Parser;

use cli::{Cli, Command};
use repl::Repl;
use runtime::eval::eval_str;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expr } => {
            let outcome = eval_str(&expr)
                .map_err(|why| why.to_string())
                .and_then(|value| repl::render(value).map_err(str::to_string));

            match outcome {
                Ok(text) => println!("{text}"),
                Err(why) => {
                    eprintln!("error: {why}");
                    process::exit(1);
                }
            }
        }
        Command::Repl => {
            if let Err(why) = Repl::new().run() {
                eprintln!("{why}");
                process::exit(1);
            }
        }
    }
}
