//! CLI tool to inspect how raw command-line arguments tokenize.

use std::process::ExitCode;

use argshift::Session;

fn main() -> ExitCode {
    let mut args = Session::new(std::env::args().skip(1));

    let Some(command) = args.shift_argument() else {
        eprintln!("Usage: argshift <command> [arguments...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  classify  Print each token's class and rendered form");
        eprintln!("  render    Print the canonical rendering of the input");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  argshift classify --name Kyle -vn file.txt");
        eprintln!("  argshift render --jobs=4 -aab input.txt");
        return ExitCode::from(2);
    };

    match command.as_str() {
        "classify" => {
            for token in args.tokens() {
                println!("{:<8} {token}", token.class());
            }
            ExitCode::SUCCESS
        }
        "render" => {
            println!("{args}");
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            ExitCode::from(2)
        }
    }
}
