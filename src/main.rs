//! CLI tool to tokenize shell command lines and to quote arguments back
//! into one.

use std::process::ExitCode;

use shellquote_rs::{Resolver, Token, VarValue, join, parse_with};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: shellquote <command> [args...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  parse [--env] <line>  Tokenize a command line, one JSON token per line");
        eprintln!("                        (--env resolves variables from the environment)");
        eprintln!("  join <arg>...         Quote arguments into a single command line");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  shellquote parse 'ls -la *.txt # cleanup'");
        eprintln!("  shellquote parse --env 'echo $HOME'");
        eprintln!("  shellquote join cp 'my file' dest");
        return ExitCode::from(2);
    }

    match args[1].as_str() {
        "parse" => run_parse(&args[2..]),
        "join" => run_join(&args[2..]),
        command => {
            eprintln!("Unknown command: {command}");
            ExitCode::from(2)
        }
    }
}

fn run_parse(args: &[String]) -> ExitCode {
    let (from_env, line) = match args {
        [flag, line] if flag.as_str() == "--env" => (true, line),
        [line] => (false, line),
        _ => {
            eprintln!("Error: parse expects one command line");
            return ExitCode::from(2);
        }
    };

    let result = if from_env {
        let mut lookup = |name: &str| std::env::var(name).ok().map(VarValue::from);
        parse_with(line, Resolver::Callback(&mut lookup))
    } else {
        parse_with(line, Resolver::Empty)
    };

    let tokens = match result {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for token in &tokens {
        match serde_json::to_string(token) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_join(args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("Error: join expects at least one argument");
        return ExitCode::from(2);
    }
    let tokens: Vec<Token> = args.iter().map(|arg| Token::Word(arg.clone())).collect();
    println!("{}", join(&tokens));
    ExitCode::SUCCESS
}
