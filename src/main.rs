// opsig CLI
//
// Parses a signature source line by line, reports failures as Ariadne
// diagnostics, and optionally emits the canonical round-tripped text.

use clap::Parser;
use lexer::token::Token;
use logos::Logos;
use opsig::{parse_source, print_operation};
use parser::error::report_error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "opsig", about = "Round-trip operation type signatures")]
struct Args {
    /// Signature source file
    file: Option<PathBuf>,

    /// Inline source text instead of a file
    #[arg(long, conflicts_with = "file")]
    source: Option<String>,

    /// Print canonical text for every parsed operation
    #[arg(long)]
    emit: bool,

    /// Dump the raw token stream and exit
    #[arg(long)]
    tokens: bool,

    /// Suppress diagnostic reports
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (filename, source) = match (&args.file, &args.source) {
        (Some(path), None) => match fs::read_to_string(path) {
            Ok(text) => (path.display().to_string(), text),
            Err(err) => {
                eprintln!("error: cannot read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(text)) => ("<source>".to_string(), text.clone()),
        _ => {
            eprintln!("error: pass a signature file or --source <TEXT>");
            return ExitCode::FAILURE;
        }
    };

    if args.tokens {
        for result in Token::lexer(&source) {
            match result {
                Ok(token) => println!("Token: {:?}", token),
                Err(_) => println!("Token: <invalid>"),
            }
        }
        return ExitCode::SUCCESS;
    }

    let (operations, errors) = parse_source(&source);

    if args.emit {
        for op in &operations {
            println!("{}", print_operation(op));
        }
    }

    if errors.is_empty() {
        return ExitCode::SUCCESS;
    }

    if !args.quiet {
        for (_, err) in &errors {
            report_error(&filename, &source, err);
        }
    }

    ExitCode::from(errors[0].1.exit_code() as u8)
}
