use std::{fs::read_to_string, path::PathBuf, process::exit, rc::Rc, time::Instant};

use clap::Parser;
use langparse::{display_error, lexer::lexer::tokenize, logger, parser::parser::parse};
use log::{info, LevelFilter};

#[derive(Parser, Clone, Debug)]
#[command(name = "langparse", about = "Parses a Lang source file and prints its syntax tree")]
struct Args {
    /// Source file to parse
    path: PathBuf,
    /// Print the token stream instead of the syntax tree
    #[arg(long = "tokens")]
    tokens: bool,
    /// Minimum level of diagnostics written to stderr
    #[arg(
        long = "log-level",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(LevelFilter::Warn);
    if let Err(e) = logger::init(level) {
        eprintln!("failed to install logger: {}", e);
    }

    let source = match read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.path.display(), e);
            exit(1);
        }
    };

    let file_name = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.path.to_string_lossy().into_owned());

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(e) => {
            display_error(&e, &source, &args.path);
            exit(1);
        }
    };

    info!(target: "langparse", "tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token.debug_line());
        }
        return;
    }

    let parse_start = Instant::now();
    let (_, program) = parse(tokens, Rc::new(file_name));

    info!(target: "langparse", "parsed in {:?}", parse_start.elapsed());

    match program {
        Ok(program) => println!("{:#?}", program),
        Err(e) => {
            display_error(&e, &source, &args.path);
            exit(1);
        }
    }
}
