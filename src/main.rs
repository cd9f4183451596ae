use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use calculator::{
    ast::ast::AstNode, calculate, errors::errors::Error, evaluator::diagnostics::Diagnostics,
    format_error, lexer::tokens::Token,
};
use tracing::{info, Level};

/// Evaluates an arithmetic expression
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Expression to evaluate, read from `--file` when omitted
    expression: Option<String>,

    /// File holding the expression
    #[clap(short, long, default_value = "code.txt")]
    file: PathBuf,

    /// Print the token stream and syntax tree
    #[clap(long)]
    trace: bool,

    /// Emit logs as JSON
    #[clap(long)]
    json_logs: bool,
}

/// Prints every reported error with the offending source line.
struct ConsoleDiagnostics<'a> {
    source: &'a str,
    trace: bool,
    reported: usize,
}

impl Diagnostics for ConsoleDiagnostics<'_> {
    fn report(&mut self, error: &Error) {
        self.reported += 1;
        eprintln!("{}", error);
        eprint!("{}", format_error(error, self.source));
    }

    fn trace_tokens(&mut self, tokens: &[Token]) {
        if self.trace {
            println!("TOKENS");
            for token in tokens {
                println!("{}", token.debug());
            }
            println!();
        }
    }

    fn trace_ast(&mut self, root: &AstNode) {
        if self.trace {
            println!("AST");
            println!("{}", root.debug_tree());
        }
    }
}

fn main() -> ExitCode {
    let args: Args = clap::Parser::parse();

    let level = if args.trace { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let (source, file_name) = match &args.expression {
        Some(expression) => (expression.clone(), String::from("shell")),
        None => match read_to_string(&args.file) {
            Ok(contents) => (contents, args.file.to_string_lossy().into_owned()),
            Err(err) => {
                eprintln!("Failed to read {}: {}", args.file.display(), err);
                return ExitCode::from(1);
            }
        },
    };

    let start = Instant::now();
    let mut diagnostics = ConsoleDiagnostics {
        source: &source,
        trace: args.trace,
        reported: 0,
    };

    let result = match calculate(&source, Some(file_name), &mut diagnostics) {
        Ok(result) => result,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            return ExitCode::from(1);
        }
    };
    info!("Calculated in {:?}", start.elapsed());

    println!("{}", result);

    if diagnostics.reported > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
