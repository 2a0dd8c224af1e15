use std::{io, path::PathBuf};

use anyhow::Context;
use calculator::{
    calculator::calculator::{
        Calculator, ExpressionParser, PostfixNotation, RecursiveDescent, ShuntingYard,
    },
    config::Config,
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
};
use clap::{Parser, ValueEnum};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate whitespace-separated integer expressions")]
struct Args {
    /// The expression to evaluate, e.g. "10 + 5 - ( 5 + 10 )". One expression
    /// per line is read from stdin when omitted.
    expression: Option<String>,

    /// A toml file containing configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How the input is parsed
    #[arg(short, long, value_enum, default_value_t = Strategy::RecursiveDescent)]
    strategy: Strategy,

    /// Print the tokens instead of evaluating
    #[arg(long, conflicts_with = "tree")]
    tokens: bool,

    /// Print the parsed tree instead of evaluating
    #[arg(long)]
    tree: bool,

    /// Show more in logs, may be provided multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Strategy {
    /// LL(1) recursive descent over infix input
    RecursiveDescent,
    /// Infix input converted to postfix with the shunting-yard algorithm
    ShuntingYard,
    /// Input already written in postfix order
    Postfix,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    info!(?config, strategy = ?args.strategy, "starting");

    let expressions: Vec<String> = match &args.expression {
        Some(expression) => vec![expression.clone()],
        None => io::stdin()
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .context("reading expressions from stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect(),
    };

    let mut failures = 0;
    for expression in &expressions {
        match run(&args, &config, expression) {
            Ok(output) => println!("{}", output),
            Err(error) => {
                eprint!("{}", format_error(&error, expression));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} expressions failed", failures, expressions.len());
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, config: &Config, expression: &str) -> Result<String, Error> {
    match args.strategy {
        Strategy::RecursiveDescent => run_with(RecursiveDescent, args, config, expression),
        Strategy::ShuntingYard => run_with(ShuntingYard, args, config, expression),
        Strategy::Postfix => run_with(PostfixNotation, args, config, expression),
    }
}

fn run_with<P: ExpressionParser>(
    parser: P,
    args: &Args,
    config: &Config,
    expression: &str,
) -> Result<String, Error> {
    if args.tokens {
        let tokens = tokenize(expression)?;
        return Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<String>>()
            .join("\n"));
    }

    let calculator = Calculator::with_parser(parser).with_config(config.clone());

    if args.tree {
        return Ok(calculator.parse(expression)?.to_string());
    }

    Ok(calculator.calculate(expression)?.to_string())
}
