use calc_cli::{
    CliResult,
    config::load_evaluator_config,
    output::{OutputFormat, render_evaluation},
    repl::run_repl,
};
use calc_core::Calculator;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON file with evaluator limits
    #[arg(short, long, env = "CALC_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate expressions read line by line from stdin (default)
    Repl,

    /// Evaluate a single expression
    Eval(EvalArgs),

    /// Print the fully parenthesized form of an expression
    Parse(ParseArgs),
}

#[derive(Parser)]
struct EvalArgs {
    /// Expression to evaluate, e.g. "2 * (3 + 4)"
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Parser)]
struct ParseArgs {
    /// Expression to parse
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = load_evaluator_config(cli.config.as_deref())?;
    debug!(?config, "evaluator config");
    let calculator = Calculator::new(config);

    match &cli.command {
        None | Some(Commands::Repl) => {
            let stdin = io::stdin();
            run_repl(&calculator, stdin.lock(), io::stdout())?;
            Ok(())
        }
        Some(Commands::Eval(args)) => {
            let result = calculator.evaluate(&args.expression);
            // text errors go to stderr through main
            if result.is_ok() || args.output == OutputFormat::Json {
                println!(
                    "{}",
                    render_evaluation(&args.expression, &result, args.output)?
                );
            }
            result?;
            Ok(())
        }
        Some(Commands::Parse(args)) => {
            let ast = calculator.parse(&args.expression)?;
            println!("{}", ast);
            Ok(())
        }
    }
}

fn main() {
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
