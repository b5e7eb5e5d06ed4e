use std::io::{self, BufRead, IsTerminal};

use calc::{calculate, format_result, EvalConfig, Report};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

mod repl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate arithmetic expressions with a shunting-yard evaluator",
    long_about = "calc evaluates infix arithmetic expressions.\n\n\
        Accepted input: digits, '.', whitespace, + - * / ^ and parentheses.\n\
        '^' is right-associative, a leading '+'/'-' is unary, and '2(3)'\n\
        multiplies implicitly.\n\n\
        EXAMPLES:\n\
        \n  calc '2+3*4'                      Evaluate one expression\n\
        \n  calc -- -3+5                      Expressions starting with '-'\n\
        \n  echo '2^3^2' | calc --json        Evaluate stdin lines, JSON output\n\
        \n  calc repl                         Start interactive REPL",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Allow NaN and infinite results instead of failing (e.g. 1/0)
    #[arg(long)]
    allow_invalid: bool,

    /// Emit one JSON report per expression
    #[arg(long)]
    json: bool,

    /// Expressions to evaluate (reads stdin lines if none are given).
    /// Put expressions starting with '-' after `--`
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive session that evaluates one expression per line.\n\n\
            Commands:\n\
            \n  :help                 Show available REPL commands\n\
            \n  :tokens <expr>        Show how an expression is tokenized\n\
            \n  :allow-invalid on|off Toggle NaN/Infinity results\n\
            \n  :quit                 Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Print the outcome of one expression; returns false on failure
fn emit(expression: &str, config: &EvalConfig, mode: OutputMode) -> bool {
    let outcome = calculate(expression, config);
    match mode {
        OutputMode::Json => {
            let report = Report::new(expression, &outcome);
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("error: failed to serialize JSON: {e}");
                    return false;
                }
            }
            report.is_ok()
        }
        OutputMode::Text => match outcome {
            Ok(value) => {
                println!("{}", format_result(value));
                true
            }
            Err(e) => {
                eprintln!("error: {e}");
                false
            }
        },
    }
}

fn run_batch<'a, I>(expressions: I, config: &EvalConfig, mode: OutputMode) -> i32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut failures = 0usize;
    for expression in expressions {
        if !emit(expression, config, mode) {
            failures += 1;
        }
    }
    if failures > 0 {
        info!("{failures} expression(s) failed");
        1
    } else {
        0
    }
}

fn run_stdin(config: &EvalConfig, mode: OutputMode) -> i32 {
    let lines = match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("error: failed to read stdin: {e}");
            return 2;
        }
    };
    run_batch(
        lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()),
        config,
        mode,
    )
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = EvalConfig::default().with_invalid_results(cli.allow_invalid);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    match cli.command {
        Some(Command::Repl) => repl::run_repl(config),
        None if !cli.expressions.is_empty() => {
            run_batch(cli.expressions.iter().map(String::as_str), &config, mode)
        }
        None if io::stdin().is_terminal() => repl::run_repl(config),
        None => run_stdin(&config, mode),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_accepts_flags_and_expressions() {
        let cli = Cli::try_parse_from(["calc", "--json", "--allow-invalid", "1/0", "2+2"]).unwrap();
        assert!(cli.json);
        assert!(cli.allow_invalid);
        assert_eq!(cli.expressions, vec!["1/0".to_string(), "2+2".to_string()]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_repl_subcommand() {
        let cli = Cli::try_parse_from(["calc", "-vv", "repl"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Repl)));
    }

    #[test]
    fn cli_repl_subcommand_without_flags() {
        let cli = Cli::try_parse_from(["calc", "repl"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Repl)));
        assert!(cli.expressions.is_empty());
    }

    #[test]
    fn cli_leading_minus_needs_separator() {
        assert!(Cli::try_parse_from(["calc", "-3+5"]).is_err());
    }

    #[test]
    fn cli_expression_after_separator() {
        let cli = Cli::try_parse_from(["calc", "--", "-3+5"]).unwrap();
        assert_eq!(cli.expressions, vec!["-3+5".to_string()]);
    }

    #[test]
    fn run_batch_reports_failures() {
        let config = EvalConfig::default();
        assert_eq!(run_batch(["2+2", "(1)(2)"], &config, OutputMode::Text), 0);
        assert_eq!(run_batch(["2+2", "2/0"], &config, OutputMode::Json), 1);
    }
}
