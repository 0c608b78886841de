//! Command-line interface (CLI) for calcpad.
//!
//! Drives a [`Calculator`] from key scripts, either given on the command line
//! or read line by line from standard input, and evaluates raw expressions
//! with the closed-grammar evaluator.
//!
//! ```text
//! calcpad keys "200+25%"
//! calcpad --radians eval "sin(pi/2"
//! calcpad repl
//! ```
use anyhow::Result;
use calcpad::{CalcConfig, Calculator, auto_balance, format_result, parse_keys};
use calcpad_expr::{AngleMode, Builtins, Evaluate, ExprEvaluator};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Interpret trigonometric arguments and results in radians
    #[arg(long, global = true)]
    radians: bool,

    /// Do not evaluate immediately when `%` is entered
    #[arg(long, global = true)]
    no_auto_percent: bool,

    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Feeds a key script to a fresh calculator
    Keys {
        /// Keys, e.g. "2(3+4)=" or "sin30 Enter"
        script: String,
    },
    /// Evaluates a raw expression string
    Eval {
        /// Expression in the evaluator grammar, e.g. "2*(3+4)"
        expr: String,
    },
    /// Reads key scripts from standard input, one per line
    Repl {},
}

impl Args {
    fn config(&self) -> CalcConfig {
        let angle_mode = if self.radians {
            AngleMode::Radians
        } else {
            AngleMode::Degrees
        };
        CalcConfig::default()
            .angle_mode(angle_mode)
            .auto_evaluate_percent(!self.no_auto_percent)
    }
}

fn print_state(out: &mut impl Write, calc: &Calculator) -> io::Result<()> {
    writeln!(out, "{}", calc.expression_text())?;
    writeln!(out, "= {}", calc.result_text())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config();
    let mut stdout = io::stdout().lock();

    match args.command {
        Commands::Keys { script } => {
            let mut calc = Calculator::with_config(config);
            calc.apply_all(&parse_keys(&script)?);
            print_state(&mut stdout, &calc)?;
        }
        Commands::Eval { expr } => {
            let evaluator =
                ExprEvaluator::with_builtins(Builtins::with_angle_mode(config.angle_mode));
            let value = evaluator.evaluate(&auto_balance(&expr))?;
            writeln!(stdout, "{}", format_result(value))?;
        }
        Commands::Repl {} => {
            let mut calc = Calculator::with_config(config);
            for line in io::stdin().lock().lines() {
                let line = line?;
                match parse_keys(&line) {
                    Ok(actions) => calc.apply_all(&actions),
                    Err(err) => {
                        eprintln!("{err}");
                        continue;
                    }
                }
                print_state(&mut stdout, &calc)?;
            }
        }
    }
    Ok(())
}
