#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # prelim
//! ## Introduction
//!
//! Tells a student what they need on the prelim exam.
//!
//! Run `prelim form` or `prelim console` to be asked for your attendance and
//! lab work scores, or `prelim calc` to pass them on the command line.

use std::io;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use prelim::{RawGradeInput, Report, Variant, config, engine, prompt::Session};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Arguments of a one-shot calculation.
#[derive(Debug, Clone)]
struct CalcArgs {
    /// Use the console variant's rules instead of the form's
    console:    bool,
    /// Classes attended
    attendance: String,
    /// Excused absences
    excused:    Option<String>,
    /// Whether the excused absences were verified
    verified:   bool,
    /// Output JSON instead of text
    json:       bool,
    /// Output a summary table instead of text
    table:      bool,
    /// The three lab work scores
    labs:       Vec<String>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Ask for input under the console variant's rules
    Console,
    /// Ask for input under the form variant's rules
    Form,
    /// Compute from command line arguments
    Calc(CalcArgs),
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Log at debug level
    verbose:  bool,
    /// Disable colored output
    no_color: bool,
    /// The command to run
    cmd:      Cmd,
}

/// Parse the command line arguments and return the `Options`
fn options() -> Options {
    /// parses the three lab scores
    fn labs() -> impl Parser<Vec<String>> {
        positional::<String>("LAB")
            .help("Lab work scores (0-100), exactly three")
            .many()
            .guard(|labs| labs.len() == 3, "exactly three lab work scores are required")
    }

    let console = short('c')
        .long("console")
        .help("Use the console rules (15 classes, no excused absences)")
        .switch();
    let attendance = short('a')
        .long("attendance")
        .help("Number of classes attended")
        .argument::<String>("N");
    let excused = short('e')
        .long("excused")
        .help("Number of verified excused absences")
        .argument::<String>("N")
        .optional();
    let verified = long("verified")
        .help("Confirm the excused absences were verified")
        .switch();
    let json = long("json").help("Print the result as JSON").switch();
    let table = long("table").help("Print a summary table").switch();
    let labs = labs();

    let calc = construct!(CalcArgs {
        console,
        attendance,
        excused,
        verified,
        json,
        table,
        labs
    })
    .map(Cmd::Calc)
    .to_options()
    .command("calc")
    .help("Compute the required prelim score from arguments");

    let form = pure(Cmd::Form)
        .to_options()
        .command("form")
        .help("Enter attendance, excused absences, and lab work interactively");

    let console_cmd = pure(Cmd::Console)
        .to_options()
        .command("console")
        .help("Enter attendance and lab work interactively");

    let cmd = construct!([form, console_cmd, calc]);

    let verbose = short('v')
        .long("verbose")
        .help("Log debug information")
        .switch();
    let no_color = long("no-color").help("Disable colored output").switch();

    construct!(Options {
        verbose,
        no_color,
        cmd
    })
    .to_options()
    .descr("Prelim grade calculator")
    .run()
}

/// Runs an interactive session on stdin/stdout
fn interactive(variant: Variant) -> Result<()> {
    let policy = config::policy(variant);
    tracing::debug!(%variant, total_classes = policy.total_classes(), "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), policy);
    session.run()?;
    Ok(())
}

/// Validates the arguments, computes, and prints the result
fn calc(args: CalcArgs) -> Result<()> {
    let variant = if args.console {
        Variant::Console
    } else {
        Variant::Form
    };
    let policy = config::policy(variant);
    if !policy.excused_absences() && args.excused.is_some() {
        tracing::warn!("The {variant} rules have no excused absences; ignoring --excused");
    }

    let mut labs = args.labs.into_iter();
    let raw = RawGradeInput {
        attendance:       args.attendance,
        excused_absences: args.excused,
        excuse_verified:  args.verified,
        lab1:             labs.next().unwrap_or_default(),
        lab2:             labs.next().unwrap_or_default(),
        lab3:             labs.next().unwrap_or_default(),
    };

    let input = engine::validate(&policy, &raw).context("Invalid input")?;
    let report = Report::new(engine::compute(input));

    if args.json {
        println!("{}", report.to_json()?);
    } else if args.table {
        println!("{}", report.table());
    } else {
        print!("{report}");
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let level = if opts.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    if opts.no_color {
        colored::control::set_override(false);
    }

    match opts.cmd {
        Cmd::Console => interactive(Variant::Console),
        Cmd::Form => interactive(Variant::Form),
        Cmd::Calc(args) => calc(args),
    }
}
