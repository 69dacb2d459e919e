use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use loan_decision::batch::run_batch;
use loan_decision::config::AppConfig;
use loan_decision::decision::{Decision, DecisionEngine, LoanPolicy};
use loan_decision::error::AppError;
use loan_decision::telemetry;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loan-decision",
    about = "Compute approvable loan amount and period for an applicant",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide a single loan application
    Decide(DecideArgs),
    /// Decide every application in a CSV file
    Batch(BatchArgs),
    /// Print the active loan policy
    Policy(PolicyArgs),
}

#[derive(Args, Debug)]
struct DecideArgs {
    /// Estonian personal ID code of the applicant
    #[arg(long)]
    personal_code: String,
    /// Requested loan amount in euros
    #[arg(long)]
    amount: u32,
    /// Requested loan period in months
    #[arg(long)]
    period: u32,
    /// Evaluation date for the age check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the decision as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV with personal_code,loan_amount,loan_period columns
    #[arg(long)]
    input: PathBuf,
    /// Destination CSV (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Evaluation date for the age check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// Emit the policy as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct DecisionResponse<'a> {
    personal_code: &'a str,
    requested_amount: u32,
    requested_period: u32,
    today: NaiveDate,
    decision: Decision,
}

fn main() {
    if let Err(err) = run_cli() {
        if err.is_rejection() {
            eprintln!("rejected: {err}");
            std::process::exit(2);
        }
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = DecisionEngine::new(config.policy);
    info!(?config.environment, "loan decision engine ready");

    match cli.command {
        Command::Decide(args) => run_decide(&engine, args),
        Command::Batch(args) => run_batch_command(&engine, args),
        Command::Policy(args) => print_policy(engine.policy(), args.json),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_decide(engine: &DecisionEngine, args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let decision = engine.calculate_approved_loan_on(&personal_code, amount, period, today)?;
    info!(
        amount = decision.loan_amount(),
        period = decision.loan_period(),
        "loan approved"
    );

    if json {
        let response = DecisionResponse {
            personal_code: personal_code.trim(),
            requested_amount: amount,
            requested_period: period,
            today,
            decision,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Approved loan amount: {} EUR", decision.loan_amount());
        println!("Approved loan period: {} months", decision.loan_period());
        if decision.loan_period() != period {
            println!("Note: period adjusted from the requested {period} months");
        }
    }

    Ok(())
}

fn run_batch_command(engine: &DecisionEngine, args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        input,
        output,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let reader = BufReader::new(File::open(&input)?);

    let summary = match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            run_batch(engine, reader, writer, today)?
        }
        None => run_batch(engine, reader, io::stdout().lock(), today)?,
    };

    info!(
        input = %input.display(),
        approved = summary.approved,
        rejected = summary.rejected,
        "batch complete"
    );
    Ok(())
}

fn print_policy(policy: &LoanPolicy, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(policy)?);
        return Ok(());
    }

    println!(
        "Loan amount:   {} - {} EUR",
        policy.minimum_loan_amount, policy.maximum_loan_amount
    );
    println!(
        "Loan period:   {} - {} months",
        policy.minimum_loan_period, policy.maximum_loan_period
    );
    println!(
        "Applicant age: {} - {} years",
        policy.minimum_applicant_age, policy.maximum_applicant_age
    );
    Ok(())
}
