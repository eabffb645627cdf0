//! Snowball Planner CLI
//!
//! Command-line interface for building debt snowball payoff plans

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use snowball_planner::debt::{load_debts, PlanDocument};
use snowball_planner::simulation::{
    MinimumOnlyBaseline, PlanComparison, SimulationConfig, SimulationResult, SnowballSimulator,
    DEFAULT_MAX_MONTHS,
};
use snowball_planner::{Debt, PayoffStrategy};

#[derive(Parser)]
#[command(
    name = "snowball",
    version,
    about = "Debt snowball payoff planner",
    long_about = "Simulates paying off debts smallest-balance-first with a fixed monthly \
                  budget and compares the plan against paying minimums only."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a snowball payoff plan
    Plan {
        /// Debts as CSV or a JSON plan document
        input: PathBuf,
        /// Monthly budget (defaults to the document's budget for JSON input)
        #[arg(short, long)]
        budget: Option<f64>,
        /// Simulation start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<NaiveDate>,
        /// Month ceiling
        #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
        max_months: u32,
        /// Number of months to print
        #[arg(long, default_value = "24")]
        show: usize,
        /// Write the full schedule (CSV, or JSON if the path ends in .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print attack order for a strategy
    Order {
        input: PathBuf,
        #[arg(long, default_value = "snowball")]
        strategy: PayoffStrategy,
    },
    /// Write debts and budget as a versioned JSON plan document
    Export {
        input: PathBuf,
        #[arg(short, long)]
        budget: f64,
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Flattened schedule row for CSV output
#[derive(Serialize)]
struct ScheduleCsvRow<'a> {
    month: u32,
    date: NaiveDate,
    id: &'a str,
    name: &'a str,
    starting_balance: f64,
    payment: f64,
    interest_paid: f64,
    principal_paid: f64,
    ending_balance: f64,
    is_completed: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { input, budget, start, max_months, show, output } => {
            let (debts, doc_budget) = read_input(&input)?;
            let Some(budget) = budget.or(doc_budget) else {
                bail!("No monthly budget given; pass --budget");
            };

            let mut config = start.map(SimulationConfig::starting).unwrap_or_default();
            config.max_months = max_months;

            run_plan(&debts, budget, config, show, output.as_deref())?;
        }
        Commands::Order { input, strategy } => {
            let (debts, _) = read_input(&input)?;
            println!("Attack order ({}):", strategy);
            for (idx, debt) in strategy.order(&debts).iter().enumerate() {
                println!(
                    "  {:>2}. {:<24} balance ${:>12.2}  rate {:>6.2}%  min ${:>9.2}",
                    idx + 1,
                    debt.name,
                    debt.balance,
                    debt.interest_rate,
                    debt.minimum_payment
                );
            }
        }
        Commands::Export { input, budget, output } => {
            let (debts, _) = read_input(&input)?;
            let doc = PlanDocument::new(debts, budget, Some(Utc::now()));
            std::fs::write(&output, doc.to_json_pretty()?)
                .with_context(|| format!("Unable to write {}", output.display()))?;
            println!("Plan document written to: {}", output.display());
        }
    }

    Ok(())
}

/// Load debts from CSV or a JSON plan document
fn read_input(path: &Path) -> Result<(Vec<Debt>, Option<f64>)> {
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let doc = PlanDocument::load(path)
            .with_context(|| format!("Failed to load plan document {}", path.display()))?;
        Ok((doc.debts, Some(doc.monthly_budget)))
    } else {
        let debts = load_debts(path)
            .with_context(|| format!("Failed to load debts from {}", path.display()))?;
        Ok((debts, None))
    }
}

fn run_plan(
    debts: &[Debt],
    budget: f64,
    config: SimulationConfig,
    show: usize,
    output: Option<&Path>,
) -> Result<()> {
    println!("Snowball Planner v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("Debts: {}   Monthly budget: ${:.2}", debts.len(), budget);
    println!();

    let result = SnowballSimulator::new(config.clone()).simulate(debts, budget)?;
    let baseline = MinimumOnlyBaseline::new(config).simulate(debts);

    println!("{:>5} {:>10} {:<24} {:>12} {:>10} {:>10} {:>12}",
        "Month", "Date", "Debt", "Start", "Payment", "Interest", "End");
    println!("{}", "-".repeat(90));

    for month in result.payment_plan.iter().take(show) {
        for row in month.debts.iter().filter(|r| r.payment > 0.0) {
            println!("{:>5} {:>10} {:<24} {:>12.2} {:>10.2} {:>10.2} {:>12.2}",
                month.month,
                month.date.format("%Y-%m"),
                row.name,
                row.starting_balance,
                row.payment,
                row.interest_paid,
                row.ending_balance,
            );
        }
    }

    if result.payment_plan.len() > show {
        println!("... ({} more months)", result.payment_plan.len() - show);
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months:   {}", summary.total_months);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Paid:     ${:.2}", summary.total_paid);
    println!("  Debt-Free Date: {}", summary.debt_free_date.format("%B %Y"));
    if summary.final_balance > 0.0 {
        println!("  Still owed at ceiling: ${:.2}", summary.final_balance);
    }

    println!("\nPayoff Milestones:");
    for payoff in &summary.payoffs {
        match (payoff.month, payoff.date) {
            (Some(m), Some(date)) => println!("  {:<24} month {:>3} ({})", payoff.name, m, date.format("%Y-%m")),
            _ => println!("  {:<24} not paid off", payoff.name),
        }
    }

    let cmp = PlanComparison::between(&result, &baseline);
    println!("\nMinimum Payments Only:");
    if cmp.baseline_never_pays_off {
        println!("  Total Months:   50+ years (some minimums never cover interest)");
    } else {
        println!("  Total Months:   {}", cmp.baseline_months);
    }
    println!("  Total Interest: ${:.2}", baseline.total_interest);
    let (years, months) = cmp.time_saved();
    println!("  Time Saved:     {} years {} months", years, months);
    println!("  Interest Saved: ${:.2}", cmp.interest_saved);

    if let Some(path) = output {
        write_schedule(path, &result)?;
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}

fn write_schedule(path: &Path, result: &SimulationResult) -> Result<()> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(path, json)
            .with_context(|| format!("Unable to write {}", path.display()))?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    for month in &result.payment_plan {
        for row in &month.debts {
            writer.serialize(ScheduleCsvRow {
                month: month.month,
                date: month.date,
                id: &row.id,
                name: &row.name,
                starting_balance: row.starting_balance,
                payment: row.payment,
                interest_paid: row.interest_paid,
                principal_paid: row.principal_paid,
                ending_balance: row.ending_balance,
                is_completed: row.is_completed,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
