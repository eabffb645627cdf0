//! Sweep a range of monthly budgets over one set of debts
//!
//! Usage: cargo run --bin budget_sweep -- debts.csv --from 400 --to 1200 --step 50

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use snowball_planner::debt::load_debts;
use snowball_planner::simulation::{PlanComparison, SimulationConfig};
use snowball_planner::ScenarioRunner;

#[derive(Parser)]
#[command(name = "budget_sweep", about = "Compare payoff time and interest across budgets")]
struct Args {
    /// Debts CSV
    input: PathBuf,
    #[arg(long)]
    from: f64,
    #[arg(long)]
    to: f64,
    #[arg(long, default_value = "50")]
    step: f64,
    /// Simulation start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,
    #[arg(short, long, default_value = "budget_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.step <= 0.0 || args.to < args.from {
        bail!("Budget range must be increasing with a positive step");
    }

    let start = Instant::now();
    let debts = load_debts(&args.input)?;
    println!("Loaded {} debts in {:?}", debts.len(), start.elapsed());

    let config = args.start.map(SimulationConfig::starting).unwrap_or_default();
    let runner = ScenarioRunner::new(debts, config);
    println!("Minimum budget: ${:.2}", runner.minimum_budget());

    let steps = ((args.to - args.from) / args.step).floor() as usize;
    let budgets: Vec<f64> = (0..=steps).map(|i| args.from + args.step * i as f64).collect();

    let sweep_start = Instant::now();
    let scenarios = runner.run_budgets(&budgets);
    let baseline = runner.baseline();
    println!("Ran {} budgets in {:?}", scenarios.len(), sweep_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)?;
    writer.write_record(["Budget", "Months", "Interest", "TotalPaid", "DebtFreeDate", "InterestSaved", "MonthsSaved"])?;

    for scenario in &scenarios {
        match &scenario.result {
            Ok(plan) => {
                let cmp = PlanComparison::between(plan, &baseline);
                writer.write_record([
                    format!("{:.2}", scenario.monthly_budget),
                    plan.total_months.to_string(),
                    format!("{:.2}", plan.total_interest),
                    format!("{:.2}", plan.total_paid),
                    plan.debt_free_date.to_string(),
                    format!("{:.2}", cmp.interest_saved),
                    cmp.months_saved.to_string(),
                ])?;
            }
            Err(err) => {
                log::info!("Budget {:.2} skipped: {}", scenario.monthly_budget, err);
                writer.write_record([
                    format!("{:.2}", scenario.monthly_budget),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ])?;
            }
        }
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
