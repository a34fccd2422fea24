//! Output formatting module

use fleet_app::app::{RoutePlan, ScenarioRun, Step, StepResult};
use fleet_domain::{Feasibility, FleetReport};
use fleet_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_run(output_format: OutputFormat, run: &ScenarioRun) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(run);
    }

    println!("\nLoading Steps");
    println!("=============");
    for step in &run.steps {
        println!("{}", render_step(step));
    }
    if run.steps.iter().any(|s| matches!(s, Step::Unload { .. })) {
        println!("\nBefore unloading:");
        print!("{}", render_report(&run.loaded));
    }
    println!();
    print!("{}", render_report(&run.report));
    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &FleetReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }
    print!("{}", render_report(report));
    Ok(())
}

#[derive(Serialize)]
struct LoadOutput<'a> {
    step: &'a Step,
    report: &'a FleetReport,
}

pub fn output_load(output_format: OutputFormat, step: &Step, report: &FleetReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&LoadOutput { step, report });
    }
    println!("{}", render_step(step));
    println!();
    print!("{}", render_report(report));
    Ok(())
}

pub fn output_route(output_format: OutputFormat, plan: &RoutePlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(plan);
    }
    print!("{}", render_route(plan));
    Ok(())
}

/// One line per step
pub fn render_step(step: &Step) -> String {
    match step {
        Step::Load {
            vehicle,
            cargo,
            result,
        } => {
            let head = format!(
                "[#{}] load '{}' {} kg ({})",
                vehicle,
                cargo.description(),
                cargo.weight(),
                cargo.cargo_type()
            );
            match result {
                StepResult::Loaded(outcome) => format!(
                    "{}: loaded into {}, +{} kg, now {} kg",
                    head, outcome.section, outcome.added, outcome.current_load
                ),
                StepResult::Rejected(e) => format!("{}: rejected, {}", head, e),
            }
        }
        Step::Unload { vehicle, released } => {
            format!("[#{}] unloaded {} kg", vehicle, released)
        }
    }
}

/// Fleet table with totals
pub fn render_report(report: &FleetReport) -> String {
    let mut out = String::new();

    out.push_str("Fleet Report\n");
    out.push_str("============\n");
    out.push_str(&format!(
        "{:>3}  {:<24} {:>5} {:>14} {:>14}\n",
        "No", "Vehicle", "Year", "Capacity (kg)", "Load (kg)"
    ));
    out.push_str("-".repeat(64).as_str());
    out.push('\n');

    for summary in &report.vehicles {
        let name = format!("{} {}", summary.make, summary.model);
        out.push_str(&format!(
            "{:>3}  {:<24} {:>5} {:>14} {:>14}\n",
            summary.index,
            truncate_str(&name, 24),
            summary.year,
            summary.capacity,
            summary.current_load
        ));
    }

    out.push_str("-".repeat(64).as_str());
    out.push('\n');
    out.push_str(&format!("Total capacity:  {} kg\n", report.total_capacity));
    out.push_str(&format!("Total load:      {} kg\n", report.total_current_load));
    out
}

pub fn render_route(plan: &RoutePlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("Route check for #{} {}\n", plan.vehicle, plan.name));
    out.push_str(&format!("Planned cargo:   {} kg\n", plan.cargo_weight));

    match plan.feasibility {
        Feasibility::Feasible {
            distance_km,
            fuel_needed,
        } => {
            out.push_str(&format!(
                "Result:          OK, {} km each way, {:.1} l fuel needed\n",
                distance_km, fuel_needed
            ));
        }
        Feasibility::Overloaded {
            total_weight,
            capacity,
        } => {
            out.push_str(&format!(
                "Result:          Overloading! {} kg on a {} kg vehicle\n",
                total_weight, capacity
            ));
        }
        Feasibility::InsufficientFuel {
            fuel_needed,
            reserve_limit,
        } => {
            out.push_str(&format!(
                "Result:          Fuel not enough, {:.1} l needed, {:.1} l allowed\n",
                fuel_needed, reserve_limit
            ));
        }
    }
    out
}

/// Truncate a string to max length, adding ".." if truncated
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
