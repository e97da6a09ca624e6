use std::io;

use anyhow::Ok;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use platecalc_rs::{
    attempt::{AttemptOption, AttemptSet},
    loadout::Loadout,
    target::{InputChange, TargetInput, TargetText},
    unit::Unit,
    weight::max_weight,
};

#[derive(Parser)]
#[command(version, about = "Plate and attempt calculators for meet day")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Work out the plates for each side of a 20 kg bar
    Load {
        /// Target weight in kilograms, e.g. "230" or "102.5"
        #[arg(value_parser = clap::value_parser!(TargetText))]
        target: TargetText,
    },
    /// Suggest first, second and third attempts for a target max
    Attempts {
        /// Third-attempt target weight, e.g. "500"
        #[arg(value_parser = clap::value_parser!(TargetText))]
        target: TargetText,

        /// Unit the target is given in
        #[arg(short, long, default_value_t = Unit::Lb)]
        unit: Unit,
    },
    /// Show information about this app
    Settings,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    match args.command {
        Command::Load { target } => load(&target),
        Command::Attempts { target, unit } => attempts(&target, unit),
        Command::Settings => settings(),
    }

    Ok(())
}

fn load(target: &TargetText) {
    let mut input = TargetInput::new(Unit::Kg);
    if input.set_text(target.as_str()) == InputChange::Clamped {
        warn!("The maximum weight allowed is {} KG.", max_weight(Unit::Kg));
    }

    let loadout = Loadout::select(input.value());

    let per_side = loadout.plates().iter().map(ToString::to_string).join(", ");
    println!("Each side: [{per_side}]");

    println!("Set of plates needed:");
    match loadout.plate_counts().as_slice() {
        [] => println!("  none, the bar is enough"),
        counts => {
            for (plate, count) in counts {
                println!("  {count} × {plate} KG plate per side");
            }
        }
    }

    println!("{} KG | {:.2} LB", loadout.actual_kg(), loadout.actual_lb());
    println!("Quick maths: {}", loadout.quick_math());
}

fn attempts(target: &TargetText, unit: Unit) {
    let mut input = TargetInput::new(unit);
    if input.set_text(target.as_str()) == InputChange::Clamped {
        warn!("The maximum weight allowed is {} {unit}.", max_weight(unit));
    }

    if !input.is_active() {
        println!("Enter a target above 0 to plan attempts.");
        return;
    }

    let set = AttemptSet::plan(input.weight());

    print_section("1ST ATTEMPT", &set.first, unit);
    print_section("2ND ATTEMPT", &set.second, unit);
    print_section("3RD ATTEMPT", &set.third, unit);
}

fn print_section(title: &str, options: &[AttemptOption; 3], unit: Unit) {
    println!("{title}");

    for option in options {
        let (primary, secondary) = match unit {
            Unit::Kg => (
                format!("{} KG", option.kg),
                format!("{} LB", option.lb),
            ),
            Unit::Lb => (
                format!("{} LB", option.lb),
                format!("{} KG", option.kg),
            ),
        };

        println!("  {:>3}%  {primary} ({secondary})", option.percent);
    }
}

fn settings() {
    println!("Boilermaker Powerlifting");
    println!("Version {}", env!("CARGO_PKG_VERSION"));
    println!("Created by Alejo Cagliolo");
    println!("Helping Boilermakers break PRs since 2023");
    println!("Hammer Down! Ever Grateful, Ever True!");
}
