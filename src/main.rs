#![doc = include_str!("../README.md")]

mod cli;
mod engine;
mod fmt;
mod numeric;
mod preferences;
mod prelude;
mod tables;

use clap::Parser;

use crate::{
    cli::{Args, Command},
    engine::{
        apply_change,
        outcome::Outcome,
        ratio_as_percent,
        reverse_total,
        share_of_total,
        variation_rate,
    },
    fmt::NumberFormat,
    preferences::Preferences,
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let mut preferences = Preferences::read_from(&args.preferences_path);
    let format = NumberFormat::new(args.precision.unwrap_or(preferences.precision));

    match args.command {
        Command::Share(share) => {
            print_outcome(&share_of_total(&share.percent, &share.total, &format)?, args.plain);
        }
        Command::Ratio(ratio) => {
            print_outcome(&ratio_as_percent(&ratio.value, &ratio.total, &format)?, args.plain);
        }
        Command::Change(change) => {
            let outcome = apply_change(&change.base, &change.percent, change.direction, &format)?;
            print_outcome(&outcome, args.plain);
        }
        Command::Variation(variation) => {
            print_outcome(&variation_rate(&variation.start, &variation.end, &format)?, args.plain);
        }
        Command::Reverse(reverse) => {
            print_outcome(&reverse_total(&reverse.part, &reverse.percent, &format)?, args.plain);
        }
        Command::Vat(vat) => {
            let breakdown = engine::vat::vat(&vat.amount, &vat.rate, vat.mode, &format)?;
            if args.plain {
                println!("{}", fmt::plain(&breakdown.display));
            } else {
                println!("{}", tables::build_vat_table(&breakdown, vat.mode, &format));
                println!("{}", breakdown.phrase);
            }
        }
        Command::Precision(precision) => match precision.digits {
            Some(digits) => {
                preferences.precision = digits;
                preferences.write_to(&args.preferences_path);
                info!(%digits, "precision saved");
            }
            None => println!("{}", preferences.precision),
        },
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome, plain: bool) {
    if plain {
        println!("{}", fmt::plain(&outcome.display));
    } else {
        println!("{}", tables::build_outcome_table(outcome));
    }
}
