//! Synthetic student expense data generator
//!
//! Writes one fabricated transaction per day across calendar year 2023 to a
//! CSV file, drawing categories from a fixed weight table and amounts from
//! per-category price ranges. Rent is the exception: it only posts on the 1st
//! of each month; rent draws on any other day produce no row.

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

/// Category name, weight, description pool, price range (min, max)
const CATEGORIES: [(&str, f64, &[&str], (f64, f64)); 10] = [
    (
        "food",
        0.25,
        &["mess food", "canteen", "street food", "groceries"],
        (10.0, 150.0),
    ),
    (
        "transportation",
        0.1,
        &["bus pass", "train ticket", "bike fuel"],
        (5.0, 100.0),
    ),
    (
        "entertainment",
        0.1,
        &["movie ticket", "spotify", "game subscription"],
        (5.0, 50.0),
    ),
    (
        "utilities",
        0.05,
        &["phone bill", "laundry", "hostel electricity"],
        (20.0, 200.0),
    ),
    ("health", 0.05, &["medicines", "doctor visit"], (15.0, 300.0)),
    ("rent", 0.2, &["hostel rent", "hostel deposit"], (1000.0, 3000.0)),
    (
        "shopping",
        0.05,
        &["clothes", "shoes", "accessories"],
        (50.0, 500.0),
    ),
    (
        "stationery",
        0.08,
        &["notebooks", "pen set", "calculator", "textbook"],
        (10.0, 200.0),
    ),
    (
        "exam_fees",
        0.07,
        &["mid-term exam", "final exam", "certification fee"],
        (100.0, 800.0),
    ),
    (
        "miscellaneous",
        0.05,
        &["photocopy", "printing", "donation"],
        (5.0, 50.0),
    ),
];

/// Monthly rent posted on the 1st falls in this range
const MONTHLY_RENT_RANGE: (f64, f64) = (1500.0, 2500.0);

#[derive(Debug, Serialize)]
struct ExpenseRow {
    date: String,
    description: String,
    category: String,
    amount: f64,
}

#[derive(Parser)]
#[command(about = "Generate synthetic student expense data for 2023")]
struct Cli {
    /// Output CSV path
    #[arg(long, default_value = "student_expenses_2023.csv")]
    output: PathBuf,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let rows = generate_year(&mut rng, 2023);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} transactions to {}", rows.len(), cli.output.display());
    Ok(())
}

/// Generate one candidate transaction per day of the given year
fn generate_year(rng: &mut ChaCha8Rng, year: i32) -> Vec<ExpenseRow> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid start date");
    let mut rows = Vec::new();

    for date in start.iter_days().take_while(|d| d.year() == year) {
        let (category, descriptions, price_range) = pick_category(rng);

        let amount = if category == "rent" {
            if date.day() != 1 {
                // Rent only posts on the 1st of the month
                continue;
            }
            rng.gen_range(MONTHLY_RENT_RANGE.0..MONTHLY_RENT_RANGE.1)
        } else {
            rng.gen_range(price_range.0..price_range.1)
        };

        let description = descriptions[rng.gen_range(0..descriptions.len())];
        rows.push(ExpenseRow {
            date: date.format("%Y-%m-%d").to_string(),
            description: description.to_string(),
            category: category.to_string(),
            amount: (amount * 100.0).round() / 100.0,
        });
    }

    rows
}

/// Weighted draw from the category table
fn pick_category(rng: &mut ChaCha8Rng) -> (&'static str, &'static [&'static str], (f64, f64)) {
    let total: f64 = CATEGORIES.iter().map(|c| c.1).sum();
    let mut roll = rng.gen_range(0.0..total);

    for &(name, weight, descriptions, range) in &CATEGORIES {
        if roll < weight {
            return (name, descriptions, range);
        }
        roll -= weight;
    }

    // Floating point remainder lands on the last category
    let last = CATEGORIES[CATEGORIES.len() - 1];
    (last.0, last.2, last.3)
}
