//! Carbon Footprint Aware
//!
//! Command-line front end for the campus weekly CO2 estimator.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use carbon_footprint_aware::content::{self, Section};
use carbon_footprint_aware::models::DEFAULT_EMISSION_FACTOR;
use carbon_footprint_aware::rotator::{self, Rotator};
use carbon_footprint_aware::{FuelType, RawUsageInputs, classify_risk, estimate};

#[derive(Parser)]
#[command(name = "carbon-footprint-aware")]
#[command(about = "Estimate weekly CO₂ from campus generators and motorcycles")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text, env = "CARBON_AWARE_FORMAT")]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate weekly emissions from usage
    Calc {
        /// Generator: times used per week (e.g., 5)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        generator_uses: String,

        /// Generator: hours per session (e.g., 2.5)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        generator_hours: String,

        /// Motorcycle: times used per week (e.g., 10)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        motorcycle_uses: String,

        /// Motorcycle: hours per session (e.g., 0.5)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        motorcycle_hours: String,

        /// Primary fuel type: petrol, diesel or kerosene
        #[arg(short, long)]
        fuel: Option<String>,

        /// Show yearly and car-driving equivalents
        #[arg(short, long)]
        equivalents: bool,
    },

    /// Classify a weekly emissions figure in kg CO₂
    Risk {
        #[arg(allow_hyphen_values = true)]
        weekly_kg: f64,
    },

    /// List fuel types and their emission factors
    Factors,

    /// Show awareness material about carbon emissions
    Learn {
        /// Only show one section
        #[arg(short, long, value_enum)]
        section: Option<Section>,
    },

    /// Cycle through the awareness banner images
    Slideshow {
        /// Image to include; repeat for more. Defaults to the built-in banners
        #[arg(long = "frame")]
        frames: Vec<String>,

        /// Milliseconds between images
        #[arg(long, default_value_t = rotator::DEFAULT_INTERVAL.as_millis() as u64)]
        interval_ms: u64,

        /// Number of image changes before stopping
        #[arg(long, default_value_t = 4)]
        cycles: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Calc {
            generator_uses,
            generator_hours,
            motorcycle_uses,
            motorcycle_hours,
            fuel,
            equivalents,
        } => {
            let inputs = RawUsageInputs {
                generator_uses,
                generator_hours,
                motorcycle_uses,
                motorcycle_hours,
                fuel,
            };
            debug!(?inputs, "calculating emissions");

            let estimate = estimate(&inputs).with_equivalents(equivalents);
            if let Some(key) = &estimate.unrecognized_fuel {
                warn!(fuel = %key, "unrecognised fuel type, using default factor");
            }
            info!(
                weekly_kg_co2 = estimate.result.weekly_kg_co2,
                risk = estimate.risk.label(),
                "emissions calculated"
            );

            match format {
                Format::Text => print!("{}", estimate),
                Format::Json => println!("{}", estimate.to_json()?),
            }
        }

        Commands::Risk { weekly_kg } => {
            let risk = classify_risk(weekly_kg);
            match format {
                Format::Text => println!("{:.2} kg CO₂/week: {}", weekly_kg, risk),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "weekly_kg_co2": weekly_kg,
                        "risk": risk,
                        "label": risk.label(),
                        "color": risk.color(),
                    }))?
                ),
            }
        }

        Commands::Factors => match format {
            Format::Text => {
                println!("{:<10} {:>12}  {}", "Fuel", "kg CO₂/h", "Typical use");
                println!("{}", "-".repeat(50));
                for fuel in FuelType::ALL {
                    println!(
                        "{:<10} {:>12.1}  {}",
                        fuel.key(),
                        fuel.emission_factor(),
                        fuel.typical_use()
                    );
                }
                println!("{:<10} {:>12.1}  {}", "(default)", DEFAULT_EMISSION_FACTOR, "No or unknown fuel");
            }
            Format::Json => {
                let fuels: Vec<_> = FuelType::ALL
                    .iter()
                    .map(|fuel| {
                        json!({
                            "fuel": fuel,
                            "kg_co2_per_hour": fuel.emission_factor(),
                            "typical_use": fuel.typical_use(),
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "fuels": fuels,
                        "default_kg_co2_per_hour": DEFAULT_EMISSION_FACTOR,
                    }))?
                );
            }
        },

        Commands::Learn { section } => match format {
            Format::Text => match section {
                Some(section) => print!("{}", content::render_section(section)),
                None => print!("{}", content::render_all()),
            },
            Format::Json => {
                let value = match section {
                    Some(Section::Intro) => json!(content::INTRO_CARDS),
                    Some(Section::Impact) => json!(content::IMPACT_CARDS),
                    Some(Section::Tips) => json!(content::TIP_CATEGORIES),
                    None => json!({
                        "title": content::SITE_TITLE,
                        "headline": content::HERO_HEADLINE,
                        "text": content::HERO_TEXT,
                        "intro": content::INTRO_CARDS,
                        "impact": content::IMPACT_CARDS,
                        "tips": content::TIP_CATEGORIES,
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        },

        Commands::Slideshow {
            frames,
            interval_ms,
            cycles,
        } => {
            let frames = if frames.is_empty() {
                rotator::default_frames()
            } else {
                frames
            };
            let interval = Duration::from_millis(interval_ms);

            let show = move |index: usize, frame: &str| match format {
                Format::Text => println!("{} [{}]", frame, rotator::FRAME_ALT_TEXT),
                Format::Json => println!("{}", json!({ "index": index, "frame": frame })),
            };

            show(0, frames[0].as_str());
            let handle = Rotator::spawn(frames, interval, show)?;

            // Wake half an interval after the last expected change
            thread::sleep(interval * cycles + interval / 2);
            let advances = handle.cancel()?;
            info!(advances, "slideshow finished");
        }
    }

    Ok(())
}
