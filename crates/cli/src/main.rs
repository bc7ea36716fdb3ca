#![deny(unsafe_code)]
//! CLI binary for the chromatic color-space engine.
//!
//! Subcommands:
//! - `convert <model> <values>...`: show a color in every model
//! - `models`: print the models and their fields
//! - `gamut <model>`: print sampled 3D positions of the RGB cube
//! - `split <image>`: write one grayscale PNG per channel

mod error;

use chromatic_channels::snapshot;
use chromatic_core::{sample_gamut, Color, ColorModel, Rgb};
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "chromatic", about = "Color-space conversion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color and print it in every model.
    Convert {
        /// Source model (RGB, CMYK, HSV, HSL, HSI, Lab, YCbCr).
        model: String,

        /// Field values in model order, or a single hex string for RGB.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// List models with their fields and ranges.
    Models,
    /// Sample the RGB cube and print each sample's position in a model's solid.
    Gamut {
        /// Model whose solid to place the samples in.
        model: String,

        /// Distance between samples on each RGB axis.
        #[arg(short, long, default_value_t = 25)]
        step: u8,
    },
    /// Split an image into one grayscale PNG per channel.
    Split {
        /// Input image path.
        image: PathBuf,

        /// Model whose channels to extract.
        #[arg(short, long)]
        model: String,

        /// Directory for the plane images.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn parse_model(name: &str) -> Result<ColorModel, CliError> {
    ColorModel::from_name(name).map_err(|e| {
        CliError::Input(format!(
            "{e} (expected one of: {})",
            ColorModel::list_names().join(", ")
        ))
    })
}

/// Builds the source color from command-line values.
///
/// A lone RGB value is read as hex (`#4169e1` or `4169e1`).
fn parse_color(model: ColorModel, values: &[String]) -> Result<Color, CliError> {
    if let (ColorModel::Rgb, [hex]) = (model, values) {
        return Ok(Color::Rgb(Rgb::from_hex(hex)?));
    }
    let numbers = values
        .iter()
        .map(|v| {
            v.trim()
                .parse::<i64>()
                .map_err(|_| CliError::Input(format!("not an integer: {v:?}")))
        })
        .collect::<Result<Vec<i64>, CliError>>()?;
    Ok(Color::from_values(model, &numbers)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { model, values } => {
            let model = parse_model(&model)?;
            let color = parse_color(model, &values)?;
            let rgb = color.to_rgb();
            let conversions: Vec<Color> = ColorModel::ALL
                .into_iter()
                .map(|m| Color::from_rgb(m, rgb))
                .collect();

            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "rgb": rgb,
                    "hex": rgb.to_hex(),
                    "conversions": conversions
                        .iter()
                        .map(|c| serde_json::json!({
                            "model": c.model(),
                            "value": c.values(),
                            "text": c.to_string(),
                        }))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{:<6} {}", "Hex", rgb.to_hex());
                for c in &conversions {
                    println!("{:<6} {c}", c.model().name());
                }
            }
        }
        Command::Models => {
            if cli.json {
                let schemas: Vec<_> = ColorModel::ALL
                    .into_iter()
                    .map(ColorModel::field_schema)
                    .collect();
                println!("{}", serde_json::to_string_pretty(&schemas)?);
            } else {
                for model in ColorModel::ALL {
                    println!("{model}:");
                    for field in model.fields() {
                        let wrap = if field.wraps { ", wraps" } else { "" };
                        println!(
                            "  {:<3} {:<16} {}..{}{wrap}",
                            field.symbol, field.label, field.min, field.max
                        );
                    }
                }
            }
        }
        Command::Gamut { model, step } => {
            let model = parse_model(&model)?;
            let points = sample_gamut(model, step)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for p in &points {
                    println!(
                        "{} {:>7.3} {:>7.3} {:>7.3}",
                        p.hex, p.position.x, p.position.y, p.position.z
                    );
                }
                eprintln!("{} samples of {model} at step {step}", points.len());
            }
        }
        Command::Split {
            image,
            model,
            out_dir,
        } => {
            let model = parse_model(&model)?;
            let planes = snapshot::split_image(&image, model)?;
            let stem = image
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            let paths = snapshot::write_planes(&planes, &out_dir, &stem)?;

            if cli.json {
                let info = serde_json::json!({
                    "model": model,
                    "width": planes.width(),
                    "height": planes.height(),
                    "planes": paths
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for path in &paths {
                    eprintln!("wrote {}", path.display());
                }
                eprintln!(
                    "split {} ({}x{}) into {} {model} planes",
                    image.display(),
                    planes.width(),
                    planes.height(),
                    paths.len()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
