use blurbrush::io::{load_rgba_image, save_rgba_image};
use blurbrush::{BlurBrush, BlurRadius, BrushConfig, Point, StampTool, TileRect};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Blur brush CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BrushConfigJson {
    width: u32,
    strength: f32,
}

impl Default for BrushConfigJson {
    fn default() -> Self {
        let cfg = BrushConfig::default();
        Self {
            width: cfg.width,
            strength: cfg.strength,
        }
    }
}

impl From<BrushConfigJson> for BrushConfig {
    fn from(value: BrushConfigJson) -> Self {
        Self {
            width: value.width,
            strength: value.strength,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GestureJson {
    down: [f32; 2],
    up: [f32; 2],
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: String,
    report_path: Option<String>,
    brush: BrushConfigJson,
    gestures: Vec<GestureJson>,
}

#[derive(Debug, Serialize)]
struct TileRecord {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl From<TileRect> for TileRecord {
    fn from(value: TileRect) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}

#[derive(Debug, Serialize)]
struct GestureRecord {
    index: usize,
    committed: bool,
    tile: Option<TileRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    radius: u32,
    resize_factor: u32,
    gestures: Vec<GestureRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("blurbrush=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() || config.output_path.is_empty() {
        return Err("input_path and output_path must be set in the config".into());
    }

    let mut canvas = load_rgba_image(&config.input_path)?;
    let brush_config = BrushConfig::from(config.brush);
    let params = BlurRadius::normalize(brush_config.strength);
    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        gestures = config.gestures.len(),
        "loaded canvas"
    );

    let mut brush = BlurBrush::new();
    brush.start(brush_config);
    let mut records = Vec::with_capacity(config.gestures.len());
    for (index, gesture) in config.gestures.iter().enumerate() {
        brush.pointer_down(Point::new(gesture.down[0], gesture.down[1]));
        let tile = brush.pointer_up(&mut canvas, Point::new(gesture.up[0], gesture.up[1]));
        records.push(GestureRecord {
            index,
            committed: tile.is_some(),
            tile: tile.map(TileRecord::from),
        });
    }
    brush.end();

    save_rgba_image(&config.output_path, &canvas)?;

    let output = Output {
        width: canvas.width(),
        height: canvas.height(),
        radius: params.radius,
        resize_factor: params.resize_factor,
        gestures: records,
    };
    let json = serde_json::to_string_pretty(&output)?;
    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
