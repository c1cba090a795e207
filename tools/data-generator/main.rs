use clap::Parser;
use rand::rngs::ThreadRng;
use rand::{Rng, rng};
use serde_json::json;
use std::fs;

/// A CLI tool to generate random canvas payloads for placement testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_canvas.json")]
    output: String,

    /// Number of top-level nodes to generate
    #[arg(short, long, default_value_t = 25)]
    nodes: usize,

    /// Width of the canvas region positions are drawn from
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Height of the canvas region positions are drawn from
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

const KINDS: [&str; 6] = [
    "trigger",
    "condition",
    "action",
    "delay",
    "split",
    "segmentation",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    println!(
        "Generating canvas with {} node(s) over a {}x{} region...",
        cli.nodes, cli.width, cli.height
    );

    let nodes: Vec<serde_json::Value> = (0..cli.nodes)
        .map(|index| generate_node(&mut rng, index, cli.nodes, cli.width, cli.height))
        .collect();

    let canvas = json!({ "nodes": nodes });
    fs::write(&cli.output, serde_json::to_string_pretty(&canvas)?)?;

    println!(
        "Successfully generated and saved canvas to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one top-level node. Dense position clusters are intentional;
/// they are what exercises the radial search and its grid fallback.
fn generate_node(
    rng: &mut ThreadRng,
    index: usize,
    total: usize,
    width: f32,
    height: f32,
) -> serde_json::Value {
    let kind = KINDS[rng.random_range(0..KINDS.len())];
    let position = json!({
        "x": rng.random_range(0.0..width),
        "y": rng.random_range(0.0..height),
    });

    // Roughly a third of the nodes point at a random successor.
    let connections: Vec<String> = if kind != "condition" && total > 1 && rng.random_bool(0.35) {
        vec![format!("gen-{}", rng.random_range(0..total))]
    } else {
        Vec::new()
    };

    let config = match kind {
        "action" => json!({
            "channel": (["email", "sms", "whatsapp"][rng.random_range(0..3)]),
            "subject": format!("Generated message {}", index),
        }),
        "delay" => json!({
            "duration": rng.random_range(1..72),
            "unit": (["minutes", "hours", "days"][rng.random_range(0..3)]),
        }),
        "split" => json!({ "percentage": rng.random_range(10..90) }),
        _ => json!({}),
    };

    json!({
        "id": format!("gen-{}", index),
        "type": kind,
        "position": position,
        "config": config,
        "connections": connections,
    })
}
