use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::time::Instant;

/// A canvas inspection and conversion CLI for the keiro journey engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the editor canvas JSON file
    canvas_path: String,

    /// Simulate dropping extra nodes, e.g. "action@240,80" (repeatable)
    #[arg(short, long = "drop", value_name = "KIND@X,Y")]
    drops: Vec<String>,

    /// Write a binary snapshot of the resulting canvas to this path
    #[arg(short, long)]
    archive: Option<String>,

    /// Append the canvas to a journey vault file as a launched journey
    #[arg(long, requires = "name")]
    vault: Option<String>,

    /// Journey name to store in the vault entry
    #[arg(long)]
    name: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Load and convert ---
    let load_start = Instant::now();
    let canvas_json = fs::read_to_string(&cli.canvas_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read canvas file '{}': {}",
            &cli.canvas_path, e
        ))
    });
    let raw = RawCanvas::from_json(&canvas_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas JSON: {}", e)));
    let mut graph = raw
        .into_journey()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert canvas: {}", e)));
    let load_duration = load_start.elapsed();

    println!(
        "Loaded canvas: {} top-level node(s), {} step(s) total",
        graph.len(),
        graph.step_count()
    );

    let dangling = graph.dangling_references();
    if dangling.is_empty() {
        println!("No dangling edges.");
    } else {
        println!("Dangling edges ({}):", dangling.len());
        for (source, target) in &dangling {
            println!("  {} -> {} (missing)", source, target);
        }
    }

    // --- 2. Simulated drops ---
    let place_start = Instant::now();
    for spec in &cli.drops {
        let (kind, desired) = parse_drop(spec)
            .unwrap_or_else(|| exit_with_error(&format!("Invalid drop spec '{}'", spec)));
        let id = graph.add_node(kind, desired);
        let placed = graph.node(&id).map(|node| node.position).unwrap_or(desired);
        println!("Dropped {} as '{}' at {}", kind, id, placed);
    }
    let place_duration = place_start.elapsed();

    // --- 3. Outputs ---
    if let Some(archive_path) = &cli.archive {
        CanvasArchive::new(graph.clone())
            .save(archive_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write archive: {}", e)));
        println!("Archived canvas to '{}'", archive_path);
    }

    if let Some(vault_path) = &cli.vault {
        let name = cli.name.as_deref().unwrap_or("Untitled journey");
        let journey = SavedJourney::launched(
            format!("journey-{}", graph.len()),
            name,
            "Launched from keiro-cli",
            &graph,
            "All Contacts",
            "keiro-cli",
            "1970-01-01",
        );
        JourneyVault::open(vault_path)
            .launch(journey)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to update vault: {}", e)));
        println!("Launched '{}' into vault '{}'", name, vault_path);
    }

    // --- 4. Summary ---
    println!("\n--- Performance Summary ---");
    println!("Load + Convert:  {:?}", load_duration);
    if !cli.drops.is_empty() {
        println!("Placement:       {:?}", place_duration);
    }
    println!("Total Execution: {:?}", total_start.elapsed());
}

/// Parses a drop spec of the form `kind@x,y`.
fn parse_drop(spec: &str) -> Option<(NodeKind, Point)> {
    let (kind_token, coords) = spec.split_once('@')?;
    let kind = NodeKind::from_token(kind_token)?;
    let (x, y) = coords.split_once(',')?;
    Some((
        kind,
        Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?),
    ))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
