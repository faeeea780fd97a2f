//! `roomsearch rooms` command - list the rooms of the graph

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use roomsearch_core::error::Result;
use roomsearch_core::graph::{GraphModel, GraphProvider};
use roomsearch_core::records::escape_quotes;

/// Execute the rooms command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    let session = ctx.open_session(&config)?;
    let graph = session.graph();

    match ctx.cli.format {
        OutputFormat::Json => output_json(graph)?,
        OutputFormat::Human => output_human(graph),
        OutputFormat::Records => output_records(graph),
    }
    Ok(())
}

fn output_human(graph: &GraphModel) {
    for room in graph.rooms() {
        println!(
            "{:<10} {:<26} floor {:<4} -> {}",
            room.id,
            room.name,
            room.floor,
            graph.neighbors(&room.id).join(", ")
        );
    }
}

fn output_json(graph: &GraphModel) -> Result<()> {
    let rooms: Vec<_> = graph
        .rooms()
        .iter()
        .map(|room| {
            serde_json::json!({
                "id": room.id,
                "name": room.name,
                "floor": room.floor,
                "x": room.x,
                "y": room.y,
                "neighbors": graph.neighbors(&room.id),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rooms)?);
    Ok(())
}

fn output_records(graph: &GraphModel) {
    println!(
        "H roomsearch=1 records=1 mode=rooms rooms={} edges={}",
        graph.rooms().len(),
        graph.edge_count()
    );
    for room in graph.rooms() {
        println!(
            "R {} floor={} \"{}\" neighbors={}",
            room.id,
            room.floor,
            escape_quotes(&room.name),
            graph.neighbors(&room.id).join(",")
        );
    }
}
