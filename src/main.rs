// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! AetherGraph CLI entrypoint.
//!
//! Loads a node-link dataset, builds the initial canvas, and prints a summary
//! of what the diagram surface would render. `--inspect` prints the inspector
//! card and neighborhood for one node instead.

use std::error::Error;

use aethergraph::layout::mapper::map_dataset;
use aethergraph::media;
use aethergraph::model::{GraphDataset, NodeId};
use aethergraph::query::{inspector_card, neighborhood};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <dataset.json>\n  {program} <dataset.json> --inspect <node-id>\n\nPrints the mapped canvas (grid placement, resolved media) for a node-link\ndataset. --inspect prints the inspector card and neighborhood of one node."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    dataset_path: Option<String>,
    inspect: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--inspect" => {
                if options.inspect.is_some() {
                    return Err(());
                }
                let node_id = args.next().ok_or(())?;
                options.inspect = Some(node_id);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.dataset_path.is_some() {
                    return Err(());
                }
                options.dataset_path = Some(arg);
            }
        }
    }

    if options.dataset_path.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "aethergraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let Some(path) = options.dataset_path else {
            print_usage(&program);
            std::process::exit(2);
        };
        let raw = std::fs::read_to_string(&path)?;
        let dataset: GraphDataset = serde_json::from_str(&raw)?;
        let canvas = map_dataset(&dataset)?;

        if let Some(inspect) = options.inspect {
            let node_id: NodeId = inspect.parse()?;
            let Some(node) = canvas.node(&node_id) else {
                return Err(format!("no node with id '{node_id}'").into());
            };

            let card = inspector_card(node);
            println!("{} ({})", card.title, card.node_id);
            if let Some(type_tag) = &card.type_tag {
                println!("  type: {type_tag}");
            }
            if let Some(description) = &card.description {
                println!("  {description}");
            }
            for row in &card.rows {
                println!("  {}: {}", row.key, row.value);
            }

            let hood = neighborhood(&canvas, &node_id);
            println!(
                "  edges: {}  neighbors: {}",
                hood.incident_edges.len(),
                hood.neighbors.len()
            );
            for neighbor in &hood.neighbors {
                println!("    -> {neighbor}");
            }
            return Ok(());
        }

        println!(
            "canvas: {} nodes, {} edges",
            canvas.nodes().len(),
            canvas.edges().len()
        );
        for node in canvas.nodes().values() {
            let media = media::resolve(node.meta(), Some(node.node_id().as_str()));
            let position = node.position();
            println!(
                "  {} @ ({}, {})  media: {:?} {}",
                node.node_id(),
                position.x,
                position.y,
                media.kind,
                media.src.as_deref().unwrap_or("(text fallback)")
            );
        }

        Ok(())
    })();

    if let Err(error) = result {
        eprintln!("aethergraph: {error}");
        std::process::exit(1);
    }
}
