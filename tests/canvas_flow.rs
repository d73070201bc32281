// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! End-to-end session over the bundled seed dataset: map, resolve media,
//! size nodes, and drive the edge lifecycle the way a surface would.

use std::fs;
use std::path::{Path, PathBuf};

use aethergraph::layout::mapper::map_dataset;
use aethergraph::layout::GRID_UNIT;
use aethergraph::media::{self, MediaKind};
use aethergraph::model::{Canvas, Connection, GraphDataset, Position, Selection, Size};
use aethergraph::ops::{apply_event, SurfaceEvent};
use aethergraph::query::{inspector_card, neighborhood};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn seed_canvas() -> Canvas {
    let path = fixture_path("philoseed.json");
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    let dataset: GraphDataset =
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse seed: {err}"));
    map_dataset(&dataset).unwrap_or_else(|err| panic!("failed to map seed: {err}"))
}

#[test]
fn seed_dataset_maps_onto_the_placement_grid() {
    let canvas = seed_canvas();

    assert_eq!(canvas.nodes().len(), 7);
    assert_eq!(canvas.edges().len(), 6);

    // Index 5 wraps to row 1, column 0; index 6 sits beside it.
    let lecture = canvas.node(&"lecture-1".parse().unwrap()).unwrap();
    assert_eq!(lecture.position(), Position::new(0.0, 200.0));
    let numeric = canvas.node(&"7".parse().unwrap()).unwrap();
    assert_eq!(numeric.position(), Position::new(300.0, 200.0));

    // Dataset links keep given ids and synthesize the rest.
    assert!(canvas.edge(&"kant-nietzsche".parse().unwrap()).is_some());
    assert!(canvas.edge(&"e-0".parse().unwrap()).is_some());
}

#[test]
fn media_resolution_covers_every_precedence_rule_in_the_seed() {
    let canvas = seed_canvas();

    let resolve = |id: &str| {
        let node = canvas.node(&id.parse().unwrap()).unwrap();
        media::resolve(node.meta(), Some(node.node_id().as_str()))
    };

    // Known-portrait slug.
    let plato = resolve("plato");
    assert_eq!(plato.kind, MediaKind::Image);
    assert_eq!(plato.src.as_deref(), Some("/portraits/plato.jpg"));

    // Image-keyed field holding a video container.
    let lecture = resolve("lecture-1");
    assert_eq!(lecture.kind, MediaKind::Video);
    assert_eq!(lecture.src.as_deref(), Some("/media/cave-walkthrough.mp4"));
    assert_eq!(lecture.poster, None);

    // Explicit video with poster.
    let clip = resolve("7");
    assert_eq!(clip.kind, MediaKind::Video);
    assert_eq!(clip.src.as_deref(), Some("https://cdn.example/justice.webm"));
    assert_eq!(clip.poster.as_deref(), Some("/stills/justice.jpg"));

    // No media fields, unknown slug: generated avatar.
    let arendt = resolve("arendt");
    assert_eq!(arendt.kind, MediaKind::Image);
    assert!(arendt.src.unwrap().contains("ui-avatars.com"));
}

#[test]
fn a_full_interaction_session_keeps_the_invariants() {
    let mut canvas = seed_canvas();
    let edges_at_start = canvas.edges().len();

    // Media arrives late and twice; sizing applies once and stays grid-aligned.
    for natural in [Size::new(1280.0, 720.0), Size::new(640.0, 480.0)] {
        apply_event(
            &mut canvas,
            SurfaceEvent::MediaLoaded {
                node_id: "plato".parse().unwrap(),
                natural,
            },
        );
    }
    let plato = canvas.node(&"plato".parse().unwrap()).unwrap();
    assert!(plato.sized());
    assert_eq!(plato.size().width % GRID_UNIT, 0.0);
    assert_eq!(plato.size().height % GRID_UNIT, 0.0);
    assert!(plato.size().width <= 420.0 + GRID_UNIT / 2.0);

    // Connect a new edge between existing nodes via handles.
    let effect = apply_event(
        &mut canvas,
        SurfaceEvent::Connect {
            connection: Connection::with_handles(
                "arendt".parse().unwrap(),
                "right-2".parse().unwrap(),
                "nietzsche".parse().unwrap(),
                "left-0".parse().unwrap(),
            ),
        },
    );
    assert_eq!(canvas.edges().len(), edges_at_start + 1);
    let created = effect.edges_added[0].clone();

    // Select it, reconnect its target, and confirm selection survives a commit.
    apply_event(&mut canvas, SurfaceEvent::EdgeClick { edge_id: created.clone() });
    apply_event(
        &mut canvas,
        SurfaceEvent::ReconnectStart { edge_id: created.clone() },
    );
    apply_event(
        &mut canvas,
        SurfaceEvent::Reconnect {
            edge_id: created.clone(),
            connection: Connection::new("arendt".parse().unwrap(), "kant".parse().unwrap()),
        },
    );
    apply_event(
        &mut canvas,
        SurfaceEvent::ReconnectEnd {
            edge_id: created.clone(),
            over_handle: true,
        },
    );
    assert_eq!(canvas.selection(), &Selection::Edge(created.clone()));
    assert_eq!(
        canvas.edge(&created).unwrap().target(),
        &"kant".parse().unwrap()
    );

    // Now drag it off into empty space: deleted, selection cleared.
    apply_event(
        &mut canvas,
        SurfaceEvent::ReconnectStart { edge_id: created.clone() },
    );
    apply_event(
        &mut canvas,
        SurfaceEvent::ReconnectEnd {
            edge_id: created.clone(),
            over_handle: false,
        },
    );
    assert_eq!(canvas.edges().len(), edges_at_start);
    assert!(canvas.edge(&created).is_none());
    assert!(canvas.selection().is_none());

    // Every surviving edge still references live nodes.
    for edge in canvas.edges().values() {
        assert!(canvas.node(edge.source()).is_some());
        assert!(canvas.node(edge.target()).is_some());
    }
}

#[test]
fn inspector_and_neighborhood_agree_with_the_dataset() {
    let canvas = seed_canvas();

    let kant = canvas.node(&"kant".parse().unwrap()).unwrap();
    let card = inspector_card(kant);
    assert_eq!(card.title, "Immanuel Kant");
    assert_eq!(card.type_tag.as_deref(), Some("philosopher"));
    assert_eq!(card.description.as_deref(), Some("Transcendental idealism."));
    assert!(card.rows.iter().any(|row| row.key == "era"));

    let hood = neighborhood(&canvas, &"kant".parse().unwrap());
    assert_eq!(hood.incident_edges.len(), 3);
    let neighbors: Vec<_> = hood.neighbors.iter().map(|id| id.as_str()).collect();
    assert_eq!(neighbors, vec!["arendt", "aristotle", "nietzsche"]);
}
