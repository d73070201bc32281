// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use aethergraph::layout::mapper::map_dataset;
use aethergraph::model::{Canvas, Connection, GraphDataset, NodeId, Size};
use aethergraph::ops::{apply_event, Effect, SurfaceEvent};

// Benchmark identity (keep stable):
// - Group name in this file: `canvas.events`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (`connect_burst`, `reconnect_cycle`,
//   `media_load`).
fn checksum_effect(effect: &Effect) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(effect.edges_added.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(effect.edges_removed.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(effect.edges_updated.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(effect.nodes_updated.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(u64::from(effect.selection_changed));
    acc
}

fn fixture_canvas(node_count: usize) -> Canvas {
    let nodes: Vec<_> = (0..node_count)
        .map(|i| serde_json::json!({ "id": format!("n{i}"), "label": format!("Node {i}") }))
        .collect();
    let links: Vec<_> = (1..node_count)
        .map(|i| serde_json::json!({ "source": format!("n{}", i - 1), "target": format!("n{i}") }))
        .collect();
    let dataset: GraphDataset =
        serde_json::from_value(serde_json::json!({ "nodes": nodes, "links": links }))
            .expect("bench dataset");
    map_dataset(&dataset).expect("bench canvas")
}

fn node_id(index: usize) -> NodeId {
    format!("n{index}").parse().expect("node id")
}

fn bench_canvas_events(c: &mut Criterion) {
    const NODES: usize = 200;
    const EVENTS: usize = 100;

    let base = fixture_canvas(NODES);
    let mut group = c.benchmark_group("canvas.events");
    group.throughput(Throughput::Elements(EVENTS as u64));

    group.bench_function("connect_burst", |b| {
        b.iter_batched(
            || base.clone(),
            |mut canvas| {
                let mut acc = 0u64;
                for i in 0..EVENTS {
                    let effect = apply_event(
                        &mut canvas,
                        SurfaceEvent::Connect {
                            connection: Connection::new(
                                node_id(i % NODES),
                                node_id((i * 7) % NODES),
                            ),
                        },
                    );
                    acc = acc.wrapping_add(checksum_effect(&effect));
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("reconnect_cycle", |b| {
        b.iter_batched(
            || base.clone(),
            |mut canvas| {
                let mut acc = 0u64;
                for i in 1..=EVENTS {
                    let edge_id = format!("e-{}", i % (NODES - 1))
                        .parse()
                        .expect("edge id");
                    apply_event(
                        &mut canvas,
                        SurfaceEvent::ReconnectStart {
                            edge_id: edge_id.clone(),
                        },
                    );
                    let effect = apply_event(
                        &mut canvas,
                        SurfaceEvent::Reconnect {
                            edge_id: edge_id.clone(),
                            connection: Connection::new(node_id(i % NODES), node_id(0)),
                        },
                    );
                    acc = acc.wrapping_add(checksum_effect(&effect));
                    apply_event(
                        &mut canvas,
                        SurfaceEvent::ReconnectEnd {
                            edge_id,
                            over_handle: true,
                        },
                    );
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("media_load", |b| {
        b.iter_batched(
            || base.clone(),
            |mut canvas| {
                let mut acc = 0u64;
                for i in 0..EVENTS {
                    let effect = apply_event(
                        &mut canvas,
                        SurfaceEvent::MediaLoaded {
                            node_id: node_id(i % NODES),
                            natural: Size::new(640.0, 480.0),
                        },
                    );
                    acc = acc.wrapping_add(checksum_effect(&effect));
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_canvas_events);
criterion_main!(benches);
