//! Tests for the saved-journey record, the vault, and the canvas archive.
mod common;
use common::*;
use keiro::error::VaultError;
use keiro::graph::{ActionConfig, Channel, NodeConfig};
use keiro::journey::{JourneyStatus, STORAGE_KEY};
use keiro::prelude::*;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("keiro-test-{}-{}", std::process::id(), name))
}

fn graph_with_email_action() -> JourneyGraph {
    let mut graph = graph_with_condition();
    graph.update_node(
        "node-3",
        keiro::graph::NodePatch {
            config: Some(NodeConfig::Action(ActionConfig {
                channel: Some(Channel::Email),
                ..ActionConfig::default()
            })),
            ..Default::default()
        },
    );
    graph
}

#[test]
fn launched_journey_captures_the_canvas() {
    let graph = graph_with_email_action();
    let journey = SavedJourney::launched(
        "journey-1",
        "Welcome flow",
        "Onboards new signups",
        &graph,
        "New Users",
        "dana",
        "2024-03-01",
    );

    assert_eq!(journey.status, JourneyStatus::Active);
    assert_eq!(journey.nodes, 4);
    assert_eq!(journey.canvas_nodes.len(), 2);
    assert_eq!(journey.channels, ["email"]);
    assert_eq!(journey.segment, journey.target_segment);
    assert_eq!(journey.created_date, journey.last_modified);
    assert_eq!(journey.total_users, 0);
}

#[test]
fn saved_journey_serializes_in_camel_case() {
    let graph = graph_with_email_action();
    let journey = SavedJourney::launched(
        "journey-1",
        "Welcome flow",
        "",
        &graph,
        "New Users",
        "dana",
        "2024-03-01",
    );

    let value = serde_json::to_value(&journey).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "canvasNodes",
        "createdDate",
        "lastModified",
        "createdBy",
        "targetSegment",
        "totalUsers",
        "activeUsers",
        "completionRate",
        "conversionRate",
        "totalConversions",
    ] {
        assert!(object.contains_key(key), "missing key '{}'", key);
    }
    assert_eq!(object["status"], "active");
}

#[test]
fn vault_reads_missing_file_as_empty() {
    let vault = JourneyVault::open(temp_path("missing.json"));
    assert!(vault.load().unwrap().is_empty());
}

#[test]
fn vault_round_trips_the_journey_list() {
    let path = temp_path("roundtrip.json");
    let vault = JourneyVault::open(&path);

    let graph = graph_with_email_action();
    let journey = SavedJourney::launched(
        "journey-1",
        "Welcome flow",
        "Onboards new signups",
        &graph,
        "New Users",
        "dana",
        "2024-03-01",
    );

    vault.launch(journey.clone()).unwrap();
    let loaded = vault.load().unwrap();
    assert_eq!(loaded, [journey.clone()]);

    // Launching again appends rather than replacing.
    vault.launch(journey).unwrap();
    assert_eq!(vault.load().unwrap().len(), 2);

    fs::remove_file(&path).unwrap();
}

#[test]
fn vault_rejects_document_without_the_storage_key() {
    let path = temp_path("wrong-key.json");
    fs::write(&path, r#"{ "journeys": [] }"#).unwrap();

    let vault = JourneyVault::open(&path);
    match vault.load() {
        Err(VaultError::MissingKey(key)) => assert_eq!(key, STORAGE_KEY),
        other => panic!("unexpected result: {:?}", other),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn vault_rejects_malformed_documents() {
    let path = temp_path("malformed.json");
    fs::write(&path, "not json").unwrap();

    let vault = JourneyVault::open(&path);
    assert!(matches!(vault.load(), Err(VaultError::Malformed(_))));

    fs::remove_file(&path).unwrap();
}

#[test]
fn archive_round_trips_through_bytes() {
    let graph = graph_with_condition();
    let path = temp_path("canvas.bin");

    CanvasArchive::new(graph.clone())
        .save(path.to_str().unwrap())
        .unwrap();
    let restored = CanvasArchive::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(restored.graph.nodes(), graph.nodes());
    assert_eq!(restored.graph.step_count(), graph.step_count());

    fs::remove_file(&path).unwrap();
}

#[test]
fn archive_rejects_garbage_bytes() {
    assert!(CanvasArchive::from_bytes(&[0xFF, 0x00, 0x13]).is_err());
}
