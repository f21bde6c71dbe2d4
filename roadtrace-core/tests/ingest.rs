//! Integration tests for roadtrace-core
//!
//! Exercise the full ingestion path: a map extract and a batch of GPS
//! trace files on disk turned into one in-memory model, with problem
//! records skipped and reported instead of failing the run.

use std::fs;
use std::path::Path;

use roadtrace_core::Error;
use roadtrace_core::prelude::*;
use tempfile::TempDir;

const EXTRACT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="37.1200" lon="127.0000"/>
  <node id="2" lat="37.1210" lon="127.0015"/>
  <node id="3" lat="37.1225" lon="127.0030"/>
  <way id="100">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="highway" v="residential"/>
  </way>
  <way id="101">
    <nd ref="2"/>
    <nd ref="3"/>
    <nd ref="777"/>
  </way>
</osm>"#;

fn write_inputs(dir: &Path) {
    fs::write(dir.join("roads.osm"), EXTRACT).unwrap();
    fs::write(
        dir.join("gps_1.csv"),
        "latitude,longitude,angle,speed,hdop\n\
         37.1201,127.0002,45.0,30.0,1.2\n\
         37.1209,127.0014,46.5,31.0,1.1\n",
    )
    .unwrap();
    fs::write(
        dir.join("gps_2.csv"),
        "latitude,longitude,angle,speed,hdop\n\
         37.1211,127.0016,50.0,28.0,1.0\n\
         bad,record,here\n\
         37.1224,127.0029,52.0,27.5,0.9\n",
    )
    .unwrap();
}

fn config(dir: &Path, traces: &[&str]) -> IngestConfig {
    IngestConfig {
        osm_path: dir.join("roads.osm"),
        trace_dir: dir.to_path_buf(),
        trace_files: traces.iter().map(ToString::to_string).collect(),
        strict_refs: false,
    }
}

#[test]
fn builds_model_from_files_on_disk() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let sink = CaptureSink::new();
    let model = create_ingest_model(&config(dir.path(), &["gps_1.csv", "gps_2.csv"]), &sink)
        .expect("ingestion should succeed");

    assert_eq!(model.road_graph.node_count(), 3);
    assert_eq!(model.road_graph.way_count(), 2);
    assert_eq!(model.road_graph.node(3).unwrap().lat, 37.1225);
    // The unresolved reference in way 101 is dropped, the way survives
    assert_eq!(model.road_graph.ways()[1].nodes, vec![2, 3]);

    assert_eq!(model.traces.len(), 2);
    assert_eq!(model.traces[0].source, "gps_1.csv");
    assert_eq!(model.traces[0].len(), 2);
    // The malformed record in gps_2.csv is skipped, its neighbors survive
    assert_eq!(model.traces[1].len(), 2);
    assert_eq!(model.traces[1].fixes[1].hdop, 0.9);
}

#[test]
fn malformed_trace_records_warn_but_do_not_fail() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let sink = CaptureSink::new();
    create_ingest_model(&config(dir.path(), &["gps_2.csv"]), &sink).unwrap();

    assert_eq!(sink.count_at(Level::Warn), 1);
    let entries = sink.entries();
    let warning = entries
        .iter()
        .find(|entry| entry.level == Level::Warn)
        .unwrap();
    assert!(warning.message.contains("gps_2.csv"));
    assert!(warning.message.contains("bad,record,here"));
}

#[test]
fn missing_trace_resource_is_isolated() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let sink = CaptureSink::new();
    let model = create_ingest_model(
        &config(dir.path(), &["gps_1.csv", "gps_9.csv", "gps_2.csv"]),
        &sink,
    )
    .unwrap();

    assert_eq!(model.traces.len(), 3);
    assert_eq!(model.traces[1].source, "gps_9.csv");
    assert!(model.traces[1].is_empty());
    assert_eq!(model.traces[2].len(), 2);
    assert_eq!(sink.count_at(Level::Error), 1);
}

#[test]
fn missing_extract_fails_the_run() {
    let dir = TempDir::new().unwrap();

    let sink = CaptureSink::new();
    let result = create_ingest_model(&config(dir.path(), &[]), &sink);

    assert!(matches!(result, Err(Error::ResourceMissing(_))));
}

#[test]
fn malformed_extract_fails_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roads.osm"), "<osm><node id=\"1\"").unwrap();

    let sink = CaptureSink::new();
    let result = create_ingest_model(&config(dir.path(), &[]), &sink);

    assert!(matches!(result, Err(Error::MalformedDocument(_))));
}

#[test]
fn strict_mode_propagates_dangling_reference() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let sink = CaptureSink::new();
    let mut config = config(dir.path(), &["gps_1.csv"]);
    config.strict_refs = true;
    let result = create_ingest_model(&config, &sink);

    assert!(matches!(
        result,
        Err(Error::DanglingNodeRef {
            way_id: 101,
            node_id: 777
        })
    ));
}

#[test]
fn distances_between_loaded_nodes_are_usable() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    let sink = CaptureSink::new();
    let model = create_ingest_model(&config(dir.path(), &["gps_1.csv"]), &sink).unwrap();

    let a = model.road_graph.node(1).unwrap();
    let b = model.road_graph.node(3).unwrap();
    let km = distance(a.lat, a.lon, b.lat, b.lon);
    assert!(km > 0.0 && km < 1.0, "got {km} km");
}
