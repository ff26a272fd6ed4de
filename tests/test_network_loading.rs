use std::fs;
use std::path::PathBuf;

use flight_route_network::error::Error;
use flight_route_network::load_network;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("Scratch file must be writable");
    path
}

#[test]
fn test_load_sample_network() {
    let network = load_network("data/network.json").expect("The bundled sample network must load");

    assert_eq!(network.airport_count(), 5);
    assert_eq!(network.flight_count(), 5);
    assert_eq!(network.reservation_count(), 0);

    // The loaded network answers the worked example.
    let matched = network.search("DEL", "MAA", None).expect("route");
    assert_eq!(matched.route.distance, 3.5);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_network("data/definitely_not_here.json");

    assert!(matches!(result, Err(Error::IoError(_))), "A missing file must map to IoError, got {:?}", result.err());
}

#[test]
fn test_load_malformed_json_is_deserialization_error() {
    let path = scratch_file("flight_route_network_malformed.json", "{ \"airports\": [");

    let result = load_network(path.to_str().expect("utf-8 temp path"));

    assert!(matches!(result, Err(Error::DeserializationError(_))), "Malformed JSON must map to DeserializationError, got {:?}", result.err());
}

#[test]
fn test_load_network_with_unregistered_flight_endpoint() {
    // PNQ is referenced by a flight but never listed as an airport. The
    // definition still loads; the dangling endpoint is reachable but the
    // graph never expands it.
    let definition = r#"{
        "airports": ["DEL", "BOM"],
        "flights": [
            { "flightNumber": "AI101", "departure": "DEL", "destination": "BOM", "duration": 2, "airline": "Air India" },
            { "flightNumber": "AI777", "departure": "BOM", "destination": "PNQ", "duration": 0.5, "airline": "Air India" }
        ]
    }"#;
    let path = scratch_file("flight_route_network_dangling.json", definition);

    let network = load_network(path.to_str().expect("utf-8 temp path")).expect("Dangling endpoints must not fail the load");

    assert_eq!(network.airport_count(), 2);
    assert_eq!(network.flight_count(), 2);

    let matched = network.search("DEL", "PNQ", None).expect("The dangling endpoint is still reachable");
    assert_eq!(matched.route.distance, 2.5);
}
