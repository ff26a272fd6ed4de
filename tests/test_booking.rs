use std::collections::HashSet;

use flight_route_network::domain::network::FlightNetwork;
use flight_route_network::error::Error;

/// Builds the sample network used by the booking scenarios.
fn sample_network() -> FlightNetwork {
    let mut network = FlightNetwork::new();

    network.add_airport("DEL");
    network.add_airport("BOM");
    network.add_airport("BLR");
    network.add_airport("HYD");
    network.add_airport("MAA");

    network.add_flight("AI101", "DEL", "BOM", 2.0, "Air India");
    network.add_flight("SG202", "DEL", "BLR", 2.5, "SpiceJet");
    network.add_flight("6E303", "BOM", "HYD", 1.5, "IndiGo");
    network.add_flight("UK404", "BLR", "MAA", 1.0, "Vistara");
    network.add_flight("G8505", "HYD", "MAA", 1.5, "GoAir");

    network
}

#[test]
fn test_booking_assigns_sequential_ids() {
    let network = sample_network();

    let first = network.book("Alice", "DEL", "MAA", "2025-01-01", None).expect("First booking must succeed");
    let second = network.book("Bob", "DEL", "BOM", "2025-02-01", None).expect("Second booking must succeed");

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(network.reservation_count(), 2);
}

#[test]
fn test_lookup_returns_stored_record_unchanged() {
    let network = sample_network();

    let id = network.book("Alice", "DEL", "MAA", "2025-01-01", None).expect("booking");
    let expected = network.search("DEL", "MAA", None).expect("route");

    // A later booking must not disturb the first record.
    network.book("Bob", "DEL", "BOM", "2025-02-01", None).expect("booking");

    let reservation = network.lookup(id).expect("Reservation 1 must exist");

    assert_eq!(reservation.id, 1);
    assert_eq!(reservation.user, "Alice");
    assert_eq!(reservation.date, "2025-01-01");
    assert_eq!(reservation.route.stops, expected.route.stops, "The stored route must match what search returns for the same query");
    assert_eq!(reservation.route.distance, expected.route.distance);
}

#[test]
fn test_booking_with_preference_stores_that_airline() {
    let network = sample_network();

    let id = network.book("Alice", "DEL", "MAA", "2025-01-01", Some("Vistara")).expect("booking");

    let reservation = network.lookup(id).expect("lookup");
    assert_eq!(reservation.airline, "Vistara");
}

#[test]
fn test_booking_without_preference_stores_all_available_airlines() {
    let network = sample_network();

    let id = network.book("Alice", "DEL", "MAA", "2025-01-01", None).expect("booking");
    let matched = network.search("DEL", "MAA", None).expect("route");

    let reservation = network.lookup(id).expect("lookup");

    // The airline set has no iteration order, so compare as sets.
    let stored: HashSet<&str> = reservation.airline.split(", ").collect();
    let expected: HashSet<&str> = matched.airlines.iter().map(|airline| airline.as_str()).collect();
    assert_eq!(stored, expected, "The stored airline list must contain exactly the available airlines");
}

#[test]
fn test_failed_booking_stores_nothing() {
    let network = sample_network();

    let result = network.book("Alice", "DEL", "MAA", "2025-01-01", Some("AirAsia"));

    assert!(matches!(result, Err(Error::AirlineUnavailable(_))), "An airline absent from the catalog must always fail, got {:?}", result);
    assert_eq!(network.reservation_count(), 0, "A failed booking must not mutate the store");

    // The next successful booking still takes the first id.
    let id = network.book("Alice", "DEL", "MAA", "2025-01-01", None).expect("booking");
    assert_eq!(id, 1);
}

#[test]
fn test_booking_on_empty_network_degrades_to_no_route() {
    let network = FlightNetwork::new();

    let result = network.book("Alice", "DEL", "MAA", "2025-01-01", None);

    assert!(matches!(result, Err(Error::NoRouteFound { .. })), "Booking before any airports or flights exist yields NoRouteFound, got {:?}", result);
}

#[test]
fn test_lookup_unknown_id_fails() {
    let network = sample_network();

    let result = network.lookup(42);

    assert!(matches!(result, Err(Error::ReservationNotFound(42))), "Unknown ids must yield ReservationNotFound, got {:?}", result);
}
