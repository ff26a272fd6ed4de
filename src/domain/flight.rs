use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::domain::graph::RouteGraph;
use crate::domain::id::{AirlineName, AirportCode, FlightNumber};

/// A scheduled connection between two airports.
#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    pub number: FlightNumber,
    pub departure: AirportCode,
    pub destination: AirportCode,
    pub duration: f64,
    pub airline: AirlineName,
}

/// Maps flight numbers to flight records and keeps the graph's edge set
/// in sync.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: HashMap<FlightNumber, Flight>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        FlightCatalog { flights: HashMap::new() }
    }

    /// Registers a flight and adds its edge to the graph.
    ///
    /// Endpoints are normalized to uppercase. Re-adding an existing flight
    /// number replaces the stored record; the graph still gains a fresh
    /// adjacency entry on every call, so the superseded duration stays in
    /// the adjacency lists. There is no removal operation.
    pub fn add_flight(
        &mut self,
        graph: &mut RouteGraph,
        number: FlightNumber,
        departure: &str,
        destination: &str,
        duration: f64,
        airline: AirlineName,
    ) {
        let departure = AirportCode::normalized(departure);
        let destination = AirportCode::normalized(destination);

        graph.add_edge(departure.clone(), destination.clone(), duration);

        let flight = Flight { number: number.clone(), departure, destination, duration, airline };

        match self.flights.entry(number) {
            Entry::Occupied(mut entry) => {
                log::info!("Flight '{}' already exists. Replacing the stored record.", entry.key());
                entry.insert(flight);
            }
            Entry::Vacant(entry) => {
                log::debug!("Registered flight '{}' ({} -> {}).", entry.key(), flight.departure, flight.destination);
                entry.insert(flight);
            }
        }
    }

    pub fn get(&self, number: &FlightNumber) -> Option<&Flight> {
        self.flights.get(number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.values()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}
