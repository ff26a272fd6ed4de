use crate::api::network_dto::NetworkDto;
use crate::domain::flight::FlightCatalog;
use crate::domain::graph::RouteGraph;
use crate::domain::id::{AirlineName, AirportCode, FlightNumber};
use crate::domain::reservation::{Reservation, ReservationStore};
use crate::domain::route::{RouteMatch, RouteResolver};
use crate::error::Result;

/// The running system: graph, catalog and reservation store under one
/// owner.
///
/// One instance per running system; components borrow from it instead of
/// reaching for process-wide state. Registration goes through `&mut self`,
/// so writes are serialized by construction; searches only read, and
/// booking mutates nothing but the reservation store, which carries its
/// own lock.
#[derive(Debug, Default)]
pub struct FlightNetwork {
    graph: RouteGraph,
    catalog: FlightCatalog,
    reservations: ReservationStore,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self { graph: RouteGraph::new(), catalog: FlightCatalog::new(), reservations: ReservationStore::new() }
    }

    /// Builds a network from a parsed definition document: airports first,
    /// then flights.
    pub fn from_dto(dto: NetworkDto) -> Self {
        let mut network = FlightNetwork::new();

        log::debug!("Processing {} airports and {} flights from the definition.", dto.airports.len(), dto.flights.len());

        for code in dto.airports {
            network.add_airport(&code);
        }

        for flight in dto.flights {
            network.add_flight(&flight.flight_number, &flight.departure, &flight.destination, flight.duration, &flight.airline);
        }

        network
    }

    //-------------------------
    // --- Registration API ---
    //-------------------------

    pub fn add_airport(&mut self, code: &str) {
        self.graph.add_node(AirportCode::normalized(code));
    }

    pub fn add_flight(&mut self, number: &str, departure: &str, destination: &str, duration: f64, airline: &str) {
        self.catalog.add_flight(&mut self.graph, FlightNumber::new(number), departure, destination, duration, AirlineName::new(airline));
    }

    //------------------
    // --- Query API ---
    //------------------

    /// Shortest route between two airports plus the airlines available on
    /// it. See `RouteResolver::search` for the availability semantics.
    pub fn search(&self, origin: &str, destination: &str, preferred_airline: Option<&str>) -> Result<RouteMatch> {
        RouteResolver::new(&self.graph, &self.catalog).search(origin, destination, preferred_airline)
    }

    /// Books a ticket on the shortest route.
    ///
    /// Delegates to `search`; on failure nothing is stored and the typed
    /// failure propagates. On success the reservation holds the preferred
    /// airline if one was given, otherwise the comma-joined availability
    /// set.
    ///
    /// # Returns
    /// Returns the assigned reservation id.
    pub fn book(&self, user: &str, origin: &str, destination: &str, date: &str, preferred_airline: Option<&str>) -> Result<u64> {
        let matched = self.search(origin, destination, preferred_airline)?;

        let airline = match preferred_airline {
            Some(preferred) => preferred.to_string(),
            None => matched.airlines.iter().map(|airline| airline.as_str()).collect::<Vec<_>>().join(", "),
        };

        let id = self.reservations.insert(user, matched.route, date, airline);

        log::info!("Booked reservation {} for '{}' ({} -> {}).", id, user, origin, destination);

        Ok(id)
    }

    /// Get a stored reservation by id.
    pub fn lookup(&self, id: u64) -> Result<Reservation> {
        self.reservations.lookup(id)
    }

    //--------------------
    // --- Summary API ---
    //--------------------

    pub fn airport_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn flight_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }
}
