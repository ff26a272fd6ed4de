use std::collections::HashSet;

use serde::Serialize;

use crate::domain::flight::FlightCatalog;
use crate::domain::graph::{RouteGraph, ShortestPathTree};
use crate::domain::id::{AirlineName, AirportCode};
use crate::error::{Error, Result};

/// An ordered sequence of airports from origin to destination, inclusive
/// of both endpoints, with the total duration along the shortest path.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub stops: Vec<AirportCode>,
    pub distance: f64,
}

/// The outcome of a successful search: the shortest route plus the set of
/// airlines usable on it.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub route: Route,
    pub airlines: HashSet<AirlineName>,
}

/// Turns an `(origin, destination, preferred airline)` query into a
/// `RouteMatch`, or a definitive "no route" outcome.
///
/// A pure computation over already-loaded state: repeated identical calls
/// with no intervening writes produce identical results.
pub struct RouteResolver<'a> {
    graph: &'a RouteGraph,
    catalog: &'a FlightCatalog,
}

impl<'a> RouteResolver<'a> {
    pub fn new(graph: &'a RouteGraph, catalog: &'a FlightCatalog) -> Self {
        RouteResolver { graph, catalog }
    }

    /// Finds the shortest route between two airports and the airlines
    /// available along it.
    ///
    /// Airline availability is judged by node membership: a flight counts
    /// as available when both its endpoints lie anywhere in the route's
    /// stop set, even when they are not consecutive on it. On graphs with
    /// several disjoint paths through shared airports this overstates
    /// availability; the behavior is kept deliberately.
    ///
    /// # Errors
    /// - `NoRouteFound` if the destination is unreachable from the origin.
    /// - `AirlineUnavailable` if a route exists but the stated preference
    ///   covers no flight whose endpoints both lie on it.
    pub fn search(&self, origin: &str, destination: &str, preferred_airline: Option<&str>) -> Result<RouteMatch> {
        let origin = AirportCode::normalized(origin);
        let destination = AirportCode::normalized(destination);

        let tree = self.graph.shortest_paths(&origin);

        let stops = self.reconstruct(&tree, &origin, &destination)?;

        let distance = tree
            .distances
            .get(&destination)
            .copied()
            .ok_or_else(|| Error::NoRouteFound { origin: origin.clone(), destination: destination.clone() })?;

        let airlines = self.available_airlines(&stops);

        if let Some(preferred) = preferred_airline {
            let preferred = AirlineName::new(preferred);
            if !airlines.contains(&preferred) {
                return Err(Error::AirlineUnavailable(preferred));
            }
        }

        Ok(RouteMatch { route: Route { stops, distance }, airlines })
    }

    /// Walks the predecessor links backward from the destination to the
    /// origin. A missing link means the destination is not reachable.
    fn reconstruct(&self, tree: &ShortestPathTree, origin: &AirportCode, destination: &AirportCode) -> Result<Vec<AirportCode>> {
        let mut stops = vec![destination.clone()];
        let mut current = destination.clone();

        while current != *origin {
            match tree.predecessors.get(&current) {
                Some(previous) => {
                    current = previous.clone();
                    stops.push(current.clone());
                }
                None => {
                    log::debug!("No predecessor link for {} while walking back from {}.", current, destination);
                    return Err(Error::NoRouteFound { origin: origin.clone(), destination: destination.clone() });
                }
            }
        }

        stops.reverse();
        Ok(stops)
    }

    /// Collects every airline with a flight whose departure and
    /// destination both appear in the stop set.
    fn available_airlines(&self, stops: &[AirportCode]) -> HashSet<AirlineName> {
        let stop_set: HashSet<&AirportCode> = stops.iter().collect();

        self.catalog
            .iter()
            .filter(|flight| stop_set.contains(&flight.departure) && stop_set.contains(&flight.destination))
            .map(|flight| flight.airline.clone())
            .collect()
    }
}
