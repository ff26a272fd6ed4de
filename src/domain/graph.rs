use std::collections::{HashMap, HashSet};

use crate::domain::id::AirportCode;

/// The result of a single-source shortest-path run.
///
/// Airports unreachable from the source are absent from both maps.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    /// Minimum cumulative duration from the source, per reachable airport.
    pub distances: HashMap<AirportCode, f64>,

    /// The airport immediately preceding each reachable airport on its
    /// cheapest known path. The source itself has no entry.
    pub predecessors: HashMap<AirportCode, AirportCode>,
}

/// Models the flight connectivity between airports as a weighted,
/// undirected graph.
///
/// The `RouteGraph` manages:
/// * **Nodes**: the set of registered airports.
/// * **Connectivity**: adjacency lists mapping each airport to its
///   neighbours with the duration of the connecting flight.
/// * **Direct distances**: a lookup of the most recently registered
///   duration per ordered airport pair.
///
/// Adjacency lists are append-only. Registering the same pair twice keeps
/// both entries, while the direct-distance lookup only retains the latest
/// duration for that exact pair. The solver relaxes every entry
/// individually, so the cheaper of two superseding durations still wins.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// All registered airports.
    nodes: HashSet<AirportCode>,

    /// The adjacency list representing the graph structure.
    /// Maps an airport to its outgoing `(neighbour, duration)` entries.
    adjacency: HashMap<AirportCode, Vec<(AirportCode, f64)>>,

    /// Latest registered duration per ordered airport pair.
    direct_distances: HashMap<(AirportCode, AirportCode), f64>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self { nodes: HashSet::new(), adjacency: HashMap::new(), direct_distances: HashMap::new() }
    }

    //---------------------
    // --- Node Methods ---
    //---------------------

    /// Registers an airport. Idempotent: re-registering an existing code
    /// leaves its adjacency list untouched.
    pub fn add_node(&mut self, code: AirportCode) {
        self.nodes.insert(code.clone());
        self.adjacency.entry(code).or_default();
    }

    pub fn contains(&self, code: &AirportCode) -> bool {
        self.nodes.contains(code)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    //---------------------
    // --- Edge Methods ---
    //---------------------

    /// Registers a symmetric connection between two airports.
    ///
    /// Both directions become traversable with the same duration. Repeat
    /// calls for the same pair append duplicate adjacency entries and
    /// overwrite the direct-distance lookup. Endpoints that were never
    /// registered as nodes get an adjacency list of their own; they can
    /// pick up distances during a solver run but are never expanded.
    pub fn add_edge(&mut self, a: AirportCode, b: AirportCode, duration: f64) {
        self.adjacency.entry(a.clone()).or_default().push((b.clone(), duration));
        self.adjacency.entry(b.clone()).or_default().push((a.clone(), duration));

        self.direct_distances.insert((a.clone(), b.clone()), duration);
        self.direct_distances.insert((b, a), duration);
    }

    /// Returns the most recently registered duration for the ordered pair,
    /// if any connection between the two airports was ever added.
    pub fn direct_distance(&self, a: &AirportCode, b: &AirportCode) -> Option<f64> {
        self.direct_distances.get(&(a.clone(), b.clone())).copied()
    }

    pub fn neighbours(&self, code: &AirportCode) -> &[(AirportCode, f64)] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    //----------------------
    // --- Shortest Paths ---
    //----------------------

    /// Computes shortest distances and predecessor links from `source` to
    /// every reachable airport.
    ///
    /// Classic single-source algorithm over non-negative durations: pick
    /// the unvisited registered airport with the smallest tentative
    /// distance, expand it, relax each of its adjacency entries. Selection
    /// is a linear scan, O(V^2) overall. Ties are broken arbitrarily.
    ///
    /// The source always carries distance zero, registered or not.
    pub fn shortest_paths(&self, source: &AirportCode) -> ShortestPathTree {
        let mut distances: HashMap<AirportCode, f64> = HashMap::new();
        let mut predecessors: HashMap<AirportCode, AirportCode> = HashMap::new();

        distances.insert(source.clone(), 0.0);

        let mut unvisited: HashSet<AirportCode> = self.nodes.clone();

        while let Some((current, current_distance)) = Self::closest_unvisited(&unvisited, &distances) {
            unvisited.remove(&current);

            for (neighbour, duration) in self.neighbours(&current) {
                let candidate = current_distance + duration;

                let improves = distances.get(neighbour).is_none_or(|known| candidate < *known);
                if improves {
                    distances.insert(neighbour.clone(), candidate);
                    predecessors.insert(neighbour.clone(), current.clone());
                }
            }
        }

        ShortestPathTree { distances, predecessors }
    }

    /// Linear scan for the unvisited airport with the smallest tentative
    /// distance. Airports without a tentative distance are not yet
    /// reachable and are skipped; `None` terminates the solver run.
    fn closest_unvisited(
        unvisited: &HashSet<AirportCode>,
        distances: &HashMap<AirportCode, f64>,
    ) -> Option<(AirportCode, f64)> {
        unvisited
            .iter()
            .filter_map(|code| distances.get(code).map(|distance| (code.clone(), *distance)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::normalized(s)
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = RouteGraph::new();
        graph.add_node(code("DEL"));
        graph.add_edge(code("DEL"), code("BOM"), 2.0);

        // Re-registering must not clear the adjacency list.
        graph.add_node(code("DEL"));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbours(&code("DEL")).len(), 1);
    }

    #[test]
    fn test_add_edge_appends_duplicates() {
        let mut graph = RouteGraph::new();
        graph.add_node(code("DEL"));
        graph.add_node(code("BOM"));

        graph.add_edge(code("DEL"), code("BOM"), 2.0);
        graph.add_edge(code("DEL"), code("BOM"), 5.0);

        assert_eq!(graph.neighbours(&code("DEL")).len(), 2, "Both adjacency entries should be kept");
        assert_eq!(graph.neighbours(&code("BOM")).len(), 2);
        assert_eq!(graph.direct_distance(&code("DEL"), &code("BOM")), Some(5.0), "Direct lookup keeps the latest duration");
    }

    #[test]
    fn test_dangling_edge_is_tolerated() {
        let mut graph = RouteGraph::new();
        graph.add_node(code("DEL"));

        // BOM was never registered.
        graph.add_edge(code("DEL"), code("BOM"), 2.0);

        let tree = graph.shortest_paths(&code("DEL"));

        // The dangling endpoint gets a distance but is never expanded.
        assert_eq!(tree.distances.get(&code("BOM")), Some(&2.0));
        assert!(!graph.contains(&code("BOM")));
    }

    #[test]
    fn test_unreachable_nodes_absent_from_tree() {
        let mut graph = RouteGraph::new();
        graph.add_node(code("DEL"));
        graph.add_node(code("BOM"));
        graph.add_node(code("ISO"));
        graph.add_edge(code("DEL"), code("BOM"), 2.0);

        let tree = graph.shortest_paths(&code("DEL"));

        assert!(!tree.distances.contains_key(&code("ISO")), "Isolated airport should have no distance");
        assert!(!tree.predecessors.contains_key(&code("ISO")), "Isolated airport should have no predecessor");
    }

    #[test]
    fn test_source_distance_is_zero_even_when_unregistered() {
        let graph = RouteGraph::new();
        let tree = graph.shortest_paths(&code("XXX"));

        assert_eq!(tree.distances.get(&code("XXX")), Some(&0.0));
        assert!(tree.predecessors.is_empty());
    }
}
