use clap::{Parser, Subcommand};
use colored::Colorize;

use flight_route_network::domain::network::FlightNetwork;
use flight_route_network::error::Error;
use flight_route_network::{load_network, logger};

#[derive(Parser)]
#[command(name = "flight-route-network", about = "Shortest-route search and ticket booking over a flight network")]
struct Cli {
    /// Path to the network definition JSON.
    #[arg(long, default_value = "data/network.json")]
    network: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the shortest route between two airports.
    Search {
        from: String,
        to: String,
        /// Only accept routes served by this airline.
        #[arg(long)]
        airline: Option<String>,
    },
    /// Book a ticket on the shortest route.
    Book {
        user: String,
        from: String,
        to: String,
        /// Travel date, e.g. 2025-01-01. Stored as given.
        date: String,
        /// Only accept routes served by this airline.
        #[arg(long)]
        airline: Option<String>,
    },
    /// Show a reservation by its id.
    Lookup { id: u64 },
    /// Print a summary of the loaded network.
    Summary,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    log::info!("Loading network definition from '{}'...", cli.network);
    let network = load_network(&cli.network)?;

    match cli.command {
        Command::Search { from, to, airline } => search(&network, &from, &to, airline.as_deref()),
        Command::Book { user, from, to, date, airline } => book(&network, &user, &from, &to, &date, airline.as_deref()),
        Command::Lookup { id } => lookup(&network, id),
        Command::Summary => {
            println!(
                "{} airports, {} flights, {} reservations",
                network.airport_count(),
                network.flight_count(),
                network.reservation_count()
            );
            Ok(())
        }
    }
}

fn search(network: &FlightNetwork, from: &str, to: &str, airline: Option<&str>) -> anyhow::Result<()> {
    match network.search(from, to, airline) {
        Ok(matched) => {
            let stops = matched.route.stops.iter().map(|stop| stop.as_str()).collect::<Vec<_>>().join(" -> ");
            println!("{} {}", "Route:".green().bold(), stops);
            println!("{} {}", "Total duration:".green().bold(), matched.route.distance);

            let mut airlines = matched.airlines.iter().map(|airline| airline.as_str()).collect::<Vec<_>>();
            airlines.sort_unstable();
            println!("{} {}", "Airlines:".green().bold(), airlines.join(", "));
            Ok(())
        }
        Err(e) => report(e),
    }
}

fn book(network: &FlightNetwork, user: &str, from: &str, to: &str, date: &str, airline: Option<&str>) -> anyhow::Result<()> {
    match network.book(user, from, to, date, airline) {
        Ok(id) => {
            println!("{} Reservation ID: {}", "Booking successful!".green().bold(), id);

            // Echo the stored record, like a confirmation slip.
            let reservation = network.lookup(id)?;
            println!("{}", serde_json::to_string_pretty(&reservation)?);
            Ok(())
        }
        Err(e) => report(e),
    }
}

fn lookup(network: &FlightNetwork, id: u64) -> anyhow::Result<()> {
    match network.lookup(id) {
        Ok(reservation) => {
            println!("{}", serde_json::to_string_pretty(&reservation)?);
            Ok(())
        }
        Err(e) => report(e),
    }
}

/// Expected, recoverable outcomes print as plain messages; anything else
/// propagates and exits nonzero.
fn report(e: Error) -> anyhow::Result<()> {
    match e {
        Error::NoRouteFound { .. } | Error::AirlineUnavailable(_) | Error::ReservationNotFound(_) => {
            println!("{} {}", "No luck:".red().bold(), e);
            Ok(())
        }
        other => Err(other.into()),
    }
}
