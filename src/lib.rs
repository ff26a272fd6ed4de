use crate::api::network_dto::NetworkDto;
use crate::domain::network::FlightNetwork;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a network definition JSON and builds the flight network from it.
pub fn load_network(file_path: &str) -> Result<FlightNetwork> {
    let dto: NetworkDto = parse_json_file::<NetworkDto>(file_path)?;
    log::info!("Network definition parsed successfully from '{}'.", file_path);

    let network = FlightNetwork::from_dto(dto);
    log::info!("Flight network constructed: {} airports, {} flights.", network.airport_count(), network.flight_count());

    Ok(network)
}
