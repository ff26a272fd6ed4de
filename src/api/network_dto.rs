use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDto {
    pub airports: Vec<String>,
    pub flights: Vec<FlightDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub flight_number: String,
    pub departure: String,
    pub destination: String,
    pub duration: f64,
    pub airline: String,
}
