use thiserror::Error;

use crate::domain::id::{AirlineName, AirportCode};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse network definition JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("No route between {origin} and {destination}")]
    NoRouteFound { origin: AirportCode, destination: AirportCode },

    #[error("No flight on the computed route is operated by '{0}'")]
    AirlineUnavailable(AirlineName),

    #[error("Reservation {0} was not found")]
    ReservationNotFound(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
