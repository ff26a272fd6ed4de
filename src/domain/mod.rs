pub mod flight;
pub mod graph;
pub mod id;
pub mod network;
pub mod reservation;
pub mod route;
