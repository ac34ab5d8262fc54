//! Client for the Vigi camera agent HTTP API.

pub mod agent;
pub mod models;

pub use agent::*;
pub use models::*;
