//! Parking Control Module
//!
//! Registry of parking spots in a residential building. Each spot is tied to
//! a license plate and to an (apartment, block) pair, all of them unique.

// Public exports
pub mod contract;
pub use contract::{
    client::ParkingSpotApi, error::ParkingSpotError, Direction, NewParkingSpot, Page,
    PageRequest, ParkingSpot, Sort, SortField,
};

pub mod module;
pub use module::ParkingControlModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
