//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{ParkingSpotRepository, RepoResult, RepositoryError};
pub use service::Service;
