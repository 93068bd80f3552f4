pub mod movie_service;
pub mod seed_service;

pub use movie_service::{MovieService, UpdateOutcome};
pub use seed_service::{MovieSeedService, SeedReport};
