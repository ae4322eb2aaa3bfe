//! Database connection management and the SeaORM post store.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod post_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use post_repo::SeaOrmPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
