//! Entity Repository
//!
//! Typed operations over the two entity sets. Each repository holds the
//! connection pool and translates entity operations into parameterized
//! statements; every failure class gets its own [`RepoError`] variant
//! so the HTTP layer can map it to a status code.

mod error;
mod hotel;
mod user;

pub use error::{RepoError, RepoResult};
pub use hotel::HotelRepository;
pub use user::UserRepository;
