//! Repositories for users, planets, characters, and vehicles.
//!
//! Catalog records are seeded outside the API, so these repositories only read.

pub mod character;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::CharacterRepository;
pub use planet::PlanetRepository;
pub use user::UserRepository;
pub use vehicle::VehicleRepository;
