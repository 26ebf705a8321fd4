//! Business logic services for the Holocron server.
//!
//! Services coordinate multiple repositories and enforce the rules that span them, such as
//! confirming both sides of a favorite link exist before it is created or removed. Plain
//! catalog lookups need no coordination and are served by the repositories directly.

pub mod favorite;
