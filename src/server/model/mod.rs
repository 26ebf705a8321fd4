//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases, and the
//! favorite kinds shared by the favorite repositories, service, and errors.

pub mod app;
pub mod db;
pub mod favorite;
