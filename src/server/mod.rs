//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron application: HTTP
//! routing and OpenAPI documentation, the favorite service, database repositories for the
//! catalog and favorite links, error mapping, configuration, and process startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
