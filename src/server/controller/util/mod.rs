//! Extractors shared by the controller endpoints.

pub mod path;
