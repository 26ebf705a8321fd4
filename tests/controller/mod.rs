//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted state where the response status is all that
//! matters, and through the complete router where routing, body shape, or middleware is
//! under test.

mod favorite;
mod people;
mod planet;
mod router;
mod user;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::util::{body_json, send};
