//! # Configuration Service Module
//!
//! Serves the browser-side configuration under `/api/config`.
//!
//! ## Sub-modules:
//! - `get`: Returns the `ClientConfig` the launcher was started with.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::config::CONFIG_PATH;

/// Configures and returns the Actix `Scope` for the configuration routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the API base URL, dispensary id and strain type
///       filter as a JSON `ClientConfig`. The frontend calls it once on start-up.
pub fn configure_routes() -> Scope {
    scope(CONFIG_PATH).route("", get().to(get::process))
}
