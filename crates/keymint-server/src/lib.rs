//! HTTP surface for the Keymint license server.
//!
//! The binary in `main.rs` wires configuration and key loading; everything
//! routable lives here so integration tests can build the router directly.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::ServerError;
pub use routes::build_router;
pub use state::AppState;
