//! JSON-file-backed stores for KEF entities.
//!
//! The dashboard persists everything locally: the client roster, the
//! opportunity set from the latest search run, and the login session. Each
//! store owns one JSON file under the configured data directory and does
//! full-file replace-on-write with an atomic temp-file rename.

mod clients;
mod error;
mod file;
mod opportunities;
mod session;

pub use clients::{ClientPatch, ClientStore, NewClient};
pub use error::StoreError;
pub use opportunities::OpportunityStore;
pub use session::SessionStore;
