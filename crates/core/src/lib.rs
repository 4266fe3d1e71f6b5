//! Domain rules shared by the API server, the persistence layer, and the
//! browser-facing client: the error taxonomy, common type aliases, image
//! upload validation, and blob key naming.

pub mod error;
pub mod media;
pub mod naming;
pub mod types;
