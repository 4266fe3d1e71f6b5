//! Request handlers, one module per resource.

pub mod project;
pub mod upload;
