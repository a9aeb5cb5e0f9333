pub mod bootstrap_service;

pub use bootstrap_service::{bootstrap, resolve_from_metadata, resolve_instance};
