// Compute metadata server access
pub mod client;
pub mod instance;

pub use client::MetadataClient;
