pub mod helpers;
pub mod zone;

pub use zone::zone_page;
