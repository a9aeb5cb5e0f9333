pub mod app_state;
pub mod instance_info;
pub mod region;

pub use app_state::AppState;
pub use instance_info::InstanceInfo;
pub use region::{lookup_region, region_from_zone, RegionDisplay, REGIONS};
