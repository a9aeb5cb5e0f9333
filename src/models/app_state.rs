use std::sync::Arc;

use crate::models::instance_info::InstanceInfo;

/// Router state. The instance snapshot is shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub instance: Arc<InstanceInfo>,
}

impl AppState {
    pub fn new(instance: InstanceInfo) -> Self {
        Self {
            instance: Arc::new(instance),
        }
    }
}
