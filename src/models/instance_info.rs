/// What the bootstrap learned about the instance serving this process.
///
/// Empty strings stand for values that could not be resolved. An empty
/// `zone` switches the page into its error view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceInfo {
    pub zone: String,
    pub cluster_name: String,
    pub cluster_uid: String,
    pub external_ip: String,
    pub instance_id: String,
    pub hostname: String,
}

impl InstanceInfo {
    pub fn has_zone(&self) -> bool {
        !self.zone.is_empty()
    }
}
