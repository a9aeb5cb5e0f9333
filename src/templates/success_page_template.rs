use askama::Template;

use crate::models::{InstanceInfo, RegionDisplay};

#[derive(Template)]
#[template(path = "success_page.html")]
pub struct SuccessPageTemplate<'a> {
    pub region_code: &'a str,
    pub region_geo: &'a str,
    pub flag_url: &'a str,
    pub cluster_name: &'a str,
    pub cluster_uid: &'a str,
    pub external_ip: &'a str,
    pub instance_id: &'a str,
    pub instance_hostname: &'a str,
}

impl<'a> SuccessPageTemplate<'a> {
    /// Unknown regions render with a blank location and no flag.
    pub fn new(instance: &'a InstanceInfo, region: Option<&'static RegionDisplay>) -> Self {
        Self {
            region_code: &instance.zone,
            region_geo: region.map_or("", |r| r.location),
            flag_url: region.map_or("", |r| r.flag_url),
            cluster_name: &instance.cluster_name,
            cluster_uid: &instance.cluster_uid,
            external_ip: &instance.external_ip,
            instance_id: &instance.instance_id,
            instance_hostname: &instance.hostname,
        }
    }
}
