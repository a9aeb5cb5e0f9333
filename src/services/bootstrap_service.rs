use crate::api::MetadataClient;
use crate::error::BootstrapError;
use crate::models::InstanceInfo;

const CLUSTER_NAME_ATTR: &str = "cluster-name";
const CLUSTER_UID_ATTR: &str = "cluster-uid";

/// Resolves the instance snapshot once, before the server starts.
pub async fn bootstrap(
    client: &MetadataClient,
    fake_zone: Option<&str>,
) -> Result<InstanceInfo, BootstrapError> {
    let available = client.on_gce().await;
    if !available {
        tracing::warn!(host = client.host(), "not running with metadata service present");
    }
    resolve_instance(available.then_some(client), fake_zone).await
}

/// Builds the snapshot from `client`, or leaves every field empty when
/// there is no metadata service. `fake_zone`, when non-empty, replaces
/// whatever zone was resolved.
pub async fn resolve_instance(
    client: Option<&MetadataClient>,
    fake_zone: Option<&str>,
) -> Result<InstanceInfo, BootstrapError> {
    let mut info = match client {
        Some(client) => resolve_from_metadata(client).await?,
        None => InstanceInfo::default(),
    };

    if let Some(zone) = fake_zone.filter(|zone| !zone.is_empty()) {
        tracing::info!(zone, "overriding compute zone from FAKE_ZONE");
        info.zone = zone.to_string();
    }

    Ok(info)
}

/// Queries the metadata server. Zone and the cluster attributes are
/// required; everything else degrades to an empty string.
pub async fn resolve_from_metadata(client: &MetadataClient) -> Result<InstanceInfo, BootstrapError> {
    let zone = client.zone().await.map_err(BootstrapError::Zone)?;
    tracing::info!(%zone, "determined zone");

    match client.instance_tags().await {
        Ok(tags) => {
            for tag in tags {
                tracing::info!(%tag, "instance tag");
            }
        }
        Err(e) => tracing::debug!(%e, "instance tags unavailable"),
    }

    match client.instance_attributes().await {
        Ok(attrs) => {
            for attr in attrs {
                tracing::info!(%attr, "instance attribute");
            }
        }
        Err(e) => tracing::debug!(%e, "instance attributes unavailable"),
    }

    let instance_id = client.instance_id().await.unwrap_or_default();
    tracing::info!(%instance_id, "instance id");

    let hostname = client.hostname().await.unwrap_or_default();
    tracing::info!(%hostname, "hostname");

    let cluster_name = client
        .instance_attribute_value(CLUSTER_NAME_ATTR)
        .await
        .map_err(BootstrapError::ClusterName)?;
    let cluster_uid = client
        .instance_attribute_value(CLUSTER_UID_ATTR)
        .await
        .map_err(BootstrapError::ClusterUid)?;
    tracing::info!(%cluster_name, %cluster_uid, "cluster");

    let external_ip = match client.external_ip().await {
        Ok(ip) => ip,
        Err(e) => {
            tracing::warn!(%e, "failed to get external IP");
            String::new()
        }
    };

    Ok(InstanceInfo {
        zone,
        cluster_name,
        cluster_uid,
        external_ip,
        instance_id,
        hostname,
    })
}
