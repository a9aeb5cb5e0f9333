use super::client::MetadataClient;
use crate::error::MetadataError;

/// Typed accessors for the `instance/` subtree.
impl MetadataClient {
    /// The zone name, e.g. `us-central1-a`. The server reports
    /// `projects/<number>/zones/<zone>`; only the last segment is kept, which
    /// may be empty.
    pub async fn zone(&self) -> Result<String, MetadataError> {
        let raw = self.get_trimmed("instance/zone").await?;
        Ok(last_segment(&raw).to_string())
    }

    pub async fn instance_tags(&self) -> Result<Vec<String>, MetadataError> {
        let body = self.get("instance/tags?alt=json").await?;
        serde_json::from_str(&body).map_err(|e| MetadataError::Decode {
            path: "instance/tags".to_string(),
            reason: e.to_string(),
        })
    }

    /// Names of the custom attributes set on the instance.
    pub async fn instance_attributes(&self) -> Result<Vec<String>, MetadataError> {
        let body = self.get("instance/attributes/").await?;
        Ok(non_empty_lines(&body))
    }

    pub async fn instance_attribute_value(&self, attr: &str) -> Result<String, MetadataError> {
        self.get(&format!("instance/attributes/{attr}")).await
    }

    pub async fn instance_id(&self) -> Result<String, MetadataError> {
        self.get_trimmed("instance/id").await
    }

    pub async fn hostname(&self) -> Result<String, MetadataError> {
        self.get_trimmed("instance/hostname").await
    }

    pub async fn external_ip(&self) -> Result<String, MetadataError> {
        self.get_trimmed("instance/network-interfaces/0/access-configs/0/external-ip")
            .await
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn non_empty_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
