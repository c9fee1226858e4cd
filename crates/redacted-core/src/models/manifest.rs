use serde::{Deserialize, Serialize};

/// Static self-description served on the discovery endpoint.
///
/// An orchestrating system uses this to wire the service into a graph
/// of composable text-transform nodes. The field values (including the
/// `*ast.Text` node type) are part of the discovery protocol and never
/// vary at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub flags: ManifestFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFlags {
    pub composable: bool,
}

impl DiscoveryManifest {
    /// The manifest for this service.
    pub fn for_service() -> Self {
        Self {
            name: "redacted".to_string(),
            node_type: "*ast.Text".to_string(),
            flags: ManifestFlags { composable: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_serializes_with_protocol_field_names() {
        let json = serde_json::to_value(DiscoveryManifest::for_service()).unwrap();
        assert_eq!(json["name"], "redacted");
        assert_eq!(json["type"], "*ast.Text");
        assert_eq!(json["flags"]["composable"], true);
    }
}
