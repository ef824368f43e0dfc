use crate::chef::dto::NodeDto;
use crate::error::InventoryError;

/// Read-only view of the configuration-management server.
pub(crate) trait InventorySource {
    fn list_environments(&self) -> Result<Vec<String>, InventoryError>;
    /// Nodes whose environment name starts with `root`.
    fn search_nodes(&self, root: &str) -> Result<Vec<NodeDto>, InventoryError>;
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use serde_json::json;
    use super::*;

    /// In-memory server used by the collector and command tests.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub(crate) environments: Vec<String>,
        pub(crate) nodes: BTreeMap<String, Vec<NodeDto>>,
        pub(crate) failing: BTreeSet<String>,
        pub(crate) timing_out: BTreeSet<String>,
        pub(crate) unreachable: bool,
    }

    impl FakeSource {
        pub(crate) fn with_node(mut self, environment: &str, node: NodeDto) -> Self {
            self.nodes.entry(environment.to_string()).or_default().push(node);
            self
        }
    }

    impl InventorySource for FakeSource {
        fn list_environments(&self) -> Result<Vec<String>, InventoryError> {
            if self.unreachable {
                return Err(InventoryError::Connection("connection refused".to_string()));
            }
            Ok(self.environments.clone())
        }

        fn search_nodes(&self, root: &str) -> Result<Vec<NodeDto>, InventoryError> {
            if self.unreachable {
                return Err(InventoryError::Connection("connection refused".to_string()));
            }
            if self.timing_out.contains(root) {
                return Err(InventoryError::Connection("timed out reading response".to_string()));
            }
            if self.failing.contains(root) {
                return Err(InventoryError::Http { status: 500, url: format!("/search/node?q=chef_environment:{}*", root) });
            }

            Ok(self.nodes
                .iter()
                .filter(|(environment, _)| environment.starts_with(root))
                .flat_map(|(_, nodes)| nodes.clone())
                .collect())
        }
    }

    pub(crate) fn node(name: &str, environment: &str) -> NodeDto {
        serde_json::from_value(json!({
            "name": name,
            "chef_environment": environment,
            "run_list": ["role[base]", "recipe[nginx::default]"],
            "automatic": {
                "fqdn": format!("{}.example.com", name),
                "ipaddress": "10.0.0.10",
                "cpu": {"total": 2},
                "memory": {"total": "4194304kB"},
                "platform_family": "rhel",
                "platform_version": "7.9",
                "filesystem": {
                    "/dev/mapper/vg_root-lv_root": {"kb_size": "10485760"},
                    "/dev/mapper/vg_cust-lv_cust": {"kb_size": "52428800"}
                }
            }
        })).unwrap()
    }
}
