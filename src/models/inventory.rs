use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::models::node::NodeRecord;

/// Root environment -> node name -> record. Both levels iterate sorted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub(crate) struct Inventory {
    environments: BTreeMap<String, BTreeMap<String, NodeRecord>>,
}

impl Inventory {
    pub(crate) fn new() -> Self {
        Inventory::default()
    }

    /// Environments without nodes are left out of the report.
    pub(crate) fn insert_environment(&mut self, root: &str, nodes: Vec<NodeRecord>) {
        if nodes.is_empty() {
            return;
        }

        let entry = self.environments.entry(root.to_string()).or_default();
        for node in nodes {
            entry.insert(node.name.clone(), node);
        }
    }

    pub(crate) fn environments(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, NodeRecord>)> {
        self.environments.iter()
    }

    pub(crate) fn get(&self, root: &str) -> Option<&BTreeMap<String, NodeRecord>> {
        self.environments.get(root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.environments.values().map(|nodes| nodes.len()).sum()
    }
}
