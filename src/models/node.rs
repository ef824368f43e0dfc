use serde::{Deserialize, Serialize};
use crate::models::fact::Fact;

/// Normalized facts for one virtual machine, as rendered in every report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct NodeRecord {
    pub(crate) name: String,
    pub(crate) fqdn: Fact<String>,
    pub(crate) cpu: Fact<u64>,
    /// Gigabytes.
    pub(crate) memory: Fact<f64>,
    pub(crate) memory_ceil: Fact<i64>,
    /// Gigabytes of the `/dev/mapper/*cust*` file system.
    pub(crate) hd: Fact<f64>,
    pub(crate) hd_ceil: Fact<i64>,
    pub(crate) ip: Fact<String>,
    pub(crate) role: String,
    pub(crate) env: Fact<String>,
    pub(crate) platform_family: Fact<String>,
    pub(crate) platform_version: Fact<String>,
    pub(crate) dns: Fact<String>,
}

impl NodeRecord {
    pub(crate) fn new(name: &str) -> Self {
        NodeRecord {
            name: name.to_string(),
            fqdn: Fact::Unknown,
            cpu: Fact::Unknown,
            memory: Fact::Unknown,
            memory_ceil: Fact::Unknown,
            hd: Fact::Unknown,
            hd_ceil: Fact::Unknown,
            ip: Fact::Unknown,
            role: String::new(),
            env: Fact::Unknown,
            platform_family: Fact::Unknown,
            platform_version: Fact::Unknown,
            dns: Fact::Unknown,
        }
    }

    pub(crate) fn platform(&self) -> String {
        format!("{}_{}", self.platform_family, self.platform_version)
    }
}
