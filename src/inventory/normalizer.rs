use regex::Regex;
use serde_json::Value;
use crate::chef::dto::NodeDto;
use crate::config::dnsxref::DnsCrossReference;
use crate::models::fact::Fact;
use crate::models::node::NodeRecord;
use crate::utils::run_list::{display_roles, parse_run_list};
use crate::utils::units::{ceil_gb, kb_to_gb, parse_number};

const CUSTOMER_MOUNT: &str = r"(?i).dev.mapper.*cust";

/// Map a raw node into its report shape. Returns `None` for nodes without a name.
pub(crate) fn normalize(node: &NodeDto, dnsxref: &DnsCrossReference) -> Option<NodeRecord> {
    let name = node.name.as_deref().filter(|name| !name.is_empty())?;
    let mut record = NodeRecord::new(name);

    record.fqdn = string_attribute(node.attribute("fqdn"));
    record.ip = string_attribute(node.attribute("ipaddress"));
    record.cpu = node
        .nested_attribute("cpu", "total")
        .and_then(parse_number)
        .filter(|count| *count >= 0.0)
        .map(|count| count as u64)
        .into();

    record.memory = node
        .nested_attribute("memory", "total")
        .and_then(parse_number)
        .map(kb_to_gb)
        .into();
    record.memory_ceil = record.memory.map(ceil_gb);

    record.hd = customer_disk_gb(node.attribute("filesystem")).into();
    record.hd_ceil = record.hd.map(ceil_gb);

    record.role = display_roles(&parse_run_list(&node.run_list));
    record.env = node.chef_environment.clone().into();
    record.platform_family = string_attribute(node.attribute("platform_family"));
    record.platform_version = string_attribute(node.attribute("platform_version"));

    if let Fact::Known(fqdn) = &record.fqdn {
        record.dns = dnsxref.alias(fqdn).map(|alias| alias.to_string()).into();
    }

    Some(record)
}

fn string_attribute(value: Option<&Value>) -> Fact<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Fact::Known(text.clone()),
        Some(Value::Number(number)) => Fact::Known(number.to_string()),
        _ => Fact::Unknown,
    }
}

/// Size of the first `/dev/mapper/*cust*` file system, keys taken in sorted order.
fn customer_disk_gb(filesystem: Option<&Value>) -> Option<f64> {
    let mounts = filesystem?.as_object()?;
    let pattern = Regex::new(CUSTOMER_MOUNT).unwrap();

    let mut keys: Vec<&String> = mounts.keys().filter(|key| pattern.is_match(key)).collect();
    keys.sort();

    keys.into_iter()
        .next()
        .and_then(|key| mounts.get(key))
        .and_then(|mount| mount.get("kb_size"))
        .and_then(parse_number)
        .map(kb_to_gb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use serde_json::json;
    use crate::inventory::source::tests::node;

    fn dnsxref() -> DnsCrossReference {
        let mut aliases = HashMap::new();
        aliases.insert("web01.example.com".to_string(), "www".to_string());
        DnsCrossReference::new(aliases)
    }

    #[test]
    fn test_normalize_full_node() {
        let record = normalize(&node("web01", "appprod"), &dnsxref()).unwrap();

        assert_eq!(record.name, "web01");
        assert_eq!(record.fqdn, Fact::Known("web01.example.com".to_string()));
        assert_eq!(record.ip, Fact::Known("10.0.0.10".to_string()));
        assert_eq!(record.cpu, Fact::Known(2));
        assert_eq!(record.memory, Fact::Known(4.0));
        assert_eq!(record.memory_ceil, Fact::Known(4));
        assert_eq!(record.hd, Fact::Known(50.0));
        assert_eq!(record.hd_ceil, Fact::Known(50));
        assert_eq!(record.role, "base, nginx::default");
        assert_eq!(record.env, Fact::Known("appprod".to_string()));
        assert_eq!(record.platform(), "rhel_7.9");
        assert_eq!(record.dns, Fact::Known("www".to_string()));
    }

    #[test]
    fn test_missing_attributes_are_unknown() {
        let bare: NodeDto = serde_json::from_value(json!({"name": "bare"})).unwrap();
        let record = normalize(&bare, &dnsxref()).unwrap();

        assert_eq!(record.fqdn, Fact::Unknown);
        assert_eq!(record.cpu, Fact::Unknown);
        assert_eq!(record.memory, Fact::Unknown);
        assert_eq!(record.memory_ceil, Fact::Unknown);
        assert_eq!(record.hd, Fact::Unknown);
        assert_eq!(record.hd_ceil, Fact::Unknown);
        assert_eq!(record.ip, Fact::Unknown);
        assert_eq!(record.env, Fact::Unknown);
        assert_eq!(record.platform_family, Fact::Unknown);
        assert_eq!(record.platform_version, Fact::Unknown);
        assert_eq!(record.dns, Fact::Unknown);
        assert_eq!(record.role, "");
    }

    #[test]
    fn test_malformed_attributes_are_unknown() {
        let odd: NodeDto = serde_json::from_value(json!({
            "name": "odd",
            "automatic": {
                "cpu": "many",
                "memory": {"total": null},
                "filesystem": ["/dev/mapper/cust"],
                "fqdn": {"short": "odd"}
            }
        })).unwrap();
        let record = normalize(&odd, &DnsCrossReference::default()).unwrap();

        assert_eq!(record.cpu, Fact::Unknown);
        assert_eq!(record.memory, Fact::Unknown);
        assert_eq!(record.hd, Fact::Unknown);
        assert_eq!(record.fqdn, Fact::Unknown);
    }

    #[test]
    fn test_memory_conversion() {
        let sized: NodeDto = serde_json::from_value(json!({
            "name": "db01",
            "automatic": {"memory": {"total": "1572864kB"}}
        })).unwrap();
        let record = normalize(&sized, &DnsCrossReference::default()).unwrap();

        assert_eq!(record.memory, Fact::Known(1.5));
        assert_eq!(record.memory_ceil, Fact::Known(2));
    }

    #[test]
    fn test_customer_disk_match() {
        let disks: NodeDto = serde_json::from_value(json!({
            "name": "db01",
            "automatic": {"filesystem": {
                "/dev/sda1": {"kb_size": "1048576"},
                "/dev/mapper/VG_CUST-data": {"kb_size": "1048576"},
                "/dev/mapper/vg_cust-logs": {"kb_size": "2097152"}
            }}
        })).unwrap();
        let record = normalize(&disks, &DnsCrossReference::default()).unwrap();

        assert_eq!(record.hd, Fact::Known(1.0));
        assert_eq!(record.hd_ceil, Fact::Known(1));
    }

    #[test]
    fn test_no_customer_disk() {
        let disks: NodeDto = serde_json::from_value(json!({
            "name": "db01",
            "automatic": {"filesystem": {"/dev/mapper/vg_root-lv_root": {"kb_size": "1048576"}}}
        })).unwrap();
        let record = normalize(&disks, &DnsCrossReference::default()).unwrap();

        assert_eq!(record.hd, Fact::Unknown);
        assert_eq!(record.hd_ceil, Fact::Unknown);
    }

    #[test]
    fn test_nameless_node_is_skipped() {
        let nameless: NodeDto = serde_json::from_value(json!({"chef_environment": "appprod"})).unwrap();

        assert!(normalize(&nameless, &DnsCrossReference::default()).is_none());
    }
}
