use crate::models::inventory::Inventory;

pub(crate) const CSV_HEADER: &str = "Root Environment,Server,Name,DNS,Environment,Roles,CPU,RAM,HD,IP,Platform";

/// One flat table across all environments, RAM and HD rounded up to whole gigabytes.
pub(crate) fn format_csv(inventory: &Inventory) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');

    for (root, nodes) in inventory.environments() {
        for (name, node) in nodes {
            let fields = [
                root.clone(),
                node.fqdn.to_string(),
                name.clone(),
                node.dns.to_string(),
                node.env.to_string(),
                node.role.clone(),
                node.cpu.to_string(),
                node.memory_ceil.to_string(),
                node.hd_ceil.to_string(),
                node.ip.to_string(),
                node.platform(),
            ];

            let line: Vec<String> = fields.iter().map(|field| escape_field(field)).collect();
            output.push_str(&line.join(","));
            output.push('\n');
        }
    }

    output
}

/// Quote fields holding a delimiter, quote or line break; others pass through untouched.
pub(crate) fn escape_field(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fact::Fact;
    use crate::models::node::NodeRecord;

    fn known_record() -> NodeRecord {
        let mut record = NodeRecord::new("web01");
        record.fqdn = Fact::Known("web01.example.com".to_string());
        record.dns = Fact::Known("www".to_string());
        record.cpu = Fact::Known(2);
        record.memory = Fact::Known(3.7);
        record.memory_ceil = Fact::Known(4);
        record.hd = Fact::Known(49.9);
        record.hd_ceil = Fact::Known(50);
        record.ip = Fact::Known("10.0.0.10".to_string());
        record.role = "base".to_string();
        record.env = Fact::Known("appprod".to_string());
        record.platform_family = Fact::Known("rhel".to_string());
        record.platform_version = Fact::Known("7.9".to_string());
        record
    }

    #[test]
    fn test_single_known_node() {
        let mut inventory = Inventory::new();
        inventory.insert_environment("app", vec![known_record()]);

        assert_eq!(
            format_csv(&inventory),
            "Root Environment,Server,Name,DNS,Environment,Roles,CPU,RAM,HD,IP,Platform\n\
app,web01.example.com,web01,www,appprod,base,2,4,50,10.0.0.10,rhel_7.9\n"
        );
    }

    #[test]
    fn test_unknown_fields_use_placeholder() {
        let mut inventory = Inventory::new();
        inventory.insert_environment("app", vec![NodeRecord::new("bare")]);

        let output = format_csv(&inventory);

        assert_eq!(output.lines().nth(1), Some("app,Unknown,bare,Unknown,Unknown,,Unknown,Unknown,Unknown,Unknown,Unknown_Unknown"));
    }

    #[test]
    fn test_roles_with_commas_are_quoted() {
        let mut record = known_record();
        record.role = "base, web".to_string();
        let mut inventory = Inventory::new();
        inventory.insert_environment("app", vec![record]);

        let output = format_csv(&inventory);

        assert!(output.contains(",appprod,\"base, web\",2,"));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_inventory_is_header_only() {
        assert_eq!(format_csv(&Inventory::new()), format!("{}\n", CSV_HEADER));
    }
}
