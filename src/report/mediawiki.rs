use crate::models::inventory::Inventory;

const TABLE_OPEN: &str = "{|class=\"wikitable sortable\" width=\"100%\"";
const TABLE_HEADER: &str = "! Node Name !! Server Name !! DNS Alias !! Environment !! Roles !! CPU !! RAM !! H/D !! IP Address !! Platform";

/// One sortable wiki table per root environment.
pub(crate) fn format_mediawiki(inventory: &Inventory) -> String {
    let mut output = String::new();

    for (root, nodes) in inventory.environments() {
        output.push_str(&format!("=== {}* ===\n\n", root));
        output.push_str(TABLE_OPEN);
        output.push('\n');
        output.push_str(TABLE_HEADER);
        output.push('\n');

        for (name, node) in nodes {
            output.push_str("|-\n");
            output.push_str(&format!(
                "| {} || {} || {} || {} || {} || {} || {} || {} || {} || {}\n",
                name,
                node.fqdn,
                node.dns,
                node.env,
                node.role,
                node.cpu,
                node.memory_ceil,
                node.hd_ceil,
                node.ip,
                node.platform(),
            ));
        }

        output.push_str("|}\n");
    }

    output
}
