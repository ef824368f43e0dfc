use std::collections::BTreeSet;
use crate::config::dnsxref::DnsCrossReference;
use crate::error::InventoryError;
use crate::inventory::normalizer::normalize;
use crate::inventory::source::InventorySource;
use crate::models::inventory::Inventory;
use crate::models::node::NodeRecord;

/// Query every root environment in sorted order and normalize its nodes.
///
/// A failed query for one environment, transport errors included, counts as an
/// empty environment. The run aborts only when every environment failed to
/// reach the server.
pub(crate) fn collect<'a, I>(source: &dyn InventorySource, roots: I, dnsxref: &DnsCrossReference) -> Result<Inventory, InventoryError>
where
    I: IntoIterator<Item = &'a String>,
{
    let roots: BTreeSet<&String> = roots.into_iter().collect();
    let mut inventory = Inventory::new();
    let mut unreachable: Option<InventoryError> = None;
    let mut unreachable_count = 0;

    for root in &roots {
        let nodes = match source.search_nodes(root) {
            Ok(nodes) => nodes,
            Err(err) => {
                error!("Failed to fetch nodes for environment {}: {}", root, err);
                if err.is_fatal() {
                    unreachable_count += 1;
                    unreachable = Some(err);
                }
                vec![]
            }
        };

        let records: Vec<NodeRecord> = nodes
            .iter()
            .filter_map(|node| {
                let record = normalize(node, dnsxref);
                if record.is_none() {
                    warn!("skip node without a name in environment {}", root);
                }
                record
            })
            .collect();

        info!("environment {}: {} nodes", root, records.len());
        inventory.insert_environment(root, records);
    }

    if unreachable_count == roots.len() {
        if let Some(err) = unreachable {
            return Err(err);
        }
    }

    Ok(inventory)
}
