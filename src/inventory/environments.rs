use std::collections::BTreeSet;
use regex::Regex;
use crate::error::InventoryError;
use crate::inventory::source::InventorySource;

pub(crate) const RESERVED_ENVIRONMENT: &str = "_default";
const STAGE_SUFFIX: &str = r"(uat|dev|qa|stg|stage|prd|prod)$";

/// Strip a trailing deployment stage: `appuat` -> `app`.
pub(crate) fn root_environment(name: &str) -> String {
    let suffix = Regex::new(STAGE_SUFFIX).unwrap();
    let root = suffix.replace(name, "");

    if root.is_empty() {
        return name.to_string();
    }

    root.into_owned()
}

pub(crate) fn root_environments<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| name != RESERVED_ENVIRONMENT)
        .map(|name| root_environment(&name))
        .collect()
}

pub(crate) fn discover_environments(source: &dyn InventorySource) -> Result<BTreeSet<String>, InventoryError> {
    let names = source.list_environments()?;
    debug!("server knows {} environments", names.len());

    let roots = root_environments(names);
    info!("discovered {} root environments", roots.len());

    Ok(roots)
}
