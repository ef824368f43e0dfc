use std::collections::HashMap;
use std::fs;
use crate::error::InventoryError;

/// Maps a node FQDN to the friendlier alias shown in reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DnsCrossReference {
    aliases: HashMap<String, String>,
}

impl DnsCrossReference {
    pub(crate) fn new(aliases: HashMap<String, String>) -> Self {
        DnsCrossReference { aliases }
    }

    pub(crate) fn alias(&self, fqdn: &str) -> Option<&str> {
        self.aliases.get(fqdn).map(|alias| alias.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.aliases.len()
    }
}

/// A missing file yields an empty cross-reference; an unreadable one is an error.
pub(crate) fn load_dnsxref(path: &str) -> Result<DnsCrossReference, InventoryError> {
    if fs::metadata(path).is_err() {
        debug!("no DNS cross reference at {}", path);
        return Ok(DnsCrossReference::default());
    }

    let contents = fs::read_to_string(path)?;
    let aliases: HashMap<String, String> = serde_json::from_str(&contents)
        .map_err(|err| InventoryError::InvalidSettings(format!("{}: {}", path, err)))?;
    let dnsxref = DnsCrossReference::new(aliases);
    info!("loaded {} DNS aliases from {}", dnsxref.len(), path);

    Ok(dnsxref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let xref = load_dnsxref("/nonexistent/dns_cross_reference.json").unwrap();

        assert_eq!(xref.len(), 0);
        assert_eq!(xref.alias("web01.example.com"), None);
    }

    #[test]
    fn test_load_aliases() {
        let dir = TempDir::new("dnsxref").unwrap();
        let path = dir.path().join("dns_cross_reference.json");
        fs::write(&path, r#"{"web01.example.com": "www", "db01.example.com": "mysql"}"#).unwrap();

        let xref = load_dnsxref(&path.to_string_lossy()).unwrap();

        assert_eq!(xref.len(), 2);
        assert_eq!(xref.alias("web01.example.com"), Some("www"));
        assert_eq!(xref.alias("cache01.example.com"), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new("dnsxref").unwrap();
        let path = dir.path().join("dns_cross_reference.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(load_dnsxref(&path.to_string_lossy()), Err(InventoryError::InvalidSettings(_))));
    }
}
