use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::config::chef::ChefConfig;
use crate::error::InventoryError;

pub(crate) const SETTINGS_FILENAME: &str = "chef_vm_inventory_settings.json";
pub(crate) const DNSXREF_FILENAME: &str = "dns_cross_reference.json";

#[derive(Deserialize, Debug, Clone, Default)]
struct SettingsFile {
    output_path: Option<String>,
    output_filename: Option<String>,
    environments: Option<Vec<String>>,
    dnsxref_path: Option<String>,
    chef_config: Option<ChefConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) output_path: String,
    pub(crate) output_filename: String,
    pub(crate) environments: Option<Vec<String>>,
    pub(crate) dnsxref_path: Option<String>,
    pub(crate) chef_config: Option<ChefConfig>,
}

impl Settings {
    pub(crate) fn chef_config(&self) -> Result<&ChefConfig, InventoryError> {
        self.chef_config
            .as_ref()
            .ok_or_else(|| InventoryError::MissingSetting("chef_config".to_string()))
    }

    /// Environments listed for the "select environments" scope.
    pub(crate) fn environments(&self) -> Result<Vec<String>, InventoryError> {
        match &self.environments {
            Some(environments) if !environments.is_empty() => Ok(environments.clone()),
            _ => Err(InventoryError::MissingSetting("environments".to_string())),
        }
    }

    pub(crate) fn ensure_output_dir(&self) -> Result<(), InventoryError> {
        if !Path::new(&self.output_path).is_dir() {
            debug!("create output directory {}", self.output_path);
            fs::create_dir_all(&self.output_path)?;
        }

        Ok(())
    }

    pub(crate) fn output_file(&self, extension: &str) -> PathBuf {
        Path::new(&self.output_path).join(format!("{}.{}", self.output_filename, extension))
    }
}

pub(crate) fn get_config_dir() -> String {
    match env::var_os("CHEF_VM_INVENTORY_CONFIG_DIR") {
        Some(variable) => variable.to_string_lossy().into_owned(),
        None => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            format!("{}/.config/chef-vm-inventory", home)
        }
    }
}

pub(crate) fn default_settings_path() -> String {
    format!("{}/{}", get_config_dir(), SETTINGS_FILENAME)
}

pub(crate) fn default_dnsxref_path() -> String {
    format!("{}/{}", get_config_dir(), DNSXREF_FILENAME)
}

pub(crate) fn load_settings(path: &str) -> Result<Settings, InventoryError> {
    debug!("load settings file {}", path);

    if fs::metadata(path).is_err() {
        return Err(InventoryError::SettingsNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let file: SettingsFile = match extension {
        "json" => serde_json::from_str(&contents)
            .map_err(|err| InventoryError::InvalidSettings(format!("{}: {}", path, err)))?,
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|err| InventoryError::InvalidSettings(format!("{}: {}", path, err)))?,
        "toml" => toml::from_str(&contents)?,
        other => return Err(InventoryError::UnsupportedSettingsFormat(format!(".{}", other))),
    };

    validate(file)
}

fn validate(file: SettingsFile) -> Result<Settings, InventoryError> {
    let output_path = match file.output_path {
        Some(path) if !path.trim().is_empty() => path,
        _ => return Err(InventoryError::MissingSetting("output_path".to_string())),
    };

    let output_filename = match file.output_filename {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(InventoryError::MissingSetting("output_filename".to_string())),
    };

    Ok(Settings {
        output_path,
        output_filename,
        environments: file.environments,
        dnsxref_path: file.dnsxref_path,
        chef_config: file.chef_config,
    })
}
