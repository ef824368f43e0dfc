use std::fmt;

#[derive(Debug)]
pub enum InventoryError {
    SettingsNotFound(String),
    UnsupportedSettingsFormat(String),
    MissingSetting(String),
    InvalidSettings(String),
    ClientKey(String),
    Connection(String),
    Http { status: u16, url: String },
    Decode(String),
    UnknownSelection(String),
    Output(String),
    Io(String),
}

impl InventoryError {
    /// Errors that mean the server could not be reached for this request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InventoryError::Connection(_) | InventoryError::ClientKey(_))
    }
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::SettingsNotFound(path) => write!(f, "Settings File Not Found! ({})", path),
            InventoryError::UnsupportedSettingsFormat(ext) => write!(f, "Unknown File Type ({})", ext),
            InventoryError::MissingSetting(key) => write!(f, "Setting '{}' Not Found!", key),
            InventoryError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            InventoryError::ClientKey(msg) => write!(f, "Unable to load client key: {}", msg),
            InventoryError::Connection(msg) => write!(f, "Unable to reach Chef server: {}", msg),
            InventoryError::Http { status, url } => write!(f, "Chef server answered {} for {}", status, url),
            InventoryError::Decode(msg) => write!(f, "Unable to decode server response: {}", msg),
            InventoryError::UnknownSelection(msg) => write!(f, "Unknown {}", msg),
            InventoryError::Output(msg) => write!(f, "Unable to write output: {}", msg),
            InventoryError::Io(msg) => write!(f, "File system error: {}", msg),
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(format!("{}", err))
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Decode(format!("JSON parsing error: {}", err))
    }
}

impl From<serde_yaml::Error> for InventoryError {
    fn from(err: serde_yaml::Error) -> Self {
        InventoryError::Decode(format!("YAML parsing error: {}", err))
    }
}

impl From<toml::de::Error> for InventoryError {
    fn from(err: toml::de::Error) -> Self {
        InventoryError::InvalidSettings(format!("TOML parsing error: {}", err))
    }
}

impl From<ureq::Error> for InventoryError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => InventoryError::Http {
                status,
                url: response.get_url().to_string(),
            },
            ureq::Error::Transport(transport) => InventoryError::Connection(format!("{}", transport)),
        }
    }
}
