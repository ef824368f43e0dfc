use std::time::Duration;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use crate::chef::auth::{timestamp_now, RequestSigner};
use crate::chef::dto::{EnvironmentListDto, NodeDto, SearchResultDto};
use crate::config::chef::ChefConfig;
use crate::error::InventoryError;
use crate::inventory::source::InventorySource;

const CHEF_VERSION: &str = "12.0.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub(crate) struct ChefClient {
    agent: ureq::Agent,
    server_url: String,
    signer: RequestSigner,
}

impl ChefClient {
    pub(crate) fn new(config: &ChefConfig) -> Result<Self, InventoryError> {
        let server_url = config.get_server_url();
        Url::parse(&server_url)
            .map_err(|err| InventoryError::InvalidSettings(format!("chef_server_url '{}': {}", server_url, err)))?;

        let signer = RequestSigner::from_key_file(&config.node_name, &config.client_key)?;
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();

        Ok(ChefClient { agent, server_url, signer })
    }

    pub(crate) fn endpoint(&self, path: &str, query: Option<(&str, &str)>) -> Result<Url, InventoryError> {
        let mut url = Url::parse(&format!("{}/{}", self.server_url, path))
            .map_err(|err| InventoryError::InvalidSettings(format!("{}", err)))?;

        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, InventoryError> {
        debug!("GET {}", url);

        let headers = self.signer.headers("GET", url.path(), b"", &timestamp_now())?;
        let mut request = self.agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .set("X-Chef-Version", CHEF_VERSION);

        for (name, value) in &headers {
            request = request.set(name, value);
        }

        let response = request.call()?;
        response
            .into_json::<T>()
            .map_err(|err| InventoryError::Decode(format!("{}: {}", url, err)))
    }
}

impl InventorySource for ChefClient {
    fn list_environments(&self) -> Result<Vec<String>, InventoryError> {
        let environments: EnvironmentListDto = self.get(self.endpoint("environments", None)?)?;

        Ok(environments.into_keys().collect())
    }

    fn search_nodes(&self, root: &str) -> Result<Vec<NodeDto>, InventoryError> {
        let query = format!("chef_environment:{}*", root);
        let result: SearchResultDto = self.get(self.endpoint("search/node", Some(("q", &query)))?)?;
        debug!("search {} returned {} rows from {} of {}", query, result.rows.len(), result.start, result.total);

        Ok(decode_rows(result.rows))
    }
}

/// Rows that are not node objects are skipped, not fatal. Odd fields inside a node fall back to defaults.
pub(crate) fn decode_rows(rows: Vec<Value>) -> Vec<NodeDto> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<NodeDto>(row) {
            Ok(node) => Some(node),
            Err(err) => {
                warn!("skip malformed node row: {}", err);
                None
            }
        })
        .collect()
}
