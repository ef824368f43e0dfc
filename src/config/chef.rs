use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct ChefConfig {
    pub(crate) node_name: String,
    pub(crate) client_key: String,
    pub(crate) chef_server_url: String,
}

impl ChefConfig {
    pub(crate) fn get_server_url(&self) -> String {
        self.chef_server_url.trim_end_matches('/').to_string()
    }
}
