use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub profile: Option<u64>,
    pub verbose: Option<bool>,
}
