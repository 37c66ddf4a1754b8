use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// amber configuration
//
// one toml document read at startup by the server.  the options live under a
// [config] table so the file can carry other tables for deployment tooling.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AmberConfig {
    pub http: HttpConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // directory served under /static (img/, posters/, stars/)
    pub static_root: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogConfig {
    // json file with the movies and watchlists
    pub path: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    // brand used in the document title
    #[serde(default = "default_title")]
    pub title: String,

    // identifier behind the "People" link in the navigation
    #[serde(default = "default_person_id")]
    pub person_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: default_title(),
            person_id: default_person_id(),
        }
    }
}

fn default_title() -> String {
    String::from("Amber")
}

fn default_person_id() -> String {
    String::from("me")
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: AmberConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<AmberConfig> {
    // the toml error already carries the line/column, and we deliberately do not
    // echo the document itself into the logs
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<AmberConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}
