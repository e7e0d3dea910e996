use anyhow::Result;
use serde::Deserialize;

use crate::recognizer::BackendKind;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub recognition: RecognitionConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Which backend the controller owns
    pub backend: BackendKind,
    /// Recognition language tag; platform default when unset
    pub language: Option<String>,
    pub max_results: u32,
    pub partial_results: bool,
    /// Rebuild the engine handle on every start (platform workaround knob)
    pub recreate_on_start: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "speechbridge".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3917,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Mock,
            language: None,
            max_results: 5,
            partial_results: true,
            recreate_on_start: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
