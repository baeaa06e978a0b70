use crate::domain::Coordinate;
use crate::location::GeoOptions;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    #[serde(default)]
    storage: Storage,
    location: Location,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Api {
    root: String,
    #[serde(default = "default_auth_scheme")]
    auth_scheme: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

fn default_auth_scheme() -> String {
    "Bearer".to_string()
}

impl Api {
    pub fn root(&self) -> &str {
        self.root.trim_end_matches('/')
    }

    pub fn auth_scheme(&self) -> &str {
        &self.auth_scheme
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Storage {
    path: Option<String>,
    token: Option<String>,
}

impl Storage {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProviderKind {
    Fixed,
    Http,
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    provider: LocationProviderKind,
    fixed: Option<Coordinate>,
    http_url: Option<String>,
    #[serde(default)]
    options: GeoOptions,
}

impl Location {
    pub fn provider(&self) -> LocationProviderKind {
        self.provider
    }

    pub fn fixed(&self) -> Option<Coordinate> {
        self.fixed
    }

    pub fn http_url(&self) -> Option<&str> {
        self.http_url.as_deref()
    }

    pub fn options(&self) -> &GeoOptions {
        &self.options
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    root: "https://api.url".to_string(),
                    auth_scheme: default_auth_scheme(),
                    request_timeout: Duration::from_secs(5),
                },
                storage: Storage::default(),
                location: Location {
                    provider: LocationProviderKind::Fixed,
                    fixed: Some(Coordinate::new(51.8615899, 4.3580323)),
                    http_url: None,
                    options: GeoOptions::default(),
                },
            },
        }
    }

    pub fn api_root(mut self, url: String) -> Self {
        self.config.api.root = url;
        self
    }

    pub fn location_provider(mut self, provider: LocationProviderKind) -> Self {
        self.config.location.provider = provider;
        self
    }

    pub fn http_url(mut self, url: String) -> Self {
        self.config.location.http_url = Some(url);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
