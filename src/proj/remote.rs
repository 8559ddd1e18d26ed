//! Remote projection definitions.
//!
//! A definition missing from the registry can be fetched once from a URL that
//! serves its proj4 string (e.g. `https://epsg.io/3044.proj4`). The fetch is a
//! single request with no retry; dropping the future abandons it.

use std::future::Future;
use std::time::Duration;

use crate::error::RegistryError;
use crate::proj::crs::validate_proj4;
use crate::proj::registry::{ProjectionDefinition, ProjectionRegistry};

const USER_AGENT: &str = concat!("mapcoords/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can load the text of a projection definition.
pub trait DefinitionSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, RegistryError>> + Send;
}

/// [`DefinitionSource`] backed by an HTTP client.
#[derive(Clone, Debug)]
pub struct HttpDefinitionSource {
    client: reqwest::Client,
}

impl HttpDefinitionSource {
    pub fn new() -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl DefinitionSource for HttpDefinitionSource {
    async fn fetch(&self, url: &str) -> Result<String, RegistryError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

impl ProjectionRegistry {
    /// Fetch the proj4 definition of `code` from `url` and register it.
    ///
    /// On any failure the registry is left untouched.
    pub async fn fetch_remote_definition<S: DefinitionSource>(
        &mut self,
        source: &S,
        code: &str,
        url: &str,
    ) -> Result<ProjectionDefinition, RegistryError> {
        log::debug!("fetching definition of {code} from {url}");
        let body = source.fetch(url).await?;
        let proj4 = body.trim();
        if proj4.is_empty() {
            return Err(RegistryError::InvalidDefinition {
                code: code.to_string(),
                reason: "empty response".to_string(),
            });
        }
        validate_proj4(proj4).map_err(|e| RegistryError::InvalidDefinition {
            code: code.to_string(),
            reason: e.to_string(),
        })?;

        let definition = ProjectionDefinition::new(code, proj4);
        self.register(definition.clone());
        Ok(definition)
    }
}
