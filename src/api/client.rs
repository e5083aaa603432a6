use crate::api::error::FetchError;
use crate::error::HistoryError;
use crate::locations::error::ResolutionError;
use crate::settings::Settings;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Authenticated HTTP access to the OpenAQ v3 API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenAqClient {
    http: Client,
    base_url: String,
    settings: Settings,
}

impl OpenAqClient {
    /// Builds a client from `settings`. Fails before any request is made when no
    /// usable API key is configured.
    pub fn new(settings: Settings) -> Result<Self, HistoryError> {
        let key = settings
            .usable_api_key()
            .ok_or(ResolutionError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(key).map_err(|_| ResolutionError::InvalidApiKey)?;
        key_value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key_value);

        let mut builder = Client::builder().default_headers(headers);
        if settings.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(FetchError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// GETs `{base_url}{path}` and decodes the JSON body as `T`.
    ///
    /// `context` describes the query being served and is attached to every error.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        timeout: Duration,
        context: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest {
                url: url.clone(),
                context: context.to_string(),
                source: e,
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => FetchError::HttpStatus {
                        url,
                        status,
                        context: context.to_string(),
                        source: e,
                    },
                    None => FetchError::NetworkRequest {
                        url,
                        context: context.to_string(),
                        source: e,
                    },
                });
            }
        };

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url,
            context: context.to_string(),
            source: e,
        })
    }
}
