//! Reqwest-backed landmark search adapter.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! error mapping, and JSON decoding into domain landmarks. It makes exactly
//! one request per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{LandmarkDto, into_domain_landmarks};
use crate::domain::ports::{LandmarkSearchService, SearchServiceError};
use crate::domain::{Landmark, LandmarkId, SearchParams};

const SEARCH_PATH: &str = "landmarks/search";
const LANDMARKS_PATH: &str = "landmarks";
const DEFAULT_USER_AGENT: &str = "campus-explorer/0.1";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpSearchServiceBuildError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// Endpoint URLs could not be derived from the base URL.
    #[error("invalid search service base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Landmark search adapter talking to one service base URL.
///
/// Searches are `POST {base}/landmarks/search`; lookups are
/// `GET {base}/landmarks/{id}`.
#[derive(Debug, Clone)]
pub struct HttpLandmarkSearchService {
    client: Client,
    search_url: Url,
    landmarks_url: Url,
}

impl HttpLandmarkSearchService {
    /// Build an adapter. Without `timeout` the reqwest default applies.
    ///
    /// ```rust,no_run
    /// use explorer::outbound::search_service::HttpLandmarkSearchService;
    ///
    /// let base = "http://localhost:8080/api/v1/".parse()?;
    /// let service = HttpLandmarkSearchService::new(base, None)?;
    /// # let _ = service;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be constructed or the base URL
    /// cannot carry a path.
    pub fn new(
        base_url: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpSearchServiceBuildError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = with_trailing_slash(base_url);
        Ok(Self {
            client,
            search_url: base_url.join(SEARCH_PATH)?,
            landmarks_url: base_url.join(LANDMARKS_PATH)?,
        })
    }

    fn lookup_url(&self, id: &LandmarkId) -> Result<Url, SearchServiceError> {
        let mut url = self.landmarks_url.clone();
        url.path_segments_mut()
            .map_err(|()| SearchServiceError::network("search service URL cannot carry a path"))?
            .push(id.as_str());
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SearchServiceError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            SearchServiceError::decode(format!("invalid landmark JSON payload: {error}"))
        })
    }
}

#[async_trait]
impl LandmarkSearchService for HttpLandmarkSearchService {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Landmark>, SearchServiceError> {
        let request = self.client.post(self.search_url.clone()).json(params);
        let dtos: Vec<LandmarkDto> = self.read_json(request).await?;
        into_domain_landmarks(dtos).map_err(SearchServiceError::decode)
    }

    async fn get_by_id(&self, id: &LandmarkId) -> Result<Landmark, SearchServiceError> {
        let request = self.client.get(self.lookup_url(id)?);
        let dto: LandmarkDto = self.read_json(request).await?;
        dto.into_domain().map_err(SearchServiceError::decode)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn map_transport_error(error: reqwest::Error) -> SearchServiceError {
    if error.is_timeout() {
        SearchServiceError::network(format!("request timed out: {error}"))
    } else {
        SearchServiceError::network(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SearchServiceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        body_preview
    };
    SearchServiceError::service(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
