use crate::config::{Config, DEFAULT_BASE_URL};
use crate::credential::{Credential, TokenType};
use crate::error::{Error, Result};
use crate::models::*;
use crate::query::RandomImageQuery;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;

const USER_AGENT: &str = concat!("weebsh/", env!("CARGO_PKG_VERSION"));

/// Client for the weeb.sh image API.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// may be used concurrently.
#[derive(Clone)]
pub struct WeebClient {
    http: Client,
    base_url: Url,
    credential: Credential,
    authorization: HeaderValue,
}

impl WeebClient {
    /// Create a client for the public API. `token_type` defaults to bearer.
    pub fn new(token: impl Into<String>, token_type: Option<TokenType>) -> Result<Self> {
        let credential = Credential::new(token, token_type.unwrap_or_default());
        Self::with_credential(credential, DEFAULT_BASE_URL)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.token.clone().ok_or(Error::MissingToken)?;
        Self::with_credential(Credential::new(token, config.token_type), &config.base_url)
    }

    pub fn with_credential(credential: Credential, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::InvalidConfig(format!("failed to build client: {err}")))?;

        let mut authorization = HeaderValue::from_str(&credential.header_value())
            .map_err(|_| Error::InvalidConfig("invalid characters in token".into()))?;
        authorization.set_sensitive(true);

        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            credential,
            authorization,
        })
    }

    /// Point the client at another host, e.g. a staging deployment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// List the image types. `hidden` is only sent when given, leaving the
    /// service default in place otherwise.
    pub async fn get_types(&self, hidden: Option<bool>) -> Result<TypeListing> {
        self.get(&["images", "types"], hidden_query(hidden)).await
    }

    pub async fn get_tags(&self, hidden: Option<bool>) -> Result<Vec<ImageTag>> {
        let listing: TagListing = self.get(&["images", "tags"], hidden_query(hidden)).await?;
        Ok(listing.tags)
    }

    /// Fetch one image by id. A missing id yields a 404 remote error, see
    /// [`Error::is_not_found`].
    pub async fn get_image(&self, id: &str) -> Result<Image> {
        self.get(&["images", "info", id], Vec::new()).await
    }

    pub async fn get_random(&self, query: &RandomImageQuery) -> Result<Image> {
        self.get(&["images", "random"], query.query_pairs()).await
    }

    fn endpoint(&self, segments: &[&str], query: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidConfig("base url cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get<T>(&self, segments: &[&str], query: Vec<(String, String)>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments, &query)?;
        let started = Instant::now();

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            path = url.path(),
            params = query.len(),
            status = status.as_u16(),
            elapsed = ?started.elapsed(),
            "weeb.sh request"
        );

        if !status.is_success() {
            return Err(Error::from_remote(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn hidden_query(hidden: Option<bool>) -> Vec<(String, String)> {
    hidden
        .map(|h| vec![("hidden".to_string(), h.to_string())])
        .unwrap_or_default()
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut base = raw
        .parse::<Url>()
        .map_err(|err| Error::InvalidConfig(format!("invalid base url: {err}")))?;
    if base.cannot_be_a_base() {
        return Err(Error::InvalidConfig(format!("invalid base url: {raw}")));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    Ok(base)
}
