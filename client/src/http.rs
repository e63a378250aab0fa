use crate::config::ClientConfig;
use crate::error::Result;
use crate::error::SourceError;
use crate::session::Session;
use crate::source::ProjectSource;
use async_trait::async_trait;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde_json::Value;
use showcase_discovery::ProjectRecord;
use tracing::debug;
use tracing::warn;

/// [`ProjectSource`] backed by the showcase REST API.
#[derive(Clone, Debug)]
pub struct HttpProjectSource {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpProjectSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every request when the
    /// session carries a token.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!(
                "{}/project/{route}/{}",
                self.base_url,
                utf8_percent_encode(id, NON_ALPHANUMERIC)
            ),
            None => format!("{}/project/{route}", self.base_url),
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(bearer) = self.session.as_ref().and_then(Session::bearer) {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
        }
        Ok(headers)
    }

    async fn get(&self, operation: &'static str, url: String) -> Result<Response> {
        debug!(%url, "{operation}");
        let resp = self
            .http
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        Ok(resp)
    }

    async fn get_list(&self, operation: &'static str, url: String) -> Result<Vec<ProjectRecord>> {
        let resp = ensure_success(operation, self.get(operation, url).await?).await?;
        let body = resp.bytes().await?;
        decode_records(operation, &body)
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>> {
        self.get_list("fetch all projects", self.url("getall", None))
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<ProjectRecord>> {
        let operation = "fetch project";
        let resp = self.get(operation, self.url("getbyid", Some(id))).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = ensure_success(operation, resp).await?.bytes().await?;
        // The backend answers `null` for an unknown but well-formed id.
        Ok(serde_json::from_slice::<Option<ProjectRecord>>(&body)?)
    }

    async fn fetch_by_creator(&self, creator_id: &str) -> Result<Vec<ProjectRecord>> {
        self.get_list(
            "fetch projects by creator",
            self.url("getbycreator", Some(creator_id)),
        )
        .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let operation = "delete project";
        let url = self.url("delete", Some(id));
        debug!(%url, "{operation}");
        let resp = self
            .http
            .delete(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        ensure_success(operation, resp).await?;
        Ok(())
    }
}

async fn ensure_success(operation: &'static str, resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(SourceError::Status {
        operation,
        status,
        body,
    })
}

/// Decodes a JSON array of projects, dropping entries that are not objects.
pub(crate) fn decode_records(operation: &str, body: &[u8]) -> Result<Vec<ProjectRecord>> {
    let entries: Vec<Value> = serde_json::from_slice(body)?;
    let total = entries.len();
    let records: Vec<ProjectRecord> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("{operation}: skipping undecodable project: {err}");
                None
            }
        })
        .collect();
    debug!(total, kept = records.len(), "{operation}");
    Ok(records)
}
