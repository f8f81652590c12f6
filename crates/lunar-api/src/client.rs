//! reqwest-backed implementation of [`Backend`]

use std::time::{Duration, Instant};

use lunar_core::{
    EnvVars, Error, Execution, ExecutionList, Function, FunctionList, LogList, Result,
    VersionDiff, VersionList,
};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::backend::Backend;
use crate::error::{ApiError, ApiResult};
use crate::requests::{FunctionPatch, InvokeRequest, InvokeResponse, NewFunction};
use crate::EXECUTION_ID_HEADER;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Lunar backend.
///
/// Cloning is cheap and shares the connection pool and the session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    api_key: &'a str,
}

#[derive(Serialize)]
struct EnvBody<'a> {
    env_vars: &'a EnvVars,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        let base_url = Url::parse(trimmed).map_err(|_| Error::invalid_url(trimmed))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_url(trimmed));
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("lunar-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::backend(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!("API client targeting {}", base_url);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Public endpoint a function is invoked through
    pub fn invocation_url(&self, function_id: &str) -> Url {
        self.endpoint(&["fn", function_id])
    }

    /// Base URL with `segments` appended, each one percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn paged(&self, segments: &[&str], limit: u64, offset: u64) -> Url {
        let mut url = self.endpoint(segments);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), status.canonical_reason(), &body);
        tracing::warn!("Backend answered {}: {}", status.as_u16(), err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Mutations whose response body carries nothing the console reads
    async fn send_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        self.send(request).await.map(|_| ())
    }
}

impl Backend for ApiClient {
    async fn login(&self, api_key: &str) -> ApiResult<()> {
        let url = self.endpoint(&["api", "login"]);
        self.send_empty(self.http.post(url).json(&LoginBody { api_key }))
            .await?;
        tracing::info!("Logged in to {}", self.base_url);
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        let url = self.endpoint(&["api", "logout"]);
        self.send_empty(self.http.post(url)).await
    }

    async fn list_functions(&self, limit: u64, offset: u64) -> ApiResult<FunctionList> {
        let url = self.paged(&["api", "functions"], limit, offset);
        self.send_json(self.http.get(url)).await
    }

    async fn get_function(&self, id: &str) -> ApiResult<Function> {
        let url = self.endpoint(&["api", "functions", id]);
        self.send_json(self.http.get(url)).await
    }

    async fn create_function(&self, function: &NewFunction) -> ApiResult<()> {
        let url = self.endpoint(&["api", "functions"]);
        self.send_empty(self.http.post(url).json(function)).await
    }

    async fn update_function(&self, id: &str, patch: &FunctionPatch) -> ApiResult<()> {
        let url = self.endpoint(&["api", "functions", id]);
        self.send_empty(self.http.put(url).json(patch)).await
    }

    async fn delete_function(&self, id: &str) -> ApiResult<()> {
        let url = self.endpoint(&["api", "functions", id]);
        self.send_empty(self.http.delete(url)).await
    }

    async fn update_env(&self, id: &str, env_vars: &EnvVars) -> ApiResult<()> {
        let url = self.endpoint(&["api", "functions", id, "env"]);
        self.send_empty(self.http.put(url).json(&EnvBody { env_vars }))
            .await
    }

    async fn list_versions(&self, id: &str, limit: u64, offset: u64) -> ApiResult<VersionList> {
        let url = self.paged(&["api", "functions", id, "versions"], limit, offset);
        self.send_json(self.http.get(url)).await
    }

    async fn activate_version(&self, id: &str, version: u32) -> ApiResult<()> {
        let version = version.to_string();
        let url = self.endpoint(&["api", "functions", id, "versions", &version, "activate"]);
        self.send_empty(self.http.post(url)).await
    }

    async fn diff_versions(&self, id: &str, old: u32, new: u32) -> ApiResult<VersionDiff> {
        let (old, new) = (old.to_string(), new.to_string());
        let url = self.endpoint(&["api", "functions", id, "diff", &old, &new]);
        self.send_json(self.http.get(url)).await
    }

    async fn list_executions(
        &self,
        id: &str,
        limit: u64,
        offset: u64,
    ) -> ApiResult<ExecutionList> {
        let url = self.paged(&["api", "functions", id, "executions"], limit, offset);
        self.send_json(self.http.get(url)).await
    }

    async fn get_execution(&self, id: &str) -> ApiResult<Execution> {
        let url = self.endpoint(&["api", "executions", id]);
        self.send_json(self.http.get(url)).await
    }

    async fn execution_logs(&self, id: &str, limit: u64, offset: u64) -> ApiResult<LogList> {
        let url = self.paged(&["api", "executions", id, "logs"], limit, offset);
        self.send_json(self.http.get(url)).await
    }

    async fn invoke(&self, id: &str, request: &InvokeRequest) -> ApiResult<InvokeResponse> {
        let mut url = self.invocation_url(id);
        let query = request.query.trim().trim_start_matches('?');
        if !query.is_empty() {
            url.set_query(Some(query));
        }

        let mut builder = self.http.request(request.method.into(), url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if request.method.has_body() && !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        tracing::debug!("Invoking {} {}", request.method, url);
        let started = Instant::now();
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let execution_id = response
            .headers()
            .get(EXECUTION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .filter(|v| !v.is_empty());
        let body = response.text().await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        Ok(InvokeResponse {
            status,
            headers,
            body,
            duration_ms,
            execution_id,
        })
    }
}
