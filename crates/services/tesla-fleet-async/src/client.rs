use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::Method;
use serde::Serialize;

use crate::{
    config::TeslaConfig,
    context::RequestContext,
    error::{ApiError, TeslaError},
    payload::Payload,
    retry,
};

/// Tesla API client
///
/// Holds one pooled HTTP connection set shared by every endpoint resource.
/// Authentication is per call: each operation takes the caller's bearer
/// token and builds a fresh [`RequestContext`].
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: TeslaConfig,
    backoff: ExponentialBuilder,
}

impl Client {
    /// Creates a client configured from the environment
    ///
    /// See [`TeslaConfig::new`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, TeslaError> {
        Self::with_config(TeslaConfig::new())
    }

    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: TeslaConfig) -> Result<Self, TeslaError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| TeslaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            backoff: retry::default_backoff_builder(),
        })
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the backoff configuration for retry logic
    #[must_use]
    pub const fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &TeslaConfig {
        &self.config
    }

    /// Builds a context for `token` against the configured base URL
    #[must_use]
    pub fn context(&self, token: &str) -> RequestContext {
        self.config.context(token)
    }

    /// Performs one logical API call and decodes the outcome
    ///
    /// `query` and `body` are serialized with serde; optional fields that are
    /// `None` must be skipped by the serializer so they are never sent. The
    /// configured bypass value, if any, is appended to the query string.
    ///
    /// Transient failures (429, 500, 502, 503, 504, connection errors) are
    /// retried with exponential backoff; only the final outcome is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TeslaError::Api`] for non-2xx responses and exhausted
    /// transport failures, [`TeslaError::Config`] for unsupported methods or
    /// unbuildable requests.
    pub async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        ctx: &RequestContext,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Payload, TeslaError>
    where
        Q: Serialize + Sync + ?Sized,
        B: Serialize + Sync + ?Sized,
    {
        if !retry::is_retryable_method(&method) {
            return Err(TeslaError::Config(format!("unsupported HTTP method {method}")));
        }

        let url = ctx.url(path);
        let mk = || -> Result<reqwest::Request, TeslaError> {
            let mut rb = self
                .http
                .request(method.clone(), &url)
                .headers(ctx.headers(self.config.user_agent())?)
                .query(&self.config.query());
            if let Some(q) = query {
                rb = rb.query(q);
            }
            if let Some(b) = body {
                rb = rb.json(b);
            }
            Ok(rb.build()?)
        };

        let bytes = self.execute_raw(&method, &url, mk).await?;
        Ok(Payload::from_body(bytes))
    }

    /// `GET path`
    pub(crate) async fn get(&self, path: &str, ctx: &RequestContext) -> Result<Payload, TeslaError> {
        self.request::<(), ()>(Method::GET, path, ctx, None, None).await
    }

    /// `GET path?query`
    pub(crate) async fn get_with_query<Q>(
        &self,
        path: &str,
        ctx: &RequestContext,
        query: &Q,
    ) -> Result<Payload, TeslaError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        self.request::<Q, ()>(Method::GET, path, ctx, Some(query), None)
            .await
    }

    /// `POST path` with a JSON body
    pub(crate) async fn post<B>(
        &self,
        path: &str,
        ctx: &RequestContext,
        body: &B,
    ) -> Result<Payload, TeslaError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.request::<(), B>(Method::POST, path, ctx, None, Some(body))
            .await
    }

    /// `POST path` without a body
    pub(crate) async fn post_empty(
        &self,
        path: &str,
        ctx: &RequestContext,
    ) -> Result<Payload, TeslaError> {
        self.request::<(), ()>(Method::POST, path, ctx, None, None)
            .await
    }

    /// `DELETE path`
    pub(crate) async fn delete(
        &self,
        path: &str,
        ctx: &RequestContext,
    ) -> Result<Payload, TeslaError> {
        self.request::<(), ()>(Method::DELETE, path, ctx, None, None)
            .await
    }

    /// `DELETE path?query`
    pub(crate) async fn delete_with_query<Q>(
        &self,
        path: &str,
        ctx: &RequestContext,
        query: &Q,
    ) -> Result<Payload, TeslaError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        self.request::<Q, ()>(Method::DELETE, path, ctx, Some(query), None)
            .await
    }

    async fn execute_raw<M>(
        &self,
        method: &Method,
        url: &str,
        mk: M,
    ) -> Result<bytes::Bytes, TeslaError>
    where
        M: Fn() -> Result<reqwest::Request, TeslaError> + Send + Sync,
    {
        let http_client = &self.http;
        let mk = &mk;

        (move || async move {
            let request = mk()?;
            tracing::debug!(method = %method, url = %url, "Tesla API request");

            let response = http_client
                .execute(request)
                .await
                .map_err(|e| TeslaError::Api(ApiError::transport(e)))?;

            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| TeslaError::Api(ApiError::transport(e)))?;

            if status.is_success() {
                return Ok(bytes);
            }

            Err(crate::error::deserialize_api_error(status, &bytes))
        })
        .retry(self.backoff)
        .when(TeslaError::is_retryable)
        .notify(|err: &TeslaError, dur: Duration| {
            tracing::warn!(
                method = %method,
                url = %url,
                status = ?err.status_code(),
                delay_ms = dur.as_millis() as u64,
                "Retrying Tesla API request: {err}"
            );
        })
        .await
    }
}
