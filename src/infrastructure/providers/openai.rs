//! OpenAI completions API 게이트웨이 어댑터.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::application::error::GatewayError;
use crate::application::ports::CompletionGateway;
use crate::domain::completion::{
    CompletionPayload, CompletionResponse, LegacyCompletionPayload, ModelInfo,
};

use super::api_runner::{build_api_client, decode, send_json};

pub struct OpenAiGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelInfo>,
}

impl OpenAiGateway {
    /// base URL은 http(s) 절대 URL이어야 한다.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("invalid API base URL: {base_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("unsupported API base URL scheme: {}", parsed.scheme());
        }

        Ok(Self {
            client: build_api_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn create_completion(
        &self,
        payload: &CompletionPayload,
    ) -> Result<CompletionResponse, GatewayError> {
        let endpoint = self.endpoint("completions");
        debug!(%endpoint, model = %payload.model, "POST completion");

        let request = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(payload);
        let value = send_json("request completion", request).await?;
        decode("request completion", value)
    }

    async fn create_engine_completion(
        &self,
        engine: &str,
        payload: &LegacyCompletionPayload,
    ) -> Result<CompletionResponse, GatewayError> {
        let endpoint = self.endpoint(&format!("engines/{engine}/completions"));
        debug!(%endpoint, "POST legacy engine completion");

        let request = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(payload);
        let value = send_json("request engine completion", request).await?;
        decode("request engine completion", value)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let endpoint = self.endpoint("models");
        debug!(%endpoint, "GET models");

        let request = self.client.get(endpoint).bearer_auth(&self.api_key);
        let value = send_json("list models", request).await?;
        let list: ModelList = decode("list models", value)?;
        Ok(list.data)
    }
}
