use super::document;
use crate::config::Config;
use crate::error::GamificationError;
use crate::model::{csrf, ActivityEvent, ActivityResult, DailyRewardResponse};
use crate::service::GamificationApi;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// `GamificationApi` over `fetch`.
pub struct HttpGamificationApi {
    config: Config,
}

impl HttpGamificationApi {
    pub fn new(config: Config) -> Self {
        HttpGamificationApi { config }
    }

    fn csrf_token(&self) -> Option<String> {
        let document = document().ok()?;
        let cookies = document
            .dyn_ref::<HtmlDocument>()
            .and_then(|html| html.cookie().ok())
            .unwrap_or_default();
        let meta = document
            .query_selector(&format!("meta[name=\"{}\"]", self.config.csrf_meta))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));
        csrf::resolve_token(&cookies, &self.config.csrf_cookie, meta.as_deref())
    }

    fn post(&self, url: &str) -> RequestBuilder {
        let builder = Request::post(url)
            .header("Content-Type", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        match self.csrf_token() {
            Some(token) => builder.header(&self.config.csrf_header, &token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GamificationError> {
        if !response.ok() {
            return Err(GamificationError::Status(response.status()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl GamificationApi for HttpGamificationApi {
    async fn record_activity(
        &self,
        event: &ActivityEvent,
    ) -> Result<ActivityResult, GamificationError> {
        let response = self
            .post(&self.config.record_activity_url)
            .json(event)?
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn claim_daily_reward(&self) -> Result<DailyRewardResponse, GamificationError> {
        let response = self.post(&self.config.claim_reward_url).send().await?;
        Self::decode(response).await
    }
}
