use crate::config::Config;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    FeedbackRequest, FeedbackResponse, RecommendationRequest, RecommendationsResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use ureq::{Agent, AgentBuilder};

/// The two calls the session controller makes against the backend
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService {
    fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ServiceResult<RecommendationsResponse>;

    fn submit_feedback(&self, request: &FeedbackRequest) -> ServiceResult<FeedbackResponse>;
}

/// Blocking JSON client for the recommendation service
pub struct RecommenderClient {
    agent: Agent,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(config: Config) -> Self {
        let mut builder = AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        RecommenderClient {
            agent: builder.build(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Health probe against the service root
    pub fn ping(&self) -> ServiceResult<String> {
        let url = self.endpoint("/");
        debug!(%url, "pinging recommendation service");
        let response = self.agent.get(&url).call()?;
        response
            .into_string()
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    fn post_json<B, R>(&self, path: &str, body: &B) -> ServiceResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.agent.post(&url).send_json(body)?;
        let status = response.status();
        let parsed = response
            .into_json::<R>()
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        debug!(%url, status, "response decoded");
        Ok(parsed)
    }
}

impl RecommendationService for RecommenderClient {
    fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ServiceResult<RecommendationsResponse> {
        self.post_json("/recommendations", request)
    }

    fn submit_feedback(&self, request: &FeedbackRequest) -> ServiceResult<FeedbackResponse> {
        self.post_json("/feedback", request)
    }
}
