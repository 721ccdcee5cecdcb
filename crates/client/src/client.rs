use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tripr_common::types::{
    ApiEnvelope, BudgetTier, ChatReply, ChatRequest, DayPlan, GroupAddResponse, GroupMember,
    ItineraryData, ItineraryRequest, Preferences, StatusResponse, UserPreferences,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("request rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The server was never reached, as opposed to answering badly.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(e) if !e.is_decode())
    }
}

/// One request per call: no retries, no timeout.
#[derive(Clone)]
pub struct TripClient {
    client: Client,
    base_url: Url,
}

impl TripClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub async fn send_chat(&self, message: &str) -> Result<String, ClientError> {
        let body = ChatRequest {
            message: message.to_owned(),
        };
        let envelope: ApiEnvelope<ChatReply> =
            self.post_json(&["api", "chat"], &body).await?;
        Ok(open_envelope(envelope)?.text)
    }

    pub async fn generate_itinerary(
        &self,
        preferences: &Preferences,
        budget: BudgetTier,
    ) -> Result<Vec<DayPlan>, ClientError> {
        let body = ItineraryRequest {
            preferences: preferences.clone(),
            budget,
        };
        let envelope: ApiEnvelope<ItineraryData> = self
            .post_json(&["api", "itinerary", "generate"], &body)
            .await?;
        Ok(open_envelope(envelope)?.itinerary)
    }

    pub async fn get_preferences(&self, user_id: &str) -> Result<UserPreferences, ClientError> {
        self.get_json(&["api", "preferences", user_id]).await
    }

    pub async fn save_preferences(
        &self,
        user_id: &str,
        prefs: &UserPreferences,
    ) -> Result<(), ClientError> {
        let status: StatusResponse = self
            .post_json(&["api", "preferences", user_id], prefs)
            .await?;
        if !status.success {
            return Err(ClientError::Rejected {
                message: status.message,
            });
        }
        Ok(())
    }

    pub async fn list_group(&self) -> Result<Vec<GroupMember>, ClientError> {
        self.get_json(&["api", "group"]).await
    }

    pub async fn add_group_member(
        &self,
        member: &GroupMember,
    ) -> Result<Vec<GroupMember>, ClientError> {
        let resp: GroupAddResponse = self.post_json(&["api", "group", "add"], member).await?;
        if !resp.success {
            return Err(ClientError::Rejected {
                message: resp.message,
            });
        }
        Ok(resp.members)
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, ClientError> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, R>(&self, segments: &[&str], body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(segments)?;
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Http { status, body });
    }
    Ok(response.json::<R>().await?)
}

fn open_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, ClientError> {
    match envelope {
        ApiEnvelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiEnvelope { message, .. } => Err(ClientError::Rejected { message }),
    }
}
