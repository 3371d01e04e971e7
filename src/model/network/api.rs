use super::{ApiRequest, ApiResponse, Method, RosterError, Transport};
use crate::model::Roster;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Only a non-empty string `detail` is shown to users; validation errors carry a list.
fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<DetailBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        })
}

/// Typed access to the activities endpoints.
pub struct RosterApi<T: Transport> {
    transport: T,
}

impl<T: Transport> RosterApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn activities_request() -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            path: "/activities".to_string(),
        }
    }

    pub fn signup_request(activity: &str, email: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            path: format!(
                "/activities/{}/signup?email={}",
                encode_component(activity),
                encode_component(email)
            ),
        }
    }

    pub fn unregister_request(activity: &str, email: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Delete,
            path: format!(
                "/activities/{}/unregister?email={}",
                encode_component(activity),
                encode_component(email)
            ),
        }
    }

    pub async fn fetch_activities(&self) -> Result<Roster, RosterError> {
        let response = self.transport.send(Self::activities_request()).await?;
        if !response.ok() {
            return Err(RosterError::Status(response.status));
        }
        Roster::from_json(&response.body).map_err(|e| RosterError::InvalidData(e.to_string()))
    }

    /// Returns the server's confirmation text.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, RosterError> {
        let response = self
            .transport
            .send(Self::signup_request(activity, email))
            .await?;
        Self::confirmation(response)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, RosterError> {
        let response = self
            .transport
            .send(Self::unregister_request(activity, email))
            .await?;
        Self::confirmation(response)
    }

    fn confirmation(response: ApiResponse) -> Result<String, RosterError> {
        if !response.ok() {
            return Err(RosterError::Application {
                status: response.status,
                detail: parse_detail(&response.body),
            });
        }
        serde_json::from_str::<MessageBody>(&response.body)
            .map(|body| body.message)
            .map_err(|e| RosterError::InvalidData(e.to_string()))
    }
}
