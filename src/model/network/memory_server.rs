use super::{ApiRequest, ApiResponse, Method, RosterError, Transport};
use crate::model::Activity;
use async_trait::async_trait;
use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct ServerState {
    activities: IndexMap<String, Activity>,
    scripted: VecDeque<Result<ApiResponse, RosterError>>,
    requests: Vec<ApiRequest>,
}

/// In-process stand-in for the activities server.
#[derive(Clone, Default)]
pub struct MemoryServer {
    state: Rc<RefCell<ServerState>>,
}

fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

fn detail(status: u16, text: &str) -> ApiResponse {
    ApiResponse::new(status, json!({ "detail": text }).to_string())
}

fn message(text: String) -> ApiResponse {
    ApiResponse::new(200, json!({ "message": text }).to_string())
}

impl MemoryServer {
    pub fn with_school_activities() -> Self {
        let server = Self::default();
        {
            let mut state = server.state.borrow_mut();
            state.activities.insert(
                "Chess Club".to_string(),
                activity(
                    "Learn strategies and compete in chess tournaments",
                    "Fridays, 3:30 PM - 5:00 PM",
                    12,
                    &["michael@mergington.edu", "daniel@mergington.edu"],
                ),
            );
            state.activities.insert(
                "Programming Class".to_string(),
                activity(
                    "Learn programming fundamentals and build software projects",
                    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                    20,
                    &["emma@mergington.edu", "sophia@mergington.edu"],
                ),
            );
            state.activities.insert(
                "Science Club".to_string(),
                activity(
                    "Hands-on experiments and science fair preparation",
                    "Wednesdays, 3:30 PM - 5:00 PM",
                    15,
                    &[],
                ),
            );
        }
        server
    }

    /// Queues a canned response for the next request.
    pub fn respond_with(&self, response: ApiResponse) {
        self.state.borrow_mut().scripted.push_back(Ok(response));
    }

    /// Makes the next request fail before any response arrives.
    pub fn fail_next(&self, reason: &str) {
        self.state
            .borrow_mut()
            .scripted
            .push_back(Err(RosterError::Network(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|request| request.method == Method::Get)
            .count()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let (path, query) = request
            .path
            .split_once('?')
            .unwrap_or((request.path.as_str(), ""));
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let email = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "email")
            .map(|(_, value)| decode(value));

        match (request.method, segments.as_slice()) {
            (Method::Get, ["activities"]) => {
                let state = self.state.borrow();
                ApiResponse::new(200, json!(state.activities).to_string())
            }
            (method, ["activities", name, action]) => {
                let Some(email) = email else {
                    return ApiResponse::new(
                        422,
                        json!({ "detail": [{ "loc": ["query", "email"], "msg": "field required" }] })
                            .to_string(),
                    );
                };
                let name = decode(name);
                let mut state = self.state.borrow_mut();
                let Some(activity) = state.activities.get_mut(&name) else {
                    return detail(404, "Activity not found");
                };
                match (method, *action) {
                    (Method::Post, "signup") => {
                        if activity.has_participant(&email) {
                            return detail(400, "Student is already signed up");
                        }
                        activity.participants.push(email.clone());
                        message(format!("Signed up {} for {}", email, name))
                    }
                    (Method::Delete, "unregister") => {
                        if !activity.has_participant(&email) {
                            return detail(400, "Student is not registered for this activity");
                        }
                        activity.participants.retain(|p| p != &email);
                        message(format!("Unregistered {} from {}", email, name))
                    }
                    _ => detail(405, "Method Not Allowed"),
                }
            }
            _ => detail(404, "Not Found"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MemoryServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RosterError> {
        let scripted = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request.clone());
            state.scripted.pop_front()
        };
        match scripted {
            Some(outcome) => outcome,
            None => Ok(self.handle(&request)),
        }
    }
}
