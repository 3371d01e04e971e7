use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type ActivityName = String;
pub type ParticipantEmail = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports an overbooked activity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left())
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Snapshot of `GET /activities`, in the order the server sent the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    activities: IndexMap<ActivityName, Activity>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, name: impl Into<ActivityName>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.activities.iter()
    }

    pub fn activity_names(&self) -> Vec<ActivityName> {
        self.activities.keys().cloned().collect()
    }

    pub fn is_registered(&self, name: &str, email: &str) -> bool {
        self.get(name)
            .map(|activity| activity.has_participant(email))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity {
            description: "d".to_string(),
            schedule: "Mon 3pm".to_string(),
            max_participants: 10,
            participants: vec!["a@x.com".to_string()],
        }
    }

    #[test]
    fn spots_left_is_capacity_minus_participants() {
        let activity = chess_club();
        assert_eq!(activity.spots_left(), 9);
        assert_eq!(activity.availability(), "9 spots left");
    }

    #[test]
    fn spots_left_goes_negative_when_overbooked() {
        let activity = Activity {
            max_participants: 1,
            participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
            ..chess_club()
        };
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn parse_keeps_response_key_order() {
        let json = r#"{
            "Programming Class": {"description": "p", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "d", "schedule": "Mon 3pm", "max_participants": 10, "participants": ["a@x.com"]},
            "Art Studio": {"description": "a", "schedule": "Fri", "max_participants": 5, "participants": []}
        }"#;

        let roster = Roster::from_json(json).unwrap();

        assert_eq!(
            roster.activity_names(),
            vec!["Programming Class", "Chess Club", "Art Studio"]
        );
        assert_eq!(roster.get("Chess Club"), Some(&chess_club()));
        assert!(roster.is_registered("Chess Club", "a@x.com"));
        assert!(!roster.is_registered("Chess Club", "b@x.com"));
        assert!(!roster.is_registered("Unknown", "a@x.com"));
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(Roster::from_json("[]").is_err());
    }
}
