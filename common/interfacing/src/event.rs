use crate::imports::*;

/// One spreadsheet row, projected to the API shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub event_name: String,
    #[serde(rename = "events")]
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub attendee_list: String,
    pub picture_url: String,
    pub file_ids: String,
}

impl Event {
    /// Row identity: `"{name}_{yyyy-MM-dd}"`, stable across edits of the
    /// other columns.
    pub fn compose_id(event_name: &str, date: &str) -> String {
        format!("{}_{}", event_name.trim(), date)
    }

    /// Splits an id back into (name, date). Names may contain underscores,
    /// the date is always the last segment.
    pub fn split_id(id: &str) -> Option<(&str, &str)> {
        let (name, date) = id.rsplit_once('_')?;
        if name.is_empty() || date.is_empty() {
            return None;
        }
        Some((name, date))
    }
}

/// Create/update payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub event_name: String,
    #[serde(rename = "events", default)]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attendee_list: String,
    #[serde(default)]
    pub picture_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub success: bool,
    pub events: Vec<Event>,
    pub is_admin: bool,
    pub timestamp: String,
}
