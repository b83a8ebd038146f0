//! Outbound schedule request and validation of its payload.
//!
//! The remote endpoint is not trusted to be well-formed: every day and lecture
//! entry is checked on its own and skipped when it lacks a label or name.

use crate::errors::ScheduleError;
use crate::models::{ScheduleDay, ScheduleLecture, SchedulePayload};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ScheduleClient {
    client: Client,
    url: String,
}

impl ScheduleClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ScheduleError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self, group: &str) -> Result<SchedulePayload, ScheduleError> {
        debug!(url = %self.url, group, "requesting schedule");
        let response = self
            .client
            .get(&self.url)
            .query(&[("group", group)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        parse_schedule_payload(value)
    }
}

pub fn parse_schedule_payload(value: Value) -> Result<SchedulePayload, ScheduleError> {
    let Value::Object(root) = value else {
        return Err(ScheduleError::Malformed("expected a JSON object".to_string()));
    };

    let schedule = match root.get("schedule") {
        Some(Value::Array(days)) => Some(days.iter().filter_map(parse_day).collect()),
        Some(_) => {
            warn!("ignoring non-array schedule field");
            None
        }
        None => None,
    };

    let groups = match root.get("groups") {
        Some(Value::Array(entries)) => Some(
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    };

    let period = root.get("period").and_then(Value::as_str).map(str::to_string);

    Ok(SchedulePayload {
        schedule,
        groups,
        period,
    })
}

fn parse_day(entry: &Value) -> Option<ScheduleDay> {
    let Some(fields) = entry.as_object() else {
        warn!("skipping schedule day that is not an object");
        return None;
    };
    let Some(day) = fields.get("day").and_then(Value::as_str) else {
        warn!("skipping schedule day without a day label");
        return None;
    };

    let lectures = match fields.get("lectures") {
        Some(Value::Array(slots)) => slots.iter().filter_map(parse_lecture).collect(),
        _ => Vec::new(),
    };

    Some(ScheduleDay {
        day: day.to_string(),
        date: text(fields, "date"),
        lectures,
    })
}

fn parse_lecture(entry: &Value) -> Option<ScheduleLecture> {
    let fields = entry.as_object()?;
    let Some(name) = fields.get("name").and_then(Value::as_str) else {
        warn!("skipping lecture without a name");
        return None;
    };

    Some(ScheduleLecture {
        name: name.to_string(),
        time: text(fields, "time"),
        teacher: text(fields, "teacher"),
        room: text(fields, "room"),
        group: text(fields, "group"),
    })
}

fn text(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
