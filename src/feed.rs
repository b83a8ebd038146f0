//! Sample timetable served in the same shape the remote schedule endpoint uses.

use crate::demo::DEFAULT_GROUPS;
use crate::models::{FeedQuery, ScheduleDay, ScheduleLecture};
use axum::{extract::Query, Json};
use serde::Serialize;

const PERIOD: &str = "с 10.11.2025 по 16.11.2025";

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub schedule: Vec<ScheduleDay>,
    pub groups: Vec<String>,
    pub period: String,
}

pub async fn schedule_feed(Query(query): Query<FeedQuery>) -> Json<FeedResponse> {
    Json(build_feed(query.group.as_deref()))
}

/// Lectures are limited to `group` when one is given; days are always kept.
pub fn build_feed(group: Option<&str>) -> FeedResponse {
    let group = group.map(str::trim).filter(|g| !g.is_empty());
    let schedule = sample_week()
        .into_iter()
        .map(|mut day| {
            if let Some(group) = group {
                day.lectures.retain(|lecture| lecture.group == group);
            }
            day
        })
        .collect();

    FeedResponse {
        schedule,
        groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
        period: PERIOD.to_string(),
    }
}

fn sample_week() -> Vec<ScheduleDay> {
    vec![
        day(
            "Понедельник",
            "10.11",
            vec![
                lecture("Классный час", "8:00", "Вачаева Е.В.", "1к. 111"),
                lecture("Математика", "9:30", "Иванов И.И.", "1к. 201"),
            ],
        ),
        day("Вторник", "11.11", vec![lecture("Физика", "8:00", "Петрова А.С.", "1к. 302")]),
        day("Среда", "12.11", vec![lecture("Информатика", "9:30", "Сидоров П.К.", "2к. 105")]),
        day(
            "Четверг",
            "13.11",
            vec![lecture("Английский язык", "11:00", "Смирнова О.В.", "1к. 108")],
        ),
        day("Пятница", "14.11", vec![lecture("Химия", "8:00", "Козлов В.А.", "3к. 201")]),
    ]
}

fn day(label: &str, date: &str, lectures: Vec<ScheduleLecture>) -> ScheduleDay {
    ScheduleDay {
        day: label.to_string(),
        date: date.to_string(),
        lectures,
    }
}

fn lecture(name: &str, time: &str, teacher: &str, room: &str) -> ScheduleLecture {
    ScheduleLecture {
        name: name.to_string(),
        time: time.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
        group: "1 ТС-1".to_string(),
    }
}
