use serde::{Deserialize, Serialize};

/// Attendance of a single lecture. Cycles `Pending -> Attended -> Missed -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Attended,
    Missed,
    #[default]
    Pending,
}

impl Attendance {
    pub fn next(self) -> Self {
        match self {
            Attendance::Pending => Attendance::Attended,
            Attendance::Attended => Attendance::Missed,
            Attendance::Missed => Attendance::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: u32,
    pub name: String,
    pub time: String,
    pub teacher: String,
    pub room: String,
    pub attendance: Attendance,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub total: u32,
    pub attended: u32,
    pub color: String,
}

impl Subject {
    /// Clamps `attended` to `total`.
    pub fn new(
        name: impl Into<String>,
        total: u32,
        attended: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            total,
            attended: attended.min(total),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLecture {
    pub name: String,
    pub time: String,
    pub teacher: String,
    pub room: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    pub date: String,
    pub lectures: Vec<ScheduleLecture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSlot {
    pub name: String,
    pub time: String,
    pub attendance: Attendance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOverviewDay {
    pub day: String,
    pub date: String,
    pub lectures: Vec<WeekSlot>,
}

/// A schedule response after per-item validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePayload {
    pub schedule: Option<Vec<ScheduleDay>>,
    pub groups: Option<Vec<String>>,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
    pub total_lectures: u32,
    pub attended_lectures: u32,
    pub upcoming_lectures: u32,
    pub attendance_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub name: String,
    pub total: u32,
    pub attended: u32,
    pub color: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub best_subject: String,
    pub best_percentage: u32,
    pub total_attended: u32,
    pub total_scheduled: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub today: TodayStats,
    pub subjects: Vec<SubjectStats>,
    pub summary: Option<SubjectSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    pub date: String,
    pub loading: bool,
    pub selected_group: String,
    pub groups: Vec<String>,
    pub period: Option<String>,
    pub lectures: Vec<Lecture>,
    pub schedule: Vec<ScheduleDay>,
    /// Demo week, present only while no schedule has been fetched.
    pub week_overview: Option<Vec<WeekOverviewDay>>,
    pub stats: StatsResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub lecture: Option<Lecture>,
    pub stats: TodayStats,
}

#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    pub group: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupResponse {
    pub selected_group: String,
    pub loading: bool,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub group: Option<String>,
}
