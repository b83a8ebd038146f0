use crate::attendance::{find_day, lectures_for_day, toggle_attendance};
use crate::config::{Config, TodaySelector, TODAY_DATE_LABEL};
use crate::demo;
use crate::errors::{ScheduleError, UnknownGroup};
use crate::models::{
    Lecture, ScheduleDay, SchedulePayload, StatsResponse, Subject, TodayStats, ViewResponse,
    WeekOverviewDay,
};
use crate::stats::{build_subject_stats, build_subject_summary, build_today_stats, StatsDefaults};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub today: TodaySelector,
    pub preset_attended: usize,
    pub stats: StatsDefaults,
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            today: config.today.clone(),
            preset_attended: config.preset_attended,
            stats: config.stats,
        }
    }
}

/// Identifies one schedule request. Only the latest issued ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    group: String,
}

impl FetchTicket {
    pub fn group(&self) -> &str {
        &self.group
    }
}

/// State behind the attendance page. Lectures change only through [`AttendanceView::toggle`]
/// and through a completed fetch.
#[derive(Debug)]
pub struct AttendanceView {
    settings: ViewSettings,
    lectures: Vec<Lecture>,
    schedule: Vec<ScheduleDay>,
    groups: Vec<String>,
    selected_group: String,
    period: Option<String>,
    subjects: Vec<Subject>,
    week_overview: Vec<WeekOverviewDay>,
    loading: bool,
    generation: u64,
}

impl AttendanceView {
    pub fn new(settings: ViewSettings, selected_group: impl Into<String>) -> Self {
        Self {
            settings,
            lectures: Vec::new(),
            schedule: Vec::new(),
            groups: demo::default_groups(),
            selected_group: selected_group.into(),
            period: None,
            subjects: demo::default_subjects(),
            week_overview: demo::default_week(),
            loading: true,
            generation: 0,
        }
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn schedule(&self) -> &[ScheduleDay] {
        &self.schedule
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn selected_group(&self) -> &str {
        &self.selected_group
    }

    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn toggle(&mut self, id: u32) -> Option<&Lecture> {
        self.lectures = toggle_attendance(&self.lectures, id);
        self.lectures.iter().find(|lecture| lecture.id == id)
    }

    /// Changes the selected group. Returns a ticket when a new fetch must be issued.
    pub fn select_group(&mut self, group: &str) -> Result<Option<FetchTicket>, UnknownGroup> {
        if !self.groups.iter().any(|known| known == group) {
            return Err(UnknownGroup(group.to_string()));
        }
        if self.selected_group == group {
            return Ok(None);
        }

        self.selected_group = group.to_string();
        Ok(Some(self.begin_fetch()))
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            group: self.selected_group.clone(),
        }
    }

    /// Merges a fetch result. Returns false when the ticket was superseded.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<SchedulePayload, ScheduleError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "discarding superseded schedule response"
            );
            return false;
        }

        match result {
            Ok(payload) => self.apply_payload(payload),
            Err(err) => error!("failed to load schedule: {err}"),
        }

        self.loading = false;
        true
    }

    fn apply_payload(&mut self, payload: SchedulePayload) {
        if let Some(schedule) = payload.schedule {
            let label = self.settings.today.label();
            self.lectures = match find_day(&schedule, &label) {
                Some(day) => {
                    let fresh =
                        lectures_for_day(day, self.settings.preset_attended, TODAY_DATE_LABEL);
                    self.carry_over_attendance(fresh)
                }
                None => Vec::new(),
            };
            info!(
                days = schedule.len(),
                today = %label,
                lectures = self.lectures.len(),
                "schedule loaded"
            );
            self.schedule = schedule;
        }

        if let Some(groups) = payload.groups {
            self.groups = groups;
        }
        if payload.period.is_some() {
            self.period = payload.period;
        }
    }

    /// Lectures that survive a rebuild keep the attendance they already had.
    fn carry_over_attendance(&self, fresh: Vec<Lecture>) -> Vec<Lecture> {
        fresh
            .into_iter()
            .map(|lecture| {
                match self
                    .lectures
                    .iter()
                    .find(|seen| same_lecture(seen, &lecture))
                {
                    Some(seen) => Lecture {
                        attendance: seen.attendance,
                        ..lecture
                    },
                    None => lecture,
                }
            })
            .collect()
    }

    pub fn today_stats(&self) -> TodayStats {
        build_today_stats(&self.lectures, &self.settings.stats)
    }

    pub fn stats(&self) -> StatsResponse {
        StatsResponse {
            today: self.today_stats(),
            subjects: build_subject_stats(&self.subjects),
            summary: build_subject_summary(&self.subjects),
        }
    }

    pub fn snapshot(&self, date: String) -> ViewResponse {
        ViewResponse {
            date,
            loading: self.loading,
            selected_group: self.selected_group.clone(),
            groups: self.groups.clone(),
            period: self.period.clone(),
            lectures: self.lectures.clone(),
            schedule: self.schedule.clone(),
            week_overview: self.schedule.is_empty().then(|| self.week_overview.clone()),
            stats: self.stats(),
        }
    }
}

fn same_lecture(a: &Lecture, b: &Lecture) -> bool {
    a.id == b.id && a.name == b.name && a.time == b.time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendance, ScheduleLecture};

    fn settings() -> ViewSettings {
        ViewSettings {
            today: TodaySelector::Fixed("Понедельник".to_string()),
            preset_attended: 2,
            stats: StatsDefaults::default(),
        }
    }

    fn slot(name: &str, time: &str) -> ScheduleLecture {
        ScheduleLecture {
            name: name.to_string(),
            time: time.to_string(),
            teacher: "Иванов И.И.".to_string(),
            room: "1к. 201".to_string(),
            group: "1 ТС-1".to_string(),
        }
    }

    fn payload(monday: Vec<ScheduleLecture>, groups: Option<Vec<&str>>) -> SchedulePayload {
        SchedulePayload {
            schedule: Some(vec![
                ScheduleDay {
                    day: "Понедельник".to_string(),
                    date: "10.11".to_string(),
                    lectures: monday,
                },
                ScheduleDay {
                    day: "Вторник".to_string(),
                    date: "11.11".to_string(),
                    lectures: vec![slot("Физика", "8:00")],
                },
            ]),
            groups: groups.map(|g| g.into_iter().map(str::to_string).collect()),
            period: Some("с 10.11.2025 по 16.11.2025".to_string()),
        }
    }

    fn three_slots() -> Vec<ScheduleLecture> {
        vec![
            slot("Классный час", "8:00"),
            slot("Математика", "9:30"),
            slot("Информатика", "11:00"),
        ]
    }

    fn statuses(view: &AttendanceView) -> Vec<Attendance> {
        view.lectures().iter().map(|l| l.attendance).collect()
    }

    #[test]
    fn successful_fetch_builds_today() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        assert!(view.complete_fetch(&ticket, Ok(payload(three_slots(), None))));

        assert!(!view.is_loading());
        let ids: Vec<u32> = view.lectures().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            statuses(&view),
            vec![Attendance::Attended, Attendance::Attended, Attendance::Pending]
        );
        assert_eq!(view.schedule().len(), 2);
        assert_eq!(view.groups().len(), 9);
        assert_eq!(view.period(), Some("с 10.11.2025 по 16.11.2025"));
    }

    #[test]
    fn failed_fetch_keeps_defaults() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        assert!(view.is_loading());
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Err(ScheduleError::Status(502)));

        assert!(!view.is_loading());
        assert!(view.lectures().is_empty());
        assert!(view.schedule().is_empty());
        assert_eq!(view.groups(), demo::default_groups().as_slice());
        let snapshot = view.snapshot("2026-10-19".to_string());
        assert_eq!(snapshot.week_overview.map(|w| w.len()), Some(5));
        assert_eq!(snapshot.stats.today.total_lectures, 4);
    }

    #[test]
    fn fetched_groups_replace_defaults() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), Some(vec!["1 ТС-1", "9 ТС-9"]))));
        assert_eq!(view.groups(), ["1 ТС-1".to_string(), "9 ТС-9".to_string()]);
        assert!(view.snapshot(String::new()).week_overview.is_none());
    }

    #[test]
    fn toggle_goes_through_the_view() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));

        let toggled = view.toggle(3).cloned().unwrap();
        assert_eq!(toggled.attendance, Attendance::Attended);
        assert_eq!(view.today_stats().attended_lectures, 3);
        assert_eq!(view.today_stats().attendance_rate, 100);

        assert!(view.toggle(99).is_none());
        assert_eq!(view.lectures().len(), 3);
    }

    #[test]
    fn toggle_during_refetch_survives_completion() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));

        let ticket = view.begin_fetch();
        view.toggle(1);
        view.toggle(3);
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));

        assert_eq!(
            statuses(&view),
            vec![Attendance::Missed, Attendance::Attended, Attendance::Attended]
        );

        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));
        assert_eq!(
            statuses(&view),
            vec![Attendance::Missed, Attendance::Attended, Attendance::Attended]
        );
    }

    #[test]
    fn toggle_before_group_change_survives_refetch() {
        let mut view = AttendanceView::new(
            ViewSettings {
                preset_attended: 1,
                ..settings()
            },
            "1 ТС-1",
        );
        let ticket = view.begin_fetch();
        let monday = vec![slot("Классный час", "8:00"), slot("Математика", "9:30")];
        view.complete_fetch(&ticket, Ok(payload(monday.clone(), None)));
        assert!(!view.is_loading());

        view.toggle(2);
        assert_eq!(statuses(&view), vec![Attendance::Attended, Attendance::Attended]);

        let ticket = view.select_group("2 ТС-1").unwrap().expect("refetch");
        view.complete_fetch(&ticket, Ok(payload(monday, None)));
        assert_eq!(statuses(&view), vec![Attendance::Attended, Attendance::Attended]);
    }

    #[test]
    fn payload_without_schedule_keeps_today() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));
        view.toggle(3);
        let lectures = view.lectures().to_vec();
        let schedule = view.schedule().to_vec();

        let ticket = view.begin_fetch();
        let groups_only = SchedulePayload {
            schedule: None,
            groups: Some(vec!["5 ТС-1".to_string()]),
            period: None,
        };
        assert!(view.complete_fetch(&ticket, Ok(groups_only)));

        assert!(!view.is_loading());
        assert_eq!(view.lectures(), lectures.as_slice());
        assert_eq!(view.schedule(), schedule.as_slice());
        assert_eq!(view.groups(), ["5 ТС-1".to_string()]);
        assert!(view.snapshot(String::new()).week_overview.is_none());
    }

    #[test]
    fn toggles_do_not_carry_over_to_different_lectures() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));

        let ticket = view.begin_fetch();
        view.toggle(3);
        let other = vec![slot("Химия", "8:00"), slot("Физика", "9:30"), slot("Химия", "14:45")];
        view.complete_fetch(&ticket, Ok(payload(other, None)));
        assert_eq!(view.lectures()[2].attendance, Attendance::Pending);
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let stale = view.begin_fetch();
        let latest = view.select_group("2 ТС-1").unwrap().expect("refetch");
        assert_eq!(latest.group(), "2 ТС-1");

        assert!(view.complete_fetch(&latest, Ok(payload(vec![slot("Физика", "8:00")], None))));
        assert!(!view.complete_fetch(&stale, Ok(payload(three_slots(), None))));
        assert_eq!(view.lectures().len(), 1);
        assert!(!view.is_loading());
    }

    #[test]
    fn select_group_validates_and_skips_same_group() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        assert_eq!(view.select_group("1 ТС-1"), Ok(None));
        assert_eq!(
            view.select_group("nope"),
            Err(UnknownGroup("nope".to_string()))
        );
        assert_eq!(view.selected_group(), "1 ТС-1");
        assert!(view.select_group("3 ТС-3").unwrap().is_some());
        assert_eq!(view.selected_group(), "3 ТС-3");
    }

    #[test]
    fn schedule_without_today_clears_lectures() {
        let mut view = AttendanceView::new(settings(), "1 ТС-1");
        let ticket = view.begin_fetch();
        view.complete_fetch(&ticket, Ok(payload(three_slots(), None)));

        let ticket = view.begin_fetch();
        let tuesday_only = SchedulePayload {
            schedule: Some(vec![ScheduleDay {
                day: "Вторник".to_string(),
                date: "11.11".to_string(),
                lectures: vec![slot("Физика", "8:00")],
            }]),
            groups: None,
            period: None,
        };
        view.complete_fetch(&ticket, Ok(tuesday_only));
        assert!(view.lectures().is_empty());
        assert_eq!(view.period(), Some("с 10.11.2025 по 16.11.2025"));
    }
}
