use crate::models::{Attendance, Lecture, Subject, SubjectStats, SubjectSummary, TodayStats};

/// Values substituted when there is nothing to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDefaults {
    pub fallback_total: u32,
    pub fallback_rate: u32,
}

impl Default for StatsDefaults {
    fn default() -> Self {
        Self {
            fallback_total: 4,
            fallback_rate: 50,
        }
    }
}

pub fn build_today_stats(lectures: &[Lecture], defaults: &StatsDefaults) -> TodayStats {
    let total_lectures = if lectures.is_empty() {
        defaults.fallback_total
    } else {
        lectures.len() as u32
    };
    let attended_lectures = count_with(lectures, Attendance::Attended);
    let upcoming_lectures = count_with(lectures, Attendance::Pending);

    let attendance_rate = if total_lectures == 0 {
        defaults.fallback_rate
    } else {
        percent(attended_lectures, total_lectures)
    };

    TodayStats {
        total_lectures,
        attended_lectures,
        upcoming_lectures,
        attendance_rate,
    }
}

pub fn subject_percentage(subject: &Subject) -> u32 {
    if subject.total == 0 {
        return 0;
    }
    percent(subject.attended, subject.total)
}

pub fn build_subject_stats(subjects: &[Subject]) -> Vec<SubjectStats> {
    subjects
        .iter()
        .map(|subject| SubjectStats {
            name: subject.name.clone(),
            total: subject.total,
            attended: subject.attended,
            color: subject.color.clone(),
            percentage: subject_percentage(subject),
        })
        .collect()
}

/// Best subject by percentage (earliest wins ties) plus overall totals.
pub fn build_subject_summary(subjects: &[Subject]) -> Option<SubjectSummary> {
    let mut best: Option<(&Subject, u32)> = None;
    for subject in subjects {
        let percentage = subject_percentage(subject);
        if best.is_none_or(|(_, top)| percentage > top) {
            best = Some((subject, percentage));
        }
    }

    let (best_subject, best_percentage) = best?;
    let total_attended = subjects.iter().fold(0u32, |acc, s| acc.saturating_add(s.attended));
    let total_scheduled = subjects.iter().fold(0u32, |acc, s| acc.saturating_add(s.total));

    Some(SubjectSummary {
        best_subject: best_subject.name.clone(),
        best_percentage,
        total_attended,
        total_scheduled,
    })
}

fn count_with(lectures: &[Lecture], attendance: Attendance) -> u32 {
    lectures.iter().filter(|l| l.attendance == attendance).count() as u32
}

fn percent(part: u32, whole: u32) -> u32 {
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}
