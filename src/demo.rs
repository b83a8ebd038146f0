//! Built-in data shown before (or instead of) a fetched schedule.

use crate::models::{Attendance, Subject, WeekOverviewDay, WeekSlot};

pub const DEFAULT_GROUPS: [&str; 9] = [
    "1 ТС-1", "1 ТС-2", "2 ТС-1", "2 ТС-2", "3 ТС-1", "3 ТС-2", "3 ТС-3", "4 ТС-1", "4 ТС-2",
];

pub fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

pub fn default_subjects() -> Vec<Subject> {
    vec![
        Subject::new("Математический анализ", 24, 22, "primary"),
        Subject::new("Программирование", 20, 19, "secondary"),
        Subject::new("Физика", 22, 18, "accent"),
        Subject::new("Английский язык", 18, 17, "success"),
    ]
}

pub fn default_week() -> Vec<WeekOverviewDay> {
    use Attendance::{Attended, Missed, Pending};

    vec![
        day(
            "ПН",
            "11.11",
            &[
                ("Мат. анализ", "9:00", Attended),
                ("Физика", "10:45", Attended),
                ("Программ.", "13:00", Missed),
            ],
        ),
        day(
            "ВТ",
            "12.11",
            &[("Англ. язык", "9:00", Attended), ("Мат. анализ", "10:45", Attended)],
        ),
        day(
            "СР",
            "13.11",
            &[("Программ.", "9:00", Attended), ("Физика", "13:00", Attended)],
        ),
        day(
            "ЧТ",
            "14.11",
            &[("Мат. анализ", "9:00", Attended), ("Англ. язык", "14:45", Missed)],
        ),
        day(
            "ПТ",
            "15.11",
            &[
                ("Программ.", "9:00", Pending),
                ("Физика", "10:45", Pending),
                ("Англ. язык", "14:45", Pending),
            ],
        ),
    ]
}

fn day(label: &str, date: &str, slots: &[(&str, &str, Attendance)]) -> WeekOverviewDay {
    WeekOverviewDay {
        day: label.to_string(),
        date: date.to_string(),
        lectures: slots
            .iter()
            .map(|(name, time, attendance)| WeekSlot {
                name: name.to_string(),
                time: time.to_string(),
                attendance: *attendance,
            })
            .collect(),
    }
}
