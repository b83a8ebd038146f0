use crate::models::{Attendance, Lecture, ScheduleDay};

/// Advances the attendance of the lecture with `id`. Unknown ids leave the list unchanged.
pub fn toggle_attendance(lectures: &[Lecture], id: u32) -> Vec<Lecture> {
    lectures
        .iter()
        .map(|lecture| {
            if lecture.id == id {
                Lecture {
                    attendance: lecture.attendance.next(),
                    ..lecture.clone()
                }
            } else {
                lecture.clone()
            }
        })
        .collect()
}

pub fn find_day<'a>(schedule: &'a [ScheduleDay], label: &str) -> Option<&'a ScheduleDay> {
    schedule.iter().find(|day| day.day == label)
}

/// Builds today's lectures from a schedule day. Ids start at 1; the first
/// `preset_attended` slots start out attended.
pub fn lectures_for_day(
    day: &ScheduleDay,
    preset_attended: usize,
    date_label: &str,
) -> Vec<Lecture> {
    day.lectures
        .iter()
        .enumerate()
        .map(|(index, slot)| Lecture {
            id: index as u32 + 1,
            name: slot.name.clone(),
            time: slot.time.clone(),
            teacher: slot.teacher.clone(),
            room: slot.room.clone(),
            attendance: if index < preset_attended {
                Attendance::Attended
            } else {
                Attendance::Pending
            },
            date: date_label.to_string(),
        })
        .collect()
}
