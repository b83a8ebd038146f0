use crate::errors::ConfigError;
use crate::stats::StatsDefaults;
use chrono::{Datelike, Local, Weekday};
use std::{env, time::Duration};

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://functions.poehali.dev/ac1d7467-912b-476b-854b-2d20cbde054f";
pub const DEFAULT_TODAY_LABEL: &str = "Понедельник";
pub const DEFAULT_GROUP: &str = "1 ТС-1";
pub const TODAY_DATE_LABEL: &str = "Сегодня";

/// Which schedule day counts as "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodaySelector {
    Fixed(String),
    /// Follows the local calendar weekday.
    Weekday,
}

impl TodaySelector {
    pub fn label(&self) -> String {
        match self {
            TodaySelector::Fixed(label) => label.clone(),
            TodaySelector::Weekday => weekday_label(Local::now().weekday()).to_string(),
        }
    }
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Понедельник",
        Weekday::Tue => "Вторник",
        Weekday::Wed => "Среда",
        Weekday::Thu => "Четверг",
        Weekday::Fri => "Пятница",
        Weekday::Sat => "Суббота",
        Weekday::Sun => "Воскресенье",
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub schedule_url: String,
    pub schedule_timeout: Duration,
    pub today: TodaySelector,
    pub default_group: String,
    pub preset_attended: usize,
    pub stats: StatsDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            schedule_timeout: Duration::from_secs(10),
            today: TodaySelector::Fixed(DEFAULT_TODAY_LABEL.to_string()),
            default_group: DEFAULT_GROUP.to_string(),
            preset_attended: 2,
            stats: StatsDefaults::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let today = match lookup("TODAY_LABEL") {
            Some(value) if value.trim().eq_ignore_ascii_case("auto") => TodaySelector::Weekday,
            Some(value) => TodaySelector::Fixed(non_empty("TODAY_LABEL", value)?),
            None => defaults.today,
        };

        Ok(Self {
            port: number(&lookup, "PORT")?.unwrap_or(defaults.port),
            schedule_url: match lookup("SCHEDULE_URL") {
                Some(value) => non_empty("SCHEDULE_URL", value)?,
                None => defaults.schedule_url,
            },
            schedule_timeout: number::<u64>(&lookup, "SCHEDULE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.schedule_timeout),
            today,
            default_group: match lookup("DEFAULT_GROUP") {
                Some(value) => non_empty("DEFAULT_GROUP", value)?,
                None => defaults.default_group,
            },
            preset_attended: number(&lookup, "PRESET_ATTENDED_SLOTS")?
                .unwrap_or(defaults.preset_attended),
            stats: StatsDefaults {
                fallback_total: number(&lookup, "FALLBACK_TOTAL_LECTURES")?
                    .unwrap_or(defaults.stats.fallback_total),
                fallback_rate: number(&lookup, "FALLBACK_ATTENDANCE_RATE")?
                    .unwrap_or(defaults.stats.fallback_rate),
            },
        })
    }
}

fn number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { name });
    }
    Ok(trimmed.to_string())
}
