//! Weekly Schedule Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Day of the week (wire format: lowercase names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in calendar order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Opening hours for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Closed the whole day; open/close are ignored when set
    #[serde(default)]
    pub closed: bool,
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
}

impl DaySchedule {
    /// A day marked fully closed
    pub fn closed() -> Self {
        Self {
            closed: true,
            open: None,
            close: None,
        }
    }

    /// A day open between the given times
    pub fn open(open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            closed: false,
            open: Some(open),
            close: Some(close),
        }
    }
}

/// Weekly schedule for one branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub branch_id: Uuid,
    /// Days absent from the map render as unset in the editor
    #[serde(default)]
    pub days: std::collections::HashMap<Weekday, DaySchedule>,
}

/// Replace-schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub days: std::collections::HashMap<Weekday, DaySchedule>,
}
