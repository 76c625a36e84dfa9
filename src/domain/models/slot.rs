use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Timelike, Utc, Weekday};
use sqlx::FromRow;

const MINUTES_PER_DAY: i64 = 1440;

/// Active time range of a slot, anchored to the day under evaluation.
/// An overnight interval logically ends on the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub overnight: bool,
}

impl TimeInterval {
    pub fn new(start: NaiveTime, end: NaiveTime, overnight: bool) -> Self {
        Self { start, end, overnight }
    }

    fn start_minute(&self) -> i64 {
        (self.start.hour() * 60 + self.start.minute()) as i64
    }

    fn end_minute(&self) -> i64 {
        let end = (self.end.hour() * 60 + self.end.minute()) as i64;
        if self.overnight { end + MINUTES_PER_DAY } else { end }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_minute() - self.start_minute()
    }

    /// Half-open overlap test on minute offsets from day start.
    /// Touching intervals do not overlap; a zero-duration interval
    /// overlaps nothing, itself included.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        if self.duration_minutes() <= 0 || other.duration_minutes() <= 0 {
            return false;
        }
        self.start_minute() < other.end_minute() && other.start_minute() < self.end_minute()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    DayUse,
    Overnight,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::DayUse => "day_use",
            BookingType::Overnight => "overnight",
        }
    }

    pub fn parse(value: &str) -> Option<BookingType> {
        match value {
            "day_use" => Some(BookingType::DayUse),
            "overnight" => Some(BookingType::Overnight),
            _ => None,
        }
    }
}

pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parses a JSON array of lowercase weekday names. Unknown names and
/// malformed JSON degrade to an empty set.
pub fn parse_day_names(json: &str) -> Vec<Weekday> {
    let names: Vec<String> = serde_json::from_str(json).unwrap_or_default();
    names.iter().filter_map(|n| weekday_from_name(n)).collect()
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Slot {
    pub id: String,
    pub chalet_id: String,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_overnight: bool,
    pub duration_hours: i32,
    pub weekday_price: i64,
    pub weekend_price: i64,
    pub allows_extra_hours: bool,
    pub extra_hour_price: i64,
    pub max_extra_hours: i32,
    pub available_days: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time, self.is_overnight)
    }

    pub fn booking_type(&self) -> BookingType {
        if self.is_overnight { BookingType::Overnight } else { BookingType::DayUse }
    }

    pub fn is_bookable_on(&self, weekday: Weekday) -> bool {
        parse_day_names(&self.available_days).contains(&weekday)
    }
}
