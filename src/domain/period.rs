use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Reporting window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
    LastMonth,
    AllTime,
}

/// A resolved date range, inclusive on both ends, with a display label.
///
/// `start` of `None` means unbounded history.
#[derive(Debug, Clone)]
pub struct PeriodWindow {
    pub start: Option<NaiveDateTime>,
    pub end: NaiveDateTime,
    pub label: String,
}

impl Period {
    /// Parse a caller-supplied period name.
    ///
    /// An unknown name is an error, never a silent fallback to some default
    /// window.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "last_month" => Ok(Period::LastMonth),
            "all_time" => Ok(Period::AllTime),
            other => anyhow::bail!(
                "unknown period '{other}': expected weekly, monthly, last_month or all_time"
            ),
        }
    }

    /// Resolve the concrete window for this period as of `now`.
    pub fn window(&self, now: NaiveDateTime) -> PeriodWindow {
        match self {
            Period::Weekly => PeriodWindow {
                start: Some(monday_of(now.date()).and_time(NaiveTime::MIN)),
                end: now,
                label: "This Week's".to_string(),
            },
            Period::Monthly => PeriodWindow {
                start: Some(month_start(now.date()).and_time(NaiveTime::MIN)),
                end: now,
                label: "This Month's".to_string(),
            },
            Period::LastMonth => {
                // Last day of the previous month, then back to its 1st.
                let last_day = month_start(now.date()) - Duration::days(1);
                PeriodWindow {
                    start: Some(month_start(last_day).and_time(NaiveTime::MIN)),
                    end: end_of_day(last_day),
                    label: last_day.format("%B %Y").to_string(),
                }
            }
            Period::AllTime => PeriodWindow {
                start: None,
                end: now,
                label: "All-Time".to_string(),
            },
        }
    }
}

impl PeriodWindow {
    /// True when `date` falls inside the window.
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| date >= start) && date <= self.end
    }
}

/// Monday of the week containing `date`.
pub(crate) fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// First day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Last second of `date`, 23:59:59.
pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::seconds(1)
}
