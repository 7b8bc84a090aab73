//! Date grouping and ordering of an event's contributions

use chrono::NaiveDate;
use event_model::{Contribution, Event};
use std::collections::BTreeMap;

/// Contributions starting on one calendar date, ordered by start time.
#[derive(Debug)]
pub struct DaySchedule<'a> {
    pub date: NaiveDate,
    pub contributions: Vec<&'a Contribution>,
}

impl DaySchedule<'_> {
    /// Start of the earliest contribution in this group
    pub fn earliest_start(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.contributions.iter().filter_map(|c| c.start_dt).next()
    }
}

/// The event's contributions partitioned for rendering: date groups in
/// ascending date order, plus the unscheduled remainder sorted by title.
#[derive(Debug)]
pub struct Timetable<'a> {
    pub days: Vec<DaySchedule<'a>>,
    pub unscheduled: Vec<&'a Contribution>,
}

impl Timetable<'_> {
    /// Number of distinct dates with scheduled contributions
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

/// Partition an event's non-deleted contributions into date groups and an
/// unscheduled remainder.
///
/// Date groups come out in ascending date order; within a group
/// contributions are ordered by full start timestamp (the sort is stable,
/// so equal timestamps keep their host order). Unscheduled contributions
/// are ordered by title, case-insensitive; a missing title sorts as the
/// empty string.
pub fn build_timetable(event: &Event) -> Timetable<'_> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Contribution>> = BTreeMap::new();
    let mut unscheduled: Vec<&Contribution> = Vec::new();

    for contribution in event.live_contributions() {
        match contribution.start_dt {
            Some(start) => by_date
                .entry(start.date_naive())
                .or_default()
                .push(contribution),
            None => unscheduled.push(contribution),
        }
    }

    let days = by_date
        .into_iter()
        .map(|(date, mut contributions)| {
            contributions.sort_by_key(|c| c.start_dt);
            DaySchedule {
                date,
                contributions,
            }
        })
        .collect();

    unscheduled.sort_by_key(|c| c.title.as_deref().unwrap_or("").to_lowercase());

    Timetable { days, unscheduled }
}
