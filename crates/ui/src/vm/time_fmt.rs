use journey_core::model::TimeSinceVisit;

/// Human wording for the time away, as used in the returning greeting.
#[must_use]
pub fn format_time_away(since: TimeSinceVisit) -> Option<String> {
    match since {
        TimeSinceVisit::Days(1) => Some("1 day".to_string()),
        TimeSinceVisit::Days(days) => Some(format!("{days} days")),
        TimeSinceVisit::Hours(0) => Some("less than an hour".to_string()),
        TimeSinceVisit::Hours(1) => Some("1 hour".to_string()),
        TimeSinceVisit::Hours(hours) => Some(format!("{hours} hours")),
        TimeSinceVisit::Unknown => None,
    }
}
