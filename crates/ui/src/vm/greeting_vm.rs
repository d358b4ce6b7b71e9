use services::VisitGreeting;

use crate::vm::time_fmt::format_time_away;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreetingVm {
    pub headline: String,
    pub detail: Option<String>,
}

/// Greeting for returning visitors; first-time visitors get none.
#[must_use]
pub fn map_greeting(greeting: &VisitGreeting) -> Option<GreetingVm> {
    if !greeting.returning {
        return None;
    }
    let detail = format_time_away(greeting.since_last_visit)
        .map(|away| format!("It's been {away} since your last visit."));
    Some(GreetingVm {
        headline: "Welcome back!".to_string(),
        detail,
    })
}
