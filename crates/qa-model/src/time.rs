//! Relative age labels ("2 hours ago") derived from real timestamps.

use chrono::{DateTime, Utc};

/// Human label for how long before `now` the instant `then` was.
///
/// Instants in the future or less than a minute old read "Just now".
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }
    plural(days / 7, "week")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn labels_follow_units() {
        let now = now();
        assert_eq!(relative_age(now, now), "Just now");
        assert_eq!(relative_age(now + Duration::minutes(5), now), "Just now");
        assert_eq!(relative_age(now - Duration::minutes(30), now), "30 minutes ago");
        assert_eq!(relative_age(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(relative_age(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_age(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_age(now - Duration::days(15), now), "2 weeks ago");
    }
}
