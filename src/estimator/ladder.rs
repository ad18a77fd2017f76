// src/estimator/ladder.rs
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_MONTH: f64 = 30.4375;
const DAYS_PER_YEAR: f64 = 365.25;

/// Rungs of the unit ladder, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeTier {
    Instant,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    ThousandYears,
    MillionYears,
    BillionYears,
    Eons,
}

/// Render a crack time in the largest unit that keeps the figure readable.
///
/// Non-finite input lands on the last rung.
pub fn describe_seconds(seconds: f64) -> (TimeTier, String) {
    if seconds < 0.000_001 {
        return (TimeTier::Instant, "Instantly (extremely weak)".to_string());
    }
    if seconds < 0.001 {
        return (TimeTier::Microseconds, format!("{:.0} microseconds", seconds * 1_000_000.0));
    }
    if seconds < 1.0 {
        return (TimeTier::Milliseconds, format!("{:.0} milliseconds", seconds * 1000.0));
    }
    if seconds < SECONDS_PER_MINUTE {
        return (TimeTier::Seconds, format!("{:.1} seconds", seconds));
    }

    let minutes = seconds / SECONDS_PER_MINUTE;
    if minutes < MINUTES_PER_HOUR {
        return (TimeTier::Minutes, format!("{:.1} minutes", minutes));
    }

    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return (TimeTier::Hours, format!("{:.1} hours", hours));
    }

    let days = hours / HOURS_PER_DAY;
    if days < 30.0 {
        return (TimeTier::Days, format!("{:.1} days", days));
    }

    let months = days / DAYS_PER_MONTH;
    if months < 12.0 {
        return (TimeTier::Months, format!("{:.1} months", months));
    }

    let years = days / DAYS_PER_YEAR;
    if years < 1000.0 {
        return (TimeTier::Years, format!("{:.1} years", years));
    }
    if years < 1e6 {
        return (TimeTier::ThousandYears, format!("{:.1} thousand years", years / 1000.0));
    }
    if years < 1e9 {
        return (TimeTier::MillionYears, format!("{:.1} million years", years / 1e6));
    }
    if years < 1e12 {
        return (TimeTier::BillionYears, format!("{:.1} billion years", years / 1e9));
    }

    (TimeTier::Eons, "Countless eons (extremely strong)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

    fn label(seconds: f64) -> String {
        describe_seconds(seconds).1
    }

    #[test]
    fn sub_second_rungs() {
        assert_eq!(label(0.0), "Instantly (extremely weak)");
        assert_eq!(label(5e-7), "Instantly (extremely weak)");
        assert_eq!(label(0.0005), "500 microseconds");
        assert_eq!(label(0.25), "250 milliseconds");
    }

    #[test]
    fn clock_rungs() {
        assert_eq!(label(45.0), "45.0 seconds");
        assert_eq!(label(90.0), "1.5 minutes");
        assert_eq!(label(5.0 * 3600.0), "5.0 hours");
        assert_eq!(label(3.0 * 86_400.0), "3.0 days");
        assert_eq!(label(60.0 * 86_400.0), "2.0 months");
    }

    #[test]
    fn year_rungs() {
        assert_eq!(label(10.0 * YEAR), "10.0 years");
        assert_eq!(label(5_000.0 * YEAR), "5.0 thousand years");
        assert_eq!(label(2e6 * YEAR), "2.0 million years");
        assert_eq!(label(3e9 * YEAR), "3.0 billion years");
        assert_eq!(label(2e12 * YEAR), "Countless eons (extremely strong)");
    }

    #[test]
    fn infinity_is_eons() {
        assert_eq!(describe_seconds(f64::INFINITY).0, TimeTier::Eons);
    }

    #[test]
    fn thirty_days_moves_to_months() {
        let (tier, text) = describe_seconds(30.0 * 86_400.0);
        assert_eq!(tier, TimeTier::Months);
        assert_eq!(text, "1.0 months");
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(TimeTier::Instant < TimeTier::Microseconds);
        assert!(TimeTier::Years < TimeTier::ThousandYears);
        assert!(TimeTier::BillionYears < TimeTier::Eons);
    }
}
