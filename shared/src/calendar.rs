//! Calendar status banner
//!
//! The banner is shown under the greeting menu. It is the only part of the
//! engine that depends on the current time, which it reads through a
//! [`Clock`] so tests can pin the moment.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Timelike, Utc, Weekday};

/// Indian Standard Time, UTC+05:30
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// IST offset
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Dates that get their own greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    NewYear,
    Valentines,
    AprilFools,
    Thanksgiving,
    Christmas,
}

impl Occasion {
    /// Occasion falling on a date, if any
    pub fn on(date: NaiveDate) -> Option<Self> {
        match (date.month(), date.day()) {
            (1, 1) => Some(Occasion::NewYear),
            (2, 14) => Some(Occasion::Valentines),
            (4, 1) => Some(Occasion::AprilFools),
            (12, 25) => Some(Occasion::Christmas),
            _ if Some(date) == thanksgiving(date.year()) => Some(Occasion::Thanksgiving),
            _ => None,
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Occasion::NewYear => "🎉 Happy New Year! Fresh year, fresh goals. Let's make every rep count.",
            Occasion::Valentines => "💝 Happy Valentine's Day! Show your heart some love with a little cardio.",
            Occasion::AprilFools => "🃏 Happy April Fools' Day! No joke: consistency beats intensity.",
            Occasion::Thanksgiving => {
                "🦃 Happy Thanksgiving! Grateful for every step you take toward better health."
            }
            Occasion::Christmas => "🎄 Merry Christmas! The best gift you can give yourself is a healthy body.",
        }
    }
}

/// U.S. Thanksgiving: fourth Thursday of November
pub fn thanksgiving(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Thu, 4)
}

/// Calendar quarter, 1 to 4
pub fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

fn is_exactly(now: &DateTime<FixedOffset>, hour: u32) -> bool {
    now.hour() == hour && now.minute() == 0 && now.second() == 0
}

/// Short messages for the time windows the moment falls in
pub fn micro_messages(now: &DateTime<FixedOffset>) -> Vec<&'static str> {
    let mut messages = Vec::new();
    if now.month() == 12 && now.day() >= 21 {
        messages.push("⏳ The year is almost over. Finish it stronger than you started!");
    }
    if is_exactly(now, 6) {
        messages.push("🌅 Good morning! Rise, hydrate, and move.");
    }
    if is_exactly(now, 12) || is_exactly(now, 18) {
        messages.push("💧 Hydration check: time for a glass of water.");
    }
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        messages.push("🛋️ It's the weekend. Active recovery counts too!");
    }
    messages
}

/// Status banner for a moment in local time
pub fn status_message_at(now: DateTime<FixedOffset>) -> String {
    let mut lines = vec![
        format!("🕒 {} IST · {}", now.format("%I:%M %p"), now.format("%A, %d %B %Y")),
        format!(
            "📅 Week {} · Q{} · Day {} of {}",
            now.iso_week().week(),
            quarter(now.month()),
            now.ordinal(),
            days_in_year(now.year())
        ),
    ];
    if let Some(occasion) = Occasion::on(now.date_naive()) {
        lines.push(occasion.greeting().to_string());
    }
    lines.extend(micro_messages(&now).into_iter().map(str::to_string));
    lines.join("\n")
}

/// Status banner for the clock's current moment in IST
pub fn generate_status_message(clock: &dyn Clock) -> String {
    status_message_at(clock.now().with_timezone(&ist()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rstest::rstest;

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn test_christmas_sunrise_banner() {
        // 00:30 UTC is 06:00 IST
        let banner = generate_status_message(&clock_at(2024, 12, 25, 0, 30, 0));
        assert_eq!(
            banner,
            "🕒 06:00 AM IST · Wednesday, 25 December 2024\n\
             📅 Week 52 · Q4 · Day 360 of 366\n\
             🎄 Merry Christmas! The best gift you can give yourself is a healthy body.\n\
             ⏳ The year is almost over. Finish it stronger than you started!\n\
             🌅 Good morning! Rise, hydrate, and move."
        );
    }

    #[test]
    fn test_new_year_follows_ist_not_utc() {
        // Still 31 December in UTC
        let banner = generate_status_message(&clock_at(2024, 12, 31, 20, 0, 0));
        assert!(banner.starts_with("🕒 01:30 AM IST · Wednesday, 01 January 2025"));
        assert!(banner.contains("📅 Week 1 · Q1 · Day 1 of 365"));
        assert!(banner.contains(Occasion::NewYear.greeting()));
        assert!(!banner.contains("The year is almost over"));
    }

    #[test]
    fn test_thanksgiving_at_noon() {
        // 06:30 UTC is 12:00 IST
        let banner = generate_status_message(&clock_at(2024, 11, 28, 6, 30, 0));
        assert!(banner.contains(Occasion::Thanksgiving.greeting()));
        assert!(banner.contains("Hydration check"));
    }

    #[test]
    fn test_evening_hydration_only_on_the_exact_second() {
        let exact = generate_status_message(&clock_at(2024, 3, 5, 12, 30, 0));
        let late = generate_status_message(&clock_at(2024, 3, 5, 12, 30, 1));
        assert!(exact.contains("Hydration check"));
        assert!(!late.contains("Hydration check"));
    }

    #[test]
    fn test_plain_weekday_has_two_lines() {
        let banner = generate_status_message(&clock_at(2024, 3, 5, 4, 0, 0));
        assert_eq!(banner.lines().count(), 2);
    }

    #[test]
    fn test_weekend_message() {
        let banner = generate_status_message(&clock_at(2024, 6, 15, 4, 30, 0));
        assert!(banner.contains("Saturday"));
        assert!(banner.contains("Q2"));
        assert!(banner.ends_with("🛋️ It's the weekend. Active recovery counts too!"));
    }

    #[rstest]
    #[case(2024, 28)]
    #[case(2025, 27)]
    #[case(2026, 26)]
    fn test_thanksgiving_dates(#[case] year: i32, #[case] day: u32) {
        assert_eq!(thanksgiving(year), NaiveDate::from_ymd_opt(year, 11, day));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(9, 3)]
    #[case(12, 4)]
    fn test_quarter(#[case] month: u32, #[case] expected: u32) {
        assert_eq!(quarter(month), expected);
    }

    proptest! {
        #[test]
        fn prop_banner_header_is_well_formed(secs in 0i64..4_102_444_800) {
            let now = DateTime::from_timestamp(secs, 0).unwrap();
            let banner = generate_status_message(&FixedClock(now));
            let local = now.with_timezone(&ist());
            let lines: Vec<_> = banner.lines().collect();
            prop_assert!(lines.len() >= 2);
            prop_assert!(lines[0].starts_with("🕒 "));
            let quarter_label = format!("Q{}", quarter(local.month()));
            prop_assert!(lines[1].contains(&quarter_label));
            prop_assert!(local.ordinal() <= days_in_year(local.year()));
        }
    }
}
