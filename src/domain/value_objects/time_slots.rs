use chrono::NaiveTime;

/// A booking time slot, stored in the database as `"HH:MM - HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Parses the denormalized slot string. Returns None for anything that
    /// does not split on `" - "` into two valid HH:MM times; the caller
    /// decides how to surface that (it is user-entered data we cannot fix).
    pub fn parse(raw: &str) -> Option<TimeSlot> {
        let (start_raw, end_raw) = raw.split_once(" - ")?;

        let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M").ok()?;

        Some(TimeSlot { start, end })
    }

    /// A slot is only bookable when it ends after it starts.
    pub fn is_ordered(&self) -> bool {
        self.end > self.start
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_slot() {
        let slot = TimeSlot::parse("09:00 - 10:00").unwrap();
        assert_eq!(slot.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slot.end, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert!(slot.is_ordered());
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(TimeSlot::parse("09:00-10:00"), None);
        assert_eq!(TimeSlot::parse("09:00"), None);
        assert_eq!(TimeSlot::parse(""), None);
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert_eq!(TimeSlot::parse("nine - ten"), None);
        assert_eq!(TimeSlot::parse("09:xx - 10:00"), None);
    }

    #[test]
    fn inverted_slot_parses_but_is_not_ordered() {
        let slot = TimeSlot::parse("14:00 - 13:00").unwrap();
        assert!(!slot.is_ordered());
    }

    #[test]
    fn round_trips_through_display() {
        let slot = TimeSlot::parse("09:30 - 18:45").unwrap();
        assert_eq!(slot.to_string(), "09:30 - 18:45");
    }
}
