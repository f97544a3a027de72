//! Professor availability resolution.
//!
//! A professor is available at a slot iff the token
//! `"{3-letter-day}-{time}"` is in their availability set. The day part is
//! the lowercase first three characters of the day string; the time part
//! is compared verbatim.
//!
//! # Totality
//! Every function here is total. Unknown days, empty strings and malformed
//! tokens all resolve to "not available" / `None`, never to an error.

use crate::models::{day_abbrev, Professor, Slot, Weekday};

/// Availability token helpers.
pub struct AvailabilityToken;

impl AvailabilityToken {
    /// Formats the token for a (day, time) pair.
    pub fn format(day: Weekday, time: &str) -> String {
        format!("{}-{}", day.abbrev(), time)
    }

    /// Splits a token into its weekday and time label.
    ///
    /// Returns `None` unless the day part is exactly a lowercase weekday
    /// abbreviation and the time part is non-empty.
    pub fn parse(token: &str) -> Option<(Weekday, &str)> {
        let (day, time) = token.split_once('-')?;
        if time.is_empty() {
            return None;
        }
        let weekday = Weekday::ALL.into_iter().find(|d| d.abbrev() == day)?;
        Some((weekday, time))
    }

    /// Whether a token is well-formed.
    pub fn is_valid(token: &str) -> bool {
        Self::parse(token).is_some()
    }
}

/// Whether a professor is available at (day, time).
///
/// `day` may be any day string; only its lowercase first three characters
/// are used. Token comparison is exact and case-sensitive.
pub fn is_available(professor: &Professor, day: &str, time: &str) -> bool {
    let token = format!("{}-{}", day_abbrev(day), time);
    professor.has_token(&token)
}

/// Typed variant of [`is_available`].
pub fn is_available_at(professor: &Professor, slot: &Slot) -> bool {
    professor.has_token(&AvailabilityToken::format(slot.day, &slot.time))
}

/// Distinct weekdays on which the professor has any availability, in
/// weekday order. Malformed tokens are skipped.
pub fn available_days(professor: &Professor) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = professor
        .availability
        .iter()
        .filter_map(|t| AvailabilityToken::parse(t).map(|(d, _)| d))
        .collect();
    days.sort();
    days.dedup();
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProfessor;

    fn ana() -> Professor {
        NewProfessor::new("Ana Souza", "ana@uel.br")
            .with_availabilities(["mon-19h00", "wed-20h45", "fri-19h00"])
            .into_professor(1)
    }

    #[test]
    fn test_is_available_exact_match() {
        let p = ana();
        assert!(is_available(&p, "Monday", "19h00"));
        assert!(is_available(&p, "Wednesday", "20h45"));
        assert!(!is_available(&p, "Tuesday", "19h00"));
        assert!(!is_available(&p, "Monday", "20h45"));
    }

    #[test]
    fn test_day_is_lowercased() {
        let p = ana();
        assert!(is_available(&p, "MONDAY", "19h00"));
        assert!(is_available(&p, "mon", "19h00"));
    }

    #[test]
    fn test_time_is_case_sensitive() {
        let p = NewProfessor::new("X", "x@uel.br")
            .with_availability("mon-19h00")
            .into_professor(1);
        assert!(!is_available(&p, "Monday", "19H00"));
    }

    #[test]
    fn test_malformed_input_is_unavailable() {
        let p = ana();
        assert!(!is_available(&p, "", "19h00"));
        assert!(!is_available(&p, "Sunday", "19h00"));
        assert!(!is_available(&p, "Monday", ""));
        assert!(!is_available(&p, "Mo", "19h00"));
    }

    #[test]
    fn test_typed_matches_string_variant() {
        let p = ana();
        for day in Weekday::ALL {
            for time in ["19h00", "20h30", "20h45"] {
                assert_eq!(
                    is_available_at(&p, &Slot::new(day, time)),
                    is_available(&p, day.name(), time),
                    "{day} {time}"
                );
            }
        }
    }

    #[test]
    fn test_token_parse() {
        assert_eq!(
            AvailabilityToken::parse("thu-20h45"),
            Some((Weekday::Thursday, "20h45"))
        );
        assert_eq!(AvailabilityToken::parse("Thu-20h45"), None);
        assert_eq!(AvailabilityToken::parse("sat-19h00"), None);
        assert_eq!(AvailabilityToken::parse("mon-"), None);
        assert_eq!(AvailabilityToken::parse("mon19h00"), None);
        assert!(AvailabilityToken::is_valid("tue-19h00"));
        assert_eq!(AvailabilityToken::format(Weekday::Tuesday, "19h00"), "tue-19h00");
    }

    #[test]
    fn test_available_days_ordered() {
        let p = NewProfessor::new("Beatriz Oliveira", "beatriz@uel.br")
            .with_availabilities(["thu-19h00", "mon-20h45", "wed-19h00", "mon-19h00", "bogus"])
            .into_professor(3);
        assert_eq!(
            available_days(&p),
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Thursday]
        );
    }
}
