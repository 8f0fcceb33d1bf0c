use crate::params::QueryParams;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Name split the way the name-based numerology endpoints expect it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    pub last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            middle: None,
            last: last.into(),
        }
    }

    pub fn middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }

    /// Split a full name on whitespace: first word, last word, and whatever
    /// lies between as the middle name. Needs at least two words.
    pub fn parse(full_name: &str) -> Option<Self> {
        let words: Vec<&str> = full_name.split_whitespace().collect();
        match words.as_slice() {
            [first, middle @ .., last] if !middle.is_empty() => {
                Some(PersonName::new(*first, *last).middle(middle.join(" ")))
            }
            [first, last] => Some(PersonName::new(*first, *last)),
            _ => None,
        }
    }

    /// The service rejects a missing middle name, so blank is sent as one space
    fn middle_param(&self) -> &str {
        match self.middle.as_deref() {
            Some(middle) if !middle.trim().is_empty() => middle,
            _ => " ",
        }
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("first_name", &self.first)
            .push("middle_name", self.middle_param())
            .push("last_name", &self.last);
        params
    }
}

/// Lucky days over a window of weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyDaysRequest {
    pub dob: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<u32>,
}

impl LuckyDaysRequest {
    pub fn new(dob: NaiveDate) -> Self {
        Self {
            dob,
            start_date: None,
            weeks: None,
        }
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn weeks(mut self, weeks: u32) -> Self {
        self.weeks = Some(weeks);
        self
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("dob", self.dob.format(DATE_FORMAT))
            .push_opt("start_date", self.start_date.map(|d| d.format(DATE_FORMAT)))
            .push_opt("weeks", self.weeks);
        params
    }
}

fn ymd_params(year: i32, month: u32, day: u32) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("year", year)
        .push("month", month)
        .push("day", day);
    params
}

fn birth_ymd_params(date: NaiveDate) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("birth_year", date.year())
        .push("birth_month", date.month())
        .push("birth_day", date.day());
    params
}

/// `/life_path` and `/karmic_debt`
pub fn date_params(date: NaiveDate) -> QueryParams {
    ymd_params(date.year(), date.month(), date.day())
}

/// Cheapest known-good request, used to check the key and the service
pub fn health_check_params() -> QueryParams {
    ymd_params(2000, 1, 1)
}

pub fn attitude_params(date: NaiveDate) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("birth_day", date.day())
        .push("birth_month", date.month());
    params
}

pub fn balance_params(initials: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("initials", initials);
    params
}

/// `/challenge_number` and `/period_cycles`
pub fn birth_date_params(date: NaiveDate) -> QueryParams {
    birth_ymd_params(date)
}

pub fn full_name_params(full_name: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("full_name", full_name);
    params
}

pub fn subconscious_params(name: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("name", name);
    params
}

pub fn thought_params(first_name: &str, birth_day: u32) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("first_name", first_name)
        .push("birth_day", birth_day);
    params
}

pub fn lucky_numbers_params(birthdate: NaiveDate, full_name: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("birthdate", birthdate.format(DATE_FORMAT))
        .push("full_name", full_name);
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 7, 16).unwrap()
    }

    #[test]
    fn test_person_name_params() {
        let name = PersonName::new("John", "Doe").middle("Paul");
        let params = name.query_params();
        assert_eq!(
            params.as_slice(),
            &[
                ("first_name", "John".to_string()),
                ("middle_name", "Paul".to_string()),
                ("last_name", "Doe".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_middle_name_sent_as_space() {
        let params = PersonName::new("John", "Doe").query_params();
        assert_eq!(params.get("middle_name"), Some(" "));

        let params = PersonName::new("John", "Doe").middle("   ").query_params();
        assert_eq!(params.get("middle_name"), Some(" "));
    }

    #[test]
    fn test_person_name_parse() {
        assert_eq!(
            PersonName::parse("John Ronald Reuel Tolkien"),
            Some(PersonName::new("John", "Tolkien").middle("Ronald Reuel"))
        );
        assert_eq!(
            PersonName::parse("  Jane   Doe "),
            Some(PersonName::new("Jane", "Doe"))
        );
        assert_eq!(PersonName::parse("Cher"), None);
        assert_eq!(PersonName::parse(""), None);
    }

    #[test]
    fn test_lucky_days_omits_absent_window() {
        let params = LuckyDaysRequest::new(dob()).query_params();
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["dob"]);
        assert_eq!(params.get("dob"), Some("1990-07-16"));
    }

    #[test]
    fn test_lucky_days_with_window() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let params = LuckyDaysRequest::new(dob())
            .start_date(start)
            .weeks(0)
            .query_params();
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["dob", "start_date", "weeks"]);
        assert_eq!(params.get("start_date"), Some("2026-10-19"));
        assert_eq!(params.get("weeks"), Some("0"));
    }

    #[test]
    fn test_date_shaped_params() {
        let params = date_params(dob());
        assert_eq!(params.get("year"), Some("1990"));
        assert_eq!(params.get("month"), Some("7"));
        assert_eq!(params.get("day"), Some("16"));

        let params = birth_date_params(dob());
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["birth_year", "birth_month", "birth_day"]);

        let params = attitude_params(dob());
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["birth_day", "birth_month"]);
        assert_eq!(params.get("birth_day"), Some("16"));
    }

    #[test]
    fn test_health_check_params() {
        let params = health_check_params();
        assert_eq!(params.get("year"), Some("2000"));
        assert_eq!(params.get("month"), Some("1"));
        assert_eq!(params.get("day"), Some("1"));
    }

    #[test]
    fn test_name_and_number_params() {
        assert_eq!(balance_params("JD").get("initials"), Some("JD"));
        let params = full_name_params("John Doe");
        assert_eq!(params.get("full_name"), Some("John Doe"));
        let params = subconscious_params("John Doe");
        assert_eq!(params.get("name"), Some("John Doe"));

        let params = thought_params("John", 16);
        assert_eq!(params.get("first_name"), Some("John"));
        assert_eq!(params.get("birth_day"), Some("16"));

        let params = lucky_numbers_params(dob(), "John Doe");
        assert_eq!(params.get("birthdate"), Some("1990-07-16"));
        assert_eq!(params.get("full_name"), Some("John Doe"));
    }
}
