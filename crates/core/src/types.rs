use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of values whose wire form is a fixed string.
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the wire
/// form is always emitted exactly as declared.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        Error::InvalidValue(format!(
                            "unknown {} '{}', expected one of: {}",
                            $what,
                            wanted,
                            expected.join(", ")
                        ))
                    })
            }
        }
    };
}

wire_enum! {
    /// Language of the labels drawn on an SVG chart
    Language, "language" {
        En => "EN",
        Fr => "FR",
        Pt => "PT",
        It => "IT",
        Cn => "CN",
        Es => "ES",
        Ru => "RU",
        Tr => "TR",
        De => "DE",
        Hi => "HI",
    }
}

wire_enum! {
    /// Color scheme of an SVG chart
    Theme, "theme" {
        Classic => "classic",
        Light => "light",
        Dark => "dark",
        DarkHighContrast => "dark-high-contrast",
    }
}

wire_enum! {
    /// Angular relationship between two planets
    Aspect, "aspect" {
        Conjunction => "conjunction",
        Opposite => "opposite",
        Square => "square",
        Trine => "trine",
        Sextile => "sextile",
    }
}

wire_enum! {
    /// One of the twelve astrological houses, named by ordinal
    House, "house" {
        First => "first",
        Second => "second",
        Third => "third",
        Fourth => "fourth",
        Fifth => "fifth",
        Sixth => "sixth",
        Seventh => "seventh",
        Eighth => "eighth",
        Ninth => "ninth",
        Tenth => "tenth",
        Eleventh => "eleventh",
        Twelfth => "twelfth",
    }
}

wire_enum! {
    /// Horoscope window
    Period, "period" {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Classic
    }
}

impl House {
    /// House for a 1-based position (1 = first, 12 = twelfth)
    pub fn from_number(number: u8) -> Option<House> {
        let index = usize::from(number).checked_sub(1)?;
        House::ALL.get(index).copied()
    }

    /// 1-based position of this house
    pub fn number(&self) -> u8 {
        // ALL has twelve entries, so the index always fits.
        House::ALL.iter().position(|h| h == self).map_or(0, |i| i as u8 + 1)
    }
}

/// Values used for birth chart fields the caller leaves unset.
///
/// Passed explicitly when a request is built; nothing reads these from
/// shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    pub hour: u32,
    pub minute: u32,
    pub tz: String,
    pub lang: Language,
    pub theme: Theme,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            tz: "UTC".to_string(),
            lang: Language::En,
            theme: Theme::Classic,
        }
    }
}

/// Birth details for a natal chart request
///
/// `None` means the parameter is not sent at all. A latitude of `Some(0.0)`
/// is a real coordinate and is always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChartRequest {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Starts as the default timezone; `None` leaves `tz` off the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

impl BirthChartRequest {
    /// Request with the standard defaults (noon, UTC)
    pub fn new(name: impl Into<String>, year: i32, month: u32, day: u32) -> Self {
        Self::with_defaults(name, year, month, day, &ChartDefaults::default())
    }

    pub fn with_defaults(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        defaults: &ChartDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            month,
            day,
            hour: defaults.hour,
            minute: defaults.minute,
            lat: None,
            lng: None,
            city: None,
            country: None,
            tz: Some(defaults.tz.clone()),
        }
    }

    /// Request for a calendar date, with the standard defaults
    pub fn from_date(name: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(name, date.year(), date.month(), date.day())
    }

    pub fn time(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    pub fn coordinates(self, lat: f64, lng: f64) -> Self {
        self.latitude(lat).longitude(lng)
    }

    pub fn latitude(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }

    pub fn longitude(mut self, lng: f64) -> Self {
        self.lng = Some(lng);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn place(self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city(city).country(country)
    }

    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    /// Send no `tz` parameter and let the service pick its own default
    pub fn without_timezone(mut self) -> Self {
        self.tz = None;
        self
    }
}

/// Birth chart request rendered as an SVG image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgChartRequest {
    pub chart: BirthChartRequest,
    pub lang: Language,
    pub theme: Theme,
}

impl SvgChartRequest {
    pub fn new(chart: BirthChartRequest) -> Self {
        Self::with_defaults(chart, &ChartDefaults::default())
    }

    pub fn with_defaults(chart: BirthChartRequest, defaults: &ChartDefaults) -> Self {
        Self {
            chart,
            lang: defaults.lang,
            theme: defaults.theme,
        }
    }

    pub fn lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" HI ".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!(Language::Cn.as_str(), "CN");
        assert_eq!(Language::ALL.len(), 10);
    }

    #[test]
    fn test_unknown_value_lists_choices() {
        let err = "sepia".parse::<Theme>().unwrap_err().to_string();
        assert!(err.contains("unknown theme 'sepia'"));
        assert!(err.contains("classic, light, dark, dark-high-contrast"));
    }

    #[test]
    fn test_theme_wire_form() {
        assert_eq!(Theme::DarkHighContrast.to_string(), "dark-high-contrast");
        assert_eq!(
            "Dark-High-Contrast".parse::<Theme>().unwrap(),
            Theme::DarkHighContrast
        );
    }

    #[test]
    fn test_aspect_values() {
        let names: Vec<&str> = Aspect::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(
            names,
            vec!["conjunction", "opposite", "square", "trine", "sextile"]
        );
        assert!("quincunx".parse::<Aspect>().is_err());
    }

    #[test]
    fn test_house_numbers() {
        assert_eq!(House::from_number(1), Some(House::First));
        assert_eq!(House::from_number(12), Some(House::Twelfth));
        assert_eq!(House::from_number(0), None);
        assert_eq!(House::from_number(13), None);
        assert_eq!(House::Seventh.number(), 7);
        for house in House::ALL {
            assert_eq!(House::from_number(house.number()), Some(*house));
        }
    }

    #[test]
    fn test_enum_serde_uses_wire_form() {
        assert_eq!(
            serde_json::to_string(&Theme::DarkHighContrast).unwrap(),
            "\"dark-high-contrast\""
        );
        let lang: Language = serde_json::from_str("\"FR\"").unwrap();
        assert_eq!(lang, Language::Fr);
    }

    #[test]
    fn test_chart_request_defaults() {
        let request = BirthChartRequest::new("John Doe", 1990, 7, 16);
        assert_eq!(request.hour, 12);
        assert_eq!(request.minute, 0);
        assert_eq!(request.tz.as_deref(), Some("UTC"));
        assert!(request.lat.is_none());
        assert!(request.city.is_none());
    }

    #[test]
    fn test_chart_request_custom_defaults() {
        let defaults = ChartDefaults {
            hour: 6,
            minute: 30,
            tz: "Asia/Kolkata".to_string(),
            lang: Language::Hi,
            theme: Theme::Dark,
        };
        let chart = BirthChartRequest::with_defaults("Asha", 1985, 1, 2, &defaults);
        assert_eq!((chart.hour, chart.minute), (6, 30));
        assert_eq!(chart.tz.as_deref(), Some("Asia/Kolkata"));

        let svg = SvgChartRequest::with_defaults(chart, &defaults);
        assert_eq!(svg.lang, Language::Hi);
        assert_eq!(svg.theme, Theme::Dark);
    }

    #[test]
    fn test_chart_request_from_date() {
        let date = NaiveDate::from_ymd_opt(1990, 7, 16).unwrap();
        let request = BirthChartRequest::from_date("John Doe", date).time(8, 45);
        assert_eq!((request.year, request.month, request.day), (1990, 7, 16));
        assert_eq!((request.hour, request.minute), (8, 45));
    }

    #[test]
    fn test_zero_coordinates_are_present() {
        let request = BirthChartRequest::new("Null Island", 2000, 1, 1).coordinates(0.0, 0.0);
        assert_eq!(request.lat, Some(0.0));
        assert_eq!(request.lng, Some(0.0));
    }
}
