use chrono::{Datelike, NaiveDate};
use clap::Args;
use starmap_core::{BirthChartRequest, ChartDefaults, House, PersonName};

/// Birth details shared by `chart` and `chart-svg`
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Person's name
    #[arg(long)]
    pub name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// Birth hour, 0-23 (default from config, else 12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,

    /// Birth minute, 0-59 (default from config, else 0)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=59))]
    pub minute: Option<u32>,

    /// Latitude of the birthplace
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the birthplace
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// City of birth
    #[arg(long)]
    pub city: Option<String>,

    /// Country code or name
    #[arg(long)]
    pub country: Option<String>,

    /// IANA timezone, e.g. Europe/Paris (default from config, else UTC)
    #[arg(long)]
    pub tz: Option<String>,

    /// Send no timezone and let the service decide
    #[arg(long, conflicts_with = "tz")]
    pub no_tz: bool,
}

impl ChartArgs {
    pub fn to_request(&self, defaults: &ChartDefaults) -> BirthChartRequest {
        let mut request = BirthChartRequest::with_defaults(
            self.name.clone(),
            self.date.year(),
            self.date.month(),
            self.date.day(),
            defaults,
        );

        if let Some(hour) = self.hour {
            request.hour = hour;
        }
        if let Some(minute) = self.minute {
            request.minute = minute;
        }
        if self.no_tz {
            request = request.without_timezone();
        } else if let Some(tz) = &self.tz {
            request = request.timezone(tz.clone());
        }
        request.lat = self.lat;
        request.lng = self.lng;
        request.city = self.city.clone();
        request.country = self.country.clone();
        request
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected a date as YYYY-MM-DD ({})", e))
}

/// Validate a date of birth, returning it in canonical YYYY-MM-DD form
pub fn parse_dob(s: &str) -> Result<String, String> {
    parse_date(s).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Split "First [Middle...] Last" into the parts the name endpoints take
pub fn parse_person_name(s: &str) -> Result<PersonName, String> {
    PersonName::parse(s)
        .ok_or_else(|| format!("expected a first and last name, got '{}'", s))
}

/// Accept a house by ordinal name or by number 1-12
pub fn parse_house(s: &str) -> Result<House, String> {
    match s.trim().parse::<u8>() {
        Ok(number) => House::from_number(number)
            .ok_or_else(|| format!("house number must be 1-12, got {}", number)),
        Err(_) => s.parse::<House>().map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ChartArgs {
        ChartArgs {
            name: "John Doe".to_string(),
            date: NaiveDate::from_ymd_opt(1990, 7, 16).unwrap(),
            hour: None,
            minute: None,
            lat: None,
            lng: None,
            city: None,
            country: None,
            tz: None,
            no_tz: false,
        }
    }

    #[test]
    fn test_to_request_uses_config_defaults() {
        let defaults = ChartDefaults {
            hour: 9,
            tz: "Europe/Lisbon".to_string(),
            ..ChartDefaults::default()
        };
        let request = args().to_request(&defaults);
        assert_eq!((request.year, request.month, request.day), (1990, 7, 16));
        assert_eq!(request.hour, 9);
        assert_eq!(request.minute, 0);
        assert_eq!(request.tz.as_deref(), Some("Europe/Lisbon"));
        assert!(request.lat.is_none());
    }

    #[test]
    fn test_to_request_flags_override_defaults() {
        let mut chart = args();
        chart.hour = Some(0);
        chart.tz = Some("Europe/Paris".to_string());
        chart.lat = Some(0.0);
        chart.city = Some("Paris".to_string());

        let request = chart.to_request(&ChartDefaults::default());
        assert_eq!(request.hour, 0);
        assert_eq!(request.tz.as_deref(), Some("Europe/Paris"));
        assert_eq!(request.lat, Some(0.0));
        assert_eq!(request.city.as_deref(), Some("Paris"));
        assert!(request.country.is_none());
    }

    #[test]
    fn test_to_request_no_tz_drops_timezone() {
        let mut chart = args();
        chart.no_tz = true;

        let request = chart.to_request(&ChartDefaults::default());
        assert!(request.tz.is_none());
        assert!(!request.query_params().contains("tz"));
    }

    #[test]
    fn test_parse_dob() {
        assert_eq!(parse_dob("1990-07-16").unwrap(), "1990-07-16");
        assert_eq!(parse_dob(" 2000-02-29 ").unwrap(), "2000-02-29");
        assert!(parse_dob("2001-02-29").is_err());
        assert!(parse_dob("16-07-1990").is_err());
        assert!(parse_dob("").is_err());
    }

    #[test]
    fn test_parse_person_name() {
        let name = parse_person_name("Mary Ann Evans").unwrap();
        assert_eq!(name.first, "Mary");
        assert_eq!(name.middle.as_deref(), Some("Ann"));
        assert_eq!(name.last, "Evans");
        assert!(parse_person_name("Madonna").is_err());
    }

    #[test]
    fn test_parse_house() {
        assert_eq!(parse_house("1").unwrap(), House::First);
        assert_eq!(parse_house("12").unwrap(), House::Twelfth);
        assert_eq!(parse_house("Ninth").unwrap(), House::Ninth);
        assert!(parse_house("0").unwrap_err().contains("1-12"));
        assert!(parse_house("thirteenth").is_err());
    }
}
