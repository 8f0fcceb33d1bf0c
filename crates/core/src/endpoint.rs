use crate::error::{Error, Result};
use crate::types::Period;

/// Production host of The Numerology API on RapidAPI
pub const API_HOST: &str = "the-numerology-api.p.rapidapi.com";

pub const DEFAULT_BASE_URL: &str = "https://the-numerology-api.p.rapidapi.com";

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Remote endpoints, one per client operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    BirthChart,
    BirthChartSvg,
    DailyHoroscope,
    WeeklyHoroscope,
    MonthlyHoroscope,
    DailyPlanetary,
    WeeklyPlanetary,
    MonthlyPlanetary,
    AstrologyAspect,
    AstrologyHouse,
    LifePath,
    AttitudeNumber,
    BalanceNumber,
    ChallengeNumber,
    KarmicDebt,
    KarmicLessons,
    PersonalityNumber,
    DestinyNumber,
    HeartDesire,
    SubconsciousNumber,
    ThoughtNumber,
    LuckyNumbers,
    PeriodCycles,
    LuckyDaysCalendar,
}

impl Endpoint {
    pub const ALL: &'static [Endpoint] = &[
        Endpoint::BirthChart,
        Endpoint::BirthChartSvg,
        Endpoint::DailyHoroscope,
        Endpoint::WeeklyHoroscope,
        Endpoint::MonthlyHoroscope,
        Endpoint::DailyPlanetary,
        Endpoint::WeeklyPlanetary,
        Endpoint::MonthlyPlanetary,
        Endpoint::AstrologyAspect,
        Endpoint::AstrologyHouse,
        Endpoint::LifePath,
        Endpoint::AttitudeNumber,
        Endpoint::BalanceNumber,
        Endpoint::ChallengeNumber,
        Endpoint::KarmicDebt,
        Endpoint::KarmicLessons,
        Endpoint::PersonalityNumber,
        Endpoint::DestinyNumber,
        Endpoint::HeartDesire,
        Endpoint::SubconsciousNumber,
        Endpoint::ThoughtNumber,
        Endpoint::LuckyNumbers,
        Endpoint::PeriodCycles,
        Endpoint::LuckyDaysCalendar,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::BirthChart => "/birth-chart",
            Endpoint::BirthChartSvg => "/birth-chart/svg",
            Endpoint::DailyHoroscope => "/horoscope/today",
            Endpoint::WeeklyHoroscope => "/horoscope/weekly",
            Endpoint::MonthlyHoroscope => "/horoscope/monthly",
            Endpoint::DailyPlanetary => "/horoscope/planetary/daily",
            Endpoint::WeeklyPlanetary => "/horoscope/planetary/weekly",
            Endpoint::MonthlyPlanetary => "/horoscope/planetary/monthly",
            Endpoint::AstrologyAspect => "/horoscope/astrology/aspect",
            Endpoint::AstrologyHouse => "/horoscope/astrology/house",
            Endpoint::LifePath => "/life_path",
            Endpoint::AttitudeNumber => "/attitude_number",
            Endpoint::BalanceNumber => "/balance_number",
            Endpoint::ChallengeNumber => "/challenge_number",
            Endpoint::KarmicDebt => "/karmic_debt",
            Endpoint::KarmicLessons => "/karmic_lessons",
            Endpoint::PersonalityNumber => "/personality_number",
            Endpoint::DestinyNumber => "/destiny_number",
            Endpoint::HeartDesire => "/heart_desire",
            Endpoint::SubconsciousNumber => "/subconscious_number",
            Endpoint::ThoughtNumber => "/thought_number",
            Endpoint::LuckyNumbers => "/lucky_numbers",
            Endpoint::PeriodCycles => "/period_cycles",
            Endpoint::LuckyDaysCalendar => "/lucky-days-calendar",
        }
    }

    pub fn horoscope(period: Period) -> Self {
        match period {
            Period::Daily => Endpoint::DailyHoroscope,
            Period::Weekly => Endpoint::WeeklyHoroscope,
            Period::Monthly => Endpoint::MonthlyHoroscope,
        }
    }

    pub fn planetary(period: Period) -> Self {
        match period {
            Period::Daily => Endpoint::DailyPlanetary,
            Period::Weekly => Endpoint::WeeklyPlanetary,
            Period::Monthly => Endpoint::MonthlyPlanetary,
        }
    }

    /// Full URL for this endpoint under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, self.path())
    }
}

pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Path of a compatibility report, e.g. `/horoscope/compatibility/zodiac`.
///
/// `kind` becomes a path segment, so it must be a non-empty run of ASCII
/// letters, digits, `-` or `_`.
pub fn compatibility_path(kind: &str) -> Result<String> {
    let valid = !kind.is_empty()
        && kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(Error::InvalidValue(format!("invalid compatibility type '{}'", kind)));
    }
    Ok(format!("/horoscope/compatibility/{}", kind))
}
