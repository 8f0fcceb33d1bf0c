use crate::transport::{ReqwestTransport, Transport};
use chrono::NaiveDate;
use starmap_core::endpoint::{
    API_HOST, API_HOST_HEADER, API_KEY_HEADER, DEFAULT_BASE_URL, compatibility_path, join_url,
};
use starmap_core::numerology::{
    attitude_params, balance_params, birth_date_params, date_params, full_name_params,
    health_check_params, lucky_numbers_params, subconscious_params, thought_params,
};
use starmap_core::params::{aspect_params, daily_planetary_params, dob_params, house_params};
use starmap_core::{
    ApiResponse, Aspect, BirthChartRequest, Endpoint, House, LuckyDaysRequest, Period,
    PersonName, QueryParams, RawResponse, Result, SvgChartRequest,
};
use std::fmt;

/// Client for The Numerology API on RapidAPI
///
/// Holds the base URL and the two authentication headers. Both are fixed at
/// construction; the client is cheap to clone and safe to share between
/// tasks.
#[derive(Clone)]
pub struct StarMapClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    headers: Vec<(&'static str, String)>,
}

impl StarMapClient<ReqwestTransport> {
    /// Create a client for `api_key`. The key is not validated.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, ReqwestTransport::new())
    }

    /// Create a client that sends requests through `client`
    pub fn with_http_client(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self::with_transport(api_key, ReqwestTransport::with_client(client))
    }
}

impl<T: Transport> StarMapClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: vec![
                (API_KEY_HEADER, api_key.into()),
                (API_HOST_HEADER, API_HOST.to_string()),
            ],
        }
    }

    /// Point the client at another host (a mirror or a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Birth chart data as JSON
    pub async fn birth_chart(&self, request: &BirthChartRequest) -> Result<ApiResponse> {
        self.get_json(Endpoint::BirthChart, request.query_params()).await
    }

    /// Birth chart drawing. The body is SVG markup and is returned untouched.
    pub async fn birth_chart_svg(&self, request: &SvgChartRequest) -> Result<String> {
        let raw = self
            .get_raw(Endpoint::BirthChartSvg, request.query_params())
            .await?;
        Ok(raw.body)
    }

    pub async fn daily_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.horoscope(Period::Daily, dob).await
    }

    pub async fn weekly_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.horoscope(Period::Weekly, dob).await
    }

    pub async fn monthly_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.horoscope(Period::Monthly, dob).await
    }

    /// Horoscope for `dob` (YYYY-MM-DD) over the given period
    pub async fn horoscope(&self, period: Period, dob: &str) -> Result<ApiResponse> {
        self.get_json(Endpoint::horoscope(period), dob_params(dob)).await
    }

    pub async fn daily_planetary_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.planetary_horoscope(Period::Daily, dob).await
    }

    pub async fn weekly_planetary_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.planetary_horoscope(Period::Weekly, dob).await
    }

    pub async fn monthly_planetary_horoscope(&self, dob: &str) -> Result<ApiResponse> {
        self.planetary_horoscope(Period::Monthly, dob).await
    }

    /// Planetary horoscope for `dob` over the given period
    pub async fn planetary_horoscope(&self, period: Period, dob: &str) -> Result<ApiResponse> {
        let params = match period {
            Period::Daily => daily_planetary_params(dob),
            Period::Weekly | Period::Monthly => dob_params(dob),
        };
        self.get_json(Endpoint::planetary(period), params).await
    }

    pub async fn astrology_aspect(&self, aspect: Aspect) -> Result<ApiResponse> {
        self.get_json(Endpoint::AstrologyAspect, aspect_params(aspect)).await
    }

    pub async fn astrology_house(&self, house: House) -> Result<ApiResponse> {
        self.get_json(Endpoint::AstrologyHouse, house_params(house)).await
    }

    /// Life path number for a birth date
    pub async fn life_path(&self, date: NaiveDate) -> Result<ApiResponse> {
        self.get_json(Endpoint::LifePath, date_params(date)).await
    }

    pub async fn attitude_number(&self, date: NaiveDate) -> Result<ApiResponse> {
        self.get_json(Endpoint::AttitudeNumber, attitude_params(date)).await
    }

    pub async fn balance_number(&self, initials: &str) -> Result<ApiResponse> {
        self.get_json(Endpoint::BalanceNumber, balance_params(initials)).await
    }

    pub async fn challenge_number(&self, date: NaiveDate) -> Result<ApiResponse> {
        self.get_json(Endpoint::ChallengeNumber, birth_date_params(date)).await
    }

    pub async fn karmic_debt(&self, date: NaiveDate) -> Result<ApiResponse> {
        self.get_json(Endpoint::KarmicDebt, date_params(date)).await
    }

    pub async fn karmic_lessons(&self, full_name: &str) -> Result<ApiResponse> {
        self.get_json(Endpoint::KarmicLessons, full_name_params(full_name)).await
    }

    pub async fn personality_number(&self, name: &PersonName) -> Result<ApiResponse> {
        self.get_json(Endpoint::PersonalityNumber, name.query_params()).await
    }

    pub async fn destiny_number(&self, name: &PersonName) -> Result<ApiResponse> {
        self.get_json(Endpoint::DestinyNumber, name.query_params()).await
    }

    pub async fn heart_desire(&self, name: &PersonName) -> Result<ApiResponse> {
        self.get_json(Endpoint::HeartDesire, name.query_params()).await
    }

    pub async fn subconscious_number(&self, name: &str) -> Result<ApiResponse> {
        self.get_json(Endpoint::SubconsciousNumber, subconscious_params(name)).await
    }

    pub async fn thought_number(&self, first_name: &str, birth_day: u32) -> Result<ApiResponse> {
        let params = thought_params(first_name, birth_day);
        self.get_json(Endpoint::ThoughtNumber, params).await
    }

    pub async fn lucky_numbers(&self, birthdate: NaiveDate, name: &str) -> Result<ApiResponse> {
        let params = lucky_numbers_params(birthdate, name);
        self.get_json(Endpoint::LuckyNumbers, params).await
    }

    pub async fn period_cycles(&self, date: NaiveDate) -> Result<ApiResponse> {
        self.get_json(Endpoint::PeriodCycles, birth_date_params(date)).await
    }

    /// Lucky days for a birth date; window fields left unset are not sent
    pub async fn lucky_days_calendar(&self, request: &LuckyDaysRequest) -> Result<ApiResponse> {
        self.get_json(Endpoint::LuckyDaysCalendar, request.query_params()).await
    }

    /// Compatibility report of the given `kind` (the last path segment).
    ///
    /// Each kind takes its own parameters, so the caller builds them.
    pub async fn compatibility(&self, kind: &str, params: QueryParams) -> Result<ApiResponse> {
        let path = compatibility_path(kind)?;
        self.get_json_at(&path, params).await
    }

    /// True when a known-good life path request comes back with status 200.
    ///
    /// Any other status and any transport failure count as unhealthy.
    pub async fn health(&self) -> bool {
        let path = Endpoint::LifePath.path();
        match self.get_raw_at(path, health_check_params()).await {
            Ok(raw) => raw.status_code == 200,
            Err(e) => {
                tracing::debug!(path, error = %e, "health check failed");
                false
            }
        }
    }

    async fn get_json(&self, endpoint: Endpoint, params: QueryParams) -> Result<ApiResponse> {
        self.get_json_at(endpoint.path(), params).await
    }

    async fn get_json_at(&self, path: &str, params: QueryParams) -> Result<ApiResponse> {
        let raw = self.get_raw_at(path, params).await?;
        let response = ApiResponse::from_raw(raw);

        if let ApiResponse::Unparsed { status_code, raw } = &response {
            tracing::warn!(
                path,
                status_code,
                body_len = raw.len(),
                "response body is not JSON, returning raw text"
            );
        }

        Ok(response)
    }

    async fn get_raw(&self, endpoint: Endpoint, params: QueryParams) -> Result<RawResponse> {
        self.get_raw_at(endpoint.path(), params).await
    }

    async fn get_raw_at(&self, path: &str, params: QueryParams) -> Result<RawResponse> {
        let url = join_url(&self.base_url, path);
        let keys: Vec<&str> = params.keys().collect();
        tracing::debug!(path, params = ?keys, "GET");

        let raw = self.transport.get(&url, &self.headers, &params).await?;

        tracing::debug!(path, status_code = raw.status_code, "response received");
        Ok(raw)
    }
}

impl<T> fmt::Debug for StarMapClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarMapClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
