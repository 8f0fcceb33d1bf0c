use crate::types::{Aspect, BirthChartRequest, House, SvgChartRequest};

/// Ordered query parameters for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Appends `key` only when a value was supplied
    pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in insertion order, ready for URL encoding
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

impl BirthChartRequest {
    pub fn query_params(&self) -> QueryParams {
        let mut params = self.base_params();
        self.push_location(&mut params);
        params
    }

    fn base_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("name", &self.name)
            .push("year", self.year)
            .push("month", self.month)
            .push("day", self.day)
            .push("hour", self.hour)
            .push("minute", self.minute);
        params
    }

    fn push_location(&self, params: &mut QueryParams) {
        params
            .push_opt("lat", self.lat)
            .push_opt("lng", self.lng)
            .push_opt("city", self.city.as_ref())
            .push_opt("country", self.country.as_ref())
            .push_opt("tz", self.tz.as_ref());
    }
}

impl SvgChartRequest {
    pub fn query_params(&self) -> QueryParams {
        let mut params = self.chart.base_params();
        params.push("lang", self.lang).push("theme", self.theme);
        self.chart.push_location(&mut params);
        params
    }
}

/// Parameters for the horoscope endpoints other than the daily planetary one
pub fn dob_params(dob: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("dob", dob);
    params
}

/// The daily planetary endpoint also needs `day=today`
pub fn daily_planetary_params(dob: &str) -> QueryParams {
    let mut params = dob_params(dob);
    params.push("day", "today");
    params
}

pub fn aspect_params(aspect: Aspect) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("aspect", aspect);
    params
}

pub fn house_params(house: House) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("house", house);
    params
}
