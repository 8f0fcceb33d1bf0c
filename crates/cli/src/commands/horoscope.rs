use super::{Session, print_response};
use anyhow::{Context, Result};
use starmap_core::Period;

pub async fn run(period: Period, dob: String) -> Result<()> {
    let session = Session::load()?;
    let response = session
        .client
        .horoscope(period, &dob)
        .await
        .with_context(|| format!("{} horoscope request failed", period))?;
    print_response(response)
}

pub async fn planetary(period: Period, dob: String) -> Result<()> {
    let session = Session::load()?;
    let response = session
        .client
        .planetary_horoscope(period, &dob)
        .await
        .with_context(|| format!("{} planetary horoscope request failed", period))?;
    print_response(response)
}
