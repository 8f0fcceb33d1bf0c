use super::{Session, print_response};
use anyhow::{Context, Result};
use starmap_core::{Aspect, House};

pub async fn aspect(aspect: Aspect) -> Result<()> {
    let session = Session::load()?;
    let response = session
        .client
        .astrology_aspect(aspect)
        .await
        .context("Aspect lookup failed")?;
    print_response(response)
}

pub async fn house(house: House) -> Result<()> {
    let session = Session::load()?;
    let response = session
        .client
        .astrology_house(house)
        .await
        .context("House lookup failed")?;
    print_response(response)
}
