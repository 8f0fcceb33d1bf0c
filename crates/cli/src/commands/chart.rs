use super::args::ChartArgs;
use super::{Session, print_response};
use anyhow::{Context, Result};
use starmap_core::{Language, SvgChartRequest, Theme};
use std::fs;
use std::path::PathBuf;

/// Fetch birth chart data and print it
pub async fn json(chart: ChartArgs) -> Result<()> {
    let session = Session::load()?;
    let request = chart.to_request(&session.defaults);

    let response = session
        .client
        .birth_chart(&request)
        .await
        .context("Birth chart request failed")?;
    print_response(response)
}

/// Fetch the birth chart drawing and write it to `output`
pub async fn svg(
    chart: ChartArgs,
    lang: Option<Language>,
    theme: Option<Theme>,
    output: PathBuf,
) -> Result<()> {
    let session = Session::load()?;
    let mut request =
        SvgChartRequest::with_defaults(chart.to_request(&session.defaults), &session.defaults);
    if let Some(lang) = lang {
        request = request.lang(lang);
    }
    if let Some(theme) = theme {
        request = request.theme(theme);
    }

    println!("🎨 Rendering chart for {}...", request.chart.name);
    let svg = session
        .client
        .birth_chart_svg(&request)
        .await
        .context("Birth chart SVG request failed")?;

    if !svg.trim_start().starts_with('<') {
        eprintln!("⚠ Response does not look like SVG; saving it anyway");
    }

    fs::write(&output, &svg)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("✅ SVG saved as {}", output.display());

    Ok(())
}
