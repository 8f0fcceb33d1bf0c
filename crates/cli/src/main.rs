mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use commands::args::{ChartArgs, parse_dob, parse_house};
use commands::numerology::NumerologyCommand;
use starmap_core::{Aspect, House, Language, Period, Theme};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starmap")]
#[command(version, about = "Birth charts and horoscopes from The Numerology API")]
#[command(long_about = None)]
struct Cli {
    /// Log request details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Store the RapidAPI key and chart defaults
    ///
    /// The key is written to ~/.starmap/config.toml. STARMAP_API_KEY, when
    /// set, takes precedence over the stored key.
    Configure,

    /// Fetch birth chart data as JSON
    Chart {
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Render a birth chart as SVG and save it
    ChartSvg {
        #[command(flatten)]
        chart: ChartArgs,

        /// Label language (EN, FR, PT, IT, CN, ES, RU, TR, DE, HI)
        #[arg(long)]
        lang: Option<Language>,

        /// Theme (classic, light, dark, dark-high-contrast)
        #[arg(long)]
        theme: Option<Theme>,

        /// File to write the SVG to
        #[arg(short, long, default_value = "birth_chart.svg")]
        output: PathBuf,
    },

    /// Daily, weekly or monthly horoscope
    Horoscope {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long, value_parser = parse_dob)]
        dob: String,

        /// daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        period: Period,
    },

    /// Daily, weekly or monthly planetary horoscope
    Planetary {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long, value_parser = parse_dob)]
        dob: String,

        /// daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        period: Period,
    },

    /// Describe an aspect (conjunction, opposite, square, trine, sextile)
    Aspect { aspect: Aspect },

    /// Describe a house, by name ("seventh") or number (7)
    House {
        #[arg(value_parser = parse_house)]
        house: House,
    },

    /// Numerology numbers and the lucky days calendar
    Numerology {
        #[command(subcommand)]
        command: NumerologyCommand,
    },

    /// Check that the API key works and the service answers
    Health,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("starmap=debug,starmap_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Configure => commands::configure::run().await,
        Command::Chart { chart } => commands::chart::json(chart).await,
        Command::ChartSvg {
            chart,
            lang,
            theme,
            output,
        } => commands::chart::svg(chart, lang, theme, output).await,
        Command::Horoscope { dob, period } => commands::horoscope::run(period, dob).await,
        Command::Planetary { dob, period } => commands::horoscope::planetary(period, dob).await,
        Command::Aspect { aspect } => commands::lookup::aspect(aspect).await,
        Command::House { house } => commands::lookup::house(house).await,
        Command::Numerology { command } => commands::numerology::run(command).await,
        Command::Health => commands::numerology::health().await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "starmap", &mut io::stdout());
            Ok(())
        }
    }
}
