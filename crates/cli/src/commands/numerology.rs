use super::args::{parse_date, parse_person_name};
use super::{Session, print_response};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Subcommand;
use starmap_core::{LuckyDaysRequest, PersonName};

#[derive(Debug, Subcommand)]
pub enum NumerologyCommand {
    /// Life path number
    LifePath {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Attitude number (birth day and month)
    Attitude {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Balance number from initials, e.g. "JPD"
    Balance { initials: String },

    /// Challenge numbers
    Challenge {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Karmic debt numbers
    KarmicDebt {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Karmic lessons from a full name
    KarmicLessons { name: String },

    /// Personality number ("First [Middle] Last")
    Personality {
        #[arg(value_parser = parse_person_name)]
        name: PersonName,
    },

    /// Destiny number ("First [Middle] Last")
    Destiny {
        #[arg(value_parser = parse_person_name)]
        name: PersonName,
    },

    /// Heart's desire number ("First [Middle] Last")
    HeartDesire {
        #[arg(value_parser = parse_person_name)]
        name: PersonName,
    },

    /// Subconscious self number
    Subconscious { name: String },

    /// Rational thought number
    Thought {
        first_name: String,

        /// Day of the month of birth
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
        birth_day: u32,
    },

    /// Lucky numbers for a birth date and full name
    LuckyNumbers {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        #[arg(long)]
        name: String,
    },

    /// Period cycles
    PeriodCycles {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Lucky days calendar
    LuckyDays {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        dob: NaiveDate,

        /// First day of the calendar (service default when omitted)
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Number of weeks to cover
        #[arg(long)]
        weeks: Option<u32>,
    },
}

impl NumerologyCommand {
    fn label(&self) -> &'static str {
        match self {
            NumerologyCommand::LifePath { .. } => "life path",
            NumerologyCommand::Attitude { .. } => "attitude number",
            NumerologyCommand::Balance { .. } => "balance number",
            NumerologyCommand::Challenge { .. } => "challenge number",
            NumerologyCommand::KarmicDebt { .. } => "karmic debt",
            NumerologyCommand::KarmicLessons { .. } => "karmic lessons",
            NumerologyCommand::Personality { .. } => "personality number",
            NumerologyCommand::Destiny { .. } => "destiny number",
            NumerologyCommand::HeartDesire { .. } => "heart desire",
            NumerologyCommand::Subconscious { .. } => "subconscious number",
            NumerologyCommand::Thought { .. } => "thought number",
            NumerologyCommand::LuckyNumbers { .. } => "lucky numbers",
            NumerologyCommand::PeriodCycles { .. } => "period cycles",
            NumerologyCommand::LuckyDays { .. } => "lucky days calendar",
        }
    }
}

pub async fn run(command: NumerologyCommand) -> Result<()> {
    let session = Session::load()?;
    let client = &session.client;
    let label = command.label();

    let response = match command {
        NumerologyCommand::LifePath { date } => client.life_path(date).await,
        NumerologyCommand::Attitude { date } => client.attitude_number(date).await,
        NumerologyCommand::Balance { initials } => client.balance_number(&initials).await,
        NumerologyCommand::Challenge { date } => client.challenge_number(date).await,
        NumerologyCommand::KarmicDebt { date } => client.karmic_debt(date).await,
        NumerologyCommand::KarmicLessons { name } => client.karmic_lessons(&name).await,
        NumerologyCommand::Personality { name } => client.personality_number(&name).await,
        NumerologyCommand::Destiny { name } => client.destiny_number(&name).await,
        NumerologyCommand::HeartDesire { name } => client.heart_desire(&name).await,
        NumerologyCommand::Subconscious { name } => client.subconscious_number(&name).await,
        NumerologyCommand::Thought {
            first_name,
            birth_day,
        } => client.thought_number(&first_name, birth_day).await,
        NumerologyCommand::LuckyNumbers { date, name } => client.lucky_numbers(date, &name).await,
        NumerologyCommand::PeriodCycles { date } => client.period_cycles(date).await,
        NumerologyCommand::LuckyDays {
            dob,
            start_date,
            weeks,
        } => {
            let mut request = LuckyDaysRequest::new(dob);
            request.start_date = start_date;
            request.weeks = weeks;
            client.lucky_days_calendar(&request).await
        }
    }
    .with_context(|| format!("{} request failed", label))?;

    print_response(response)
}

pub async fn health() -> Result<()> {
    let session = Session::load()?;
    if !session.client.health().await {
        bail!(
            "The Numerology API did not answer at {} (check the key and network)",
            session.client.base_url()
        );
    }
    println!("✓ The Numerology API is reachable");
    Ok(())
}
