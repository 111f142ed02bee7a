use super::toml_config::FormatterConfig;
use crate::domain::model::Locale;
use crate::utils::error::Result;
use crate::utils::validation::{validate_iso_date, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-fmt")]
#[command(about = "Date, classification and display helpers for portfolio pages")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Display locale (es, en); overrides the config file
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Pretend today is this YYYY-MM-DD date
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// "<month> de <year>" for a YYYY-MM-DD date
    FormatDate { date: String },
    /// "<start> - <end|Present>"
    DateRange { start: String, end: Option<String> },
    /// Whole years since (or until) a date
    TimeAgo { date: String },
    /// Years and months between two dates, or until today
    Duration { start: String, end: Option<String> },
    /// Host of a URL without "www."
    Domain { url: String },
    /// Completed when an end date is given
    ProjectStatus { end_date: Option<String> },
    /// AI/ML, Mobile, Web or Software
    ProjectType {
        name: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Award or Certificate from the populated fields
    AwardType {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        awarder: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        issuer: Option<String>,
        /// Award object as JSON; replaces the individual flags
        #[arg(long)]
        json: Option<String>,
    },
    /// Whether a highlight mentions a prize
    IsAward { highlight: String },
    BadgeColor { award_type: String },
    SkillLevel { level: String },
    SkillColor { level: String },
    LanguageLevel { fluency: String },
    LanguageColor { fluency: String },
}

impl CliConfig {
    /// File config (or defaults) with the `--locale` override applied.
    pub fn formatter_config(&self) -> Result<FormatterConfig> {
        let mut config = match &self.config {
            Some(path) => FormatterConfig::from_file(path)?,
            None => FormatterConfig::default(),
        };

        if let Some(locale) = &self.locale {
            config.display.locale = locale.parse::<Locale>()?;
            tracing::debug!("locale overridden to {}", config.display.locale);
        }

        Ok(config)
    }

    pub fn fixed_today(&self) -> Result<Option<NaiveDate>> {
        self.now
            .as_deref()
            .map(|now| validate_iso_date("now", now))
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(locale) = &self.locale {
            locale.parse::<Locale>()?;
        }
        self.fixed_today()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from([
            "portfolio-fmt",
            "duration",
            "2020-01-01",
            "--locale",
            "en",
            "--now",
            "2024-06-15",
        ]);

        assert!(cli.validate().is_ok());
        assert_eq!(cli.formatter_config().unwrap().locale(), Locale::En);
        assert_eq!(cli.fixed_today().unwrap(), NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(matches!(cli.command, Command::Duration { end: None, .. }));
    }

    #[test]
    fn test_invalid_overrides_fail_validation() {
        let cli = CliConfig::parse_from(["portfolio-fmt", "--locale", "fr", "domain", "x"]);
        assert!(cli.validate().is_err());

        let cli = CliConfig::parse_from(["portfolio-fmt", "--now", "soon", "domain", "x"]);
        assert!(cli.validate().is_err());
    }
}
