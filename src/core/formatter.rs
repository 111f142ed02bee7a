use crate::config::toml_config::FormatterConfig;
use crate::core::{classify, dates, lookup, text};
use crate::domain::model::{Award, AwardType, Locale, ProjectStatus, ProjectType};
use crate::domain::ports::Clock;

/// All display helpers behind one handle, with the locale and the time
/// source fixed at construction.
pub struct Formatter<C: Clock> {
    clock: C,
    locale: Locale,
    present_label: Option<String>,
}

impl<C: Clock> Formatter<C> {
    pub fn new(clock: C, locale: Locale) -> Self {
        Self {
            clock,
            locale,
            present_label: None,
        }
    }

    pub fn from_config(clock: C, config: &FormatterConfig) -> Self {
        tracing::debug!(
            locale = %config.locale(),
            present_label = ?config.present_label(),
            "building formatter from config"
        );
        Self {
            clock,
            locale: config.locale(),
            present_label: config.present_label().map(String::from),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format_date(&self, date: &str) -> String {
        dates::format_date(date, self.locale)
    }

    pub fn format_date_range(&self, start: &str, end: Option<&str>) -> String {
        let present = self
            .present_label
            .as_deref()
            .unwrap_or_else(|| self.locale.present());
        dates::format_date_range_with(start, end, self.locale, present)
    }

    pub fn time_ago(&self, date: &str) -> String {
        dates::time_ago(date, self.clock.now(), self.locale)
    }

    pub fn calculate_duration(&self, start: &str, end: Option<&str>) -> String {
        dates::calculate_duration(start, end, self.clock.now(), self.locale)
    }

    pub fn extract_domain(&self, url: &str) -> String {
        text::extract_domain(url)
    }

    pub fn project_status(&self, end_date: Option<&str>) -> ProjectStatus {
        classify::project_status(end_date)
    }

    pub fn project_type(&self, name: &str, description: &str) -> ProjectType {
        classify::project_type(name, description)
    }

    pub fn award_type(&self, award: &Award) -> AwardType {
        classify::award_type(award)
    }

    pub fn is_award(&self, highlight: &str) -> bool {
        classify::is_award(highlight)
    }

    pub fn award_badge_color(&self, award_type: &str) -> &'static str {
        lookup::award_badge_color(award_type)
    }

    pub fn skill_level(&self, level: &str) -> u8 {
        lookup::skill_level(level)
    }

    pub fn skill_color(&self, level: &str) -> &'static str {
        lookup::skill_color(level)
    }

    pub fn language_level(&self, fluency: &str) -> u8 {
        lookup::language_level(fluency)
    }

    pub fn language_color(&self, fluency: &str) -> &'static str {
        lookup::language_color(fluency)
    }
}
