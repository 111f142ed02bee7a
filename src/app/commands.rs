use crate::config::Command;
use crate::core::formatter::Formatter;
use crate::domain::model::Award;
use crate::domain::ports::Clock;
use crate::utils::error::Result;

/// Runs one CLI subcommand and returns the text to print.
pub fn execute<C: Clock>(formatter: &Formatter<C>, command: &Command) -> Result<String> {
    tracing::debug!("executing {:?}", command);
    let locale = formatter.locale();

    let output = match command {
        Command::FormatDate { date } => formatter.format_date(date),
        Command::DateRange { start, end } => formatter.format_date_range(start, end.as_deref()),
        Command::TimeAgo { date } => formatter.time_ago(date),
        Command::Duration { start, end } => formatter.calculate_duration(start, end.as_deref()),
        Command::Domain { url } => formatter.extract_domain(url),
        Command::ProjectStatus { end_date } => formatter
            .project_status(end_date.as_deref())
            .label(locale)
            .to_string(),
        Command::ProjectType { name, description } => formatter
            .project_type(name, description)
            .label(locale)
            .to_string(),
        Command::AwardType {
            title,
            awarder,
            name,
            issuer,
            json,
        } => {
            let award = match json {
                Some(raw) => serde_json::from_str::<Award>(raw)?,
                None => Award {
                    title: title.clone(),
                    awarder: awarder.clone(),
                    name: name.clone(),
                    issuer: issuer.clone(),
                },
            };
            formatter.award_type(&award).to_string()
        }
        Command::IsAward { highlight } => formatter.is_award(highlight).to_string(),
        Command::BadgeColor { award_type } => formatter.award_badge_color(award_type).to_string(),
        Command::SkillLevel { level } => formatter.skill_level(level).to_string(),
        Command::SkillColor { level } => formatter.skill_color(level).to_string(),
        Command::LanguageLevel { fluency } => formatter.language_level(fluency).to_string(),
        Command::LanguageColor { fluency } => formatter.language_color(fluency).to_string(),
    };

    Ok(output)
}
