use crate::domain::model::{Award, AwardType, ProjectStatus, ProjectType};

pub const AI_KEYWORDS: &[&str] = &["ai", "machine learning", "neural", "intelligence"];
pub const MOBILE_KEYWORDS: &[&str] = &["mobile", "app", "ios", "android", "react native"];
pub const WEB_KEYWORDS: &[&str] = &["web", "website", "frontend", "react", "vue"];
pub const AWARD_KEYWORDS: &[&str] = &["award", "premio", "won", "ganó", "winner", "champion"];

// Checked in order, first hit wins.
const PROJECT_TYPE_RULES: &[(ProjectType, &[&str])] = &[
    (ProjectType::AiMl, AI_KEYWORDS),
    (ProjectType::Mobile, MOBILE_KEYWORDS),
    (ProjectType::Web, WEB_KEYWORDS),
];

/// A project with an end date is finished; without one it is ongoing.
pub fn project_status(end_date: Option<&str>) -> ProjectStatus {
    match end_date {
        Some(end) if !end.is_empty() => ProjectStatus::Completed,
        _ => ProjectStatus::InDevelopment,
    }
}

/// Keyword classification of a project by its name and description.
///
/// Matching is plain substring search on the lower-cased text, so short
/// keywords also hit inside longer words ("app" in "application").
pub fn project_type(name: &str, description: &str) -> ProjectType {
    let text = format!("{} {}", name, description).to_lowercase();

    PROJECT_TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ProjectType::Software)
}

/// Whether a highlight line mentions a prize, in English or Spanish.
pub fn is_award(highlight: &str) -> bool {
    let text = highlight.to_lowercase();
    AWARD_KEYWORDS.iter().any(|k| text.contains(&k.to_lowercase()))
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

/// `title`+`awarder` is an award, `name`+`issuer` a certificate. Anything
/// else is an award when it has a title and a certificate otherwise.
pub fn award_type(award: &Award) -> AwardType {
    if present(&award.title) && present(&award.awarder) {
        return AwardType::Award;
    }
    if present(&award.name) && present(&award.issuer) {
        return AwardType::Certificate;
    }

    if present(&award.title) {
        AwardType::Award
    } else {
        AwardType::Certificate
    }
}
