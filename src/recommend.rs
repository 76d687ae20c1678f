//! Advice text from the gap between top skills and the user's skills

use std::collections::HashSet;

/// Maximum number of missing skills named in a recommendation
pub const MAX_RECOMMENDED: usize = 8;

const MATCHED_ADVICE: &str = "You match many top skills. Highlight projects and quantify outcomes.";

/// Build the recommendation text for a search
///
/// Skills are compared trimmed and lowercased. Missing skills keep their rank order
/// from `top_skills`; duplicates are reported once.
pub fn build_recommendation<S: AsRef<str>>(top_skills: &[S], user_skills: &[S]) -> String {
    let missing = missing_skills(top_skills, user_skills);
    if user_skills.is_empty() || missing.is_empty() {
        return MATCHED_ADVICE.to_string();
    }

    let named: Vec<&str> = missing.iter().take(MAX_RECOMMENDED).map(String::as_str).collect();
    format!(
        "Recommended skills to learn: {}. Resume tip: add keywords from top skills.",
        named.join(", ")
    )
}

/// Top skills the user does not list, normalized
pub fn missing_skills<S: AsRef<str>>(top_skills: &[S], user_skills: &[S]) -> Vec<String> {
    let owned: HashSet<String> = user_skills.iter().map(|s| normalize(s.as_ref())).collect();

    let mut seen = HashSet::new();
    top_skills
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty() && !owned.contains(s))
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}
