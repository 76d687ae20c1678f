//! Frequency-based skill aggregation over job descriptions

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// Number of skills reported per search
pub const TOP_SKILLS: usize = 10;

/// Letters plus the punctuation found in terms like "c++", "c#", "node.js", "ci-cd"
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z+\-.#]{2,}").expect("token pattern is valid"));

const STOPWORDS: &[&str] = &[
    "the", "and", "with", "for", "our", "we", "you", "is", "in", "on", "to", "a", "an",
];

/// Lowercased skill-ish tokens of `text`, stopwords removed
///
/// Leading and trailing `.`/`-` are stripped so sentence punctuation does not split
/// counts ("docker." counts as "docker"); inner punctuation is kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().trim_matches(|c: char| c == '.' || c == '-'))
        .filter(|token| token.len() >= 2 && token.bytes().any(|b| b.is_ascii_lowercase()))
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// The `limit` most frequent tokens across `descriptions`
///
/// Ranked by descending count; equal counts keep first-seen order.
pub fn top_skills<'a, I>(descriptions: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for token in descriptions.into_iter().flat_map(tokenize) {
        let next_rank = counts.len();
        counts.entry(token).or_insert((0, next_rank)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _)| token)
        .collect()
}
