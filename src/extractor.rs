//! Keyword, location and role extraction from free text

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Search intent pulled out of a free-text request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIntent {
    pub keywords: Vec<String>,
    pub location: Option<String>,
    pub role: Option<String>,
}

impl ExtractedIntent {
    /// Keywords joined by single spaces
    pub fn query(&self) -> String {
        self.keywords.join(" ")
    }
}

/// Turns free text into `{keywords, location, role}`
#[cfg_attr(test, mockall::automock)]
pub trait KeywordExtractor: Send + Sync {
    /// Extract search intent; `semantic` enables phrase-level keywords
    fn extract(&self, text: &str, semantic: bool) -> ExtractedIntent;
}

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+#.\-]*").expect("word pattern is valid"));

static PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|at|near|around)\s+([A-Z][A-Za-z\-]*(?:(?:,\s*|\s+)[A-Z][A-Za-z\-]*)*)")
        .expect("place pattern is valid")
});

const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "and", "any", "are", "around", "can",
    "could", "does", "for", "from", "find", "get", "give", "good", "has", "have", "help",
    "her", "him", "his", "hiring", "how", "into", "its", "job", "jobs", "just", "like",
    "looking", "me", "more", "near", "need", "new", "not", "now", "off", "one", "open",
    "opening", "openings", "opportunities", "opportunity", "our", "out", "please", "position",
    "positions", "role", "roles", "search", "seeking", "show", "some", "something", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "want", "was",
    "were", "what", "when", "where", "which", "who", "will", "with", "work", "would", "you",
    "your",
];

const ROLE_NOUNS: &[&str] = &[
    "developer", "engineer", "designer", "scientist", "manager", "analyst",
];

/// Multi-word terms kept together in semantic mode
const PHRASES: &[&str] = &[
    "machine learning",
    "data science",
    "deep learning",
    "full stack",
    "front end",
    "back end",
    "product management",
    "site reliability",
    "computer vision",
    "natural language processing",
];

/// Rule-based extractor used when no NLP model is wired in
///
/// Keywords are lowercased words longer than two characters that are not
/// stopwords or part of the detected location, de-duplicated in first-seen order.
/// Location comes from "in/at/near <Capitalized Words>", else the word "remote".
/// Role is the first keyword naming a job function.
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    fn location(text: &str) -> Option<String> {
        if let Some(place) = PLACE.captures(text).and_then(|c| c.get(1)) {
            return Some(place.as_str().trim_end_matches(',').to_string());
        }

        WORD.find_iter(text)
            .any(|w| w.as_str().eq_ignore_ascii_case("remote"))
            .then(|| "Remote".to_string())
    }

    fn words(text: &str, exclude: &HashSet<String>) -> Vec<String> {
        WORD.find_iter(text)
            .map(|w| w.as_str().trim_end_matches(['.', '-']).to_lowercase())
            .filter(|w| w.len() > 2)
            .filter(|w| !STOPWORDS.contains(&w.as_str()))
            .filter(|w| !exclude.contains(w))
            .collect()
    }

    fn merge_phrases(words: Vec<String>) -> Vec<String> {
        let mut merged = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            let phrase = PHRASES.iter().find_map(|phrase| {
                let parts: Vec<&str> = phrase.split(' ').collect();
                let end = i + parts.len();
                (end <= words.len() && words[i..end].iter().zip(&parts).all(|(w, p)| w.as_str() == *p))
                    .then(|| (phrase.to_string(), parts.len()))
            });

            match phrase {
                Some((phrase, len)) => {
                    merged.push(phrase);
                    i += len;
                }
                None => {
                    merged.push(words[i].clone());
                    i += 1;
                }
            }
        }
        merged
    }
}

impl KeywordExtractor for HeuristicExtractor {
    fn extract(&self, text: &str, semantic: bool) -> ExtractedIntent {
        if text.trim().is_empty() {
            return ExtractedIntent::default();
        }

        let location = Self::location(text);
        let exclude: HashSet<String> = location
            .iter()
            .flat_map(|place| WORD.find_iter(place).map(|w| w.as_str().to_lowercase()))
            .chain(std::iter::once("remote".to_string()))
            .collect();

        let mut words = Self::words(text, &exclude);
        if semantic {
            words = Self::merge_phrases(words);
        }

        let mut seen = HashSet::new();
        let keywords: Vec<String> = words.into_iter().filter(|w| seen.insert(w.clone())).collect();

        let role = keywords
            .iter()
            .find(|k| ROLE_NOUNS.iter().any(|noun| k.contains(noun)))
            .cloned();

        ExtractedIntent {
            keywords,
            location,
            role,
        }
    }
}
