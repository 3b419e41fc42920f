//! Free-text answer checking with punctuation/case-insensitive matching.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::generator::Challenge;

/// Outcome of checking a guess; the expected name and aliases are always
/// reported so the UI can show feedback either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub kind_ok: bool,
    pub name_ok: bool,
    pub expected: String,
    pub accepted: Vec<String>,
}

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase, collapse every non-alphanumeric run to a single space, trim.
/// "Sodium   Chloride!" and "sodium-chloride" both become "sodium chloride".
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    non_alphanumeric().replace_all(&lowered, " ").trim().to_string()
}

/// Check a guessed kind and name against a challenge. Never fails: an empty
/// or absent guess simply does not match.
pub fn check(challenge: &Challenge, guessed_kind: &str, guessed_name: &str) -> Verdict {
    let kind_ok = guessed_kind.trim().eq_ignore_ascii_case(challenge.kind.as_str());

    let guess = normalize_name(guessed_name);
    let name_ok = !guess.is_empty()
        && (guess == normalize_name(&challenge.primary)
            || challenge.accepted.iter().any(|alias| normalize_name(alias) == guess));

    Verdict {
        kind_ok,
        name_ok,
        expected: challenge.primary.clone(),
        accepted: challenge.accepted.clone(),
    }
}
