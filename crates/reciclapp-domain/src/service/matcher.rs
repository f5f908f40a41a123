//! Material name matching against the catalog
//!
//! Input is compared in normalized form (lowercase, trimmed, no
//! diacritics). An exact match wins over a compound match; a compound match
//! requires every significant word of a multi-word catalog name to appear in
//! the input ("botella" and "plastico" for "botella de plástico").

use reciclapp_types::{Error, Result};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Catalog, MaterialProfile};

/// Connector words ignored when splitting catalog names into match tokens
const CONNECTORS: &[&str] = &["de", "del", "la", "el", "los", "las", "y", "e", "con"];

/// Lowercase, trim, and strip diacritics (á -> a, ñ -> n)
pub fn normalize(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    lower.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Significant words of a catalog name
///
/// Parenthesized detail is excluded, so
/// "no reciclable (pañales, papel sucio, pilas, etc)" yields `["no", "reciclable"]`.
fn match_tokens(name: &str) -> Vec<String> {
    let normalized = normalize(name);
    let head = normalized.split('(').next().unwrap_or_default();
    head.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && !CONNECTORS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Outcome of matching a material name
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Matched(&'a MaterialProfile),
    /// No catalog entry; carries the text as the user typed it
    Unmatched(String),
}

impl<'a> Resolution<'a> {
    pub fn profile(&self) -> Option<&'a MaterialProfile> {
        match self {
            Resolution::Matched(profile) => Some(*profile),
            Resolution::Unmatched(_) => None,
        }
    }

    /// Name stored in the log: canonical when matched, raw otherwise
    pub fn material_name(&self) -> &str {
        match self {
            Resolution::Matched(profile) => &profile.name,
            Resolution::Unmatched(raw) => raw,
        }
    }

    pub fn is_recyclable(&self) -> bool {
        self.profile().map(|p| p.recyclable).unwrap_or(false)
    }

    /// Matched a "not recyclable" catalog entry (needs confirmation to log)
    pub fn is_non_recyclable_entry(&self) -> bool {
        self.profile().map(|p| !p.recyclable).unwrap_or(false)
    }

    pub fn is_capacity_sized(&self) -> bool {
        self.profile().map(|p| p.capacity_sized).unwrap_or(false)
    }
}

/// Token present as a word of the input (plural suffixes allowed)
///
/// Short tokens such as "no" must be the whole word.
fn has_word(words: &[&str], token: &str) -> bool {
    words.iter().any(|w| *w == token || (token.chars().count() > 2 && w.starts_with(token)))
}

/// Resolves user input to catalog entries
#[derive(Debug, Clone, Copy)]
pub struct MaterialMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> MaterialMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve a free-text material name
    pub fn resolve(&self, raw: &str) -> Resolution<'a> {
        let input = normalize(raw);
        if input.is_empty() {
            return Resolution::Unmatched(raw.to_string());
        }

        if let Some(profile) = self.catalog.iter().find(|p| normalize(&p.name) == input) {
            debug!(input = %raw, material = %profile.name, "exact catalog match");
            return Resolution::Matched(profile);
        }

        let words: Vec<&str> = input
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        // Most specific compound name wins; ties keep catalog order
        let compound = self
            .catalog
            .iter()
            .filter_map(|profile| {
                let tokens = match_tokens(&profile.name);
                let hit = tokens.len() >= 2 && tokens.iter().all(|t| has_word(&words, t));
                hit.then_some((tokens.len(), profile))
            })
            .fold(None, |best: Option<(usize, &MaterialProfile)>, (n, profile)| match best {
                Some((best_n, _)) if best_n >= n => best,
                _ => Some((n, profile)),
            });

        match compound {
            Some((_, profile)) => {
                debug!(input = %raw, material = %profile.name, "compound catalog match");
                Resolution::Matched(profile)
            }
            None => {
                debug!(input = %raw, "no catalog match");
                Resolution::Unmatched(raw.to_string())
            }
        }
    }

    /// Resolve a 1-based menu number such as `"3"`
    pub fn select(&self, input: &str) -> Result<&'a MaterialProfile> {
        let out_of_range = || Error::SelectionOutOfRange {
            input: input.trim().to_string(),
            max: self.catalog.len(),
        };
        let number: usize = input.trim().parse().map_err(|_| out_of_range())?;
        self.catalog.get_numbered(number).ok_or_else(out_of_range)
    }
}
