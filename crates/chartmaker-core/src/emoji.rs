//! Fruit emoji annotation
//!
//! Appends a fruit emoji after every whole-word fruit name in free-form text,
//! so `"apple pie"` becomes `"apple 🍎 pie"`. An occurrence that is already
//! followed by its emoji (optionally separated by whitespace) is left alone,
//! which makes annotation idempotent.
//!
//! Patterns are compiled once per [`FruitAnnotator`]. The process-wide default
//! annotator behind [`add_fruit_emojis`] and [`contains_enhanceable_fruits`] is
//! built lazily on first use and never mutated afterwards, so both functions
//! are safe to call from any thread.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Default lookup table, applied in this order.
///
/// Singular and plural forms are separate keys. `plum` shares the peach glyph
/// and `lime` the lemon glyph because the icon set has nothing closer.
pub const DEFAULT_FRUITS: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("apples", "🍎"),
    ("banana", "🍌"),
    ("bananas", "🍌"),
    ("cherry", "🍒"),
    ("cherries", "🍒"),
    ("orange", "🍊"),
    ("oranges", "🍊"),
    ("grape", "🍇"),
    ("grapes", "🍇"),
    ("strawberry", "🍓"),
    ("strawberries", "🍓"),
    ("watermelon", "🍉"),
    ("watermelons", "🍉"),
    ("pineapple", "🍍"),
    ("pineapples", "🍍"),
    ("mango", "🥭"),
    ("mangoes", "🥭"),
    ("kiwi", "🥝"),
    ("kiwis", "🥝"),
    ("pear", "🍐"),
    ("pears", "🍐"),
    ("peach", "🍑"),
    ("peaches", "🍑"),
    ("plum", "🍑"),
    ("lemon", "🍋"),
    ("lemons", "🍋"),
    ("lime", "🍋"),
    ("avocado", "🥑"),
    ("avocados", "🥑"),
    ("coconut", "🥥"),
    ("coconuts", "🥥"),
    ("blueberry", "🫐"),
    ("blueberries", "🫐"),
];

static DEFAULT_ANNOTATOR: LazyLock<Arc<FruitAnnotator>> =
    LazyLock::new(|| Arc::new(FruitAnnotator::with_defaults()));

/// A name must begin and end with a Unicode word character, the same set `\b` uses
static WORD_EDGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\w(?:.*\w)?$").expect("Invalid word edge regex"));

/// Annotate `text` using the default fruit table
pub fn add_fruit_emojis(text: &str) -> String {
    DEFAULT_ANNOTATOR.annotate(text)
}

/// Check whether [`add_fruit_emojis`] would change `text`
pub fn contains_enhanceable_fruits(text: &str) -> bool {
    DEFAULT_ANNOTATOR.contains_enhanceable(text)
}

/// The shared annotator over [`DEFAULT_FRUITS`]
pub fn default_annotator() -> &'static FruitAnnotator {
    &DEFAULT_ANNOTATOR
}

/// Another handle on the same annotator [`default_annotator`] returns
pub fn shared_default_annotator() -> Arc<FruitAnnotator> {
    Arc::clone(&DEFAULT_ANNOTATOR)
}

/// A `(name, emoji)` pair in the lookup table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FruitEntry {
    /// Lowercase fruit name, matched as a whole word
    pub name: String,
    /// Glyph appended after each match
    pub emoji: String,
}

impl FruitEntry {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
        }
        .normalized()
    }

    /// Lowercase and trim both fields (config-supplied entries skip `new`)
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_lowercase(),
            emoji: self.emoji.trim().to_string(),
        }
    }
}

/// Compiled match rule for one table entry
#[derive(Debug, Clone)]
struct FruitPattern {
    entry: FruitEntry,
    regex: Regex,
    /// `" <emoji>"`, inserted after each match
    suffix: String,
}

impl FruitPattern {
    fn compile(entry: FruitEntry) -> Result<Self> {
        let entry = entry.normalized();

        if entry.name.is_empty() {
            return Err(Error::invalid_fruit_entry(&entry.name, "name is empty"));
        }
        if entry.emoji.is_empty() {
            return Err(Error::invalid_fruit_entry(&entry.name, "emoji is empty"));
        }
        if !WORD_EDGES.is_match(&entry.name) {
            return Err(Error::invalid_fruit_entry(
                &entry.name,
                "name must start and end with a word character",
            ));
        }

        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&entry.name)))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_fruit_entry(&entry.name, e.to_string()))?;
        let suffix = format!(" {}", entry.emoji);

        Ok(Self {
            entry,
            regex,
            suffix,
        })
    }

    /// Whole-word matches not already followed by this entry's emoji
    fn pending_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.regex
            .find_iter(text)
            .filter(move |m| !self.is_annotated_at(text, m.end()))
            .map(|m| m.range())
    }

    fn is_annotated_at(&self, text: &str, end: usize) -> bool {
        text[end..].trim_start().starts_with(&self.entry.emoji)
    }
}

/// Appends fruit emojis to text using a fixed, precompiled lookup table
#[derive(Debug, Clone)]
pub struct FruitAnnotator {
    patterns: Vec<FruitPattern>,
}

impl FruitAnnotator {
    /// Build an annotator, rejecting the whole table if any entry is invalid
    /// or a name appears twice.
    pub fn try_new(entries: impl IntoIterator<Item = FruitEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for entry in entries {
            let pattern = FruitPattern::compile(entry)?;
            if !seen.insert(pattern.entry.name.clone()) {
                return Err(Error::invalid_fruit_entry(
                    &pattern.entry.name,
                    "duplicate name",
                ));
            }
            patterns.push(pattern);
        }

        debug!("Compiled {} fruit patterns", patterns.len());
        Ok(Self { patterns })
    }

    /// Build an annotator, skipping (and logging) invalid or duplicate entries
    pub fn new(entries: impl IntoIterator<Item = FruitEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for entry in entries {
            match FruitPattern::compile(entry) {
                Ok(pattern) if seen.insert(pattern.entry.name.clone()) => patterns.push(pattern),
                Ok(pattern) => warn!("Skipping duplicate fruit entry '{}'", pattern.entry.name),
                Err(e) => warn!("Skipping fruit entry: {}", e),
            }
        }

        Self { patterns }
    }

    /// Annotator over [`DEFAULT_FRUITS`]
    pub fn with_defaults() -> Self {
        Self::new(default_entries())
    }

    /// Append emojis after every unannotated whole-word fruit name.
    ///
    /// Matching is case-insensitive and the matched text keeps its casing.
    /// Entries are applied in table order, each on the output of the previous
    /// one. When anything was inserted, double spaces are collapsed and the
    /// result is trimmed; otherwise `text` comes back untouched.
    pub fn annotate(&self, text: &str) -> String {
        let mut output = text.to_string();
        let mut changed = false;

        for pattern in &self.patterns {
            let ends: Vec<usize> = pattern.pending_matches(&output).map(|r| r.end).collect();
            if ends.is_empty() {
                continue;
            }

            trace!(fruit = %pattern.entry.name, count = ends.len(), "annotating");

            // Back to front so earlier offsets stay valid
            for end in ends.into_iter().rev() {
                output.insert_str(end, &pattern.suffix);
            }
            changed = true;
        }

        if !changed {
            return output;
        }

        output.replace("  ", " ").trim().to_string()
    }

    /// True if [`annotate`](Self::annotate) would insert at least one emoji
    pub fn contains_enhanceable(&self, text: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.pending_matches(text).next().is_some())
    }

    /// Case-insensitive table lookup
    pub fn emoji_for(&self, name: &str) -> Option<&str> {
        let name = name.trim().to_lowercase();
        self.patterns
            .iter()
            .find(|p| p.entry.name == name)
            .map(|p| p.entry.emoji.as_str())
    }

    /// Table entries in application order
    pub fn entries(&self) -> impl Iterator<Item = &FruitEntry> {
        self.patterns.iter().map(|p| &p.entry)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for FruitAnnotator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// [`DEFAULT_FRUITS`] as owned entries
pub fn default_entries() -> Vec<FruitEntry> {
    DEFAULT_FRUITS
        .iter()
        .map(|(name, emoji)| FruitEntry::new(*name, *emoji))
        .collect()
}
