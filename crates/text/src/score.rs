use intent_catalog::{fold, CatalogEntry};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::tuning::MatchTuning;

/// Which field produced an entry's best distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Name,
    Aliases,
    Keywords,
}

/// A searchable string, pre-folded and pre-encoded for the subsequence matcher.
pub(crate) struct FieldText {
    folded: String,
    haystack: Utf32String,
    compact_len: usize,
}

impl FieldText {
    pub(crate) fn new(raw: &str) -> Self {
        let folded = fold(raw);
        Self {
            haystack: Utf32String::from(folded.as_str()),
            compact_len: compact_len(&folded),
            folded,
        }
    }
}

pub(crate) struct IndexedEntry {
    name: FieldText,
    aliases: Vec<FieldText>,
    keywords: Vec<FieldText>,
}

impl IndexedEntry {
    pub(crate) fn new(entry: &CatalogEntry) -> Self {
        Self {
            name: FieldText::new(&entry.name),
            aliases: entry.aliases.iter().map(|a| FieldText::new(a)).collect(),
            keywords: entry.keywords.iter().map(|k| FieldText::new(k)).collect(),
        }
    }

    /// Weighted distance of the closest field, with the field that produced it.
    pub(crate) fn distance(
        &self,
        query: &Query,
        exponents: [f64; 3],
        matcher: &mut Matcher,
    ) -> (f64, MatchField) {
        let fields = [
            (MatchField::Name, std::slice::from_ref(&self.name)),
            (MatchField::Aliases, self.aliases.as_slice()),
            (MatchField::Keywords, self.keywords.as_slice()),
        ];

        let mut best = (1.0, MatchField::Name);
        for ((field, values), exponent) in fields.into_iter().zip(exponents) {
            let raw = values
                .iter()
                .map(|value| query.distance_to(value, matcher))
                .fold(1.0_f64, f64::min);
            let weighted = raw.powf(exponent);
            if weighted < best.0 {
                best = (weighted, field);
            }
        }
        best
    }
}

/// One way of reading the spoken phrase, with the penalty paid for using it.
struct Variant {
    text: String,
    compact_len: usize,
    pattern: Option<Pattern>,
    penalty: f64,
}

impl Variant {
    fn new(text: String, penalty: f64) -> Self {
        let compact_len = compact_len(&text);
        let pattern = (compact_len > 0).then(|| {
            Pattern::new(
                &text,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )
        });
        Self {
            text,
            compact_len,
            pattern,
            penalty,
        }
    }

    fn distance_to(&self, value: &FieldText, matcher: &mut Matcher) -> f64 {
        let mut distance = edit_distance(&self.text, &value.folded);

        if let Some(pattern) = &self.pattern {
            if value.compact_len > 0
                && pattern.score(value.haystack.slice(..), matcher).is_some()
            {
                let coverage = (self.compact_len as f64 / value.compact_len as f64).min(1.0);
                distance = distance.min(1.0 - coverage);
            }
        }

        (distance + self.penalty).min(1.0)
    }
}

/// The normalized phrase plus its filler-free and per-word readings.
pub(crate) struct Query {
    variants: Vec<Variant>,
}

impl Query {
    pub(crate) fn new(normalized: &str, tuning: &MatchTuning) -> Self {
        let mut variants = vec![Variant::new(normalized.to_string(), 0.0)];

        let words: Vec<&str> = normalized.unicode_words().collect();
        let significant: Vec<&str> = words
            .iter()
            .copied()
            .filter(|word| !tuning.is_stop_word(word))
            .collect();

        if !significant.is_empty() && significant.len() < words.len() {
            variants.push(Variant::new(significant.join(" "), tuning.filler_penalty));
        }

        if significant.len() > 1 {
            for word in &significant {
                variants.push(Variant::new(word.to_string(), tuning.token_penalty));
            }
        }

        Self { variants }
    }

    fn distance_to(&self, value: &FieldText, matcher: &mut Matcher) -> f64 {
        self.variants
            .iter()
            .map(|variant| variant.distance_to(value, matcher))
            .fold(1.0_f64, f64::min)
    }
}

fn edit_distance(a: &str, b: &str) -> f64 {
    1.0 - strsim::normalized_damerau_levenshtein(a, b)
}

fn compact_len(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphanumeric()).count()
}
