use intent_catalog::CatalogEntry;
use intent_policy::IntentProfile;
use intent_sketch::{SketchClassification, SketchFeatures, SketchSignal};
use intent_text::{MatchVerdict, ScoredEntry};

use crate::preview::preview;
use crate::replay::ReplayLine;

pub fn render_verdict(phrase: &str, verdict: &MatchVerdict<'_>, ranking: Option<&[ScoredEntry<'_>]>) -> String {
    let mut out = String::new();
    match verdict {
        MatchVerdict::Exact(entry) | MatchVerdict::Fuzzy(entry) => {
            out.push_str(&format!(
                "'{}' -> {} ({})\n\n",
                truncate_one_line(phrase, 60),
                entry.name,
                verdict.kind().as_str()
            ));
            out.push_str(&preview(&entry.name));
        }
        MatchVerdict::Ambiguous(entries) => {
            out.push_str(&format!(
                "'{}' is ambiguous, pick one:\n",
                truncate_one_line(phrase, 60)
            ));
            for (idx, entry) in entries.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", idx + 1, entry.name));
            }
            out.pop();
        }
        MatchVerdict::NoMatch => {
            out.push_str(&format!(
                "'{}' matched nothing; the whole catalog would be offered",
                truncate_one_line(phrase, 60)
            ));
        }
    }

    if let Some(ranking) = ranking {
        out.push_str("\n\n| rank | component | distance | field |\n");
        out.push_str("|---:|---|---:|---|\n");
        for (idx, scored) in ranking.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {:.3} | {} |\n",
                idx + 1,
                escape_cell(&scored.entry.name),
                scored.distance,
                field_label(scored),
            ));
        }
        out.pop();
    }
    out
}

pub fn render_classification(
    signal: &SketchSignal,
    features: &SketchFeatures,
    classification: &SketchClassification<'_>,
) -> String {
    let (width, height) = signal.size();
    let mut flags = Vec::new();
    for (on, label) in [
        (features.wide, "wide"),
        (features.tall, "tall"),
        (features.squarish, "squarish"),
        (features.small, "small"),
    ] {
        if on {
            flags.push(label);
        }
    }

    let mut out = format!(
        "{width}x{height} aspect {:.2} [{}] via {}\n",
        features.aspect_ratio,
        flags.join(", "),
        classification.rule
    );
    if classification.is_empty() {
        out.push_str("  (no candidates in this catalog)");
        return out;
    }
    for (idx, entry) in classification.candidates.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, entry.name));
    }
    out.pop();
    out
}

pub fn render_catalog<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> String {
    let mut md = String::new();
    md.push_str("| component | category | aliases | keywords |\n");
    md.push_str("|---|---|---|---|\n");
    for entry in entries {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_cell(&entry.name),
            entry.category,
            escape_cell(&entry.aliases.join(", ")),
            escape_cell(&truncate_one_line(&entry.keywords.join(", "), 60)),
        ));
    }
    md.pop();
    md
}

pub fn render_replay_line(line: &ReplayLine) -> String {
    match line {
        ReplayLine::Prompt {
            candidates,
            full_catalog,
            replaces,
        } => {
            let target = replaces
                .as_ref()
                .map_or_else(String::new, |shape| format!(" for {shape}"));
            if *full_catalog {
                format!("? pick any of {} components{target}", candidates.len())
            } else {
                format!("? pick one{target}: {}", candidates.join(" | "))
            }
        }
        ReplayLine::Place(placement) => format!(
            "+ {} at ({:.0}, {:.0}) {:.0}x{:.0}\n{}",
            placement.component,
            placement.bounds.x,
            placement.bounds.y,
            placement.bounds.width,
            placement.bounds.height,
            preview(&placement.component)
        ),
        ReplayLine::Remove { shape } => format!("- removed sketch {shape}"),
        ReplayLine::Rejected { reason } => format!("! {reason}"),
    }
}

pub fn render_profile(profile: &IntentProfile) -> String {
    let text = profile.text();
    let sketch = profile.sketch();
    let placement = profile.placement();
    let mut out = match profile.description() {
        Some(description) => format!("{}: {description}\n", profile.name()),
        None => format!("{}\n", profile.name()),
    };
    out.push_str(&format!(
        "  text: tight {} / runner-up {} / loose {} / accept {}, up to {} candidates\n",
        text.tight, text.runner_up, text.loose, text.accept, text.max_candidates
    ));
    out.push_str(&format!(
        "  sketch: wide > {}, tall < {}, squarish {}..{}, small < {}\n",
        sketch.wide, sketch.tall, sketch.squarish.0, sketch.squarish.1, sketch.small
    ));
    out.push_str(&format!(
        "  placement: {} columns of {}x{} boxes\n",
        placement.columns, placement.box_width, placement.box_height
    ));
    out.push_str(&format!(
        "  settle window: {} ms",
        profile.settle_window().as_millis()
    ));
    out
}

fn field_label(scored: &ScoredEntry<'_>) -> &'static str {
    match scored.field {
        intent_text::MatchField::Name => "name",
        intent_text::MatchField::Aliases => "aliases",
        intent_text::MatchField::Keywords => "keywords",
    }
}

fn truncate_one_line(text: &str, max_chars: usize) -> String {
    let s = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.chars().count() <= max_chars {
        return s;
    }
    let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{truncated}…")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use intent_catalog::Catalog;
    use intent_policy::{Bounds, Placement};
    use intent_sketch::{GeoShape, SketchClassifier};
    use intent_text::TextMatcher;

    #[test]
    fn confident_verdict_shows_preview() {
        let matcher = TextMatcher::builtin();
        let out = render_verdict("btn", &matcher.resolve("btn"), None);
        assert!(out.starts_with("'btn' -> Button (exact)"), "{out}");
        assert!(out.contains("Click me"), "{out}");
    }

    #[test]
    fn ranking_table_lists_distances() {
        let matcher = TextMatcher::builtin();
        let ranking = matcher.rank("hover");
        let out = render_verdict("hover", &matcher.resolve("hover"), Some(&ranking));
        assert!(out.contains("is ambiguous"), "{out}");
        assert!(out.contains("| rank | component | distance | field |"), "{out}");
        assert!(out.contains("| 1 | Hover Card |"), "{out}");
    }

    #[test]
    fn no_match_mentions_full_catalog() {
        let out = render_verdict("xyzzy", &MatchVerdict::NoMatch, None);
        assert!(out.contains("whole catalog"), "{out}");
    }

    #[test]
    fn classification_lists_flags_and_candidates() {
        let classifier = SketchClassifier::builtin();
        let signal = SketchSignal::geo(GeoShape::Rectangle, 400.0, 40.0);
        let out = render_classification(
            &signal,
            &classifier.features(&signal),
            &classifier.classify(&signal),
        );
        assert!(out.starts_with("400x40 aspect 10.00 [wide] via geo.rectangle.wide"), "{out}");
        assert!(out.contains("  1. Input"), "{out}");
    }

    #[test]
    fn catalog_table_escapes_pipes() {
        let catalog = Catalog::from_json(
            br#"[{"name": "A|B", "category": "form", "aliases": ["ab"]}]"#,
        )
        .unwrap();
        let md = render_catalog(catalog.iter());
        assert!(md.contains("| A\\|B | form | ab |  |"), "{md}");
    }

    #[test]
    fn profile_summary_leads_with_description() {
        let strict = IntentProfile::builtin("strict").unwrap();
        let out = render_profile(&strict);
        assert!(out.starts_with("strict: Places only near-certain matches"), "{out}");
        assert!(out.contains("tight 0.12 / runner-up 0.4 / loose 0.35 / accept 0.5"), "{out}");
        assert!(out.contains("small < 64"), "{out}");
        assert!(out.ends_with("settle window: 500 ms"), "{out}");
    }

    #[test]
    fn replay_lines_render_compactly() {
        let prompt = ReplayLine::Prompt {
            candidates: vec!["Card".into(), "Dialog".into()],
            full_catalog: false,
            replaces: Some("s1".into()),
        };
        assert_eq!(render_replay_line(&prompt), "? pick one for s1: Card | Dialog");

        let place = ReplayLine::Place(Placement {
            component: "Badge".into(),
            bounds: Bounds::new(-10.0, 5.0, 300.0, 200.0),
        });
        assert_eq!(render_replay_line(&place), "+ Badge at (-10, 5) 300x200\n( New )");
    }
}
