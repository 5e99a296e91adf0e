//! Drive a session from a newline-delimited JSON event script and report
//! what the canvas and picker saw.

use anyhow::{Context, Result};
use intent_catalog::Catalog;
use intent_policy::{
    Bounds, Canvas, Choice, DisambiguationSurface, IntentProfile, Outcome, Placement,
    PlacementScope, Point, Prompt, Session, ShapeId, Transcript,
};
use intent_sketch::SketchSignal;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::BufRead;
use std::rc::Rc;
use std::time::Duration;

/// One line of a replay script.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case", deny_unknown_fields)]
pub enum ReplayEvent {
    Transcript {
        text: String,
        #[serde(default = "yes", rename = "final")]
        is_final: bool,
    },
    Shape {
        id: ShapeId,
        signal: SketchSignal,
        bounds: Bounds,
        at_ms: u64,
    },
    Finalize {
        id: ShapeId,
        signal: SketchSignal,
        bounds: Bounds,
    },
    Delete {
        id: ShapeId,
    },
    Tick {
        at_ms: u64,
    },
    Choose {
        name: String,
    },
    Dismiss,
    Viewport {
        x: f64,
        y: f64,
    },
}

fn yes() -> bool {
    true
}

/// Everything observable from outside the core, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ReplayLine {
    Prompt {
        candidates: Vec<String>,
        full_catalog: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        replaces: Option<ShapeId>,
    },
    Place(Placement),
    Remove { shape: ShapeId },
    Rejected { reason: String },
}

type Journal = Rc<RefCell<Vec<ReplayLine>>>;

struct JournalCanvas {
    center: Point,
    journal: Journal,
}

impl Canvas for JournalCanvas {
    fn viewport_center(&self) -> Point {
        self.center
    }

    fn place(&mut self, placement: &Placement) {
        self.journal
            .borrow_mut()
            .push(ReplayLine::Place(placement.clone()));
    }

    fn remove_shape(&mut self, shape: &ShapeId) {
        self.journal.borrow_mut().push(ReplayLine::Remove {
            shape: shape.clone(),
        });
    }
}

struct ScriptedPicker {
    answers: VecDeque<Choice>,
    journal: Journal,
}

impl DisambiguationSurface for ScriptedPicker {
    fn present(&mut self, prompt: &Prompt<'_>) -> Choice {
        let replaces = match &prompt.scope {
            PlacementScope::Fresh => None,
            PlacementScope::ReplaceSketch { shape, .. } => Some(shape.clone()),
        };
        self.journal.borrow_mut().push(ReplayLine::Prompt {
            candidates: prompt.names().into_iter().map(str::to_string).collect(),
            full_catalog: prompt.full_catalog,
            replaces,
        });
        self.answers.pop_front().unwrap_or_else(|| {
            log::warn!("No scripted answer for prompt, dismissing");
            Choice::Dismissed
        })
    }
}

pub struct Replay<'c> {
    session: Session<'c, JournalCanvas, ScriptedPicker>,
    journal: Journal,
}

impl<'c> Replay<'c> {
    pub fn new(catalog: &'c Catalog, profile: &IntentProfile) -> Result<Self> {
        let journal: Journal = Rc::default();
        let canvas = JournalCanvas {
            center: Point::default(),
            journal: Rc::clone(&journal),
        };
        let picker = ScriptedPicker {
            answers: VecDeque::new(),
            journal: Rc::clone(&journal),
        };
        let session = Session::new(catalog, profile, canvas, picker)
            .context("Failed to start replay session")?;
        Ok(Self { session, journal })
    }

    /// Apply one event and return the lines it produced.
    pub fn apply(&mut self, event: ReplayEvent) -> Vec<ReplayLine> {
        let outcomes = match event {
            ReplayEvent::Transcript { text, is_final } => {
                let transcript = Transcript { text, is_final };
                vec![self.session.on_transcript(&transcript)]
            }
            ReplayEvent::Shape {
                id,
                signal,
                bounds,
                at_ms,
            } => self
                .session
                .on_shape_changed(id, signal, bounds, Duration::from_millis(at_ms)),
            ReplayEvent::Finalize { id, signal, bounds } => {
                self.session.on_shape_finalized(id, signal, bounds)
            }
            ReplayEvent::Delete { id } => {
                if !self.session.on_shape_deleted(&id) {
                    log::debug!("Deleted shape {id} was never tracked");
                }
                Vec::new()
            }
            ReplayEvent::Tick { at_ms } => self.session.tick(Duration::from_millis(at_ms)),
            ReplayEvent::Choose { name } => {
                self.session
                    .surface_mut()
                    .answers
                    .push_back(Choice::Selected(name));
                Vec::new()
            }
            ReplayEvent::Dismiss => {
                self.session
                    .surface_mut()
                    .answers
                    .push_back(Choice::Dismissed);
                Vec::new()
            }
            ReplayEvent::Viewport { x, y } => {
                self.session.canvas_mut().center = Point::new(x, y);
                Vec::new()
            }
        };

        for outcome in outcomes {
            match outcome {
                Ok(Outcome::Dismissed { offered }) => log::debug!("Dismissed {offered} candidates"),
                Ok(_) => {}
                Err(err) => self.journal.borrow_mut().push(ReplayLine::Rejected {
                    reason: err.to_string(),
                }),
            }
        }

        self.journal.borrow_mut().drain(..).collect()
    }
}

/// Read a whole script. Blank lines and `#` comments are skipped.
pub fn read_events(reader: impl BufRead) -> Result<Vec<ReplayEvent>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed)
            .with_context(|| format!("Invalid replay event on line {}", idx + 1))?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn replay(script: &str) -> Vec<ReplayLine> {
        let profile = IntentProfile::default_profile();
        let mut replay = Replay::new(Catalog::builtin(), &profile).unwrap();
        read_events(script.as_bytes())
            .unwrap()
            .into_iter()
            .flat_map(|event| replay.apply(event))
            .collect()
    }

    #[test]
    fn voice_then_sketch() {
        let lines = replay(
            r#"
            # place directly
            {"event":"transcript","text":"btn"}
            {"event":"choose","name":"Avatar"}
            {"event":"finalize","id":"s1","signal":{"kind":"draw","width":60,"height":55,"closed":true},"bounds":{"x":10,"y":20,"width":60,"height":55}}
            "#,
        );
        assert_eq!(lines.len(), 4);
        assert!(matches!(&lines[0], ReplayLine::Place(p) if p.component == "Button"));
        assert_eq!(
            lines[1],
            ReplayLine::Prompt {
                candidates: vec!["Avatar".into(), "Checkbox".into(), "Icon Button".into()],
                full_catalog: false,
                replaces: Some("s1".into()),
            }
        );
        assert_eq!(lines[2], ReplayLine::Remove { shape: "s1".into() });
        assert_eq!(
            lines[3],
            ReplayLine::Place(Placement {
                component: "Avatar".into(),
                bounds: Bounds::new(10.0, 20.0, 60.0, 55.0),
            })
        );
    }

    #[test]
    fn deleted_shape_is_not_classified() {
        let lines = replay(
            r#"{"event":"shape","id":"s2","signal":{"kind":"geo","shape":"star","width":30,"height":30},"bounds":{"x":0,"y":0,"width":30,"height":30},"at_ms":0}
            {"event":"delete","id":"s2"}
            {"event":"tick","at_ms":1000}"#,
        );
        assert!(lines.is_empty(), "{lines:?}");
    }

    #[test]
    fn interim_transcripts_produce_nothing() {
        let lines = replay(r#"{"event":"transcript","text":"button","final":false}"#);
        assert!(lines.is_empty());
    }

    #[test]
    fn viewport_moves_fresh_placements() {
        let lines = replay(
            r#"{"event":"viewport","x":1000,"y":500}
            {"event":"transcript","text":"avatar"}"#,
        );
        assert_eq!(
            lines,
            vec![ReplayLine::Place(Placement {
                component: "Avatar".into(),
                bounds: Bounds::new(340.0, 280.0, 300.0, 200.0),
            })]
        );
    }

    #[test]
    fn rejected_choice_is_reported() {
        let lines = replay(
            r#"{"event":"choose","name":"Table"}
            {"event":"transcript","text":"hover"}"#,
        );
        assert!(matches!(lines.last(), Some(ReplayLine::Rejected { reason }) if reason.contains("Table")));
    }

    #[test]
    fn bad_line_reports_its_number() {
        let err = read_events("{\"event\":\"tick\",\"at_ms\":1}\n{\"event\":\"jump\"}\n".as_bytes())
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn replay_lines_serialize_with_command_tag() {
        let json = serde_json::to_value(ReplayLine::Remove { shape: "s9".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"command": "remove", "shape": "s9"}));

        let place = serde_json::to_value(ReplayLine::Place(Placement {
            component: "Card".into(),
            bounds: Bounds::new(0.0, 0.0, 1.0, 1.0),
        }))
        .unwrap();
        assert_eq!(place["command"], "place");
        assert_eq!(place["component"], "Card");
    }
}
