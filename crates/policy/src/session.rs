use intent_catalog::{Catalog, CatalogEntry};
use intent_sketch::{SketchClassifier, SketchSignal};
use intent_text::TextMatcher;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::collab::{Canvas, Choice, DisambiguationSurface, Placement, Transcript};
use crate::error::{PolicyError, Result};
use crate::geometry::{Bounds, ShapeId};
use crate::layout::PlacementLayout;
use crate::ledger::ShapeLedger;
use crate::profile::IntentProfile;
use crate::resolution::{PlacementScope, Prompt, Resolution, ResolutionPolicy};
use crate::settle::SettleDetector;

/// What one event did to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Interim transcript, or a shape that was already handled.
    Ignored,
    Placed { placement: Placement },
    Replaced { shape: ShapeId, placement: Placement },
    /// The user closed the picker; nothing changed.
    Dismissed { offered: usize },
}

/// Wires voice and sketch input through the resolvers and policy into a
/// canvas and a picker.
pub struct Session<'c, C, S> {
    matcher: TextMatcher<'c>,
    classifier: SketchClassifier<'c>,
    policy: ResolutionPolicy<'c>,
    layout: PlacementLayout,
    ledger: ShapeLedger,
    settle: SettleDetector,
    bounds: HashMap<ShapeId, Bounds>,
    clock: Duration,
    placed: usize,
    canvas: C,
    surface: S,
}

impl<'c, C, S> Session<'c, C, S>
where
    C: Canvas,
    S: DisambiguationSurface,
{
    pub fn new(catalog: &'c Catalog, profile: &IntentProfile, canvas: C, surface: S) -> Result<Self> {
        Ok(Self {
            matcher: TextMatcher::new(catalog, profile.text().clone())?,
            classifier: SketchClassifier::new(catalog, profile.sketch().clone())?,
            policy: ResolutionPolicy::new(catalog),
            layout: profile.placement().clone(),
            ledger: ShapeLedger::new(),
            settle: SettleDetector::new(profile.settle_window()),
            bounds: HashMap::new(),
            clock: Duration::ZERO,
            placed: 0,
            canvas,
            surface,
        })
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn ledger(&self) -> &ShapeLedger {
        &self.ledger
    }

    pub fn pending_shapes(&self) -> usize {
        self.settle.len()
    }

    pub fn into_parts(self) -> (C, S) {
        (self.canvas, self.surface)
    }

    pub fn on_transcript(&mut self, transcript: &Transcript) -> Result<Outcome> {
        if !transcript.is_final {
            log::trace!("Ignoring interim transcript '{}'", transcript.text);
            return Ok(Outcome::Ignored);
        }

        let verdict = self.matcher.resolve(&transcript.text);
        log::info!(
            "'{}' -> {} {:?}",
            transcript.text,
            verdict.kind().as_str(),
            verdict.names()
        );

        match self.policy.for_verdict(&verdict) {
            Resolution::Place(entry) => Ok(self.place_fresh(entry)),
            Resolution::Disambiguate(prompt) => self.ask(&prompt),
        }
    }

    /// A shape is still being drawn or resized.
    pub fn on_shape_changed(
        &mut self,
        id: ShapeId,
        signal: SketchSignal,
        bounds: Bounds,
        now: Duration,
    ) -> Vec<Result<Outcome>> {
        self.clock = self.clock.max(now);
        if self.ledger.contains(&id) {
            log::trace!("Shape {id} already classified, ignoring change");
        } else {
            self.bounds.insert(id.clone(), bounds);
            self.settle.observe(id, signal, now);
        }
        self.flush()
    }

    /// The canvas reports the shape finished; classify without waiting.
    pub fn on_shape_finalized(
        &mut self,
        id: ShapeId,
        signal: SketchSignal,
        bounds: Bounds,
    ) -> Vec<Result<Outcome>> {
        if self.ledger.contains(&id) {
            log::trace!("Shape {id} already classified, ignoring finalize");
            return vec![Ok(Outcome::Ignored)];
        }
        self.bounds.insert(id.clone(), bounds);
        self.settle.observe(id.clone(), signal, self.clock);
        self.settle.finalize(&id);
        self.flush()
    }

    /// The user deleted a shape. Pending updates are dropped and the id may
    /// be classified again if it reappears. Returns `false` for unknown shapes.
    pub fn on_shape_deleted(&mut self, id: &ShapeId) -> bool {
        self.bounds.remove(id);
        let pending = self.settle.forget(id);
        let classified = self.ledger.forget(id);
        log::debug!("Shape {id} deleted (pending: {pending}, classified: {classified})");
        pending || classified
    }

    /// Advance time; classifies every shape that has settled since.
    pub fn tick(&mut self, now: Duration) -> Vec<Result<Outcome>> {
        self.clock = self.clock.max(now);
        self.flush()
    }

    fn flush(&mut self) -> Vec<Result<Outcome>> {
        self.settle
            .drain_settled(self.clock)
            .into_iter()
            .map(|(id, signal)| self.on_settled(id, signal))
            .collect()
    }

    fn on_settled(&mut self, id: ShapeId, signal: SketchSignal) -> Result<Outcome> {
        let bounds = self.bounds.remove(&id).unwrap_or_default();
        if !self.ledger.mark(id.clone()) {
            return Ok(Outcome::Ignored);
        }

        let classification = self.classifier.classify(&signal);
        log::info!(
            "Shape {id} settled as {} {:?}",
            classification.rule,
            classification.names()
        );

        let resolution = self.policy.for_sketch(id, bounds, classification);
        match resolution {
            Resolution::Place(entry) => Ok(self.place_fresh(entry)),
            Resolution::Disambiguate(prompt) => self.ask(&prompt),
        }
    }

    fn ask(&mut self, prompt: &Prompt<'c>) -> Result<Outcome> {
        match self.surface.present(prompt) {
            Choice::Dismissed => {
                log::debug!("Picker dismissed ({} offered)", prompt.candidates.len());
                Ok(Outcome::Dismissed {
                    offered: prompt.candidates.len(),
                })
            }
            Choice::Selected(name) => {
                let entry = prompt
                    .find(&name)
                    .ok_or(PolicyError::UnknownChoice { name })?;
                Ok(self.apply(entry, &prompt.scope))
            }
        }
    }

    fn apply(&mut self, entry: &CatalogEntry, scope: &PlacementScope) -> Outcome {
        match scope {
            PlacementScope::Fresh => self.place_fresh(entry),
            PlacementScope::ReplaceSketch { shape, bounds } => {
                let placement = Placement::new(entry, *bounds);
                self.canvas.remove_shape(shape);
                self.canvas.place(&placement);
                log::info!("Replaced sketch {shape} with {}", entry.name);
                Outcome::Replaced {
                    shape: shape.clone(),
                    placement,
                }
            }
        }
    }

    fn place_fresh(&mut self, entry: &CatalogEntry) -> Outcome {
        let bounds = self.layout.slot(self.placed, self.canvas.viewport_center());
        self.placed += 1;
        let placement = Placement::new(entry, bounds);
        self.canvas.place(&placement);
        log::info!("Placed {} at ({:.0}, {:.0})", entry.name, bounds.x, bounds.y);
        Outcome::Placed { placement }
    }
}
