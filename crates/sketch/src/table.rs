use crate::features::SketchFeatures;
use crate::signal::{GeoShape, SketchSignal};

/// An authored branch of the classifier: a stable label plus the component
/// names it suggests, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rule {
    pub label: &'static str,
    pub names: &'static [&'static str],
}

const fn rule(label: &'static str, names: &'static [&'static str]) -> Rule {
    Rule { label, names }
}

const RECT_SMALL: Rule = rule(
    "geo.rectangle.small",
    &["Button", "Icon Button", "Badge", "Checkbox"],
);
const RECT_WIDE: Rule = rule(
    "geo.rectangle.wide",
    &["Input", "Textarea", "Progress", "Slider", "Tabs"],
);
const RECT_TALL: Rule = rule("geo.rectangle.tall", &["Drawer", "Menu", "Tree View"]);
const RECT_OTHER: Rule = rule(
    "geo.rectangle.container",
    &["Card", "Dialog", "Table", "Select"],
);

const ELLIPSE_SMALL: Rule = rule("geo.ellipse.small", &["Avatar", "Spinner", "Icon Button"]);
const ELLIPSE_ROUND: Rule = rule("geo.ellipse.round", &["Avatar", "Spinner", "Badge"]);
const ELLIPSE_OTHER: Rule = rule("geo.ellipse.stretched", &["Badge", "Button", "Avatar"]);

const TRIANGLE: Rule = rule("geo.triangle", &["Alert", "Tooltip"]);
const DIAMOND: Rule = rule("geo.diamond", &["Badge", "Alert", "Toast"]);
const POLYGON: Rule = rule("geo.polygon", &["Badge", "Avatar", "Icon Button"]);
const STAR: Rule = rule("geo.star", &["Rating Group", "Badge", "Icon Button"]);
const ARROW: Rule = rule("geo.arrow", &["Pagination", "Button", "Tabs"]);
const CHECK_BOX: Rule = rule("geo.check-box", &["Checkbox", "Switch", "Toggle Group"]);
const X_BOX: Rule = rule("geo.x-box", &["Dialog", "Alert", "Toast"]);
const CLOUD: Rule = rule("geo.cloud", &["Popover", "Hover Card", "Tooltip"]);
const HEART: Rule = rule("geo.heart", &["Rating Group", "Icon Button"]);
const GEO_UNKNOWN: Rule = rule("geo.unknown", &["Card", "Button", "Badge"]);

const CLOSED_SMALL: Rule = rule(
    "draw.closed.small",
    &["Avatar", "Checkbox", "Icon Button"],
);
const CLOSED_SQUARE: Rule = rule("draw.closed.squarish", &["Card", "Dialog", "Avatar"]);
const CLOSED_WIDE: Rule = rule(
    "draw.closed.wide",
    &["Input", "Button", "Progress", "Tabs"],
);
const CLOSED_TALL: Rule = rule("draw.closed.tall", &["Drawer", "Menu", "Select"]);
const CLOSED_OTHER: Rule = rule("draw.closed.container", &["Card", "Dialog", "Table"]);

const OPEN_WIDE: Rule = rule("draw.open.wide", &["Progress", "Slider", "Input", "Tabs"]);
const OPEN_TALL: Rule = rule("draw.open.tall", &["Drawer", "Menu", "Tree View"]);
const OPEN_SMALL: Rule = rule(
    "draw.open.small",
    &["Checkbox", "Switch", "Icon Button", "Badge"],
);
const OPEN_SCRIBBLE: Rule = rule(
    "draw.open.scribble",
    &["Card", "Button", "Text", "Input"],
);

/// Pick the authored branch for a signal. Branch order matters: the first
/// matching feature wins.
pub(crate) fn lookup(signal: &SketchSignal, f: &SketchFeatures) -> Rule {
    match signal {
        SketchSignal::Geometric { shape, .. } => geometric(shape, f),
        SketchSignal::Freehand { closed: true, .. } => closed_stroke(f),
        SketchSignal::Freehand { closed: false, .. } => open_stroke(f),
    }
}

fn geometric(shape: &GeoShape, f: &SketchFeatures) -> Rule {
    match shape {
        GeoShape::Rectangle if f.small => RECT_SMALL,
        GeoShape::Rectangle if f.wide => RECT_WIDE,
        GeoShape::Rectangle if f.tall => RECT_TALL,
        GeoShape::Rectangle => RECT_OTHER,
        GeoShape::Ellipse | GeoShape::Oval if f.squarish && f.small => ELLIPSE_SMALL,
        GeoShape::Ellipse | GeoShape::Oval if f.squarish => ELLIPSE_ROUND,
        GeoShape::Ellipse | GeoShape::Oval => ELLIPSE_OTHER,
        GeoShape::Triangle => TRIANGLE,
        GeoShape::Diamond => DIAMOND,
        GeoShape::Pentagon | GeoShape::Hexagon | GeoShape::Octagon => POLYGON,
        GeoShape::Star => STAR,
        GeoShape::ArrowRight | GeoShape::ArrowLeft | GeoShape::ArrowUp | GeoShape::ArrowDown => {
            ARROW
        }
        GeoShape::CheckBox => CHECK_BOX,
        GeoShape::XBox => X_BOX,
        GeoShape::Cloud => CLOUD,
        GeoShape::Heart => HEART,
        GeoShape::Other(_) => GEO_UNKNOWN,
    }
}

fn closed_stroke(f: &SketchFeatures) -> Rule {
    if f.squarish && f.small {
        CLOSED_SMALL
    } else if f.squarish {
        CLOSED_SQUARE
    } else if f.wide {
        CLOSED_WIDE
    } else if f.tall {
        CLOSED_TALL
    } else {
        CLOSED_OTHER
    }
}

fn open_stroke(f: &SketchFeatures) -> Rule {
    if f.wide {
        OPEN_WIDE
    } else if f.tall {
        OPEN_TALL
    } else if f.small {
        OPEN_SMALL
    } else {
        OPEN_SCRIBBLE
    }
}

/// Every authored rule, for consistency checks against a catalog.
pub(crate) const ALL_RULES: &[Rule] = &[
    RECT_SMALL,
    RECT_WIDE,
    RECT_TALL,
    RECT_OTHER,
    ELLIPSE_SMALL,
    ELLIPSE_ROUND,
    ELLIPSE_OTHER,
    TRIANGLE,
    DIAMOND,
    POLYGON,
    STAR,
    ARROW,
    CHECK_BOX,
    X_BOX,
    CLOUD,
    HEART,
    GEO_UNKNOWN,
    CLOSED_SMALL,
    CLOSED_SQUARE,
    CLOSED_WIDE,
    CLOSED_TALL,
    CLOSED_OTHER,
    OPEN_WIDE,
    OPEN_TALL,
    OPEN_SMALL,
    OPEN_SCRIBBLE,
];
