//! The bundled component set, in authorship order.
//!
//! Order matters: it is the tie-break for exact matches and the order in
//! which the full catalog is offered when nothing else fits.

use crate::entry::{CatalogEntry, Category};

struct Authored {
    name: &'static str,
    aliases: &'static [&'static str],
    keywords: &'static [&'static str],
    category: Category,
}

const AUTHORED: &[Authored] = &[
    Authored {
        name: "Accordion",
        aliases: &["collapse", "expandable", "collapsible"],
        keywords: &["expand", "faq", "sections", "toggle"],
        category: Category::Interactive,
    },
    Authored {
        name: "Alert",
        aliases: &["notification", "banner", "message"],
        keywords: &["warning", "info", "error", "success", "notice"],
        category: Category::Feedback,
    },
    Authored {
        name: "Avatar",
        aliases: &["profile", "user-image", "photo"],
        keywords: &["user", "picture", "identity", "circle"],
        category: Category::Display,
    },
    Authored {
        name: "Badge",
        aliases: &["tag", "chip", "label"],
        keywords: &["status", "count", "indicator", "pill"],
        category: Category::Display,
    },
    Authored {
        name: "Button",
        aliases: &["btn", "click", "press", "action"],
        keywords: &["submit", "cta", "action", "click", "press"],
        category: Category::Form,
    },
    Authored {
        name: "Card",
        aliases: &["panel", "tile", "container"],
        keywords: &["content", "box", "section", "wrapper"],
        category: Category::Layout,
    },
    Authored {
        name: "Checkbox",
        aliases: &["check", "tick", "checkmark"],
        keywords: &["toggle", "select", "boolean", "option"],
        category: Category::Form,
    },
    Authored {
        name: "Code",
        aliases: &["snippet", "codeblock", "source"],
        keywords: &["programming", "syntax", "monospace"],
        category: Category::Display,
    },
    Authored {
        name: "Date Picker",
        aliases: &["datepicker", "calendar", "date-select"],
        keywords: &["date", "calendar", "schedule", "pick a date"],
        category: Category::Form,
    },
    Authored {
        name: "Dialog",
        aliases: &["modal", "popup", "lightbox"],
        keywords: &["overlay", "confirm", "alert", "prompt", "window"],
        category: Category::Overlay,
    },
    Authored {
        name: "Drawer",
        aliases: &["sidebar", "side-panel", "slide"],
        keywords: &["panel", "slide", "navigation", "off-canvas"],
        category: Category::Overlay,
    },
    Authored {
        name: "Heading",
        aliases: &["title", "header", "h1", "h2", "h3"],
        keywords: &["text", "title", "headline"],
        category: Category::Display,
    },
    Authored {
        name: "Hover Card",
        aliases: &["hovercard", "preview-card", "popover-preview"],
        keywords: &["hover", "preview", "tooltip-card"],
        category: Category::Overlay,
    },
    Authored {
        name: "Icon Button",
        aliases: &["icon-btn", "round-button"],
        keywords: &["icon", "action", "circle-button"],
        category: Category::Form,
    },
    Authored {
        name: "Input",
        aliases: &["text-input", "textfield", "text-box"],
        keywords: &["type", "enter", "field", "form", "text"],
        category: Category::Form,
    },
    Authored {
        name: "Menu",
        aliases: &["dropdown", "dropdown-menu", "context-menu"],
        keywords: &["options", "actions", "list", "select"],
        category: Category::Interactive,
    },
    Authored {
        name: "Number Input",
        aliases: &["number-field", "stepper", "numeric"],
        keywords: &["number", "quantity", "increment", "counter"],
        category: Category::Form,
    },
    Authored {
        name: "Pagination",
        aliases: &["pager", "page-nav"],
        keywords: &["pages", "navigate", "next", "previous"],
        category: Category::Navigation,
    },
    Authored {
        name: "Pin Input",
        aliases: &["otp", "verification-code", "pin-code"],
        keywords: &["code", "verify", "otp", "pin"],
        category: Category::Form,
    },
    Authored {
        name: "Popover",
        aliases: &["popup", "bubble", "dropdown-content"],
        keywords: &["overlay", "float", "tooltip", "info"],
        category: Category::Overlay,
    },
    Authored {
        name: "Progress",
        aliases: &["progress-bar", "loading-bar", "meter"],
        keywords: &["loading", "percent", "status", "bar"],
        category: Category::Feedback,
    },
    Authored {
        name: "Radio Group",
        aliases: &["radio", "radio-button", "option-group"],
        keywords: &["select", "choose", "option", "single"],
        category: Category::Form,
    },
    Authored {
        name: "Rating Group",
        aliases: &["rating", "stars", "star-rating"],
        keywords: &["rate", "review", "score", "stars"],
        category: Category::Interactive,
    },
    Authored {
        name: "Select",
        aliases: &["dropdown-select", "picker", "combobox"],
        keywords: &["choose", "option", "list", "pick"],
        category: Category::Form,
    },
    Authored {
        name: "Skeleton",
        aliases: &["placeholder", "loading-skeleton", "shimmer"],
        keywords: &["loading", "placeholder", "ghost"],
        category: Category::Feedback,
    },
    Authored {
        name: "Slider",
        aliases: &["range", "range-slider", "scrubber"],
        keywords: &["slide", "range", "value", "drag"],
        category: Category::Form,
    },
    Authored {
        name: "Spinner",
        aliases: &["loader", "loading", "busy"],
        keywords: &["loading", "wait", "progress", "spin"],
        category: Category::Feedback,
    },
    Authored {
        name: "Switch",
        aliases: &["toggle", "toggle-switch", "on-off"],
        keywords: &["toggle", "boolean", "on", "off", "enable"],
        category: Category::Form,
    },
    Authored {
        name: "Table",
        aliases: &["data-table", "grid", "spreadsheet"],
        keywords: &["rows", "columns", "data", "list"],
        category: Category::Display,
    },
    Authored {
        name: "Tabs",
        aliases: &["tab-bar", "tab-list", "tab-group"],
        keywords: &["navigate", "switch", "sections", "views"],
        category: Category::Navigation,
    },
    Authored {
        name: "Tags Input",
        aliases: &["tag-input", "chip-input", "multi-input"],
        keywords: &["tags", "labels", "chips", "multi"],
        category: Category::Form,
    },
    Authored {
        name: "Text",
        aliases: &["paragraph", "body", "copy"],
        keywords: &["text", "content", "paragraph", "prose"],
        category: Category::Display,
    },
    Authored {
        name: "Textarea",
        aliases: &["text-area", "multiline", "comment-box"],
        keywords: &["multiline", "long text", "comment", "message"],
        category: Category::Form,
    },
    Authored {
        name: "Toast",
        aliases: &["snackbar", "notification", "flash"],
        keywords: &["message", "alert", "temporary", "popup"],
        category: Category::Feedback,
    },
    Authored {
        name: "Toggle Group",
        aliases: &["button-group", "segmented-control"],
        keywords: &["group", "toggle", "segment", "options"],
        category: Category::Interactive,
    },
    Authored {
        name: "Tooltip",
        aliases: &["hint", "info-tip", "help-text"],
        keywords: &["hover", "info", "help", "tip"],
        category: Category::Overlay,
    },
    Authored {
        name: "Tree View",
        aliases: &["tree", "file-tree", "hierarchy"],
        keywords: &["tree", "nested", "expand", "files", "folders"],
        category: Category::Interactive,
    },
];

pub(crate) fn authored_entries() -> Vec<CatalogEntry> {
    AUTHORED
        .iter()
        .map(|authored| {
            CatalogEntry::new(authored.name, authored.category)
                .aliases(authored.aliases.iter().copied())
                .keywords(authored.keywords.iter().copied())
        })
        .collect()
}
