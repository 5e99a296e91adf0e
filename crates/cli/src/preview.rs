//! Text stand-ins for placed components, keyed by component name.

/// ASCII preview for a component; unknown names get a labelled box.
pub fn preview(name: &str) -> String {
    let art: &[&str] = match name {
        "Accordion" => &["▸ Section one", "▾ Section two", "    details…", "▸ Section three"],
        "Alert" => &["┌────────────────────────┐", "│ ⚠ Heads up! Check this │", "└────────────────────────┘"],
        "Avatar" => &[" ╭───╮", " │ JD│", " ╰───╯"],
        "Badge" => &["( New )"],
        "Button" => &["[  Click me  ]"],
        "Card" => &["┌──────────────┐", "│ Card title   │", "│ Body text…   │", "└──────────────┘"],
        "Checkbox" => &["[x] Accept terms"],
        "Code" => &["┌──────────────────┐", "│ $ npm run dev    │", "└──────────────────┘"],
        "Date Picker" => &["┌─ March 2025 ─────┐", "│ Mo Tu We Th Fr   │", "│  3  4 [5] 6  7   │", "└──────────────────┘"],
        "Dialog" => &["┌─ Confirm ────────────┐", "│ Are you sure?        │", "│   [Cancel] [Confirm] │", "└──────────────────────┘"],
        "Drawer" => &["┌────────┐", "│ Menu   │", "│ ─────  │", "│ Item 1 │", "│ Item 2 │", "└────────┘"],
        "Heading" => &["# Page heading"],
        "Hover Card" => &["@username", "┌───────────────┐", "│ ◉ Bio preview │", "└───────────────┘"],
        "Icon Button" => &["[ ★ ]"],
        "Input" => &["Label", "┌──────────────────┐", "│ Type here…       │", "└──────────────────┘"],
        "Menu" => &["┌──────────┐", "│ Edit     │", "│ Duplicate│", "│ Delete   │", "└──────────┘"],
        "Number Input" => &["┌──────────┬───┐", "│ 42       │ ± │", "└──────────┴───┘"],
        "Pagination" => &["‹ 1 [2] 3 4 5 ›"],
        "Pin Input" => &["[4] [2] [ ] [ ]"],
        "Popover" => &["  [Open]", "┌──────────────┐", "│ Popover body │", "└──────────────┘"],
        "Progress" => &["████████░░░░ 66%"],
        "Radio Group" => &["(•) Default", "( ) Comfortable", "( ) Compact"],
        "Rating Group" => &["★★★★☆"],
        "Select" => &["┌──────────────┬───┐", "│ Pick one     │ ▾ │", "└──────────────┴───┘"],
        "Skeleton" => &["░░░░░░░░░░░░", "░░░░░░░░", "░░░░░░░░░░"],
        "Slider" => &["├──────●─────────┤"],
        "Spinner" => &["◌ Loading…"],
        "Switch" => &["(●──) On"],
        "Table" => &["┌──────┬───────┐", "│ Name │ Role  │", "├──────┼───────┤", "│ Ada  │ Admin │", "└──────┴───────┘"],
        "Tabs" => &["[ Account ]  Password   Settings", "─────────────────────────────────"],
        "Tags Input" => &["[react ×] [rust ×] add tag…"],
        "Text" => &["The quick brown fox jumps over the lazy dog."],
        "Textarea" => &["┌──────────────────┐", "│ Your message…    │", "│                  │", "└──────────────────┘"],
        "Toast" => &["┌────────────────────┐", "│ ✓ Saved changes  × │", "└────────────────────┘"],
        "Toggle Group" => &["[B][I][U]"],
        "Tooltip" => &["┌──────────┐", "│ Helpful  │", "└────┬─────┘", "   [ ? ]"],
        "Tree View" => &["▾ src", "  ▾ components", "      Button.tsx", "  ▸ lib"],
        other => return boxed(other),
    };
    art.join("\n")
}

fn boxed(label: &str) -> String {
    let width = label.chars().count() + 2;
    let bar = "─".repeat(width);
    format!("┌{bar}┐\n│ {label} │\n└{bar}┘")
}
