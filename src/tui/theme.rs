//! Theme configuration for consistent styling across prompts.

use ratatui::style::{Color, Modifier, Style};

// Base16-style palette
const ACCENT: Color = Color::Rgb(134, 193, 185); // #86c1b9
const HIGHLIGHT: Color = Color::Rgb(247, 202, 136); // #f7ca88
const SELECT: Color = Color::Rgb(186, 139, 175); // #ba8baf
const FRAME: Color = Color::Rgb(124, 175, 194); // #7cafc2
const MUTED: Color = Color::Rgb(88, 88, 88); // #585858
const TEXT: Color = Color::Rgb(216, 216, 216); // #d8d8d8
const ERROR: Color = Color::Rgb(171, 70, 66); // #ab4642

/// Theme configuration for prompt components.
///
/// Provides consistent colors and styles across all prompt types.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Style for titles and headers
    pub title: Style,
    /// Style for the description under the title
    pub description: Style,
    /// Style for selected/highlighted items
    pub selected: Style,
    /// Style for normal, unselected items
    pub unselected: Style,
    /// Style for disabled/unavailable items
    pub disabled: Style,
    /// Style for the typed search filter
    pub filter: Style,
    /// Style for the part of an item key matching the filter
    pub matched: Style,
    /// Style for the filtered/visible counters
    pub summary: Style,
    /// Style for help text at the bottom
    pub help: Style,
    /// Style for error messages
    pub error: Style,
    /// Style for borders
    pub border: Style,
    /// Style for the selection indicator (arrow/checkbox)
    pub indicator: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            description: Style::default().fg(MUTED),
            selected: Style::default().fg(SELECT).add_modifier(Modifier::BOLD),
            unselected: Style::default().fg(TEXT),
            disabled: Style::default().fg(MUTED),
            filter: Style::default().fg(HIGHLIGHT),
            matched: Style::default()
                .fg(HIGHLIGHT)
                .add_modifier(Modifier::UNDERLINED),
            summary: Style::default().fg(TEXT),
            help: Style::default().fg(MUTED),
            error: Style::default().fg(ERROR),
            border: Style::default().fg(FRAME),
            indicator: Style::default().fg(SELECT).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Creates a new theme with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A colorless theme relying on text attributes only.
    #[must_use]
    pub fn plain() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            title: bold,
            description: Style::default(),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            unselected: Style::default(),
            disabled: Style::default().add_modifier(Modifier::DIM),
            filter: bold,
            matched: Style::default().add_modifier(Modifier::UNDERLINED),
            summary: Style::default(),
            help: Style::default().add_modifier(Modifier::DIM),
            error: bold,
            border: Style::default(),
            indicator: bold,
        }
    }
}
