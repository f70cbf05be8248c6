//! Frame layout for the search prompt.
//!
//! ```text
//! ┃ search item:
//! ┃ <description lines>
//! ┃ filter: ap
//! ┃
//! ┃ > apple
//! ┃   grape
//! ┃
//! ┃ 2/5 items filtered
//! ┃ show items [1-2] of 2 filtered
//!
//! ↑/↓ move • pgup/pgdn page • enter select • esc cancel
//! ```

use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::config::FormConfig;

use super::session::SearchSession;

const BAR: &str = "┃ ";
const CURSOR: &str = "> ";
const NO_CURSOR: &str = "  ";
const FILTER_LABEL: &str = "filter: ";

/// Filter line plus the spacer below it.
const FILTER_LINES: usize = 2;
/// Spacer plus the two summary lines.
const SUMMARY_LINES: usize = 3;
/// Spacer plus the key help line.
const HELP_LINES: usize = 2;

pub const HELP: &str = "↑/↓ move • pgup/pgdn page • enter select • esc cancel";

fn title_lines(form: &FormConfig) -> usize {
    usize::from(!form.title.is_empty())
}

fn description_lines(form: &FormConfig) -> usize {
    if form.description.is_empty() {
        0
    } else {
        form.description.lines().count()
    }
}

/// Rows left for list items once the fixed parts of the frame are laid out.
/// Never less than one.
#[must_use]
pub fn list_height(form: &FormConfig, total_height: u16) -> usize {
    usize::from(total_height)
        .saturating_sub(title_lines(form))
        .saturating_sub(description_lines(form))
        .saturating_sub(FILTER_LINES + SUMMARY_LINES + HELP_LINES)
        .max(1)
}

fn barred(spans: Vec<Span<'static>>, bar: Style) -> Line<'static> {
    let mut line = vec![Span::styled(BAR, bar)];
    line.extend(spans);
    Line::from(line)
}

/// Counter lines, shown only when the list is narrowed or scrolled.
#[must_use]
pub fn summary(total: usize, filtered: usize, start: usize, end: usize) -> Option<[String; 2]> {
    let partial = end.saturating_sub(start) < filtered;
    if filtered == total && !partial {
        return None;
    }

    let window = if filtered == 0 {
        String::new()
    } else {
        format!(
            "show items [{}-{end}] of {filtered} filtered",
            start.saturating_add(1)
        )
    };
    Some([format!("{filtered}/{total} items filtered"), window])
}

pub(super) fn render<T>(session: &SearchSession<'_, T>) -> Text<'static> {
    if session.is_done() {
        return Text::default();
    }

    let form = &session.config().form;
    let theme = &form.theme;
    let bar = theme.indicator;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if !form.title.is_empty() {
        lines.push(barred(vec![Span::styled(form.title.clone(), theme.title)], bar));
    }
    if !form.description.is_empty() {
        for text in form.description.lines() {
            lines.push(barred(
                vec![Span::styled(text.to_string(), theme.description)],
                bar,
            ));
        }
    }

    lines.push(barred(
        vec![
            Span::styled(FILTER_LABEL, theme.help),
            Span::styled(session.filter_text().to_string(), theme.filter),
        ],
        bar,
    ));
    lines.push(barred(Vec::new(), bar));

    let query = session.filter_text();
    for (position, index, item) in session.visible() {
        let current = position == session.cursor();
        let (glyph, style) = if current {
            (CURSOR, theme.selected)
        } else {
            (NO_CURSOR, theme.unselected)
        };

        let mut spans = vec![Span::styled(glyph, theme.indicator)];
        let key = item.key();
        match session.matcher().match_range(index, query) {
            Some(range) => {
                let (before, rest) = key.split_at_checked(range.start).unwrap_or((key, ""));
                let (hit, after) = rest
                    .split_at_checked(range.len())
                    .unwrap_or((rest, ""));
                spans.push(Span::styled(before.to_string(), style));
                spans.push(Span::styled(hit.to_string(), style.patch(theme.matched)));
                spans.push(Span::styled(after.to_string(), style));
            }
            None => spans.push(Span::styled(key.to_string(), style)),
        }
        lines.push(barred(spans, bar));
    }

    let window = session.viewport().visible_range(session.filtered_len());
    if let Some(counters) = summary(
        session.total_len(),
        session.filtered_len(),
        window.start,
        window.end,
    ) {
        lines.push(barred(Vec::new(), bar));
        for counter in counters.into_iter().filter(|c| !c.is_empty()) {
            lines.push(barred(vec![Span::styled(counter, theme.summary)], bar));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(HELP, theme.help)));

    Text::from(lines)
}
