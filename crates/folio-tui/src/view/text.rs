//! Line-building helpers: word wrapping, padding, framed cards and grids

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text on word boundaries, respecting unicode widths.
/// Words longer than `max_width` are split.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(1);
                    if current_width + ch_width > max_width && !current.is_empty() {
                        result.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        result.push(current);
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Display width of a run of spans
pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.width()).sum()
}

/// Truncate to `max_width` columns, marking the cut with an ellipsis
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Frame rows of spans in a rounded box exactly `width` columns wide
pub fn card(rows: Vec<Vec<Span<'static>>>, width: usize, border: Style) -> Vec<Line<'static>> {
    let width = width.max(4);
    let inner = width - 4;
    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border,
    )));
    for mut row in rows {
        let padding = inner.saturating_sub(spans_width(&row));
        let mut spans = vec![Span::styled("│ ", border)];
        spans.append(&mut row);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));
    lines
}

/// Image placeholder: the asset is never loaded, only named
pub fn image_frame(alt: &str, path: &str, width: usize, style: Style, caption: Style) -> Vec<Line<'static>> {
    let width = width.max(6);
    let inner = width - 4;
    let row = |text: String, text_style: Style| {
        let text = truncate(&text, inner);
        let padding = inner.saturating_sub(text.width());
        Line::from(vec![
            Span::styled("┊ ", style),
            Span::styled(text, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(" ┊", style),
        ])
    };
    vec![
        Line::from(Span::styled(format!("┌{}┐", "┄".repeat(width - 2)), style)),
        row(format!("▧ {}", alt), caption),
        row(path.to_string(), style),
        Line::from(Span::styled(format!("└{}┘", "┄".repeat(width - 2)), style)),
    ]
}

/// Place blocks side by side in `columns` columns; returns the lines and the
/// top row of each block
pub fn grid(
    blocks: Vec<Vec<Line<'static>>>,
    columns: usize,
    col_width: usize,
    gap: usize,
) -> (Vec<Line<'static>>, Vec<u16>) {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut tops = Vec::with_capacity(blocks.len());

    let mut blocks = blocks.into_iter().peekable();
    while blocks.peek().is_some() {
        let row: Vec<Vec<Line<'static>>> = blocks.by_ref().take(columns).collect();
        let height = row.iter().map(|b| b.len()).max().unwrap_or(0);
        let top = lines.len() as u16;
        tops.extend(std::iter::repeat(top).take(row.len()));

        for r in 0..height {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (c, block) in row.iter().enumerate() {
                if c > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                }
                match block.get(r) {
                    Some(line) => {
                        let used = spans_width(&line.spans);
                        spans.extend(line.spans.iter().cloned());
                        spans.push(Span::raw(" ".repeat(col_width.saturating_sub(used))));
                    }
                    None => spans.push(Span::raw(" ".repeat(col_width))),
                }
            }
            lines.push(Line::from(spans));
        }
        // Gap between grid rows
        lines.push(Line::default());
    }

    (lines, tops)
}

/// Column count and width for a responsive grid
pub fn grid_columns(width: usize, breakpoints: &[(usize, usize)], gap: usize) -> (usize, usize) {
    let columns = breakpoints
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map(|(_, cols)| *cols)
        .unwrap_or(1)
        .max(1);
    let col_width = width.saturating_sub(gap * (columns - 1)) / columns;
    (columns, col_width)
}
