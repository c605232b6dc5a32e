//! Rendering for the Dropdown widget.
//!
//! The trigger and the option list are drawn separately so a host can paint
//! every trigger first and every open list last, letting lists overlay the
//! content below them. Both record their clickable regions into a [`HitMap`].

use crate::buffer::{Buffer, Cell};
use crate::hit::{HitMap, HitTarget};
use crate::selection::{Selection, SelectionMode};
use crate::text::{display_width, truncate_to_width};
use crate::theme::Theme;
use crate::types::{Rect, Rgb, TextStyle};

use super::Dropdown;

/// Rows taken by the trigger: border, content, border.
pub const TRIGGER_HEIGHT: u16 = 3;

/// Columns taken by the right-hand cluster: ` × │ ▼ `.
const CLUSTER_WIDTH: u16 = 7;

const CLEAR_GLYPH: &str = "×";

impl Dropdown {
    /// Draw the always-visible part of the dropdown into `area`.
    pub fn render_trigger(
        &self,
        buf: &mut Buffer,
        area: Rect,
        selection: &Selection,
        focused: bool,
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        let area = Rect {
            height: area.height.min(TRIGGER_HEIGHT),
            ..area
        };
        if area.height < TRIGGER_HEIGHT || area.width < 2 {
            return;
        }

        let border = if focused {
            theme.focus_border
        } else {
            theme.border
        };
        buf.fill(area, theme.foreground, theme.background);
        draw_border(buf, area, border, theme.background);
        hits.push(area, &self.id, HitTarget::Body);

        let inner = area.inner();
        if inner.width <= CLUSTER_WIDTH {
            return;
        }
        let row = inner.y;
        let cluster_x = inner.right() - CLUSTER_WIDTH;
        let content_x = inner.x + 1;
        let content_width = cluster_x.saturating_sub(content_x);

        match (selection.mode(), selection.options().first()) {
            (_, None) => {
                let text = truncate_to_width(&self.placeholder, content_width as usize);
                buf.put_str(
                    content_x,
                    row,
                    &text,
                    content_width,
                    cell(theme.muted, theme.background, TextStyle::new().dim()),
                );
            }
            (SelectionMode::Single, Some(option)) => {
                let text = truncate_to_width(option.label(), content_width as usize);
                buf.put_str(
                    content_x,
                    row,
                    &text,
                    content_width,
                    cell(theme.foreground, theme.background, TextStyle::new()),
                );
            }
            (SelectionMode::Multiple, Some(_)) => {
                self.render_chips(buf, content_x, row, content_width, selection, theme, hits);
            }
        }

        // Right-hand cluster: clear, separator, caret.
        let caret = if self.is_open() { "▲" } else { "▼" };
        let plain = TextStyle::new();
        buf.put_str(
            cluster_x + 1,
            row,
            CLEAR_GLYPH,
            1,
            cell(theme.muted, theme.background, plain),
        );
        buf.put_str(cluster_x + 3, row, "│", 1, cell(border, theme.background, plain));
        buf.put_str(cluster_x + 5, row, caret, 1, cell(theme.muted, theme.background, plain));
        hits.push(Rect::new(cluster_x, row, 3, 1), &self.id, HitTarget::Clear);
    }

    /// Draw one removable chip per selected option, collapsing overflow into `+N`.
    #[allow(clippy::too_many_arguments)]
    fn render_chips(
        &self,
        buf: &mut Buffer,
        x: u16,
        row: u16,
        width: u16,
        selection: &Selection,
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        let chips = selection.options();
        let end = x + width;
        let mut cursor = x;

        for (i, option) in chips.iter().enumerate() {
            let after = chips.len() - i - 1;
            let marker_width = if after > 0 {
                display_width(&format!(" +{}", after)) as u16
            } else {
                0
            };
            let available = end.saturating_sub(cursor);
            let label_width = display_width(option.label()) as u16;

            let label = if label_width + 4 + marker_width <= available {
                option.label().to_string()
            } else if i == 0 && available > 4 + marker_width {
                truncate_to_width(option.label(), (available - 4 - marker_width) as usize)
            } else {
                let marker = format!("+{}", chips.len() - i);
                buf.put_str(
                    cursor,
                    row,
                    &marker,
                    available,
                    cell(theme.muted, theme.background, TextStyle::new()),
                );
                return;
            };

            let chip = cell(theme.chip_fg, theme.chip_bg, TextStyle::new());
            let mut col = cursor;
            col += buf.put_str(col, row, &format!(" {} ", label), available, chip);
            col += buf.put_str(
                col,
                row,
                CLEAR_GLYPH,
                end.saturating_sub(col),
                cell(theme.muted, theme.chip_bg, TextStyle::new()),
            );
            col += buf.put_str(col, row, " ", end.saturating_sub(col), chip);

            hits.push(
                Rect::new(cursor, row, col - cursor, 1),
                &self.id,
                HitTarget::Chip(i),
            );
            cursor = col + 1;
        }
    }

    /// Where the open list goes for a trigger drawn at `trigger`.
    pub fn list_area(&self, trigger: Rect) -> Option<Rect> {
        if !self.is_open() {
            return None;
        }
        let rows = self.options.len().min(self.max_visible).max(1) as u16;
        Some(Rect::new(
            trigger.x,
            trigger.y.saturating_add(TRIGGER_HEIGHT),
            trigger.width,
            rows + 2,
        ))
    }

    /// Draw the open option list below a trigger drawn at `trigger`.
    ///
    /// Does nothing while closed.
    pub fn render_list(
        &self,
        buf: &mut Buffer,
        trigger: Rect,
        selection: &Selection,
        theme: &Theme,
        hits: &mut HitMap,
    ) {
        let Some(area) = self.list_area(trigger) else {
            return;
        };
        if area.width < 2 {
            return;
        }

        buf.fill(area, theme.foreground, theme.surface);
        draw_border(buf, area, theme.border, theme.surface);

        let inner = area.inner();
        if self.options.is_empty() {
            buf.put_str(
                inner.x + 1,
                inner.y,
                "No options",
                inner.width.saturating_sub(1),
                cell(theme.muted, theme.surface, TextStyle::new().dim()),
            );
            return;
        }

        let highlighted = self.highlighted();
        for row in 0..inner.height {
            let index = self.scroll_offset + row as usize;
            let Some(option) = self.options.get(index) else {
                break;
            };
            let y = inner.y + row;
            let is_selected = selection.contains(option);
            let is_highlighted = highlighted == Some(index);

            let (fg, bg, style) = match (is_highlighted, is_selected) {
                (true, true) => (theme.highlight_fg, theme.highlight_bg, TextStyle::new().bold()),
                (true, false) => (theme.highlight_fg, theme.highlight_bg, TextStyle::new()),
                (false, true) => (theme.selected_fg, theme.selected_bg, TextStyle::new().bold()),
                (false, false) => (theme.foreground, theme.surface, TextStyle::new()),
            };

            let row_rect = Rect::new(inner.x, y, inner.width, 1);
            buf.fill(row_rect, fg, bg);
            let marker = if is_selected { "✓ " } else { "  " };
            let text = format!(
                "{}{}",
                marker,
                truncate_to_width(option.label(), inner.width.saturating_sub(3) as usize)
            );
            buf.put_str(
                inner.x + 1,
                y,
                &text,
                inner.width.saturating_sub(1),
                cell(fg, bg, style),
            );
            hits.push(row_rect, &self.id, HitTarget::Option(index));
        }

        // Scroll hints on the right border.
        let edge = area.right() - 1;
        let hint = cell(theme.muted, theme.surface, TextStyle::new());
        if self.scroll_offset > 0 {
            buf.set(edge, inner.y, Cell { char: '▲', ..hint });
        }
        if self.scroll_offset + (inner.height as usize) < self.options.len() {
            buf.set(edge, inner.bottom() - 1, Cell { char: '▼', ..hint });
        }
    }
}

fn cell(fg: Rgb, bg: Rgb, style: TextStyle) -> Cell {
    Cell::new(' ').with_fg(fg).with_bg(bg).with_style(style)
}

fn draw_border(buf: &mut Buffer, area: Rect, fg: Rgb, bg: Rgb) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let edge = cell(fg, bg, TextStyle::new());
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    for x in area.x + 1..right {
        buf.set(x, area.y, Cell { char: '─', ..edge });
        buf.set(x, bottom, Cell { char: '─', ..edge });
    }
    for y in area.y + 1..bottom {
        buf.set(area.x, y, Cell { char: '│', ..edge });
        buf.set(right, y, Cell { char: '│', ..edge });
    }
    buf.set(area.x, area.y, Cell { char: '╭', ..edge });
    buf.set(right, area.y, Cell { char: '╮', ..edge });
    buf.set(area.x, bottom, Cell { char: '╰', ..edge });
    buf.set(right, bottom, Cell { char: '╯', ..edge });
}
