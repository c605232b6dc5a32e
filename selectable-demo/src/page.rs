//! The demo page: two dropdowns and the selections they control.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use selectable::dropdown::render::TRIGGER_HEIGHT;
use selectable::{
    Buffer, Cell, Dropdown, EventContext, HitMap, Key, KeyRouter, Modifiers, Rect, Selection,
    TextStyle, Theme,
};

use crate::config::DemoConfig;

const MARGIN_X: u16 = 2;
const TRIGGER_WIDTH: u16 = 40;
/// Rows per field: title, trigger, spacing.
const FIELD_HEIGHT: u16 = TRIGGER_HEIGHT + 2;
const FIRST_FIELD_Y: u16 = 3;

/// Where the trigger of the `index`-th field sits, below its title row.
fn trigger_area(index: usize, buf_width: u16) -> Rect {
    let width = TRIGGER_WIDTH.min(buf_width.saturating_sub(MARGIN_X * 2));
    let y = FIRST_FIELD_Y + index as u16 * FIELD_HEIGHT + 1;
    Rect::new(MARGIN_X, y, width, TRIGGER_HEIGHT)
}

/// A dropdown plus the selection it controls.
struct Field {
    title: &'static str,
    dropdown: Dropdown,
    selection: Selection,
}

pub struct Page {
    router: KeyRouter,
    fields: Vec<Field>,
    focused: Option<usize>,
    theme: Theme,
    hits: HitMap,
    should_quit: bool,
}

impl Page {
    pub fn new(config: &DemoConfig) -> Self {
        let router = KeyRouter::new();
        let first = config.options.first().cloned();

        let mut fields = vec![
            Field {
                title: "Multiple",
                dropdown: Dropdown::new("multi", config.options.clone())
                    .with_placeholder("Pick any")
                    .with_max_visible(config.max_visible),
                selection: Selection::multiple(first.clone()),
            },
            Field {
                title: "Single",
                dropdown: Dropdown::new("single", config.options.clone())
                    .with_placeholder("Pick one")
                    .with_max_visible(config.max_visible),
                selection: Selection::Single(first),
            },
        ];
        for field in &mut fields {
            field.dropdown.mount(&router);
        }

        Self {
            router,
            fields,
            focused: None,
            theme: config.theme,
            hits: HitMap::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.map(|i| self.fields[i].dropdown.id())
    }

    #[cfg(test)]
    pub fn selection(&self, widget_id: &str) -> Option<&Selection> {
        self.field_index(widget_id).map(|i| &self.fields[i].selection)
    }

    #[cfg(test)]
    pub fn dropdown(&self, widget_id: &str) -> Option<&Dropdown> {
        self.field_index(widget_id).map(|i| &self.fields[i].dropdown)
    }

    fn field_index(&self, widget_id: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.dropdown.id() == widget_id)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&mut self, buf: &mut Buffer) {
        let theme = self.theme;
        self.hits.clear();
        buf.fill(buf.area(), theme.foreground, theme.background);

        let plain = Cell::new(' ')
            .with_fg(theme.foreground)
            .with_bg(theme.background);
        let muted = plain.with_fg(theme.muted);
        let title = plain.with_style(TextStyle::new().bold());
        let width = buf.width().saturating_sub(MARGIN_X);

        buf.put_str(
            MARGIN_X,
            1,
            "Tab: next field · Enter/Space: open or pick · Esc: close · q: quit",
            width,
            muted,
        );

        for (i, field) in self.fields.iter().enumerate() {
            let area = trigger_area(i, buf.width());
            buf.put_str(MARGIN_X, area.y - 1, field.title, width, title);
            field.dropdown.render_trigger(
                buf,
                area,
                &field.selection,
                self.focused == Some(i),
                &theme,
                &mut self.hits,
            );
        }

        let status_y = FIRST_FIELD_Y + self.fields.len() as u16 * FIELD_HEIGHT;
        for (i, field) in self.fields.iter().enumerate() {
            let line = format!("{}: {}", field.title, field.selection);
            buf.put_str(MARGIN_X, status_y + i as u16, &line, width, muted);
        }

        // Open lists last so they overlay what sits below their trigger.
        for (i, field) in self.fields.iter().enumerate() {
            let area = trigger_area(i, buf.width());
            field
                .dropdown
                .render_list(buf, area, &field.selection, &theme, &mut self.hits);
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.set_focus(None),
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        match event.code {
            KeyCode::Tab => {
                self.cycle_focus(1);
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus(-1);
                return;
            }
            _ => {}
        }

        let key = Key::from(event.code);
        let modifiers = Modifiers::from(event.modifiers);

        if let Some(target) = self.router.route(self.focused_id())
            && let Some(index) = self.field_index(&target)
        {
            let mut cx = EventContext::new();
            let field = &mut self.fields[index];
            let result = field
                .dropdown
                .on_key(key, modifiers, &field.selection, &mut cx);
            self.apply(cx);
            if result.is_handled() {
                return;
            }
        }

        match (key, event.modifiers.contains(KeyModifiers::CONTROL)) {
            (Key::Char('c'), true) | (Key::Char('q'), false) => self.quit(),
            (Key::Escape, _) if self.focused.is_some() => self.set_focus(None),
            (Key::Escape, _) => self.quit(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) {
        let hit = self
            .hits
            .hit(event.column, event.row)
            .and_then(|region| Some((self.field_index(&region.widget_id)?, region.target)));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((index, target)) = hit else {
                    self.set_focus(None);
                    return;
                };
                self.set_focus(Some(index));
                let mut cx = EventContext::new();
                let field = &mut self.fields[index];
                field.dropdown.on_click(target, &field.selection, &mut cx);
                self.apply(cx);
            }
            MouseEventKind::Moved => {
                if let Some((index, target)) = hit {
                    self.fields[index].dropdown.on_hover(target);
                }
            }
            _ => {}
        }
    }

    /// Move focus, blurring whichever dropdown had it.
    fn set_focus(&mut self, next: Option<usize>) {
        if self.focused == next {
            return;
        }
        if let Some(prev) = self.focused {
            self.fields[prev].dropdown.on_blur();
        }
        log::debug!("Page::set_focus {:?} -> {:?}", self.focused, next);
        self.focused = next;
    }

    fn cycle_focus(&mut self, step: isize) {
        let len = self.fields.len() as isize;
        if len == 0 {
            return;
        }
        let next = match self.focused {
            None if step > 0 => 0,
            None => len - 1,
            Some(current) => (current as isize + step).rem_euclid(len),
        };
        self.set_focus(Some(next as usize));
    }

    /// Hand every requested change to the selection it belongs to.
    fn apply(&mut self, mut cx: EventContext) {
        for change in cx.drain() {
            let Some(index) = self.field_index(&change.widget_id) else {
                log::warn!("Page::apply change for unknown widget {}", change.widget_id);
                continue;
            };
            log::info!("{} changed: {}", change.widget_id, change.selection);
            self.fields[index].selection = change.selection;
        }
    }

    fn quit(&mut self) {
        log::info!("Page::quit");
        self.should_quit = true;
    }
}
