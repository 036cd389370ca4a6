//! Event routing between the terminal and the combobox.

use ariadom::{hit_test_any, Element, Event, FocusState, Key, LayoutResult, Modifiers};
use combobox::widget::render::{LIST_ID, TOGGLE_ID};
use combobox::{Combobox, Effect};
use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::page::{self, DONE_ID, Line};

pub struct App {
    pub combobox: Combobox,
    focus: FocusState,
    list_rows: u16,
    page: Element,
    layout: LayoutResult,
    quit: bool,
}

impl App {
    pub fn new(mut combobox: Combobox, list_rows: u16) -> Self {
        combobox.set_list_height(list_rows);
        let mut focus = FocusState::new();
        focus.focus(TOGGLE_ID);

        let mut app = Self {
            combobox,
            focus,
            list_rows,
            page: Element::div(),
            layout: LayoutResult::new(),
            quit: false,
        };
        app.rebuild();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Lay the current page out for a terminal `width` columns wide.
    pub fn lines(&mut self, width: u16) -> Vec<Line> {
        if self.combobox.is_dirty() {
            self.rebuild();
        }
        let (lines, layout) =
            page::layout_page(&self.page, self.focus.focused(), self.list_rows, width);
        self.layout = layout;
        lines
    }

    /// Translate raw terminal events and feed them to the page.
    pub fn process(&mut self, raw: &[CrosstermEvent]) {
        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.on_key(key_event.code.into(), key_event.modifiers.into());
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let MouseEventKind::Down(button) = mouse.kind {
                        let target = hit_test_any(&self.layout, &self.page, mouse.column, mouse.row);
                        self.on_click(Event::Click {
                            target,
                            x: mouse.column,
                            y: mouse.row,
                            button: button.into(),
                        });
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    self.dispatch(&Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
            if self.quit {
                break;
            }
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }
        if key == Key::Char('q') && !self.combobox.is_open() {
            self.quit = true;
            return;
        }

        let event = Event::Key {
            target: self.focus.focused().map(str::to_string),
            key,
            modifiers,
        };
        let result = self.dispatch(&event);
        if result.prevents_default() {
            return;
        }

        match key {
            Key::Tab | Key::BackTab => {
                // The list sits right after the toggle in tab order but is
                // not itself tabbable
                if self.focus.focused() == Some(LIST_ID) {
                    self.focus.focus(TOGGLE_ID);
                }
                if key == Key::Tab {
                    self.focus.focus_next(&self.page);
                } else {
                    self.focus.focus_prev(&self.page);
                }
            }
            Key::Enter | Key::Char(' ') if self.focus.focused() == Some(DONE_ID) => {
                self.quit = true;
            }
            _ => {}
        }
    }

    fn on_click(&mut self, event: Event) {
        // Clicking a focusable element focuses it before the click lands
        if let Some(target) = event.target() {
            let focusable = ariadom::find_element(&self.page, target).is_some_and(|el| el.focusable);
            if focusable {
                self.focus.focus(target);
            }
        }

        self.dispatch(&event);

        if event.target() == Some(DONE_ID) {
            self.quit = true;
        }
    }

    fn dispatch(&mut self, event: &Event) -> combobox::EventResult {
        let widget = self.combobox.render();
        let result = self.combobox.handle_document_event(event, &widget);
        log::debug!("[app] {:?} -> {:?}", event, result);
        self.apply_effects();
        result
    }

    fn apply_effects(&mut self) {
        for effect in self.combobox.drain_effects() {
            match effect {
                Effect::Focus(id) => {
                    self.focus.focus(&id);
                }
                Effect::SelectionChanged { index, selected } => {
                    log::info!(
                        "option {} {}",
                        index,
                        if selected { "selected" } else { "deselected" }
                    );
                }
                other => log::debug!("[app] effect {:?}", other),
            }
        }
    }

    fn rebuild(&mut self) {
        let values: Vec<String> = self
            .combobox
            .selected_values()
            .iter()
            .map(|v| v.to_string())
            .collect();
        let status = format!("Values: {}", values.join(", "));
        self.page = page::build_page(self.combobox.render(), &status);
        self.combobox.clear_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combobox::{ComboOption, ComboboxConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        let cb = Combobox::with_options(
            ComboboxConfig::new(),
            vec![ComboOption::simple("Europe"), ComboOption::simple("Asia")],
        );
        App::new(cb, 5)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.process(&[CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))]);
    }

    #[test]
    fn opening_moves_focus_to_list_and_escape_back() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus.focused(), Some(LIST_ID));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus.focused(), Some(TOGGLE_ID));
        assert!(!app.combobox.is_open());
    }

    #[test]
    fn tab_from_list_closes_and_reaches_done() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);

        assert!(!app.combobox.is_open());
        assert_eq!(app.focus.focused(), Some(DONE_ID));
    }

    #[test]
    fn space_in_list_selects_and_updates_status() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        let lines = app.lines(80);
        assert!(lines.iter().any(|l| l.text == "Values: Europe"));
        assert!(!app.should_quit());
    }

    #[test]
    fn q_quits_only_while_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
