//! Input handling
//!
//! Maps keyboard events to panel operations with context-sensitive bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::panels::{RenderStyle, PRESETS};
use crate::state::{AppState, FocusedPanel, StyleControl};

/// Handle an input event
pub fn handle_event(event: Event, state: &mut AppState) -> Result<()> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, state)
        }
        Event::Paste(text) => {
            handle_paste(&text, state);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    // Handle help overlay
    if state.show_help {
        return handle_help_input(key, state);
    }

    // Handle text input mode
    if state.editing_text {
        return handle_text_input(key, state);
    }

    // Global shortcuts
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            return Ok(());
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return Ok(());
        }
        _ => {}
    }

    // Context-sensitive handling
    match state.focus {
        FocusedPanel::Style => handle_style_panel_input(key, state),
        FocusedPanel::Upscale => handle_upscale_panel_input(key, state),
        FocusedPanel::Activity => handle_activity_input(key, state),
    }
}

/// Handle input when help overlay is shown
fn handle_help_input(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
            state.show_help = false;
        }
        _ => {}
    }
    Ok(())
}

/// Handle typing into the custom style field
fn handle_text_input(key: KeyEvent, state: &mut AppState) -> Result<()> {
    let is_loading = state.is_loading();
    match key.code {
        KeyCode::Esc => state.stop_editing(),
        KeyCode::Enter => {
            state.stop_editing();
            state.style_cursor_down();
        }
        KeyCode::Backspace => {
            state.style_panel.pop_grapheme(is_loading);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.style_panel.push_char(c, is_loading);
        }
        _ => {}
    }
    Ok(())
}

/// Bracketed paste goes straight into the text field while editing
fn handle_paste(text: &str, state: &mut AppState) {
    if !state.editing_text {
        return;
    }
    let is_loading = state.is_loading();
    let mut combined = state.style_panel.custom_text().to_string();
    combined.extend(text.chars().filter(|c| !c.is_control()));
    state.style_panel.set_custom_text(combined, is_loading);
}

/// Handle input for the style prompt panel
fn handle_style_panel_input(key: KeyEvent, state: &mut AppState) -> Result<()> {
    let is_loading = state.is_loading();
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => state.style_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.style_cursor_down(),
        KeyCode::Left | KeyCode::Char('h') => state.style_cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => state.style_cursor_right(),

        // Activate control under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => state.activate_style_control(),

        // Shortcuts
        KeyCode::Char('o') | KeyCode::Char('O') => {
            state.style_panel.set_render_style(RenderStyle::Outlines, is_loading);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            state.style_panel.set_render_style(RenderStyle::Solid, is_loading);
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.style_panel.toggle_render_style(is_loading);
        }
        KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Char('/') => state.start_editing(),
        KeyCode::Char('a') | KeyCode::Char('A') => state.apply_style(),
        KeyCode::Char('c') | KeyCode::Char('C') => copy_to_clipboard(state)?,
        KeyCode::Char(d @ '0'..='9') => {
            // 1-9 pick presets 1-9, 0 picks the tenth
            let index = match d.to_digit(10) {
                Some(0) => 9,
                Some(n) => n as usize - 1,
                None => return Ok(()),
            };
            if index < PRESETS.len() {
                state.style_cursor = StyleControl::Preset(index);
                state.activate_style_control();
            }
        }

        _ => {}
    }
    state.settle_style_cursor();
    Ok(())
}

/// Handle input for the upscale panel
fn handle_upscale_panel_input(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('u') | KeyCode::Char('U') => {
            state.trigger_upscale()
        }
        _ => {}
    }
    Ok(())
}

/// Handle input for the activity log
fn handle_activity_input(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.scroll_activity_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_activity_down(1),
        KeyCode::PageUp => state.scroll_activity_up(10),
        KeyCode::PageDown => state.scroll_activity_down(10),
        KeyCode::Home => state.activity_scroll = 0,
        _ => {}
    }
    Ok(())
}

/// Copy the composed prompt to the clipboard
fn copy_to_clipboard(state: &mut AppState) -> Result<()> {
    if let Some(prompt) = state.style_panel.composed_prompt() {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(prompt) {
                Ok(_) => {
                    state.set_status("Copied composed prompt to clipboard", false);
                }
                Err(e) => {
                    state.set_status(&format!("Copy failed: {}", e), true);
                }
            },
            Err(e) => {
                state.set_status(&format!("Clipboard unavailable: {}", e), true);
            }
        }
    } else {
        state.set_status("Nothing to copy - pick a preset first", false);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::panels::PromptSource;
    use crossbeam_channel::unbounded;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_state() -> (AppState, crossbeam_channel::Receiver<crate::worker::EditRequest>) {
        let (tx, rx) = unbounded();
        (AppState::new(Config::default(), tx, (120, 40)), rx)
    }

    #[test]
    fn test_quit_key() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Char('q')), &mut state).unwrap();
        assert!(state.should_quit);
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Char('e')), &mut state).unwrap();
        handle_event(key(KeyCode::Char('q')), &mut state).unwrap();
        assert!(!state.should_quit);
        assert_eq!(state.style_panel.custom_text(), "q");
    }

    #[test]
    fn test_digit_selects_preset() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Char('5')), &mut state).unwrap();
        assert_eq!(
            state.style_panel.selected_preset().map(|p| p.name),
            Some("Pixel Art")
        );
        handle_event(key(KeyCode::Char('0')), &mut state).unwrap();
        assert_eq!(
            state.style_panel.selected_preset().map(|p| p.name),
            Some("Dot Matrix")
        );
    }

    #[test]
    fn test_typing_then_backspace_to_empty() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Char('1')), &mut state).unwrap();
        handle_event(key(KeyCode::Char('e')), &mut state).unwrap();
        handle_event(key(KeyCode::Char('x')), &mut state).unwrap();
        handle_event(key(KeyCode::Backspace), &mut state).unwrap();
        assert_eq!(state.style_panel.source(), &PromptSource::Custom(String::new()));
    }

    #[test]
    fn test_paste_appends_while_editing() {
        let (mut state, _rx) = test_state();
        handle_event(Event::Paste("ignored".to_string()), &mut state).unwrap();
        assert_eq!(state.style_panel.custom_text(), "");

        handle_event(key(KeyCode::Char('e')), &mut state).unwrap();
        handle_event(Event::Paste("Retro\ncomic".to_string()), &mut state).unwrap();
        assert_eq!(state.style_panel.custom_text(), "Retrocomic");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Tab), &mut state).unwrap();
        assert_eq!(state.focus, FocusedPanel::Upscale);
        handle_event(key(KeyCode::BackTab), &mut state).unwrap();
        assert_eq!(state.focus, FocusedPanel::Style);
    }

    #[test]
    fn test_upscale_key() {
        let (mut state, _rx) = test_state();
        state.focus = FocusedPanel::Upscale;
        handle_event(key(KeyCode::Enter), &mut state).unwrap();
        assert!(state.is_loading());
    }

    #[test]
    fn test_render_style_shortcuts() {
        let (mut state, _rx) = test_state();
        handle_event(key(KeyCode::Char('o')), &mut state).unwrap();
        assert_eq!(state.style_panel.render_style(), RenderStyle::Outlines);
        handle_event(key(KeyCode::Char('t')), &mut state).unwrap();
        assert_eq!(state.style_panel.render_style(), RenderStyle::Solid);
    }
}
