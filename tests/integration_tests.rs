//! Integration tests for artpanels

use std::time::Duration;

use artpanels::config::Config;
use artpanels::input::handle_event;
use artpanels::panels::{
    compose_once, find_preset, ApplyButton, PromptChoice, PromptSource, RenderStyle,
    StylePromptSelector, PRESETS, UPSCALE_PANEL,
};
use artpanels::state::{ActivityOutcome, AppState, FocusedPanel, StyleControl};
use artpanels::worker::{spawn_dispatcher, EditRequest, LoopbackBackend, RequestKind};
use crossbeam_channel::unbounded;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

const OUTLINES_SUFFIX: &str = " The art should primarily use characters to define the outlines and contours of the subjects, leaving the interiors relatively sparse or using minimal characters for shading.";
const SOLID_SUFFIX: &str = " The art should focus on using dense blocks of characters to create solid, filled-in shapes, emphasizing form over fine lines.";

fn apply(selector: &StylePromptSelector, is_loading: bool) -> Vec<String> {
    let mut calls = Vec::new();
    selector.apply(is_loading, |prompt| calls.push(prompt));
    calls
}

mod style_selector_tests {
    use super::*;

    #[test]
    fn test_pixel_art_with_default_style() {
        let mut selector = StylePromptSelector::new();
        selector.select_preset(find_preset("Pixel Art").unwrap(), false);

        assert_eq!(selector.render_style(), RenderStyle::Solid);
        let calls = apply(&selector, false);
        assert_eq!(
            calls,
            vec![format!(
                "Recreate the image as pixelated ASCII art, using block characters (like █, ▓, ▒, ░) to simulate a low-resolution, 8-bit video game look.{}",
                SOLID_SUFFIX
            )]
        );
    }

    #[test]
    fn test_custom_text_with_outlines() {
        let mut selector = StylePromptSelector::new();
        selector.set_render_style(RenderStyle::Outlines, false);
        selector.set_custom_text("Retro comic book style", false);

        let calls = apply(&selector, false);
        assert_eq!(
            calls,
            vec!["Retro comic book style The art should primarily use characters to define the outlines and contours of the subjects, leaving the interiors relatively sparse or using minimal characters for shading.".to_string()]
        );
    }

    #[test]
    fn test_loading_preset_click_changes_nothing() {
        let mut selector = StylePromptSelector::new();
        for preset in PRESETS.iter() {
            assert!(!selector.select_preset(preset, true));
        }
        assert_eq!(selector.source(), &PromptSource::None);
        assert_eq!(selector.apply_button(true), ApplyButton::Hidden);
        assert!(apply(&selector, true).is_empty());
    }

    #[test]
    fn test_every_preset_composes_with_both_styles() {
        for preset in PRESETS.iter() {
            for style in RenderStyle::all() {
                let mut selector = StylePromptSelector::with_render_style(*style);
                selector.select_preset(preset, false);
                let calls = apply(&selector, false);
                assert_eq!(
                    calls,
                    vec![format!("{}{}", preset.prompt_fragment, style.suffix())],
                    "preset {}",
                    preset.name
                );
            }
        }
    }

    #[test]
    fn test_custom_after_preset_never_concatenates() {
        let mut selector = StylePromptSelector::new();
        selector.select_preset(&PRESETS[0], false);
        selector.set_custom_text("Ukiyo-e woodblock", false);
        assert_eq!(
            apply(&selector, false),
            vec![format!("Ukiyo-e woodblock{}", SOLID_SUFFIX)]
        );

        selector.select_preset(&PRESETS[7], false);
        assert_eq!(
            apply(&selector, false),
            vec![format!("{}{}", PRESETS[7].prompt_fragment, SOLID_SUFFIX)]
        );
    }

    #[test]
    fn test_style_toggle_does_not_touch_prompt() {
        let mut selector = StylePromptSelector::new();
        selector.set_custom_text("Ascii skyline", false);
        selector.toggle_render_style(false);
        assert_eq!(selector.custom_text(), "Ascii skyline");
        assert_eq!(
            apply(&selector, false),
            vec![format!("Ascii skyline{}", OUTLINES_SUFFIX)]
        );
    }

    #[test]
    fn test_compose_once_matches_interactive_path() {
        let composed = compose_once(PromptChoice::Preset("Pixel Art"), RenderStyle::Solid).unwrap();
        let mut selector = StylePromptSelector::new();
        selector.select_preset(find_preset("Pixel Art").unwrap(), false);
        assert_eq!(apply(&selector, false), vec![composed]);
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn toggling_style_preserves_source(text in ".{0,40}", preset_first in any::<bool>(), index in 0usize..10) {
            let mut selector = StylePromptSelector::new();
            if preset_first {
                selector.select_preset(&PRESETS[index], false);
            } else {
                selector.set_custom_text(text.clone(), false);
            }
            let before = selector.source().clone();
            selector.toggle_render_style(false);
            selector.toggle_render_style(false);
            selector.toggle_render_style(false);
            prop_assert_eq!(selector.source(), &before);
        }

        #[test]
        fn loading_freezes_state(text in ".{0,40}", index in 0usize..10) {
            let mut selector = StylePromptSelector::new();
            selector.set_custom_text("base", false);
            let before = selector.clone();

            selector.select_preset(&PRESETS[index], true);
            selector.set_custom_text(text, true);
            selector.toggle_render_style(true);
            selector.pop_grapheme(true);

            prop_assert_eq!(selector.source(), before.source());
            prop_assert_eq!(selector.render_style(), before.render_style());
            prop_assert!(apply(&selector, true).is_empty());
        }

        #[test]
        fn blank_prompts_never_apply(spaces in "[ \t\n]{0,12}") {
            let mut selector = StylePromptSelector::new();
            selector.set_custom_text(spaces, false);
            prop_assert_eq!(selector.apply_button(false), ApplyButton::Hidden);
            prop_assert!(apply(&selector, false).is_empty());
        }

        #[test]
        fn custom_text_composes_verbatim(text in "[a-zA-Z][a-zA-Z ]{0,30}") {
            let mut selector = StylePromptSelector::new();
            selector.select_preset(&PRESETS[3], false);
            selector.set_custom_text(text.clone(), false);
            prop_assert_eq!(apply(&selector, false), vec![format!("{}{}", text, SOLID_SUFFIX)]);
        }
    }
}

mod trigger_tests {
    use super::*;

    #[test]
    fn test_apply_upscale_once() {
        let mut calls = 0;
        UPSCALE_PANEL.trigger(false, || calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(UPSCALE_PANEL.button_label, "Apply Upscale");
    }

    #[test]
    fn test_every_click_invokes() {
        let mut calls = 0;
        for _ in 0..3 {
            UPSCALE_PANEL.trigger(false, || calls += 1);
        }
        UPSCALE_PANEL.trigger(true, || calls += 1);
        assert_eq!(calls, 3);
    }
}

mod host_tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keyboard_flow_dispatches_composed_prompt() {
        let (tx, rx) = unbounded();
        let mut state = AppState::new(Config::default(), tx, (120, 40));

        handle_event(key(KeyCode::Char('o')), &mut state).unwrap();
        handle_event(key(KeyCode::Char('e')), &mut state).unwrap();
        for c in "Retro comic book style".chars() {
            handle_event(key(KeyCode::Char(c)), &mut state).unwrap();
        }
        handle_event(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(state.style_cursor, StyleControl::Apply);
        handle_event(key(KeyCode::Enter), &mut state).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            EditRequest::AsciiArt {
                prompt: format!("Retro comic book style{}", OUTLINES_SUFFIX),
            }
        );
        assert!(state.is_loading());

        // Everything is frozen until the host clears the flag
        handle_event(key(KeyCode::Char('1')), &mut state).unwrap();
        assert_eq!(state.style_panel.selected_preset(), None);
        handle_event(key(KeyCode::Char('a')), &mut state).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_end_to_end_with_loopback_dispatcher() {
        let dispatcher = spawn_dispatcher(LoopbackBackend::new(Duration::from_millis(5))).unwrap();
        let mut state = AppState::new(Config::default(), dispatcher.request_sender(), (120, 40));

        state.focus = FocusedPanel::Upscale;
        handle_event(key(KeyCode::Enter), &mut state).unwrap();
        assert!(state.is_loading());

        let response = dispatcher
            .response_rx
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        state.handle_dispatch_response(response);

        assert!(!state.is_loading());
        let entry = state.host.activity().next().unwrap();
        assert_eq!(entry.kind, RequestKind::Upscale);
        assert!(matches!(entry.outcome, ActivityOutcome::Completed { .. }));

        dispatcher.shutdown();
    }
}
