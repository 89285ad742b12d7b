//! Composition and rendering benchmarks

use artpanels::config::Config;
use artpanels::panels::{RenderStyle, StylePromptSelector, PRESETS};
use artpanels::state::AppState;
use artpanels::ui;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossbeam_channel::unbounded;
use ratatui::{backend::TestBackend, Terminal};

fn benchmark_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prompt Composition");

    for style in RenderStyle::all() {
        let mut selector = StylePromptSelector::with_render_style(*style);
        selector.select_preset(&PRESETS[5], false);

        group.bench_function(format!("preset_{:?}", style), |b| {
            b.iter(|| black_box(&selector).composed_prompt())
        });
    }

    let mut selector = StylePromptSelector::new();
    group.bench_function("typing_40_chars", |b| {
        b.iter(|| {
            selector.set_custom_text("", false);
            for c in "Hand-drawn ink with heavy cross hatching".chars() {
                selector.push_char(black_box(c), false);
            }
        })
    });

    group.finish();
}

fn benchmark_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frame Rendering");

    for (width, height) in [(80u16, 40u16), (120, 40), (200, 60)] {
        let (tx, _rx) = unbounded();
        let mut state = AppState::new(Config::default(), tx, (width, height));
        state.style_panel.select_preset(&PRESETS[4], false);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        group.bench_function(format!("{}x{}", width, height), |b| {
            b.iter(|| {
                terminal
                    .draw(|frame| ui::render(frame, black_box(&state)))
                    .unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compose, benchmark_frame_render);
criterion_main!(benches);
