//! Main entry point for the artpanels demo host

use std::{
    io::{self, Stdout},
    panic,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use artpanels::{
    config::Config,
    input::handle_event,
    logging,
    panels::{compose_once, PromptChoice, RenderStyle, PRESETS},
    state::AppState,
    ui,
    worker::{spawn_dispatcher, DispatcherHandle, LoopbackBackend},
};

/// Target frame time for 60 FPS
const FRAME_TIME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about = "ASCII art style and upscale panels for the terminal")]
struct Args {
    /// Print the preset catalog and exit
    #[arg(long)]
    list_presets: bool,

    /// Print the composed prompt for --preset or --custom and exit
    #[arg(long)]
    compose: bool,

    /// Preset name to compose from (case-insensitive)
    #[arg(long, requires = "compose", conflicts_with = "custom")]
    preset: Option<String>,

    /// Custom style description to compose from
    #[arg(long, requires = "compose")]
    custom: Option<String>,

    /// Render style: outlines or solid
    #[arg(long)]
    style: Option<RenderStyle>,

    /// Override how long the loopback dispatcher holds each request
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Override the log file location
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration; command line overrides are not written back
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {:#}", e);
        Config::default()
    });
    if let Some(latency_ms) = args.latency_ms {
        config.host.latency_ms = latency_ms;
    }
    if let Some(ref log_file) = args.log_file {
        config.logging.file = Some(log_file.clone());
    }
    if let Some(style) = args.style {
        config.panels.default_render_style = style;
    }

    if args.list_presets {
        for preset in PRESETS.iter() {
            println!("{}: {}", preset.name, preset.prompt_fragment);
        }
        return Ok(());
    }

    if args.compose {
        return run_compose_once(&args, config.panels.default_render_style);
    }

    if let Err(e) = logging::init(&config.log_path(), &config.logging.level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let dispatcher = spawn_dispatcher(LoopbackBackend::new(Duration::from_millis(
        config.host.latency_ms,
    )))
    .context("spawning dispatcher thread")?;

    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app_state = AppState::new(config, dispatcher.request_sender(), size);
    info!(width = size.0, height = size.1, "starting panels");

    // Initialize terminal
    let mut terminal = setup_terminal()?;

    // Run main event loop
    let result = run_event_loop(&mut terminal, &mut app_state, &dispatcher);

    // Cleanup
    cleanup_terminal(terminal)?;

    dispatcher.shutdown();

    // Leave a default config behind on first run; an existing file is never rewritten
    match Config::default().save_if_missing() {
        Ok(true) => info!("wrote default config"),
        Ok(false) => {}
        Err(e) => warn!("failed to write default config: {:#}", e),
    }

    result
}

/// Print one composed prompt without starting the TUI
fn run_compose_once(args: &Args, style: RenderStyle) -> Result<()> {
    let choice = match (&args.preset, &args.custom) {
        (Some(name), _) => PromptChoice::Preset(name),
        (None, Some(text)) => PromptChoice::Custom(text),
        (None, None) => bail!("--compose needs --preset or --custom"),
    };

    let composed = compose_once(choice, style)?;
    println!("{}", composed);
    Ok(())
}

/// Set up the terminal for TUI rendering
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop - handles input, processes dispatcher responses, renders UI
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app_state: &mut AppState,
    dispatcher: &DispatcherHandle,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_TIME_MS);

    loop {
        let frame_start = Instant::now();

        // Render UI
        terminal.draw(|frame| ui::render(frame, app_state))?;

        // Poll for events with timeout
        let timeout = frame_duration.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;

            // Handle terminal resize
            if let Event::Resize(width, height) = event {
                app_state.set_terminal_size(width, height);
            }

            // Handle input
            handle_event(event, app_state)?;
        }

        // Process dispatcher responses (non-blocking)
        while let Ok(response) = dispatcher.response_rx.try_recv() {
            app_state.handle_dispatch_response(response);
        }

        // Check for quit
        if app_state.should_quit {
            break;
        }
    }

    info!("exiting");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_compose_inputs_require_compose() {
        assert!(Args::try_parse_from(["artpanels", "--preset", "Glitch Art"]).is_err());
        assert!(Args::try_parse_from(["artpanels", "--custom", "Ukiyo-e"]).is_err());

        let args =
            Args::try_parse_from(["artpanels", "--compose", "--preset", "Glitch Art"]).unwrap();
        assert_eq!(args.preset.as_deref(), Some("Glitch Art"));
        assert!(Args::try_parse_from(["artpanels", "--compose", "--custom", "Ukiyo-e"]).is_ok());
    }

    #[test]
    fn test_preset_and_custom_conflict() {
        assert!(Args::try_parse_from([
            "artpanels",
            "--compose",
            "--preset",
            "Glitch Art",
            "--custom",
            "Ukiyo-e"
        ])
        .is_err());
    }
}
