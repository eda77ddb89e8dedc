use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::assets::{resolve_assets_dir, Assets};
use flappy::clock::FrameClock;
use flappy::constants::TARGET_FPS;
use flappy::game::{InputOutcome, World};
use flappy::input::map_key;
use flappy::logging::init_logging;
use flappy::ui::game_scene::render_game;
use rand::Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Assets are checked before the terminal is touched so the error stays readable.
    let assets_dir = resolve_assets_dir();
    let assets = match Assets::load(&assets_dir) {
        Ok(assets) => assets,
        Err(e) => {
            tracing::error!(error = %e, "failed to load assets");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut world = World::new(assets.sizes());
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut world, &assets, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Input, update, render, sleep. Returns when the player quits.
fn run_game_loop<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    world: &mut World,
    assets: &Assets,
    rng: &mut R,
) -> io::Result<()> {
    let mut clock = FrameClock::new(TARGET_FPS);
    tracing::info!(fps = TARGET_FPS, "entering frame loop");

    loop {
        let dt = clock.tick();

        // Drain every pending event without blocking
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if world.handle_input(map_key(key_event)) == InputOutcome::Quit {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }

        world.update(dt, rng);

        terminal.draw(|frame| render_game(frame, world, assets))?;

        clock.wait_for_next_frame();
    }
}
