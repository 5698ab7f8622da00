use std::path::Path;
use std::time::{Duration, Instant};

use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::assets::Assets;
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};
use crate::world::World;

/// Frame budget for the fixed-rate loop (60 Hz).
const FRAME: Duration = Duration::from_micros(16_667);

/// Background scroll in pixels per frame.
const BACKGROUND_SPEED: i32 = 2;

/// The main application: owns the world, the input pump, the renderer and
/// the decoded assets, and runs the fixed-rate loop until the session ends.
pub struct App {
    running: bool,
    world: World,
    input: InputManager,
    renderer: GameRenderer,
    assets: Assets,
    background_y: i32,
}

impl App {
    /// Loads assets and builds a fresh session. An asset failure aborts
    /// startup with an error naming the file.
    pub fn new(asset_dir: &Path) -> Result<Self> {
        let assets = Assets::load(asset_dir)?;
        let world = World::new(assets.sizes());
        Ok(Self {
            running: true,
            world,
            input: InputManager::new(),
            renderer: GameRenderer::new(),
            assets,
            background_y: 0,
        })
    }

    /// Runs the loop until the player is destroyed or exit is requested.
    /// Each tick: sample input, scroll the background, advance the
    /// simulation, draw, run the spawn check, then sleep out the rest of
    /// the frame budget. An overrunning tick just starts the next one
    /// late; there is no catch-up.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Exit keys are honored at the tick boundary only, so a
            // request arriving mid-tick lets the frame finish first.
            self.input.poll_events()?;
            if self.input.exit_requested() {
                break;
            }

            let tile_height = self.assets.background.height.max(1);
            self.background_y = (self.background_y + BACKGROUND_SPEED) % tile_height;

            self.world.update(&self.input.state());

            let view = RenderView {
                world: &self.world,
                assets: &self.assets,
                background_y: self.background_y,
            };
            terminal.draw(|frame| self.renderer.render(frame, &view))?;

            self.world.spawn_enemies(&mut rand::rng());

            // The session ends once the player is gone.
            if !self.world.player_alive() {
                self.running = false;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME {
                std::thread::sleep(FRAME - elapsed);
            }
        }
        Ok(())
    }
}
