// Library exports for testing
pub use entities::{EXPLOSION_FRAME_COUNT, Enemy, Explosion, Player, Projectile, Rect, ScoreBanner};
pub use input::InputState;
pub use world::{MAX_ENEMIES, SCREEN_HEIGHT, SCREEN_WIDTH, SpriteSizes, World};

pub mod app;
pub mod assets;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod world;
