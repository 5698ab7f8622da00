mod banner;
mod enemy;
mod explosion;
mod player;
mod projectile;
mod rect;

// Re-export all public types
pub use banner::ScoreBanner;
pub use enemy::Enemy;
pub use explosion::{Explosion, FRAME_COUNT as EXPLOSION_FRAME_COUNT};
pub use player::Player;
pub use projectile::Projectile;
pub use rect::Rect;
