use super::projectile::Projectile;
use super::rect::Rect;

/// Movement in pixels per frame, per axis.
const SPEED: i32 = 4;

/// Frames between shots while fire is held.
const RELOAD_FRAMES: u8 = 8;

/// Gap between the craft's top edge and a freshly fired shot's top edge.
const MUZZLE_OFFSET: i32 = 16;

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Counts down to zero; the craft can only fire at zero.
    pub reload: u8,
}

impl Player {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            reload: 0,
        }
    }

    /// Applies one tick of directional input (`hdir`/`vdir` each in
    /// {-1, 0, 1}) and clamps the craft fully inside `bounds`.
    pub fn steer(&mut self, hdir: i32, vdir: i32, bounds: &Rect) {
        self.rect.x += hdir * SPEED;
        self.rect.y += vdir * SPEED;
        self.rect = self.rect.clamped_into(bounds);
    }

    /// Ticks the reload counter, then fires if `fire` is held and the
    /// craft has reloaded. The shot spawns centered above the craft.
    pub fn try_fire(&mut self, fire: bool, shot_width: i32, shot_height: i32) -> Option<Projectile> {
        if self.reload > 0 {
            self.reload -= 1;
        }
        if fire && self.reload == 0 {
            self.reload = RELOAD_FRAMES;
            return Some(Projectile::new(
                self.rect.center_x(),
                self.rect.y - MUZZLE_OFFSET,
                shot_width,
                shot_height,
            ));
        }
        None
    }
}
