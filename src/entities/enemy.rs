use super::rect::Rect;

/// Downward travel in pixels per frame.
const SPEED: i32 = 4;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
}

impl Enemy {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn update(&mut self) {
        self.rect.y += SPEED;
    }

    /// True once the top edge has passed the bottom of `bounds` (strictly
    /// greater). Leaving this way is silent: no score, no explosion.
    pub fn off_screen(&self, bounds: &Rect) -> bool {
        self.rect.y > bounds.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_moves_down() {
        let mut enemy = Enemy::new(100, -32, 32, 32);
        enemy.update();
        assert_eq!(enemy.rect.y, -28);
        enemy.update();
        assert_eq!(enemy.rect.y, -24);
    }

    #[test]
    fn test_off_screen_boundary_is_strict() {
        let bounds = Rect::new(0, 0, 640, 480);

        let mut enemy = Enemy::new(100, 480, 32, 32);
        assert!(!enemy.off_screen(&bounds));

        enemy.rect.y = 481;
        assert!(enemy.off_screen(&bounds));
    }

    #[test]
    fn test_enemy_from_spawn_row_leaves_after_129_ticks() {
        let bounds = Rect::new(0, 0, 640, 480);
        let mut enemy = Enemy::new(100, -32, 32, 32);

        for _ in 0..128 {
            enemy.update();
            assert!(!enemy.off_screen(&bounds));
        }
        assert_eq!(enemy.rect.y, 480);

        enemy.update();
        assert!(enemy.off_screen(&bounds));
    }
}
