use rand::Rng;

use crate::entities::{Enemy, Explosion, Player, Projectile, Rect, ScoreBanner};
use crate::input::InputState;

/// Viewport size in pixels.
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Hard cap on simultaneously live enemies.
pub const MAX_ENEMIES: usize = 40;

/// Points for destroying an enemy with a shot.
const KILL_SCORE: u32 = 100;

/// Bounding-box sizes, taken from the decoded sprite dimensions at
/// startup.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSizes {
    pub player: (i32, i32),
    pub enemy: (i32, i32),
    pub shot: (i32, i32),
    pub explosion: (i32, i32),
}

/// Mutable per-session game state: the score, the viewport bounds, and one
/// collection per entity kind. Owned by the app loop and passed around by
/// `&mut` — nothing global.
pub struct World {
    pub bounds: Rect,
    pub score: u32,
    /// `None` once the craft has been destroyed. Terminal; no respawn.
    pub player: Option<Player>,
    pub shots: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub banner: ScoreBanner,
    sizes: SpriteSizes,
}

impl World {
    pub fn new(sizes: SpriteSizes) -> Self {
        let bounds = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        let (pw, ph) = sizes.player;
        Self {
            bounds,
            score: 0,
            player: Some(Player::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - 64, pw, ph)),
            shots: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            banner: ScoreBanner::new(),
            sizes,
        }
    }

    pub fn player_alive(&self) -> bool {
        self.player.is_some()
    }

    /// Advances the simulation by one tick. The collections update in a
    /// fixed order — enemies, shots, player, banner, explosions — because
    /// the shot and player updates resolve collisions against the enemy
    /// collection as it stands at that point in the tick.
    pub fn update(&mut self, input: &InputState) {
        self.update_enemies();
        self.update_shots();
        self.update_player(input);
        self.banner.update(self.score);
        self.update_explosions();
    }

    fn update_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.update();
        }
        // Leaving through the bottom is not a kill: no score, no explosion.
        let bounds = self.bounds;
        self.enemies.retain(|e| !e.off_screen(&bounds));
    }

    fn update_shots(&mut self) {
        let mut spent = Vec::new();
        let mut killed = Vec::new();

        for (s_idx, shot) in self.shots.iter_mut().enumerate() {
            shot.update();
            if shot.off_screen(&self.bounds) {
                spent.push(s_idx);
                continue;
            }
            // First overlap in collection order wins; one kill per shot.
            for (e_idx, enemy) in self.enemies.iter().enumerate() {
                if killed.contains(&e_idx) {
                    continue;
                }
                if shot.rect.overlaps(&enemy.rect) {
                    killed.push(e_idx);
                    spent.push(s_idx);
                    break;
                }
            }
        }

        // Resolve after the scan so the indices collected above stay valid.
        killed.sort_unstable();
        for &e_idx in killed.iter().rev() {
            let enemy = self.enemies.remove(e_idx);
            self.spawn_explosion(enemy.rect);
            self.score += KILL_SCORE;
        }
        spent.sort_unstable();
        spent.dedup();
        for &s_idx in spent.iter().rev() {
            // The shot itself goes quietly: no explosion for it.
            self.shots.remove(s_idx);
        }
    }

    fn update_player(&mut self, input: &InputState) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        let hdir = input.right as i32 - input.left as i32;
        let vdir = input.down as i32 - input.up as i32;
        player.steer(hdir, vdir, &self.bounds);

        let (shot_w, shot_h) = self.sizes.shot;
        if let Some(shot) = player.try_fire(input.fire, shot_w, shot_h) {
            self.shots.push(shot);
        }

        // Contact with any enemy destroys both craft. Unlike a shot kill,
        // this path scores nothing.
        let player_rect = player.rect;
        let rammed: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| player_rect.overlaps(&enemy.rect))
            .map(|(e_idx, _)| e_idx)
            .collect();

        if !rammed.is_empty() {
            for &e_idx in rammed.iter().rev() {
                let enemy = self.enemies.remove(e_idx);
                self.spawn_explosion(enemy.rect);
            }
            self.spawn_explosion(player_rect);
            self.player = None;
        }
    }

    fn update_explosions(&mut self) {
        for explosion in &mut self.explosions {
            explosion.update();
        }
        self.explosions.retain(|e| !e.is_finished());
    }

    fn spawn_explosion(&mut self, at: Rect) {
        let (w, h) = self.sizes.explosion;
        self.explosions.push(Explosion::new(at.x, at.y, w, h));
    }

    /// Spawn step, run once per tick after rendering: at most one new
    /// enemy, with exactly 1-in-10 odds, never past the live-enemy cap.
    /// The new enemy starts fully above the top edge at a random column.
    pub fn spawn_enemies(&mut self, rng: &mut impl Rng) {
        if self.enemies.len() >= MAX_ENEMIES {
            return;
        }
        if rng.random_range(0..1000) % 10 != 1 {
            return;
        }
        let (w, h) = self.sizes.enemy;
        let x = rng.random_range(0..SCREEN_WIDTH - w);
        self.enemies.push(Enemy::new(x, -h, w, h));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_sizes() -> SpriteSizes {
        SpriteSizes {
            player: (32, 32),
            enemy: (32, 32),
            shot: (8, 16),
            explosion: (32, 32),
        }
    }

    #[test]
    fn test_new_world_is_empty_but_for_the_player() {
        let world = World::new(test_sizes());
        assert!(world.player_alive());
        assert_eq!(world.score, 0);
        assert!(world.shots.is_empty());
        assert!(world.enemies.is_empty());
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn test_spawned_enemies_start_above_the_top_edge() {
        let mut world = World::new(test_sizes());
        let mut rng = StdRng::seed_from_u64(7);
        while world.enemies.is_empty() {
            world.spawn_enemies(&mut rng);
        }
        let enemy = &world.enemies[0];
        assert_eq!(enemy.rect.y, -32);
        assert!(enemy.rect.x >= 0);
        assert!(enemy.rect.right() <= SCREEN_WIDTH);
    }

    #[test]
    fn test_spawn_respects_the_enemy_cap() {
        let mut world = World::new(test_sizes());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            world.spawn_enemies(&mut rng);
            assert!(world.enemies.len() <= MAX_ENEMIES);
        }
        assert_eq!(world.enemies.len(), MAX_ENEMIES);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn input_from_bits(bits: u8) -> InputState {
            InputState {
                up: bits & 1 != 0,
                down: bits & 2 != 0,
                left: bits & 4 != 0,
                right: bits & 8 != 0,
                fire: bits & 16 != 0,
            }
        }

        proptest! {
            #[test]
            fn test_session_invariants_hold_under_random_play(
                seed in any::<u64>(),
                inputs in prop::collection::vec(0u8..32, 1..300)
            ) {
                let mut world = World::new(test_sizes());
                let mut rng = StdRng::seed_from_u64(seed);
                let mut last_score = 0;

                for bits in inputs {
                    world.update(&input_from_bits(bits));
                    world.spawn_enemies(&mut rng);

                    // Score never decreases; no penalties exist.
                    prop_assert!(world.score >= last_score);
                    last_score = world.score;

                    // The cap holds right after the spawn step.
                    prop_assert!(world.enemies.len() <= MAX_ENEMIES);

                    // The craft, while alive, sits fully inside the bounds.
                    if let Some(player) = &world.player {
                        prop_assert!(player.rect.x >= 0 && player.rect.y >= 0);
                        prop_assert!(player.rect.right() <= SCREEN_WIDTH);
                        prop_assert!(player.rect.bottom() <= SCREEN_HEIGHT);
                    }
                }
            }
        }
    }
}
