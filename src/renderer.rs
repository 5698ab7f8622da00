use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::assets::{Assets, CELL_HEIGHT_PX, CELL_WIDTH_PX, Sprite};
use crate::world::World;

/// Pixel position of the score banner's top-left corner.
const BANNER_X: i32 = 10;
const BANNER_Y: i32 = 450;

/// Borrowed view of everything one frame needs.
pub struct RenderView<'a> {
    pub world: &'a World,
    pub assets: &'a Assets,
    /// Background scroll offset in pixels; wraps at the tile height.
    pub background_y: i32,
}

/// Handles all rendering responsibilities for the game. Sprites are cell
/// art painted straight into the frame buffer; pixel coordinates map onto
/// terminal cells at a fixed 8x16 pixels per cell.
pub struct GameRenderer;

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Paints one frame in painter's order: background first, then player,
    /// enemies, shots, score banner, explosions — later layers overwrite
    /// earlier ones where they overlap.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = frame.area();
        let buf = frame.buffer_mut();
        let world = view.world;

        self.draw_background(buf, area, view);

        if let Some(player) = &world.player {
            self.draw_sprite(buf, area, &view.assets.player, player.rect.x, player.rect.y);
        }
        for enemy in &world.enemies {
            self.draw_sprite(buf, area, &view.assets.enemy, enemy.rect.x, enemy.rect.y);
        }
        for shot in &world.shots {
            self.draw_sprite(buf, area, &view.assets.shot, shot.rect.x, shot.rect.y);
        }

        self.draw_banner(buf, area, &world.banner.text);

        for explosion in &world.explosions {
            let sprite = &view.assets.explosion[explosion.frame()];
            self.draw_sprite(buf, area, sprite, explosion.rect.x, explosion.rect.y);
        }
    }

    /// The background tile drawn twice, at the scroll offset and one tile
    /// height above it, so the seam wraps through the viewport.
    fn draw_background(&self, buf: &mut Buffer, area: Rect, view: &RenderView) {
        let tile = &view.assets.background;
        self.draw_sprite(buf, area, tile, 0, view.background_y);
        self.draw_sprite(buf, area, tile, 0, view.background_y - tile.height);
    }

    /// Paints a sprite's cell art with its pixel-space top-left at
    /// (`x`, `y`). Cells outside the terminal area are skipped.
    fn draw_sprite(&self, buf: &mut Buffer, area: Rect, sprite: &Sprite, x: i32, y: i32) {
        let col0 = x.div_euclid(CELL_WIDTH_PX);
        let row0 = y.div_euclid(CELL_HEIGHT_PX);

        for (r, line) in sprite.cells.iter().enumerate() {
            let row = row0 + r as i32;
            if row < 0 || row >= area.height as i32 {
                continue;
            }
            for (c, cell) in line.iter().enumerate() {
                let col = col0 + c as i32;
                if col < 0 || col >= area.width as i32 {
                    continue;
                }
                let Some((upper, lower)) = cell else {
                    continue;
                };
                if let Some(buf_cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    buf_cell.set_char('▀').set_fg(*upper).set_bg(*lower);
                }
            }
        }
    }

    fn draw_banner(&self, buf: &mut Buffer, area: Rect, text: &str) {
        let col = (BANNER_X / CELL_WIDTH_PX) as u16;
        let row = (BANNER_Y / CELL_HEIGHT_PX) as u16;
        if row >= area.height || col >= area.width {
            return;
        }
        buf.set_string(
            area.x + col,
            area.y + row,
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        );
    }
}
