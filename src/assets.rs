use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use image::RgbaImage;
use ratatui::style::Color;

use crate::entities::EXPLOSION_FRAME_COUNT;
use crate::world::SpriteSizes;

/// Pixels covered by one terminal cell of sprite art. A cell is painted as
/// a half-block glyph, so it carries two vertically stacked colors.
pub const CELL_WIDTH_PX: i32 = 8;
pub const CELL_HEIGHT_PX: i32 = 16;

/// One cell of rendered sprite art: foreground (upper half) and background
/// (lower half) colors, or `None` where the source pixels are fully
/// transparent and the cell is skipped.
pub type SpriteCell = Option<(Color, Color)>;

/// A decoded sprite. The pixel dimensions drive the game's bounding boxes;
/// the cell grid is what the renderer paints.
#[derive(Debug)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    /// Row-major cell art, one entry per 8x16 pixel block.
    pub cells: Vec<Vec<SpriteCell>>,
}

impl Sprite {
    fn from_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let cols = width.div_ceil(CELL_WIDTH_PX as u32);
        let rows = height.div_ceil(CELL_HEIGHT_PX as u32);

        let mut cells = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let mut line = Vec::with_capacity(cols as usize);
            for col in 0..cols {
                let x0 = col * CELL_WIDTH_PX as u32;
                let y0 = row * CELL_HEIGHT_PX as u32;
                let half = CELL_HEIGHT_PX as u32 / 2;
                let upper = average_color(img, x0, y0, half);
                let lower = average_color(img, x0, y0 + half, half);
                line.push(match (upper, lower) {
                    (None, None) => None,
                    _ => Some((
                        upper.unwrap_or(Color::Reset),
                        lower.unwrap_or(Color::Reset),
                    )),
                });
            }
            cells.push(line);
        }

        Self {
            width: width as i32,
            height: height as i32,
            cells,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Average of the opaque pixels in one half-cell block, or `None` if every
/// pixel there is transparent (or the block lies outside the image).
fn average_color(img: &RgbaImage, x0: u32, y0: u32, block_height: u32) -> Option<Color> {
    let (width, height) = img.dimensions();
    let (mut r, mut g, mut b, mut count) = (0u32, 0u32, 0u32, 0u32);

    for y in y0..(y0 + block_height).min(height) {
        for x in x0..(x0 + CELL_WIDTH_PX as u32).min(width) {
            let pixel = img.get_pixel(x, y).0;
            if pixel[3] == 0 {
                continue;
            }
            r += pixel[0] as u32;
            g += pixel[1] as u32;
            b += pixel[2] as u32;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(Color::Rgb(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ))
}

/// Every image the game draws, decoded once at startup.
pub struct Assets {
    pub player: Sprite,
    pub enemy: Sprite,
    pub shot: Sprite,
    pub background: Sprite,
    pub explosion: Vec<Sprite>,
}

impl Assets {
    /// Loads and decodes every sprite from `dir`. A missing or undecodable
    /// file is fatal; the returned error names it.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            player: load_sprite(dir, "player.png")?,
            enemy: load_sprite(dir, "enemy.png")?,
            shot: load_sprite(dir, "shot.png")?,
            background: load_sprite(dir, "bg.png")?,
            explosion: (1..=EXPLOSION_FRAME_COUNT)
                .map(|i| load_sprite(dir, &format!("explosion_{i}.png")))
                .collect::<Result<Vec<_>>>()?,
        })
    }

    /// Bounding-box sizes the simulation runs with.
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.player.size(),
            enemy: self.enemy.size(),
            shot: self.shot.size(),
            explosion: self.explosion[0].size(),
        }
    }
}

fn load_sprite(dir: &Path, name: &str) -> Result<Sprite> {
    let path = dir.join(name);
    let img = image::open(&path)
        .wrap_err_with(|| format!("could not load image {}", path.display()))?
        .to_rgba8();
    Ok(Sprite::from_image(&img))
}
