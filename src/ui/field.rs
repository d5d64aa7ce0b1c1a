//! Braille raster of the logical playfield. Every terminal cell holds a 2x4
//! grid of dots, so the field is drawn at twice the column count and four
//! times the row count.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::app::App;
use crate::geometry;

pub const BACKGROUND: Color = Color::Rgb(0, 0, 10);

const SHIP_SPRITE: &[&str] = &[
    "....#....",
    "...###...",
    "...###...",
    ".#######.",
    "#########",
    "#########",
];

const ALIEN_SPRITE: [&[&str]; 2] = [
    &[
        "..#.....#..",
        "...#...#...",
        "..#######..",
        ".##.###.##.",
        "###########",
        "#.#######.#",
        "#.#.....#.#",
        "...##.##...",
    ],
    &[
        "..#.....#..",
        "#..#...#..#",
        "#.#######.#",
        "###.###.###",
        "###########",
        ".#########.",
        "..#.....#..",
        ".#.......#.",
    ],
];

/// Frames per alien animation step.
const ALIEN_ANIM_FRAMES: u64 = 30;

/// Dot map for one layer: cell (x, y) -> braille bit pattern.
pub type DotMap = HashMap<(usize, usize), u8>;

/// Maps logical screen pixels onto braille dots.
#[derive(Clone, Copy, Debug)]
pub struct Raster {
    pub dots_w: i32,
    pub dots_h: i32,
    scale_x: f32,
    scale_y: f32,
}

impl Raster {
    pub fn new(cols: usize, rows: usize, screen_w: i32, screen_h: i32) -> Self {
        let dots_w = (cols * 2) as i32;
        let dots_h = (rows * 4) as i32;
        Self {
            dots_w,
            dots_h,
            scale_x: dots_w as f32 / screen_w.max(1) as f32,
            scale_y: dots_h as f32 / screen_h.max(1) as f32,
        }
    }

    /// Dot span covered by a screen rect, at least one dot on each axis so
    /// thin bullets never vanish.
    pub fn span(&self, rect: &geometry::Rect) -> (i32, i32, i32, i32) {
        let x0 = (rect.left() as f32 * self.scale_x).floor() as i32;
        let y0 = (rect.top() as f32 * self.scale_y).floor() as i32;
        let x1 = ((rect.right() as f32 * self.scale_x).ceil() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() as f32 * self.scale_y).ceil() as i32).max(y0 + 1);
        (x0, y0, x1, y1)
    }

    /// Logical point to terminal cell.
    pub fn cell(&self, x: f32, y: f32) -> (usize, usize) {
        let bx = (x * self.scale_x).max(0.0) as usize;
        let by = (y * self.scale_y).max(0.0) as usize;
        (bx / 2, by / 4)
    }
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut DotMap, raster: &Raster, bx: i32, by: i32) {
    if bx < 0 || by < 0 || bx >= raster.dots_w || by >= raster.dots_h {
        return;
    }
    let (bx, by) = (bx as usize, by as usize);
    *map.entry((bx / 2, by / 4)).or_insert(0) |= braille_bit(bx % 2, by % 4);
}

/// Stretch a sprite bitmap over the dots a screen rect covers. A `None`
/// sprite fills the rect solid.
pub fn blit(map: &mut DotMap, raster: &Raster, rect: &geometry::Rect, sprite: Option<&[&str]>) {
    let (x0, y0, x1, y1) = raster.span(rect);
    let (w, h) = (x1 - x0, y1 - y0);
    for by in y0..y1 {
        for bx in x0..x1 {
            let on = match sprite {
                None => true,
                Some(rows) => {
                    let row = rows[((by - y0) * rows.len() as i32 / h) as usize].as_bytes();
                    row[((bx - x0) * row.len() as i32 / w) as usize] == b'#'
                }
            };
            if on {
                set_dot(map, raster, bx, by);
            }
        }
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bold: bool) {
    for (&(cx, cy), &bits) in map {
        if cy < grid.len() && cx < grid[cy].len() && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(BACKGROUND);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

/// Rasterize the playfield into `width` x `height` cells. Layers go
/// starfield, bullets, ship, aliens.
pub fn render_field(app: &App, width: usize, height: usize) -> Vec<Line<'static>> {
    let game = &app.game;
    let settings = &game.settings;
    let raster = Raster::new(width, height, settings.screen_width, settings.screen_height);

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(BACKGROUND)); width]; height];

    for star in app.stars.iter() {
        let (cx, cy) = raster.cell(star.x, star.y);
        if cy < height && cx < width {
            let b = star.brightness;
            grid[cy][cx] = ('.', Style::default().fg(Color::Rgb(b, b, b.saturating_add(20))).bg(BACKGROUND));
        }
    }

    let mut bullets = DotMap::new();
    for bullet in &game.bullets {
        blit(&mut bullets, &raster, &bullet.rect(), None);
    }
    write_layer(&mut grid, &bullets, Color::Rgb(255, 230, 120), true);

    let mut ship = DotMap::new();
    blit(&mut ship, &raster, &game.ship.rect(), Some(SHIP_SPRITE));
    write_layer(&mut grid, &ship, Color::Rgb(120, 200, 255), true);

    let anim = ALIEN_SPRITE[((game.tick / ALIEN_ANIM_FRAMES) % 2) as usize];
    let mut aliens = DotMap::new();
    for alien in &game.aliens {
        blit(&mut aliens, &raster, &alien.rect(), Some(anim));
    }
    write_layer(&mut grid, &aliens, Color::Rgb(80, 255, 150), false);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
