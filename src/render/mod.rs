//! Rendering
//!
//! Frames are composed into a ratatui `Buffer` and handed to a [`Presenter`]
//! for output. Map cell (x, y) lands on the buffer cell offset by the buffer's
//! own origin; anything past the buffer edge is clipped.

pub mod terminal;

pub use terminal::TerminalPresenter;

use ratatui::buffer::{Buffer, Cell};
use ratatui::style::Color;

use crate::ecs::{Position, Renderable};
use crate::world::{Graphic, Map};

/// Output for finished frames
pub trait Presenter {
    type Error;

    fn present(&mut self, frame: &Buffer) -> Result<(), Self::Error>;
}

/// Convert an RGB triple to a ratatui color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn cell_at(surface: &mut Buffer, x: i32, y: i32) -> Option<&mut Cell> {
    let x = surface.area.x.checked_add(u16::try_from(x).ok()?)?;
    let y = surface.area.y.checked_add(u16::try_from(y).ok()?)?;
    surface.cell_mut((x, y))
}

/// Draw every map cell according to its visibility state
pub fn draw_map(map: &Map, surface: &mut Buffer) {
    for y in 0..map.height {
        for x in 0..map.width {
            let graphic = map[(x, y)].graphic(map.is_visible(x, y), map.is_explored(x, y));
            draw_graphic(surface, x, y, graphic);
        }
    }
}

fn draw_graphic(surface: &mut Buffer, x: i32, y: i32, graphic: Graphic) {
    if let Some(cell) = cell_at(surface, x, y) {
        cell.set_char(graphic.glyph)
            .set_fg(rgb(graphic.fg))
            .set_bg(rgb(graphic.bg));
    }
}

/// Draw an entity glyph over whatever terrain is already there
pub fn draw_entity(surface: &mut Buffer, pos: Position, renderable: &Renderable) {
    if let Some(cell) = cell_at(surface, pos.x, pos.y) {
        cell.set_char(renderable.glyph).set_fg(rgb(renderable.fg));
    }
}
