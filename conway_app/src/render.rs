// render.rs - Text renderer for the headless driver
// Keeps one glyph per cell id and updates it from change notifications

use std::io::{self, Write};

use conway::{CellChange, CellObserver, GenerationStats, Grid};

const LIVE: u8 = b'#';
const DEAD: u8 = b'.';

pub struct TextRenderer {
    columns: usize,
    frame: Vec<u8>,
    clear_screen: bool,
}

impl TextRenderer {
    /// Initial render pass: one glyph per cell, keyed by its id.
    pub fn new(grid: &Grid) -> Self {
        let mut frame = vec![DEAD; grid.len()];
        for cell in grid.cells() {
            frame[cell.id().0] = glyph(cell.is_alive());
        }
        Self {
            columns: grid.columns(),
            frame,
            clear_screen: false,
        }
    }

    /// Moves the cursor home and clears the terminal before each frame.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn present<W: Write>(&self, out: &mut W, grid: &Grid, stats: Option<&GenerationStats>) -> io::Result<()> {
        if self.clear_screen {
            out.write_all(b"\x1b[H\x1b[2J")?;
        }
        write!(out, "generation {} population {}", grid.generation(), grid.population())?;
        if let Some(stats) = stats {
            write!(out, " (+{} -{})", stats.births, stats.deaths)?;
        }
        writeln!(out)?;
        for row in self.frame.chunks(self.columns) {
            out.write_all(row)?;
            writeln!(out)?;
        }
        out.flush()
    }
}

impl CellObserver for TextRenderer {
    fn cell_changed(&mut self, change: &CellChange) {
        self.frame[change.id.0] = glyph(change.alive);
    }
}

fn glyph(alive: bool) -> u8 {
    if alive { LIVE } else { DEAD }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: &TextRenderer, grid: &Grid) -> String {
        let mut out = Vec::new();
        renderer.present(&mut out, grid, None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_pass_draws_current_state() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_alive(0, 1, true).unwrap();
        let renderer = TextRenderer::new(&grid);
        assert_eq!(rendered(&renderer, &grid), "generation 0 population 1\n.#.\n...\n");
    }

    #[test]
    fn follows_notifications() {
        let mut grid = Grid::new(3, 3).unwrap();
        for c in 0..3 {
            grid.set_alive(1, c, true).unwrap();
        }
        let mut renderer = TextRenderer::new(&grid);
        let mut stats = GenerationStats::default();
        grid.advance_generation_with(&mut (&mut renderer, &mut stats));

        let mut out = Vec::new();
        renderer.present(&mut out, &grid, Some(&stats)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "generation 1 population 3 (+2 -2)\n.#.\n.#.\n.#.\n"
        );
    }

    #[test]
    fn clear_screen_prefixes_escape() {
        let grid = Grid::new(1, 1).unwrap();
        let renderer = TextRenderer::new(&grid).with_clear_screen(true);
        assert!(rendered(&renderer, &grid).starts_with("\x1b[H\x1b[2J"));
    }
}
