use crossterm::Result;

use crate::snake::Cell;
use crate::stage::Stage;
use crate::term::TermManager;
use crate::{TermCoords, TermInt};

// Body and food share one glyph; nothing distinguishes them on screen.
const CELL_CHAR: char = '●';

// Screen layout: highest score on the top row, bordered play area
// below it, current score under the bottom border.
const GRID_LEFT: TermInt = 1;
const GRID_TOP: TermInt = 2;

pub fn required_size(cols: u16, rows: u16) -> TermCoords {
    (cols + 2, rows + 4)
}

/// Full clear and redraw from the stage, nothing retained in between.
pub fn draw(term: &mut TermManager, stage: &Stage) -> Result<()> {
    let cols = stage.config().grid_cols();
    let rows = stage.config().grid_rows();

    term.clear()?;
    draw_border(term, cols, rows)?;

    for cell in stage.body() {
        draw_cell(term, *cell)?;
    }
    draw_cell(term, stage.food())?;

    term.print_text((GRID_LEFT, 0), &format!("Highest Score: {}", stage.highest_score()))?;
    term.print_text(
        (GRID_LEFT, GRID_TOP + rows + 1),
        &format!("Current Score: {}", stage.score()),
    )?;
    term.flush()
}

fn draw_cell(term: &mut TermManager, cell: Cell) -> Result<()> {
    let x = GRID_LEFT + cell.x as TermInt;
    let y = GRID_TOP + cell.y as TermInt;
    term.print_at((x, y), CELL_CHAR)
}

fn draw_border(term: &mut TermManager, cols: u16, rows: u16) -> Result<()> {
    let top = GRID_TOP - 1;
    let bottom = GRID_TOP + rows;
    let right = GRID_LEFT + cols;

    for x in 0..=right {
        let ch = if x == 0 || x == right { '+' } else { '-' };
        term.print_at((x, top), ch)?;
        term.print_at((x, bottom), ch)?;
    }

    for y in (top + 1)..bottom {
        term.print_at((0, y), '|')?;
        term.print_at((right, y), '|')?;
    }

    Ok(())
}
