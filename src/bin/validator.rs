use tracing::warn;

use crate::bin::border::{Border, Orientation};
use crate::bin::error::{MazeError, Result};
use crate::bin::grid::Maze;

/// Vérifie que chaque côté partagé par deux cellules voisines est vu de la même façon
/// des deux côtés. Retourne la première incohérence trouvée (indices 1).
pub fn validate(maze: &Maze) -> Result<()> {
    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let current = maze.cell_value(row, col);

            // Le bord droit de la cellule doit être le bord gauche de sa voisine.
            if col + 1 < maze.cols() {
                let right = maze.cell_value(row, col + 1);
                if ((current >> 1) ^ right) & Border::Left.bit() != 0 {
                    return Err(inconsistency(row, col, "right"));
                }
            }

            if Orientation::of(row, col) == Orientation::FlatBottom && row + 1 < maze.rows() {
                let below = maze.cell_value(row + 1, col);
                if (current ^ below) & Border::TopOrBottom.bit() != 0 {
                    return Err(inconsistency(row, col, "bottom"));
                }
            }
        }
    }
    Ok(())
}

pub fn is_valid(maze: &Maze) -> bool {
    match validate(maze) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "maze failed validation");
            false
        }
    }
}

fn inconsistency(row: usize, col: usize, edge: &'static str) -> MazeError {
    MazeError::Inconsistent {
        row: row + 1,
        col: col + 1,
        edge,
    }
}
