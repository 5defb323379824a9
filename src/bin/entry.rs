use tracing::debug;

use crate::bin::border::{Border, HandRule};
use crate::bin::grid::Maze;

/// Premier mur à suivre en entrant dans le labyrinthe par la cellule (`row`, `col`), indices 1.
///
/// Retourne `None` si la cellule n'est pas sur le bord extérieur, si le côté qui donne
/// vers l'extérieur est fermé ou si l'orientation de la cellule ne lui donne pas de côté
/// extérieur à cet endroit. Les cas sont testés dans l'ordre : colonne de gauche,
/// colonne de droite, première ligne, dernière ligne. Un coin dont le côté latéral est
/// fermé peut donc encore être accepté par la première ou la dernière ligne.
pub fn start_border(maze: &Maze, row: usize, col: usize, rule: HandRule) -> Option<Border> {
    if !maze.is_boundary(row, col) {
        return None;
    }

    let pick = |right_hand: Border, left_hand: Border| match rule {
        HandRule::RightHand => right_hand,
        HandRule::LeftHand => left_hand,
    };
    let row_odd = row % 2 != 0;

    let border = if col == 1 && !maze.has_border(row, col, Border::Left) {
        if row_odd {
            Some(pick(Border::Right, Border::TopOrBottom))
        } else {
            Some(pick(Border::TopOrBottom, Border::Right))
        }
    } else if col == maze.cols() && !maze.has_border(row, col, Border::Right) {
        if row_odd == (maze.cols() % 2 != 0) {
            Some(pick(Border::TopOrBottom, Border::Left))
        } else {
            Some(pick(Border::Left, Border::TopOrBottom))
        }
    } else if row == 1 && (row + col) % 2 == 0 && !maze.has_border(row, col, Border::TopOrBottom) {
        Some(pick(Border::Left, Border::Right))
    } else if row == maze.rows()
        && (row + col) % 2 != 0
        && !maze.has_border(row, col, Border::TopOrBottom)
    {
        Some(pick(Border::Right, Border::Left))
    } else {
        None
    };

    debug!(row, col, ?rule, ?border, "entry border resolved");
    border
}
