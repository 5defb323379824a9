/*!
 * # Visualisation du labyrinthe
 *
 * Ce module convertit un `Maze` en une représentation ASCII, éventuellement avec
 * le chemin parcouru, et décrit les bords d'une cellule en texte.
 *
 * Chaque rangée donne une ligne de cellules : `v` pour une cellule à côté haut,
 * `^` pour une cellule à côté bas, `|` pour un mur gauche ou droit. Les côtés haut
 * et bas fermés sont dessinés par un `-` au-dessus de la première rangée et sous
 * chaque rangée.
 */

use std::collections::HashSet;

use crate::bin::border::{Border, Orientation};
use crate::bin::grid::{Maze, Position};

const PATH_MARK: char = '*';

/// Génère une représentation ASCII du labyrinthe.
pub fn visualize_maze_ascii(maze: &Maze) -> String {
    visualize_path(maze, &[])
}

/// Génère une représentation ASCII du labyrinthe où les cellules de `path` sont marquées `*`.
///
/// # Arguments
///
/// * `maze` - Le labyrinthe à dessiner.
/// * `path` - Les positions visitées (indices 1), par exemple le résultat d'un parcours.
pub fn visualize_path(maze: &Maze, path: &[Position]) -> String {
    let visited: HashSet<Position> = path.iter().copied().collect();
    let width = 1 + 2 * maze.cols();
    let mut out = String::new();

    let mut top = vec![' '; width];
    for col in 1..=maze.cols() {
        if Orientation::of(1, col) == Orientation::FlatTop && maze.has_border(1, col, Border::TopOrBottom) {
            top[2 * col - 1] = '-';
        }
    }
    push_line(&mut out, &top);

    for row in 1..=maze.rows() {
        let mut line = vec![' '; width];
        let mut below = vec![' '; width];
        if maze.has_border(row, 1, Border::Left) {
            line[0] = '|';
        }
        for col in 1..=maze.cols() {
            let orientation = Orientation::of(row, col);
            line[2 * col - 1] = if visited.contains(&(row, col)) {
                PATH_MARK
            } else {
                match orientation {
                    Orientation::FlatTop => 'v',
                    Orientation::FlatBottom => '^',
                }
            };
            if maze.has_border(row, col, Border::Right) {
                line[2 * col] = '|';
            }
            if orientation == Orientation::FlatBottom && maze.has_border(row, col, Border::TopOrBottom) {
                below[2 * col - 1] = '-';
            }
        }
        push_line(&mut out, &line);
        push_line(&mut out, &below);
    }
    out
}

/// Formate les bords fermés d'une cellule en une chaîne descriptive.
///
/// Retourne "Open" si aucun bord n'est fermé et "Closed" si les trois le sont.
pub fn format_cell(value: u8, orientation: Orientation) -> String {
    let names: Vec<&str> = Border::ALL
        .iter()
        .filter(|border| border.is_set(value))
        .map(|border| match (border, orientation) {
            (Border::Left, _) => "Left",
            (Border::Right, _) => "Right",
            (Border::TopOrBottom, Orientation::FlatTop) => "Top",
            (Border::TopOrBottom, Orientation::FlatBottom) => "Bottom",
        })
        .collect();

    match names.len() {
        0 => "Open".to_string(),
        3 => "Closed".to_string(),
        _ => names.join(" + "),
    }
}

fn push_line(out: &mut String, chars: &[char]) {
    let line: String = chars.iter().collect();
    out.push_str(line.trim_end());
    out.push('\n');
}
