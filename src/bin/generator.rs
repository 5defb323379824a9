use rand::Rng;
use tracing::debug;

use crate::bin::border::{Border, Orientation};
use crate::bin::grid::Maze;

/// Génère un labyrinthe aléatoire cohérent : chaque côté partagé est fermé (ou ouvert)
/// des deux côtés à la fois, avec la probabilité `wall_probability`. Les côtés
/// extérieurs sont tirés de la même façon.
///
/// Retourne `None` si une dimension est nulle.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    wall_probability: f64,
    rng: &mut R,
) -> Option<Maze> {
    if rows == 0 || cols == 0 {
        return None;
    }
    let p = if wall_probability.is_nan() {
        0.0
    } else {
        wall_probability.clamp(0.0, 1.0)
    };
    let mut cells = vec![0u8; rows * cols];
    let index = |row: usize, col: usize| row * cols + col;

    for row in 0..rows {
        for col in 0..cols {
            if col == 0 && rng.random_bool(p) {
                cells[index(row, col)] |= Border::Left.bit();
            }
            if col + 1 == cols && rng.random_bool(p) {
                cells[index(row, col)] |= Border::Right.bit();
            }
            if col + 1 < cols && rng.random_bool(p) {
                cells[index(row, col)] |= Border::Right.bit();
                cells[index(row, col + 1)] |= Border::Left.bit();
            }

            match Orientation::of(row, col) {
                Orientation::FlatBottom if row + 1 < rows => {
                    if rng.random_bool(p) {
                        cells[index(row, col)] |= Border::TopOrBottom.bit();
                        cells[index(row + 1, col)] |= Border::TopOrBottom.bit();
                    }
                }
                Orientation::FlatBottom => {
                    if rng.random_bool(p) {
                        cells[index(row, col)] |= Border::TopOrBottom.bit();
                    }
                }
                Orientation::FlatTop if row == 0 => {
                    if rng.random_bool(p) {
                        cells[index(row, col)] |= Border::TopOrBottom.bit();
                    }
                }
                // Côté haut partagé avec la cellule du dessus, déjà tiré.
                Orientation::FlatTop => {}
            }
        }
    }

    debug!(rows, cols, wall_probability = p, "maze generated");
    Maze::from_cells(rows, cols, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin::border::HandRule;
    use crate::bin::entry::start_border;
    use crate::bin::loader::parse_maze;
    use crate::bin::traversal::{trace_path, TraceOptions};
    use crate::bin::validator::is_valid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_mazes_are_valid() {
        let mut rng = StdRng::seed_from_u64(8778);
        for (rows, cols) in [(1, 1), (1, 6), (5, 1), (4, 5), (7, 9), (10, 10)] {
            for p in [0.0, 0.3, 0.7, 1.0] {
                let maze = generate(rows, cols, p, &mut rng).unwrap();
                assert!(is_valid(&maze), "{rows}x{cols} p={p}\n{maze}");
            }
        }
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let open = generate(3, 4, 0.0, &mut rng).unwrap();
        assert!(open.cells().iter().all(|&c| c == 0));
        let closed = generate(3, 4, 1.0, &mut rng).unwrap();
        assert!(closed.cells().iter().all(|&c| c == 0b111));
        assert!(generate(0, 4, 0.5, &mut rng).is_none());
    }

    #[test]
    fn test_text_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let maze = generate(6, 7, 0.5, &mut rng).unwrap();
            let reparsed = parse_maze(&maze.to_string()).unwrap();
            assert_eq!(reparsed, maze);
        }
    }

    #[test]
    fn test_every_entry_of_a_valid_maze_exits() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..30 {
            let maze = generate(6, 7, 0.5, &mut rng).unwrap();
            for row in 1..=maze.rows() {
                for col in 1..=maze.cols() {
                    for rule in [HandRule::LeftHand, HandRule::RightHand] {
                        if start_border(&maze, row, col, rule).is_none() {
                            continue;
                        }
                        let path = trace_path(&maze, row, col, rule, TraceOptions::default())
                            .unwrap_or_else(|e| panic!("{row},{col} {rule:?}: {e}\n{maze}"));
                        assert_eq!(path[0], (row, col));
                    }
                }
            }
        }
    }
}
