use std::path::Path;

use tracing::{info, warn};

pub mod bin;

pub use crate::bin::border::{Border, HandRule, Orientation};
pub use crate::bin::entry::start_border;
pub use crate::bin::error::{MazeError, Result};
pub use crate::bin::grid::{Maze, Position};
pub use crate::bin::loader::{load_maze, parse_maze};
pub use crate::bin::traversal::{trace_path, TraceOptions, Walk};
pub use crate::bin::validator::{is_valid, validate};

pub const ADDRESS: &str = "localhost:8778";

/// Mode `--test` : charge le fichier et vérifie sa cohérence.
///
/// Un fichier illisible ou mal formé est simplement invalide.
pub fn validate_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match load_maze(path) {
        Ok(maze) => is_valid(&maze),
        Err(err) => {
            info!(path = %path.display(), %err, "maze could not be loaded");
            false
        }
    }
}

/// Mode `--rpath` / `--lpath` : charge le fichier et parcourt le chemin de sortie.
///
/// Un labyrinthe incohérent est tout de même parcouru, la limite de pas empêche de boucler.
pub fn trace_file(
    path: impl AsRef<Path>,
    row: usize,
    col: usize,
    rule: HandRule,
    options: TraceOptions,
) -> Result<Vec<Position>> {
    let maze = load_maze(path)?;
    if !is_valid(&maze) {
        warn!("maze failed validation, walking it anyway");
    }
    trace_path(&maze, row, col, rule, options)
}
