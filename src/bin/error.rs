use std::io;
use std::path::PathBuf;

/// Erreurs du chargement, de la validation et du parcours d'un labyrinthe.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("cannot read maze file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing or malformed `rows cols` header")]
    MissingHeader,

    #[error("line {line}: expected {expected} cells, found {found}")]
    BadRowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} rows, found {found}")]
    BadRowCount { expected: usize, found: usize },

    #[error("cell {row},{col} disagrees with its {edge} neighbour")]
    Inconsistent {
        row: usize,
        col: usize,
        edge: &'static str,
    },

    #[error("Can't enter the maze from cell on row `{row}` and column `{col}`")]
    CannotEnter { row: usize, col: usize },

    #[error("cell {row},{col} is outside the maze")]
    OutOfRange { row: usize, col: usize },

    #[error("cell {row},{col} is closed on every side")]
    DegenerateCell { row: usize, col: usize },

    #[error("walk did not leave the maze after {limit} steps")]
    StepLimit { limit: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl MazeError {
    /// Vrai pour les erreurs qui viennent d'un fichier illisible ou mal formé.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            MazeError::Io { .. }
                | MazeError::MissingHeader
                | MazeError::BadRowWidth { .. }
                | MazeError::BadRowCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
