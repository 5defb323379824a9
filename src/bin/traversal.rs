use tracing::{debug, trace};

use crate::bin::border::{Border, HandRule};
use crate::bin::entry::start_border;
use crate::bin::error::{MazeError, Result};
use crate::bin::grid::{Maze, Position};

/// Réglages d'un parcours.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceOptions {
    /// Nombre maximal de pas avant d'abandonner. `None` : `3 * rows * cols`, le nombre
    /// d'états (cellule, mur suivi) distincts ; au-delà un état s'est forcément répété.
    pub max_steps: Option<usize>,
}

impl TraceOptions {
    pub fn step_limit(&self, maze: &Maze) -> usize {
        self.max_steps
            .unwrap_or_else(|| maze.rows().saturating_mul(maze.cols()).saturating_mul(3))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// La cellule d'entrée n'a pas encore été émise.
    Entering,
    AtCell,
    Exited,
}

/// Parcours paresseux « main contre le mur ».
///
/// Émet chaque cellule visitée (indices 1), de la cellule d'entrée jusqu'à la dernière
/// cellule avant la sortie. Une erreur est émise au plus une fois, puis l'itérateur s'arrête.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    maze: &'a Maze,
    rule: HandRule,
    row: usize,
    col: usize,
    border: Border,
    state: WalkState,
    steps: usize,
    limit: usize,
}

impl<'a> Walk<'a> {
    /// Prépare un parcours depuis une cellule d'entrée du bord extérieur.
    pub fn new(
        maze: &'a Maze,
        row: usize,
        col: usize,
        rule: HandRule,
        options: TraceOptions,
    ) -> Result<Self> {
        if !maze.contains(row, col) {
            return Err(MazeError::OutOfRange { row, col });
        }
        let border = start_border(maze, row, col, rule).ok_or(MazeError::CannotEnter { row, col })?;
        Ok(Self::with_border(maze, row, col, border, rule, options))
    }

    /// Parcours depuis une cellule et un mur suivi donnés, sans passer par la résolution d'entrée.
    pub fn with_border(
        maze: &'a Maze,
        row: usize,
        col: usize,
        border: Border,
        rule: HandRule,
        options: TraceOptions,
    ) -> Self {
        Self {
            maze,
            rule,
            row,
            col,
            border,
            state: WalkState::Entering,
            steps: 0,
            limit: options.step_limit(maze),
        }
    }

    /// Tourne autour de la cellule courante jusqu'à trouver un côté ouvert.
    fn find_opening(&mut self) -> Result<Border> {
        let degenerate = MazeError::DegenerateCell {
            row: self.row,
            col: self.col,
        };
        if self.maze.is_closed_cell(self.row, self.col) {
            return Err(degenerate);
        }

        let orientation = self.maze.orientation(self.row, self.col);
        let mut border = self.border;
        for _ in 0..Border::ALL.len() {
            if !self.maze.has_border(self.row, self.col, border) {
                return Ok(border);
            }
            border = border.rotate(self.rule, orientation);
        }
        Err(degenerate)
    }

    /// Un pas : franchit le premier côté ouvert. `None` quand on sort du labyrinthe.
    fn advance(&mut self) -> Result<Option<Position>> {
        let opening = self.find_opening()?;
        let Some((row, col)) = self.maze.neighbour(self.row, self.col, opening) else {
            debug!(row = self.row, col = self.col, border = ?opening, steps = self.steps, "left the maze");
            return Ok(None);
        };

        self.steps += 1;
        if self.steps > self.limit {
            return Err(MazeError::StepLimit { limit: self.limit });
        }

        self.row = row;
        self.col = col;
        self.border = opening
            .seen_from_neighbour()
            .rotate(self.rule, self.maze.orientation(row, col));
        trace!(row, col, border = ?self.border, "step");
        Ok(Some((row, col)))
    }
}

impl Iterator for Walk<'_> {
    type Item = Result<Position>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            WalkState::Exited => None,
            WalkState::Entering => {
                self.state = WalkState::AtCell;
                Some(Ok((self.row, self.col)))
            }
            WalkState::AtCell => match self.advance() {
                Ok(Some(position)) => Some(Ok(position)),
                Ok(None) => {
                    self.state = WalkState::Exited;
                    None
                }
                Err(err) => {
                    self.state = WalkState::Exited;
                    Some(Err(err))
                }
            },
        }
    }
}

impl std::iter::FusedIterator for Walk<'_> {}

/// Parcourt tout le chemin de sortie depuis (`row`, `col`) et le retourne.
pub fn trace_path(
    maze: &Maze,
    row: usize,
    col: usize,
    rule: HandRule,
    options: TraceOptions,
) -> Result<Vec<Position>> {
    Walk::new(maze, row, col, rule, options)?.collect()
}
