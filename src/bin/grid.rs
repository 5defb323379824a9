use std::fmt;

use crate::bin::border::{Border, Orientation, BORDER_MASK};
use crate::bin::error::{MazeError, Result};

/// Position (ligne, colonne) en indices 1, telle qu'elle est affichée dans un chemin.
pub type Position = (usize, usize);

/// Labyrinthe rectangulaire de cellules triangulaires.
///
/// Chaque octet stocke les bords fermés de la cellule (bit0 gauche, bit1 droite,
/// bit2 haut/bas). Stockage ligne par ligne, dimensions fixées à la construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Maze {
    /// Construit un labyrinthe à partir de ses cellules déjà lues.
    ///
    /// Retourne `None` si une dimension est nulle ou si `cells` n'a pas `rows * cols` éléments.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Option<Self> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Labyrinthe sans aucun mur.
    pub fn open(rows: usize, cols: usize) -> Option<Self> {
        Self::from_cells(rows, cols, vec![0; rows * cols])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Valeur de la cellule (indices 0). Panique hors du labyrinthe.
    pub fn cell_value(&self, row: usize, col: usize) -> u8 {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} maze",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Valeur de la cellule (indices 0), `None` hors du labyrinthe.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Vrai si la position (indices 1) est dans le labyrinthe.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// Vrai si la position (indices 1) touche le bord extérieur.
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && (row == 1 || row == self.rows || col == 1 || col == self.cols)
    }

    /// Le bord `border` de la cellule (indices 1) est-il fermé ?
    ///
    /// L'appelant garantit `1 <= row <= rows` et `1 <= col <= cols`.
    pub fn has_border(&self, row: usize, col: usize, border: Border) -> bool {
        debug_assert!(self.contains(row, col), "cell {row},{col} outside maze");
        border.is_set(self.cell_value(row - 1, col - 1))
    }

    /// Variante vérifiée de [`Maze::has_border`].
    pub fn try_has_border(&self, row: usize, col: usize, border: Border) -> Result<bool> {
        if !self.contains(row, col) {
            return Err(MazeError::OutOfRange { row, col });
        }
        Ok(self.has_border(row, col, border))
    }

    /// Vrai si les trois bords de la cellule (indices 1) sont fermés.
    pub fn is_closed_cell(&self, row: usize, col: usize) -> bool {
        self.cell_value(row - 1, col - 1) & BORDER_MASK == BORDER_MASK
    }

    pub fn orientation(&self, row: usize, col: usize) -> Orientation {
        Orientation::of(row, col)
    }

    /// Cellule atteinte en sortant par `border`, ou `None` si on quitte le labyrinthe.
    pub fn neighbour(&self, row: usize, col: usize, border: Border) -> Option<Position> {
        let (next_row, next_col) = match border {
            Border::Left => (Some(row), col.checked_sub(1)),
            Border::Right => (Some(row), Some(col + 1)),
            Border::TopOrBottom => {
                let step = Orientation::of(row, col).vertical_step();
                (row.checked_add_signed(step), Some(col))
            }
        };
        match (next_row, next_col) {
            (Some(r), Some(c)) if self.contains(r, c) => Some((r, c)),
            _ => None,
        }
    }
}

/// Format texte : `rows cols` puis une ligne de chiffres par rangée.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|c| (c & BORDER_MASK).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
