/*!
 * # Lecture des fichiers de labyrinthe
 *
 * Format attendu :
 * - une première ligne `rows cols` (le texte qui suit est ignoré) ;
 * - puis `rows` lignes de données contenant chacune exactement `cols` chiffres entre 0 et 7.
 *
 * Dans une ligne de données, tout caractère qui n'est pas un chiffre entre 0 et 7 est sauté.
 * Une ligne sans aucun chiffre valide n'est pas comptée.
 */

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bin::error::{MazeError, Result};
use crate::bin::grid::Maze;

/// Charge et analyse le labyrinthe stocké dans `path`.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "maze file read");
    parse_maze(&text)
}

/// Analyse le texte d'un labyrinthe. Aucune grille partielle n'est jamais retournée.
pub fn parse_maze(text: &str) -> Result<Maze> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(MazeError::MissingHeader)?;
    let (rows, cols) = parse_header(header)?;

    let mut cells = Vec::new();
    let mut found_rows = 0;
    for (index, line) in lines.enumerate() {
        let digits = row_digits(line);
        if digits.is_empty() {
            continue;
        }
        if digits.len() != cols {
            return Err(MazeError::BadRowWidth {
                line: index + 2,
                expected: cols,
                found: digits.len(),
            });
        }
        found_rows += 1;
        if found_rows <= rows {
            cells.extend(digits);
        }
    }

    if found_rows != rows {
        return Err(MazeError::BadRowCount {
            expected: rows,
            found: found_rows,
        });
    }

    debug!(rows, cols, "maze parsed");
    Maze::from_cells(rows, cols, cells).ok_or(MazeError::MissingHeader)
}

/// Lit les deux entiers positifs de l'en-tête.
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut tokens = line.split_whitespace();
    let rows = tokens.next().and_then(leading_number);
    let cols = tokens.next().and_then(leading_number);
    match (rows, cols) {
        (Some(rows), Some(cols)) if rows > 0 && cols > 0 && rows.checked_mul(cols).is_some() => {
            Ok((rows, cols))
        }
        _ => Err(MazeError::MissingHeader),
    }
}

/// Nombre formé par les chiffres en tête de `token` (`"4abc"` donne 4).
fn leading_number(token: &str) -> Option<usize> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

fn row_digits(line: &str) -> Vec<u8> {
    line.bytes()
        .filter(|b| (b'0'..=b'7').contains(b))
        .map(|b| b - b'0')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_maze() {
        let maze = parse_maze("2 3\n1 4 2\n0 7 3\n").unwrap();
        assert_eq!(maze.rows(), 2);
        assert_eq!(maze.cols(), 3);
        assert_eq!(maze.cells(), &[1, 4, 2, 0, 7, 3]);
    }

    #[test]
    fn test_separators_and_junk_are_skipped() {
        // 8 et 9 ne sont pas des chiffres de bord, ils sont ignorés comme les virgules.
        let maze = parse_maze("1 4 trailing text\n1,2;3 9 8 4\n").unwrap();
        assert_eq!(maze.cells(), &[1, 2, 3, 4]);

        let maze = parse_maze("1 3\n123\n").unwrap();
        assert_eq!(maze.cells(), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_lines_are_not_counted() {
        let maze = parse_maze("2 2\n\n0 0\n   \n0 0\n\n").unwrap();
        assert_eq!(maze.rows(), 2);
    }

    #[test]
    fn test_header_with_glued_text() {
        let maze = parse_maze("1 2x\n0 0\n").unwrap();
        assert_eq!(maze.cols(), 2);
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(parse_maze(""), Err(MazeError::MissingHeader)));
        assert!(matches!(parse_maze("3\n0 0 0\n"), Err(MazeError::MissingHeader)));
        assert!(matches!(parse_maze("0 3\n"), Err(MazeError::MissingHeader)));
        assert!(matches!(parse_maze("a b\n0\n"), Err(MazeError::MissingHeader)));
        let huge = format!("{} {}\n", usize::MAX, 2);
        assert!(matches!(parse_maze(&huge), Err(MazeError::MissingHeader)));
    }

    #[test]
    fn test_wrong_row_width() {
        let err = parse_maze("2 3\n0 0 0\n0 0\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::BadRowWidth {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_missing_rows() {
        let err = parse_maze("2 2\n0 0\n").unwrap_err();
        assert!(matches!(err, MazeError::BadRowCount { expected: 2, found: 1 }));
    }

    #[test]
    fn test_extra_rows() {
        let err = parse_maze("1 2\n0 0\n0 0\n").unwrap_err();
        assert!(matches!(err, MazeError::BadRowCount { expected: 1, found: 2 }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_maze("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
        assert!(err.is_malformed_input());
    }
}
