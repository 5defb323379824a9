/// Un des trois côtés d'une cellule triangulaire, avec son bit dans l'octet de la cellule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Border {
    Left,
    Right,
    /// Côté haut ou bas selon l'orientation de la cellule.
    TopOrBottom,
}

/// Main gardée contre le mur pendant le parcours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRule {
    LeftHand,
    RightHand,
}

/// Orientation d'une cellule, déduite de la parité de `row + col`.
///
/// La parité est la même en indices 0 ou 1, donc les deux conventions donnent le même
/// résultat tant que ligne et colonne utilisent la même.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `row + col` pair : le bit `TopOrBottom` désigne le côté haut.
    FlatTop,
    /// `row + col` impair : le bit `TopOrBottom` désigne le côté bas.
    FlatBottom,
}

pub const BORDER_MASK: u8 = 0b111;

impl Border {
    pub const ALL: [Border; 3] = [Border::Left, Border::Right, Border::TopOrBottom];

    pub fn bit(self) -> u8 {
        match self {
            Border::Left => 0b001,
            Border::Right => 0b010,
            Border::TopOrBottom => 0b100,
        }
    }

    /// Vrai si ce bord est fermé dans l'octet `cell`. Les bits au-delà du troisième sont ignorés.
    pub fn is_set(self, cell: u8) -> bool {
        cell & self.bit() != 0
    }

    /// Décalage à gauche avec retour (LEFT -> RIGHT -> TOP_OR_BOTTOM -> LEFT).
    pub fn turn_forward(self) -> Self {
        match self {
            Border::Left => Border::Right,
            Border::Right => Border::TopOrBottom,
            Border::TopOrBottom => Border::Left,
        }
    }

    /// Décalage à droite avec retour (RIGHT -> LEFT -> TOP_OR_BOTTOM -> RIGHT).
    pub fn turn_backward(self) -> Self {
        match self {
            Border::Right => Border::Left,
            Border::Left => Border::TopOrBottom,
            Border::TopOrBottom => Border::Right,
        }
    }

    /// Fait un pas de rotation autour d'une cellule d'orientation `orientation`.
    pub fn rotate(self, rule: HandRule, orientation: Orientation) -> Self {
        match (rule, orientation) {
            (HandRule::RightHand, Orientation::FlatTop)
            | (HandRule::LeftHand, Orientation::FlatBottom) => self.turn_forward(),
            _ => self.turn_backward(),
        }
    }

    /// Le mur que l'on vient de franchir, vu depuis la cellule voisine.
    pub fn seen_from_neighbour(self) -> Self {
        match self {
            Border::Left => Border::Right,
            Border::Right => Border::Left,
            Border::TopOrBottom => Border::TopOrBottom,
        }
    }
}

impl Orientation {
    pub fn of(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Orientation::FlatTop
        } else {
            Orientation::FlatBottom
        }
    }

    /// Décalage de ligne quand on sort par le côté `TopOrBottom`.
    pub fn vertical_step(self) -> isize {
        match self {
            Orientation::FlatTop => -1,
            Orientation::FlatBottom => 1,
        }
    }
}

impl HandRule {
    pub fn name(self) -> &'static str {
        match self {
            HandRule::LeftHand => "left",
            HandRule::RightHand => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" | "lpath" | "left-hand" => Some(HandRule::LeftHand),
            "right" | "rpath" | "right-hand" => Some(HandRule::RightHand),
            _ => None,
        }
    }
}
