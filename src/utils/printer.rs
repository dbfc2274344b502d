use crate::core::piece::Piece;

// Indexed by [Color::index()][Role::index()].
static LETTER_TABLE: [[&str; 6]; 2] = [
    ["K", "Q", "R", "B", "N", "P"],
    ["k", "q", "r", "b", "n", "p"],
];

static FIGURINE_TABLE: [[&str; 6]; 2] = [
    ["♔", "♕", "♖", "♗", "♘", "♙"],
    ["♚", "♛", "♜", "♝", "♞", "♟"],
];

pub trait Printer: Send + Sync {
    fn piece(piece: &Piece) -> &'static str;
    fn empty() -> &'static str;
}

/// Plain letters, uppercase for Light.
pub struct DefaultPrinter;
impl Printer for DefaultPrinter {
    fn piece(piece: &Piece) -> &'static str {
        LETTER_TABLE[piece.owner().index()][piece.role().index()]
    }

    fn empty() -> &'static str {
        "."
    }
}

/// Unicode figurines, hollow glyphs for Light.
pub struct PrettyPrinter;
impl Printer for PrettyPrinter {
    fn piece(piece: &Piece) -> &'static str {
        FIGURINE_TABLE[piece.owner().index()][piece.role().index()]
    }

    fn empty() -> &'static str {
        "."
    }
}

pub trait View: Send + Sync {
    fn row(i: usize) -> usize;
    fn col(i: usize) -> usize;
}

/// Board seen from the Light side, far ranks on top.
pub struct LightView;
impl View for LightView {
    fn row(i: usize) -> usize {
        i
    }
    fn col(i: usize) -> usize {
        i
    }
}

/// Board seen from the Dark side.
pub struct DarkView;
impl View for DarkView {
    fn row(i: usize) -> usize {
        7 - i
    }
    fn col(i: usize) -> usize {
        7 - i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::piece::Role;
    use std::collections::HashSet;

    fn all_tokens<P: Printer>() -> Vec<&'static str> {
        let mut tokens = Vec::new();
        for owner in [Color::Light, Color::Dark] {
            for role in Role::ALL {
                tokens.push(P::piece(&Piece::new(role, owner)));
            }
        }
        tokens
    }

    #[test]
    fn letter_tokens_are_injective() {
        let distinct: HashSet<_> = all_tokens::<DefaultPrinter>().into_iter().collect();
        assert_eq!(distinct.len(), 12);
        assert!(!distinct.contains(DefaultPrinter::empty()));
    }

    #[test]
    fn figurine_tokens_are_injective() {
        let distinct: HashSet<_> = all_tokens::<PrettyPrinter>().into_iter().collect();
        assert_eq!(distinct.len(), 12);
        assert!(!distinct.contains(PrettyPrinter::empty()));
    }

    #[test]
    fn views_map_board_edges() {
        assert_eq!(LightView::row(0), 0);
        assert_eq!(LightView::col(7), 7);
        assert_eq!(DarkView::row(0), 7);
        assert_eq!(DarkView::col(7), 0);
    }
}
