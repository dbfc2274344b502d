use crate::core::color::Color;

/// The six piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
    ];

    /// Index for glyph table lookups: King=0 .. Pawn=5.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A role owned by one side. `Clone` but not `Copy`: `Board::place` consumes
/// the piece, so a single instance ends up on at most one square.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    role: Role,
    owner: Color,
}

impl Piece {
    pub const fn new(role: Role, owner: Color) -> Self {
        Piece { role, owner }
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn owner(&self) -> Color {
        self.owner
    }
}
