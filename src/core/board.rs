use crate::core::color::Color;
use crate::core::piece::{Piece, Role};
use crate::utils::error::{EchecsError, EchecsResult};
use crate::utils::printer::{Printer, View};

pub const BOARD_SIZE: usize = 8;

/// Number of pieces one side starts with.
const SIDE_PIECES: usize = 16;

/// Starting set by piece index: 0-7 the pawns, 8-15 the back rank in
/// canonical order.
const STARTING_ROLES: [Role; SIDE_PIECES] = [
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Pawn,
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// (pawn row, back-rank row) for a side. Dark plays the far ranks.
const fn home_rows(owner: Color) -> (usize, usize) {
    match owner {
        Color::Dark => (1, 0),
        Color::Light => (6, 7),
    }
}

/// One cell of the grid. Shade is fixed at construction; "unoccupied" is the
/// explicit `None` state.
#[derive(Clone, Debug)]
pub struct Square {
    shade: Color,
    piece: Option<Piece>,
}

impl Square {
    fn empty(shade: Color) -> Self {
        Square { shade, piece: None }
    }

    pub const fn shade(&self) -> Color {
        self.shade
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board with strictly alternating shades, Light at (0, 0).
    pub fn new_empty() -> Self {
        let squares: [[Square; BOARD_SIZE]; BOARD_SIZE] = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let shade = if (row + col) % 2 == 0 {
                    Color::Light
                } else {
                    Color::Dark
                };
                Square::empty(shade)
            })
        });

        Board { squares }
    }

    /// Fully set up starting position.
    pub fn standard() -> EchecsResult<Self> {
        let mut board = Board::new_empty();
        board.populate()?;
        Ok(board)
    }

    pub fn square(&self, row: usize, col: usize) -> EchecsResult<&Square> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EchecsError::OutOfBounds { row, col });
        }
        Ok(&self.squares[row][col])
    }

    pub fn is_empty(&self) -> bool {
        self.first_occupied().is_none()
    }

    /// Puts `piece` on `(row, col)`. An occupied target square is left
    /// untouched and reported as an error.
    pub fn place(&mut self, piece: Piece, row: usize, col: usize) -> EchecsResult<()> {
        if self.square(row, col)?.is_occupied() {
            return Err(EchecsError::OccupiedSquare { row, col });
        }

        self.squares[row][col].piece = Some(piece);
        Ok(())
    }

    /// Places the standard 32-piece starting set. The board must be empty:
    /// the first occupied square aborts population before anything is placed.
    pub fn populate(&mut self) -> EchecsResult<()> {
        if let Some((row, col)) = self.first_occupied() {
            return Err(EchecsError::Population(Box::new(
                EchecsError::OccupiedSquare { row, col },
            )));
        }

        for owner in [Color::Dark, Color::Light] {
            let (pawn_row, back_row) = home_rows(owner);
            for (index, role) in STARTING_ROLES.iter().enumerate() {
                let row = if index < BOARD_SIZE { pawn_row } else { back_row };
                let col = index % BOARD_SIZE;
                self.place(Piece::new(*role, owner), row, col)
                    .map_err(|e| EchecsError::Population(Box::new(e)))?;
            }
        }

        Ok(())
    }

    fn first_occupied(&self) -> Option<(usize, usize)> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .find(|&(row, col)| self.squares[row][col].is_occupied())
    }

    /// Shade map: 8 lines of 8 `L`/`D` tokens.
    pub fn render_shading(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in &self.squares {
            for square in row {
                out.push(match square.shade() {
                    Color::Light => 'L',
                    Color::Dark => 'D',
                });
            }
            out.push('\n');
        }
        out
    }

    /// Piece map: 8 lines of 8 glyphs, empty squares as the printer's
    /// placeholder. `V` selects which side the board is seen from.
    pub fn render_pieces<P: Printer, V: View>(&self) -> String {
        let mut out = String::new();
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                let square = &self.squares[V::row(i)][V::col(j)];
                match square.piece() {
                    Some(piece) => out.push_str(P::piece(piece)),
                    None => out.push_str(P::empty()),
                }
            }
            out.push('\n');
        }
        out
    }
}
