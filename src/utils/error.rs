use thiserror::Error;

pub type EchecsResult<T> = Result<T, EchecsError>;

#[derive(Error, Debug)]
pub enum EchecsError {
    #[error("Square ({row}, {col}) is occupied")]
    OccupiedSquare { row: usize, col: usize },

    #[error("Coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cannot populate board: {0}")]
    Population(#[source] Box<EchecsError>),
}
