// Failure kinds raised while loading, running, or solving a tape.

use crate::shared::intcode::Instruction;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TapeError {
    #[error("could not read tape")]
    Io(#[from] io::Error),

    #[error("invalid integer {token:?} at index {index}")]
    Parse { index: usize, token: String },

    #[error("invalid opcode at position {pos}: {value}")]
    InvalidOpcode { pos: usize, value: i64 },

    /// `pos` is the instruction that made the access, or the address
    /// itself for a direct peek/poke.
    #[error("out-of-bounds tape access from position {pos}")]
    OutOfBounds { pos: usize },

    #[error("unhandled opcode: {0:?}")]
    UnhandledOpcode(Instruction),

    #[error("arithmetic overflow at position {pos}")]
    Overflow { pos: usize },

    #[error("no matching noun/verb combination found for {target}")]
    NoSolutionFound { target: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_fault() {
        let err = TapeError::InvalidOpcode { pos: 4, value: 42 };
        assert_eq!("invalid opcode at position 4: 42", err.to_string());

        let err = TapeError::OutOfBounds { pos: 8 };
        assert_eq!("out-of-bounds tape access from position 8",
                   err.to_string());

        let err = TapeError::Parse { index: 2, token: "x".to_string() };
        assert_eq!("invalid integer \"x\" at index 2", err.to_string());
    }

    #[test]
    fn test_io_errors_convert() {
        let err: TapeError =
            io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, TapeError::Io(_)));
    }

    #[test]
    fn test_io_cause_reported_once() {
        let err = anyhow::Error::from(TapeError::Io(
            io::Error::new(io::ErrorKind::NotFound, "missing")));
        assert_eq!("could not read tape: missing", format!("{:#}", err));
        assert_eq!("could not read tape", err.to_string());
    }
}
