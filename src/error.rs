use thiserror::Error;

/// A mnemonic outside the closed vocabulary of its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid computation mnemonic '{0}'")]
    InvalidComputation(String),
    #[error("invalid jump mnemonic '{0}'")]
    InvalidJump(String),
}

pub type Result<T> = std::result::Result<T, EncodeError>;

#[test]
fn messages_carry_the_mnemonic() {
    assert_eq!(
        EncodeError::InvalidComputation("X".to_string()).to_string(),
        "invalid computation mnemonic 'X'"
    );
    assert_eq!(
        EncodeError::InvalidJump("XYZ".to_string()).to_string(),
        "invalid jump mnemonic 'XYZ'"
    );
}
