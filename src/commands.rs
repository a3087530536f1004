use std::fmt;
use std::str::FromStr;

use num_enum::IntoPrimitive;
use strum_macros::{Display as StrumDisplay, EnumString, IntoStaticStr};

use crate::error::EncodeError;
use crate::{parser, translator};

#[derive(StrumDisplay, Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    #[strum(serialize = "-")]
    Negate,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "")]
    Identity,
}

#[derive(StrumDisplay, Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "&")]
    And,
    #[strum(serialize = "|")]
    Or,
}

#[derive(StrumDisplay, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    A,
    D,
    M,
}

/// The comp part of a C-instruction, e.g. `D+1` or `!M`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Computation {
    Unary(UnaryOp, Operand),
    Binary(Operand, BinaryOp, Operand),
}

impl Computation {
    /// True when the ALU reads its A-or-M input from memory, i.e. the a-bit is set.
    pub fn reads_memory(&self) -> bool {
        match self {
            Computation::Unary(_, rhs) => *rhs == Operand::M,
            Computation::Binary(lhs, _, rhs) => *lhs == Operand::M || *rhs == Operand::M,
        }
    }
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Computation::Unary(op, rhs) => write!(f, "{}{}", op, rhs),
            Computation::Binary(lhs, op, rhs) => write!(f, "{}{}{}", lhs, op, rhs),
        }
    }
}

impl FromStr for Computation {
    type Err = EncodeError;

    fn from_str(mnemonic: &str) -> Result<Self, Self::Err> {
        let comp = parser::computation(mnemonic)?;
        translator::comp_bits(&comp)?;
        Ok(comp)
    }
}

/// Registers receiving the computed value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Destination {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Destination {
    pub fn from_mnemonic(mnemonic: &str) -> Destination {
        parser::destination(mnemonic)
    }
}

// Discriminants are the 3-bit jump field; "no jump" is `None`.
#[derive(
    StrumDisplay, IntoStaticStr, EnumString, IntoPrimitive,
    Debug, PartialEq, Eq, Clone, Copy, Hash,
)]
#[repr(u8)]
pub enum JumpCondition {
    #[strum(serialize = "JGT")]
    Greater = 0b001,
    #[strum(serialize = "JEQ")]
    Equal = 0b010,
    #[strum(serialize = "JGE")]
    GreaterEqual = 0b011,
    #[strum(serialize = "JLT")]
    Less = 0b100,
    #[strum(serialize = "JNE")]
    NotEqual = 0b101,
    #[strum(serialize = "JLE")]
    LessEqual = 0b110,
    #[strum(serialize = "JMP")]
    Unconditional = 0b111,
}

#[test]
fn computation_display_round_trips_spelling() {
    use BinaryOp::*;
    use Operand::*;

    assert_eq!(Computation::Unary(UnaryOp::Negate, One).to_string(), "-1");
    assert_eq!(Computation::Unary(UnaryOp::Identity, M).to_string(), "M");
    assert_eq!(Computation::Binary(One, Add, A).to_string(), "1+A");
    assert_eq!(Computation::Binary(D, Or, M).to_string(), "D|M");
}

#[test]
fn computation_from_str_rejects_unencodable_forms() {
    assert_eq!(
        "M-D".parse::<Computation>(),
        Ok(Computation::Binary(Operand::M, BinaryOp::Subtract, Operand::D))
    );
    assert_eq!(
        "A+M".parse::<Computation>(),
        Err(EncodeError::InvalidComputation("A+M".to_string()))
    );
    assert_eq!(
        "-0".parse::<Computation>(),
        Err(EncodeError::InvalidComputation("-0".to_string()))
    );
}

#[test]
fn reads_memory_follows_m_operand() {
    assert!("M".parse::<Computation>().unwrap().reads_memory());
    assert!("1+M".parse::<Computation>().unwrap().reads_memory());
    assert!(!"D&A".parse::<Computation>().unwrap().reads_memory());
    assert!(!"-1".parse::<Computation>().unwrap().reads_memory());
}

#[test]
fn jump_condition_strings() {
    assert_eq!("JLE".parse::<JumpCondition>(), Ok(JumpCondition::LessEqual));
    assert!("jmp".parse::<JumpCondition>().is_err());
    assert_eq!(JumpCondition::NotEqual.to_string(), "JNE");
    let name: &'static str = JumpCondition::Greater.into();
    assert_eq!(name, "JGT");
    assert_eq!(u8::from(JumpCondition::Unconditional), 0b111);
}
