use crate::commands::*;
use crate::error::{EncodeError, Result};

use nom::branch::alt;
use nom::character::complete::one_of;
use nom::combinator::{all_consuming, map, map_opt, opt};
use nom::sequence::tuple;
use nom::IResult;

fn char_to_operand(c: char) -> Option<Operand> {
    match c {
        '0' => Some(Operand::Zero),
        '1' => Some(Operand::One),
        'A' => Some(Operand::A),
        'D' => Some(Operand::D),
        'M' => Some(Operand::M),
        _ => None,
    }
}

fn operand(input: &str) -> IResult<&str, Operand> {
    map_opt(one_of("01ADM"), char_to_operand)(input)
}

fn unop(input: &str) -> IResult<&str, UnaryOp> {
    map_opt(opt(one_of("-!")), |c| match c {
        Some('-') => Some(UnaryOp::Negate),
        Some('!') => Some(UnaryOp::Not),
        None => Some(UnaryOp::Identity),
        Some(_) => None,
    })(input)
}

fn unexpr(input: &str) -> IResult<&str, Computation> {
    map(tuple((unop, operand)), |(op, rhs)| Computation::Unary(op, rhs))(input)
}

fn binop(input: &str) -> IResult<&str, BinaryOp> {
    map_opt(one_of("+-&|"), |c| match c {
        '+' => Some(BinaryOp::Add),
        '-' => Some(BinaryOp::Subtract),
        '&' => Some(BinaryOp::And),
        '|' => Some(BinaryOp::Or),
        _ => None,
    })(input)
}

fn binexpr(input: &str) -> IResult<&str, Computation> {
    map(tuple((operand, binop, operand)), |(lhs, op, rhs)| {
        Computation::Binary(lhs, op, rhs)
    })(input)
}

/// Recognizes the shape of a comp mnemonic. Whether the shape is one the ALU
/// can compute (`A+M` is well-formed but is not) is decided by the translator.
pub fn computation(mnemonic: &str) -> Result<Computation> {
    all_consuming(alt((binexpr, unexpr)))(mnemonic)
        .map(|(_, comp)| comp)
        .map_err(|_| EncodeError::InvalidComputation(mnemonic.to_string()))
}

/// Any character other than A, D or M is ignored.
pub fn destination(mnemonic: &str) -> Destination {
    mnemonic
        .chars()
        .fold(Destination::default(), |mut dest, c| {
            match c {
                'A' => dest.a = true,
                'D' => dest.d = true,
                'M' => dest.m = true,
                _ => {}
            }
            dest
        })
}

/// The empty mnemonic means no jump.
pub fn jump(mnemonic: &str) -> Result<Option<JumpCondition>> {
    if mnemonic.is_empty() {
        return Ok(None);
    }
    mnemonic
        .parse()
        .map(Some)
        .map_err(|_| EncodeError::InvalidJump(mnemonic.to_string()))
}

#[test]
fn nom_parse_tests() {
    assert_eq!(
        binexpr("D+M"),
        Ok(("", Computation::Binary(Operand::D, BinaryOp::Add, Operand::M)))
    );
    assert_eq!(
        unexpr("!A"),
        Ok(("", Computation::Unary(UnaryOp::Not, Operand::A)))
    );
    assert_eq!(
        unexpr("D"),
        Ok(("", Computation::Unary(UnaryOp::Identity, Operand::D)))
    );
    assert_eq!(binop("&"), Ok(("", BinaryOp::And)));
    assert_eq!(operand("1+A"), Ok(("+A", Operand::One)));
}

#[test]
fn test_computation() {
    assert_eq!(
        computation("-1"),
        Ok(Computation::Unary(UnaryOp::Negate, Operand::One))
    );
    assert_eq!(
        computation("1+D"),
        Ok(Computation::Binary(Operand::One, BinaryOp::Add, Operand::D))
    );
    assert_eq!(
        computation("D-1"),
        Ok(Computation::Binary(Operand::D, BinaryOp::Subtract, Operand::One))
    );
    // Well-formed but not computable; rejected later.
    assert!(computation("A+M").is_ok());

    for bad in ["", "X", "D+", "-D+A", " D", "D+A ", "D;JMP", "AM=D", "d"] {
        assert_eq!(
            computation(bad),
            Err(EncodeError::InvalidComputation(bad.to_string())),
            "{:?}",
            bad
        );
    }
}

#[test]
fn test_destination() {
    assert_eq!(destination(""), Destination::default());
    assert_eq!(
        destination("MD"),
        Destination { a: false, d: true, m: true }
    );
    assert_eq!(destination("DAD"), destination("AD"));
    assert_eq!(destination("AX"), destination("A"));
}

#[test]
fn test_jump() {
    assert_eq!(jump(""), Ok(None));
    assert_eq!(jump("JGE"), Ok(Some(JumpCondition::GreaterEqual)));
    assert_eq!(jump("XYZ"), Err(EncodeError::InvalidJump("XYZ".to_string())));
    assert_eq!(jump(" JMP"), Err(EncodeError::InvalidJump(" JMP".to_string())));
}
