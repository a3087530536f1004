use crate::commands::{BinaryOp::*, Operand::*, UnaryOp::*, *};
use crate::error::{EncodeError, Result};
use crate::field::Field;

pub const DEST_WIDTH: u8 = 3;
pub const COMP_WIDTH: u8 = 7;
pub const JUMP_WIDTH: u8 = 3;

// Opcode and the two unused bits of a C-instruction.
const C_INSTRUCTION: u16 = 0xE000;
const A_BIT: u16 = 0b100_0000;

fn mask_if(b: bool, mask: u16) -> u16 {
    if b {
        mask
    } else {
        0x0000
    }
}

pub fn dest_bits(dest: &Destination) -> Field {
    let bits = mask_if(dest.a, 0b100) | mask_if(dest.d, 0b010) | mask_if(dest.m, 0b001);
    Field::new(bits, DEST_WIDTH)
}

// The c1..c6 ALU bits. A and M share a row; the a-bit tells them apart.
fn alu_code(comp: &Computation) -> Option<u16> {
    let code = match comp {
        Computation::Unary(op, rhs) => match (op, rhs) {
            (Identity, Zero) => 0b101010,
            (Identity, One) => 0b111111,
            (Negate, One) => 0b111010,
            (Identity, D) => 0b001100,
            (Identity, A | M) => 0b110000,
            (Not, D) => 0b001101,
            (Not, A | M) => 0b110001,
            (Negate, D) => 0b001111,
            (Negate, A | M) => 0b110011,
            _ => return None,
        },
        Computation::Binary(lhs, op, rhs) => match (lhs, op, rhs) {
            (D, Add, One) | (One, Add, D) => 0b011111,
            (A | M, Add, One) | (One, Add, A | M) => 0b110111,
            (D, Subtract, One) => 0b001110,
            (A | M, Subtract, One) => 0b110010,
            (D, Add, A | M) | (A | M, Add, D) => 0b000010,
            (D, Subtract, A | M) => 0b010011,
            (A | M, Subtract, D) => 0b000111,
            (D, And, A | M) | (A | M, And, D) => 0b000000,
            (D, Or, A | M) | (A | M, Or, D) => 0b010101,
            _ => return None,
        },
    };
    Some(code)
}

pub fn comp_bits(comp: &Computation) -> Result<Field> {
    let code = alu_code(comp).ok_or_else(|| EncodeError::InvalidComputation(comp.to_string()))?;
    Ok(Field::new(mask_if(comp.reads_memory(), A_BIT) | code, COMP_WIDTH))
}

pub fn jump_bits(jump: Option<JumpCondition>) -> Field {
    let bits = jump.map_or(0, |j| u8::from(j) as u16);
    Field::new(bits, JUMP_WIDTH)
}

/// Packs the fields as `111a cccc ccdd djjj`.
pub fn translate_c(
    dest: &Destination,
    comp: &Computation,
    jump: Option<JumpCondition>,
) -> Result<u16> {
    let mut instruction = C_INSTRUCTION;

    instruction |= comp_bits(comp)?.value() << 6;
    instruction |= dest_bits(dest).value() << 3;
    instruction |= jump_bits(jump).value();

    Ok(instruction)
}

#[cfg(test)]
fn comp(mnemonic: &str) -> Computation {
    crate::parser::computation(mnemonic).unwrap()
}

#[test]
fn comp_table() {
    let table = [
        ("0", "0101010"),
        ("1", "0111111"),
        ("-1", "0111010"),
        ("D", "0001100"),
        ("A", "0110000"),
        ("M", "1110000"),
        ("!D", "0001101"),
        ("!A", "0110001"),
        ("!M", "1110001"),
        ("-D", "0001111"),
        ("-A", "0110011"),
        ("-M", "1110011"),
        ("D+1", "0011111"),
        ("1+D", "0011111"),
        ("A+1", "0110111"),
        ("1+A", "0110111"),
        ("M+1", "1110111"),
        ("1+M", "1110111"),
        ("D-1", "0001110"),
        ("A-1", "0110010"),
        ("M-1", "1110010"),
        ("D+A", "0000010"),
        ("A+D", "0000010"),
        ("D+M", "1000010"),
        ("M+D", "1000010"),
        ("D-A", "0010011"),
        ("D-M", "1010011"),
        ("A-D", "0000111"),
        ("M-D", "1000111"),
        ("D&A", "0000000"),
        ("A&D", "0000000"),
        ("D&M", "1000000"),
        ("M&D", "1000000"),
        ("D|A", "0010101"),
        ("A|D", "0010101"),
        ("D|M", "1010101"),
        ("M|D", "1010101"),
    ];

    for (mnemonic, bits) in table {
        assert_eq!(comp_bits(&comp(mnemonic)).unwrap(), bits, "{}", mnemonic);
    }
}

#[test]
fn uncomputable_forms_are_rejected() {
    for mnemonic in [
        "-0", "!0", "!1", "A+M", "M-A", "D+D", "A&A", "D+0", "0+D", "1-D", "1+1", "D&1", "A|1",
    ] {
        assert_eq!(
            comp_bits(&comp(mnemonic)),
            Err(EncodeError::InvalidComputation(mnemonic.to_string())),
            "{}",
            mnemonic
        );
    }
}

#[test]
fn dest_and_jump_bits() {
    assert_eq!(dest_bits(&Destination { a: true, d: false, m: true }), "101");
    assert_eq!(dest_bits(&Destination::default()), "000");
    assert_eq!(jump_bits(None), "000");
    assert_eq!(jump_bits(Some(JumpCondition::Less)), "100");
}

#[test]
fn test_translate_c() {
    let word = translate_c(
        &Destination { a: false, d: true, m: false },
        &comp("D+A"),
        None,
    );
    assert_eq!(word, Ok(0b1110_0000_1001_0000));

    let word = translate_c(
        &Destination { a: true, d: true, m: true },
        &comp("M+1"),
        Some(JumpCondition::NotEqual),
    );
    assert_eq!(word, Ok(0b1111_1101_1111_1101));

    assert!(translate_c(&Destination::default(), &comp("A+M"), None).is_err());
}
