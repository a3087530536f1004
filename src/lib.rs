//! Field encoder for Hack C-instructions (`dest=comp;jump`).
//!
//! The caller splits an instruction into its three mnemonics, with an empty
//! string standing in for an absent dest or jump, and gets back the binary
//! fields defined by the Hack instruction set:
//!
//! ```
//! assert_eq!(hack_code::encode_dest("AM").to_string(), "101");
//! assert_eq!(hack_code::encode_comp("D+M").unwrap().to_string(), "1000010");
//! assert_eq!(hack_code::encode_jump("JLT").unwrap().to_string(), "100");
//! ```

pub mod commands;
pub mod error;
pub mod field;
mod parser;
pub mod translator;

pub use commands::{Computation, Destination, JumpCondition};
pub use error::{EncodeError, Result};
pub use field::Field;

/// The 3-bit dest field, ordered A, D, M. Total: characters other than
/// A, D and M are ignored and the empty mnemonic is `000`.
pub fn encode_dest(mnemonic: &str) -> Field {
    translator::dest_bits(&parser::destination(mnemonic))
}

/// The 7-bit comp field: the a-bit followed by the six ALU control bits.
pub fn encode_comp(mnemonic: &str) -> Result<Field> {
    translator::comp_bits(&parser::computation(mnemonic)?)
}

/// The 3-bit jump field; the empty mnemonic is `000`.
pub fn encode_jump(mnemonic: &str) -> Result<Field> {
    Ok(translator::jump_bits(parser::jump(mnemonic)?))
}

/// The full 16-bit C-instruction word for `dest=comp;jump`.
pub fn encode_instruction(dest: &str, comp: &str, jump: &str) -> Result<u16> {
    translator::translate_c(
        &parser::destination(dest),
        &parser::computation(comp)?,
        parser::jump(jump)?,
    )
}

#[test]
fn dest_fixtures() {
    assert_eq!(encode_dest(""), "000");
    assert_eq!(encode_dest("A"), "100");
    assert_eq!(encode_dest("D"), "010");
    assert_eq!(encode_dest("M"), "001");
    assert_eq!(encode_dest("AD"), "110");
    assert_eq!(encode_dest("ADM"), "111");
    assert_eq!(encode_dest("AMD"), "111");
    assert_eq!(encode_dest("MA"), "101");
}

#[test]
fn dest_is_injective_over_subsets() {
    let subsets = ["", "A", "D", "M", "AD", "AM", "DM", "ADM"];
    let mut seen = std::collections::HashSet::new();
    for subset in subsets {
        assert!(seen.insert(encode_dest(subset).value()), "{}", subset);
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn dest_ignores_foreign_characters() {
    assert_eq!(encode_dest("AX"), encode_dest("A"));
    assert_eq!(encode_dest("?"), "000");
}

#[test]
fn comp_fixtures() {
    assert_eq!(encode_comp("0").unwrap(), "0101010");
    assert_eq!(encode_comp("-1").unwrap(), "0111010");
    assert_eq!(encode_comp("D").unwrap(), "0001100");
    assert_eq!(encode_comp("A").unwrap(), "0110000");
    assert_eq!(encode_comp("M").unwrap(), "1110000");
}

#[test]
fn comp_commutative_aliases() {
    assert_eq!(encode_comp("D+A").unwrap(), "0000010");
    assert_eq!(encode_comp("A+D"), encode_comp("D+A"));
    assert_eq!(encode_comp("M+D"), encode_comp("D+M"));
    assert_eq!(encode_comp("1+A"), encode_comp("A+1"));
    assert_eq!(encode_comp("1+D"), encode_comp("D+1"));
    assert_eq!(encode_comp("1+M"), encode_comp("M+1"));
    assert_eq!(encode_comp("A&D"), encode_comp("D&A"));
    assert_eq!(encode_comp("M|D"), encode_comp("D|M"));
    assert_ne!(encode_comp("D-A"), encode_comp("A-D"));
}

#[test]
fn substituting_m_for_a_sets_only_the_a_bit() {
    let pairs = [
        ("A", "M"),
        ("!A", "!M"),
        ("-A", "-M"),
        ("A+1", "M+1"),
        ("1+A", "1+M"),
        ("A-1", "M-1"),
        ("D+A", "D+M"),
        ("A+D", "M+D"),
        ("D-A", "D-M"),
        ("A-D", "M-D"),
        ("D&A", "D&M"),
        ("A&D", "M&D"),
        ("D|A", "D|M"),
        ("A|D", "M|D"),
    ];
    for (with_a, with_m) in pairs {
        let a = encode_comp(with_a).unwrap();
        let m = encode_comp(with_m).unwrap();
        assert_eq!(a.value() & 0b100_0000, 0, "{}", with_a);
        assert_eq!(m.value(), a.value() | 0b100_0000, "{}", with_m);
    }
}

#[test]
fn jump_fixtures() {
    assert_eq!(encode_jump("").unwrap(), "000");
    assert_eq!(encode_jump("JGT").unwrap(), "001");
    assert_eq!(encode_jump("JEQ").unwrap(), "010");
    assert_eq!(encode_jump("JGE").unwrap(), "011");
    assert_eq!(encode_jump("JLT").unwrap(), "100");
    assert_eq!(encode_jump("JNE").unwrap(), "101");
    assert_eq!(encode_jump("JLE").unwrap(), "110");
    assert_eq!(encode_jump("JMP").unwrap(), "111");
}

#[test]
fn unknown_mnemonics_fail() {
    assert_eq!(
        encode_comp("X"),
        Err(EncodeError::InvalidComputation("X".to_string()))
    );
    assert_eq!(
        encode_comp("A+M"),
        Err(EncodeError::InvalidComputation("A+M".to_string()))
    );
    assert_eq!(
        encode_jump("XYZ"),
        Err(EncodeError::InvalidJump("XYZ".to_string()))
    );
    assert_eq!(
        encode_instruction("D", "D+A", "JUMP"),
        Err(EncodeError::InvalidJump("JUMP".to_string()))
    );
}

#[test]
fn encoding_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(encode_comp("D|M"), encode_comp("D|M"));
        assert_eq!(encode_jump("JNE"), encode_jump("JNE"));
        assert_eq!(encode_dest("DM"), encode_dest("DM"));
    }
}

#[test]
fn instruction_words() {
    assert_eq!(encode_instruction("D", "D+A", ""), Ok(0b1110000010010000));
    assert_eq!(encode_instruction("", "0", "JMP"), Ok(0b1110101010000111));
    assert_eq!(encode_instruction("AMD", "M+1", "JNE"), Ok(0b1111110111111101));
    assert_eq!(encode_instruction("M", "D", ""), Ok(0b1110001100001000));
}

#[test]
fn fields_are_shareable_across_threads() {
    let handles: Vec<_> = ["D+1", "M-D", "!A"]
        .into_iter()
        .map(|m| std::thread::spawn(move || encode_comp(m)))
        .collect();
    let fields: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(fields[0].as_ref().unwrap(), &"0011111");
    assert_eq!(fields[1].as_ref().unwrap(), &"1000111");
    assert_eq!(fields[2].as_ref().unwrap(), &"0110001");
}
