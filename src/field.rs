use std::fmt::{Display, Formatter};

/// A fixed-width slice of an instruction word. Displays as exactly `width`
/// binary digits, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    bits: u16,
    width: u8,
}

impl Field {
    pub(crate) fn new(bits: u16, width: u8) -> Field {
        debug_assert!(width < 16 && bits >> width == 0);
        Field { bits, width }
    }

    pub fn value(&self) -> u16 {
        self.bits
    }

    pub fn width(&self) -> u8 {
        self.width
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width as usize)
    }
}

impl PartialEq<str> for Field {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Field {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

#[test]
fn renders_leading_zeros() {
    assert_eq!(Field::new(0b10, 3).to_string(), "010");
    assert_eq!(Field::new(0, 7).to_string(), "0000000");
    assert_eq!(Field::new(0b1110000, 7).to_string(), "1110000");
}

#[test]
fn compares_with_bit_strings() {
    let field = Field::new(0b101, 3);
    assert_eq!(field, "101");
    assert_ne!(field, "0101");
    assert_ne!(field, "100");
    assert_ne!(field, "1x1");
    assert_eq!(field.value(), 5);
    assert_eq!(field.width(), 3);
}
