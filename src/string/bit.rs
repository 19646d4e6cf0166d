//! DER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::content::PrimitiveContent;
use crate::error::EncodeError;
use crate::tag::Tag;
use crate::writer::Writer;


//------------ BitString -----------------------------------------------------

/// The content of a bit string value.
///
/// Bit strings are a sequence of bits. In general, they do not need to
/// contain a multiple of eight bits. The key material wrapped by the writer
/// always is whole octets, though, so this type only supports bit strings
/// that consist of complete octets.
///
/// # DER Encoding
///
/// With DER, only the primitive form is allowed. The first octet of the
/// content contains the number of unused bits in the last octet and the
/// following octets contain the bits with the first bit in the most
/// significant bit of the octet. Since all octets are used, the first octet
/// is always zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BitString<T> {
    /// The octets of the bit string.
    bits: T,
}

impl<T: AsRef<[u8]>> BitString<T> {
    /// Creates a new bit string from complete octets.
    pub fn new(bits: T) -> Self {
        BitString { bits }
    }

    /// Returns the number of bits in the bit string.
    pub fn bit_len(&self) -> usize {
        self.bits.as_ref().len() << 3
    }

    /// Returns the number of unused bits in the last octet.
    ///
    /// This is always zero.
    pub fn unused(&self) -> u8 {
        0
    }

    /// Returns a slice of the octets in the bit string.
    pub fn octet_slice(&self) -> &[u8] {
        self.bits.as_ref()
    }

    /// Converts the value into the underlying octets.
    pub fn into_bits(self) -> T {
        self.bits
    }
}


//--- PrimitiveContent

impl<T: AsRef<[u8]>> PrimitiveContent for BitString<T> {
    const TAG: Tag = Tag::BIT_STRING;

    fn encoded_len(&self) -> usize {
        self.bits.as_ref().len() + 1
    }

    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(self.bits.as_ref())?;
        writer.write_byte(self.unused())
    }
}


//============ Tests =========================================================
