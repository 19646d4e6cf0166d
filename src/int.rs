//! DER encoded integers.
//!
//! This module provides the [`PrimitiveContent`] impls for the built-in
//! signed integer types.

use crate::content::PrimitiveContent;
use crate::error::EncodeError;
use crate::tag::Tag;
use crate::writer::Writer;


//------------ Integer -------------------------------------------------------

/// A built-in signed integer type that can be written as an INTEGER.
///
/// # DER Encoding
///
/// In DER, an INTEGER is encoded as a primitive value with the content
/// octets providing a big-endian, two’s complement byte sequence of the
/// integer. The sequence must be as short as possible: the first nine bits
/// of the content must not all be the same.
pub trait Integer: PrimitiveContent + Copy { }


//------------ Macro for built-in integers -----------------------------------

// The octets are produced least significant first by shifting right. We are
// done once everything above the lowest seven bits of what remains is just
// the sign extension of the octet emitted last.
macro_rules! signed_impl {
    ( $type:ident ) => {
        impl PrimitiveContent for $type {
            const TAG: Tag = Tag::INTEGER;

            fn encoded_len(&self) -> usize {
                let mut value = *self;
                let mut res = 1;
                while (value & !0x7F) != 0 && (value & !0x7F) != !0x7F {
                    value >>= 8;
                    res += 1;
                }
                res
            }

            fn write_content(
                &self, writer: &mut Writer
            ) -> Result<(), EncodeError> {
                let mut value = *self;
                writer.write_byte(value as u8)?;
                while (value & !0x7F) != 0 && (value & !0x7F) != !0x7F {
                    value >>= 8;
                    writer.write_byte(value as u8)?;
                }
                Ok(())
            }
        }

        impl Integer for $type { }
    }
}

signed_impl!(i16);
signed_impl!(i32);
signed_impl!(i64);


//============ Tests =========================================================
