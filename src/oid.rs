//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that wraps the content octets of
//! an object identifier. The type is also re-exported at the top-level.

use std::{fmt, hash};
use crate::content::PrimitiveContent;
use crate::error::EncodeError;
use crate::tag::Tag;
use crate::writer::Writer;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.101.112’.
///
/// Values of this type keep a single object identifer in its encoded form,
/// i.e., as the content octets of an OBJECT IDENTIFIER value. The type does
/// not check that these octets are actually valid. It is generic over
/// anything that can become a reference to a bytes slice so that constants
/// can be defined as `Oid<&'static [u8]>` – or its type alias [`ConstOid`].
/// A few constants for algorithms used in key blobs are defined in this
/// module.
#[derive(Clone, Copy, Debug)]
pub struct Oid<T: AsRef<[u8]> = &'static [u8]>(pub T);

/// A type alias for `Oid<&'static [u8]>`.
///
/// This is useful when defining object identifier constants.
pub type ConstOid = Oid<&'static [u8]>;

/// The algorithm identifier for X25519, 1.3.101.110 (RFC 8410).
pub const X25519: ConstOid = Oid(&[43, 101, 110]);

/// The algorithm identifier for X448, 1.3.101.111 (RFC 8410).
pub const X448: ConstOid = Oid(&[43, 101, 111]);

/// The algorithm identifier for Ed25519, 1.3.101.112 (RFC 8410).
pub const ED25519: ConstOid = Oid(&[43, 101, 112]);

/// The algorithm identifier for Ed448, 1.3.101.113 (RFC 8410).
pub const ED448: ConstOid = Oid(&[43, 101, 113]);


//--- AsRef

impl<T: AsRef<[u8]>> AsRef<[u8]> for Oid<T> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}


//--- PartialEq and Eq

impl<T: AsRef<[u8]>, U: AsRef<[u8]>> PartialEq<Oid<U>> for Oid<T> {
    fn eq(&self, other: &Oid<U>) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<T: AsRef<[u8]>> Eq for Oid<T> { }


//--- Hash

impl<T: AsRef<[u8]>> hash::Hash for Oid<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state)
    }
}


//--- Display

impl<T: AsRef<[u8]>> fmt::Display for Oid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, octet) in self.0.as_ref().iter().enumerate() {
            if idx > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02X}", octet)?;
        }
        Ok(())
    }
}


//--- PrimitiveContent

impl<T: AsRef<[u8]>> PrimitiveContent for Oid<T> {
    const TAG: Tag = Tag::OID;

    fn encoded_len(&self) -> usize {
        self.0.as_ref().len()
    }

    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(self.0.as_ref())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use bytes::Bytes;
    use super::*;

    #[test]
    fn compare() {
        assert_eq!(ED25519, Oid(Bytes::from_static(b"\x2b\x65\x70")));
        assert_ne!(ED25519, X25519);
        assert_eq!(ED448.0, b"\x2B\x65\x71");
    }

    #[test]
    fn display() {
        assert_eq!(X448.to_string(), "2B:65:6F");
    }

    #[test]
    fn write() {
        let mut buf = [0u8; 5];
        let mut writer = Writer::new(&mut buf);
        writer.primitive(&ED25519).unwrap();
        assert_eq!(writer.finish().unwrap(), b"\x06\x03\x2B\x65\x70");
    }
}
