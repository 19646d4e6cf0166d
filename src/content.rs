//! PrimitiveContent and its impls for built-in types.
//!
//! This is an internal module. The relevant items are re-exported by the
//! parent.
//!
//! See [`crate::int`] for the impls for the built-in integer types.

use crate::error::EncodeError;
use crate::tag::Tag;
use crate::writer::Writer;


//------------ PrimitiveContent ----------------------------------------------

/// A type that is encoded as a primitive value.
///
/// This trait should be implemented for types that use primitive encoding.
/// It defines how the content octets of a single primitive value are
/// created. The [`Writer`] then adds the length and identifier octets in
/// front of it via [`Writer::primitive`] or [`Writer::primitive_as`].
///
/// Because the writer grows its output backwards, implementations have to
/// produce their content octets back to front: the last octet has to be
/// written first.
pub trait PrimitiveContent {
    /// The natural tag of an encoded value of this type.
    const TAG: Tag;

    /// Returns the length of the encoded content of this type.
    fn encoded_len(&self) -> usize;

    /// Writes the encoded content in front of what is already written.
    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError>;
}

impl<T: PrimitiveContent + ?Sized> PrimitiveContent for &'_ T {
    const TAG: Tag = T::TAG;

    fn encoded_len(&self) -> usize {
        (*self).encoded_len()
    }

    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        (*self).write_content(writer)
    }
}

impl PrimitiveContent for () {
    const TAG: Tag = Tag::NULL;

    fn encoded_len(&self) -> usize {
        0
    }

    fn write_content(&self, _: &mut Writer) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl PrimitiveContent for bool {
    const TAG: Tag = Tag::BOOLEAN;

    fn encoded_len(&self) -> usize {
        1
    }

    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_byte(if *self { 0xFF } else { 0x00 })
    }
}

impl PrimitiveContent for [u8] {
    const TAG: Tag = Tag::OCTET_STRING;

    fn encoded_len(&self) -> usize {
        self.len()
    }

    fn write_content(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(self)
    }
}


//============ Tests =========================================================
