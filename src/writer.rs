//! The backward-growing DER writer.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use smallvec::SmallVec;
use crate::content::PrimitiveContent;
use crate::error::EncodeError;
use crate::int::Integer;
use crate::length::Length;
use crate::oid::Oid;
use crate::string::BitString;
use crate::tag::Tag;


//------------ MAX_DEPTH -----------------------------------------------------

/// The maximum number of constructed values that can be open at a time.
pub const MAX_DEPTH: usize = 6;


//------------ Writer --------------------------------------------------------

/// A writer producing DER into a fixed buffer from its end towards its start.
///
/// DER places the length of every value before its content, but that
/// length is only known once the content has been produced. Instead of
/// measuring everything first, the writer fills the buffer backwards: each
/// write places its octets immediately in front of what has been written so
/// far. When a value’s content is complete, its length is simply the number
/// of octets written since the content started and the length and identifier
/// octets can be prepended right away.
///
/// As a consequence, a structure has to be written in reverse: the last
/// element of a sequence first, the sequence’s header last. For constructed
/// values, call [`open`][Self::open] before writing the content (which is
/// where the value’s content *ends*) and [`close`][Self::close] after it,
/// which adds the header. Alternatively, [`sequence`][Self::sequence] does
/// both around a closure.
///
/// ```
/// use rder::Writer;
///
/// // SEQUENCE { INTEGER 1, OCTET STRING DE AD BE EF }
/// let mut buf = [0u8; 32];
/// let mut writer = Writer::new(&mut buf);
/// writer.open().unwrap();
/// writer.octet_string(b"\xDE\xAD\xBE\xEF").unwrap();
/// writer.integer(1i32).unwrap();
/// writer.close().unwrap();
/// assert_eq!(
///     writer.finish().unwrap(),
///     b"\x30\x09\x02\x01\x01\x04\x04\xDE\xAD\xBE\xEF"
/// );
/// ```
///
/// The writer never allocates: the buffer is provided by the caller and the
/// start positions of at most [`MAX_DEPTH`] open values are kept inline.
///
/// All errors are the result of the caller composing the value wrongly or
/// providing a buffer that is too small. After an error, the writer’s
/// content is garbage.
#[derive(Debug)]
pub struct Writer<'a> {
    /// The buffer we write into.
    buf: &'a mut [u8],

    /// The index of the first octet that has been written.
    ///
    /// Everything from here to the end of `buf` is output.
    pos: usize,

    /// The content end positions of the currently open values.
    marks: SmallVec<[usize; MAX_DEPTH]>,
}

impl<'a> Writer<'a> {
    /// Creates a new writer using all of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Writer {
            pos: buf.len(),
            buf,
            marks: SmallVec::new(),
        }
    }

    /// Returns the number of currently open constructed values.
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    /// Returns the number of octets still available in the buffer.
    pub fn remaining(&self) -> usize {
        self.pos
    }

    /// Returns the number of octets written so far.
    pub fn encoded_len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the octets written so far.
    ///
    /// Unless [`depth`][Self::depth] is zero, this is not complete DER.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Finishes writing and returns the encoded data.
    ///
    /// Returns an error if there still are open constructed values.
    pub fn finish(self) -> Result<&'a [u8], EncodeError> {
        if !self.marks.is_empty() {
            xerr!(return Err(EncodeError::unbalanced()))
        }
        let Writer { buf, pos, .. } = self;
        let buf: &'a [u8] = buf;
        Ok(&buf[pos..])
    }

    /// Returns a copy of the encoded data as a bytes value.
    ///
    /// Returns an error if there still are open constructed values.
    pub fn to_bytes(&self) -> Result<Bytes, EncodeError> {
        if !self.marks.is_empty() {
            xerr!(return Err(EncodeError::unbalanced()))
        }
        Ok(Bytes::copy_from_slice(self.as_slice()))
    }
}

/// # Constructed Values
///
impl<'a> Writer<'a> {
    /// Marks the end of the content of a constructed value.
    ///
    /// Everything written between this call and the matching
    /// [`close`][Self::close] becomes the content of the value.
    ///
    /// Returns an error if [`MAX_DEPTH`] values are already open.
    pub fn open(&mut self) -> Result<(), EncodeError> {
        if self.marks.len() == MAX_DEPTH {
            xerr!(return Err(EncodeError::overflow()))
        }
        self.marks.push(self.pos);
        Ok(())
    }

    /// Completes the most recently opened value as a SEQUENCE.
    pub fn close(&mut self) -> Result<(), EncodeError> {
        self.close_as(Tag::SEQUENCE)
    }

    /// Completes the most recently opened value using the given tag.
    ///
    /// The identifier octet is produced with the constructed bit set, so
    /// this can be used for SET values or explicitly tagged values.
    ///
    /// Returns an error if there is no open value.
    pub fn close_as(&mut self, tag: Tag) -> Result<(), EncodeError> {
        self.close_with(tag.constructed_octet())
    }

    /// Completes the most recently opened value as a primitive value.
    ///
    /// This wraps everything written since the matching [`open`][Self::open]
    /// into a primitive value with the given tag. It is needed where the
    /// content of, say, an OCTET STRING is itself an encoded value.
    ///
    /// Returns an error if there is no open value.
    pub fn close_primitive_as(
        &mut self, tag: Tag
    ) -> Result<(), EncodeError> {
        self.close_with(tag.primitive_octet())
    }

    /// Pops the most recent mark and writes the header for its content.
    fn close_with(&mut self, octet: u8) -> Result<(), EncodeError> {
        let end = match self.marks.pop() {
            Some(end) => end,
            None => xerr!(return Err(EncodeError::underflow())),
        };
        self.write_header(end, octet)
    }

    /// Writes a SEQUENCE whose content is produced by `op`.
    ///
    /// Note that `op` has to write the elements of the sequence in reverse
    /// order.
    pub fn sequence<F>(&mut self, op: F) -> Result<(), EncodeError>
    where F: FnOnce(&mut Self) -> Result<(), EncodeError> {
        self.constructed(Tag::SEQUENCE, op)
    }

    /// Writes a constructed value with the given tag.
    ///
    /// The content is produced by `op` which has to write the elements of
    /// the value in reverse order.
    pub fn constructed<F>(
        &mut self, tag: Tag, op: F
    ) -> Result<(), EncodeError>
    where F: FnOnce(&mut Self) -> Result<(), EncodeError> {
        self.open()?;
        op(self)?;
        self.close_as(tag)
    }
}

/// # Primitive Values
///
impl<'a> Writer<'a> {
    /// Writes a primitive value using its natural tag.
    pub fn primitive<P>(&mut self, value: &P) -> Result<(), EncodeError>
    where P: PrimitiveContent + ?Sized {
        self.primitive_as(value, P::TAG)
    }

    /// Writes a primitive value using the given tag.
    ///
    /// This is used for implicitly tagged values.
    pub fn primitive_as<P>(
        &mut self, value: &P, tag: Tag
    ) -> Result<(), EncodeError>
    where P: PrimitiveContent + ?Sized {
        let end = self.pos;
        value.write_content(self)?;
        self.write_header(end, tag.primitive_octet())
    }

    /// Writes a BOOLEAN value.
    pub fn bool(&mut self, value: bool) -> Result<(), EncodeError> {
        self.primitive(&value)
    }

    /// Writes a NULL value.
    pub fn null(&mut self) -> Result<(), EncodeError> {
        self.primitive(&())
    }

    /// Writes an INTEGER value.
    ///
    /// The value is encoded in the minimal number of octets.
    pub fn integer<I: Integer>(
        &mut self, value: I
    ) -> Result<(), EncodeError> {
        self.primitive(&value)
    }

    /// Writes an OCTET STRING value.
    pub fn octet_string(&mut self, octets: &[u8]) -> Result<(), EncodeError> {
        self.primitive(octets)
    }

    /// Writes a BIT STRING value containing complete octets.
    pub fn bit_string(&mut self, bits: &[u8]) -> Result<(), EncodeError> {
        self.primitive(&BitString::new(bits))
    }

    /// Writes an OBJECT IDENTIFIER value.
    ///
    /// The `oid` argument has to contain the already encoded content octets
    /// of the object identifier.
    pub fn object_identifier(
        &mut self, oid: impl AsRef<[u8]>
    ) -> Result<(), EncodeError> {
        self.primitive(&Oid(oid))
    }
}

/// # Writing Octets
///
impl<'a> Writer<'a> {
    /// Places a single octet in front of the already written data.
    pub fn write_byte(&mut self, octet: u8) -> Result<(), EncodeError> {
        if self.pos == 0 {
            xerr!(return Err(EncodeError::capacity()))
        }
        self.pos -= 1;
        self.buf[self.pos] = octet;
        Ok(())
    }

    /// Places a slice of octets in front of the already written data.
    ///
    /// This can also be used to embed a complete encoding produced
    /// elsewhere. If there isn’t enough space left, nothing is written.
    pub fn write_bytes(&mut self, octets: &[u8]) -> Result<(), EncodeError> {
        if octets.len() > self.pos {
            xerr!(return Err(EncodeError::capacity()))
        }
        self.pos -= octets.len();
        self.buf[self.pos..self.pos + octets.len()].copy_from_slice(octets);
        Ok(())
    }

    /// Prepends the length and identifier octets for content ending at `end`.
    fn write_header(
        &mut self, end: usize, octet: u8
    ) -> Result<(), EncodeError> {
        debug_assert!(end >= self.pos);
        self.write_bytes(Length::new(end - self.pos).octets().as_slice())?;
        self.write_byte(octet)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::length::total_len;
    use crate::oid;
    use super::*;

    #[test]
    fn sequence_of_integer_and_octets() {
        let mut buf = [0u8; 64];
        let mut writer = Writer::new(&mut buf);
        writer.open().unwrap();
        writer.octet_string(b"\xDE\xAD\xBE\xEF").unwrap();
        writer.integer(1i32).unwrap();
        writer.close().unwrap();
        assert_eq!(writer.depth(), 0);
        assert_eq!(
            writer.finish().unwrap(),
            b"\x30\x09\x02\x01\x01\x04\x04\xDE\xAD\xBE\xEF"
        );
    }

    #[test]
    fn primitives() {
        fn write(op: impl FnOnce(&mut Writer) -> Result<(), EncodeError>)
            -> Vec<u8>
        {
            let mut buf = [0u8; 32];
            let mut writer = Writer::new(&mut buf);
            op(&mut writer).unwrap();
            writer.finish().unwrap().into()
        }

        assert_eq!(
            write(|w| w.bit_string(b"\xFF\x00")), b"\x03\x03\x00\xFF\x00"
        );
        assert_eq!(write(|w| w.bit_string(b"")), b"\x03\x01\x00");
        assert_eq!(write(|w| w.bool(true)), b"\x01\x01\xFF");
        assert_eq!(write(|w| w.bool(false)), b"\x01\x01\x00");
        assert_eq!(write(|w| w.null()), b"\x05\x00");
        assert_eq!(write(|w| w.integer(256i32)), b"\x02\x02\x01\x00");
        assert_eq!(write(|w| w.integer(256i64)), b"\x02\x02\x01\x00");
        assert_eq!(write(|w| w.integer(-1i64)), b"\x02\x01\xFF");
        assert_eq!(write(|w| w.octet_string(b"")), b"\x04\x00");
        assert_eq!(
            write(|w| w.object_identifier(b"\x2B\x65\x70")),
            b"\x06\x03\x2B\x65\x70"
        );
        assert_eq!(
            write(|w| w.object_identifier(oid::X25519)),
            b"\x06\x03\x2B\x65\x6E"
        );
    }

    #[test]
    fn long_form_length() {
        let content = [0x5Au8; 200];
        let mut buf = [0u8; 256];
        let mut writer = Writer::new(&mut buf);
        writer.octet_string(&content).unwrap();
        let res = writer.finish().unwrap();
        assert_eq!(&res[..3], b"\x04\x81\xC8");
        assert_eq!(&res[3..], &content[..]);

        let content = vec![0u8; 0x1234];
        let mut buf = vec![0u8; 0x2000];
        let mut writer = Writer::new(&mut buf);
        writer.sequence(|w| w.octet_string(&content)).unwrap();
        let res = writer.finish().unwrap();
        assert_eq!(&res[..8], b"\x30\x82\x12\x38\x04\x82\x12\x34");
        assert_eq!(res.len(), 0x1234 + 8);
    }

    #[test]
    fn nested() {
        // SEQUENCE { SEQUENCE { OCTET STRING 02 * 0x7c }, BOOLEAN TRUE }
        let ostring = [2u8; 0x7c];
        let mut buf = [0u8; 1024];
        let mut writer = Writer::new(&mut buf);
        writer.sequence(|w| {
            w.bool(true)?;
            w.sequence(|w| w.octet_string(&ostring))
        }).unwrap();
        let res = writer.finish().unwrap();
        assert_eq!(&res[..6], b"\x30\x81\x83\x30\x7e\x04");
        assert_eq!(res[6], 0x7c);
        assert_eq!(&res[res.len() - 3..], b"\x01\x01\xFF");
        assert_eq!(res.len(), 0x83 + 3);
    }

    #[test]
    fn tagged() {
        let mut buf = [0u8; 16];
        let mut writer = Writer::new(&mut buf);
        writer.constructed(Tag::ctx(0), |w| w.integer(5i32)).unwrap();
        writer.primitive_as(&b"\x01\x02"[..], Tag::ctx(1)).unwrap();
        writer.constructed(Tag::SET, |w| w.null()).unwrap();
        assert_eq!(
            writer.finish().unwrap(),
            b"\x31\x02\x05\x00\x81\x02\x01\x02\xA0\x03\x02\x01\x05"
        );
    }

    #[test]
    fn empty_sequence() {
        let mut buf = [0u8; 2];
        let mut writer = Writer::new(&mut buf);
        writer.open().unwrap();
        writer.close().unwrap();
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.finish().unwrap(), b"\x30\x00");
    }

    #[test]
    fn structural_overflow() {
        let mut buf = [0u8; 64];
        let mut writer = Writer::new(&mut buf);
        for depth in 0..MAX_DEPTH {
            assert_eq!(writer.depth(), depth);
            writer.open().unwrap();
        }
        assert_eq!(
            writer.open().unwrap_err().kind(), ErrorKind::StructuralOverflow
        );
        assert_eq!(writer.depth(), MAX_DEPTH);
        assert!(!writer.marks.spilled());

        // The open values can still be closed.
        for _ in 0..MAX_DEPTH {
            writer.close().unwrap();
        }
        assert_eq!(writer.encoded_len(), 2 * MAX_DEPTH);
        assert_eq!(&writer.finish().unwrap()[..4], b"\x30\x0a\x30\x08");
    }

    #[test]
    fn structural_underflow() {
        let mut buf = [0u8; 16];
        let mut writer = Writer::new(&mut buf);
        assert_eq!(
            writer.close().unwrap_err().kind(),
            ErrorKind::StructuralUnderflow
        );
        assert_eq!(writer.encoded_len(), 0);

        writer.open().unwrap();
        writer.close().unwrap();
        assert_eq!(
            writer.close_as(Tag::SET).unwrap_err().kind(),
            ErrorKind::StructuralUnderflow
        );
    }

    #[test]
    fn unbalanced() {
        let mut buf = [0u8; 16];
        let mut writer = Writer::new(&mut buf);
        writer.open().unwrap();
        writer.null().unwrap();
        assert_eq!(writer.as_slice(), b"\x05\x00");
        assert_eq!(
            writer.to_bytes().unwrap_err().kind(), ErrorKind::Unbalanced
        );
        assert_eq!(writer.finish().unwrap_err().kind(), ErrorKind::Unbalanced);
    }

    fn write_scenario(writer: &mut Writer) -> Result<(), EncodeError> {
        writer.sequence(|w| {
            w.octet_string(b"\xDE\xAD\xBE\xEF")?;
            w.integer(1i32)
        })
    }

    #[test]
    fn exact_capacity() {
        let expected = total_len(total_len(4) + total_len(1));
        assert_eq!(expected, 11);

        let mut buf = [0u8; 11];
        let mut writer = Writer::new(&mut buf);
        write_scenario(&mut writer).unwrap();
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.encoded_len(), 11);
    }

    #[test]
    fn capacity_exceeded() {
        let mut buf = [0u8; 10];
        let mut writer = Writer::new(&mut buf);
        assert_eq!(
            write_scenario(&mut writer).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );

        for len in 0..11 {
            let mut buf = vec![0u8; len];
            let mut writer = Writer::new(&mut buf);
            assert_eq!(
                write_scenario(&mut writer).unwrap_err().kind(),
                ErrorKind::CapacityExceeded
            );
        }
    }

    #[test]
    fn failed_write_bytes_writes_nothing() {
        let mut buf = [0u8; 3];
        let mut writer = Writer::new(&mut buf);
        writer.write_byte(0x11).unwrap();
        assert_eq!(
            writer.write_bytes(b"\x01\x02\x03").unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(writer.remaining(), 2);
        writer.write_bytes(b"\x01\x02").unwrap();
        assert_eq!(
            writer.write_byte(0).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(writer.finish().unwrap(), b"\x01\x02\x11");
    }

    #[test]
    fn to_bytes() {
        let mut buf = [0u8; 8];
        let mut writer = Writer::new(&mut buf);
        writer.null().unwrap();
        let bytes = writer.to_bytes().unwrap();
        drop(writer);
        assert_eq!(bytes, Bytes::from_static(b"\x05\x00"));
    }
}
