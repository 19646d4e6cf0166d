//! The length octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ Length --------------------------------------------------------

/// The length of the content octets of an encoded value.
///
/// DER only permits definite lengths and requires them to be encoded in the
/// minimum number of octets, so this is a thin newtype around `usize` that
/// knows how to produce that encoding.
///
/// # DER Encoding
///
/// If the length is less than 128, it is encoded in a single octet with the
/// length as its value. Otherwise, the length is encoded as a sequence of
/// big-endian octets without any leading zero octets. This sequence is
/// preceded by an octet with the most significant bit set and the remaining
/// bits giving the number of octets in the sequence.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Length(usize);

impl Length {
    /// The number of octets in a `usize`.
    const LEN: usize = 0usize.to_ne_bytes().len();

    /// The largest length that uses the short form.
    const MAX_SHORT: usize = 0x7F;

    /// A length of zero.
    pub const ZERO: Self = Length(0);

    /// Creates a length from a `usize`.
    pub const fn new(len: usize) -> Self {
        Length(len)
    }

    /// Returns the length as a `usize`.
    pub const fn to_usize(self) -> usize {
        self.0
    }

    /// Returns the number of octets the length octets will occupy.
    pub fn encoded_len(self) -> usize {
        if self.0 > Self::MAX_SHORT {
            Self::LEN - self.encoded_start_idx() + 1
        }
        else {
            1
        }
    }

    /// Returns the length octets.
    ///
    /// The returned value lives on the stack and dereferences into the
    /// octets ready to be placed in front of the content.
    pub fn octets(self) -> LengthOctets {
        let mut res = LengthOctets {
            buf: [0; Self::LEN + 1],
            start: Self::LEN,
        };
        if self.0 > Self::MAX_SHORT {
            let idx = self.encoded_start_idx();
            debug_assert!(idx < Self::LEN);

            // Panic: idx is less than LEN, so both ranges are within the
            // buffer.
            res.buf[idx + 1..].copy_from_slice(&self.0.to_be_bytes()[idx..]);
            res.buf[idx] = ((Self::LEN - idx) as u8) | 0x80;
            res.start = idx;
        }
        else {
            res.buf[Self::LEN] = self.0 as u8;
        }
        res
    }

    /// Returns the index of the first non-zero octet of the big-endian
    /// representation.
    fn encoded_start_idx(self) -> usize {
        (self.0.leading_zeros() / 8) as usize
    }
}


//--- From

impl From<usize> for Length {
    fn from(len: usize) -> Self {
        Length(len)
    }
}

impl From<Length> for usize {
    fn from(len: Length) -> Self {
        len.0
    }
}


//--- Display

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//------------ LengthOctets --------------------------------------------------

/// The encoded length octets of a [`Length`].
#[derive(Clone, Copy, Debug)]
pub struct LengthOctets {
    buf: [u8; Length::LEN + 1],
    start: usize,
}

impl LengthOctets {
    /// Returns the octets as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

impl AsRef<[u8]> for LengthOctets {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//------------ total_len -----------------------------------------------------

/// Returns the length of a complete value with `content_len` content octets.
///
/// This includes the single identifier octet the writer produces.
pub fn total_len(content_len: usize) -> usize {
    1 + Length::new(content_len).encoded_len() + content_len
}


//============ Tests =========================================================
