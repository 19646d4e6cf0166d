//! The identifier octet of an encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// In ASN.1, tags identify the type of a value. A tag consists of one of
/// four classes, represented by the [`Class`] enum, and a number within
/// this class. In DER, the tag becomes the identifier octets of the value
/// by combining it with a bit that signals whether the value is primitive
/// or constructed.
///
/// # Limitations
///
/// The writer only ever produces a single identifier octet. Consequently,
/// tag numbers are limited to the range 0 to 30. This covers all the
/// universal types used in key blobs and the low context-specific tags
/// used for explicit and implicit tagging.
//
//  Internally, we store the identifier octet of a primitive value with the
//  same tag.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Tag(u8);

impl Tag {
    /// The mask for checking the class.
    const CLASS_MASK: u8 = 0xc0;

    /// The bit that marks a constructed value.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number.
    const NUMBER_MASK: u8 = 0x1f;

    /// The largest tag number that fits into a single identifier octet.
    pub const MAX_NUMBER: u8 = 0x1e;

    /// Creates a tag from a class and number.
    ///
    /// # Panics
    ///
    /// The function panics if `number` is larger than [`Tag::MAX_NUMBER`].
    /// When used in a const context, this becomes a compile time error.
    pub const fn new(class: Class, number: u8) -> Self {
        assert!(number <= Self::MAX_NUMBER, "tag number too large");
        Tag(class.into_u8() | number)
    }

    /// Creates a new tag in class “context specific” with the given number.
    pub const fn ctx(number: u8) -> Self {
        Self::new(Class::Context, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        Class::from_u8(self.0 & Self::CLASS_MASK)
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u8 {
        self.0 & Self::NUMBER_MASK
    }

    /// Returns the identifier octet for a value in primitive encoding.
    pub const fn primitive_octet(self) -> u8 {
        self.0
    }

    /// Returns the identifier octet for a value in constructed encoding.
    pub const fn constructed_octet(self) -> u8 {
        self.0 | Self::CONSTRUCTED_MASK
    }
}

/// # Constants for universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::new(Class::Universal, 1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::new(Class::Universal, 2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::new(Class::Universal, 3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::new(Class::Universal, 4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::new(Class::Universal, 5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::new(Class::Universal, 6);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::new(Class::Universal, 16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::new(Class::Universal, 17);
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            tag => {
                match tag.class() {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::Context => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number())
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({} - {:#04x})", self, self.0)
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::Context,
            _ => Self::Private
        }
    }

    const fn into_u8(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::Context => 0x80,
            Self::Private => 0xC0,
        }
    }
}


//============ Tests =========================================================
