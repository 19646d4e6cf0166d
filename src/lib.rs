//! Writing small DER encoded values into fixed buffers.
//!
//! This crate provides a [`Writer`] that encodes values in the
//! Distinguished Encoding Rules (DER) of ASN.1 into a buffer provided by the
//! caller. It is meant for small structures of a fixed shape, such as the
//! wrappers placed around raw key material when exporting keys as
//! SubjectPublicKeyInfo or PKCS#8 blobs, where the worst case size of the
//! encoding is known up front.
//!
//! The writer neither allocates nor measures its input twice. Instead, it
//! fills the buffer from the back, prepending each value’s length once its
//! content is complete. See the [`Writer`] type for how to use it.
//!
//! Only encoding is provided. The types of ASN.1 supported are BOOLEAN,
//! INTEGER for the built-in signed integers, BIT STRING made of whole
//! octets, OCTET STRING, NULL, OBJECT IDENTIFIER from its encoded content,
//! and constructed values such as SEQUENCE. Additional primitive types can
//! be added by implementing [`PrimitiveContent`].
//!
//! # Feature Flags
//!
//! * `extra-debug`: prints a backtrace to stderr wherever an encoding error
//!   is produced.

pub use self::content::PrimitiveContent;
pub use self::error::{EncodeError, ErrorKind};
pub use self::int::Integer;
pub use self::length::{Length, LengthOctets, total_len};
pub use self::oid::{ConstOid, Oid};
pub use self::string::BitString;
pub use self::tag::{Class, Tag};
pub use self::writer::{MAX_DEPTH, Writer};

#[macro_use] pub mod debug;

pub mod int;
pub mod oid;
pub mod string;

mod content;
mod error;
mod length;
mod tag;
mod writer;
