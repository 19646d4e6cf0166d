//! DER encoding for string types.
//!
//! Octet strings need no help: a plain bytes slice already is the content
//! of an OCTET STRING, see [`Writer::octet_string`]. Bit strings carry an
//! additional octet in front of their bits and are represented by
//! [`BitString`].
//!
//! [`Writer::octet_string`]: crate::Writer::octet_string

//--- Re-exports

pub use self::bit::BitString;

//--- Private modules

mod bit;
