//! Git object identifiers and headers
//!
//! Git stores all content as objects identified by SHA-1 hashes. Only commit
//! objects are read here, and only for their parent links; the header type is
//! parsed so that anything else can be rejected.
//!
//! All objects share the on-disk format `<type> <size>\0<content>`, zlib compressed.

pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
