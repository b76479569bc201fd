//! Text codecs.
//!
//! Two line-oriented formats are supported:
//!
//! - [`obj`]: the OBJ-like mesh format (`v`/`vn`/`vt`/`f` records), parsed
//!   into a [`crate::mesh::Mesh`] and serialized back losslessly.
//! - [`cloud`]: the paired point-cloud format (tag length selects position
//!   vs normal), parsed into a [`cloud::PointCloud`].
//!
//! Both codecs read their whole input up front and never touch I/O
//! mid-computation; `load`/`save` wrappers do the one-shot file access.

pub mod cloud;
pub mod obj;

pub use cloud::PointCloud;
