//! Mesh processing algorithms.
//!
//! Every algorithm takes `&mut Mesh` (or `&Mesh` for measurements) and runs
//! synchronously to completion; mutating algorithms replace the affected
//! collection wholesale when they finish, so a mesh is never observable in a
//! half-processed state.
//!
//! - [`smooth`]: Laplacian smoothing
//! - [`triangulate`]: ear-clipping polygon triangulation
//! - [`noise`]: Gaussian vertex perturbation
//! - [`transform`]: centering and radius normalization
//! - [`measure`]: surface area and signed volume

pub mod measure;
pub mod noise;
pub mod smooth;
pub mod transform;
pub mod triangulate;

pub use measure::{surface_area, volume};
pub use noise::gaussian_noise;
pub use smooth::{laplacian_smooth, SmoothOptions};
pub use transform::{center, normalize_radius};
pub use triangulate::triangulate;
