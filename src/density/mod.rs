//! Density-map estimation.
//!
//! The density map assigns each pixel the local Shannon entropy of its
//! circular neighborhood; [`smooth`] then turns the noisy per-pixel map
//! into a coherent region of high value where content is visually dense.

pub(crate) mod blur;
mod entropy;
pub mod smooth;

pub use entropy::{estimate_density, local_entropy, DensityPath};
