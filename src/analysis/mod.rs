//! Analysis of the reconstructed image

/// Pattern templates and orientation-invariant search
pub mod patterns;
