
//! Hexagonal aperture-mask designer
//!
//! This library models the segmented primary mirror of an ELT-class telescope as a
//! hexagonal lattice, lets a caller pick a subset of segments as mask holes, and
//! derives the uv-plane baselines of that mask together with their redundancy.

pub mod baselines;
pub mod config;
pub mod editor;
pub mod error;
pub mod lattice;
pub mod mask;
pub mod store;

pub use editor::MaskEditor;
pub use error::MaskError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, MaskError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
