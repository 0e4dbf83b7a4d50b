//! Core compute primitives (Vector, Matrix).
//!
//! Dense row-major storage with just enough linear algebra for
//! least-squares fitting.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
