pub mod classical;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod strassen;
