//! Result reporting
//!
//! The console table is always printed; JSON and CSV files are written when
//! their paths are configured.

pub mod csv;
pub mod json;
pub mod text;
