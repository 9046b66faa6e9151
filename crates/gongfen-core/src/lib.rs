//! # gongfen-core
//! Foundation types and traits for the Gongfen merit engine.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
