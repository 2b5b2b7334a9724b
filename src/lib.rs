// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::engine::{
    build_chaifen, build_table, convert_aliases, AliasConverter, ConversionSummary, ZigenEngine,
};
pub use crate::error::{Result, ZigenError};
