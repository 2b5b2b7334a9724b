// src/core/mod.rs
pub mod aggregator;
pub mod alias;
pub mod assembler;
pub mod chaifen;
pub mod code_table;
pub mod engine;
pub mod tokenizer;
pub mod types;
