//! Subscription Census - base64 proxy subscription decoder and protocol counter
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod types;
