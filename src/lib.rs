// src/lib.rs

//! LTI Tracker Library
//!
//! Finds RSI store ships on sale with Lifetime Insurance and announces them
//! to a Discord channel.

pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod services;
pub mod utils;
