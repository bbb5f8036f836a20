//! TV content search payload normalizer
//! Reshapes the upstream search API's terse payloads (`t`, `sy`, `d`, ...)
//! into the descriptive client-facing schema

pub mod adapters;
pub mod client;
pub mod config;
pub mod datamap;
pub mod search;

mod adapters_tests;

pub use client::SearchClient;
pub use config::SearchConfig;
pub use search::{compound_result_adapter, results_adapter, suggestions_adapter};
