//! Search result normalization
//! Maps the upstream search API's terse payloads into the client schema

pub mod adapters;

pub use adapters::{
    compound_result_adapter, results_adapter, suggestions_adapter, ways_to_watch_adapter,
    OfferType,
};
