// Character Module
//
// Minted characters start as pending tokens and are finalized once
// the oracle delivers their random words.

mod types;

pub use types::*;
