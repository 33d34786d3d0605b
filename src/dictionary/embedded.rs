//! Embedded dictionary
//!
//! Entries compiled into the binary at build time from `data/dictionary.tsv`.

// Include generated entries from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
