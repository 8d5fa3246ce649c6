//! Embedded word lists
//!
//! Generated from `data/` by the build script and compiled into the binary.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
