//! Integration tests for the chroma crates.
//!
//! End-to-end paths across crate boundaries: hex input through the Lab
//! pivot into CIEDE2000, harmony hue arithmetic verified via rgb_to_hsl,
//! and catalog matching against converted colors.
