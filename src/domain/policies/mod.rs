//! Domain Policies
//!
//! Business rules that gate input before it reaches the store.

pub mod input_rules;
