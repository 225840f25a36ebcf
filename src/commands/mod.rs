//! Command handlers for the pacsmith binary

pub mod entity;
pub mod pac;
pub mod proxy;
pub mod settings;
