//! OU and user management

mod payload;
mod use_case;

pub use payload::{EntityPayload, ValidPayload};
pub use use_case::EntityService;
