pub mod aggregate;

pub use aggregate::{Item, ItemDraft, ItemId, ValidationError};
