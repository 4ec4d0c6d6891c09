pub mod form;

pub use form::{is_acceptable_entry, ElementForm, Field};
