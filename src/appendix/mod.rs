//! Static lookups: error code descriptions and date-fragment codecs.

pub mod dates;
pub mod errors;

pub use errors::error_description;
