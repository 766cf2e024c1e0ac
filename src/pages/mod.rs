pub mod dtos;
pub mod handlers;
pub mod source;

pub use handlers::extract_page_data;
pub use source::{LegacyPageStore, SourceError, decode_source};
