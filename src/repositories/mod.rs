pub mod pages;

pub use pages::{PageRepository, PageRepositoryTrait, SavedPage};
