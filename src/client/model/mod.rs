pub mod cache;
pub mod carousel;
pub mod error;
pub mod highlight;
