pub mod inline;
pub mod markdown;
