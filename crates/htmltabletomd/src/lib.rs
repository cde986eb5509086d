#![deny(clippy::all)]

pub use crate::document::renderers::inline::{InlineConverter, InlineMarkdown};
pub use crate::document::renderers::markdown::escape_cell;
pub use crate::document::{convert_table, TableConverter};
pub use crate::error::TableError;
pub use crate::options::{Alignment, ConvertOptions};

mod document;
mod error;
mod options;
