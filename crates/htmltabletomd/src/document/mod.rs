pub mod model;
pub mod providers;
pub mod renderers;

use crate::document::providers::html::HtmlProvider;
use crate::document::renderers::inline::{InlineConverter, InlineMarkdown};
use crate::document::renderers::markdown::MarkdownRenderer;
use crate::error::TableError;
use crate::options::{Alignment, ConvertOptions};

/// Converts HTML tables into Markdown pipe tables.
///
/// Input without any markup is handed back unchanged, so plain text can be
/// pushed through the converter safely.
pub struct TableConverter {
  options: ConvertOptions,
  provider: HtmlProvider,
  markdown_renderer: MarkdownRenderer,
  inline_converter: Box<dyn InlineConverter + Send + Sync>,
}

impl Default for TableConverter {
  fn default() -> Self {
    Self::new(ConvertOptions::default())
  }
}

impl TableConverter {
  pub fn new(options: ConvertOptions) -> Self {
    Self::with_inline_converter(options, InlineMarkdown::new())
  }

  /// Uses `converter` instead of [`InlineMarkdown`] for cell content.
  pub fn with_inline_converter<C>(options: ConvertOptions, converter: C) -> Self
  where
    C: InlineConverter + Send + Sync + 'static,
  {
    Self {
      markdown_renderer: MarkdownRenderer::new(options.all_cols_alignment),
      provider: HtmlProvider::new(),
      inline_converter: Box::new(converter),
      options,
    }
  }

  pub fn options(&self) -> &ConvertOptions {
    &self.options
  }

  pub fn convert(&self, html: &str) -> Result<String, TableError> {
    let Some(table) = self.provider.parse_table(html)? else {
      tracing::debug!("No markup found, returning input unchanged");
      return Ok(html.to_string());
    };

    tracing::debug!(
      "Rendering table: header={}, body rows={}, alignment={}",
      table.header().is_some(),
      table.body().count(),
      self.options.all_cols_alignment
    );

    let inline = if self.options.convert_cell_html {
      Some(self.inline_converter.as_ref() as &dyn InlineConverter)
    } else {
      None
    };

    Ok(self.markdown_renderer.render(&table, inline))
  }
}

/// Converts `html` with a string alignment name (`left`, `center` or `right`).
///
/// The alignment is validated before the input is looked at.
pub fn convert_table(
  html: &str,
  convert_cell_html: bool,
  alignment: &str,
) -> Result<String, TableError> {
  let all_cols_alignment: Alignment = alignment.parse()?;
  let options = ConvertOptions {
    convert_cell_html,
    all_cols_alignment,
  };
  TableConverter::new(options).convert(html)
}
