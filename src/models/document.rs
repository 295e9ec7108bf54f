use std::fmt;

use crate::core::PageLayout;
use crate::models::decoration::PageDecorator;

/// 24-bit color carried by text styles and page decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Optional paragraph styling. The default renders as a plain body paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub size: Option<f32>,
    pub color: Option<Color>,
    pub align: Option<Align>,
    pub bold: bool,
    pub space_after: Option<f32>,
}

impl TextStyle {
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn space_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }
}

/// How list items are prefixed. `Plain` renders each item as an
/// unmarked paragraph of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Dash,
    Plain,
}

/// Cell matrix with an optional header row and optional column widths
/// in points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableBlock {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub column_widths: Option<Vec<f32>>,
}

impl TableBlock {
    pub fn new() -> Self {
        TableBlock::default()
    }

    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of columns, taken from the header row or the first body row.
    pub fn column_count(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }
}

/// One renderable unit of flowing content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading { text: String, level: u8 },
    Paragraph { text: String, style: TextStyle },
    List { items: Vec<String>, marker: ListMarker },
    Table(TableBlock),
    Spacer { height: f32 },
}

/// One generation request's output: an ordered, append-only sequence of
/// content blocks plus the page layout and an optional page decoration.
///
/// A `Document` is built once by a template, handed to the renderer, and
/// discarded. The decoration is not part of the block sequence; it paints
/// under the content layer on every rendered page.
pub struct Document {
    layout: PageLayout,
    blocks: Vec<ContentBlock>,
    decoration: Option<Box<dyn PageDecorator>>,
}

impl Document {
    pub fn new(layout: PageLayout) -> Self {
        Document {
            layout,
            blocks: Vec::new(),
            decoration: None,
        }
    }

    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Self {
        self.blocks.push(ContentBlock::Heading {
            text: text.to_string(),
            level,
        });
        self
    }

    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        self.add_styled_paragraph(text, TextStyle::default())
    }

    pub fn add_styled_paragraph(&mut self, text: &str, style: TextStyle) -> &mut Self {
        self.blocks.push(ContentBlock::Paragraph {
            text: text.to_string(),
            style,
        });
        self
    }

    pub fn add_list(&mut self, items: Vec<String>, marker: ListMarker) -> &mut Self {
        self.blocks.push(ContentBlock::List { items, marker });
        self
    }

    pub fn add_table(&mut self, table: TableBlock) -> &mut Self {
        self.blocks.push(ContentBlock::Table(table));
        self
    }

    pub fn add_spacer(&mut self, height: f32) -> &mut Self {
        self.blocks.push(ContentBlock::Spacer { height });
        self
    }

    pub fn set_decoration(&mut self, decorator: Box<dyn PageDecorator>) -> &mut Self {
        self.decoration = Some(decorator);
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn decoration(&self) -> Option<&dyn PageDecorator> {
        self.decoration.as_deref()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("layout", &self.layout)
            .field("blocks", &self.blocks)
            .field("decoration", &self.decoration.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_preserve_append_order() {
        let mut doc = Document::new(PageLayout::default());
        doc.add_heading("Title", 1)
            .add_spacer(12.0)
            .add_paragraph("body");

        assert_eq!(doc.blocks().len(), 3);
        assert!(matches!(doc.blocks()[0], ContentBlock::Heading { .. }));
        assert!(matches!(doc.blocks()[2], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn table_column_count_falls_back_to_first_row() {
        let mut table = TableBlock::new();
        table.add_row(vec!["a".into(), "b".into()]);
        assert_eq!(table.column_count(), 2);

        let with_headers = TableBlock::new().with_headers(vec!["x".into(); 3]);
        assert_eq!(with_headers.column_count(), 3);
    }
}
