use crate::core::{Margin, Orientation, PageSize};
use crate::models::{
    Align, Color, ContentBlock, Document, DrawOp, ListMarker, PageCanvas, TableBlock, TextStyle,
};
use crate::templates::helpers::escape_typst;

/// Emits Typst source from a document model. Emission is deterministic:
/// identical documents produce byte-identical source, so compiled output
/// is reproducible as well.
pub struct TypstBuilder {
    sections: Vec<String>,
}

impl TypstBuilder {
    pub fn new() -> Self {
        TypstBuilder {
            sections: Vec::new(),
        }
    }

    pub fn emit(document: &Document) -> String {
        let mut builder = TypstBuilder::new();
        builder.push_preamble(document);
        for block in document.blocks() {
            builder.push_block(block);
        }
        builder.build()
    }

    pub fn build(&self) -> String {
        self.sections.join("\n\n")
    }

    fn push_preamble(&mut self, document: &Document) {
        let layout = document.layout();
        let mut page_args = vec![
            page_size_to_typst(&layout.page_size),
            format!("margin: {}", margin_to_typst(&layout.margin)),
            format!(
                "flipped: {}",
                matches!(layout.orientation, Orientation::Landscape)
            ),
        ];

        // The decoration is replayed as the page background so Typst
        // paints it under the content layer of every page, including
        // pages created by overflow.
        if let Some(decorator) = document.decoration() {
            let (width, height) = layout.page_size_pt();
            let mut canvas = PageCanvas::new(width, height);
            decorator.decorate(&mut canvas);
            page_args.push(format!("background: {}", background_to_typst(canvas.ops())));
        }

        self.sections
            .push(format!("#set page(\n  {}\n)", page_args.join(",\n  ")));
        self.sections.push("#set text(size: 11pt)".to_string());
        self.sections
            .push("#show heading.where(level: 1): set align(center)".to_string());
    }

    fn push_block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { text, level } => {
                let marker = "=".repeat((*level).max(1) as usize);
                self.sections.push(format!("{} {}", marker, escape_typst(text)));
            }
            ContentBlock::Paragraph { text, style } => self.push_paragraph(text, style),
            ContentBlock::List { items, marker } => self.push_list(items, *marker),
            ContentBlock::Table(table) => self.push_table(table),
            ContentBlock::Spacer { height } => self.sections.push(format!("#v({height}pt)")),
        }
    }

    fn push_paragraph(&mut self, text: &str, style: &TextStyle) {
        let escaped = escape_typst(text);
        if *style == TextStyle::default() {
            self.sections.push(escaped);
            return;
        }

        let mut args = Vec::new();
        if let Some(size) = style.size {
            args.push(format!("size: {size}pt"));
        }
        if let Some(color) = &style.color {
            args.push(format!("fill: {}", color_to_typst(color)));
        }
        if style.bold {
            args.push("weight: \"bold\"".to_string());
        }

        let mut section = if args.is_empty() {
            escaped
        } else {
            format!("#text({})[{}]", args.join(", "), escaped)
        };
        if let Some(align) = style.align {
            section = format!("#align({})[{}]", align_to_typst(align), section);
        }
        self.sections.push(section);

        if let Some(space) = style.space_after {
            self.sections.push(format!("#v({space}pt)"));
        }
    }

    fn push_list(&mut self, items: &[String], marker: ListMarker) {
        // An empty optional section renders as nothing.
        if items.is_empty() {
            return;
        }
        let escaped: Vec<String> = items
            .iter()
            .map(|item| format!("[{}]", escape_typst(item)))
            .collect();
        match marker {
            ListMarker::Bullet => {
                self.sections
                    .push(format!("#list(\n  {},\n)", escaped.join(",\n  ")));
            }
            ListMarker::Dash => {
                self.sections.push(format!(
                    "#list(\n  marker: [–],\n  {},\n)",
                    escaped.join(",\n  ")
                ));
            }
            ListMarker::Plain => {
                let plain: Vec<String> =
                    items.iter().map(|item| escape_typst(item)).collect();
                self.sections.push(plain.join("\n\n"));
            }
        }
    }

    fn push_table(&mut self, table: &TableBlock) {
        if table.headers.is_none() && table.rows.is_empty() {
            return;
        }

        let mut typst = String::from("#table(\n");

        if let Some(widths) = &table.column_widths {
            let width_str: Vec<String> = widths.iter().map(|w| format!("{w}pt")).collect();
            typst.push_str(&format!("  columns: ({}),\n", width_str.join(", ")));
        } else {
            typst.push_str(&format!("  columns: {},\n", table.column_count()));
        }

        typst.push_str("  stroke: 0.5pt,\n");
        typst.push_str("  fill: (x, y) => if y == 0 { rgb(240, 240, 240) } else { white },\n");
        typst.push_str("  inset: 8pt,\n\n");

        if let Some(headers) = &table.headers {
            for header in headers {
                typst.push_str(&format!(
                    "  [#text(weight: \"bold\")[{}]],\n",
                    escape_typst(header)
                ));
            }
        }

        for row in &table.rows {
            for cell in row {
                typst.push_str(&format!("  [{}],\n", escape_typst(cell)));
            }
        }

        typst.push(')');
        self.sections.push(typst);
    }
}

impl Default for TypstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn page_size_to_typst(size: &PageSize) -> String {
    match size {
        PageSize::A4 => "paper: \"a4\"".to_string(),
        PageSize::Letter => "paper: \"us-letter\"".to_string(),
        PageSize::Legal => "paper: \"us-legal\"".to_string(),
        PageSize::A3 => "paper: \"a3\"".to_string(),
        PageSize::Custom(w, h) => format!("width: {w}mm, height: {h}mm"),
    }
}

fn margin_to_typst(margin: &Margin) -> String {
    format!(
        "(top: {}mm, bottom: {}mm, left: {}mm, right: {}mm)",
        margin.top, margin.bottom, margin.left, margin.right
    )
}

fn background_to_typst(ops: &[DrawOp]) -> String {
    let body: Vec<String> = ops.iter().map(draw_op_to_typst).collect();
    format!("{{\n    {}\n  }}", body.join("\n    "))
}

fn draw_op_to_typst(op: &DrawOp) -> String {
    match op {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => format!(
            "place(top + left, dx: {x}pt, dy: {y}pt, rect(width: {width}pt, height: {height}pt, fill: {}))",
            color_to_typst(color)
        ),
        DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            thickness,
        } => format!(
            "place(top + left, dx: {x}pt, dy: {y}pt, rect(width: {width}pt, height: {height}pt, stroke: {thickness}pt + {}))",
            color_to_typst(color)
        ),
    }
}

fn color_to_typst(color: &Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

fn align_to_typst(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    }
}
