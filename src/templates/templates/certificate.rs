use anyhow::{Context, Result};
use minijinja::context;
use serde_json::Value;
use tracing::debug;

use crate::core::{DocumentResult, Margin, Orientation, PageLayout, PageSize};
use crate::models::{
    Align, CertificateParams, Color, Document, PageCanvas, PageDecorator, TextStyle,
};
use crate::templates::engine;
use crate::templates::template_trait::DocumentTemplate;

const DARK_BLUE: Color = Color::rgb(0, 0, 139);
const BODY_BLUE: Color = Color::rgb(0, 0, 255);
const PALE_BLUE: Color = Color::rgb(242, 242, 255);

/// Page decoration of the certificate: a pale full-page background and a
/// heavy border rectangle inset from the page edge. Painted on every page
/// of the output, under the content layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateFrame {
    pub background: Color,
    pub border: Color,
    pub border_width: f32,
    pub inset: f32,
}

impl Default for CertificateFrame {
    fn default() -> Self {
        CertificateFrame {
            background: PALE_BLUE,
            border: DARK_BLUE,
            border_width: 4.0,
            inset: 20.0,
        }
    }
}

impl PageDecorator for CertificateFrame {
    fn decorate(&self, canvas: &mut PageCanvas) {
        canvas.fill_rect(0.0, 0.0, canvas.width(), canvas.height(), self.background);
        canvas.stroke_rect(
            self.inset,
            self.inset,
            canvas.width() - 2.0 * self.inset,
            canvas.height() - 2.0 * self.inset,
            self.border,
            self.border_width,
        );
    }
}

pub struct CertificateTemplate;

impl CertificateTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CertificateTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for CertificateTemplate {
    fn generate(&self, data: &Value) -> Result<Document> {
        let params: CertificateParams =
            serde_json::from_value(data.clone()).context("invalid certificate fields")?;
        Ok(build(&params)?)
    }

    fn template_id(&self) -> &str {
        "certificate"
    }

    fn filename(&self) -> &str {
        "certificate.pdf"
    }

    fn description(&self) -> &str {
        "Certificate of completion"
    }
}

/// Assembles the certificate on landscape Letter with a decorated page
/// background and a single interpolated narrative paragraph.
pub fn build(params: &CertificateParams) -> DocumentResult<Document> {
    debug!(cert_id = %params.cert_id, "building certificate");
    let layout = PageLayout::default()
        .with_page_size(PageSize::Letter)
        .with_orientation(Orientation::Landscape)
        .with_margin(Margin::uniform(18.0));

    let mut doc = Document::new(layout);
    doc.set_decoration(Box::new(CertificateFrame::default()));

    doc.add_styled_paragraph(
        "CERTIFICATE OF COMPLETION",
        TextStyle::default()
            .size(30.0)
            .align(Align::Center)
            .color(DARK_BLUE)
            .bold()
            .space_after(20.0),
    );
    doc.add_spacer(20.0);

    let body = engine::render(
        "certificate_body",
        context! {
            name => &params.name,
            course => &params.course,
            date => params.date.to_string(),
            cert_id => &params.cert_id,
            issued_by => &params.issued_by,
        },
    )?;
    doc.add_styled_paragraph(
        &body,
        TextStyle::default()
            .size(16.0)
            .align(Align::Center)
            .color(BODY_BLUE)
            .space_after(20.0),
    );
    doc.add_spacer(50.0);

    let signature = TextStyle::default().size(12.0).align(Align::Right);
    doc.add_styled_paragraph("______________________________", signature.clone());
    doc.add_styled_paragraph("Authorized Signatory", signature.clone());
    doc.add_styled_paragraph("Director", signature);

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentBlock, DrawOp};
    use chrono::NaiveDate;

    fn sample_params() -> CertificateParams {
        CertificateParams {
            name: "Jane Doe".into(),
            course: "Rust 101".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            cert_id: "CERT-2025-001".into(),
            issued_by: "ABC Institute of Technology".into(),
        }
    }

    #[test]
    fn narrative_paragraph_carries_all_fields() {
        let doc = build(&sample_params()).unwrap();
        let body = doc
            .blocks()
            .iter()
            .find_map(|b| match b {
                ContentBlock::Paragraph { text, .. } if text.contains("proudly presented") => {
                    Some(text.clone())
                }
                _ => None,
            })
            .expect("narrative paragraph present");

        assert!(body.contains("*Jane Doe*"));
        assert!(body.contains("*Rust 101*"));
        assert!(body.contains("2025-01-01"));
        assert!(body.contains("CERT-2025-001"));
        assert!(body.contains("ABC Institute of Technology"));
    }

    #[test]
    fn frame_paints_background_then_border_over_the_full_page() {
        let doc = build(&sample_params()).unwrap();
        let decorator = doc.decoration().expect("decoration attached");

        let (w, h) = doc.layout().page_size_pt();
        let mut canvas = PageCanvas::new(w, h);
        decorator.decorate(&mut canvas);

        match &canvas.ops()[0] {
            DrawOp::FillRect { x, y, width, height, color } => {
                assert_eq!((*x, *y), (0.0, 0.0));
                assert_eq!((*width, *height), (w, h));
                assert_eq!(*color, PALE_BLUE);
            }
            op => panic!("expected full-page fill, got {op:?}"),
        }
        match &canvas.ops()[1] {
            DrawOp::StrokeRect { x, y, width, height, color, thickness } => {
                assert_eq!((*x, *y), (20.0, 20.0));
                assert_eq!((*width, *height), (w - 40.0, h - 40.0));
                assert_eq!(*color, DARK_BLUE);
                assert_eq!(*thickness, 4.0);
            }
            op => panic!("expected border stroke, got {op:?}"),
        }
    }

    #[test]
    fn layout_is_landscape_letter() {
        let doc = build(&sample_params()).unwrap();
        assert_eq!(doc.layout().page_size, PageSize::Letter);
        assert_eq!(doc.layout().orientation, Orientation::Landscape);
    }
}
