use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::core::{DocumentResult, PageLayout};
use crate::models::{Document, InvoiceParams, ListMarker, TableBlock};
use crate::templates::template_trait::DocumentTemplate;

/// Boilerplate printed at the bottom of every invoice.
const GENERAL_TERMS: [&str; 8] = [
    "Charges are subject to change without notice or changes in Ministry fee and for unforeseen reasons.",
    "Please be noted all charges are mentioned with discount (SME discount).",
    "Payments are nonrefundable in any circumstance, payment should be done within due dates.",
    "Any additional service/admin charges will be charged extra on next invoice.",
    "Any discrepancy in this bill should be brought to our notice immediately within 3 days of invoice.",
    "Should you have any questions or need further assistance, please do not hesitate to reach out to us.",
    "Your feedback is invaluable to us as we strive to improve our services and cater to our client's needs.",
    "Thank you for your Business.",
];

pub struct InvoiceTemplate;

impl InvoiceTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for InvoiceTemplate {
    fn generate(&self, data: &Value) -> Result<Document> {
        let params: InvoiceParams =
            serde_json::from_value(data.clone()).context("invalid invoice fields")?;
        Ok(build(&params)?)
    }

    fn template_id(&self) -> &str {
        "invoice"
    }

    fn filename(&self) -> &str {
        "invoice.pdf"
    }

    fn description(&self) -> &str {
        "Single-service invoice"
    }
}

/// Assembles the invoice on A4 portrait. The service table always has one
/// service row plus a "Total" row that echoes the single amount verbatim;
/// the form never supplies more than one line item and no arithmetic is
/// performed on display text.
pub fn build(params: &InvoiceParams) -> DocumentResult<Document> {
    debug!(invoice_no = %params.invoice_no, "building invoice");
    let mut doc = Document::new(PageLayout::default());

    doc.add_heading("Invoice", 1);
    doc.add_spacer(20.0);

    doc.add_paragraph(&format!("Invoice No: {}", params.invoice_no));
    doc.add_paragraph(&format!("Client: {}", params.client));
    doc.add_paragraph(&format!("Address: {}", params.client_address));
    doc.add_paragraph(&format!("Invoice Date: {}", params.date));
    doc.add_paragraph(&format!("Due Date: {}", params.due_date));
    doc.add_spacer(20.0);

    let mut table = TableBlock::new()
        .with_headers(vec!["Description".to_string(), "Amount (INR)".to_string()])
        .with_column_widths(vec![300.0, 150.0]);
    table.add_row(vec![params.service.clone(), params.amount.clone()]);
    table.add_row(vec!["Total".to_string(), params.amount.clone()]);
    doc.add_table(table);
    doc.add_spacer(20.0);

    if let Some(notes) = params.notes_text() {
        doc.add_paragraph(&format!("*Notes:* {notes}"));
        doc.add_spacer(20.0);
    }

    doc.add_heading("General Terms and Conditions:", 2);
    doc.add_list(
        GENERAL_TERMS.iter().map(|t| t.to_string()).collect(),
        ListMarker::Bullet,
    );

    Ok(doc)
}
