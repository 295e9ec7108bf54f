use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::core::{DocumentResult, PageLayout};
use crate::models::{AgreementParams, Document, ListMarker, TableBlock};
use crate::templates::template_trait::DocumentTemplate;

pub struct AgreementTemplate;

impl AgreementTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AgreementTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for AgreementTemplate {
    fn generate(&self, data: &Value) -> Result<Document> {
        let params: AgreementParams = serde_json::from_value(data.clone())
            .context("invalid service agreement fields")?;
        Ok(build(&params)?)
    }

    fn template_id(&self) -> &str {
        "service_agreement"
    }

    fn filename(&self) -> &str {
        "service_agreement.pdf"
    }

    fn description(&self) -> &str {
        "Company formation service agreement"
    }
}

/// Assembles the service agreement on A4 portrait. The cost table takes
/// one body row per input row; the form usually supplies three but any
/// count is accepted.
pub fn build(params: &AgreementParams) -> DocumentResult<Document> {
    debug!(ref_no = %params.ref_no, "building service agreement");
    let mut doc = Document::new(PageLayout::default());

    doc.add_heading("SERVICE AGREEMENT", 1);
    doc.add_spacer(12.0);

    doc.add_paragraph(&format!("*Date:* {}", params.date));
    doc.add_paragraph(&format!("*Ref No:* {}", params.ref_no));
    doc.add_paragraph(&format!("*Client Name:* {}", params.client_name));
    doc.add_spacer(12.0);

    let mut company = TableBlock::new().with_column_widths(vec![200.0, 200.0]);
    company.add_row(vec!["Package type".to_string(), params.package_type.clone()]);
    company.add_row(vec![
        "Type of the Company".to_string(),
        params.company_type.clone(),
    ]);
    company.add_row(vec!["Minimum Authorized Person".to_string(), "One".to_string()]);
    company.add_row(vec!["Minimum Director".to_string(), "One".to_string()]);
    company.add_row(vec![
        "Business Activity".to_string(),
        params.business_activity.clone(),
    ]);
    doc.add_table(company);
    doc.add_spacer(12.0);

    doc.add_heading("Documents Required:", 2);
    doc.add_list(params.docs_list.clone(), ListMarker::Bullet);
    doc.add_spacer(12.0);

    doc.add_heading("Estimated Costs:", 2);
    let mut costs = TableBlock::new()
        .with_headers(vec![
            "Sr No".to_string(),
            "Service Type".to_string(),
            "Cost in BHD".to_string(),
        ])
        .with_column_widths(vec![50.0, 300.0, 100.0]);
    for row in &params.costs {
        costs.add_row(vec![row.sr_no.clone(), row.service.clone(), row.cost.clone()]);
    }
    doc.add_table(costs);
    doc.add_spacer(12.0);

    doc.add_heading("Estimation Duration:", 2);
    doc.add_paragraph(&params.duration);
    doc.add_spacer(12.0);

    doc.add_heading("Scope of Work:", 2);
    doc.add_list(params.scope.clone(), ListMarker::Dash);
    doc.add_spacer(12.0);

    doc.add_heading("Terms & Conditions:", 2);
    doc.add_list(params.terms.clone(), ListMarker::Plain);

    Ok(doc)
}
