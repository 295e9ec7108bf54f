//! Integration tests for the template-to-PDF pipeline.

use std::sync::Arc;

use docsmith::templates::templates::{agreement, certificate, invoice};
use docsmith::{
    AgreementParams, CertificateParams, ContentBlock, InvoiceParams, PdfGenerator,
    TemplateRegistry, TypstBuilder,
};
use serde_json::json;

fn agreement_params() -> AgreementParams {
    serde_json::from_value(agreement_json()).unwrap()
}

fn agreement_json() -> serde_json::Value {
    json!({
        "date": "2025-01-01",
        "ref_no": "BKR-1",
        "client_name": "Acme",
        "package_type": "Start-up",
        "company_type": "W.L.L",
        "business_activity": "Trading",
        "docs_list": ["Passport"],
        "costs": [{"sr_no": "1", "service": "Setup", "cost": "100"}],
        "duration": "2 weeks",
        "scope": ["Filing"],
        "terms": ["Confidentiality"]
    })
}

fn certificate_params() -> CertificateParams {
    serde_json::from_value(json!({
        "name": "Jane Doe",
        "course": "Rust 101",
        "date": "2025-01-01",
        "cert_id": "CERT-2025-001",
        "issued_by": "ABC Institute of Technology"
    }))
    .unwrap()
}

fn invoice_params() -> InvoiceParams {
    serde_json::from_value(json!({
        "client": "Acme",
        "client_address": "1 Main St",
        "service": "Company Incorporation",
        "amount": "500",
        "invoice_no": "INV-2025-001",
        "date": "2025-01-01",
        "due_date": "2025-01-15",
        "notes": "Pay by bank transfer"
    }))
    .unwrap()
}

#[test]
fn agreement_scenario_counts_rows_and_list_entries() {
    let doc = agreement::build(&agreement_params()).unwrap();

    let tables: Vec<_> = doc
        .blocks()
        .iter()
        .filter_map(|b| match b {
            ContentBlock::Table(t) => Some(t),
            _ => None,
        })
        .collect();

    // Cost table: header plus one body row.
    let costs = tables[1];
    assert!(costs.headers.is_some());
    assert_eq!(costs.rows.len(), 1);
    assert_eq!(costs.rows[0], vec!["1", "Setup", "100"]);

    let docs_list = doc
        .blocks()
        .iter()
        .find_map(|b| match b {
            ContentBlock::List { items, .. } => Some(items),
            _ => None,
        })
        .unwrap();
    assert_eq!(docs_list, &vec!["Passport".to_string()]);
}

#[test]
fn identical_bundles_emit_identical_markup() {
    let a = TypstBuilder::emit(&agreement::build(&agreement_params()).unwrap());
    let b = TypstBuilder::emit(&agreement::build(&agreement_params()).unwrap());
    assert_eq!(a, b);

    let a = TypstBuilder::emit(&certificate::build(&certificate_params()).unwrap());
    let b = TypstBuilder::emit(&certificate::build(&certificate_params()).unwrap());
    assert_eq!(a, b);

    let a = TypstBuilder::emit(&invoice::build(&invoice_params()).unwrap());
    let b = TypstBuilder::emit(&invoice::build(&invoice_params()).unwrap());
    assert_eq!(a, b);
}

#[test]
fn certificate_markup_installs_the_decoration_as_page_background() {
    let doc = certificate::build(&certificate_params()).unwrap();
    let source = TypstBuilder::emit(&doc);

    // The decoration rides on the page set rule, so Typst applies it to
    // every page of the output, overflow pages included.
    let page_rule_end = source.find("#set text").unwrap();
    let page_rule = &source[..page_rule_end];
    assert!(page_rule.contains("background:"));
    assert!(page_rule.contains("fill: rgb(242, 242, 255)"));
    assert!(page_rule.contains("stroke: 4pt + rgb(0, 0, 139)"));
    assert!(page_rule.contains("flipped: true"));
}

#[test]
fn plain_documents_have_no_background_rule() {
    let doc = invoice::build(&invoice_params()).unwrap();
    let source = TypstBuilder::emit(&doc);
    assert!(!source.contains("background:"));
}

#[test]
fn registry_builds_documents_from_form_json() {
    let registry = TemplateRegistry::new();

    let template = registry.get("service_agreement").unwrap();
    let doc = template.generate(&agreement_json()).unwrap();
    assert!(!doc.blocks().is_empty());

    let err = template.generate(&json!({"date": "2025-01-01"})).unwrap_err();
    assert!(err.to_string().contains("invalid service agreement fields"));
}

fn typst_available() -> bool {
    std::process::Command::new("typst")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn generated_files_are_pdfs_when_typst_is_installed() {
    if !typst_available() {
        eprintln!("typst binary not found, skipping compile test");
        return;
    }

    let temp_dir = tempfile::tempdir().unwrap();
    let generator = PdfGenerator::new(Arc::new(TemplateRegistry::new()))
        .with_temp_dir(temp_dir.path());

    for (id, data) in [
        ("service_agreement", agreement_json()),
        (
            "certificate",
            serde_json::to_value(certificate_params()).unwrap(),
        ),
        ("invoice", serde_json::to_value(invoice_params()).unwrap()),
    ] {
        let bytes = generator.generate(id, data).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "{id} did not produce a PDF");
    }
}
