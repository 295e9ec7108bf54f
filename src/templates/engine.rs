use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::DocumentResult;

/// Narrative body of the certificate. `\` is the Typst line-break token;
/// interpolated values are escaped later, when the document model is
/// emitted as markup.
const CERTIFICATE_BODY: &str = r"This is proudly presented to *{{ name }}* for successfully completing the course *{{ course }}*. \ \ {{ name }} has shown exceptional dedication, enthusiasm, and skill throughout the training, completing all assignments and demonstrating outstanding performance. \ \ We hereby recognize and congratulate *{{ name }}* for this achievement. \ \ Date Issued: {{ date }} | Certificate ID: {{ cert_id }} \ Issued By: {{ issued_by }}";

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("certificate_body", CERTIFICATE_BODY)
        .expect("embedded template parses");
    env
});

pub fn render<S: Serialize>(name: &str, ctx: S) -> DocumentResult<String> {
    let template = ENV.get_template(name)?;
    Ok(template.render(ctx)?)
}
