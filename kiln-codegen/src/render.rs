//! Placeholder substitution over template bodies.

use kiln_core::{Error, ModuleForms, Result};

/// Render a template body by substituting `{{field}}` placeholders from the
/// naming forms.
///
/// Single braces pass through untouched, so axum route patterns like `{id}`
/// survive rendering. An unclosed `{{` or a field the forms record does not
/// define is a hard error; nothing is written on failure.
pub fn render(template: &str, body: &str, forms: &ModuleForms) -> Result<String> {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(Error::MalformedTemplate {
                template: template.to_string(),
                reason: "unclosed '{{' placeholder".to_string(),
            });
        };
        let field = after[..end].trim();
        match forms.field(field) {
            Some(value) => out.push_str(value),
            None => {
                return Err(Error::UnknownField {
                    template: template.to_string(),
                    field: field.to_string(),
                });
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
