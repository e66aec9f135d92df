use html_escape::{encode_double_quoted_attribute, encode_text};

use super::render_html;
use crate::element::Element;

/// Render a complete HTML page around `body`.
///
/// `script` is inlined at the end of the body when given.
pub fn render_document(
    title: &str,
    stylesheets: &[String],
    body: &Element,
    script: Option<&str>,
) -> String {
    let mut out = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\">",
    );
    out.push_str("<title>");
    out.push_str(&encode_text(title));
    out.push_str("</title>");

    for href in stylesheets {
        out.push_str("<link rel=\"stylesheet\" href=\"");
        out.push_str(&encode_double_quoted_attribute(href));
        out.push_str("\">");
    }

    out.push_str("</head><body>");
    out.push_str(&render_html(body));

    if let Some(script) = script {
        out.push_str("<script>");
        out.push_str(script);
        out.push_str("</script>");
    }

    out.push_str("</body></html>");
    out
}
