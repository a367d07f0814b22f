//! HTML escaping and the small builders the document templates share.

/// Escapes text for use in element content and quoted attribute values.
///
/// ```rust
/// use docforge_export::html::escape;
///
/// assert_eq!(escape("Tom & Jerry <Ltd>"), "Tom &amp; Jerry &lt;Ltd&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes multi-line text (addresses, notes) and keeps its line breaks.
pub fn escape_multiline(text: &str) -> String {
    text.lines().map(escape).collect::<Vec<_>>().join("<br>")
}

/// A two-column table body row.
pub(crate) fn label_row(label: &str, value: &str) -> String {
    format!(
        "<tr><td class=\"label\">{}</td><td class=\"amount\">{}</td></tr>",
        escape(label),
        escape(value)
    )
}

/// `<p><strong>Label:</strong> value</p>`, or nothing when the value is blank.
pub(crate) fn optional_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        out.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>",
            escape(label),
            escape(value)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(
            escape_multiline("12 Main St\nSpringfield & Co"),
            "12 Main St<br>Springfield &amp; Co"
        );
    }

    #[test]
    fn test_label_row() {
        assert_eq!(
            label_row("HRA", "₹8,000.00"),
            "<tr><td class=\"label\">HRA</td><td class=\"amount\">₹8,000.00</td></tr>"
        );
    }

    #[test]
    fn test_optional_field() {
        let mut out = String::new();
        optional_field(&mut out, "Phone", Some("  "));
        optional_field(&mut out, "Phone", None);
        assert!(out.is_empty());

        optional_field(&mut out, "Email", Some("a@b.c"));
        assert_eq!(out, "<p><strong>Email:</strong> a@b.c</p>");
    }
}
