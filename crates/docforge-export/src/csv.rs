//! CSV text assembly.
//!
//! Fields containing a comma, quote or line break are wrapped in quotes with
//! inner quotes doubled. Rows end with `\n`; an empty row is a blank line.

/// Rows of a CSV export, in order.
pub type CsvRows = Vec<Vec<String>>;

/// Quotes a field when it needs it.
///
/// ```rust
/// use docforge_export::csv::quote_field;
///
/// assert_eq!(quote_field("Widget"), "Widget");
/// assert_eq!(quote_field("Bolts, M6"), "\"Bolts, M6\"");
/// assert_eq!(quote_field("6\" pipe"), "\"6\"\" pipe\"");
/// ```
pub fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Joins rows into CSV text.
pub fn encode(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Builds a row from anything string-like.
pub(crate) fn row<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields.into_iter().map(Into::into).collect()
}
