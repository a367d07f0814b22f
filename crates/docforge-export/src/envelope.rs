//! Full-page wrappers around a document fragment.
//!
//! ```text
//! fragment ──┬──► print_page     <!DOCTYPE html> + print stylesheet + buttons
//!            └──► word_document  <html xmlns:o xmlns:w> + fragment
//! ```

use crate::html::escape;

const PRINT_STYLES: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.document { max-width: 800px; margin: 0 auto; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 8px; border: 1px solid #ddd; }
th { background-color: #2563eb; color: white; }
td.amount { text-align: right; }
.total-row { font-weight: bold; }
@media print {
  body { margin: 0; }
  .no-print { display: none; }
}";

/// A standalone page the browser can print or save as PDF.
pub fn print_page(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n{styles}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"document\">{fragment}</div>\n\
         <div class=\"no-print\" style=\"text-align: center; margin-top: 20px;\">\n\
         <button onclick=\"window.print()\">Print/Save as PDF</button>\n\
         <button onclick=\"window.close()\">Close</button>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        styles = PRINT_STYLES,
        fragment = fragment,
    )
}

/// HTML a word processor opens as a document.
pub fn word_document(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word'>\n\
         <head>\n\
         <meta charset='utf-8'>\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>{fragment}</body>\n\
         </html>\n",
        title = escape(title),
        fragment = fragment,
    )
}
