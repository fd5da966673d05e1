//! HTML escaping for text interpolated into generated markup.
//!
//! Every catalog value that reaches a renderer goes through [`escape`]; the renderers never
//! embed raw data in attributes or element bodies.

/// Escapes `&`, `<`, `>`, `"` and `'` so the result is safe in element bodies and in
/// double- or single-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(ch),
        }
    }
    output
}
