/// Trims the input and escapes the characters with special meaning in
/// HTML (`&`, `<`, `>`, `"`, `'`) so the stored text can never be
/// interpreted as markup.
///
/// Idempotent for text that is free of the five escaped characters.
/// Already-escaped ampersands are escaped again; see the tests.
pub fn sanitize(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
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
