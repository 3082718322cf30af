use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SCRIPT_RE: Regex = Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid script regex");
    static ref BREAK_RE: Regex = Regex::new(r"(?i)<br\s*/?>|</p\s*>").expect("valid break regex");
    static ref TAG_RE: Regex = Regex::new(r"(?s)<[^>]*>").expect("valid tag regex");
    static ref NUMERIC_ENTITY_RE: Regex = Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid entity regex");
    static ref SPACES_RE: Regex = Regex::new(r"[ \t\r\f]+").expect("valid spaces regex");
    static ref LINES_RE: Regex = Regex::new(r"\s*\n\s*").expect("valid lines regex");
}

// Turns a catalog description (which may carry markup) into plain text. Returns None when
// nothing readable is left.
pub fn sanitize_description(raw: &str) -> Option<String> {
    let text = SCRIPT_RE.replace_all(raw, "");
    let text = BREAK_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = SPACES_RE.replace_all(&text, " ");
    let text = LINES_RE.replace_all(text.trim(), "\n");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn decode_entities(text: &str) -> String {
    let numeric = NUMERIC_ENTITY_RE.replace_all(text, |caps: &regex::Captures| {
        let code = &caps[1];
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        parsed.and_then(char::from_u32).map(String::from).unwrap_or_default()
    });
    // &amp; last so "&amp;lt;" stays literal "&lt;"
    numeric
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
