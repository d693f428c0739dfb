/// Default excerpt length in bytes.
pub const DEFAULT_SNIPPET_LEN: usize = 200;

/// Context kept before the first matching word.
const CONTEXT_BEFORE: usize = 50;

/// Extract an excerpt of `content` around the earliest case-insensitive
/// occurrence of any whitespace-delimited word of `query`.
///
/// When no query word occurs in the content the window is taken from the
/// tail of the document instead, so the caller always gets a plausible
/// preview. An `...` marks each side of the window that was cut.
pub fn make_snippet(content: &str, query: &str, max_length: usize) -> String {
    let content_lower = content.to_lowercase();
    let query_lower = query.to_lowercase();

    let mut best_pos = content.len();
    for word in query_lower.split_whitespace() {
        if let Some(pos) = content_lower.find(word) {
            if pos < best_pos {
                best_pos = pos;
            }
        }
    }

    let start = floor_char_boundary(content, best_pos.saturating_sub(CONTEXT_BEFORE));
    let end = floor_char_boundary(content, (start + max_length).min(content.len()));

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&content[start..end]);
    if end < content.len() {
        snippet.push_str("...");
    }
    snippet
}

// Offsets are found in the lowercased text, which for some scripts differs
// in byte length from the original, so every cut is clamped to a valid
// char boundary of the original content.
fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
