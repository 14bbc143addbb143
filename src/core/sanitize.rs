// src/core/sanitize.rs

/// Characters that never make it into an image filename.
pub const FILENAME_PUNCT: &[char] = &['?', '/', '\'', '!', ',', ':', '&', '.', '"'];

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out
}

/// Filename stem for a card's artwork: punctuation becomes `_`, whitespace runs become one space.
/// The site builds the same stem when it links images, so this must not drift.
pub fn image_file_stem(card_name: &str) -> String {
    let replaced: String = card_name
        .chars()
        .map(|ch| if FILENAME_PUNCT.contains(&ch) { '_' } else { ch })
        .collect();
    normalize_ws(&replaced)
}
