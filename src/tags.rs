use crate::normalize::normalize;
use crate::note::Note;

/// Split raw tag input into `#`-prefixed tokens. Input is normalized first
/// so `＃仕事` counts; tokens without the prefix are dropped and duplicates
/// are kept in the order typed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize(raw)
        .split_whitespace()
        .filter(|t| t.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Parse several tag inputs (one per `-t` flag) into one list.
pub fn parse_tag_inputs(inputs: &[String]) -> Vec<String> {
    inputs.iter().flat_map(|raw| parse_tags(raw)).collect()
}

/// Check if a note carries every required tag
pub fn note_has_tags(note: &Note, tags: &[String]) -> bool {
    tags.iter().all(|t| note.tags.contains(t))
}

/// Hash a tag for deterministic color selection
pub fn hash_tag(tag: &str) -> u64 {
    let mut h: u64 = 5381;
    for b in tag.bytes() {
        h = (h.wrapping_shl(5)).wrapping_add(h) ^ u64::from(b);
    }
    h
}

pub fn color_for_tag(tag: &str) -> (u8, u8, u8) {
    const PALETTE: &[(u8, u8, u8)] = &[
        (137, 180, 250),
        (166, 227, 161),
        (249, 226, 175),
        (245, 194, 231),
        (255, 169, 167),
        (148, 226, 213),
        (198, 160, 246),
        (240, 198, 198),
        (181, 232, 224),
        (183, 189, 248),
        (255, 214, 165),
        (196, 181, 255),
    ];
    PALETTE[(hash_tag(tag) as usize) % PALETTE.len()]
}
