//! Shared truncate-and-append description synthesis
//!
//! One algorithm serves every description site: the heuristic extractor,
//! the fallback builder, the parser's clamp on generative output, and the
//! final-description step in the batch runner.

use klartext_domain::{ProductInfo, DESCRIPTION_LIMIT};

// A partial characteristic shorter than this carries no information
const MIN_USEFUL_TAIL: usize = 3;

/// Build a bounded-length description from a name and its characteristics
///
/// Starts with the name. When a first characteristic exists it is appended
/// in full if `name + space + characteristic` fits the limit; otherwise its
/// leading `limit - len(name) - 1` characters are appended when at least
/// [`MIN_USEFUL_TAIL`] of them remain. The result is hard-truncated to the
/// limit. All arithmetic is in characters, not bytes.
pub fn synthesize(name: &str, characteristics: &[String]) -> String {
    let mut description = name.to_string();

    if let Some(first) = characteristics.first() {
        let name_len = char_len(name);
        if name_len + 1 + char_len(first) <= DESCRIPTION_LIMIT {
            description.push(' ');
            description.push_str(first);
        } else {
            let remaining = DESCRIPTION_LIMIT.saturating_sub(name_len + 1);
            if remaining >= MIN_USEFUL_TAIL {
                description.push(' ');
                description.extend(first.chars().take(remaining));
            }
        }
    }

    truncate_chars(&description, DESCRIPTION_LIMIT)
}

/// Produce the final description for a structured record
///
/// Prefers a non-empty `short_description` that already respects the limit;
/// reconstructs from name and characteristics otherwise.
pub fn final_description(info: &ProductInfo) -> String {
    let short = &info.short_description;
    if !short.is_empty() && char_len(short) <= DESCRIPTION_LIMIT {
        return short.clone();
    }

    synthesize(&info.product_name, &info.characteristics)
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    if char_len(text) <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
