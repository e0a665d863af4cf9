//! String-level cleaning functions used by the pipeline stages.
//!
//! Every function here is pure: it takes the current address text and
//! returns the rewritten text.

use addr_model::Components;

/// Characters replaced by a single space before case folding.
pub const UNWANTED_CHARACTERS: [char; 6] = [',', '.', '?', '!', '(', ')'];

/// Characters trimmed from both ends of the cleaned address.
pub const STRIP_CHARACTERS: [char; 6] = [' ', ',', '.', '\'', '?', '!'];

/// Accented lowercase vowels and their plain replacements.
///
/// Other diacritics (`ç`, `ñ`, ...) are left as they are.
pub const ACCENT_TABLE: [(char, char); 15] = [
    ('é', 'e'),
    ('ë', 'e'),
    ('ê', 'e'),
    ('è', 'e'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('à', 'a'),
    ('â', 'a'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('ò', 'o'),
];

/// Remove every literal occurrence of each value, in list order.
///
/// Nothing is inserted at the removal site, so the surrounding fragments
/// may end up fused into one token.
pub fn remove_literals(text: &str, literals: &[String]) -> String {
    let mut result = text.to_string();
    for literal in literals {
        if literal.is_empty() || !result.contains(literal.as_str()) {
            continue;
        }
        result = result.replace(literal.as_str(), "");
    }
    result
}

/// Replace each unwanted punctuation character with a space.
pub fn replace_unwanted_characters(text: &str) -> String {
    text.replace(|ch: char| UNWANTED_CHARACTERS.contains(&ch), " ")
}

pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn strip_accents(text: &str) -> String {
    text.chars().map(unaccent).collect()
}

fn unaccent(ch: char) -> char {
    ACCENT_TABLE
        .iter()
        .find(|(accented, _)| *accented == ch)
        .map_or(ch, |&(_, plain)| plain)
}

/// Trim strip characters from both ends, then collapse runs of spaces.
pub fn strip_and_collapse(text: &str) -> String {
    let mut result = text
        .trim_matches(|ch: char| STRIP_CHARACTERS.contains(&ch))
        .to_string();
    while result.contains("  ") {
        result = result.replace("  ", " ");
    }
    result
}

/// Split a cleaned address on single spaces into capped components.
///
/// Returns the components and the number of tokens dropped past the cap.
pub fn tokenize(address: &str) -> (Components, usize) {
    let tokens: Vec<&str> = address.split(' ').filter(|token| !token.is_empty()).collect();
    let components = Components::from_tokens(tokens.iter().copied());
    let dropped = tokens.len() - components.len();
    (components, dropped)
}

/// Cleaning stages 3 to 7 applied to a single string.
pub fn clean_address(text: &str, city_names: &[String]) -> String {
    let text = replace_unwanted_characters(text);
    let text = fold_case(&text);
    let text = strip_accents(&text);
    let text = remove_literals(&text, city_names);
    strip_and_collapse(&text)
}
