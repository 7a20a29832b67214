// Small grammatical words that never contribute an initial.
const CONNECTORS: [&str; 5] = ["of", "and", "the", "a", "an"];

const PLACEHOLDER: &str = "\u{2022}";

// Splits a display name into word-like tokens. Three patterns, scanned in one
// pass: an uppercase run not followed by a lowercase letter (acronym), an
// uppercase letter followed by a lowercase run (capitalized word), and a bare
// lowercase run. Everything else is a separator.
// "AIVidz" -> ["AI", "Vidz"], "One-Two" -> ["One", "Two"].
fn tokenize(name: &str) -> Vec<String> {
    let cs: Vec<char> = name.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < cs.len() {
        if cs[i].is_uppercase() {
            let mut j = i + 1;
            while j < cs.len() && cs[j].is_uppercase() {
                j += 1;
            }
            if j < cs.len() && cs[j].is_lowercase() {
                // The last uppercase letter heads the following word.
                if j - i > 1 {
                    tokens.push(cs[i..j - 1].iter().collect());
                }
                let start = j - 1;
                while j < cs.len() && cs[j].is_lowercase() {
                    j += 1;
                }
                tokens.push(cs[start..j].iter().collect());
            } else {
                tokens.push(cs[i..j].iter().collect());
            }
            i = j;
        } else if cs[i].is_lowercase() {
            let mut j = i + 1;
            while j < cs.len() && cs[j].is_lowercase() {
                j += 1;
            }
            tokens.push(cs[i..j].iter().collect());
            i = j;
        } else {
            i += 1;
        }
    }
    tokens
}

// First letter of each non-connector token, capped at three. A name whose
// tokens are all connectors still yields its first letter; a name with no
// letters at all yields a bullet.
pub fn derive_initials(name: &str) -> String {
    let mut letters: Vec<char> = Vec::new();
    for token in tokenize(name) {
        if letters.len() == 3 {
            break;
        }
        if CONNECTORS.contains(&token.to_lowercase().as_str()) {
            continue;
        }
        if let Some(c) = token.chars().next() {
            letters.push(c);
        }
    }
    if letters.is_empty() {
        return match name.chars().find(|c| c.is_alphabetic()) {
            Some(c) => c.to_string(),
            None => PLACEHOLDER.to_string(),
        };
    }
    letters.into_iter().collect()
}
