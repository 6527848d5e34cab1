//! Marks search terms inside story titles.

/// A run of title text, either matching a search term or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

/// Splits `text` into matched and unmatched segments for the search `term`.
///
/// The term is split on whitespace and every case-insensitive occurrence of any
/// token is marked, keeping the original casing of the title. Where several tokens
/// match at the same position the one listed first in the term wins. A blank term
/// yields the whole text unmatched.
pub fn highlight_segments(text: &str, term: &str) -> Vec<Segment> {
    let tokens: Vec<Vec<char>> = term
        .split_whitespace()
        .map(|token| token.chars().collect())
        .collect();

    if tokens.is_empty() {
        return plain(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut i = 0;

    while i < chars.len() {
        let hit = tokens
            .iter()
            .find(|token| matches_at(&chars[i..], token))
            .map(|token| token.len());

        match hit {
            Some(len) => {
                if !pending.is_empty() {
                    segments.push(Segment {
                        text: std::mem::take(&mut pending),
                        matched: false,
                    });
                }
                segments.push(Segment {
                    text: chars[i..i + len].iter().collect(),
                    matched: true,
                });
                i += len;
            }
            None => {
                pending.push(chars[i]);
                i += 1;
            }
        }
    }

    if !pending.is_empty() {
        segments.push(Segment {
            text: pending,
            matched: false,
        });
    }

    segments
}

fn plain(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![Segment {
        text: text.to_string(),
        matched: false,
    }]
}

fn matches_at(haystack: &[char], token: &[char]) -> bool {
    token.len() <= haystack.len()
        && haystack
            .iter()
            .zip(token)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}
