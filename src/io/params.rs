//! Request parameters taken from a URL query string
//!
//! Missing, empty or unparseable values fall back to defaults instead of
//! failing, so any request renders something.

use tracing::warn;

use crate::io::configuration::{DEFAULT_AUTHOR, DEFAULT_SEED, DEFAULT_SUBTITLE, DEFAULT_TITLE};

/// Seed and overlay text for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Generation seed
    pub seed: i64,
    /// Headline text
    pub title: String,
    /// Text below the headline
    pub subtitle: String,
    /// Author name shown next to the badge
    pub author: String,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl RequestParams {
    /// Parse a full URL or a bare query string
    ///
    /// Everything before the first `?` is ignored when one is present, as is a
    /// `#fragment`. Repeated keys keep their first value.
    pub fn from_query(input: &str) -> Self {
        let query = input.split_once('?').map_or(input, |(_, query)| query);
        let query = query.split_once('#').map_or(query, |(query, _)| query);

        let mut seed = None;
        let mut title = None;
        let mut subtitle = None;
        let mut author = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode_component(raw_key).as_str() {
                "seed" => &mut seed,
                "title" => &mut title,
                "subtitle" => &mut subtitle,
                "author" => &mut author,
                _ => continue,
            };
            slot.get_or_insert_with(|| decode_component(raw_value));
        }

        let defaults = Self::default();
        Self {
            seed: seed.as_deref().map_or(defaults.seed, parse_seed),
            title: non_empty(title).unwrap_or(defaults.title),
            subtitle: non_empty(subtitle).unwrap_or(defaults.subtitle),
            author: non_empty(author).unwrap_or(defaults.author),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Interpret seed text, defaulting when it is not an integer
///
/// Surrounding whitespace is ignored. Floating point text is accepted when it
/// names a whole number in range, so `"42.0"` and `"1e3"` are seeds 42 and 1000.
pub fn parse_seed(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return DEFAULT_SEED;
    }
    if let Ok(seed) = text.parse::<i64>() {
        return seed;
    }

    match text.parse::<f64>() {
        Ok(value)
            if value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&value) =>
        {
            value as i64
        }
        _ => {
            warn!(seed = text, "Seed is not an integer, using default");
            DEFAULT_SEED
        }
    }
}

/// Decode `+` as space and `%XX` escapes, replacing invalid UTF-8
///
/// Malformed escapes are kept literally.
pub fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            b'%' => {
                let escape = bytes
                    .get(index + 1)
                    .and_then(|&high| hex_value(high))
                    .zip(bytes.get(index + 2).and_then(|&low| hex_value(low)));
                if let Some((high, low)) = escape {
                    decoded.push((high << 4) | low);
                    index += 3;
                } else {
                    decoded.push(b'%');
                    index += 1;
                }
            }
            _ => {
                decoded.push(byte);
                index += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
