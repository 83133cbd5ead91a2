//! Rich-text values for item display names.
//!
//! Display names are kept as ordered spans of uniformly-styled text rather
//! than raw strings, so prefix concatenation preserves per-span formatting
//! and the name-revert round trip can serialize the exact pre-modification
//! value. Lore lines stay plain strings carrying `§` format codes, the form
//! the host renders directly; [`format_markup`] normalizes user-written
//! `&` codes into that form.

use serde::{Deserialize, Serialize};

/// Escape character rendered by the host.
pub const SECTION: char = '§';

/// Escape character accepted in configuration and catalog files.
const AMPERSAND: char = '&';

/// The sixteen legacy text colors, keyed by their one-character codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl TextColor {
    /// Resolve a one-character color code (`0`-`9`, `a`-`f`).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '0' => Some(TextColor::Black),
            '1' => Some(TextColor::DarkBlue),
            '2' => Some(TextColor::DarkGreen),
            '3' => Some(TextColor::DarkAqua),
            '4' => Some(TextColor::DarkRed),
            '5' => Some(TextColor::DarkPurple),
            '6' => Some(TextColor::Gold),
            '7' => Some(TextColor::Gray),
            '8' => Some(TextColor::DarkGray),
            '9' => Some(TextColor::Blue),
            'a' => Some(TextColor::Green),
            'b' => Some(TextColor::Aqua),
            'c' => Some(TextColor::Red),
            'd' => Some(TextColor::LightPurple),
            'e' => Some(TextColor::Yellow),
            'f' => Some(TextColor::White),
            _ => None,
        }
    }

    /// The one-character code for this color.
    pub fn code(&self) -> char {
        match self {
            TextColor::Black => '0',
            TextColor::DarkBlue => '1',
            TextColor::DarkGreen => '2',
            TextColor::DarkAqua => '3',
            TextColor::DarkRed => '4',
            TextColor::DarkPurple => '5',
            TextColor::Gold => '6',
            TextColor::Gray => '7',
            TextColor::DarkGray => '8',
            TextColor::Blue => '9',
            TextColor::Green => 'a',
            TextColor::Aqua => 'b',
            TextColor::Red => 'c',
            TextColor::LightPurple => 'd',
            TextColor::Yellow => 'e',
            TextColor::White => 'f',
        }
    }
}

/// A run of uniformly-styled text inside a [`Text`] value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub color: Option<TextColor>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub obfuscated: bool,
}

impl Span {
    fn has_styles(&self) -> bool {
        self.bold || self.italic || self.underlined || self.strikethrough || self.obfuscated
    }

    fn set_style(&mut self, code: char) {
        match code {
            'l' => self.bold = true,
            'o' => self.italic = true,
            'n' => self.underlined = true,
            'm' => self.strikethrough = true,
            'k' => self.obfuscated = true,
            _ => {}
        }
    }
}

/// A rich-text value: an ordered list of styled spans.
///
/// Empty spans are never stored, so two values that render identically
/// compare equal, which the revert round trip relies on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    spans: Vec<Span>,
}

/// Errors produced while decoding serialized text values.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("malformed text JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Text {
    /// An unstyled value holding the given text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![Span {
                text,
                ..Span::default()
            }],
        }
    }

    /// Parse a markup string carrying `&` or `§` format codes.
    ///
    /// Color codes reset any active styles; `r` resets everything. An
    /// escape character not followed by a valid code is kept literally.
    pub fn from_markup(input: &str) -> Self {
        let mut spans = Vec::new();
        let mut current = Span::default();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c == SECTION || c == AMPERSAND {
                let code = chars.peek().copied().map(|c| c.to_ascii_lowercase());
                match code {
                    Some(code) if TextColor::from_code(code).is_some() => {
                        chars.next();
                        flush(&mut spans, &mut current);
                        current = Span {
                            color: TextColor::from_code(code),
                            ..Span::default()
                        };
                        continue;
                    }
                    Some(code @ ('l' | 'o' | 'n' | 'm' | 'k')) => {
                        chars.next();
                        flush(&mut spans, &mut current);
                        current.set_style(code);
                        continue;
                    }
                    Some('r') => {
                        chars.next();
                        flush(&mut spans, &mut current);
                        current = Span::default();
                        continue;
                    }
                    _ => {}
                }
            }
            current.text.push(c);
        }

        flush(&mut spans, &mut current);
        Self { spans }
    }

    /// Render the canonical `§`-coded form of this value.
    ///
    /// Each colored span re-emits its color code; an unstyled span that
    /// follows a styled one emits a reset so styles never bleed across
    /// span boundaries.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let mut styled = false;

        for span in &self.spans {
            if span.text.is_empty() {
                continue;
            }
            if let Some(color) = span.color {
                out.push(SECTION);
                out.push(color.code());
            } else if styled {
                out.push(SECTION);
                out.push('r');
            }
            for (active, code) in [
                (span.bold, 'l'),
                (span.italic, 'o'),
                (span.underlined, 'n'),
                (span.strikethrough, 'm'),
                (span.obfuscated, 'k'),
            ] {
                if active {
                    out.push(SECTION);
                    out.push(code);
                }
            }
            styled = span.color.is_some() || span.has_styles();
            out.push_str(&span.text);
        }

        out
    }

    /// The style-free projection of this value.
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Component-level concatenation: `self` followed by `other`, with
    /// each side keeping its own span styling.
    pub fn concat(&self, other: &Text) -> Text {
        let mut spans = self.spans.clone();
        spans.extend(other.spans.iter().cloned());
        Text { spans }
    }

    /// Serialize for transport through a string attribute.
    pub fn to_json(&self) -> String {
        // Spans hold only strings, flags and unit-variant colors, so
        // serialization cannot fail.
        serde_json::to_string(self).expect("text serialization is infallible")
    }

    /// Decode a value previously produced by [`Text::to_json`].
    pub fn from_json(input: &str) -> Result<Self, TextError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

fn flush(spans: &mut Vec<Span>, current: &mut Span) {
    if !current.text.is_empty() {
        let carried = Span {
            text: String::new(),
            ..current.clone()
        };
        spans.push(std::mem::replace(current, carried));
    }
}

/// Normalize `&` format codes in a lore line to the `§` form the host
/// renders. Characters that do not introduce a valid code pass through.
pub fn format_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == AMPERSAND {
            if let Some(&next) = chars.peek() {
                if is_format_code(next) {
                    out.push(SECTION);
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

fn is_format_code(code: char) -> bool {
    let code = code.to_ascii_lowercase();
    TextColor::from_code(code).is_some() || matches!(code, 'l' | 'o' | 'n' | 'm' | 'k' | 'r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colors_and_styles_into_spans() {
        let text = Text::from_markup("&6Cloudy &lSword");

        assert_eq!(text.spans().len(), 2);
        assert_eq!(text.spans()[0].text, "Cloudy ");
        assert_eq!(text.spans()[0].color, Some(TextColor::Gold));
        assert!(!text.spans()[0].bold);
        assert_eq!(text.spans()[1].text, "Sword");
        assert_eq!(text.spans()[1].color, Some(TextColor::Gold));
        assert!(text.spans()[1].bold);
    }

    #[test]
    fn color_code_resets_styles() {
        let text = Text::from_markup("&l&6Sword");

        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].color, Some(TextColor::Gold));
        assert!(!text.spans()[0].bold);
    }

    #[test]
    fn reset_code_clears_color_and_styles() {
        let text = Text::from_markup("&c&lHot&r cold");

        assert_eq!(text.spans().len(), 2);
        assert!(text.spans()[0].bold);
        assert_eq!(text.spans()[1].color, None);
        assert!(!text.spans()[1].has_styles());
    }

    #[test]
    fn stray_escape_is_kept_literally() {
        let text = Text::from_markup("5 & 6");
        assert_eq!(text.to_plain(), "5 & 6");
    }

    #[test]
    fn empty_values_compare_equal() {
        assert!(Text::plain("").is_empty());
        assert_eq!(Text::plain(""), Text::default());
        assert_eq!(Text::from_markup(""), Text::default());
    }

    #[test]
    fn to_markup_is_canonical() {
        let text = Text::from_markup("&6Cloudy &lSword");
        assert_eq!(text.to_markup(), "§6Cloudy §6§lSword");

        // Re-parsing the canonical form yields the same value.
        assert_eq!(Text::from_markup(&text.to_markup()), text);
    }

    #[test]
    fn unstyled_span_after_styled_one_emits_reset() {
        let styled = Text::from_markup("&cHot");
        let joined = styled.concat(&Text::plain(" cold"));

        assert_eq!(joined.to_markup(), "§cHot§r cold");
    }

    #[test]
    fn plain_projection_strips_codes() {
        let text = Text::from_markup("&8[&6Legendary&8] &fSword");
        assert_eq!(text.to_plain(), "[Legendary] Sword");
    }

    #[test]
    fn concat_preserves_both_sides() {
        let prefix = Text::from_markup("&6Legendary ");
        let name = Text::from_markup("&fCloudy Sword");
        let joined = prefix.concat(&name);

        assert_eq!(joined.to_plain(), "Legendary Cloudy Sword");
        assert_eq!(joined.spans()[0].color, Some(TextColor::Gold));
        assert_eq!(joined.spans()[1].color, Some(TextColor::White));
    }

    #[test]
    fn json_round_trip_is_exact() {
        let text = Text::from_markup("&6&lCloudy &r&nSword");
        let decoded = Text::from_json(&text.to_json()).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Text::from_json("not json").is_err());
    }

    #[test]
    fn format_markup_translates_codes_only() {
        assert_eq!(format_markup("&8⚒ Reforgable"), "§8⚒ Reforgable");
        assert_eq!(format_markup("tom & jerry"), "tom & jerry");
        assert_eq!(format_markup("&x stays"), "&x stays");
    }
}
