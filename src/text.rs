//! Text Helpers

use std::borrow::Cow;

/// Default preview length, in characters.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, appending `...` when anything was cut.
///
/// Characters are Unicode scalar values, so multi-byte text is never split mid-character.
pub fn truncate_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let (kept, _) = text.split_at(cut);
            let mut out = String::with_capacity(cut + ELLIPSIS.len());

            out.push_str(kept);
            out.push_str(ELLIPSIS);

            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_borrowed_unchanged() {
        let text = "Happy Hour";

        assert!(matches!(truncate_text(text, 10), Cow::Borrowed("Happy Hour")));
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_text("Weekend Special", 7), "Weekend...");
    }

    #[test]
    fn cut_respects_multibyte_characters() {
        assert_eq!(truncate_text("🎉 NEW ON THE MENU", 3), "🎉 N...");
        assert_eq!(truncate_text("小红书小红书", 3), "小红书...");
    }

    #[test]
    fn zero_length_keeps_only_ellipsis() {
        assert_eq!(truncate_text("abc", 0), "...");
        assert_eq!(truncate_text("", 0), "");
    }
}
