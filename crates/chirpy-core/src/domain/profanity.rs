//! 비속어 필터.
//!
//! 공백 한 칸으로 나눈 토큰을 소문자로 바꿔 금지어와 정확히 일치할 때만 `****`로 바꿉니다.
//! 토큰에 붙은 문장 부호는 그대로 남으므로 `"Sharbert!"`는 마스킹되지 않습니다.

/// 금지어 목록 (적용 순서대로).
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// 마스킹 문자열.
pub const PROFANE_MASK: &str = "****";

/// 본문에서 금지어를 마스킹합니다.
///
/// 금지어마다 본문 전체를 한 번씩 통과시킵니다.
pub fn clean_profanity(text: &str) -> String {
    PROFANE_WORDS
        .iter()
        .fold(text.to_string(), |acc, word| mask_word(&acc, word))
}

fn mask_word(text: &str, word: &str) -> String {
    text.split(' ')
        .map(|token| {
            if token.to_lowercase() == word {
                PROFANE_MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_masks_whole_tokens_ignoring_case() {
        assert_eq!(
            clean_profanity("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
        assert_eq!(
            clean_profanity("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
        assert_eq!(clean_profanity("FORNAX Kerfuffle SharBert"), "**** **** ****");
    }

    #[test]
    fn test_attached_punctuation_prevents_masking() {
        assert_eq!(
            clean_profanity("What a kerfuffle, sharbert!"),
            "What a kerfuffle, sharbert!"
        );
        assert_eq!(
            clean_profanity("What a kerfuffle sharbert!"),
            "What a **** sharbert!"
        );
    }

    #[test]
    fn test_preserves_spacing() {
        assert_eq!(clean_profanity("  fornax  "), "  ****  ");
        assert_eq!(clean_profanity(""), "");
    }

    proptest! {
        #[test]
        fn prop_clean_text_is_unchanged(words in proptest::collection::vec("[a-j]{1,8}", 0..20)) {
            // a-j 문자만으로는 금지어를 만들 수 없음
            let text = words.join(" ");
            prop_assert_eq!(clean_profanity(&text), text);
        }

        #[test]
        fn prop_reserved_word_masked_in_any_case(
            prefix in "[a-j ]{0,20}",
            idx in 0usize..3,
            upper in proptest::collection::vec(any::<bool>(), 9),
        ) {
            let word: String = PROFANE_WORDS[idx]
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let text = format!("{} {}", prefix, word);
            let cleaned = clean_profanity(&text);
            prop_assert!(cleaned.ends_with(" ****"));
            prop_assert_eq!(cleaned.split(' ').count(), text.split(' ').count());
        }

        #[test]
        fn prop_punctuation_blocks_masking(idx in 0usize..3, punct in "[!?.,;:]") {
            let text = format!("{}{}", PROFANE_WORDS[idx], punct);
            prop_assert_eq!(clean_profanity(&text), text);
        }
    }
}
