//! Whole-token profanity masking for post content

use std::collections::HashSet;

/// Replacement for a masked token
pub const MASK: &str = "***";

/// Mask deny-listed words in a post's content.
///
/// Splits on whitespace and replaces every token whose lowercase form
/// exactly matches a deny-list entry, then rejoins with single spaces.
/// Punctuation attached to a word defeats the match and runs of whitespace
/// collapse; both are inherited contract behavior, kept for compatibility.
pub fn mask_content(content: &str, bad_words: &HashSet<String>) -> String {
    content
        .split_whitespace()
        .map(|token| {
            if bad_words.contains(&token.to_lowercase()) {
                MASK
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

    fn deny_list(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_masks_exact_token() {
        let words = deny_list(&["bad"]);
        assert_eq!(mask_content("this is bad news", &words), "this is *** news");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let words = deny_list(&["bad"]);
        assert_eq!(mask_content("BAD Bad bAd", &words), "*** *** ***");
    }

    #[test]
    fn test_punctuation_defeats_the_match() {
        let words = deny_list(&["bad"]);
        assert_eq!(mask_content("that was bad.", &words), "that was bad.");
    }

    #[test]
    fn test_no_partial_matches() {
        let words = deny_list(&["bad"]);
        assert_eq!(mask_content("badly done", &words), "badly done");
    }

    #[test]
    fn test_whitespace_collapses() {
        let words = deny_list(&["bad"]);
        assert_eq!(mask_content("so  bad\tindeed", &words), "so *** indeed");
    }

    #[test]
    fn test_empty_deny_list_leaves_content_alone() {
        let words = HashSet::new();
        assert_eq!(mask_content("anything goes", &words), "anything goes");
    }
}
