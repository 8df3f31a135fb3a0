//! Tokenisation shared by catalog indexing and text queries.

use std::collections::HashSet;

/// Lower-cased alphanumeric tokens of `text`.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Every token a photo can be found by: title, description and tags.
pub(crate) fn index_terms<'a>(
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
) -> HashSet<String> {
    let mut terms: HashSet<String> = tokens(title).chain(tokens(description)).collect();
    for tag in tags {
        terms.insert(tag.trim().to_lowercase());
        terms.extend(tokens(tag));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_punctuation() {
        let tokens: Vec<String> = tokens("Golden-hour, at the HARBOUR!").collect();
        assert_eq!(tokens, vec!["golden", "hour", "at", "the", "harbour"]);
    }

    #[test]
    fn test_index_terms_keep_whole_tags() {
        let terms = index_terms("Pier", "", &["long-exposure".to_string()]);
        assert!(terms.contains("pier"));
        assert!(terms.contains("long-exposure"));
        assert!(terms.contains("exposure"));
    }
}
