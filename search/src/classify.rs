//! Picks which grid a query is routed to, and tokenizes it accordingly.

use japanese::JapaneseExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    English,
    Kana,
    Kanji,
}

/// Classifies `query` on its first character: kana if it's kana, else
/// kanji if any character in the query is kanji, else English. An empty
/// query is classified English; its tokenizer yields no tokens either way.
pub fn classify(query: &str) -> Lane {
    match query.chars().next() {
        None => Lane::English,
        Some(first) if first.is_kana() => Lane::Kana,
        _ if query.chars().any(|c| c.is_kanji()) => Lane::Kanji,
        _ => Lane::English,
    }
}

pub fn tokenize(lane: Lane, query: &str) -> Vec<String> {
    match lane {
        Lane::English => indexes::parse_english_words(query),
        Lane::Kana => strip_and_split(query, |c| c.is_kana()),
        Lane::Kanji => strip_and_split(query, |c| c.is_kana() || c.is_kanji()),
    }
}

fn strip_and_split(query: &str, keep: impl Fn(char) -> bool) -> Vec<String> {
    let stripped: String = query.chars().filter(|&c| keep(c) || c == ' ').collect();
    stripped.split(' ').map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ねこ", Lane::Kana; "kana first char")]
    #[test_case("猫", Lane::Kanji; "kanji only")]
    #[test_case("cat", Lane::English; "english only")]
    #[test_case("", Lane::English; "empty query")]
    #[test_case("!!!", Lane::English; "punctuation only stays english")]
    fn classifies_by_first_character_then_any_kanji(query: &str, expected: Lane) {
        assert_eq!(classify(query), expected);
    }

    #[test]
    fn kana_first_with_later_kanji_still_routes_kana() {
        assert_eq!(classify("ねこ猫"), Lane::Kana);
    }

    #[test]
    fn english_tokenizer_strips_punctuation_and_lowercases() {
        assert_eq!(tokenize(Lane::English, "Cat!"), vec!["cat"]);
    }

    #[test]
    fn kana_tokenizer_keeps_only_kana_characters() {
        assert_eq!(tokenize(Lane::Kana, "ねこ123"), vec!["ねこ"]);
    }

    #[test]
    fn kanji_tokenizer_keeps_kana_and_kanji() {
        assert_eq!(tokenize(Lane::Kanji, "猫ねこ"), vec!["猫ねこ"]);
    }

    #[test]
    fn consecutive_spaces_pass_through_as_empty_segments() {
        assert_eq!(tokenize(Lane::English, "a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn all_punctuation_query_yields_no_usable_tokens() {
        let tokens = tokenize(Lane::English, "!!!");
        assert!(tokens.iter().all(|t| t.is_empty()));
    }
}
