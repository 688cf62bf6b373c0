use super::stopwords::is_stopword;

/// Lowercases `text`, drops everything that is not an ASCII letter or
/// whitespace, splits into words and removes English stopwords.
///
/// Symbols and digits are deleted rather than treated as separators, so
/// "C++" becomes "c", "3D" becomes "d" and "front-end" becomes "frontend".
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        let tokens = normalize("The Senior Engineer is responsible for the API");
        assert_eq!(tokens, vec!["senior", "engineer", "responsible", "api"]);
    }

    #[test]
    fn test_symbols_and_digits_are_deleted_not_split() {
        let tokens = normalize("C++ 3D front-end, REST/JSON 5+ years");
        assert_eq!(tokens, vec!["c", "frontend", "restjson", "years"]);
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(normalize("Résumé"), vec!["rsum"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  \n\t ").is_empty());
        assert!(normalize("42 !!! ...").is_empty());
    }

    #[test]
    fn test_output_has_only_letters_and_no_stopwords() {
        let text = "I've led 12 engineers @ Acme (2019-2023); we shipped it, and it's great!";
        for token in normalize(text) {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "{token}");
            assert!(!is_stopword(&token), "{token}");
        }
    }

    #[test]
    fn test_newlines_separate_words() {
        assert_eq!(normalize("rust\npython\r\ngo"), vec!["rust", "python", "go"]);
    }
}
