use super::BANKING_KEYWORDS;

/// Decides whether free text belongs to the supported domain.
pub trait DomainClassifier: Send + Sync {
    fn is_in_domain(&self, text: &str) -> bool;
}

/// Case-insensitive substring matcher over a fixed keyword set.
///
/// A question is in domain when at least one keyword occurs anywhere in its
/// lowercased text. There is no stemming or fuzzy matching: a banking question
/// that happens to avoid every keyword is classified out of domain.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    /// Blank keywords are dropped; an empty substring would match everything.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.trim().is_empty())
            .collect();
        Self { keywords }
    }

    pub fn banking() -> Self {
        Self::new(BANKING_KEYWORDS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword found in `text`, if any.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        let normalized = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| normalized.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::banking()
    }
}

impl DomainClassifier for KeywordClassifier {
    fn is_in_domain(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banking_questions_are_in_domain() {
        let classifier = KeywordClassifier::banking();
        assert!(classifier.is_in_domain("What is a loan?"));
        assert!(classifier.is_in_domain("How do I open a savings account"));
        assert!(classifier.is_in_domain("explain KYC norms"));
        assert!(classifier.is_in_domain("Is net banking safe?"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let classifier = KeywordClassifier::banking();
        assert!(classifier.is_in_domain("WHAT IS A MORTGAGE"));
        assert!(classifier.is_in_domain("Fixed Deposit rates"));
    }

    #[test]
    fn test_match_is_substring() {
        let classifier = KeywordClassifier::new(["loan"]);
        assert!(classifier.is_in_domain("any loans available?"));
        assert!(classifier.is_in_domain("xxloanxx"));
    }

    #[test]
    fn test_out_of_domain_questions() {
        let classifier = KeywordClassifier::banking();
        assert!(!classifier.is_in_domain("what's the weather today?"));
        assert!(!classifier.is_in_domain("Who won the football match?"));
        assert!(!classifier.is_in_domain("write me a poem"));
    }

    #[test]
    fn test_empty_keyword_set_is_always_false() {
        let classifier = KeywordClassifier::new(Vec::<String>::new());
        assert!(!classifier.is_in_domain("What is a loan?"));
        assert!(!classifier.is_in_domain(""));
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let classifier = KeywordClassifier::new(["", "   ", "Loan"]);
        assert_eq!(classifier.keywords(), ["loan".to_string()]);
        assert!(!classifier.is_in_domain("hello"));
    }

    #[test]
    fn test_matched_keyword() {
        let classifier = KeywordClassifier::new(["deposit", "loan"]);
        assert_eq!(classifier.matched_keyword("Home LOAN"), Some("loan"));
        assert_eq!(classifier.matched_keyword("weather"), None);
    }

    #[test]
    fn test_acronyms_match_at_end_of_question() {
        let classifier = KeywordClassifier::banking();
        assert!(classifier.is_in_domain("What is EMI?"));
        assert!(classifier.is_in_domain("what is emi"));
        assert!(classifier.is_in_domain("What is AML?"));
        assert!(classifier.is_in_domain("Explain AML."));
        assert!(classifier.is_in_domain("how is my emi calculated"));
    }

    #[test]
    fn test_acronyms_do_not_match_inside_words() {
        let classifier = KeywordClassifier::banking();
        assert!(!classifier.is_in_domain("semi finals tonight"));
        assert!(!classifier.is_in_domain("a dreamless night"));
    }

    #[test]
    fn test_every_builtin_keyword_is_in_domain() {
        let classifier = KeywordClassifier::banking();
        for keyword in BANKING_KEYWORDS {
            let text = format!("tell me about {}?", keyword.trim().to_uppercase());
            assert!(classifier.is_in_domain(&text), "{keyword} not matched");
        }
    }
}
