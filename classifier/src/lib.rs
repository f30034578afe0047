mod email;
mod error;

pub use email::EmailText;
pub use error::ClassifyError;
pub use phishguard_types::Label;

/// Substrings whose presence marks an email as phishing.
pub const DEFAULT_KEYWORDS: [&str; 2] = ["bank", "account"];

/// Assigns a label to a single piece of email text.
pub trait EmailClassifier {
    fn classify(&self, text: &EmailText) -> Label;
}

/// Flags text containing any keyword, ignoring case.
///
/// Matching is plain substring containment: "embankment" matches "bank".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl EmailClassifier for KeywordClassifier {
    fn classify(&self, text: &EmailText) -> Label {
        let text = text.as_str().to_lowercase();
        if self.keywords.iter().any(|k| text.contains(k.as_str())) {
            Label::Phishing
        } else {
            Label::Legitimate
        }
    }
}

/// Classifies `text` with the default keyword list.
pub fn classify(text: &str) -> Label {
    KeywordClassifier::default().classify(&EmailText::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(classify("Please verify your bank details"), Label::Phishing);
        assert_eq!(classify("my savings account is secure"), Label::Phishing);
        assert_eq!(classify("hello world"), Label::Legitimate);
    }

    #[test]
    fn test_classify_empty_string() {
        assert_eq!(classify(""), Label::Legitimate);
    }

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(classify("BANK"), Label::Phishing);
        assert_eq!(classify("Your AcCoUnT has been suspended"), Label::Phishing);
    }

    #[test]
    fn test_classify_matches_inside_words() {
        assert_eq!(classify("embankment"), Label::Phishing);
        assert_eq!(classify("backbank of rivers"), Label::Phishing);
        assert_eq!(classify("accountant meeting at noon"), Label::Phishing);
    }

    #[test]
    fn test_classify_near_misses() {
        assert_eq!(classify("ban k"), Label::Legitimate);
        assert_eq!(classify("acount"), Label::Legitimate);
        assert_eq!(classify("Lunch on Friday?"), Label::Legitimate);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let text = "Update your Bank login now";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }

    #[test]
    fn test_custom_keywords_are_lowercased() {
        let classifier = KeywordClassifier::new(["Lottery", "WIRE"]);
        assert_eq!(classifier.keywords(), ["lottery", "wire"]);
        assert_eq!(
            classifier.classify(&EmailText::from("you won the LOTTERY")),
            Label::Phishing
        );
        assert_eq!(
            classifier.classify(&EmailText::from("bank holiday")),
            Label::Legitimate
        );
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(classify("Überprüfen Sie Ihr BANKkonto"), Label::Phishing);
        assert_eq!(classify("こんにちは"), Label::Legitimate);
    }
}
