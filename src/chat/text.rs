//! Lower-cased, tokenized view of a chat message.

/// Message prepared once for every keyword test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    lower: String,
    tokens: Vec<String>,
    /// Space-joined tokens padded with one space at each end
    padded: String,
    word_count: usize,
}

impl Message {
    pub fn new(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        let tokens: Vec<String> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        let padded = format!(" {} ", tokens.join(" "));

        Self {
            word_count: raw.split_whitespace().count(),
            lower,
            tokens,
            padded,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whitespace-separated words in the raw message
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Raw substring test on the lower-cased message.
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Exact token, or exact phrase for multi-word entries.
    pub fn has_word(&self, word: &str) -> bool {
        if word.contains(' ') {
            self.padded.contains(&format!(" {word} "))
        } else {
            self.tokens.iter().any(|token| token == word)
        }
    }

    /// Token prefix match (`water` matches `watering`). Multi-word keywords
    /// match as a phrase whose final word may be a prefix.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        if keyword.contains(' ') {
            self.padded.contains(&format!(" {keyword}"))
        } else {
            self.tokens.iter().any(|token| token.starts_with(keyword))
        }
    }

    pub fn has_any_word(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.has_word(word))
    }

    pub fn has_any_keyword(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.has_keyword(keyword))
    }

    /// First keyword (in slice order) present in the message.
    pub fn first_keyword<'a>(&self, keywords: &[&'a str]) -> Option<&'a str> {
        keywords.iter().copied().find(|keyword| self.has_keyword(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let msg = Message::new("  What's WRONG with my Fern?! ");
        assert_eq!(msg.word_count(), 5);
        assert!(msg.has_word("what"));
        assert!(msg.has_word("fern"));
        assert!(!msg.has_word("fer"));
        assert_eq!(msg.lower(), "what's wrong with my fern?!");
    }

    #[test]
    fn test_prefix_keywords() {
        let msg = Message::new("How often should I be watering?");
        assert!(msg.has_keyword("water"));
        assert!(!msg.has_keyword("atering"));

        let spots = Message::new("brown spots on leaves");
        assert!(!spots.has_keyword("pot"));
        assert!(spots.has_keyword("spot"));
    }

    #[test]
    fn test_phrases() {
        let msg = Message::new("Could you tell me more, please");
        assert!(msg.has_keyword("tell me more"));
        assert!(msg.has_word("tell me more"));
        assert!(!msg.has_word("me more please now"));

        let msg = Message::new("where do they come from");
        assert!(msg.has_keyword("come fr"));
        assert!(!msg.has_word("come fr"));
    }

    #[test]
    fn test_blank() {
        assert!(Message::new("").is_blank());
        assert!(Message::new("  ?! ").is_blank());
        assert!(!Message::new("hi").is_blank());
    }
}
