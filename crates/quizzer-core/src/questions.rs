//! The fixed abbreviation question bank.

/// A single question and its canonical answer.
///
/// `answer` is always lowercase; matching compares against it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub answer: &'static str,
}

impl Question {
    const fn new(prompt: &'static str, answer: &'static str) -> Self {
        Self { prompt, answer }
    }

    /// Returns `true` if `response` matches the canonical answer.
    ///
    /// Surrounding whitespace and letter case are ignored. Anything else must
    /// match exactly: there is no partial credit and no synonym list.
    pub fn is_correct(&self, response: &str) -> bool {
        normalize_answer(response) == self.answer
    }

    /// The answer in title case, for display after a wrong response.
    pub fn display_answer(&self) -> String {
        title_case(self.answer)
    }
}

/// Trim and lowercase a raw response.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Uppercase the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

static BANK: [Question; 15] = [
    Question::new("What does CPU stand for?", "central processing unit"),
    Question::new("What does GPU stand for?", "graphics processing unit"),
    Question::new("What does RAM stand for?", "random access memory"),
    Question::new("What does PSU stand for?", "power supply unit"),
    Question::new("What does ROM stand for?", "read only memory"),
    Question::new("What does BIOS stand for?", "basic input output system"),
    Question::new("What does URL stand for?", "uniform resource locator"),
    Question::new("What does HTTP stand for?", "hypertext transfer protocol"),
    Question::new("What does IP stand for in networking?", "internet protocol"),
    Question::new("What does LAN stand for?", "local area network"),
    Question::new("What does WAN stand for?", "wide area network"),
    Question::new("What does VPN stand for?", "virtual private network"),
    Question::new("What does USB stand for?", "universal serial bus"),
    Question::new("What does SSD stand for?", "solid state drive"),
    Question::new("What does DNS stand for?", "domain name system"),
];

/// The full question bank in its fixed order.
pub fn bank() -> &'static [Question] {
    &BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ram() -> &'static Question {
        bank()
            .iter()
            .find(|q| q.prompt.contains("RAM"))
            .unwrap()
    }

    #[test]
    fn bank_has_fifteen_lowercase_answers() {
        assert_eq!(bank().len(), 15);
        for q in bank() {
            assert_eq!(q.answer, q.answer.to_lowercase(), "{}", q.prompt);
            assert_eq!(q.answer, q.answer.trim());
        }
    }

    #[test]
    fn prompts_are_unique() {
        let mut prompts: Vec<_> = bank().iter().map(|q| q.prompt).collect();
        prompts.sort_unstable();
        prompts.dedup();
        assert_eq!(prompts.len(), bank().len());
    }

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        assert!(ram().is_correct("  Random Access Memory "));
        assert!(ram().is_correct("random access memory"));
        assert!(ram().is_correct("RANDOM ACCESS MEMORY\n"));
    }

    #[test]
    fn matching_has_no_partial_credit() {
        assert!(!ram().is_correct("random access"));
        assert!(!ram().is_correct("random  access memory"));
        assert!(!ram().is_correct("ram"));
        assert!(!ram().is_correct(""));
    }

    #[test]
    fn display_answer_is_title_cased() {
        assert_eq!(ram().display_answer(), "Random Access Memory");
        assert_eq!(title_case("internet protocol"), "Internet Protocol");
        assert_eq!(title_case(""), "");
    }
}
