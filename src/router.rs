// ABOUTME: Keyword response router — maps user text to a canned reply.
// ABOUTME: Rules are checked top to bottom against the lower-cased input; first match wins.

/// Reply for greetings.
pub const GREETING: &str = "Hello! I'm SemireGPT. How can I help you today?";
/// Reply for "how are you".
pub const WELLBEING: &str = "I'm functioning well, thank you! How can I assist you?";
/// Reply for capability and help questions.
pub const CAPABILITIES: &str = "I'm SemireGPT, currently in development. \
I can have basic conversations, but I'm being enhanced \
to become a fully custom AI assistant!";
/// Reply for questions about the assistant's name.
pub const NAME: &str = "My name is SemireGPT - a custom AI being developed!";

/// A keyword predicate paired with the reply it selects.
///
/// The predicate holds when any keyword is a substring of the lower-cased input.
/// [`Rule::new`] lower-cases keywords so mixed-case phrasings still match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub response: String,
}

impl Rule {
    pub fn new<K, S>(keywords: K, response: impl Into<String>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| Into::<String>::into(k).to_lowercase())
                .collect(),
            response: response.into(),
        }
    }

    /// Whether this rule fires for already lower-cased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered list of rules plus the fallback used when none apply.
#[derive(Debug, Clone)]
pub struct ResponseRouter {
    rules: Vec<Rule>,
}

impl ResponseRouter {
    /// Build a router over a caller-supplied rule order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Pick the reply for `input`. Never fails; unmatched input (including the
    /// empty string) gets the fallback, which quotes `input` unchanged.
    pub fn respond(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| fallback(input))
    }
}

impl Default for ResponseRouter {
    fn default() -> Self {
        Self::new(vec![
            Rule::new(["hello", "hi"], GREETING),
            Rule::new(["how are you"], WELLBEING),
            Rule::new(["what can you do", "help"], CAPABILITIES),
            Rule::new(["name"], NAME),
        ])
    }
}

/// Reply used when no rule matches.
pub fn fallback(input: &str) -> String {
    format!("I heard you say: '{input}'. I'm still learning and improving my responses!")
}

/// Route `input` through the built-in rules.
pub fn respond(input: &str) -> String {
    ResponseRouter::default().respond(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_matches_case_insensitively() {
        assert_eq!(respond("Hi there"), GREETING);
        assert_eq!(respond("HELLO"), GREETING);
    }

    #[test]
    fn greeting_wins_over_later_rules() {
        assert_eq!(respond("Hello, what is your name?"), GREETING);
        assert_eq!(respond("hi, can you help?"), GREETING);
    }

    #[test]
    fn wellbeing_rule() {
        assert_eq!(respond("How are you today?"), WELLBEING);
    }

    #[test]
    fn capabilities_rule_has_two_phrasings() {
        assert_eq!(respond("What can you do?"), CAPABILITIES);
        assert_eq!(respond("I need HELP"), CAPABILITIES);
    }

    #[test]
    fn name_rule() {
        assert_eq!(respond("What is your name?"), NAME);
    }

    #[test]
    fn fallback_echoes_original_case() {
        let reply = respond("Banana SPLIT");
        assert_eq!(
            reply,
            "I heard you say: 'Banana SPLIT'. I'm still learning and improving my responses!"
        );
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(respond(""), fallback(""));
    }

    #[test]
    fn short_keyword_matches_inside_words() {
        // "this" contains "hi".
        assert_eq!(respond("Is this thing on?"), GREETING);
    }

    #[test]
    fn custom_rules_respect_order() {
        let router = ResponseRouter::new(vec![
            Rule::new(["weather"], "Sunny."),
            Rule::new(["weather today"], "Never reached."),
        ]);
        assert_eq!(router.respond("What's the weather today?"), "Sunny.");
        assert_eq!(router.respond("nothing"), fallback("nothing"));
    }

    #[test]
    fn mixed_case_keywords_still_match() {
        let rule = Rule::new(["Good Morning"], "Morning!");
        assert_eq!(rule.keywords, vec!["good morning".to_string()]);

        let router = ResponseRouter::new(vec![rule]);
        assert_eq!(router.respond("GOOD MORNING to you"), "Morning!");
        assert_eq!(router.respond("good morning"), "Morning!");
    }

    #[test]
    fn empty_router_always_falls_back() {
        let router = ResponseRouter::new(Vec::new());
        assert_eq!(router.respond("hello"), fallback("hello"));
    }

    #[test]
    fn default_rule_order() {
        let router = ResponseRouter::default();
        let first: Vec<&str> = router
            .rules()
            .iter()
            .map(|r| r.keywords[0].as_str())
            .collect();
        assert_eq!(first, vec!["hello", "how are you", "what can you do", "name"]);
    }
}
