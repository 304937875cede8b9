//! Placeholder Avatar Resolver
//!
//! Maps a descriptive prompt to one of a fixed set of placeholder images.
//! Rules are checked top to bottom against the lowercased prompt and the
//! first match wins, so "asian woman" resolves through the `woman` rule and
//! "woman" never reaches the `man` rule.

/// Fallback when no rule matches
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/150";

/// A keyword rule: prompt contains `keyword` => `image_url`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarRule {
    pub keyword: &'static str,
    pub image_url: &'static str,
}

impl AvatarRule {
    /// `prompt` must already be lowercased. The keyword may use any case.
    pub fn matches(&self, prompt: &str) -> bool {
        prompt.contains(&self.keyword.to_lowercase())
    }
}

/// Priority-ordered rule table
pub const AVATAR_RULES: [AvatarRule; 4] = [
    AvatarRule {
        keyword: "woman",
        image_url: "https://i.pravatar.cc/150?img=5",
    },
    AvatarRule {
        keyword: "man",
        image_url: "https://i.pravatar.cc/150?img=7",
    },
    AvatarRule {
        keyword: "asian",
        image_url: "https://i.pravatar.cc/150?img=13",
    },
    AvatarRule {
        keyword: "curly",
        image_url: "https://i.pravatar.cc/150?img=9",
    },
];

/// Resolve a prompt against `AVATAR_RULES`. Never fails.
pub fn resolve_avatar(prompt: &str) -> &'static str {
    resolve_with(&AVATAR_RULES, prompt)
}

/// Resolve against an arbitrary ordered rule table
pub fn resolve_with(rules: &[AvatarRule], prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&prompt))
        .map_or(DEFAULT_AVATAR_URL, |rule| rule.image_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEMALE: &str = "https://i.pravatar.cc/150?img=5";
    const MALE: &str = "https://i.pravatar.cc/150?img=7";
    const ASIAN: &str = "https://i.pravatar.cc/150?img=13";
    const CURLY: &str = "https://i.pravatar.cc/150?img=9";

    #[test]
    fn test_seed_prompts() {
        assert_eq!(resolve_avatar("professional woman with short brown hair"), FEMALE);
        assert_eq!(resolve_avatar("asian man with glasses"), MALE);
        assert_eq!(resolve_avatar("young professional woman with curly hair"), FEMALE);
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        assert_eq!(resolve_avatar("a dog"), DEFAULT_AVATAR_URL);
        assert_eq!(resolve_avatar(""), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_lower_priority_rules_reachable() {
        assert_eq!(resolve_avatar("asian person smiling"), ASIAN);
        assert_eq!(resolve_avatar("person with curly hair"), CURLY);
        assert_eq!(resolve_avatar("asian person with curly hair"), ASIAN);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_avatar("Professional WOMAN"), FEMALE);
        assert_eq!(resolve_avatar("CURLY hair"), CURLY);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "manager" contains "man"
        assert_eq!(resolve_avatar("a manager in a suit"), MALE);
    }

    #[test]
    fn test_custom_rule_order() {
        let reversed: Vec<AvatarRule> = AVATAR_RULES.iter().rev().copied().collect();
        assert_eq!(resolve_with(&reversed, "asian woman with curly hair"), CURLY);
    }

    #[test]
    fn test_custom_rule_keyword_case_ignored() {
        let rules = [AvatarRule {
            keyword: "Woman",
            image_url: FEMALE,
        }];
        assert_eq!(resolve_with(&rules, "a woman in a blazer"), FEMALE);
        assert_eq!(resolve_with(&rules, "A WOMAN"), FEMALE);
        assert!(rules[0].matches("professional woman"));
    }
}
