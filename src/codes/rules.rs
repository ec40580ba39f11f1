//! Ordered heuristic rules for recovering codes from prose.
//!
//! A rule is a conjunction of clauses; a clause is satisfied when any of its
//! patterns matches. Rules are evaluated top to bottom against the lower-cased
//! text and the first satisfied rule decides. Reordering a table changes
//! results for inputs that match several rules, so tables are append-only
//! unless callers are migrated.

/// A single text test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Substring anywhere in the text.
    Contains(&'static str),
    /// Whole token, where tokens are split on anything that is not
    /// alphanumeric, `&` or `-`.
    Word(&'static str),
}

impl Pattern {
    fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Contains(needle) => text.contains(needle),
            Pattern::Word(word) => tokens(text).any(|t| t == *word),
        }
    }
}

/// `result` applies when every clause in `all_of` has at least one match.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub all_of: &'static [&'static [Pattern]],
    pub result: T,
}

impl<T> Rule<T> {
    fn matches(&self, text: &str) -> bool {
        self.all_of
            .iter()
            .all(|clause| clause.iter().any(|p| p.matches(text)))
    }
}

/// Evaluate `rules` in order; the first matching rule wins.
pub fn first_match<T: Copy>(text: &str, rules: &[Rule<T>]) -> Option<T> {
    let text = text.to_lowercase();
    rules.iter().find(|r| r.matches(&text)).map(|r| r.result)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '&' || c == '-'))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[Rule<u8>] = &[
        Rule {
            all_of: &[&[Pattern::Contains("alpha")], &[Pattern::Word("x")]],
            result: 1,
        },
        Rule {
            all_of: &[&[Pattern::Contains("alpha")]],
            result: 2,
        },
        Rule {
            all_of: &[&[Pattern::Word("ce"), Pattern::Word("f&o")]],
            result: 3,
        },
    ];

    #[test]
    fn test_conjunction_needs_every_clause() {
        assert_eq!(first_match("ALPHA x", RULES), Some(1));
        assert_eq!(first_match("alpha y", RULES), Some(2));
    }

    #[test]
    fn test_word_does_not_match_inside_tokens() {
        assert_eq!(first_match("price", RULES), None);
        assert_eq!(first_match("NIFTY CE", RULES), Some(3));
        assert_eq!(first_match("nse f&o segment", RULES), Some(3));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match("", RULES), None);
    }
}
