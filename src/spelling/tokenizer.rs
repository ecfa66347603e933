//! Boolean query tokenizer.
//!
//! Splits a raw query string into the terms and quoted phrases the backend may
//! have flagged as misspelled. Grouping parentheses and the `AND`/`OR`/`NOT`
//! operators are dropped; quoted phrases are kept verbatim, quotes included.

/// Boolean operators removed from the token stream.
const OPERATORS: [&str; 3] = ["AND", "OR", "NOT"];

const QUOTE: char = '"';

/// Tokenizer for boolean query syntax.
#[derive(Clone, Debug, Default)]
pub struct QueryTokenizer;

impl QueryTokenizer {
    /// Create a new query tokenizer.
    pub fn new() -> Self {
        QueryTokenizer
    }

    /// Split `query` into terms and phrases.
    ///
    /// ```
    /// use spellmend::spelling::tokenizer::QueryTokenizer;
    ///
    /// let tokens = QueryTokenizer::new().tokenize("(apples OR \"pear tree\") AND figs");
    /// assert_eq!(tokens, vec!["apples", "\"pear tree\"", "figs"]);
    /// ```
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_phrase = false;

        for ch in query.chars() {
            if in_phrase {
                current.push(ch);
                if ch == QUOTE {
                    in_phrase = false;
                    flush(&mut current, &mut tokens);
                }
                continue;
            }

            match ch {
                ' ' | '\t' | '(' | ')' => flush(&mut current, &mut tokens),
                QUOTE => {
                    flush(&mut current, &mut tokens);
                    current.push(ch);
                    in_phrase = true;
                }
                _ => current.push(ch),
            }
        }

        // An unterminated phrase is emitted as-is.
        flush(&mut current, &mut tokens);

        tokens.retain(|token| !is_operator(token));
        tokens
    }
}

/// Tokenize `query` with a default [`QueryTokenizer`].
pub fn tokenize(query: &str) -> Vec<String> {
    QueryTokenizer::new().tokenize(query)
}

fn is_operator(token: &str) -> bool {
    OPERATORS.contains(&token)
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
