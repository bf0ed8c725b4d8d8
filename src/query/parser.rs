use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::tokenizer;
use crate::core::error::{Error, ErrorKind, Result};

/// Two lists of words produced by `QueryParser::parse`. For sequential
/// scoring and sequential matching (`normalize = true`) both lists are
/// sorted and deduplicated; the parallel scorer and parallel matcher
/// parse with `normalize = false` and accept the redundant work in
/// exchange for skipping the sort (spec §4.2 / §4.5 / §4.6).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

/// Parses raw query text into a `Query`, dropping stop words and
/// rejecting malformed minus-tokens.
pub struct QueryParser {
    stop_words: Arc<HashSet<String>>,
}

impl QueryParser {
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        QueryParser { stop_words }
    }

    pub fn parse(&self, text: &str, normalize: bool) -> Result<Query> {
        let mut plus_words = Vec::new();
        let mut minus_words = Vec::new();

        for token in tokenizer::split(text) {
            let (word, is_minus) = if let Some(rest) = token.strip_prefix('-') {
                if rest.is_empty() || rest.starts_with('-') {
                    return Err(Error::new(
                        ErrorKind::InvalidQuery,
                        format!("invalid minus-token {:?}", token),
                    ));
                }
                (rest, true)
            } else {
                (token, false)
            };

            if !tokenizer::is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("query contains an invalid word {:?}", word),
                ));
            }

            if self.stop_words.contains(word) {
                continue;
            }

            if is_minus {
                minus_words.push(word.to_string());
            } else {
                plus_words.push(word.to_string());
            }
        }

        if normalize {
            plus_words.sort();
            plus_words.dedup();
            minus_words.sort();
            minus_words.dedup();
        }

        Ok(Query {
            plus_words,
            minus_words,
        })
    }
}
