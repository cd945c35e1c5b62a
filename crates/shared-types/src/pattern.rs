//! Badge route patterns such as `/github/stars/:user/:repo` or
//! `/npm/v/:packageName/:tag?`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AppError;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    Param(PatternParam),
}

/// A named placeholder in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParam {
    pub name: String,
    /// `/` or `.` that precedes the value in the built path, or empty.
    pub prefix: String,
    pub optional: bool,
    /// Allowed values from a `(a|b)` group; empty means free text.
    pub choices: Vec<String>,
}

/// Notification emitted by the path builder whenever a value changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathChange {
    pub path: String,
    pub is_complete: bool,
}

/// A parsed badge route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    tokens: Vec<PatternToken>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, AppError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut seen: Vec<String> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != ':' {
                literal.push(chars[i]);
                i += 1;
                continue;
            }

            let start = i + 1;
            let mut j = start;
            while j < chars.len() && is_name_char(chars[j]) {
                j += 1;
            }
            if j == start {
                return Err(AppError::invalid_pattern(format!(
                    "empty parameter name at offset {i} in '{pattern}'"
                )));
            }
            let name: String = chars[start..j].iter().collect();
            if seen.contains(&name) {
                return Err(AppError::invalid_pattern(format!(
                    "duplicate parameter ':{name}' in '{pattern}'"
                )));
            }

            let mut choices = Vec::new();
            if j < chars.len() && chars[j] == '(' {
                let close = chars[j + 1..]
                    .iter()
                    .position(|&c| c == ')')
                    .map(|offset| j + 1 + offset)
                    .ok_or_else(|| {
                        AppError::invalid_pattern(format!(
                            "unterminated choice group for ':{name}' in '{pattern}'"
                        ))
                    })?;
                let group: String = chars[j + 1..close].iter().collect();
                choices = group.split('|').map(str::to_string).collect();
                if choices.iter().any(String::is_empty) {
                    return Err(AppError::invalid_pattern(format!(
                        "empty choice for ':{name}' in '{pattern}'"
                    )));
                }
                j = close + 1;
            }

            let optional = j < chars.len() && chars[j] == '?';
            if optional {
                j += 1;
            }

            let prefix = match literal.chars().last() {
                Some(c @ ('/' | '.')) => {
                    literal.pop();
                    c.to_string()
                }
                _ => String::new(),
            };
            if !literal.is_empty() {
                tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
            }

            seen.push(name.clone());
            tokens.push(PatternToken::Param(PatternParam {
                name,
                prefix,
                optional,
                choices,
            }));
            i = j;
        }

        if !literal.is_empty() {
            tokens.push(PatternToken::Literal(literal));
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn params(&self) -> impl Iterator<Item = &PatternParam> {
        self.tokens.iter().filter_map(|token| match token {
            PatternToken::Param(param) => Some(param),
            PatternToken::Literal(_) => None,
        })
    }

    /// Substitute `values` into the pattern.
    ///
    /// A required parameter without a value is left as `:name` in the path
    /// and the result is reported incomplete.
    pub fn construct_path(&self, values: &BTreeMap<String, String>) -> PathChange {
        let mut is_complete = true;
        let path = self
            .tokens
            .iter()
            .map(|token| match token {
                PatternToken::Literal(text) => text.clone(),
                PatternToken::Param(param) => {
                    match values.get(&param.name).filter(|v| !v.is_empty()) {
                        Some(value) => format!("{}{}", param.prefix, value),
                        None if param.optional => String::new(),
                        None => {
                            is_complete = false;
                            format!("{}:{}", param.prefix, param.name)
                        }
                    }
                }
            })
            .collect();

        PathChange { path, is_complete }
    }
}
