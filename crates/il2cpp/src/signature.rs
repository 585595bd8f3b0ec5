//! Tokenizer for the C-style signatures Il2CppDumper writes into script.json
//!
//! The accepted grammar is the one the dumper produces, not general C++:
//!
//! ```text
//! <returnType> <functionName>(<type tokens> <name>, <type tokens> <name>, ...);
//! ```
//!
//! The head before `(` must be exactly two whitespace separated tokens. Each
//! parameter keeps every token except the last, which is the parameter name.
//! A parameter given as a single token is a bare type.

use thiserror::Error;

/// Why a signature could not be decomposed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing parameter list")]
    MissingParameterList,

    #[error("expected return type and function name before '(', found {0} token(s)")]
    HeadTokenCount(usize),

    #[error("parameter list is not closed")]
    UnclosedParameterList,

    #[error("unexpected text after parameter list: {0:?}")]
    TrailingText(String),

    #[error("nested parentheses in parameter list")]
    NestedParentheses,

    #[error("parameter {0} is empty")]
    EmptyParameter(usize),
}

/// A signature split into its return type, name and parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    pub return_type: String,
    pub function_name: String,
    /// Parameter types with the parameter names dropped
    pub parameters: Vec<String>,
}

/// Split a signature into return type, function name and parameter types
pub fn parse(signature: &str) -> Result<ParsedSignature, SignatureError> {
    let (head, tail) = signature
        .split_once('(')
        .ok_or(SignatureError::MissingParameterList)?;

    let head_tokens: Vec<&str> = head.split_whitespace().collect();
    let [return_type, function_name] = head_tokens.as_slice() else {
        return Err(SignatureError::HeadTokenCount(head_tokens.len()));
    };

    let close = tail.rfind(')').ok_or(SignatureError::UnclosedParameterList)?;

    // The dumper terminates every signature with ";"
    let trailing = &tail[close + 1..];
    if !trailing.chars().all(|c| c.is_whitespace() || c == ';') {
        return Err(SignatureError::TrailingText(trailing.trim().to_string()));
    }

    let list = &tail[..close];
    if list.contains(['(', ')']) {
        return Err(SignatureError::NestedParentheses);
    }

    Ok(ParsedSignature {
        return_type: return_type.to_string(),
        function_name: function_name.to_string(),
        parameters: parse_parameters(list)?,
    })
}

/// Resolve the parameter types of a raw parameter list (without parentheses)
pub fn parse_parameters(list: &str) -> Result<Vec<String>, SignatureError> {
    // "()" must give no parameters rather than one blank one
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .enumerate()
        .map(|(index, fragment)| {
            let tokens: Vec<&str> = fragment.split_whitespace().collect();
            match tokens.as_slice() {
                [] => Err(SignatureError::EmptyParameter(index)),
                [bare_type] => Ok(bare_type.to_string()),
                [type_tokens @ .., _name] => Ok(type_tokens.join(" ")),
            }
        })
        .collect()
}
