//! Variable substitution for parameter file templates
//!
//! Supports `$NAME`, `${NAME}`, `${NAME=default}` and `${NAME:-default}`.
//! Unknown variables expand to the empty string; `$$` yields a literal `$`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("unterminated variable reference at byte {0}")]
    Unterminated(usize),
    #[error("empty variable name at byte {0}")]
    EmptyName(usize),
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expand variable references in `input` using `lookup`.
pub fn substitute<F>(input: &str, lookup: F) -> Result<String, SubstitutionError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some((_, '$')) => {
                chars.next();
                out.push('$');
            }
            Some((_, '{')) => {
                chars.next();
                let mut body = String::new();
                let mut closed = false;
                for (_, ch) in chars.by_ref() {
                    if ch == '}' {
                        closed = true;
                        break;
                    }
                    body.push(ch);
                }
                if !closed {
                    return Err(SubstitutionError::Unterminated(idx));
                }
                out.push_str(&expand_braced(&body, idx, &lookup)?);
            }
            Some((_, ch)) if is_name_char(ch) => {
                let mut name = String::new();
                while let Some((_, ch)) = chars.peek().copied() {
                    if !is_name_char(ch) {
                        break;
                    }
                    name.push(ch);
                    chars.next();
                }
                out.push_str(&lookup(&name).unwrap_or_default());
            }
            _ => out.push('$'),
        }
    }

    Ok(out)
}

fn expand_braced<F>(body: &str, idx: usize, lookup: &F) -> Result<String, SubstitutionError>
where
    F: Fn(&str) -> Option<String>,
{
    let (name, default, use_default_if_empty) = if let Some((n, d)) = body.split_once(":-") {
        (n, Some(d), true)
    } else if let Some((n, d)) = body.split_once('=') {
        (n, Some(d), false)
    } else {
        (body, None, false)
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(SubstitutionError::EmptyName(idx));
    }

    let value = lookup(name);
    Ok(match (value, default) {
        (Some(v), Some(d)) if v.is_empty() && use_default_if_empty => d.to_string(),
        (Some(v), _) => v,
        (None, Some(d)) => d.to_string(),
        (None, None) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("AZURE_ENV_NAME", "dev"),
            ("AZURE_LOCATION", "eastus"),
            ("EMPTY", ""),
        ])
    }

    fn run(input: &str) -> Result<String, SubstitutionError> {
        let vars = vars();
        substitute(input, |name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn expands_braced_and_bare_references() {
        assert_eq!(
            run(r#"{"name": {"value": "${AZURE_ENV_NAME}"}, "loc": "$AZURE_LOCATION"}"#).unwrap(),
            r#"{"name": {"value": "dev"}, "loc": "eastus"}"#
        );
    }

    #[test]
    fn unknown_variables_expand_to_empty() {
        assert_eq!(run("x=${MISSING};").unwrap(), "x=;");
    }

    #[test]
    fn defaults_follow_shell_semantics() {
        assert_eq!(run("${MISSING=fallback}").unwrap(), "fallback");
        assert_eq!(run("${EMPTY=fallback}").unwrap(), "");
        assert_eq!(run("${EMPTY:-fallback}").unwrap(), "fallback");
    }

    #[test]
    fn dollar_escape_and_lone_dollar() {
        assert_eq!(run("cost: $$5 and $").unwrap(), "cost: $5 and $");
    }

    #[test]
    fn unterminated_reference_is_an_error() {
        assert_eq!(run("abc ${OOPS"), Err(SubstitutionError::Unterminated(4)));
    }
}
