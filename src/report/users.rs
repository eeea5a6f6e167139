use std::fmt;

use serde::{Deserialize, Serialize};

/// Users associated with a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Users {
    List(Vec<String>),
    Single(String),
}

/// Quotes a user the way the host prints a list entry: single quotes unless
/// the name holds a single quote and no double quote.
fn quoted(user: &str) -> String {
    let quote = if user.contains('\'') && !user.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(user.len() + 2);
    out.push(quote);
    for c in user.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Lists render as `['alice', 'bob']`, a single user verbatim.
impl fmt::Display for Users {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Users::Single(user) => f.write_str(user),
            Users::List(users) => {
                f.write_str("[")?;
                for (i, user) in users.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&quoted(user))?;
                }
                f.write_str("]")
            }
        }
    }
}
