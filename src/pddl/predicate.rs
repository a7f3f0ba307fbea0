use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use super::utils::build_arg_string;

/// Builds a [`Proposition`] from identifiers: `prop!(At(C1, SFO))`, `prop!(Have)`.
#[macro_export]
macro_rules! prop {
    ( $rel: ident ( $($arg: ident),* ) ) => {
        {
            let args: &[&str] = &[$(stringify!($arg)),*];
            $crate::pddl::predicate::Proposition::from_static(stringify!($rel), args)
        }
    };
    ( $rel: ident ) => {
        $crate::pddl::predicate::Proposition::from_static(stringify!($rel), &[] as &[&str])
    };
}

/// A relation applied to concrete domain objects, e.g. `At(C1, SFO)`.
///
/// Two propositions are the same fluent iff they share the relation name and
/// the ordered argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition {
    relation: String,
    args: Vec<String>,
}

impl Proposition {
    pub fn new<R, I, S>(relation: R, args: I) -> Result<Proposition>
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let relation = relation.into();
        if relation.trim().is_empty() {
            return Err(Error::EmptyRelation);
        }
        Ok(Proposition {
            relation,
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// For relation names fixed at compile time. The relation must not be empty.
    #[doc(hidden)]
    pub fn from_static<S: AsRef<str>>(relation: &'static str, args: &[S]) -> Proposition {
        debug_assert!(!relation.is_empty());
        Proposition {
            relation: relation.to_owned(),
            args: args.iter().map(|a| a.as_ref().to_owned()).collect(),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.relation)
        } else {
            write!(f, "{}({})", self.relation, build_arg_string(&self.args))
        }
    }
}

impl FromStr for Proposition {
    type Err = Error;

    /// Accepts `Rel`, `Rel()` and `Rel(a, b, ...)`.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let (relation, args) = match text.find('(') {
            Some(open) => {
                let inner = text[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| Error::Parse(text.to_owned()))?;
                if inner.contains('(') || inner.contains(')') {
                    return Err(Error::Parse(text.to_owned()));
                }
                let args = if inner.trim().is_empty() {
                    Vec::new()
                } else {
                    inner.split(',').map(|a| a.trim().to_owned()).collect::<Vec<_>>()
                };
                if args.iter().any(|a| a.is_empty()) {
                    return Err(Error::Parse(text.to_owned()));
                }
                (text[..open].trim(), args)
            }
            None if text.contains(')') => return Err(Error::Parse(text.to_owned())),
            None => (text, Vec::new()),
        };
        if relation.chars().any(char::is_whitespace) {
            return Err(Error::Parse(text.to_owned()));
        }
        Proposition::new(relation, args)
    }
}
