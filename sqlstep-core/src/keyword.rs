//! SQL keyword vocabulary
//!
//! Every enumeration here maps each variant to one immutable token that is
//! written verbatim into rendered statements.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Common contract of the keyword enumerations
pub trait Keyword {
    /// Get the token written for this keyword
    fn key_word(&self) -> &'static str;
}

macro_rules! keywords {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Get the string representation of the keyword
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Keyword for $name {
            fn key_word(&self) -> &'static str {
                self.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keywords! {
    /// Statement keywords
    Keys {
        Insert => "INSERT",
        Into => "INTO",
        Values => "VALUES",
        Select => "SELECT",
        Delete => "DELETE",
        From => "FROM",
        Update => "UPDATE",
        Set => "SET",
        Where => "WHERE",
        In => "IN",
        Limit => "LIMIT",
    }
}

keywords! {
    /// Comparison between two fields
    Relation {
        Eq => "=",
        Gt => ">",
        Gte => ">=",
        Lt => "<",
        Lte => "<=",
        Neq => "!=",
        Like => "LIKE",
    }
}

keywords! {
    /// Logical connector between conditions
    Condition {
        And => "AND",
        Or => "OR",
    }
}

keywords! {
    /// Sort direction
    Order {
        Asc => "ASC",
        Desc => "DESC",
    }
}

keywords! {
    /// Sorting clause
    SortType {
        GroupBy => "GROUP BY",
        OrderBy => "ORDER BY",
    }
}

keywords! {
    /// Aggregate functions applied to fields
    AggregateType {
        Count => "COUNT",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
        Distinct => "DISTINCT",
    }
}

impl AggregateType {
    /// Whether the function accepts more than one argument
    pub const fn supports_multiple(&self) -> bool {
        matches!(self, AggregateType::Distinct)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::Asc
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Relation::Eq),
            ">" => Ok(Relation::Gt),
            ">=" => Ok(Relation::Gte),
            "<" => Ok(Relation::Lt),
            "<=" => Ok(Relation::Lte),
            "!=" | "<>" => Ok(Relation::Neq),
            "LIKE" | "like" => Ok(Relation::Like),
            _ => Err(Error::invalid_argument(format!("unknown relation '{}'", s))),
        }
    }
}

/// Trait for types that can be converted to relations
pub trait IntoRelation {
    fn into_relation(self) -> Relation;
}

impl IntoRelation for Relation {
    fn into_relation(self) -> Relation {
        self
    }
}

/// Allow string literals for the supported relations
impl IntoRelation for &str {
    fn into_relation(self) -> Relation {
        match self.parse() {
            Ok(relation) => relation,
            Err(_) => panic!(
                "Unknown relation '{}'. Use one of =, >, >=, <, <=, !=, LIKE or a Relation variant.",
                self
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_statement_keys() {
        assert_eq!(Keys::Insert.key_word(), "INSERT");
        assert_eq!(Keys::Into.key_word(), "INTO");
        assert_eq!(Keys::Values.key_word(), "VALUES");
        assert_eq!(Keys::Where.key_word(), "WHERE");
        assert_eq!(Keys::Limit.key_word(), "LIMIT");
    }

    #[test]
    fn test_relation_symbols() {
        assert_eq!(Relation::Eq.as_str(), "=");
        assert_eq!(Relation::Gte.as_str(), ">=");
        assert_eq!(Relation::Neq.as_str(), "!=");
        assert_eq!(Relation::Like.as_str(), "LIKE");
    }

    #[test]
    fn test_sort_keywords() {
        assert_eq!(SortType::GroupBy.to_string(), "GROUP BY");
        assert_eq!(SortType::OrderBy.to_string(), "ORDER BY");
        assert_eq!(Order::default(), Order::Asc);
        assert_eq!(format!("{}", Order::Desc), "DESC");
    }

    #[test]
    fn test_tokens_are_unique_per_enum() {
        fn unique<K: Keyword>(all: &[K]) -> bool {
            let tokens: HashSet<_> = all.iter().map(|k| k.key_word()).collect();
            tokens.len() == all.len() && tokens.iter().all(|t| !t.is_empty())
        }

        assert!(unique(Keys::ALL));
        assert!(unique(Relation::ALL));
        assert!(unique(Condition::ALL));
        assert!(unique(Order::ALL));
        assert!(unique(SortType::ALL));
        assert!(unique(AggregateType::ALL));
    }

    #[test]
    fn test_only_distinct_takes_many_arguments() {
        let many: Vec<_> = AggregateType::ALL
            .iter()
            .filter(|t| t.supports_multiple())
            .collect();
        assert_eq!(many, vec![&AggregateType::Distinct]);
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("=".into_relation(), Relation::Eq);
        assert_eq!(">".into_relation(), Relation::Gt);
        assert_eq!("like".into_relation(), Relation::Like);
        assert_eq!("<>".parse::<Relation>().unwrap(), Relation::Neq);
    }

    #[test]
    fn test_unknown_relation_parse_fails() {
        let err = "=>".parse::<Relation>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    #[should_panic(expected = "Unknown relation 'INVALID'")]
    fn test_invalid_string_conversion() {
        "INVALID".into_relation();
    }

    #[test]
    fn test_serde_uses_variant_names() {
        assert_eq!(serde_json::to_string(&Order::Desc).unwrap(), "\"Desc\"");
        let relation: Relation = serde_json::from_str("\"Lte\"").unwrap();
        assert_eq!(relation, Relation::Lte);
    }
}
