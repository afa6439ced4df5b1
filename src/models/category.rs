//! Transaction classification
//!
//! Both the direction of a transaction and its category are closed sets.
//! On disk they are upper-case enum strings (`"EXPENSE"`, `"FOOD"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction adds to or takes from the user's money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TransactionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let expected = Self::all().iter().map(|t| t.name()).collect();
                ParseEnumError::new("transaction type", s, expected)
            })
    }
}

/// Spending and income categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Salary,
    Investment,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Health,
            Self::Education,
            Self::Salary,
            Self::Investment,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Salary => "Salary",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let expected = Self::all().iter().map(|c| c.name()).collect();
                ParseEnumError::new("category", s, expected)
            })
    }
}

/// Error returned when a category or transaction type name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    input: String,
    expected: Vec<&'static str>,
}

impl ParseEnumError {
    fn new(kind: &'static str, input: &str, expected: Vec<&'static str>) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {} '{}'. Expected one of: {}",
            self.kind,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("SALARY".parse::<Category>().unwrap(), Category::Salary);
        assert_eq!(
            " expense ".parse::<TransactionType>().unwrap(),
            TransactionType::Expense
        );
    }

    #[test]
    fn test_parse_unknown_lists_options() {
        let err = "groceries".parse::<Category>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown category 'groceries'"));
        assert!(message.contains("Food"));
        assert!(message.contains("Other"));
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"FOOD\"");
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"INCOME\""
        );
        let cat: Category = serde_json::from_str("\"ENTERTAINMENT\"").unwrap();
        assert_eq!(cat, Category::Entertainment);
    }
}
