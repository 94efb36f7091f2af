use crate::error::{Result, TodzError};
use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named predicate over the collection. UI state only; never stored with
/// the items themselves (the config may record one as the list default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.complete,
            Filter::Completed => item.complete,
        }
    }
}

impl FromStr for Filter {
    type Err = TodzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(TodzError::Api(format!("Unknown filter: {}", other))),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}

/// Produce the visible subsequence for a filter. Never mutates the input;
/// relative order is preserved, and `Filter::All` is the identity.
pub fn apply_filter(items: &[Item], filter: Filter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Number of incomplete items (the "N left" footer count).
pub fn active_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.complete).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        let mut a = Item::new("a");
        a.complete = true;
        let b = Item::new("b");
        let mut c = Item::new("c");
        c.complete = true;
        vec![a, b, c]
    }

    #[test]
    fn all_is_identity() {
        let items = sample();
        assert_eq!(apply_filter(&items, Filter::All), items);
    }

    #[test]
    fn active_and_completed_partition() {
        let items = sample();
        let active = apply_filter(&items, Filter::Active);
        let completed = apply_filter(&items, Filter::Completed);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "b");
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|i| i.complete));
    }

    #[test]
    fn filter_preserves_relative_order() {
        let items = sample();
        let completed = apply_filter(&items, Filter::Completed);
        assert_eq!(completed[0].text, "a");
        assert_eq!(completed[1].text, "c");
    }

    #[test]
    fn filter_is_a_subsequence() {
        let items = sample();
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            let view = apply_filter(&items, filter);
            let mut keys = items.iter().map(|i| i.key);
            // Every visible key appears in the original, in order.
            for visible in &view {
                assert!(keys.any(|k| k == visible.key));
            }
        }
    }

    #[test]
    fn active_count_counts_incomplete() {
        assert_eq!(active_count(&sample()), 1);
        assert_eq!(active_count(&[]), 0);
    }

    #[test]
    fn parse_round_trip() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
        assert!("bogus".parse::<Filter>().is_err());
    }
}
