//! View-level filtering over the item list.
//!
//! A filter is a pure predicate: applying or switching one never touches
//! the items themselves or the persisted sequence.

use crate::item::Item;
use std::fmt;
use std::str::FromStr;

/// The one active view mode. Exactly one is in effect at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Completed => item.completed,
            Self::Incomplete => !item.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        }
    }

    /// Filters in footer/tab display order.
    pub const ALL_FILTERS: [ItemFilter; 3] = [Self::All, Self::Completed, Self::Incomplete];
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            other => Err(format!(
                "unknown filter '{other}' (expected all, completed, or incomplete)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(name: &str) -> Item {
        let mut item = Item::new(name.to_string());
        item.toggle_completed();
        item
    }

    #[test]
    fn all_matches_everything() {
        assert!(ItemFilter::All.matches(&Item::new("Milk".to_string())));
        assert!(ItemFilter::All.matches(&completed("Milk")));
    }

    #[test]
    fn completed_and_incomplete_partition_items() {
        let open = Item::new("Milk".to_string());
        let done = completed("Eggs");

        assert!(!ItemFilter::Completed.matches(&open));
        assert!(ItemFilter::Completed.matches(&done));
        assert!(ItemFilter::Incomplete.matches(&open));
        assert!(!ItemFilter::Incomplete.matches(&done));
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("ALL".parse::<ItemFilter>().unwrap(), ItemFilter::All);
        assert_eq!(
            "completed".parse::<ItemFilter>().unwrap(),
            ItemFilter::Completed
        );
        assert!("done".parse::<ItemFilter>().is_err());
    }

    #[test]
    fn default_is_all() {
        assert_eq!(ItemFilter::default(), ItemFilter::All);
    }
}
