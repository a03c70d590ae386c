//! Landmark categories and the UI-level category filter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of landmark categories known to the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Lecture halls, libraries, labs.
    Educational,
    /// Heritage buildings and memorials.
    Historical,
    /// Temples, chapels and other places of worship.
    Religious,
    /// Gardens, lakes and open green space.
    Natural,
    /// Auditoriums, sports grounds, cafeterias.
    Entertainment,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Educational,
        Self::Historical,
        Self::Religious,
        Self::Natural,
        Self::Entertainment,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Educational => "educational",
            Self::Historical => "historical",
            Self::Religious => "religious",
            Self::Natural => "natural",
            Self::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`Category`] and [`CategoryFilter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid landmark category: {input}")]
pub struct ParseCategoryError {
    /// Rejected input.
    pub input: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ParseCategoryError {
                input: value.to_owned(),
            })
    }
}

/// Category filter held in UI state.
///
/// `All` is sent to the service as the literal string `"all"`; it is never a
/// real landmark category.
///
/// # Examples
///
/// ```
/// use explorer::domain::{Category, CategoryFilter};
///
/// assert!(CategoryFilter::All.matches(Category::Natural));
/// assert!(!CategoryFilter::Only(Category::Historical).matches(Category::Natural));
/// assert_eq!("religious".parse(), Ok(CategoryFilter::Only(Category::Religious)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to one category.
    Only(Category),
}

impl CategoryFilter {
    const ALL_LITERAL: &'static str = "all";

    /// Whether a landmark of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LITERAL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == Self::ALL_LITERAL {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_owned()
    }
}

/// Landmark tallies behind each sidebar filter entry.
///
/// `all` reports the total; a category reports how many landmarks carry it.
/// Counts are taken over the unfiltered result set, so they do not shrink
/// when a filter or text query is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    total: usize,
    by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    /// Count one entry per category in `categories`.
    pub fn tally(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut counts = Self::default();
        for category in categories {
            counts.total += 1;
            *counts.by_category.entry(category).or_default() += 1;
        }
        counts
    }

    /// Number of landmarks `filter` would keep.
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Only(category) => {
                self.by_category.get(&category).copied().unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("educational", Category::Educational)]
    #[case("historical", Category::Historical)]
    #[case("religious", Category::Religious)]
    #[case("natural", Category::Natural)]
    #[case("entertainment", Category::Entertainment)]
    fn parses_every_category(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("all")]
    #[case("Educational")]
    #[case("")]
    fn rejects_unknown_categories(#[case] raw: &str) {
        assert!(raw.parse::<Category>().is_err());
    }

    #[test]
    fn all_filter_is_sent_as_literal_string() {
        let value = serde_json::to_value(CategoryFilter::All).expect("serialise");
        assert_eq!(value, serde_json::json!("all"));
    }

    #[test]
    fn only_filter_serialises_as_category_name() {
        let value =
            serde_json::to_value(CategoryFilter::Only(Category::Natural)).expect("serialise");
        assert_eq!(value, serde_json::json!("natural"));
    }

    #[test]
    fn filter_defaults_to_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn counts_cover_all_and_each_category() {
        let counts = CategoryCounts::tally([
            Category::Natural,
            Category::Educational,
            Category::Natural,
        ]);

        assert_eq!(counts.get(CategoryFilter::All), 3);
        assert_eq!(counts.get(CategoryFilter::Only(Category::Natural)), 2);
        assert_eq!(counts.get(CategoryFilter::Only(Category::Educational)), 1);
        assert_eq!(counts.get(CategoryFilter::Only(Category::Religious)), 0);
    }
}
