use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Product classification. Closed set — no dynamic extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Writing,
    Technology,
    Toys,
    Books,
    Crafts,
    Organizers,
    Accessories,
}

impl Category {
    /// Every category, in presentation order. The 1-based position in this
    /// slice is what [`Category::parse_selection`] accepts as an index.
    pub const ALL: [Category; 7] = [
        Category::Writing,
        Category::Technology,
        Category::Toys,
        Category::Books,
        Category::Crafts,
        Category::Organizers,
        Category::Accessories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Writing => "Writing",
            Category::Technology => "Technology",
            Category::Toys => "Toys",
            Category::Books => "Books",
            Category::Crafts => "Crafts",
            Category::Organizers => "Organizers",
            Category::Accessories => "Accessories",
        }
    }

    /// Resolves a user-supplied selection: either a 1-based index into
    /// [`Category::ALL`] or a category label (case-insensitive).
    pub fn parse_selection(input: &str) -> DomainResult<Category> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(DomainError::validation(
                "category selection cannot be empty",
            ));
        }

        if let Ok(index) = raw.parse::<usize>() {
            if index == 0 || index > Self::ALL.len() {
                return Err(DomainError::validation(format!(
                    "category index {index} is out of range, pick 1-{}",
                    Self::ALL.len()
                )));
            }
            return Ok(Self::ALL[index - 1]);
        }

        raw.parse()
    }

    fn labels_joined() -> String {
        Self::ALL
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(raw))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown category '{raw}', valid options: {}",
                    Self::labels_joined()
                ))
            })
    }
}
