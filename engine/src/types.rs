use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub technologies: Vec<String>,
    pub color: String,
    pub price: u64,
}

impl Product {
    /// Option value(s) this product carries for a facet group
    pub fn facet_values(&self, group: FacetGroup) -> Vec<&str> {
        match group {
            FacetGroup::Type => vec![self.kind.as_str()],
            FacetGroup::Tech => self.technologies.iter().map(String::as_str).collect(),
            FacetGroup::Color => vec![self.color.as_str()],
        }
    }
}

/// Catalog: ordered product list
pub type Catalog = Vec<Product>;

/// Facet group key. Ordering follows sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetGroup {
    Type,
    Tech,
    Color,
}

impl FacetGroup {
    pub const ALL: [FacetGroup; 3] = [FacetGroup::Type, FacetGroup::Tech, FacetGroup::Color];

    pub fn key(self) -> &'static str {
        match self {
            FacetGroup::Type => "type",
            FacetGroup::Tech => "tech",
            FacetGroup::Color => "color",
        }
    }
}

impl fmt::Display for FacetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Facet config: display title and ordered option domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    pub title: String,
    pub options: Vec<String>,
}

/// Facets config: group -> FacetConfig
pub type FacetsConfig = BTreeMap<FacetGroup, FacetConfig>;

/// Option counts: option value -> number of catalog products
pub type OptionCounts = HashMap<String, usize>;

/// Catalog-wide counts per facet group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(pub BTreeMap<FacetGroup, OptionCounts>);

impl Counts {
    /// Count for an option; options without matches read as 0
    pub fn get(&self, group: FacetGroup, option: &str) -> usize {
        self.0
            .get(&group)
            .and_then(|counts| counts.get(option).copied())
            .unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, group: FacetGroup, option: &str) {
        *self
            .0
            .entry(group)
            .or_default()
            .entry(option.to_string())
            .or_insert(0) += 1;
    }
}

/// Chosen option values per facet group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub kind: BTreeSet<String>,
    pub tech: BTreeSet<String>,
    pub color: BTreeSet<String>,
}

/// Single checkbox row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptionView {
    pub option: String,
    pub count: usize,
    pub checked: bool,
}

/// Sidebar group with its title and option rows in configured order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroupView {
    pub key: FacetGroup,
    pub title: String,
    pub options: Vec<FacetOptionView>,
}
