use crate::build;
use crate::catalog;
use crate::stopwatch::Stopwatch;
use crate::error::Result;
use crate::filter;
use crate::parse;
use crate::types::{
    Catalog, Counts, FacetGroup, FacetGroupView, FacetOptionView, FacetsConfig, Product,
    Selection,
};
use std::rc::Rc;

/// Filter engine state with pre-computed counts and the current result
pub struct FilterEngine {
    catalog: Catalog,
    facets: FacetsConfig,
    counts: Counts,
    selection: Rc<Selection>,
    selection_version: u64,
    filtered: Vec<usize>,
}

impl FilterEngine {
    /// Create a new engine from a catalog and facet definitions
    pub fn new(catalog: Catalog, facets: FacetsConfig) -> Result<Self> {
        parse::validate_catalog(&catalog)?;
        Ok(Self::assemble(catalog, facets))
    }

    /// Engine over the compiled-in storefront data
    pub fn with_defaults() -> Self {
        Self::assemble(catalog::default_catalog(), catalog::default_facets())
    }

    fn assemble(catalog: Catalog, facets: FacetsConfig) -> Self {
        // Counts are catalog-wide and never change afterwards
        let counts = build::build_counts(&catalog);
        let filtered = (0..catalog.len()).collect();

        FilterEngine {
            catalog,
            facets,
            counts,
            selection: Rc::new(Selection::default()),
            selection_version: 0,
            filtered,
        }
    }

    /// Create an engine from JSON catalog and facet definitions
    pub fn from_json(catalog_json: &str, facets_json: &str) -> Result<Self> {
        let catalog = parse::parse_catalog(catalog_json)?;
        let facets = parse::parse_facets(facets_json)?;
        Self::new(catalog, facets)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facets(&self) -> &FacetsConfig {
        &self.facets
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Current selection. A new `Rc` is installed on every toggle or clear,
    /// so `Rc::ptr_eq` against an older handle detects the change.
    pub fn selection(&self) -> Rc<Selection> {
        Rc::clone(&self.selection)
    }

    /// Number of selection values installed since creation
    pub fn selection_version(&self) -> u64 {
        self.selection_version
    }

    /// Flip an option in a group. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, group: FacetGroup, option: &str) -> bool {
        let next = self.selection.toggled(group, option);
        let selected = next.contains(group, option);
        self.install(next);
        selected
    }

    /// Reset every group to empty
    pub fn clear(&mut self) {
        self.install(Selection::cleared());
    }

    fn install(&mut self, selection: Selection) {
        self.selection = Rc::new(selection);
        self.selection_version += 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        let watch = Stopwatch::start();
        self.filtered = filter::filter_indices(&self.catalog, &self.selection);

        tracing::debug!(
            "[perf] filter type={} tech={} color={} results={} | total={:.1}ms",
            self.selection.kind.len(),
            self.selection.tech.len(),
            self.selection.color.len(),
            self.filtered.len(),
            watch.elapsed_ms()
        );
    }

    /// Products passing the current selection, in catalog order
    pub fn filtered(&self) -> Vec<&Product> {
        self.filtered.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn result_len(&self) -> usize {
        self.filtered.len()
    }

    /// True when nothing matches the current selection
    pub fn is_empty_result(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Sidebar render model: groups in fixed order, options in configured order
    pub fn filter_groups(&self) -> Vec<FacetGroupView> {
        FacetGroup::ALL
            .into_iter()
            .filter_map(|group| {
                let config = self.facets.get(&group)?;
                let options = config
                    .options
                    .iter()
                    .map(|option| FacetOptionView {
                        option: option.clone(),
                        count: self.counts.get(group, option),
                        checked: self.selection.contains(group, option),
                    })
                    .collect();
                Some(FacetGroupView {
                    key: group,
                    title: config.title.clone(),
                    options,
                })
            })
            .collect()
    }
}
