use crate::types::{Catalog, Counts, FacetGroup};

/// Build catalog-wide option counts.
/// Each product adds 1 to its type, 1 to each of its technologies and 1 to its color.
pub fn build_counts(catalog: &Catalog) -> Counts {
    let mut counts = Counts::default();

    for product in catalog {
        for group in FacetGroup::ALL {
            for value in product.facet_values(group) {
                counts.increment(group, value);
            }
        }
    }

    counts
}
