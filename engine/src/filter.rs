use crate::types::{Catalog, Product, Selection};

/// Check whether a product passes the selection.
/// Groups combine with AND; an empty group places no constraint.
/// Inside the tech group any selected technology is enough (OR).
pub fn matches(product: &Product, selection: &Selection) -> bool {
    if !selection.kind.is_empty() && !selection.kind.contains(&product.kind) {
        return false;
    }
    if !selection.tech.is_empty()
        && !product
            .technologies
            .iter()
            .any(|t| selection.tech.contains(t))
    {
        return false;
    }
    if !selection.color.is_empty() && !selection.color.contains(&product.color) {
        return false;
    }
    true
}

/// Catalog positions of matching products, in catalog order
pub fn filter_indices(catalog: &Catalog, selection: &Selection) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| matches(product, selection))
        .map(|(i, _)| i)
        .collect()
}
