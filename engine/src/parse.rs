use crate::error::{EngineError, Result};
use crate::types::{Catalog, FacetGroup, FacetsConfig};
use std::collections::HashSet;
use std::str::FromStr;

impl FromStr for FacetGroup {
    type Err = EngineError;

    /// Parse a group key as sent by the frontend (trimmed, case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "type" => Ok(FacetGroup::Type),
            "tech" => Ok(FacetGroup::Tech),
            "color" => Ok(FacetGroup::Color),
            _ => Err(EngineError::UnknownGroup(s.to_string())),
        }
    }
}

/// Parse a JSON array of products and validate it
pub fn parse_catalog(catalog_json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(catalog_json).map_err(EngineError::Catalog)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Ensure every product id appears once and no product lists a technology twice
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for product in catalog {
        if !seen.insert(product.id) {
            return Err(EngineError::DuplicateProductId(product.id));
        }

        let mut techs = HashSet::with_capacity(product.technologies.len());
        if let Some(tech) = product.technologies.iter().find(|t| !techs.insert(t.as_str())) {
            return Err(EngineError::DuplicateTechnology {
                id: product.id,
                technology: tech.clone(),
            });
        }
    }
    Ok(())
}

/// Parse facet definitions; all three groups must be present
pub fn parse_facets(facets_json: &str) -> Result<FacetsConfig> {
    let facets: FacetsConfig = serde_json::from_str(facets_json).map_err(EngineError::Facets)?;
    if let Some(missing) = FacetGroup::ALL.into_iter().find(|g| !facets.contains_key(g)) {
        return Err(EngineError::MissingGroup(missing));
    }
    Ok(facets)
}
