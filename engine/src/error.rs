use thiserror::Error;

use crate::types::FacetGroup;

/// Errors raised while loading data into the engine or addressing it from JS.
/// Filtering itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A group key other than `type`, `tech` or `color`.
    #[error("unknown facet group '{0}'")]
    UnknownGroup(String),

    #[error("failed to parse catalog: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("failed to parse facets config: {0}")]
    Facets(#[source] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(u32),

    /// A product lists the same technology more than once.
    #[error("product {id} lists technology '{technology}' more than once")]
    DuplicateTechnology { id: u32, technology: String },

    /// Facets config does not define one of the fixed groups.
    #[error("facets config is missing group '{0}'")]
    MissingGroup(FacetGroup),

    #[error("Engine not initialized. Call init_engine(catalog_json, facets_json) first.")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, EngineError>;
