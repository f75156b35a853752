use crate::types::{Catalog, FacetConfig, FacetGroup, FacetsConfig, Product};

fn product(
    id: u32,
    title: &str,
    brand: &str,
    kind: &str,
    technologies: &[&str],
    color: &str,
    price: u64,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        brand: brand.to_string(),
        kind: kind.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        color: color.to_string(),
        price,
    }
}

/// Default catalog, in display order
pub fn default_catalog() -> Catalog {
    vec![
        product(
            1,
            "LG DoorCooling+",
            "LG",
            "С нижней морозильной камерой",
            &["DoorCooling+", "InstaView"],
            "Черный",
            59990,
        ),
        product(
            2,
            "Samsung NoFrost 360",
            "Samsung",
            "Однокамерный",
            &["NoFrost", "Door-in-Door"],
            "Серебристый",
            45990,
        ),
        product(
            3,
            "Bosch MetalFresh",
            "Bosch",
            "Многокамерный",
            &["MetalFresh"],
            "Темный графит",
            69990,
        ),
        product(
            4,
            "Haier SmartCool",
            "Haier",
            "Side-by-Side",
            &["Inverter"],
            "Белый",
            124990,
        ),
        product(
            5,
            "LG InstaView Slim",
            "LG",
            "С верхней морозильной камерой",
            &["InstaView", "Inverter"],
            "Черный",
            82990,
        ),
    ]
}

fn facet(title: &str, options: &[&str]) -> FacetConfig {
    FacetConfig {
        title: title.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// Default sidebar facets
pub fn default_facets() -> FacetsConfig {
    let mut facets = FacetsConfig::new();
    facets.insert(
        FacetGroup::Type,
        facet(
            "Тип",
            &[
                "Side-by-Side",
                "Многокамерный",
                "С нижней морозильной камерой",
                "С верхней морозильной камерой",
                "Однокамерный",
            ],
        ),
    );
    facets.insert(
        FacetGroup::Tech,
        facet(
            "Технологии",
            &[
                "DoorCooling+",
                "Умный Инверторный компрессор",
                "MetalFresh",
                "FreshConverter",
                "FreshBalancer",
                "InstaView",
                "Door-in-Door",
                "NoFrost",
                "Inverter",
            ],
        ),
    );
    facets.insert(
        FacetGroup::Color,
        facet(
            "Цвет",
            &["Черный", "Серебристый", "Стальной", "Темный графит", "Белый"],
        ),
    );
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::validate_catalog;

    #[test]
    fn test_default_catalog_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_default_facets_cover_catalog_values() {
        let catalog = default_catalog();
        let facets = default_facets();
        for product in &catalog {
            for group in FacetGroup::ALL {
                for value in product.facet_values(group) {
                    assert!(
                        facets[&group].options.iter().any(|o| o == value),
                        "{} value '{}' missing from facet options",
                        group,
                        value
                    );
                }
            }
        }
    }
}
