use shared_types::Catalog;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Parse the bundled service catalog, falling back to an empty one.
pub fn load_catalog() -> Catalog {
    match Catalog::from_json(BUNDLED_CATALOG) {
        Ok(catalog) => {
            tracing::info!(services = catalog.services.len(), "catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::error!(error = %e, "bundled catalog is invalid; showing no services");
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).unwrap();
        assert!(!catalog.services.is_empty());
        for service in &catalog.services {
            assert!(!service.examples.is_empty(), "{} has no examples", service.name);
            for example in &service.examples {
                assert!(example.example_path().is_ok());
            }
        }
    }

    #[test]
    fn bundled_catalog_has_documented_and_query_examples() {
        let catalog = load_catalog();
        let examples: Vec<_> = catalog.services.iter().flat_map(|s| &s.examples).collect();
        assert!(examples.iter().any(|e| e.documentation.is_some()));
        assert!(examples.iter().any(|e| e.has_query_params()));
        assert!(examples.iter().any(|e| !e.has_query_params()));
    }
}
