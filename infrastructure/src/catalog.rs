//! Catalog assembly from configuration

use crate::config::FileConfig;
use delegator_domain::{CatalogError, ExpertCatalog, ExpertDescriptor};

/// The built-in catalog extended with the `[experts]` table.
///
/// Overridden built-ins keep their position. New experts are appended
/// sorted by key, whatever their order in the file.
pub fn build_catalog(config: &FileConfig) -> Result<ExpertCatalog, CatalogError> {
    ExpertCatalog::builtin().with_overrides(
        config
            .experts
            .iter()
            .map(|(key, persona)| ExpertDescriptor::new(key.as_str(), persona.as_str())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_builtin_catalog() {
        let catalog = build_catalog(&FileConfig::default()).unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.keys().next(), Some("csecExpert"));
    }

    #[test]
    fn test_experts_table_overrides_and_extends() {
        let config: FileConfig = toml::from_str(
            r#"
[experts]
aiExpert = "You are a machine learning researcher."
rustExpert = "You are a Rust expert."
"#,
        )
        .unwrap();

        let catalog = build_catalog(&config).unwrap();

        assert_eq!(catalog.len(), 21);
        assert_eq!(
            catalog.lookup("aiExpert"),
            Some("You are a machine learning researcher.")
        );
        assert_eq!(catalog.keys().nth(1), Some("aiExpert"));
        assert_eq!(catalog.keys().last(), Some("rustExpert"));
    }

    #[test]
    fn test_new_experts_are_appended_in_key_order() {
        let config: FileConfig = toml::from_str(
            r#"
[experts]
zetaExpert = "You are the last word."
alphaExpert = "You are the first word."
"#,
        )
        .unwrap();

        let catalog = build_catalog(&config).unwrap();

        let appended: Vec<_> = catalog.keys().skip(20).collect();
        assert_eq!(appended, vec!["alphaExpert", "zetaExpert"]);
    }

    #[test]
    fn test_blank_persona_is_rejected() {
        let mut config = FileConfig::default();
        config.experts.insert("rustExpert".to_string(), String::new());

        assert_eq!(
            build_catalog(&config).unwrap_err(),
            CatalogError::EmptyPersona("rustExpert".to_string())
        );
    }
}
