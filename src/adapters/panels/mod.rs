//! Panel Catalog Adapters
//!
//! - **BuiltinPanelCatalog** - the sets shipped with the application
//! - **YamlPanelCatalog** - sets authored in a YAML file

mod builtin;
mod yaml_catalog;

pub use builtin::BuiltinPanelCatalog;
pub use yaml_catalog::YamlPanelCatalog;
