//! MODPATH basic-package deck writer.
//! Resolves layer types, `ibound` and porosity arrays and writes them as a
//! fixed-format `.mpbas` deck.

pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod service;

pub use error::{DeckError, DeckResult};
pub use format::array_writer::ArrayWriter;
pub use format::descriptor::{format_label, ArrayFormat, ElementKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::array::{ArrayShape, ArrayValues, Element, RawArray, ResolvedArray};
pub use model::grid::GridShape;
pub use model::options::{BasOptions, FaceDefault};
pub use registry::package_registry::{
    PackageKind, PackageLookup, PackageRegistry, PackageSnapshot, RegistryError, SiblingPackage,
};
pub use resolve::attribute_resolver::AttributeResolver;
pub use service::bas_service::{ModpathBas, PACKAGE_NAME};
pub use service::deck_record::DeckRecord;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
