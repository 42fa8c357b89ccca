//! Flow-model sibling packages and lookup by kind.

use crate::model::array::RawArray;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Flow-model package kinds the basic package reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageKind {
    /// Basic package; authoritative for `ibound`.
    Bas6,
    /// Block-centered flow; exposes `laycon`.
    Bcf6,
    /// Layer-property flow; exposes `laytyp`.
    Lpf,
    /// Upstream-weighting flow; exposes `laytyp`.
    Upw,
}

impl PackageKind {
    /// Package name as used by the flow model.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bas6 => "BAS6",
            Self::Bcf6 => "BCF6",
            Self::Lpf => "LPF",
            Self::Upw => "UPW",
        }
    }
}

impl Display for PackageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One sibling package of the flow model.
///
/// Accessors return `None` when the package does not carry the attribute.
pub trait SiblingPackage {
    fn kind(&self) -> PackageKind;

    /// Per-layer layer-type codes (`laycon` for BCF6, `laytyp` otherwise).
    fn layer_type(&self) -> Option<RawArray<i32>> {
        None
    }

    fn ibound(&self) -> Option<RawArray<i32>> {
        None
    }
}

/// Lookup of sibling packages by kind.
pub trait PackageLookup {
    fn get_package(&self, kind: PackageKind) -> Option<&dyn SiblingPackage>;
}

/// Plain-data sibling package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageSnapshot {
    pub kind: PackageKind,
    pub layer_type: Option<RawArray<i32>>,
    pub ibound: Option<RawArray<i32>>,
}

impl PackageSnapshot {
    pub fn new(kind: PackageKind) -> Self {
        Self {
            kind,
            layer_type: None,
            ibound: None,
        }
    }

    pub fn with_layer_type(mut self, layer_type: RawArray<i32>) -> Self {
        self.layer_type = Some(layer_type);
        self
    }

    pub fn with_ibound(mut self, ibound: RawArray<i32>) -> Self {
        self.ibound = Some(ibound);
        self
    }
}

impl SiblingPackage for PackageSnapshot {
    fn kind(&self) -> PackageKind {
        self.kind
    }

    fn layer_type(&self) -> Option<RawArray<i32>> {
        self.layer_type.clone()
    }

    fn ibound(&self) -> Option<RawArray<i32>> {
        self.ibound.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicatePackage(PackageKind),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePackage(kind) => write!(f, "package already registered: {kind}"),
        }
    }
}

impl Error for RegistryError {}

/// In-memory flow-model package registry; at most one package per kind.
#[derive(Default)]
pub struct PackageRegistry {
    packages: BTreeMap<PackageKind, Arc<dyn SiblingPackage>>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one package under its own kind.
    pub fn register(&mut self, package: Arc<dyn SiblingPackage>) -> Result<(), RegistryError> {
        let kind = package.kind();
        if self.packages.contains_key(&kind) {
            return Err(RegistryError::DuplicatePackage(kind));
        }
        self.packages.insert(kind, package);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Returns registered kinds in declaration order.
    pub fn kinds(&self) -> Vec<PackageKind> {
        self.packages.keys().copied().collect()
    }
}

impl PackageLookup for PackageRegistry {
    fn get_package(&self, kind: PackageKind) -> Option<&dyn SiblingPackage> {
        self.packages.get(&kind).map(|package| package.as_ref() as &dyn SiblingPackage)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        PackageKind, PackageLookup, PackageRegistry, PackageSnapshot, RegistryError,
    };
    use crate::model::array::RawArray;
    use std::sync::Arc;

    #[test]
    fn registers_and_looks_up_by_kind() {
        let mut registry = PackageRegistry::new();
        registry
            .register(Arc::new(
                PackageSnapshot::new(PackageKind::Lpf).with_layer_type(RawArray::Constant(1)),
            ))
            .expect("lpf should register");

        assert_eq!(registry.len(), 1);
        let lpf = registry.get_package(PackageKind::Lpf).expect("lpf present");
        assert_eq!(lpf.layer_type(), Some(RawArray::Constant(1)));
        assert!(lpf.ibound().is_none());
        assert!(registry.get_package(PackageKind::Bas6).is_none());
    }

    #[test]
    fn rejects_duplicate_kind() {
        let mut registry = PackageRegistry::new();
        registry
            .register(Arc::new(PackageSnapshot::new(PackageKind::Bas6)))
            .expect("first bas6 should register");
        let duplicate = registry.register(Arc::new(PackageSnapshot::new(PackageKind::Bas6)));
        assert_eq!(
            duplicate,
            Err(RegistryError::DuplicatePackage(PackageKind::Bas6))
        );
    }

    #[test]
    fn kinds_are_sorted() {
        let mut registry = PackageRegistry::new();
        for kind in [PackageKind::Upw, PackageKind::Bas6, PackageKind::Bcf6] {
            registry
                .register(Arc::new(PackageSnapshot::new(kind)))
                .expect("package should register");
        }
        assert_eq!(
            registry.kinds(),
            vec![PackageKind::Bas6, PackageKind::Bcf6, PackageKind::Upw]
        );
    }

    #[test]
    fn tags_match_flow_model_names() {
        assert_eq!(PackageKind::Bcf6.to_string(), "BCF6");
        assert_eq!(PackageKind::Upw.tag(), "UPW");
    }
}
