//! Resolution of per-layer and per-cell attributes.
//!
//! # Responsibility
//! - Prefer an explicit caller value; otherwise consult flow-model siblings.
//! - Turn the chosen raw value into a shape-checked `ResolvedArray`.
//!
//! # Invariants
//! - Explicit values never trigger a sibling lookup.
//! - Layer-type priority steps run in declaration order, each one deciding
//!   on its own whether to overwrite the running result.

use crate::error::{DeckError, DeckResult};
use crate::model::array::{RawArray, ResolvedArray};
use crate::model::grid::GridShape;
use crate::registry::package_registry::{PackageKind, PackageLookup};
use log::debug;

pub const LAYTYP: &str = "laytyp";
pub const IBOUND: &str = "ibound";

const NO_FLOW_MODEL: &str = "no explicit value and no flow model attached";

/// When a layer-type step may replace the running result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overwrite {
    Always,
    /// Only a result that came from the given kind is replaced.
    OnlyOver(PackageKind),
}

/// Layer-type sources in evaluation order.
///
/// UPW only ever replaces a BCF6 value; on its own it is never taken.
const LAYER_TYPE_CHAIN: &[(PackageKind, Overwrite)] = &[
    (PackageKind::Bcf6, Overwrite::Always),
    (PackageKind::Lpf, Overwrite::Always),
    (PackageKind::Upw, Overwrite::OnlyOver(PackageKind::Bcf6)),
];

/// Resolves attributes against an optional flow model.
pub struct AttributeResolver<'a> {
    grid: GridShape,
    flow_model: Option<&'a dyn PackageLookup>,
}

impl<'a> AttributeResolver<'a> {
    pub fn new(grid: GridShape, flow_model: Option<&'a dyn PackageLookup>) -> Self {
        Self { grid, flow_model }
    }

    /// Resolves the per-layer layer-type codes.
    ///
    /// # Errors
    /// - `MissingRequiredAttribute` when no explicit value is given and no
    ///   step of the priority chain yields one.
    /// - `ShapeMismatch` when the chosen value is not one per layer.
    pub fn layer_type(&self, explicit: Option<RawArray<i32>>) -> DeckResult<ResolvedArray> {
        if let Some(raw) = explicit {
            return ResolvedArray::per_layer(LAYTYP, &self.grid, raw);
        }

        let flow_model = self.require_flow_model(LAYTYP)?;
        let mut current: Option<(PackageKind, RawArray<i32>)> = None;
        for &(kind, overwrite) in LAYER_TYPE_CHAIN {
            let Some(value) = flow_model
                .get_package(kind)
                .and_then(|package| package.layer_type())
            else {
                continue;
            };
            let take = match overwrite {
                Overwrite::Always => true,
                Overwrite::OnlyOver(source) => {
                    matches!(current, Some((found, _)) if found == source)
                }
            };
            if take {
                current = Some((kind, value));
            }
        }

        match current {
            Some((kind, raw)) => {
                debug!("event=attribute_resolve module=resolve attribute={LAYTYP} source={kind}");
                ResolvedArray::per_layer(LAYTYP, &self.grid, raw)
            }
            None => Err(DeckError::MissingRequiredAttribute {
                attribute: LAYTYP.to_string(),
                reason: "no BCF6, LPF or UPW package supplies layer types",
            }),
        }
    }

    /// Resolves the per-cell active/no-flow indicator array.
    ///
    /// Without an explicit value only the BAS6 package is consulted.
    pub fn ibound(&self, explicit: Option<RawArray<i32>>) -> DeckResult<ResolvedArray> {
        if let Some(raw) = explicit {
            return ResolvedArray::per_cell(IBOUND, &self.grid, raw);
        }

        let flow_model = self.require_flow_model(IBOUND)?;
        let raw = flow_model
            .get_package(PackageKind::Bas6)
            .and_then(|package| package.ibound())
            .ok_or_else(|| DeckError::MissingRequiredAttribute {
                attribute: IBOUND.to_string(),
                reason: "could not get ibound from the BAS6 package",
            })?;
        debug!("event=attribute_resolve module=resolve attribute={IBOUND} source=BAS6");
        ResolvedArray::per_cell(IBOUND, &self.grid, raw)
    }

    /// Resolves a per-cell real array that has no sibling source.
    pub fn real_cells(&self, name: &str, raw: RawArray<f64>) -> DeckResult<ResolvedArray> {
        ResolvedArray::per_cell(name, &self.grid, raw)
    }

    fn require_flow_model(&self, attribute: &str) -> DeckResult<&'a dyn PackageLookup> {
        self.flow_model
            .ok_or_else(|| DeckError::MissingRequiredAttribute {
                attribute: attribute.to_string(),
                reason: NO_FLOW_MODEL,
            })
    }
}
