//! Caller configuration for the MODPATH basic package.
//!
//! Every field has a default, so partial documents deserialize cleanly.

use crate::model::array::RawArray;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HNOFLO: f64 = -9999.0;
pub const DEFAULT_HDRY: f64 = -8888.0;
pub const DEFAULT_POROSITY: f64 = 0.30;
pub const DEFAULT_EXTENSION: &str = "mpbas";
pub const DEFAULT_UNIT_NUMBER: u32 = 86;

/// Assigns flows of one budget term to a cell face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceDefault {
    /// Budget item name as it appears in the flow model budget file.
    pub budget_label: String,
    pub iface: i32,
}

impl FaceDefault {
    pub fn new(budget_label: impl Into<String>, iface: i32) -> Self {
        Self {
            budget_label: budget_label.into(),
            iface,
        }
    }
}

/// Inputs for building a `ModpathBas` package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasOptions {
    /// Heading text; each line is written behind a `#`.
    pub heading: [String; 2],
    /// Head assigned to inactive cells.
    pub hnoflo: f64,
    /// Head assigned to dry cells.
    pub hdry: f64,
    pub face_defaults: Vec<FaceDefault>,
    /// `None` resolves from the flow model's BCF6/LPF/UPW packages.
    pub laytyp: Option<RawArray<i32>>,
    /// `None` resolves from the flow model's BAS6 package.
    pub ibound: Option<RawArray<i32>>,
    pub prsity: RawArray<f64>,
    pub prsity_cb: RawArray<f64>,
    pub extension: String,
    pub unit_number: u32,
}

impl Default for BasOptions {
    fn default() -> Self {
        Self {
            heading: [
                "# MPBAS for Modpath, generated by mpbas_core.".to_string(),
                "#".to_string(),
            ],
            hnoflo: DEFAULT_HNOFLO,
            hdry: DEFAULT_HDRY,
            face_defaults: Vec::new(),
            laytyp: None,
            ibound: None,
            prsity: RawArray::Constant(DEFAULT_POROSITY),
            prsity_cb: RawArray::Constant(DEFAULT_POROSITY),
            extension: DEFAULT_EXTENSION.to_string(),
            unit_number: DEFAULT_UNIT_NUMBER,
        }
    }
}
