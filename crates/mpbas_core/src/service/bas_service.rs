//! MODPATH basic package: eager resolution and deck output.
//!
//! # Responsibility
//! - Resolve every array of the package once, at construction.
//! - Render the deck in its fixed record order and write it to a stream or file.
//!
//! # Invariants
//! - Record order is: heading, sentinels, face defaults, `laytyp`, `ibound`,
//!   `prsity`, `prsityCB`.
//! - The whole deck is rendered before the first byte reaches the output.

use crate::error::DeckResult;
use crate::format::array_writer::ArrayWriter;
use crate::format::descriptor::{format_label, ArrayFormat};
use crate::model::array::ResolvedArray;
use crate::model::grid::GridShape;
use crate::model::options::{BasOptions, FaceDefault};
use crate::registry::package_registry::PackageLookup;
use crate::resolve::attribute_resolver::AttributeResolver;
use crate::service::deck_record::DeckRecord;
use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Package name recorded in the name file.
pub const PACKAGE_NAME: &str = "MPBAS";

/// `hnoflo` and `hdry`, one `F16.6` field each.
const SENTINEL: ArrayFormat = ArrayFormat::real(16, 6, 2);
const FACE_COUNT: ArrayFormat = ArrayFormat::integer(4, 1);
const IFACE: ArrayFormat = ArrayFormat::integer(2, 1);
const BUDGET_LABEL_WIDTH: usize = 20;

/// Resolved MODPATH basic package.
#[derive(Debug, Clone)]
pub struct ModpathBas {
    grid: GridShape,
    heading: [String; 2],
    hnoflo: f64,
    hdry: f64,
    face_defaults: Vec<FaceDefault>,
    laytyp: ResolvedArray,
    ibound: ResolvedArray,
    prsity: ResolvedArray,
    prsity_cb: ResolvedArray,
    extension: String,
    unit_number: u32,
}

impl ModpathBas {
    /// Resolves all package arrays against `grid` and an optional flow model.
    ///
    /// # Errors
    /// - `MissingRequiredAttribute` when `laytyp` or `ibound` has no source.
    /// - `ShapeMismatch` when any supplied value does not fit `grid`.
    pub fn new(
        grid: GridShape,
        flow_model: Option<&dyn PackageLookup>,
        options: BasOptions,
    ) -> DeckResult<Self> {
        let resolver = AttributeResolver::new(grid, flow_model);
        let resolved = resolver.layer_type(options.laytyp).and_then(|laytyp| {
            Ok((
                laytyp,
                resolver.ibound(options.ibound)?,
                resolver.real_cells("prsity", options.prsity)?,
                resolver.real_cells("prsityCB", options.prsity_cb)?,
            ))
        });

        let (laytyp, ibound, prsity, prsity_cb) = match resolved {
            Ok(arrays) => arrays,
            Err(err) => {
                error!(
                    "event=bas_resolve module=service status=error flow_model={} error={}",
                    flow_model.is_some(),
                    err
                );
                return Err(err);
            }
        };
        info!(
            "event=bas_resolve module=service status=ok layers={} rows={} columns={}",
            grid.layers(),
            grid.rows(),
            grid.columns()
        );

        Ok(Self {
            grid,
            heading: options.heading,
            hnoflo: options.hnoflo,
            hdry: options.hdry,
            face_defaults: options.face_defaults,
            laytyp,
            ibound,
            prsity,
            prsity_cb,
            extension: options.extension,
            unit_number: options.unit_number,
        })
    }

    pub fn grid(&self) -> GridShape {
        self.grid
    }

    pub fn laytyp(&self) -> &ResolvedArray {
        &self.laytyp
    }

    pub fn ibound(&self) -> &ResolvedArray {
        &self.ibound
    }

    pub fn prsity(&self) -> &ResolvedArray {
        &self.prsity
    }

    pub fn prsity_cb(&self) -> &ResolvedArray {
        &self.prsity_cb
    }

    pub fn face_defaults(&self) -> &[FaceDefault] {
        &self.face_defaults
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn unit_number(&self) -> u32 {
        self.unit_number
    }

    /// Output file name for a model, e.g. `model.mpbas`.
    pub fn file_name(&self, model_name: &str) -> String {
        format!("{model_name}.{}", self.extension)
    }

    /// Renders the complete deck without touching any output.
    ///
    /// # Errors
    /// - `FieldOverflow` when a header value or array value is wider than its
    ///   fixed field.
    /// - `ShapeMismatch` / `KindMismatch` from the array writer.
    pub fn render(&self) -> DeckResult<DeckRecord> {
        let mut record = DeckRecord::new();
        for line in &self.heading {
            record.push(format!("#{line}"));
        }
        record.push(format!(
            "{} {}",
            SENTINEL.format_real("hnoflo", self.hnoflo)?,
            SENTINEL.format_real("hdry", self.hdry)?
        ));

        record.push(FACE_COUNT.format_count("face_defaults", self.face_defaults.len())?);
        for face in &self.face_defaults {
            record.push(format_label("budget_label", &face.budget_label, BUDGET_LABEL_WIDTH)?);
            record.push(IFACE.format_integer("iface", face.iface)?);
        }

        let writer = ArrayWriter::new(self.grid);
        record.extend(writer.write_array(&self.laytyp, &ArrayFormat::LAYER_TYPE)?);
        record.extend(writer.write_array(&self.ibound, &ArrayFormat::INTEGER_GRID)?);
        record.extend(writer.write_array(&self.prsity, &ArrayFormat::REAL_GRID)?);
        record.extend(writer.write_array(&self.prsity_cb, &ArrayFormat::REAL_GRID)?);
        Ok(record)
    }

    /// Renders the deck and writes it to `out`.
    pub fn write_deck<W: Write>(&self, out: &mut W) -> DeckResult<()> {
        let record = self.render()?;
        record.write_to(out)?;
        Ok(())
    }

    /// Writes `<model_name>.<extension>` into `dir` and returns its path.
    ///
    /// # Side effects
    /// - Creates or truncates the deck file; a failed write may leave a
    ///   partial file that callers should discard.
    /// - Emits `deck_write` logging events with duration and status.
    pub fn write_file(&self, dir: impl AsRef<Path>, model_name: &str) -> DeckResult<PathBuf> {
        let started_at = Instant::now();
        let path = dir.as_ref().join(self.file_name(model_name));
        info!(
            "event=deck_write module=service status=start unit={} path={}",
            self.unit_number,
            path.display()
        );

        match self.write_path(&path) {
            Ok(()) => {
                info!(
                    "event=deck_write module=service status=ok duration_ms={} path={}",
                    started_at.elapsed().as_millis(),
                    path.display()
                );
                Ok(path)
            }
            Err(err) => {
                error!(
                    "event=deck_write module=service status=error duration_ms={} path={} error={}",
                    started_at.elapsed().as_millis(),
                    path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    fn write_path(&self, path: &Path) -> DeckResult<()> {
        let record = self.render()?;
        let mut out = BufWriter::new(File::create(path)?);
        record.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
