//! Mesh-wide quality scan and histogram report.
//!
//! [`scan_quality`] visits every enabled triangle in ascending index order,
//! scores it (anisotropically when a metric field is supplied) and
//! accumulates [`QualityStats`]. [`write_report`] renders the statistics:
//!
//! ```text
//!
//!   -- MESH QUALITY   2
//!      BEST   1.000000  AVRG.   0.500000  WRST.   0.000000 (1)
//!      HISTOGRAMM:  50.00 % > 0.5
//!        0.8 < Q <   1.0         1    50.00 %
//!        ...
//! ```
//!
//! The histogram lines are only written from verbosity 5 on (see
//! [`QualityConfig::prints_histogram`]). Rows go from
//! the band holding the best quality down to the band holding the worst,
//! including empty bands in between.
//!
//! [`input_quality`] and [`output_quality`] bundle scan and report. They
//! differ only in the anisotropic evaluator: the input report uses the
//! element-constant metric ([`quality_aniso_explicit`]), the output report
//! the oracle measures ([`quality_aniso_surface`]).

mod config;
mod histogram;

pub use config::{ALPHAD, BADKAL, HISTOGRAM_VERBOSITY, QualityConfig};
pub use histogram::{BAND_WIDTH, BANDS, Histogram};

use crate::data::metric::MetricField;
use crate::geometry::metric_length::MetricLength;
use crate::geometry::quality::{quality_aniso_explicit, quality_aniso_surface, quality_iso};
use crate::mesh_error::QualityError;
use crate::topology::mesh::SurfaceMesh;
use crate::topology::point::TriangleId;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Which anisotropic evaluator a scan uses when a metric is present.
#[derive(Clone, Copy)]
pub enum ReportMode<'a> {
    /// Element-constant mean metric with quadratic-form edge lengths.
    Input,
    /// Surface measure and edge lengths from the given oracle.
    Output(&'a dyn MetricLength),
}

impl std::fmt::Debug for ReportMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportMode::Input => f.write_str("Input"),
            ReportMode::Output(_) => f.write_str("Output(..)"),
        }
    }
}

/// Per-element trace hook for diagnosing a scan.
///
/// While a scan runs, [`current`](Self::current) holds the element being
/// scored. Scores of watched elements are collected in [`hits`](Self::hits)
/// and logged at `trace` level. Each scan starts with an empty hit list, so a
/// context can be reused across scans.
#[derive(Clone, Debug, Default)]
pub struct DebugContext {
    watched: Vec<TriangleId>,
    current: Option<TriangleId>,
    hits: Vec<(TriangleId, f64)>,
}

impl DebugContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `t` to the watched elements.
    pub fn watch(&mut self, t: TriangleId) -> &mut Self {
        if !self.watched.contains(&t) {
            self.watched.push(t);
        }
        self
    }

    pub fn is_watched(&self, t: TriangleId) -> bool {
        self.watched.contains(&t)
    }

    /// Element currently being scored, `None` outside a scan.
    pub fn current(&self) -> Option<TriangleId> {
        self.current
    }

    /// `(element, scaled quality)` of every watched element scored by the
    /// latest scan.
    pub fn hits(&self) -> &[(TriangleId, f64)] {
        &self.hits
    }

    fn begin(&mut self) {
        self.hits.clear();
        self.current = None;
    }

    fn enter(&mut self, t: TriangleId) {
        self.current = Some(t);
    }

    fn record(&mut self, t: TriangleId, q: f64) {
        if self.is_watched(t) {
            log::trace!("watched triangle {t}: quality {q:.6}");
            self.hits.push((t, q));
        }
    }

    fn leave(&mut self) {
        self.current = None;
    }
}

/// Aggregate result of a quality scan. All qualities are scaled by
/// `alphad`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityStats {
    /// Number of scored (enabled) elements.
    pub count: usize,
    /// Number of disabled elements skipped.
    pub skipped: usize,
    /// Worst quality, starting from 1.
    pub min: f64,
    /// First element reaching `min`; `None` if no element scored below 1.
    pub worst: Option<TriangleId>,
    /// Best quality, starting from 0.
    pub max: f64,
    pub sum: f64,
    /// Number of elements scoring strictly above 0.5.
    pub above_half: usize,
    pub histogram: Histogram,
    /// Some element scored below `badkal`.
    pub has_bad_elements: bool,
}

impl Default for QualityStats {
    fn default() -> Self {
        Self {
            count: 0,
            skipped: 0,
            min: 1.0,
            worst: None,
            max: 0.0,
            sum: 0.0,
            above_half: 0,
            histogram: Histogram::default(),
            has_bad_elements: false,
        }
    }
}

impl QualityStats {
    /// Mean quality, 0 for an empty scan.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Percentage of elements scoring above 0.5.
    pub fn percent_above_half(&self) -> f64 {
        self.percent(self.above_half)
    }

    fn percent(&self, n: usize) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            100.0 * (n as f64 / self.count as f64)
        }
    }

    fn accumulate(&mut self, t: TriangleId, q: f64, badkal: f64) {
        self.count += 1;
        if q < self.min {
            self.min = q;
            self.worst = Some(t);
        }
        if q > 0.5 {
            self.above_half += 1;
        }
        if q < badkal {
            self.has_bad_elements = true;
        }
        self.sum += q;
        self.max = self.max.max(q);
        self.histogram.add(q);
    }
}

/// Score every enabled triangle of `mesh` and accumulate statistics.
///
/// With `metric` set, elements are scored by the evaluator selected by
/// `mode`; otherwise isotropically.
pub fn scan_quality(
    mesh: &SurfaceMesh,
    metric: Option<&MetricField>,
    mode: ReportMode<'_>,
    config: &QualityConfig,
    mut debug: Option<&mut DebugContext>,
) -> QualityStats {
    let mut stats = QualityStats::default();
    if let Some(dbg) = debug.as_deref_mut() {
        dbg.begin();
    }
    for (id, tri) in mesh.triangles() {
        if !tri.enabled {
            stats.skipped += 1;
            continue;
        }
        if let Some(dbg) = debug.as_deref_mut() {
            dbg.enter(id);
        }
        let raw = match (metric, mode) {
            (Some(met), ReportMode::Input) => quality_aniso_explicit(mesh, met, id),
            (Some(met), ReportMode::Output(oracle)) => quality_aniso_surface(mesh, met, id, oracle),
            (None, _) => quality_iso(mesh, id),
        };
        let q = config.alphad * raw;
        if q < config.badkal {
            log::debug!("triangle {id} below quality threshold: {q:.6}");
        }
        stats.accumulate(id, q, config.badkal);
        if let Some(dbg) = debug.as_deref_mut() {
            dbg.record(id, q);
        }
    }
    if let Some(dbg) = debug {
        dbg.leave();
    }
    stats
}

/// Write the formatted report for `stats` to `out`, with the histogram
/// section when `config` asks for it.
pub fn write_report<W: Write + ?Sized>(
    stats: &QualityStats,
    config: &QualityConfig,
    out: &mut W,
) -> Result<(), QualityError> {
    writeln!(out)?;
    writeln!(out, "  -- MESH QUALITY   {}", stats.count)?;
    let worst = stats
        .worst
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    writeln!(
        out,
        "     BEST   {:8.6}  AVRG.   {:8.6}  WRST.   {:8.6} ({})",
        stats.max,
        stats.average(),
        stats.min,
        worst
    )?;
    if !config.prints_histogram() {
        return Ok(());
    }

    writeln!(
        out,
        "     HISTOGRAMM:  {:6.2} % > 0.5",
        stats.percent_above_half()
    )?;
    let imax = Histogram::band(stats.max);
    let imin = Histogram::band(stats.min);
    for i in (imin..=imax).rev() {
        let (lo, hi) = Histogram::bounds(i);
        let n = stats.histogram.count(i);
        writeln!(
            out,
            "     {:5.1} < Q < {:5.1}   {:7}   {:6.2} %",
            lo,
            hi,
            n,
            stats.percent(n)
        )?;
    }
    Ok(())
}

fn run_report<W: Write + ?Sized>(
    mesh: &SurfaceMesh,
    metric: Option<&MetricField>,
    mode: ReportMode<'_>,
    config: &QualityConfig,
    out: &mut W,
    debug: Option<&mut DebugContext>,
) -> Result<QualityStats, QualityError> {
    config.validate()?;
    let stats = scan_quality(mesh, metric, mode, config, debug);
    log::info!(
        "mesh quality ({mode:?}): {} elements, best {:.6}, avg {:.6}, worst {:.6}",
        stats.count,
        stats.max,
        stats.average(),
        stats.min
    );
    if stats.has_bad_elements {
        log::warn!(
            "mesh contains elements below quality {:.3} (worst: triangle {:?})",
            config.badkal,
            stats.worst
        );
    }
    write_report(&stats, config, out)?;
    Ok(stats)
}

/// Scan with the element-constant anisotropic evaluator and write the report.
pub fn input_quality<W: Write + ?Sized>(
    mesh: &SurfaceMesh,
    metric: Option<&MetricField>,
    config: &QualityConfig,
    out: &mut W,
    debug: Option<&mut DebugContext>,
) -> Result<QualityStats, QualityError> {
    run_report(mesh, metric, ReportMode::Input, config, out, debug)
}

/// Scan with the oracle-based anisotropic evaluator and write the report.
pub fn output_quality<W: Write + ?Sized>(
    mesh: &SurfaceMesh,
    metric: Option<&MetricField>,
    oracle: &dyn MetricLength,
    config: &QualityConfig,
    out: &mut W,
    debug: Option<&mut DebugContext>,
) -> Result<QualityStats, QualityError> {
    run_report(mesh, metric, ReportMode::Output(oracle), config, out, debug)
}
