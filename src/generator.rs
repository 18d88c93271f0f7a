// src/generator.rs

use std::iter;

use glam::DVec2;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::geometry::{GridResult, Point2, SectorRecord};

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Input of one grid generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub radius: f64,
    pub centroid: Point2,
    /// Number of equal angular dividers.
    pub sector_count: u32,
    /// Requested number of perimeter samples over the full circle.
    pub sample_frequency: u32,
    /// Reserved for concentric ring dividers. Currently has no effect.
    pub rings: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            radius: 1.0,
            centroid: Point2::ORIGIN,
            sector_count: 4,
            sample_frequency: 4000,
            rings: 0,
        }
    }
}

impl GridSpec {
    pub fn new(
        radius: f64,
        centroid: impl Into<Point2>,
        sector_count: u32,
        sample_frequency: u32,
    ) -> Self {
        Self {
            radius,
            centroid: centroid.into(),
            sector_count,
            sample_frequency,
            rings: 0,
        }
    }

    pub fn with_rings(mut self, rings: u32) -> Self {
        self.rings = rings;
        self
    }

    /// Checks radius and centroid, then derives the sample plan.
    pub fn validate(&self) -> Result<SamplePlan, GridError> {
        let radius = GridError::check_finite("radius", self.radius)?;
        if radius <= 0.0 {
            return Err(GridError::configuration(
                "radius",
                radius,
                "radius must be positive",
            ));
        }
        GridError::check_finite("centroid.x", self.centroid.x)?;
        GridError::check_finite("centroid.y", self.centroid.y)?;
        SamplePlan::for_spec(self)
    }
}

/// How the requested sampling frequency is spread over the sectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePlan {
    /// Angular steps between two consecutive sector boundaries.
    pub samples_per_sector: usize,
    /// `samples_per_sector * sector_count`, never more than requested.
    pub adjusted_sample_count: usize,
    /// Degrees covered by one sector.
    pub sector_angle_span: f64,
}

impl SamplePlan {
    pub fn for_spec(spec: &GridSpec) -> Result<Self, GridError> {
        if spec.sector_count == 0 {
            return Err(GridError::configuration(
                "sector_count",
                spec.sector_count,
                "at least one sector is required",
            ));
        }
        // Floor keeps every boundary on a generated sample.
        let samples_per_sector = (spec.sample_frequency / spec.sector_count) as usize;
        if samples_per_sector == 0 {
            return Err(GridError::configuration(
                "sample_frequency",
                spec.sample_frequency,
                "fewer samples than sectors",
            ));
        }
        Ok(Self {
            samples_per_sector,
            adjusted_sample_count: samples_per_sector * spec.sector_count as usize,
            sector_angle_span: FULL_TURN_DEGREES / f64::from(spec.sector_count),
        })
    }

    /// Angle in degrees of sample `index`, with `adjusted_sample_count`
    /// landing on 360.
    pub fn sample_angle(&self, index: usize) -> f64 {
        FULL_TURN_DEGREES * index as f64 / self.adjusted_sample_count as f64
    }

    /// Vertices in every sector ring: the arc samples of both boundaries
    /// and everything between them, plus the centroid at each end.
    pub fn ring_len(&self) -> usize {
        self.samples_per_sector + 3
    }
}

fn arc_point(angle_deg: f64, radius: f64, centroid: DVec2) -> Result<Point2, GridError> {
    // Scale first, then translate.
    let p = Point2::from(DVec2::from_angle(angle_deg.to_radians()) * radius + centroid);
    GridError::check_finite_point("arc point", p)
}

pub struct PolarGridGenerator;

impl PolarGridGenerator {
    pub fn generate(spec: &GridSpec) -> Result<GridResult, GridError> {
        let plan = spec.validate()?;
        if spec.rings != 0 {
            warn!(
                "rings = {} requested; ring dividers are not supported and are ignored",
                spec.rings
            );
        }
        debug!(
            "polar grid: radius {} at ({}, {}), {} sectors x {} samples ({} of {} requested)",
            spec.radius,
            spec.centroid.x,
            spec.centroid.y,
            spec.sector_count,
            plan.samples_per_sector,
            plan.adjusted_sample_count,
            spec.sample_frequency,
        );

        let n = plan.adjusted_sample_count;
        let centre = DVec2::from(spec.centroid);

        // Sample n coincides with sample 0, so only 0..n are evaluated and the
        // closing boundary reuses the first arc point. The ring closes exactly.
        let samples = (0..n)
            .map(|i| arc_point(plan.sample_angle(i), spec.radius, centre))
            .collect::<Result<Vec<_>, _>>()?;

        let s = plan.samples_per_sector;
        let sectors = (0..spec.sector_count)
            .map(|k| {
                let start = k as usize * s;
                let vertices: Vec<Point2> = iter::once(spec.centroid)
                    .chain((start..=start + s).map(|i| samples[i % n]))
                    .chain(iter::once(spec.centroid))
                    .collect();
                trace!(
                    "sector {}: {:.3}..{:.3} deg",
                    k + 1,
                    plan.sample_angle(start),
                    plan.sample_angle(start + s)
                );
                SectorRecord::new(k + 1, vertices)
            })
            .collect();

        Self::assemble(sectors, plan, spec.centroid)
    }

    fn assemble(
        sectors: Vec<SectorRecord>,
        plan: SamplePlan,
        centroid: Point2,
    ) -> Result<GridResult, GridError> {
        let expected = plan.ring_len();
        if let Some(bad) = sectors.iter().find(|s| s.vertices().len() != expected) {
            return Err(GridError::Assembly {
                id: bad.id(),
                expected,
                actual: bad.vertices().len(),
            });
        }
        Ok(GridResult::new(sectors, plan, centroid))
    }

    /// Perimeter of the full circle as `sample_frequency + 1` id-tagged points
    /// from 0° through 360°. The last point repeats the first.
    pub fn circle(
        radius: f64,
        centroid: impl Into<Point2>,
        sample_frequency: u32,
    ) -> Result<Vec<(u32, Point2)>, GridError> {
        if sample_frequency == 0 {
            return Err(GridError::configuration(
                "sample_frequency",
                sample_frequency,
                "at least one perimeter sample is required",
            ));
        }
        let spec = GridSpec::new(radius, centroid, 1, sample_frequency);
        let plan = spec.validate()?;
        let centre = DVec2::from(spec.centroid);
        let n = plan.adjusted_sample_count;

        let mut points = (0..n)
            .map(|i| arc_point(plan.sample_angle(i), radius, centre))
            .collect::<Result<Vec<_>, _>>()?;
        points.push(points[0]);

        Ok((1..).zip(points).collect())
    }
}

/// Generates the sector rings of a polar grid of `radius` around `centroid`.
///
/// `rings` is accepted for forward compatibility and ignored.
pub fn polar_grid(
    radius: f64,
    centroid: impl Into<Point2>,
    sector_count: u32,
    rings: u32,
    sample_frequency: u32,
) -> Result<GridResult, GridError> {
    let spec = GridSpec::new(radius, centroid, sector_count, sample_frequency).with_rings(rings);
    PolarGridGenerator::generate(&spec)
}
