// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::generator::SamplePlan;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for DVec2 {
    fn from(p: Point2) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One angular divider of the grid as a closed ring:
/// centroid, arc points in increasing angle, centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorRecord {
    id: u32,
    vertices: Vec<Point2>,
}

impl SectorRecord {
    pub(crate) fn new(id: u32, vertices: Vec<Point2>) -> Self {
        Self { id, vertices }
    }

    /// 1-based position of the sector in angular order, starting at 0°.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// The perimeter points, without the centroid at either end.
    pub fn arc(&self) -> &[Point2] {
        match self.vertices.len() {
            0..=2 => &[],
            n => &self.vertices[1..n - 1],
        }
    }

    pub fn first_arc_point(&self) -> Option<&Point2> {
        self.arc().first()
    }

    pub fn last_arc_point(&self) -> Option<&Point2> {
        self.arc().last()
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` view of the ring.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    /// Shoelace area of the ring.
    pub fn area(&self) -> f64 {
        let count = self.vertices.len();
        if count < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..count {
            let j = (i + 1) % count;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area.abs() / 2.0
    }
}

/// The sectors of one generated grid, ordered by id.
#[derive(Clone, Debug, PartialEq)]
pub struct GridResult {
    sectors: Vec<SectorRecord>,
    plan: SamplePlan,
    centroid: Point2,
}

impl GridResult {
    pub(crate) fn new(sectors: Vec<SectorRecord>, plan: SamplePlan, centroid: Point2) -> Self {
        Self {
            sectors,
            plan,
            centroid,
        }
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectorRecord> {
        self.sectors.iter()
    }

    pub fn sectors(&self) -> &[SectorRecord] {
        &self.sectors
    }

    /// Looks a sector up by its 1-based id.
    pub fn get(&self, id: u32) -> Option<&SectorRecord> {
        let index = (id as usize).checked_sub(1)?;
        self.sectors.get(index)
    }

    /// Ring length shared by every sector.
    pub fn vertex_count(&self) -> usize {
        self.sectors.first().map_or(0, |s| s.vertices.len())
    }

    pub fn plan(&self) -> &SamplePlan {
        &self.plan
    }

    pub fn centroid(&self) -> Point2 {
        self.centroid
    }

    pub fn total_area(&self) -> f64 {
        self.sectors.iter().map(SectorRecord::area).sum()
    }

    /// Every vertex of every sector, in id order, split into parallel x and y
    /// series.
    pub fn flatten_xy(&self) -> (Vec<f64>, Vec<f64>) {
        let total = self.len() * self.vertex_count();
        let mut xs = Vec::with_capacity(total);
        let mut ys = Vec::with_capacity(total);
        for p in self.sectors.iter().flat_map(|s| s.vertices.iter()) {
            xs.push(p.x);
            ys.push(p.y);
        }
        (xs, ys)
    }
}

impl<'a> IntoIterator for &'a GridResult {
    type Item = &'a SectorRecord;
    type IntoIter = std::slice::Iter<'a, SectorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sectors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_sector() -> SectorRecord {
        SectorRecord::new(
            1,
            vec![
                Point2::ORIGIN,
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
                Point2::ORIGIN,
            ],
        )
    }

    #[test]
    fn arc_strips_both_centroids() {
        let sector = unit_square_sector();
        assert_eq!(sector.arc().len(), 3);
        assert_eq!(sector.first_arc_point(), Some(&Point2::new(1.0, 0.0)));
        assert_eq!(sector.last_arc_point(), Some(&Point2::new(0.0, 1.0)));
    }

    #[test]
    fn area_of_closed_square_ring() {
        assert!((unit_square_sector().area() - 1.0).abs() < 1e-12);
        assert_eq!(SectorRecord::new(1, vec![Point2::ORIGIN]).area(), 0.0);
    }

    #[test]
    fn flat_view_interleaves_coordinates() {
        let sector = unit_square_sector();
        assert_eq!(
            sector.as_flat(),
            &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn point_conversions_round_trip_through_glam() {
        let p = Point2::new(3.0, -4.0);
        let v: DVec2 = p.into();
        assert_eq!(Point2::from(v), p);
        assert_eq!(p.distance(&Point2::ORIGIN), 5.0);
        assert!(p.is_finite());
        assert!(!Point2::new(1.0, f64::NAN).is_finite());
    }
}
