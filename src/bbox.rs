use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the units of an accompanying CRS.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl BoundingBox {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Self {
        Self {
            minx,
            miny,
            maxx,
            maxy,
        }
    }

    /// Build from two opposite corners given in any order.
    pub fn from_corners(a: [f64; 2], b: [f64; 2]) -> Self {
        Self {
            minx: a[0].min(b[0]),
            miny: a[1].min(b[1]),
            maxx: a[0].max(b[0]),
            maxy: a[1].max(b[1]),
        }
    }

    /// Envelope of a set of points, `None` when empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bbox = Self::from_corners(first, first);
        for point in points {
            bbox.extend_point(point);
        }
        Some(bbox)
    }

    pub fn from_array(extent: [f64; 4]) -> Self {
        Self::new(extent[0], extent[1], extent[2], extent[3])
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.minx, self.miny, self.maxx, self.maxy]
    }

    pub fn extend_point(&mut self, point: [f64; 2]) {
        self.minx = self.minx.min(point[0]);
        self.miny = self.miny.min(point[1]);
        self.maxx = self.maxx.max(point[0]);
        self.maxy = self.maxy.max(point[1]);
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    pub fn center(&self) -> [f64; 2] {
        [(self.minx + self.maxx) / 2.0, (self.miny + self.maxy) / 2.0]
    }

    /// Corners as SW, NW, NE, SE.
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.minx, self.miny],
            [self.minx, self.maxy],
            [self.maxx, self.maxy],
            [self.maxx, self.miny],
        ]
    }

    /// Closed ring SW, NW, NE, SE, SW.
    pub fn ring(&self) -> Vec<Vec<f64>> {
        let [sw, nw, ne, se] = self.corners();
        [sw, nw, ne, se, sw].iter().map(|p| p.to_vec()).collect()
    }

    /// Inclusive containment of `other`.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.minx >= self.minx
            && other.miny >= self.miny
            && other.maxx <= self.maxx
            && other.maxy <= self.maxy
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(extent: [f64; 4]) -> Self {
        Self::from_array(extent)
    }
}
