use nalgebra as na;

/// Ordered samples of a conic in the reference frame [km].
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    points: Vec<na::Vector3<f64>>,
}

impl OrbitPath {
    pub fn new(points: Vec<na::Vector3<f64>>) -> Self {
        OrbitPath { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[na::Vector3<f64>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &na::Vector3<f64>> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&na::Vector3<f64>> {
        self.points.first()
    }

    /// Largest absolute coordinate over all finite points, 0 for an empty path.
    pub fn max_extent(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| p.iter())
            .filter(|c| c.is_finite())
            .fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }
}

impl<'a> IntoIterator for &'a OrbitPath {
    type Item = &'a na::Vector3<f64>;
    type IntoIter = std::slice::Iter<'a, na::Vector3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
