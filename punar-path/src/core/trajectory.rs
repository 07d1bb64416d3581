//! Ordered pose sequences and cropping.

use serde::{Deserialize, Serialize};

use super::pose::Pose2D;

/// Half-open index slice `[start, end)` applied to a run before resampling.
///
/// Either bound may be omitted. Bounds past the end are clamped, and a range
/// with `start >= end` selects nothing.
/// Used to drop time spent standing still at the start or end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRange {
    /// First index kept (inclusive).
    #[serde(default)]
    pub start: Option<usize>,
    /// First index dropped (exclusive).
    #[serde(default)]
    pub end: Option<usize>,
}

impl CropRange {
    /// Keep everything.
    pub const FULL: CropRange = CropRange {
        start: None,
        end: None,
    };

    /// Crop to `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True if this range keeps every sample.
    pub fn is_full(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Resolve to concrete `(start, end)` bounds for a sequence of `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let end = self.end.unwrap_or(len).min(len);
        let start = self.start.unwrap_or(0).min(end);
        (start, end)
    }
}

/// An ordered run of planar poses, index 0 recorded first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    poses: Vec<Pose2D>,
}

impl Trajectory {
    /// Wrap an ordered list of poses.
    pub fn from_poses(poses: Vec<Pose2D>) -> Self {
        Self { poses }
    }

    /// Number of poses.
    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// True if the run has no poses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Pose at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Pose2D> {
        self.poses.get(index)
    }

    /// Iterate over poses in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pose2D> {
        self.poses.iter()
    }

    /// Borrow the poses.
    pub fn poses(&self) -> &[Pose2D] {
        &self.poses
    }

    /// Take ownership of the poses.
    pub fn into_poses(self) -> Vec<Pose2D> {
        self.poses
    }

    /// Copy of the poses selected by `range`.
    pub fn crop(&self, range: CropRange) -> Trajectory {
        let (start, end) = range.bounds(self.len());
        Trajectory::from_poses(self.poses[start..end].to_vec())
    }

    /// Number of poses that are not the missing sentinel.
    pub fn matched_count(&self) -> usize {
        self.poses.iter().filter(|p| !p.is_missing()).count()
    }

    /// X column.
    pub fn xs(&self) -> Vec<f64> {
        self.poses.iter().map(|p| p.x).collect()
    }

    /// Y column.
    pub fn ys(&self) -> Vec<f64> {
        self.poses.iter().map(|p| p.y).collect()
    }

    /// Heading column.
    pub fn thetas(&self) -> Vec<f64> {
        self.poses.iter().map(|p| p.theta).collect()
    }
}

impl From<Vec<Pose2D>> for Trajectory {
    fn from(poses: Vec<Pose2D>) -> Self {
        Self::from_poses(poses)
    }
}

impl FromIterator<Pose2D> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Pose2D>>(iter: I) -> Self {
        Self::from_poses(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Pose2D;
    type IntoIter = std::slice::Iter<'a, Pose2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Trajectory {
        (0..n).map(|i| Pose2D::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_crop_full() {
        let traj = line(5);
        assert_eq!(traj.crop(CropRange::FULL), traj);
        assert!(CropRange::default().is_full());
    }

    #[test]
    fn test_crop_range() {
        let cropped = line(10).crop(CropRange::new(3, 6));
        assert_eq!(cropped.xs(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_crop_open_ended() {
        let head = line(10).crop(CropRange {
            start: None,
            end: Some(4),
        });
        assert_eq!(head.len(), 4);

        let tail = line(10).crop(CropRange {
            start: Some(7),
            end: None,
        });
        assert_eq!(tail.xs(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_crop_clamps() {
        assert_eq!(line(5).crop(CropRange::new(2, 1300)).len(), 3);
        assert!(line(5).crop(CropRange::new(300, 1800)).is_empty());
        assert!(line(5).crop(CropRange::new(4, 2)).is_empty());
    }

    #[test]
    fn test_matched_count() {
        let traj = Trajectory::from_poses(vec![
            Pose2D::new(0.0, 0.0, 0.0),
            Pose2D::MISSING,
            Pose2D::new(1.0, 0.0, 0.0),
        ]);
        assert_eq!(traj.matched_count(), 2);
        assert_eq!(traj.len(), 3);
    }
}
