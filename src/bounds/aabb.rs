//! Axis-aligned extent of a point set.

use crate::primitives::Point2;
use num_traits::Float;

/// Smallest axis-aligned box holding a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    pub min: Point2<F>,
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Box spanning `min` to `max`. The corners are taken as given.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Bounds of `points`, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |bounds, p| Self {
            min: Point2::new(bounds.min.x.min(p.x), bounds.min.y.min(p.y)),
            max: Point2::new(bounds.max.x.max(p.x), bounds.max.y.max(p.y)),
        }))
    }

    /// Returns the midpoint of the box.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Length of the longer side.
    #[inline]
    pub fn spread(self) -> F {
        (self.max - self.min).max_abs_component()
    }

    /// Whether the box has collapsed to a single point.
    #[inline]
    pub fn is_point(self) -> bool {
        self.min == self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let bounds: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(bounds.min, Point2::new(-3.0, -1.0));
        assert_eq!(bounds.max, Point2::new(4.0, 5.0));
        assert_eq!(bounds.center(), Point2::new(0.5, 2.0));
        assert_eq!(bounds.spread(), 7.0);
        assert!(!bounds.is_point());
    }

    #[test]
    fn test_from_no_points() {
        assert!(Aabb2::<f64>::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_spread_uses_longer_side() {
        let wide: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
        let tall: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 6.0));
        assert_eq!(wide.spread(), 10.0);
        assert_eq!(tall.spread(), 6.0);
    }

    #[test]
    fn test_repeated_point_collapses() {
        let p = Point2::new(3.0_f64, -2.0);
        let bounds = Aabb2::from_points([p, p, p]).unwrap();
        assert!(bounds.is_point());
        assert_eq!(bounds.spread(), 0.0);
        assert_eq!(bounds.center(), p);
    }
}
