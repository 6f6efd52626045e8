use std::ops::Index;

/// Geocentric cartesian coordinate triple (X, Y, Z), in meters.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Cartesian(pub [f64; 3]);

impl Cartesian {
    /// A `Cartesian` from its three components
    #[must_use]
    pub fn raw(x: f64, y: f64, z: f64) -> Cartesian {
        Cartesian([x, y, z])
    }

    /// A `Cartesian` consisting of 3 `0`s
    #[must_use]
    pub fn origin() -> Cartesian {
        Cartesian([0., 0., 0.])
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Euclidean distance between two points in the 3D space.
    ///
    /// Being computed along the straight line, i.e. through the interior of
    /// the ellipsoid, this is the chord length, and it is never larger than
    /// the corresponding [great ellipse](crate::GreatEllipse) distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geodetic::Cartesian;
    /// let t = 1000 as f64;
    /// let p0 = Cartesian::origin();
    /// let p1 = Cartesian::raw(t, t, t);
    /// assert_eq!(p0.hypot3(&p1), t.hypot(t).hypot(t));
    /// ```
    #[must_use]
    pub fn hypot3(&self, other: &Self) -> f64 {
        (self[0] - other[0])
            .hypot(self[1] - other[1])
            .hypot(self[2] - other[2])
    }
}

impl Index<usize> for Cartesian {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let c = Cartesian::raw(7., 8., 9.);
        assert_eq!((c.x(), c.y(), c.z()), (7., 8., 9.));
        assert_eq!([c[0], c[1], c[2]], c.0);
        assert_eq!(Cartesian::origin(), Cartesian::default());
    }

    #[test]
    fn chord() {
        let a = Cartesian::raw(1., 2., 3.);
        let b = Cartesian::raw(4., 6., 3.);
        assert_eq!(a.hypot3(&b), 5.);
        assert_eq!(b.hypot3(&a), 5.);
        assert_eq!(a.hypot3(&a), 0.);
    }
}
