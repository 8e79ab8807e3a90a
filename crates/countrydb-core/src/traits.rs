// crates/countrydb-core/src/traits.rs
use crate::text::equals_folded;

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`] and get case-insensitive equality for free.
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Bavaria").is_named("BAVARIA"));
/// assert!(!Place("Bavaria").is_named("Bayern"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive exact name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }
}

/// Anything with a representative point on the globe.
///
/// Countries and subdivisions expose the centroid from the dataset; a value
/// of `(0.0, 0.0)` means the dataset carried no coordinates.
pub trait Coordinates {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    /// Great-circle distance in kilometres using the haversine formula.
    ///
    /// ```rust
    /// use countrydb_core::traits::Coordinates;
    ///
    /// struct Point(f64, f64);
    /// impl Coordinates for Point {
    ///     fn latitude(&self) -> f64 { self.0 }
    ///     fn longitude(&self) -> f64 { self.1 }
    /// }
    ///
    /// let paris = Point(48.8566, 2.3522);
    /// let berlin = Point(52.52, 13.405);
    /// let d = paris.distance_to(&berlin);
    /// assert!((d - 878.0).abs() < 5.0);
    /// ```
    fn distance_to<C: Coordinates + ?Sized>(&self, other: &C) -> f64 {
        let (lat1, lat2) = (self.latitude().to_radians(), other.latitude().to_radians());
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude() - self.longitude()).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point(f64, f64);

    impl Coordinates for Point {
        fn latitude(&self) -> f64 {
            self.0
        }
        fn longitude(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point(46.0, 2.0);
        assert!(p.distance_to(&p).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point(46.0, 2.0);
        let b = Point(51.0, 9.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn antipodes_are_half_the_circumference_apart() {
        let d = Point(0.0, 0.0).distance_to(&Point(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
