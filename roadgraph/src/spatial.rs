//! Geographic types.

use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo::algorithm::haversine_distance::HaversineDistance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A location on the map in decimal degrees WGS84.
///
/// Points are compared, hashed and ordered by value, so they can be used directly as node
/// identifiers. `-0.0` and `0.0` are the same coordinate and all NaNs compare equal to each other.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Point {
  pub latitude: f64,
  pub longitude: f64,
}

impl Point {
  pub const fn new(latitude: f64, longitude: f64) -> Self {
    Point {
      latitude,
      longitude,
    }
  }

  /// A point with a NaN or infinite coordinate does not describe a location.
  pub fn is_finite(&self) -> bool {
    self.latitude.is_finite() && self.longitude.is_finite()
  }

  /// Great-circle distance in kilometres.
  pub fn distance(&self, other: &Point) -> f64 {
    haversine_distance(self, other)
  }

  /// Planar distance in coordinate units.
  pub fn euclidean_distance(&self, other: &Point) -> f64 {
    to_geo(self).euclidean_distance(&to_geo(other))
  }

  pub(crate) fn coords(&self) -> [f64; 2] {
    [self.latitude, self.longitude]
  }

  fn key(&self) -> (u64, u64) {
    (canonical_bits(self.latitude), canonical_bits(self.longitude))
  }
}

fn canonical_bits(value: f64) -> u64 {
  if value.is_nan() {
    f64::NAN.to_bits()
  } else if value == 0.0 {
    0
  } else {
    value.to_bits()
  }
}

fn canonical(value: f64) -> f64 {
  f64::from_bits(canonical_bits(value))
}

// geo expects (x, y) = (longitude, latitude)
fn to_geo(p: &Point) -> geo::Point<f64> {
  geo::Point::new(p.longitude, p.latitude)
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_distance(from: &Point, to: &Point) -> f64 {
  to_geo(from).haversine_distance(&to_geo(to)) / 1000.0
}

impl PartialEq for Point {
  fn eq(&self, other: &Self) -> bool {
    self.key() == other.key()
  }
}

impl Eq for Point {}

impl Hash for Point {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.key().hash(state);
  }
}

impl Ord for Point {
  fn cmp(&self, other: &Self) -> Ordering {
    canonical(self.latitude)
      .total_cmp(&canonical(other.latitude))
      .then_with(|| canonical(self.longitude).total_cmp(&canonical(other.longitude)))
  }
}

impl PartialOrd for Point {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Lat: {}, Lon: {}", self.latitude, self.longitude)
  }
}

/// How the straight-line distance between two points is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
  /// Great-circle distance in kilometres. Matches road lengths given in kilometres.
  Haversine,
  /// Planar distance in coordinate units. Matches road lengths given in coordinate units.
  Euclidean,
}

impl Default for DistanceMetric {
  fn default() -> Self {
    DistanceMetric::Haversine
  }
}

impl DistanceMetric {
  pub fn measure(&self, from: &Point, to: &Point) -> f64 {
    match self {
      DistanceMetric::Haversine => from.distance(to),
      DistanceMetric::Euclidean => from.euclidean_distance(to),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_value_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
    assert_eq!(Point::new(0.0, -0.0), Point::new(-0.0, 0.0));

    let set: HashSet<Point> = vec![
      Point::new(0.0, 0.0),
      Point::new(-0.0, 0.0),
      Point::new(1.0, 1.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn test_nan_is_reflexive() {
    let p = Point::new(f64::NAN, 1.0);
    assert_eq!(p, p);
    assert!(!p.is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    assert!(Point::new(32.86, -117.22).is_finite());
  }

  #[test]
  fn test_ordering() {
    let mut points = vec![
      Point::new(1.0, 1.0),
      Point::new(0.0, 5.0),
      Point::new(1.0, -1.0),
      Point::new(-3.0, 0.0),
    ];
    points.sort();
    assert_eq!(
      points,
      vec![
        Point::new(-3.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
      ]
    );
  }

  #[test]
  fn test_haversine_distance() {
    // One hundredth of a degree of latitude is ~1.112 km
    let from = Point::new(52.46, 13.34);
    let to = Point::new(52.47, 13.34);
    assert!((from.distance(&to) - 1.112).abs() < 1e-3);
    assert!((to.distance(&from) - from.distance(&to)).abs() < 1e-12);
    assert_eq!(from.distance(&from), 0.0);
  }

  #[test]
  fn test_euclidean_distance() {
    let from = Point::new(0.0, 0.0);
    let to = Point::new(3.0, 4.0);
    assert!((from.euclidean_distance(&to) - 5.0).abs() < 1e-12);
    assert!((DistanceMetric::Euclidean.measure(&from, &to) - 5.0).abs() < 1e-12);
  }

  #[test]
  fn test_display() {
    assert_eq!(Point::new(1.5, -2.0).to_string(), "Lat: 1.5, Lon: -2");
  }
}
