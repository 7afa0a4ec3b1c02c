use super::models::primitive::Strand;
use nalgebra::Point3;
use std::f64::consts::PI;

/// Parameter range swept by every helix, four full turns.
///
/// The number of turns is fixed no matter how many base pairs are drawn, so
/// larger counts produce a denser helix rather than a longer one.
pub const HELIX_SPAN: f64 = 8.0 * PI;

/// Shape constants of the parametric double helix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixParams {
    /// Distance from the helix axis to each backbone.
    pub radius: f64,
    /// Rise along the axis per radian of the curve parameter.
    pub vertical_stretch: f64,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 4.0,
            vertical_stretch: 4.0,
        }
    }
}

/// Sizes of the glyphs a backend draws around primitives and connectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRadii {
    pub sphere: f64,
    pub cylinder: f64,
}

impl Default for GlyphRadii {
    fn default() -> Self {
        Self {
            sphere: 0.3,
            cylinder: 0.15,
        }
    }
}

/// The two backbone curves sampled at `len()` index-aligned points.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixCoordinateSet {
    strand_a: Vec<Point3<f64>>,
    strand_b: Vec<Point3<f64>>,
}

impl HelixCoordinateSet {
    /// Samples both strands at `base_pairs` evenly spaced parameter values.
    ///
    /// Strand A follows `(R cos t, R sin t, S t)` and strand B is the same curve
    /// phase-shifted by π, so each pair sits at equal height on opposite sides of
    /// the axis. The output depends only on the arguments.
    pub fn generate(base_pairs: usize, params: &HelixParams) -> Self {
        let mut strand_a = Vec::with_capacity(base_pairs);
        let mut strand_b = Vec::with_capacity(base_pairs);

        for i in 0..base_pairs {
            let t = sample_parameter(i, base_pairs);
            let z = params.vertical_stretch * t;
            strand_a.push(Point3::new(
                params.radius * t.cos(),
                params.radius * t.sin(),
                z,
            ));
            strand_b.push(Point3::new(
                params.radius * (t + PI).cos(),
                params.radius * (t + PI).sin(),
                z,
            ));
        }

        Self { strand_a, strand_b }
    }

    pub fn len(&self) -> usize {
        self.strand_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strand_a.is_empty()
    }

    pub fn strand_a(&self) -> &[Point3<f64>] {
        &self.strand_a
    }

    pub fn strand_b(&self) -> &[Point3<f64>] {
        &self.strand_b
    }

    pub fn strand(&self, strand: Strand) -> &[Point3<f64>] {
        match strand {
            Strand::A => &self.strand_a,
            Strand::B => &self.strand_b,
        }
    }

    pub fn pair(&self, index: usize) -> Option<(&Point3<f64>, &Point3<f64>)> {
        Some((self.strand_a.get(index)?, self.strand_b.get(index)?))
    }
}

// Inclusive of both ends of the span; a lone sample sits at t = 0.
fn sample_parameter(index: usize, samples: usize) -> f64 {
    if samples < 2 {
        return 0.0;
    }
    let last = samples - 1;
    if index == last {
        HELIX_SPAN
    } else {
        HELIX_SPAN * index as f64 / last as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};

    #[test]
    fn both_strands_have_one_point_per_base_pair() {
        for n in [1, 2, 3, 17, 200] {
            let coords = HelixCoordinateSet::generate(n, &HelixParams::default());
            assert_eq!(coords.len(), n);
            assert_eq!(coords.strand_a().len(), n);
            assert_eq!(coords.strand_b().len(), n);
        }
    }

    #[test]
    fn zero_base_pairs_yield_an_empty_set() {
        let coords = HelixCoordinateSet::generate(0, &HelixParams::default());
        assert!(coords.is_empty());
        assert!(coords.pair(0).is_none());
    }

    #[test]
    fn samples_span_zero_to_eight_pi_inclusive() {
        let params = HelixParams {
            radius: 1.0,
            vertical_stretch: 1.0,
        };
        let coords = HelixCoordinateSet::generate(5, &params);
        let first = coords.strand_a()[0];
        let last = coords.strand_a()[4];

        assert_eq!(first, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(last.z, HELIX_SPAN);
        assert!((last.x - 1.0).abs() < 1e-9);
        assert!(last.y.abs() < 1e-9);
        assert!((coords.strand_a()[2].z - HELIX_SPAN / 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_base_pair_sits_at_the_origin_of_the_parameter() {
        let coords = HelixCoordinateSet::generate(1, &HelixParams::default());
        assert_eq!(coords.strand_a()[0], Point3::new(4.0, 0.0, 0.0));
        assert_eq!(coords.strand_a()[0].z, coords.strand_b()[0].z);
    }

    #[test]
    fn strand_b_is_strand_a_rotated_half_a_turn_about_the_axis() {
        let coords = HelixCoordinateSet::generate(64, &HelixParams::default());
        let half_turn = Rotation3::from_axis_angle(&Vector3::z_axis(), PI);

        for (a, b) in coords.strand_a().iter().zip(coords.strand_b()) {
            assert_eq!(a.z, b.z);
            assert!((a.x + b.x).abs() < 1e-9);
            assert!((a.y + b.y).abs() < 1e-9);
            assert!((half_turn * a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn every_point_lies_on_the_configured_radius() {
        let params = HelixParams {
            radius: 2.5,
            vertical_stretch: 0.5,
        };
        let coords = HelixCoordinateSet::generate(33, &params);
        for p in coords.strand_a().iter().chain(coords.strand_b()) {
            let radial = (p.x * p.x + p.y * p.y).sqrt();
            assert!((radial - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn generation_is_bit_identical_across_calls() {
        let params = HelixParams::default();
        let first = HelixCoordinateSet::generate(101, &params);
        let second = HelixCoordinateSet::generate(101, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn strand_accessor_matches_named_accessors() {
        let coords = HelixCoordinateSet::generate(4, &HelixParams::default());
        assert_eq!(coords.strand(Strand::A), coords.strand_a());
        assert_eq!(coords.strand(Strand::B), coords.strand_b());
        let (a, b) = coords.pair(3).unwrap();
        assert_eq!(a, &coords.strand_a()[3]);
        assert_eq!(b, &coords.strand_b()[3]);
    }
}
