use nalgebra::Point3;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// One of the two backbone curves of the double helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Strand {
    A,
    B,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::A => write!(f, "A"),
            Strand::B => write!(f, "B"),
        }
    }
}

/// An opaque color token understood by a rendering backend.
///
/// The core never interprets the token: `"red"` and `"#FF0000"` are equally
/// valid. Cloning is cheap so that every primitive can own its color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(Arc<str>);

impl Color {
    pub fn new(token: &str) -> Self {
        Self(Arc::from(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(Arc::from(token))
    }
}

/// A colored point on one strand, the unit every backend draws.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive {
    pub position: Point3<f64>,
    pub color: Color,
    /// The base symbol the color was looked up for.
    pub symbol: char,
    pub strand: Strand,
    pub pair_index: usize,
}

/// A rung of the helix joining the two primitives of one base pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub from: RenderPrimitive,
    pub to: RenderPrimitive,
}

impl Connector {
    #[inline]
    pub fn pair_index(&self) -> usize {
        self.from.pair_index
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.from.position, &self.to.position)
    }
}

/// The complete, backend-agnostic output of the assembler.
///
/// `primitives` is ordered by pair index with the strand-A primitive before the
/// strand-B primitive of the same pair; `connectors[i]` joins pair `i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveSet {
    pub primitives: Vec<RenderPrimitive>,
    pub connectors: Vec<Connector>,
}

impl PrimitiveSet {
    /// Builds a set from `(strand A, strand B)` primitive pairs already in pair order.
    pub fn from_pairs(pairs: Vec<(RenderPrimitive, RenderPrimitive)>) -> Self {
        let mut set = Self {
            primitives: Vec::with_capacity(pairs.len() * 2),
            connectors: Vec::with_capacity(pairs.len()),
        };
        for (a, b) in pairs {
            set.connectors.push(Connector {
                from: a.clone(),
                to: b.clone(),
            });
            set.primitives.push(a);
            set.primitives.push(b);
        }
        set
    }

    pub fn base_pairs(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn strand(&self, strand: Strand) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(move |p| p.strand == strand)
    }
}
