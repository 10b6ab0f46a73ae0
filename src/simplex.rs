//! The working set of `dimension + 1` vertices of a Nelder-Mead run.
//!
//! Vertices are addressed by position. Excluding "the worst vertex" from a
//! centroid or keeping "the best vertex" fixed during a shrink always means
//! one slot, never every vertex that happens to hold equal coordinates.
//!
//! `sorted` and `compressed` derive new simplexes and leave `self` alone;
//! `replace` is the only operation that changes a simplex in place.

use std::ops::Index;

use crate::comparator::ValueComparator;
use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::point::Point;

/// Offsets used to grow the initial simplex from the start point.
///
/// Vertex `i` is vertex `i - 1` moved by `large` along axis `i - 1` and by
/// `small` along every other axis, so the offsets accumulate along the chain.
/// The two must differ for the simplex to span the whole space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialSteps {
    pub large: f64,
    pub small: f64,
}

impl Default for InitialSteps {
    fn default() -> Self {
        InitialSteps {
            large: 0.5,
            small: 0.1,
        }
    }
}

impl InitialSteps {
    pub fn validate(&self) -> Result<()> {
        if !(self.large > 0.0 && self.large.is_finite()) {
            return Err(Error::invalid("large initial step must be positive and finite"));
        }
        if !(self.small > 0.0 && self.small.is_finite()) {
            return Err(Error::invalid("small initial step must be positive and finite"));
        }
        if self.large == self.small {
            return Err(Error::invalid(
                "initial steps must differ or the simplex is degenerate",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    vertices: Vec<Point>,
}

impl Simplex {
    /// Builds the initial simplex around `initial`, or around the origin
    /// when no start point is given.
    pub fn new(dimension: usize, initial: Option<&Point>, steps: &InitialSteps) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::invalid("dimension must be at least 1"));
        }
        steps.validate()?;

        let start = match initial {
            Some(p) => {
                Error::check_dimension(dimension, p.dimension())?;
                p.clone()
            }
            None => Point::zeros(dimension),
        };

        let mut vertices = Vec::with_capacity(dimension + 1);
        vertices.push(start);
        for i in 0..dimension {
            let mut next = vertices[i].clone();
            for j in 0..dimension {
                next[j] += if i == j { steps.large } else { steps.small };
            }
            vertices.push(next);
        }
        Ok(Simplex { vertices })
    }

    /// Wraps explicit vertices. There must be one more vertex than each
    /// vertex has coordinates.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        let dimension = match vertices.first() {
            Some(p) => p.dimension(),
            None => return Err(Error::invalid("a simplex needs at least two vertices")),
        };
        if dimension == 0 {
            return Err(Error::invalid("dimension must be at least 1"));
        }
        Error::check_dimension(dimension + 1, vertices.len())?;
        for v in &vertices {
            Error::check_dimension(dimension, v.dimension())?;
        }
        Ok(Simplex { vertices })
    }

    /// Number of vertices, always `dimension() + 1`.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<Point> {
        self.vertices.iter()
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// First vertex; the lowest valued one once sorted.
    pub fn best(&self) -> &Point {
        &self.vertices[0]
    }

    /// Last vertex; the highest valued one once sorted.
    pub fn worst(&self) -> &Point {
        &self.vertices[self.vertices.len() - 1]
    }

    /// A copy ordered ascending by function value. Each vertex is evaluated
    /// exactly once; equal values keep their relative order.
    pub fn sorted<F>(&self, comparator: &ValueComparator<F>) -> Result<Simplex>
    where
        F: Objective + ?Sized,
    {
        let values = self
            .vertices
            .iter()
            .map(|v| comparator.value(v))
            .collect::<Result<Vec<f64>>>()?;
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| ValueComparator::<F>::compare_values(values[a], values[b]));
        Ok(Simplex {
            vertices: order.iter().map(|&k| self.vertices[k].clone()).collect(),
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::invalid(format!(
                "vertex index {} out of range for a simplex of {} vertices",
                index,
                self.vertices.len()
            )))
        }
    }

    /// A copy with every vertex but the one at `best` moved halfway towards
    /// it: `best + (v - best) / 2`. Fails if `best` is not a vertex index.
    pub fn compressed(&self, best: usize) -> Result<Simplex> {
        self.check_index(best)?;
        let anchor = &self.vertices[best];
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(k, v)| {
                if k == best {
                    v.clone()
                } else {
                    anchor + &(&(v - anchor) / 2.0)
                }
            })
            .collect();
        Ok(Simplex { vertices })
    }

    /// Installs `point` at `index` and returns the vertex it displaced.
    pub fn replace(&mut self, index: usize, point: Point) -> Result<Point> {
        self.check_index(index)?;
        Error::check_dimension(self.dimension(), point.dimension())?;
        Ok(std::mem::replace(&mut self.vertices[index], point))
    }

    /// Coordinate-wise mean of all vertices, or of all but the one at
    /// `exclude`.
    pub fn centroid(&self, exclude: Option<usize>) -> Point {
        let mut sum = Point::zeros(self.dimension());
        let mut count = 0usize;
        for (k, v) in self.vertices.iter().enumerate() {
            if Some(k) != exclude {
                sum = &sum + v;
                count += 1;
            }
        }
        &sum / count as f64
    }

    /// Per-coordinate mean squared deviation of the vertices from their
    /// centroid.
    pub fn dispersion(&self) -> Point {
        let centre = self.centroid(None);
        let mut total = Point::zeros(self.dimension());
        for v in &self.vertices {
            let d = v - &centre;
            total = &total + &(&d * &d);
        }
        &total / self.vertices.len() as f64
    }
}

impl Index<usize> for Simplex {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.vertices[index]
    }
}

impl<'a> IntoIterator for &'a Simplex {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
