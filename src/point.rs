//! A fixed-dimension real vector, the vertex type of a simplex.
//!
//! The dimension of a `Point` is set when it is built and never changes.
//! Every arithmetic operation produces a new `Point`; operands are left
//! untouched. The `checked_*` methods report dimension disagreements and
//! division by zero as errors. The operator impls are meant for code that
//! has already validated dimensions and panic when they disagree.

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use ndarray::prelude::*;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coords: Array1<f64>,
}

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Point {
            coords: Array1::from(coords),
        }
    }

    /// The origin of `dimension`-space.
    pub fn zeros(dimension: usize) -> Self {
        Point {
            coords: Array1::zeros(dimension),
        }
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.coords.iter()
    }

    pub fn view(&self) -> ArrayView1<f64> {
        self.coords.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coords.to_vec()
    }

    pub fn checked_add(&self, other: &Point) -> Result<Point> {
        Error::check_dimension(self.dimension(), other.dimension())?;
        Ok(Point::from(&self.coords + &other.coords))
    }

    pub fn checked_sub(&self, other: &Point) -> Result<Point> {
        Error::check_dimension(self.dimension(), other.dimension())?;
        Ok(Point::from(&self.coords - &other.coords))
    }

    /// Element-wise product.
    pub fn checked_mul(&self, other: &Point) -> Result<Point> {
        Error::check_dimension(self.dimension(), other.dimension())?;
        Ok(Point::from(&self.coords * &other.coords))
    }

    pub fn checked_div(&self, k: f64) -> Result<Point> {
        if k == 0.0 {
            return Err(Error::invalid("cannot divide a point by zero"));
        }
        Ok(Point::from(&self.coords / k))
    }

    pub fn scale(&self, k: f64) -> Point {
        Point::from(&self.coords * k)
    }

    #[inline]
    fn assert_same_dimension(&self, other: &Point) {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "dimension of points must be equal"
        );
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Point::new(coords)
    }
}

impl From<Array1<f64>> for Point {
    fn from(coords: Array1<f64>) -> Self {
        Point { coords }
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Point {
            coords: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = &'a f64;
    type IntoIter = ndarray::iter::Iter<'a, f64, Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.coords[index]
    }
}

impl<'a> Neg for &'a Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::from(-&self.coords)
    }
}

impl<'a, 'b> Add<&'b Point> for &'a Point {
    type Output = Point;

    fn add(self, rhs: &'b Point) -> Point {
        self.assert_same_dimension(rhs);
        Point::from(&self.coords + &rhs.coords)
    }
}

impl<'a, 'b> Sub<&'b Point> for &'a Point {
    type Output = Point;

    fn sub(self, rhs: &'b Point) -> Point {
        self.assert_same_dimension(rhs);
        Point::from(&self.coords - &rhs.coords)
    }
}

impl<'a, 'b> Mul<&'b Point> for &'a Point {
    type Output = Point;

    fn mul(self, rhs: &'b Point) -> Point {
        self.assert_same_dimension(rhs);
        Point::from(&self.coords * &rhs.coords)
    }
}

impl<'a> Mul<f64> for &'a Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        self.scale(k)
    }
}

impl<'a> Mul<&'a Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: &'a Point) -> Point {
        rhs.scale(self)
    }
}

impl<'a> Div<f64> for &'a Point {
    type Output = Point;

    /// Panics on a zero divisor; use `checked_div` for caller-supplied values.
    fn div(self, k: f64) -> Point {
        assert!(k != 0.0, "cannot divide a point by zero");
        Point::from(&self.coords / k)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}
