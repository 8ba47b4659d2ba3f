//! Sample a function ℝ → ℝ on a fixed grid together with a forward
//! difference approximation of its derivative and an approximation
//! of its antiderivative vanishing at `x = 0`.  The resulting curves
//! can be mapped to a pixel frame (see [`to_frame`]) for drawing.
//!
//! # Example
//!
//! ```
//! use curve_calculus::{self as cc, Interval};
//! # fn main() -> Result<(), cc::Error> {
//! let domain = Interval::new(-2., 2.);
//! let s = cc::sample(|x| x * x, domain, 0.5)?;
//! let d = cc::derivative(|x| x * x, domain, 0.5)?;
//! let i = cc::integral(|x| x * x, domain, 0.5)?;
//! assert_eq!((s.len(), d.len(), i.len()), (8, 7, 8));
//! # Ok(()) }
//! ```

use std::{fmt::{self, Display, Formatter},
          io::{self, Write},
          slice};
use log::debug;

mod error;
mod frame;
mod latex;
mod plot;

pub use error::{Error, Invalid};
pub use frame::{Frame, Transform, to_frame};
pub use latex::LaTeX;
pub use plot::{Colors, Graph, Plot, Polyline};

/// A point (`x`, `y`) of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[inline]
    fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl From<[f64; 2]> for Sample {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self { Sample { x, y } }
}

impl From<(f64, f64)> for Sample {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self { Sample { x, y } }
}

impl From<Sample> for [f64; 2] {
    #[inline]
    fn from(s: Sample) -> Self { [s.x, s.y] }
}

impl From<Sample> for (f64, f64) {
    #[inline]
    fn from(s: Sample) -> Self { (s.x, s.y) }
}

/// An interval \[`min`, `max`\].  No check is performed on
/// construction; the operations using it reject degenerate ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

/// Interval of the independent variable.
pub type Domain = Interval;

/// Interval of the dependent variable used for vertical scaling.
/// Curves are not clipped to it.
pub type Range = Interval;

impl Interval {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self { Interval { min, max } }

    #[inline]
    pub fn width(&self) -> f64 { self.max - self.min }

    /// Return `true` if `x` ∈ \[`min`, `max`\].
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Return `true` if the bounds and the width are finite and
    /// `min < max`.
    #[inline]
    pub(crate) fn is_proper(&self) -> bool {
        self.min < self.max && self.width().is_finite()
    }
}

/// A box \[`xmin`, `xmax`\] × \[`ymin`, `ymax`\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Return `true` if the bounding box has a non-empty interior.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.xmin < self.xmax && self.ymin < self.ymax) // NAN ⟹ empty
    }

    /// Return the smaller bounding-box containing both `self` and
    /// `other`.
    #[inline]
    pub fn hull(&self, other: &Self) -> Self {
        BoundingBox { xmin: self.xmin.min(other.xmin),
                      xmax: self.xmax.max(other.xmax),
                      ymin: self.ymin.min(other.ymin),
                      ymax: self.ymax.max(other.ymax) }
    }
}


////////////////////////////////////////////////////////////////////////
//
// Curves

/// A sequence of samples, not modified once built.  The curves
/// returned by [`sample`], [`derivative`] and [`integral`] are ordered
/// by increasing `x`; curves collected from points (`From`,
/// `FromIterator`) keep the given order, which is not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve(Vec<Sample>);

impl Curve {
    /// Return the number of samples.
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Sample> { self.0.iter() }

    #[inline]
    pub fn as_slice(&self) -> &[Sample] { &self.0 }

    #[inline]
    pub fn first(&self) -> Option<&Sample> { self.0.first() }

    #[inline]
    pub fn last(&self) -> Option<&Sample> { self.0.last() }

    /// Iterate on the abscissae.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|s| s.x)
    }

    /// Iterate on the ordinates.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|s| s.y)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Sample> { self.0 }

    /// Return the smallest rectangle enclosing all the finite samples
    /// of `self`.  If there are none, the "min" fields of the
    /// bounding box are set to +∞ and "max" fields to -∞.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            xmin: f64::INFINITY,  xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,  ymax: f64::NEG_INFINITY };
        for s in self.0.iter().filter(|s| s.is_finite()) {
            if s.x < bb.xmin { bb.xmin = s.x }
            if s.x > bb.xmax { bb.xmax = s.x }
            if s.y < bb.ymin { bb.ymin = s.y }
            if s.y > bb.ymax { bb.ymax = s.y }
        }
        bb
    }

    /// Return the vertical extent of the finite samples, to be used
    /// as the range of a plot.  Return `None` if the extent is empty
    /// (no finite sample or constant curve).
    pub fn fit_range(&self) -> Option<Range> {
        let bb = self.bounding_box();
        let r = Interval::new(bb.ymin, bb.ymax);
        if r.is_proper() { Some(r) } else { None }
    }

    /// Return a PGF/TikZ writer for `self`.
    pub fn latex(&self) -> LaTeX<'_> { LaTeX::new(self) }

    /// Write the curve to `f` in a tabular form: each sample is
    /// written as "x y" on a single line (in scientific notation).
    /// Non-finite samples interrupt the path and are rendered as a
    /// (single) blank line.  This format is compatible with Gnuplot.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        let mut prev_is_cut = true;
        for s in self.iter() {
            if s.is_finite() {
                writeln!(f, "{:e} {:e}", s.x, s.y)?;
                prev_is_cut = false;
            } else if !prev_is_cut {
                writeln!(f)?;
                prev_is_cut = true;
            }
        }
        Ok(())
    }
}

impl From<Vec<Sample>> for Curve {
    #[inline]
    fn from(v: Vec<Sample>) -> Self { Curve(v) }
}

impl FromIterator<Sample> for Curve {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Curve(iter.into_iter().collect())
    }
}

impl FromIterator<[f64; 2]> for Curve {
    fn from_iter<T: IntoIterator<Item = [f64; 2]>>(iter: T) -> Self {
        Curve(iter.into_iter().map(Sample::from).collect())
    }
}

impl IntoIterator for Curve {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl Display for Curve {
    /// Display the curve in the same tabular form as [`Curve::write`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let mut prev_is_cut = true;
        for s in self.iter() {
            if s.is_finite() {
                writeln!(f, "{:e} {:e}", s.x, s.y)?;
                prev_is_cut = false;
            } else if !prev_is_cut {
                writeln!(f)?;
                prev_is_cut = true;
            }
        }
        Ok(())
    }
}


////////////////////////////////////////////////////////////////////////
//
// Grid

// Bound on the pre-allocation so absurd `width / dx` ratios do not
// abort before the first evaluation.
const MAX_CAPACITY_HINT: usize = 1 << 24;

/// Check that `dx` is a valid step for `domain`.
pub(crate) fn check_step(domain: &Domain, dx: f64) -> Result<(), Error> {
    if !(dx.is_finite() && dx > 0.) {
        return Err(Invalid::NonPositiveStep { dx }.into())
    }
    if !domain.is_proper() {
        return Err(Invalid::EmptyDomain { min: domain.min,
                                          max: domain.max }.into())
    }
    let width = domain.width();
    if dx >= width {
        return Err(Invalid::StepTooLarge { dx, width }.into())
    }
    Ok(())
}

/// Check that the integral can be anchored at 0 on `domain`.
pub(crate) fn check_anchor(domain: &Domain) -> Result<(), Error> {
    if domain.min < 0. && 0. < domain.max { return Ok(()) }
    Err(Invalid::OutOfDomainAnchor { min: domain.min,
                                     max: domain.max }.into())
}

#[inline]
fn capacity(domain: &Domain, dx: f64) -> usize {
    ((domain.width() / dx).ceil() as usize).min(MAX_CAPACITY_HINT)
}

/// The values `x0`, `x0 + dx`, `x0 + 2 dx`,...  Each value is
/// computed from its index so rounding errors do not accumulate.
#[inline]
fn steps(x0: f64, dx: f64) -> impl Iterator<Item = f64> {
    (0_u64 ..).map(move |i| x0 + i as f64 * dx)
}


////////////////////////////////////////////////////////////////////////
//
// Sampler

/// Return the samples (x, `f(x)`) for x = `domain.min` + i `dx` < `domain.max`.
/// The right end of the domain is excluded.
///
/// Fails with [`Error::InvalidParameter`] if `dx` is not positive,
/// the domain is empty, or `dx` is not smaller than its width.
///
/// # Example
///
/// ```
/// use curve_calculus::{sample, Interval};
/// # fn main() -> Result<(), curve_calculus::Error> {
/// let s = sample(|x| x * x, Interval::new(-2., 2.), 0.5)?;
/// assert_eq!(s.len(), 8);
/// assert_eq!(s.last().map(|s| (s.x, s.y)), Some((1.5, 2.25)));
/// # Ok(()) }
/// ```
pub fn sample<F>(mut f: F, domain: Domain, dx: f64) -> Result<Curve, Error>
where F: FnMut(f64) -> f64 {
    check_step(&domain, dx)?;
    let mut path = Vec::with_capacity(capacity(&domain, dx));
    for x in steps(domain.min, dx).take_while(|&x| x < domain.max) {
        path.push(Sample { x, y: f(x) });
    }
    debug!("sample: {} points on [{}, {}[, dx = {}",
           path.len(), domain.min, domain.max, dx);
    Ok(Curve(path))
}


////////////////////////////////////////////////////////////////////////
//
// Derivative

/// Forward difference approximation of `f'`: the sample at `x` is
/// (`f(x + dx)` - `f(x)`) / `dx`.  Each evaluation of `f` is used
/// twice, as the right value of a step and the left value of the
/// next one.  The sample at `x` is emitted only if the next abscissa
/// of the grid is `< domain.max`, so the curve has exactly one sample
/// less than the one of [`sample`].
///
/// Fails in the same cases as [`sample`].
pub fn derivative<F>(mut f: F, domain: Domain, dx: f64) -> Result<Curve, Error>
where F: FnMut(f64) -> f64 {
    check_step(&domain, dx)?;
    let mut path = Vec::with_capacity(capacity(&domain, dx));
    let mut y0 = f(domain.min);
    let grid = steps(domain.min, dx).zip(steps(domain.min, dx).skip(1));
    for (x, x1) in grid.take_while(|&(_, x1)| x1 < domain.max) {
        let y1 = f(x1);
        path.push(Sample { x, y: (y1 - y0) / dx });
        y0 = y1;
    }
    debug!("derivative: {} points on [{}, {}[, dx = {}",
           path.len(), domain.min, domain.max, dx);
    Ok(Curve(path))
}


////////////////////////////////////////////////////////////////////////
//
// Integral

/// Approximation of the antiderivative of `f` vanishing at 0.
///
/// The curve is accumulated outward from 0 with rectangles of width
/// `dx` whose height is `f` at the end of the rectangle away from 0:
/// leftward for x = -dx, -2 dx,... ≥ `domain.min` (subtracting the
/// areas) and rightward for x = dx, 2 dx,... < `domain.max`.  The two
/// halves are joined by the sample (0, 0), so the curve is increasing
/// in `x` and always contains the anchor.
///
/// Fails in the same cases as [`sample`] and, with
/// [`Invalid::OutOfDomainAnchor`], when 0 is not in the interior of
/// `domain`.
///
/// # Example
///
/// ```
/// use curve_calculus::{integral, Interval};
/// # fn main() -> Result<(), curve_calculus::Error> {
/// let i = integral(|_| 1., Interval::new(-1., 1.), 0.25)?;
/// assert!(i.iter().all(|s| (s.y - s.x).abs() < 1e-12));
/// # Ok(()) }
/// ```
pub fn integral<F>(mut f: F, domain: Domain, dx: f64) -> Result<Curve, Error>
where F: FnMut(f64) -> f64 {
    check_step(&domain, dx)?;
    check_anchor(&domain)?;
    let mut path = Vec::with_capacity(capacity(&domain, dx) + 1);
    let mut total = 0.;
    for x in steps(0., -dx).skip(1).take_while(|&x| x >= domain.min) {
        total -= f(x) * dx;
        path.push(Sample { x, y: total });
    }
    path.reverse();
    let n_neg = path.len();
    path.push(Sample { x: 0., y: 0. });
    let mut total = 0.;
    for x in steps(0., dx).skip(1).take_while(|&x| x < domain.max) {
        total += f(x) * dx;
        path.push(Sample { x, y: total });
    }
    debug!("integral: {} points ({} for x < 0) on [{}, {}[, dx = {}",
           path.len(), n_neg, domain.min, domain.max, dx);
    Ok(Curve(path))
}


////////////////////////////////////////////////////////////////////////
//
// Tests
