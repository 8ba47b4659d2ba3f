//! Linear map from domain × range units to a pixel frame.

use log::{debug, warn};
use crate::{Curve, Domain, Error, Invalid, Range, Sample};

/// A pixel frame of size `width` × `height`.  The origin is the
/// top-left corner and the y-axis points downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self { Frame { width, height } }
}

/// Affine map sending the domain × range rectangle onto the frame,
/// with the vertical axis flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale_x: f64,
    scale_y: f64,
    origin_x: f64, // Screen position of x = 0.
    origin_y: f64, // Screen position of y = 0.
}

impl Transform {
    /// Return the transform mapping `domain` × `range` onto `frame`:
    /// (`domain.min`, `range.max`) goes to the top-left corner and
    /// (`domain.max`, `range.min`) to the bottom-right one.
    pub fn new(domain: Domain, range: Range, frame: Frame)
               -> Result<Self, Error> {
        if !domain.is_proper() {
            return Err(Invalid::EmptyDomain { min: domain.min,
                                              max: domain.max }.into())
        }
        if !range.is_proper() {
            return Err(Invalid::EmptyRange { min: range.min,
                                             max: range.max }.into())
        }
        if !(frame.width.is_finite() && frame.width > 0.
             && frame.height.is_finite() && frame.height > 0.) {
            return Err(Invalid::EmptyFrame { width: frame.width,
                                             height: frame.height }.into())
        }
        let w = domain.width();
        let h = range.width();
        Ok(Transform { scale_x: frame.width / w,
                       scale_y: frame.height / h,
                       origin_x: frame.width * (- domain.min) / w,
                       origin_y: frame.height * range.max / h })
    }

    /// Screen position of `s`.  No clipping is performed.
    #[inline]
    pub fn apply(&self, s: Sample) -> Sample {
        Sample { x: s.x * self.scale_x + self.origin_x,
                 y: - s.y * self.scale_y + self.origin_y }
    }

    /// Position in domain × range units of the screen point `s`.
    #[inline]
    pub fn invert(&self, s: Sample) -> Sample {
        Sample { x: (s.x - self.origin_x) / self.scale_x,
                 y: (self.origin_y - s.y) / self.scale_y }
    }

    /// Map all the samples of `curve`.
    pub fn map(&self, curve: Curve) -> Curve {
        let n_bad = curve.iter().filter(|s| !s.is_finite()).count();
        if n_bad > 0 {
            warn!("{} of {} samples are not finite", n_bad, curve.len());
        }
        curve.into_iter().map(|s| self.apply(s)).collect()
    }
}

/// Map `curve` to the screen coordinates of `frame` where the
/// rectangle `domain` × `range` fills the whole frame.  Samples
/// outside of it are mapped outside of the frame; they are not
/// removed.
///
/// Fails with [`Error::InvalidParameter`] if `domain` or `range` is
/// empty or if `frame` has a non-positive side.
///
/// # Example
///
/// ```
/// use curve_calculus::{to_frame, Curve, Frame, Interval};
/// # fn main() -> Result<(), curve_calculus::Error> {
/// let c: Curve = [[-1., 1.], [1., -1.]].into_iter().collect();
/// let s = to_frame(c, Interval::new(-1., 1.), Interval::new(-1., 1.),
///                  Frame::new(200., 100.))?;
/// let xy: Vec<[f64; 2]> = s.into_iter().map(|s| s.into()).collect();
/// assert_eq!(xy, [[0., 0.], [200., 100.]]);
/// # Ok(()) }
/// ```
pub fn to_frame(curve: Curve, domain: Domain, range: Range, frame: Frame)
                -> Result<Curve, Error> {
    let t = Transform::new(domain, range, frame)?;
    debug!("to_frame: {} points, {:?} × {:?} → {} × {}",
           curve.len(), domain, range, frame.width, frame.height);
    Ok(t.map(curve))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::{sample, Curve, Frame, Interval, Invalid, Sample};
    use super::{to_frame, Transform};

    const FRAME: Frame = Frame { width: 1280., height: 720. };

    fn domain() -> Interval { Interval::new(-50., 50.) }
    fn range() -> Interval { Interval::new(-2., 2.) }

    #[test]
    fn corners_and_origin() {
        let c: Curve = [[-50., 2.], [0., 0.], [50., -2.]].into_iter().collect();
        let s = to_frame(c, domain(), range(), FRAME).unwrap();
        let xy: Vec<(f64, f64)> = s.iter().map(|&s| s.into()).collect();
        assert_eq!(xy, vec![(0., 0.), (640., 360.), (1280., 720.)]);
    }

    #[test]
    fn no_clipping() {
        let c: Curve = [[-100., 5.], [100., -5.]].into_iter().collect();
        let s = to_frame(c, domain(), range(), FRAME).unwrap();
        assert_eq!(s.len(), 2);
        let p = s.as_slice();
        assert!(p[0].x < 0. && p[0].y < 0.);
        assert!(p[1].x > FRAME.width && p[1].y > FRAME.height);
    }

    #[test]
    fn vertical_flip() {
        let t = Transform::new(domain(), range(), FRAME).unwrap();
        let lo = t.apply(Sample { x: 0., y: -1. });
        let hi = t.apply(Sample { x: 0., y: 1. });
        assert!(hi.y < lo.y);
    }

    #[test]
    fn linear_in_x() {
        let c: Curve = [[1., 0.3], [4., 0.3]].into_iter().collect();
        let s1 = to_frame(c.clone(), domain(), range(), FRAME).unwrap();
        let wide = Frame::new(2. * FRAME.width, FRAME.height);
        let s2 = to_frame(c, domain(), range(), wide).unwrap();
        let (a1, b1) = (s1.as_slice()[0], s1.as_slice()[1]);
        let (a2, b2) = (s2.as_slice()[0], s2.as_slice()[1]);
        assert!(b1.x > a1.x);
        assert_relative_eq!(b2.x - a2.x, 2. * (b1.x - a1.x), epsilon = 1e-12);
        assert_eq!(a1.y, b1.y);
    }

    #[test]
    fn invert_apply() {
        let t = Transform::new(Interval::new(-3., 7.), Interval::new(0.5, 2.),
                               Frame::new(640., 480.)).unwrap();
        for &(x, y) in &[(-3., 0.5), (0., 0.), (6.2, -4.), (1e3, 2.)] {
            let s = t.invert(t.apply(Sample { x, y }));
            assert_relative_eq!(s.x, x, epsilon = 1e-9);
            assert_relative_eq!(s.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn keeps_length() {
        let c = sample(f64::sin, domain(), 0.1).unwrap();
        let n = c.len();
        assert_eq!(to_frame(c, domain(), range(), FRAME).unwrap().len(), n);
    }

    #[test]
    fn invalid_parameters() {
        let c = || Curve::from(vec![Sample { x: 0., y: 0. }]);
        let err = |d, r, f| to_frame(c(), d, r, f).unwrap_err().reason();
        assert_eq!(err(Interval::new(0., 0.), range(), FRAME),
                   Invalid::EmptyDomain { min: 0., max: 0. });
        assert_eq!(err(Interval::new(1., -1.), range(), FRAME),
                   Invalid::EmptyDomain { min: 1., max: -1. });
        assert_eq!(err(domain(), Interval::new(2., 2.), FRAME),
                   Invalid::EmptyRange { min: 2., max: 2. });
        assert_eq!(err(domain(), range(), Frame::new(0., 720.)),
                   Invalid::EmptyFrame { width: 0., height: 720. });
        assert_eq!(err(domain(), range(), Frame::new(1280., -1.)),
                   Invalid::EmptyFrame { width: 1280., height: -1. });
        // Finite bounds whose width overflows.
        assert_eq!(err(Interval::new(-1e308, 1e308), range(), FRAME),
                   Invalid::EmptyDomain { min: -1e308, max: 1e308 });
        assert_eq!(err(domain(), Interval::new(-1e308, 1e308), FRAME),
                   Invalid::EmptyRange { min: -1e308, max: 1e308 });
    }
}
