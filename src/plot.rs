//! A function plotted together with its derivative and integral.

use std::io::{self, Write};
use log::info;
use rgb::RGB8;
use crate::{check_anchor, check_step, derivative, integral, sample,
            Curve, Domain, Error, Frame, Interval, Range, Transform};

/// Colors of the three curves of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub function: RGB8,
    pub derivative: RGB8,
    pub integral: RGB8,
}

impl Default for Colors {
    /// Black function, blue derivative, red integral.
    fn default() -> Self {
        Colors { function: RGB8::new(0, 0, 0),
                 derivative: RGB8::new(0, 0, 255),
                 integral: RGB8::new(255, 0, 0) }
    }
}

/// Options for plotting a function ℝ → ℝ with its derivative and
/// integral.  See [`Plot::new`].
pub struct Plot<F> {
    f: F,
    domain: Domain,
    range: Range,
    dx: f64,
    frame: Frame,
    colors: Colors,
}

impl<F> Plot<F>
where F: FnMut(f64) -> f64 {
    /// Plot of `f` with the default settings: domain \[-50, 50\],
    /// range \[-2, 2\], step `dx = 0.01` and a 1280 × 720 frame.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_calculus::Plot;
    /// # fn main() -> Result<(), curve_calculus::Error> {
    /// let g = Plot::new(|x: f64| x.cos()).domain(-5., 5.).dx(0.1).build()?;
    /// let [f, d, i] = g.polylines();
    /// assert_eq!((f.points.len(), d.points.len()), (100, 99));
    /// assert_eq!(i.points.len(), 100);
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub fn new(f: F) -> Self {
        Plot { f,
               domain: Interval::new(-50., 50.),
               range: Interval::new(-2., 2.),
               dx: 0.01,
               frame: Frame::new(1280., 720.),
               colors: Colors::default() }
    }

    /// Set the domain \[`min`, `max`\] on which the curves are sampled.
    /// It must contain 0 in its interior.
    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Interval::new(min, max);
        self
    }

    /// Set the range \[`min`, `max`\] that fills the frame vertically.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Interval::new(min, max);
        self
    }

    /// Set the step between consecutive abscissae.
    pub fn dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Set the size in pixels of the frame.
    pub fn frame(mut self, width: f64, height: f64) -> Self {
        self.frame = Frame::new(width, height);
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Evaluate the function, its derivative and its integral.  All
    /// parameters are checked before `f` is evaluated.
    pub fn build(&mut self) -> Result<Graph, Error> {
        let transform = Transform::new(self.domain, self.range, self.frame)?;
        check_step(&self.domain, self.dx)?;
        check_anchor(&self.domain)?;
        let function = sample(&mut self.f, self.domain, self.dx)?;
        let derivative = derivative(&mut self.f, self.domain, self.dx)?;
        let integral = integral(&mut self.f, self.domain, self.dx)?;
        info!("graph on [{}, {}[ with dx = {}: {} + {} + {} points",
              self.domain.min, self.domain.max, self.dx,
              function.len(), derivative.len(), integral.len());
        Ok(Graph { function, derivative, integral,
                   transform, colors: self.colors })
    }
}

/// A curve in screen coordinates with the color to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub color: RGB8,
    pub points: Curve,
}

/// The curves of a [`Plot`], in domain × range units.
#[derive(Debug, Clone)]
pub struct Graph {
    pub function: Curve,
    pub derivative: Curve,
    pub integral: Curve,
    transform: Transform,
    colors: Colors,
}

impl Graph {
    /// The map from domain × range units to the frame.
    #[inline]
    pub fn transform(&self) -> &Transform { &self.transform }

    #[inline]
    pub fn colors(&self) -> Colors { self.colors }

    /// Return the function, derivative and integral polylines, in
    /// this order, mapped to the frame.
    pub fn polylines(&self) -> [Polyline; 3] {
        let line = |c: &Curve, color| {
            Polyline { color, points: self.transform.map(c.clone()) }
        };
        [line(&self.function, self.colors.function),
         line(&self.derivative, self.colors.derivative),
         line(&self.integral, self.colors.integral)]
    }

    /// Write the three curves, in domain × range units, as PGF/TikZ
    /// commands using their colors.
    pub fn latex(&self, f: &mut impl Write) -> Result<(), io::Error> {
        self.function.latex().color(self.colors.function).write(f)?;
        self.derivative.latex().color(self.colors.derivative).write(f)?;
        self.integral.latex().color(self.colors.integral).write(f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rgb::RGB8;
    use crate::{Colors, Invalid, Plot, Sample};

    #[test]
    fn defaults() {
        let mut n = 0;
        let g = Plot::new(|x: f64| { n += 1; x.sin() }).build().unwrap();
        assert_eq!(g.function.len(), 10_000);
        assert_eq!(g.derivative.len(), 9_999);
        assert_eq!(g.colors(), Colors::default());
        let s = g.transform().apply(Sample { x: -50., y: 2. });
        assert_abs_diff_eq!(s.x, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(s.y, 0., epsilon = 1e-9);
        drop(g);
        assert!(n > 20_000);
    }

    #[test]
    fn polylines_colors_and_order() {
        let g = Plot::new(|x: f64| x).domain(-1., 1.).dx(0.25)
            .frame(100., 100.).range(-1., 1.).build().unwrap();
        let [f, d, i] = g.polylines();
        assert_eq!(f.color, RGB8::new(0, 0, 0));
        assert_eq!(d.color, RGB8::new(0, 0, 255));
        assert_eq!(i.color, RGB8::new(255, 0, 0));
        // y = x maps to the descending diagonal of the frame.
        for s in f.points.iter() {
            assert_abs_diff_eq!(s.x + s.y, 100., epsilon = 1e-9);
        }
        // The integral anchor is at the center of the frame.
        assert!(i.points.iter().any(|s| *s == Sample { x: 50., y: 50. }));
        assert_eq!(g.function.len(), f.points.len());
    }

    #[test]
    fn checks_before_evaluating() {
        let mut n = 0;
        let r = Plot::new(|x| { n += 1; x }).range(1., 1.).build();
        assert_eq!(r.unwrap_err().reason(),
                   Invalid::EmptyRange { min: 1., max: 1. });
        let r = Plot::new(|x| { n += 1; x }).domain(1., 5.).dx(0.5).build();
        assert!(matches!(r.unwrap_err().reason(),
                         Invalid::OutOfDomainAnchor { .. }));
        assert_eq!(n, 0);
    }

    #[test]
    fn latex_has_three_scopes() {
        let g = Plot::new(|x: f64| x * x).domain(-1., 1.).dx(0.5)
            .build().unwrap();
        let mut out = vec![];
        g.latex(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s.matches("\\begin{pgfscope}").count(), 3);
        assert!(s.contains("{RGB}{255,0,0}"));
    }
}
