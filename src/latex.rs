//! PGF/TikZ output of curves.

use std::io::{self, Write};
use rgb::RGB8;
use crate::{Curve, Sample};

/// LaTeX output.
///
/// # Example
///
/// ```
/// use std::fs::File;
/// use curve_calculus::Curve;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let c: Curve = [[0., 0.], [1., 1.]].into_iter().collect();
/// c.latex().write(&mut File::create("target/curve.tex")?)?;
/// # Ok(()) }
/// ```
pub struct LaTeX<'a> {
    curve: &'a Curve,
    n: usize,
    color: Option<RGB8>,
}

impl<'a> LaTeX<'a> {
    #[inline]
    pub(crate) fn new(c: &'a Curve) -> Self {
        Self { curve: c,  n: 20_000,  color: None }
    }

    /// Set the maximum number of points of a PGF path to `n`.  If it
    /// contains more than `n` points, the curve is drawn as several
    /// PGF paths.  Default: 20_000.
    pub fn n(&mut self, n: usize) -> &mut Self {
        self.n = n;
        self
    }

    /// Set the color of the curve to `color`.  If not specified the
    /// active LaTeX color will be used.
    pub fn color(&mut self, color: RGB8) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Write `\pgfpath<op>` for the point `s`, `op` being "moveto"
    /// or "lineto".
    fn write_point(f: &mut impl Write, op: &str, s: &Sample)
                   -> Result<(), io::Error> {
        writeln!(f, "\\pgfpath{}{{\\pgfpointxy{{{:.16}}}{{{:.16}}}}}",
                 op, s.x, s.y)
    }

    /// Write the curve with lines segments.  Non-finite samples
    /// end the current path and paths longer than `n` points are
    /// stroked and restarted at their last point.
    fn write_with_lines(&self, f: &mut impl Write) -> Result<(), io::Error> {
        let mut n = 0; // Points in the current PGF path.
        for s in self.curve.iter() {
            if !s.is_finite() {
                if n > 0 { writeln!(f, "\\pgfusepath{{stroke}}")? }
                n = 0;
                continue
            }
            Self::write_point(f, if n == 0 { "moveto" } else { "lineto" }, s)?;
            n += 1;
            if n >= self.n {
                writeln!(f, "\\pgfusepath{{stroke}}")?;
                Self::write_point(f, "moveto", s)?;
                n = 1;
            }
        }
        Ok(())
    }

    /// Write the curve to the formatter as PGF/TikZ commands.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        writeln!(f, "% Written by the Rust curve_calculus crate.")?;
        writeln!(f, "\\begin{{pgfscope}}")?;
        if let Some(RGB8 { r, g, b }) = self.color {
            writeln!(f, "\\definecolor{{RustCurveCalculusColor}}{{RGB}}\
                         {{{},{},{}}}\n\
                         \\pgfsetstrokecolor{{RustCurveCalculusColor}}",
                     r, g, b)?
        }
        self.write_with_lines(f)?;
        writeln!(f, "\\pgfusepath{{stroke}}\n\\end{{pgfscope}}")
    }
}
