//! Plot sin(x)/x together with its derivative and its integral.

use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use log::info;
use simplelog::*;
use curve_calculus::Plot;

fn sinc(x: f64) -> f64 {
    if x == 0. { 1. } else { x.sin() / x }
}

fn main() -> Result<(), Box<dyn Error>> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto)])?;

    let g = Plot::new(sinc).build()?;
    for (c, fname) in [(&g.function, "/tmp/sinc.dat"),
                       (&g.derivative, "/tmp/sinc_derivative.dat"),
                       (&g.integral, "/tmp/sinc_integral.dat")] {
        let mut fh = BufWriter::new(File::create(fname)?);
        c.write(&mut fh)?;
        fh.flush()?;
    }

    let mut fh = File::create("/tmp/sinc.gp")?;
    write!(fh, "set terminal pngcairo size 1280,720\n\
                set output \"sinc.png\"\n\
                set grid\n\
                set yrange [-2:2]\n\
                plot 'sinc.dat' with l lc rgb \"black\" title \"sin(x)/x\", \
                'sinc_derivative.dat' with l lc rgb \"blue\" title \"derivative\", \
                'sinc_integral.dat' with l lc rgb \"red\" title \"integral\"\n")?;

    let mut fh = File::create("/tmp/sinc.tex")?;
    write!(fh, "\\documentclass{{article}}\n\
                \\usepackage{{tikz}}\n\
                \\begin{{document}}\n\
                \\begin{{tikzpicture}}[x=0.12cm, y=2cm]\n")?;
    g.latex(&mut fh)?;
    write!(fh, "\\end{{tikzpicture}}\n\
                \\end{{document}}\n")?;

    // What a render shell would draw at each redraw.
    for (name, p) in ["function", "derivative", "integral"].iter()
        .zip(g.polylines()) {
        let bb = p.points.bounding_box();
        info!("{}: {} screen points in x ∈ [{:.1}, {:.1}], y ∈ [{:.1}, {:.1}]",
              name, p.points.len(), bb.xmin, bb.xmax, bb.ymin, bb.ymax);
    }
    Ok(())
}
