use std::error::Error;
use curve_calculus::{self as cc, Frame, Interval};

fn main() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| x * x;
    let domain = Interval::new(-2., 2.);
    let range = Interval::new(-4., 4.);
    let frame = Frame::new(400., 300.);
    let curves = [("f", cc::sample(f, domain, 0.5)?),
                  ("f'", cc::derivative(f, domain, 0.5)?),
                  ("∫f", cc::integral(f, domain, 0.5)?)];
    for (name, c) in curves {
        println!("# {}\n{}", name, c);
        let s = cc::to_frame(c, domain, range, frame)?;
        println!("# {} (screen)\n{}", name, s);
    }
    Ok(())
}
