//! Plots `x y` pairs read from stdin, or a built-in demo data set, to the terminal.
//!
//! cargo run -- --demo sine --invert-y --y-axis --x-axis
//! seq 0 20 | awk '{print $1, $1*$1}' | cargo run -- --lines

use std::f64::consts::TAU;
use std::io;
use std::io::BufRead;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use conplot::{AxisFormat, Color, Marker, Plot, Presenter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    /// One period of a sine wave with markers on its extremes.
    Sine,
    /// Normally-ish distributed random points.
    Scatter,
}

#[derive(Debug, Parser)]
#[command(version, about = "Plot 2D data in the terminal")]
struct Args {
    /// Plot width in characters.
    #[arg(short = 'W', long, default_value_t = 60)]
    width: usize,
    /// Plot height in lines. Every line shows two rows of pixels.
    #[arg(short = 'H', long, default_value_t = 15)]
    height: usize,
    /// Fixed data range instead of fitting the data.
    #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"], allow_negative_numbers = true)]
    range: Option<Vec<f64>>,
    /// Make y grow upwards.
    #[arg(long)]
    invert_y: bool,
    /// Background palette index.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=15))]
    background: u8,
    /// Data palette index.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u8).range(0..=15))]
    color: u8,
    /// Draw with this character instead of half blocks.
    #[arg(long)]
    marker: Option<char>,
    /// Connect consecutive points with lines.
    #[arg(long)]
    lines: bool,
    /// Print x axis labels.
    #[arg(long)]
    x_axis: bool,
    /// Print y axis labels.
    #[arg(long)]
    y_axis: bool,
    /// Minimum width of axis labels.
    #[arg(long, default_value_t = 6)]
    label_width: usize,
    /// Digits after the decimal point in axis labels.
    #[arg(long, default_value_t = 2)]
    precision: usize,
    /// Plot a built-in data set instead of reading stdin.
    #[arg(long, value_enum)]
    demo: Option<Demo>,
    /// Seed for the scatter demo.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut plot = Plot::new(args.width, args.height)?;
    plot.set_background_color(Color::from_index(args.background)?);
    plot.invert_y_axis(args.invert_y);
    if let Some(range) = &args.range {
        plot.set_draw_range(range[0], range[1], range[2], range[3])?;
    }

    let color = Color::from_index(args.color)?;
    let marker = args.marker.map_or(Marker::Block, Marker::Char);
    match args.demo {
        Some(Demo::Sine) => sine_demo(&mut plot, color, marker),
        Some(Demo::Scatter) => scatter_demo(&mut plot, args.seed, color, marker),
        None => {
            let points = read_points(io::stdin().lock())?;
            debug!("read {} points from stdin", points.len());
            add_series(&mut plot, &points, args.lines, color, marker);
        }
    }

    if let Err(err) = plot.render() {
        warn!("nothing to draw: {err}");
        bail!("need at least two distinct points spanning both axes, or a fixed --range");
    }

    let format = AxisFormat::new(args.label_width, args.precision);
    let mut presenter = Presenter::new_with_stdout()
        .with_x_axis(args.x_axis.then_some(format))
        .with_y_axis(args.y_axis.then_some(format));
    presenter.present(&plot)?;
    Ok(())
}

fn add_series(plot: &mut Plot, points: &[(f64, f64)], lines: bool, color: Color, marker: Marker) {
    if lines && points.len() > 1 {
        for pair in points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            plot.add_line(x1, y1, x2, y2, color, marker);
        }
    } else {
        for &(x, y) in points {
            plot.add_point(x, y, color, marker);
        }
    }
}

fn sine_demo(plot: &mut Plot, color: Color, marker: Marker) {
    let steps = 200;
    let points: Vec<(f64, f64)> = (0..=steps)
        .map(|i| {
            let x = TAU * i as f64 / steps as f64;
            (x, x.sin())
        })
        .collect();
    add_series(plot, &points, true, color, marker);
    plot.add_line(0.0, 0.0, TAU, 0.0, Color::DarkGray, Marker::Block);
    for x in [TAU / 4.0, TAU * 3.0 / 4.0] {
        plot.add_point(x, x.sin(), Color::BrightRed, Marker::Char('o'));
    }
}

fn scatter_demo(plot: &mut Plot, seed: u64, color: Color, marker: Marker) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..400 {
        // sum of uniforms, roughly bell shaped
        let x: f64 = (0..4).map(|_| rng.gen_range(-1.0..1.0)).sum();
        let y: f64 = (0..4).map(|_| rng.gen_range(-1.0..1.0)).sum();
        plot.add_point(x, y, color, marker);
    }
}

/// Parses whitespace separated `x y` pairs, one per line. Blank lines and `#` comments are skipped.
fn read_points(input: impl BufRead) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut points = vec![];
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
            bail!("line {}: expected `x y`, got {line:?}", idx + 1);
        };
        let x: f64 = x.parse().with_context(|| format!("line {}: bad x {x:?}", idx + 1))?;
        let y: f64 = y.parse().with_context(|| format!("line {}: bad y {y:?}", idx + 1))?;
        points.push((x, y));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_points() {
        let input = "# header\n1 2\n\n  3.5\t-4\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(points, vec![(1.0, 2.0), (3.5, -4.0)]);
    }

    #[test]
    fn test_read_points_rejects_malformed_lines() {
        assert!(read_points("1 2 3\n".as_bytes()).is_err());
        assert!(read_points("1\n".as_bytes()).is_err());
        assert!(read_points("a b\n".as_bytes()).is_err());
    }

    #[test]
    fn test_add_series_lines() {
        let mut plot = Plot::new(10, 5).unwrap();
        add_series(&mut plot, &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], true, Color::Red, Marker::Block);
        assert_eq!(plot.dataset().line_count(), 2);
        assert_eq!(plot.dataset().point_count(), 0);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["conplot", "--range", "-1", "-1", "1", "1", "--marker", "*"]);
        assert_eq!(args.range, Some(vec![-1.0, -1.0, 1.0, 1.0]));
        assert_eq!(args.marker, Some('*'));
        assert_eq!(args.width, 60);
    }
}
