use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use refblend_core::io::image_dimensions;
use refblend_core::viewer::{Point, Size, ViewerSession};

use super::load_config;
use crate::summary;

/// One viewer interaction replayed after the initial fit.
#[derive(Clone, Debug)]
pub enum Step {
    /// Zoom by a factor, at a focal point or the viewport centre.
    Zoom { factor: f32, at: Option<Point> },
    /// Drag by an offset in viewport pixels.
    Pan { delta: Point },
    Reset,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zoom { factor, at: None } => write!(f, "zoom x{factor}"),
            Self::Zoom {
                factor,
                at: Some(p),
            } => write!(f, "zoom x{factor} @ {},{}", p.x, p.y),
            Self::Pan { delta } => write!(f, "pan {},{}", delta.x, delta.y),
            Self::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Args)]
pub struct FitArgs {
    /// Image file to measure
    #[arg(required_unless_present = "size", conflicts_with = "size")]
    pub image: Option<PathBuf>,

    /// Image size instead of a file, e.g. 1600x400
    #[arg(long, value_parser = parse_size)]
    pub size: Option<Size>,

    /// Viewport size, e.g. 800x600
    #[arg(long, value_parser = parse_size)]
    pub viewport: Size,

    /// Interaction to apply after fitting, in order:
    /// `zoom:F`, `zoom:F@X,Y`, `pan:DX,DY` or `reset`
    #[arg(long = "step", value_parser = parse_step)]
    pub steps: Vec<Step>,

    /// Config file (TOML), for the zoom limits
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &FitArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let image = match (&args.image, args.size) {
        (_, Some(size)) => size,
        (Some(path), None) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            image_dimensions(&bytes)
                .with_context(|| format!("Failed to decode {}", path.display()))?
        }
        (None, None) => bail!("Give an image file or --size"),
    };

    let mut session = ViewerSession::new(config.viewer.scale_limits());
    session.resize(args.viewport);
    session.open();
    session.image_loaded(image);
    if !session.is_loaded() {
        bail!(
            "Cannot fit a {}x{} image into a {}x{} viewport",
            image.width,
            image.height,
            args.viewport.width,
            args.viewport.height
        );
    }

    summary::print_fit_header(image, args.viewport, session.limits());
    summary::print_fit_row("fit", &session, true);

    for step in &args.steps {
        let changed = match *step {
            Step::Zoom { factor, at } => session.zoom_at(factor, at),
            Step::Pan { delta } => {
                let start = args.viewport.center();
                let began = session.begin_pan(start);
                let moved = began && session.pan_to(start + delta);
                session.end_pan();
                moved
            }
            Step::Reset => {
                let before = session.transform();
                session.reset();
                before != session.transform()
            }
        };
        summary::print_fit_row(&step.to_string(), &session, changed);
    }

    Ok(())
}

fn parse_pair(s: &str, sep: char) -> Option<(f32, f32)> {
    let (a, b) = s.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn parse_size(s: &str) -> std::result::Result<Size, String> {
    match parse_pair(&s.to_ascii_lowercase(), 'x') {
        Some((w, h)) if w > 0.0 && h > 0.0 => Ok(Size::new(w, h)),
        _ => Err(format!("expected WIDTHxHEIGHT with positive sides, got '{s}'")),
    }
}

fn parse_step(s: &str) -> std::result::Result<Step, String> {
    let bad = || format!("unrecognised step '{s}'");
    let s = s.trim();
    if s == "reset" {
        return Ok(Step::Reset);
    }
    if let Some(rest) = s.strip_prefix("zoom:") {
        let (factor, at) = match rest.split_once('@') {
            Some((f, p)) => {
                let (x, y) = parse_pair(p, ',').ok_or_else(bad)?;
                (f, Some(Point::new(x, y)))
            }
            None => (rest, None),
        };
        let factor: f32 = factor.trim().parse().map_err(|_| bad())?;
        if !(factor.is_finite() && factor > 0.0) {
            return Err(format!("zoom factor must be positive, got '{factor}'"));
        }
        return Ok(Step::Zoom { factor, at });
    }
    if let Some(rest) = s.strip_prefix("pan:") {
        let (dx, dy) = parse_pair(rest, ',').ok_or_else(bad)?;
        return Ok(Step::Pan {
            delta: Point::new(dx, dy),
        });
    }
    Err(bad())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1600x400").unwrap(), Size::new(1600.0, 400.0));
        assert_eq!(parse_size("800X600").unwrap(), Size::new(800.0, 600.0));
        assert!(parse_size("0x600").is_err());
        assert!(parse_size("800").is_err());
    }

    #[test]
    fn test_parse_steps() {
        assert!(matches!(parse_step("reset"), Ok(Step::Reset)));
        match parse_step("zoom:1.5@10,20").unwrap() {
            Step::Zoom { factor, at } => {
                assert_eq!(factor, 1.5);
                assert_eq!(at, Some(Point::new(10.0, 20.0)));
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_step("pan:-30,15").unwrap() {
            Step::Pan { delta } => assert_eq!(delta, Point::new(-30.0, 15.0)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_step("zoom:-2").is_err());
        assert!(parse_step("spin:3").is_err());
    }
}
