use std::path::Path;

use anyhow::{bail, Context, Result};
use marquee_core::geometry::Point;
use marquee_core::mapper::SurfaceMetrics;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer step, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub action: Action,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub shift: bool,
}

impl Step {
    fn at(action: Action, p: Point, shift: bool) -> Self {
        Self {
            action,
            x: p.x,
            y: p.y,
            shift,
        }
    }
}

/// A recorded pointer gesture, as read from a `[[steps]]` TOML file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script = toml::from_str(&content)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        Ok(script)
    }

    /// Press at `from`, move to `to`, release.
    pub fn drag(from: Point, to: Point, shift: bool) -> Self {
        Self {
            steps: vec![
                Step::at(Action::Down, from, shift),
                Step::at(Action::Move, to, shift),
                Step::at(Action::Up, to, shift),
            ],
        }
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `400x300`.
pub fn parse_size(s: &str) -> Result<SurfaceMetrics> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got '{s}'");
    };
    let width: f32 = w.trim().parse().context("invalid width")?;
    let height: f32 = h.trim().parse().context("invalid height")?;
    if width <= 0.0 || height <= 0.0 {
        bail!("surface size must be positive, got '{s}'");
    }
    Ok(SurfaceMetrics::new(width, height))
}

/// Parse `X1,Y1:X2,Y2` into the press and release points.
pub fn parse_drag(s: &str) -> Result<(Point, Point)> {
    let Some((from, to)) = s.split_once(':') else {
        bail!("expected X1,Y1:X2,Y2, got '{s}'");
    };
    Ok((parse_point(from)?, parse_point(to)?))
}

fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got '{s}'");
    };
    let x = x.trim().parse().with_context(|| format!("invalid x in '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("invalid y in '{s}'"))?;
    Ok(Point::new(x, y))
}
