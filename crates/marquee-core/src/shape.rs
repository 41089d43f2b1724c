use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{BEZIER_KAPPA, MARQUEE_STROKE};
use crate::error::CropError;
use crate::geometry::{Bounds, PathCommand, Point};
use crate::surface::Surface;

/// Which outline the user drags out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeKind {
    #[default]
    Rectangle,
    Ellipse,
}

impl MarqueeKind {
    pub const ALL: &[Self] = &[Self::Rectangle, Self::Ellipse];
}

impl fmt::Display for MarqueeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::Ellipse => write!(f, "ellipse"),
        }
    }
}

impl FromStr for MarqueeKind {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "ellipse" | "circle" => Ok(Self::Ellipse),
            other => Err(CropError::UnimplementedCapability(format!(
                "no marquee shape named '{other}'"
            ))),
        }
    }
}

/// The selection region, in surface coordinates.
///
/// A marquee is a value: moving or resizing produces a new one that replaces
/// the previous, so nothing holds a reference across a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marquee {
    Rectangle(Bounds),
    Ellipse(Bounds),
}

impl Marquee {
    /// Build a marquee from a possibly negative drag extent.
    pub fn new(kind: MarqueeKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_bounds(kind, Bounds::normalized(x, y, w, h))
    }

    pub fn from_bounds(kind: MarqueeKind, bounds: Bounds) -> Self {
        match kind {
            MarqueeKind::Rectangle => Self::Rectangle(bounds),
            MarqueeKind::Ellipse => Self::Ellipse(bounds),
        }
    }

    pub fn kind(&self) -> MarqueeKind {
        match self {
            Self::Rectangle(_) => MarqueeKind::Rectangle,
            Self::Ellipse(_) => MarqueeKind::Ellipse,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Rectangle(b) | Self::Ellipse(b) => b,
        }
    }

    /// Same shape, new geometry.
    pub fn update(&self, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(self.kind(), x, y, w, h)
    }

    /// Same shape, already normalized geometry.
    pub fn with_bounds(&self, bounds: Bounds) -> Self {
        Self::from_bounds(self.kind(), bounds)
    }

    /// Same geometry, new shape.
    pub fn with_kind(&self, kind: MarqueeKind) -> Self {
        Self::from_bounds(kind, self.bounds())
    }

    /// Inclusive hit test.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Rectangle(b) => rectangle_contains(b, p),
            Self::Ellipse(b) => ellipse_contains(b, p),
        }
    }

    pub fn path(&self) -> Vec<PathCommand> {
        match self {
            Self::Rectangle(b) => rectangle_path(b),
            Self::Ellipse(b) => ellipse_path(b),
        }
    }

    /// Stroke the outline onto a surface.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_path(&self.path(), MARQUEE_STROKE);
    }
}

fn rectangle_contains(b: &Bounds, p: Point) -> bool {
    b.x <= p.x && b.right() >= p.x && b.y <= p.y && b.bottom() >= p.y
}

fn ellipse_contains(b: &Bounds, p: Point) -> bool {
    let rx = b.w / 2.0;
    let ry = b.h / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let c = b.center();
    let dx = (p.x - c.x) / rx;
    let dy = (p.y - c.y) / ry;
    dx * dx + dy * dy <= 1.0
}

fn rectangle_path(b: &Bounds) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(Point::new(b.x, b.y)),
        PathCommand::LineTo(Point::new(b.right(), b.y)),
        PathCommand::LineTo(Point::new(b.right(), b.bottom())),
        PathCommand::LineTo(Point::new(b.x, b.bottom())),
        PathCommand::Close,
    ]
}

/// Four cubic arcs, starting at the left-middle point and running clockwise.
fn ellipse_path(b: &Bounds) -> Vec<PathCommand> {
    let ox = (b.w / 2.0) * BEZIER_KAPPA;
    let oy = (b.h / 2.0) * BEZIER_KAPPA;
    let (x, y) = (b.x, b.y);
    let (xe, ye) = (b.right(), b.bottom());
    let Point { x: xm, y: ym } = b.center();

    let cubic = |c1: (f32, f32), c2: (f32, f32), to: (f32, f32)| PathCommand::CubicTo {
        ctrl1: Point::new(c1.0, c1.1),
        ctrl2: Point::new(c2.0, c2.1),
        to: Point::new(to.0, to.1),
    };

    vec![
        PathCommand::MoveTo(Point::new(x, ym)),
        cubic((x, ym - oy), (xm - ox, y), (xm, y)),
        cubic((xm + ox, y), (xe, ym - oy), (xe, ym)),
        cubic((xe, ym + oy), (xm + ox, ye), (xm, ye)),
        cubic((xm - ox, ye), (x, ym + oy), (x, ym)),
        PathCommand::Close,
    ]
}
