use std::ops::{Add, Sub};

/// A position in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned box with a top-left origin and non-negative extent.
///
/// The only way to build one is [`Bounds::normalized`], so a box dragged
/// towards the upper-left still reports its true top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn normalized(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x: if w < 0.0 { x + w } else { x },
            y: if h < 0.0 { y + h } else { y },
            w: w.abs(),
            h: h.abs(),
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }
}

/// 8-bit straight-alpha colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One step of an outline, in the vocabulary of 2D canvas APIs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// Flatten a path into a polygon, sampling each cubic with `segments` lines.
///
/// Hosts without native Bézier clipping use this to build masks.
pub fn flatten_path(path: &[PathCommand], segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let mut points = Vec::new();
    let mut current = Point::default();

    for cmd in path {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                points.push(p);
                current = p;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    points.push(cubic_point(current, ctrl1, ctrl2, to, t));
                }
                current = to;
            }
            PathCommand::Close => {}
        }
    }

    points
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
