//! Path geometry: points, bounds and the drawing command list.

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned bounds with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Builds normalized bounds spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn include(&mut self, point: Point) {
        self.left = self.left.min(point.x);
        self.top = self.top.min(point.y);
        self.right = self.right.max(point.x);
        self.bottom = self.bottom.max(point.y);
    }
}

/// One step of a renderable outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begin a new sub-path at the point
    MoveTo(Point),
    /// Straight segment from the current point
    LineTo(Point),
    /// Quadratic Bézier from the current point through `control` to `end`
    QuadTo { control: Point, end: Point },
    /// Closed rectangle, wound counter-clockwise starting at the top-left corner
    AddRect(Bounds),
    /// Closed circle, wound counter-clockwise
    AddCircle { center: Point, radius: f64 },
    /// Close the current sub-path
    Close,
}

/// Ordered list of drawing commands making up one path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    commands: Vec<PathCommand>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry consisting of a single `MoveTo`.
    pub fn starting_at(point: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(point)],
        }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the bounds of every point the commands reference.
    ///
    /// Quadratic control points are included, so the result may be slightly larger
    /// than the drawn curve. Circles contribute their bounding square. Returns `None`
    /// when no command references a point.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let mut include = |point: Point| {
            bounds = Some(match bounds {
                Some(mut b) => {
                    b.include(point);
                    b
                }
                None => Bounds::from_corners(point, point),
            });
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::QuadTo { control, end } => {
                    include(control);
                    include(end);
                }
                PathCommand::AddRect(rect) => {
                    include(Point::new(rect.left, rect.top));
                    include(Point::new(rect.right, rect.bottom));
                }
                PathCommand::AddCircle { center, radius } => {
                    include(Point::new(center.x - radius, center.y - radius));
                    include(Point::new(center.x + radius, center.y + radius));
                }
                PathCommand::Close => {}
            }
        }

        bounds
    }
}

impl FromIterator<PathCommand> for Geometry {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
