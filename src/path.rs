// Stroke geometry: points and the command list a stroke is made of.
// Visual: nothing on its own; the compositor turns a Path into ink.

/// A position in view coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    QuadTo { control: Point, end: Point },
    LineTo(Point),
}

impl PathCommand {
    /// Where the pen sits after this command.
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadTo { end, .. } => end,
        }
    }
}

/// One stroke's smoothed geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
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

    pub fn last(&self) -> Option<&PathCommand> {
        self.commands.last()
    }

    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub(crate) fn reset(&mut self) {
        self.commands.clear();
    }

    /// The start point, when the path draws something but never leaves it
    /// (a tap: `MoveTo p, LineTo p`).
    pub fn as_dot(&self) -> Option<Point> {
        let (first, rest) = self.commands.split_first()?;
        let PathCommand::MoveTo(start) = *first else {
            return None;
        };
        if rest.is_empty() {
            return None;
        }
        let stays = rest.iter().all(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p == start,
            PathCommand::QuadTo { control, end } => control == start && end == start,
        });
        stays.then_some(start)
    }

    /// Convert to a tiny-skia path. None when there is nothing to draw
    /// (empty path, or a lone MoveTo).
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let n = self.commands.len();
        let mut pb = tiny_skia::PathBuilder::with_capacity(n, n * 2);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
                PathCommand::QuadTo { control, end } => {
                    pb.quad_to(control.x, control.y, end.x, end.y)
                }
                PathCommand::LineTo(p) => pb.line_to(p.x, p.y),
            }
        }
        pb.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cmds: &[PathCommand]) -> Path {
        let mut p = Path::new();
        for c in cmds {
            p.push(*c);
        }
        p
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = Point::new(0.0, 0.0).midpoint(Point::new(10.0, -4.0));
        assert_eq!(m, Point::new(5.0, -2.0));
    }

    #[test]
    fn tap_is_a_dot() {
        let p = Point::new(3.0, 7.0);
        let tap = path(&[PathCommand::MoveTo(p), PathCommand::LineTo(p)]);
        assert_eq!(tap.as_dot(), Some(p));
    }

    #[test]
    fn moving_path_is_not_a_dot() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let line = path(&[PathCommand::MoveTo(a), PathCommand::LineTo(b)]);
        assert_eq!(line.as_dot(), None);
        assert_eq!(path(&[PathCommand::MoveTo(a)]).as_dot(), None);
        assert_eq!(Path::new().as_dot(), None);
    }

    #[test]
    fn lone_move_has_nothing_to_draw() {
        let p = path(&[PathCommand::MoveTo(Point::new(1.0, 1.0))]);
        assert!(p.to_skia().is_none());
        assert!(Path::new().to_skia().is_none());
    }

    #[test]
    fn curve_converts_to_skia() {
        let p = path(&[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::QuadTo {
                control: Point::new(0.0, 0.0),
                end: Point::new(5.0, 5.0),
            },
            PathCommand::LineTo(Point::new(10.0, 10.0)),
        ]);
        let skia = p.to_skia().expect("drawable path");
        let bounds = skia.bounds();
        assert_eq!(bounds.right(), 10.0);
        assert_eq!(bounds.bottom(), 10.0);
    }
}
