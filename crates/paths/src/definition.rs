use raykin_physics::V2;

/// An ordered list of waypoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathDefinition {
    pub points: Vec<V2>,
}

impl PathDefinition {
    pub fn new(points: Vec<V2>) -> PathDefinition {
        PathDefinition { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Walk the points forever, bouncing at either end: `0, 1, ..., n - 1, n - 2, ..., 0, 1, ...`.
    ///
    /// An empty path yields nothing.  A path with one point yields that point forever.
    pub fn points(&self) -> PathPoints<'_> {
        PathPoints {
            points: &self.points,
            cursor: Cursor::default(),
        }
    }

    /// Consecutive pairs of points, i.e. the lines which make up the path.
    pub fn segments(&self) -> impl Iterator<Item = (V2, V2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Position in a bouncing walk, kept apart from the points so that owners of a path can walk it too.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Cursor {
    pub(crate) index: usize,
    forward: bool,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor {
            index: 0,
            forward: true,
        }
    }
}

impl Cursor {
    /// Step to the next index of a path with `len` points, turning around at either end.
    pub(crate) fn advance(&mut self, len: usize) {
        let last = match len.checked_sub(1) {
            Some(0) | None => return,
            Some(l) => l,
        };

        if self.index == 0 {
            self.forward = true;
        } else if self.index >= last {
            self.forward = false;
        }

        if self.forward {
            self.index += 1;
        } else {
            self.index -= 1;
        }
    }
}

/// The bouncing walk over a [PathDefinition].  See [PathDefinition::points].
#[derive(Clone, Debug)]
pub struct PathPoints<'a> {
    points: &'a [V2],
    cursor: Cursor,
}

impl<'a> PathPoints<'a> {
    /// Index of the point the next call to `next` will yield.
    pub fn index(&self) -> usize {
        self.cursor.index
    }

    /// Go back to the first point, heading forward.
    pub fn restart(&mut self) {
        self.cursor = Cursor::default();
    }
}

impl<'a> Iterator for PathPoints<'a> {
    type Item = V2;

    fn next(&mut self) -> Option<V2> {
        let point = *self.points.get(self.cursor.index)?;
        self.cursor.advance(self.points.len());
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.points.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
