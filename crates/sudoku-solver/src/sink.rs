//! Receivers for solutions discovered by [`crate::solve`].

use std::io;

use sudoku_core::Grid;

/// An append-only receiver of solved grids.
///
/// A [`solve`](crate::solve) call is handed an `Option<&mut dyn SolutionSink>`: `None` means
/// "just count solutions", `Some` means "call [`record`](SolutionSink::record) once per
/// solution found", matching the spec's "sink is either absent or an append-only output
/// receiver."
pub trait SolutionSink {
    /// Records one solution. Called once per SOLVED grid the search reaches, in the order
    /// they are found.
    fn record(&mut self, grid: &Grid);
}

impl<F> SolutionSink for F
where
    F: FnMut(&Grid),
{
    fn record(&mut self, grid: &Grid) {
        self(grid);
    }
}

/// Collects every solution by value, in the order found.
impl SolutionSink for Vec<Grid> {
    fn record(&mut self, grid: &Grid) {
        self.push(grid.clone());
    }
}

/// Adapts any [`io::Write`] into a [`SolutionSink`] using the grid print format: each
/// solution renders as one space-separated, newline-terminated grid followed by a blank
/// line (see [`Grid`]'s `Display` impl).
#[derive(Debug)]
pub struct WriteSink<W>(pub W);

impl<W> SolutionSink for WriteSink<W>
where
    W: io::Write,
{
    fn record(&mut self, grid: &Grid) {
        // A sink is a best-effort output receiver; a broken pipe here is not something the
        // search itself should fail over.
        let _ = write!(self.0, "{grid}");
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::Grid;

    use super::*;

    #[test]
    fn closure_sink_is_called_once_per_record() {
        let mut count = 0;
        let mut sink = |_: &Grid| count += 1;
        let grid = Grid::allocate(4).unwrap();
        sink.record(&grid);
        sink.record(&grid);
        assert_eq!(count, 2);
    }

    #[test]
    fn vec_sink_collects_solutions() {
        let mut sink: Vec<Grid> = Vec::new();
        let grid = Grid::allocate(4).unwrap();
        sink.record(&grid);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0], grid);
    }

    #[test]
    fn write_sink_renders_the_grid_print_format() {
        let mut buf = Vec::new();
        let mut sink = WriteSink(&mut buf);
        let grid = Grid::allocate(1).unwrap();
        sink.record(&grid);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "1\n\n");
    }
}
