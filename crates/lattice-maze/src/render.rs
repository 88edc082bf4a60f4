//! Plain-text rendering of mazes.
//!
//! Each cell is drawn as a bracketed tag followed by a space: `[S]` for the
//! start, `[G]` for the goal, `[X]` for a barrier, `[*]` for a path cell in
//! [`render_path`], and the right-aligned cell id otherwise.

use lattice_core::Cell;

use crate::MazeInstance;

/// Header lines naming the start, goal and barriers.
pub fn render_summary(maze: &MazeInstance) -> String {
    let lattice = maze.lattice();
    let coords = |c: Cell| lattice.point(c).map(|p| p.to_string()).unwrap_or_default();
    let barriers: Vec<String> = maze.barriers().iter().map(Cell::to_string).collect();
    format!(
        "Start Node: {} at {}\nGoal Node: {} at {}\nBarrier Nodes: [{}]",
        maze.start(),
        coords(maze.start()),
        maze.goal(),
        coords(maze.goal()),
        barriers.join(", ")
    )
}

/// The maze layout, one text line per row.
pub fn render_layout(maze: &MazeInstance) -> String {
    render_with(maze, |_| false)
}

/// The maze layout with the cells of `path` marked `[*]`.
///
/// Start and goal keep their own tags.
pub fn render_path(maze: &MazeInstance, path: &[Cell]) -> String {
    let mut on_path = vec![false; maze.lattice().len()];
    for c in path {
        if let Some(slot) = on_path.get_mut(c.index()) {
            *slot = true;
        }
    }
    render_with(maze, |c| on_path[c.index()])
}

fn render_with(maze: &MazeInstance, marked: impl Fn(Cell) -> bool) -> String {
    let lattice = maze.lattice();
    let mut out = String::new();
    for y in 0..lattice.rows() {
        let mut row = String::new();
        for x in 0..lattice.cols() {
            let Some(c) = lattice.cell_xy(x, y) else {
                continue;
            };
            if c == maze.start() {
                row.push_str("[S] ");
            } else if c == maze.goal() {
                row.push_str("[G] ");
            } else if maze.is_barrier(c) {
                row.push_str("[X] ");
            } else if marked(c) {
                row.push_str("[*] ");
            } else {
                row.push_str(&format!("[{c:>2}] "));
            }
        }
        if y > 0 {
            out.push('\n');
        }
        out.push_str(row.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::Lattice;

    fn maze() -> MazeInstance {
        let l = Lattice::new(6, 6).unwrap();
        MazeInstance::new(l, Cell(0), Cell(35), [14, 15, 20, 21].map(Cell)).unwrap()
    }

    #[test]
    fn layout_marks_every_kind_of_cell() {
        let text = render_layout(&maze());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[S] [ 1] [ 2] [ 3] [ 4] [ 5]");
        assert_eq!(lines[2], "[12] [13] [X] [X] [16] [17]");
        assert_eq!(lines[5], "[30] [31] [32] [33] [34] [G]");
    }

    #[test]
    fn path_overlay() {
        let path = [0, 1, 2, 9, 16, 22, 29, 35].map(Cell);
        let text = render_path(&maze(), &path);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[S] [*] [*] [ 3] [ 4] [ 5]");
        assert_eq!(lines[1], "[ 6] [ 7] [ 8] [*] [10] [11]");
        assert_eq!(lines[5], "[30] [31] [32] [33] [34] [G]");
    }

    #[test]
    fn summary_lists_coordinates() {
        let text = render_summary(&maze());
        assert_eq!(
            text,
            "Start Node: 0 at (0, 0)\nGoal Node: 35 at (5, 5)\nBarrier Nodes: [14, 15, 20, 21]"
        );
    }
}
