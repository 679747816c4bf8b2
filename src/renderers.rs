use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::maze::MazeDescriptor;

use fnv::FnvHashSet;

pub const DEFAULT_WALL_GLYPH: char = '█';
pub const DEFAULT_OPEN_GLYPH: char = ' ';
pub const DEFAULT_PATH_GLYPH: char = '·';

#[derive(Debug, Clone)]
pub struct RenderOptions {
    wall_glyph: char,
    open_glyph: char,
    path_glyph: char,
    path: Option<Vec<Cartesian2DCoordinate>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            wall_glyph: DEFAULT_WALL_GLYPH,
            open_glyph: DEFAULT_OPEN_GLYPH,
            path_glyph: DEFAULT_PATH_GLYPH,
            path: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }
    pub fn wall_glyph(mut self, glyph: char) -> RenderOptionsBuilder {
        self.options.wall_glyph = glyph;
        self
    }
    pub fn open_glyph(mut self, glyph: char) -> RenderOptionsBuilder {
        self.options.open_glyph = glyph;
        self
    }
    pub fn path_glyph(mut self, glyph: char) -> RenderOptionsBuilder {
        self.options.path_glyph = glyph;
        self
    }
    pub fn path(mut self, path: Option<Vec<Cartesian2DCoordinate>>) -> RenderOptionsBuilder {
        self.options.path = path;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Render the maze as text, one line per grid row and one glyph per cell.
///
/// Path cells that are not open in the maze are drawn as walls.
pub fn render_text(maze: &MazeDescriptor, options: &RenderOptions) -> String {
    let on_path: FnvHashSet<Cartesian2DCoordinate> = options.path
        .iter()
        .flat_map(|path| path.iter().cloned())
        .collect();

    // Flags past the last row are not part of the grid
    let cells = maze.cols
        .checked_mul(maze.rows)
        .map_or(maze.data.len(), |cells| cells.min(maze.data.len()));

    let mut output = String::with_capacity(cells.saturating_mul(4));
    for (index, &wall) in maze.data.iter().take(cells).enumerate() {
        let glyph = if wall {
            options.wall_glyph
        } else if maze.coordinate_of(index).map_or(false, |c| on_path.contains(&c)) {
            options.path_glyph
        } else {
            options.open_glyph
        };
        output.push(glyph);
        if maze.cols > 0 && (index + 1) % maze.cols == 0 {
            output.push('\n');
        }
    }
    output
}

impl fmt::Display for MazeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn corridor() -> MazeDescriptor {
        let mut data = vec![true; 15];
        data[6] = false;
        data[7] = false;
        data[8] = false;
        MazeDescriptor { data, cols: 5, rows: 3 }
    }

    #[test]
    fn ascii_rendering() {
        let options = RenderOptionsBuilder::new().wall_glyph('#').build();
        assert_eq!(render_text(&corridor(), &options), "#####\n#   #\n#####\n");
    }

    #[test]
    fn path_rendering() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        let options = RenderOptionsBuilder::new()
            .wall_glyph('#')
            .open_glyph('.')
            .path_glyph('o')
            .path(Some(vec![gc(1, 1), gc(2, 1), gc(0, 0)]))
            .build();
        assert_eq!(render_text(&corridor(), &options), "#####\n#oo.#\n#####\n");
    }

    #[test]
    fn display_uses_default_glyphs() {
        let text = format!("{}", corridor());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "█   █");
        assert!(lines.iter().all(|l| l.chars().count() == 5));
    }

    #[test]
    fn mismatched_data_length() {
        let options = RenderOptionsBuilder::new().wall_glyph('#').open_glyph('.').build();
        let short = MazeDescriptor { data: vec![true, false], cols: 3, rows: 3 };
        assert_eq!(render_text(&short, &options), "#.");
        let long = MazeDescriptor { data: vec![false; 6], cols: 2, rows: 2 };
        assert_eq!(render_text(&long, &options), "..\n..\n");
    }
}
