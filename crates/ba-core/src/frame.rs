use std::fmt;

/// Buffer de pixels source. Lu seulement par le pipeline.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use ba_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ba_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Build an opaque buffer from row-major RGB triples.
    ///
    /// Missing pixels stay black; extra pixels are ignored.
    ///
    /// # Example
    /// ```
    /// use ba_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::from_rgb(2, 1, &[(255, 0, 0), (0, 0, 255)]);
    /// assert_eq!(fb.pixel(1, 0), (0, 0, 255, 255));
    /// ```
    #[must_use]
    pub fn from_rgb(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> Self {
        let mut fb = Self::new(width, height);
        for (chunk, &(r, g, b)) in fb.data.chunks_exact_mut(4).zip(pixels) {
            chunk.copy_from_slice(&[r, g, b, 255]);
        }
        fb
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use ba_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Total pixel count.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// One image of a frame sequence, with its display delay when animated.
#[derive(Clone, Debug)]
pub struct Frame {
    pub buffer: FrameBuffer,
    /// Délai d'affichage en millisecondes. `None` pour une image fixe
    /// ou une frame GIF sans délai déclaré.
    pub delay_ms: Option<u32>,
}

impl Frame {
    /// A frame without display delay.
    #[must_use]
    pub fn still(buffer: FrameBuffer) -> Self {
        Self {
            buffer,
            delay_ms: None,
        }
    }
}

/// Grille de sortie ASCII : `height` lignes de `width` glyphes.
///
/// # Example
/// ```
/// use ba_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(3, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.get(0, 0), '@');
/// assert_eq!(grid.to_string(), "@  \n   \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    ///
    /// # Example
    /// ```
    /// use ba_core::frame::AsciiGrid;
    /// let grid = AsciiGrid::new(80, 24);
    /// assert_eq!(grid.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set the glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Get the glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// Rows joined with `\n`, each row terminated (including the last).
impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width as usize * 4 + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter());
            line.push('\n');
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_row_major() {
        let mut grid = AsciiGrid::new(2, 2);
        grid.set(1, 0, 'a');
        grid.set(0, 1, 'b');
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec![" a".to_string(), "b ".to_string()]);
    }

    #[test]
    fn display_terminates_every_row() {
        let grid = AsciiGrid::new(1, 3);
        assert_eq!(grid.to_string(), " \n \n \n");
    }

    #[test]
    fn from_rgb_is_opaque() {
        let fb = FrameBuffer::from_rgb(1, 1, &[(10, 20, 30)]);
        assert_eq!(fb.pixel(0, 0), (10, 20, 30, 255));
        assert_eq!(fb.area(), 1);
    }
}
