//! First-fit occupancy-grid packing with opportunistic widening.
//!
//! Places classified spans onto a fixed-column grid in reading order: scan
//! rows top-to-bottom, columns left-to-right, take the first slot where the
//! rectangle fits. A freshly placed item may be widened into trailing empty
//! columns in its rows to avoid narrow orphan gaps.
//!
//! The occupancy grid is allocated fresh per call and discarded — packing is
//! a pure transformation with no state across calls.
//!
//! # Example
//!
//! ```
//! use bentolayout::{GridConfig, GridSize};
//!
//! let sizes = [GridSize::new(3, 2), GridSize::new(2, 2), GridSize::new(2, 2)];
//! let placed = GridConfig::new(5).pack(&sizes).unwrap();
//!
//! assert_eq!(placed.len(), 3);
//! assert_eq!((placed[0].row, placed[0].col), (0, 0));
//! ```

use alloc::vec::Vec;

use crate::classify::{GridSize, LayoutError, Size, SizeTag, classify};

/// Column count used by the site's gallery grid.
pub const DEFAULT_COLUMNS: u32 = 5;

/// Default search ceiling, in rows, for first-fit placement.
///
/// Row spans are clamped to this ceiling, and items that cannot be placed
/// within it are force-placed in a fresh row below the grid (see
/// [`GridConfig::pack`]). Occupancy bookkeeping never allocates beyond
/// `max_rows × columns` cells.
pub const DEFAULT_MAX_ROWS: u32 = 100;

/// Widening never grows an item by more than this many columns.
const MAX_WIDEN: u32 = 2;

/// Packing configuration.
///
/// Explicit configuration passed to the packer — there is no ambient or
/// global grid state.
///
/// # Example
///
/// ```
/// use bentolayout::{GridConfig, Size};
///
/// let images = [Size::new(3000, 1000), Size::new(800, 800)];
/// let placed = GridConfig::new(5).max_rows(10).layout(&images).unwrap();
/// assert_eq!(placed.len(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Row ceiling for the placement search; row spans clamp to it.
    pub max_rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl GridConfig {
    /// Create a configuration with the given column count and the default
    /// row ceiling.
    pub const fn new(columns: u32) -> Self {
        Self {
            columns,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    /// Set the row ceiling for the placement search.
    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Pack spans onto the grid in input order.
    ///
    /// Per item: `col_span` is clamped to the column count and `row_span` to
    /// the row ceiling (both at least 1), then the first free top-left slot
    /// in reading order is taken. If trailing columns to the right of the
    /// placed rectangle are free across all of its rows, and there are 1 or
    /// 2 of them, and the item is not last, the item is widened to absorb
    /// them.
    ///
    /// When no slot exists, `col_span` shrinks by one and the scan repeats;
    /// at `col_span == 1` with still no slot, the item is force-placed at
    /// column 0 of the first row below everything placed so far. The search
    /// is bounded, so packing always terminates.
    ///
    /// Output preserves input length and order. After the initial clamp,
    /// `row_span` is never changed.
    pub fn pack(&self, sizes: &[GridSize]) -> Result<Vec<Placement>, LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::ZeroColumnCount);
        }

        let mut grid = OccupancyGrid::new(self.columns, self.max_rows);
        let mut placements = Vec::with_capacity(sizes.len());
        // One past the lowest occupied row; forced placements start here.
        let mut bottom = 0u32;

        for (i, size) in sizes.iter().enumerate() {
            let is_last = i + 1 == sizes.len();
            let mut span = GridSize::new(
                size.col_span.clamp(1, self.columns),
                size.row_span.clamp(1, self.max_rows.max(1)),
            );

            let found = loop {
                if let Some(slot) = grid.first_fit(span) {
                    break Some(slot);
                }
                if span.col_span == 1 {
                    break None;
                }
                span.col_span -= 1;
            };

            let (row, col) = match found {
                Some((row, col)) => {
                    if !is_last {
                        let run = grid.free_run(row, col + span.col_span, span.row_span);
                        if run >= 1 && run <= MAX_WIDEN {
                            span.col_span = (span.col_span + run).min(self.columns);
                        }
                    }
                    (row, col)
                }
                None => {
                    // Grid exhausted within the ceiling. Append a fresh row
                    // rather than retrying.
                    span.col_span = 1;
                    (bottom, 0)
                }
            };

            grid.mark(row, col, span);
            bottom = bottom.max(row.saturating_add(span.row_span));
            placements.push(Placement { row, col, size: span });
        }

        Ok(placements)
    }

    /// Classify and pack a sequence of images in one step.
    ///
    /// Each image is classified by aspect ratio, using its position as the
    /// variant index, then packed. Zero-dimension images are rejected.
    pub fn layout(&self, images: &[Size]) -> Result<Vec<Placement>, LayoutError> {
        let mut sizes = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            sizes.push(classify(*image, SizeTag::Auto, i)?);
        }
        self.pack(&sizes)
    }

    /// Like [`layout`](Self::layout), honoring per-image manual tags.
    pub fn layout_tagged(
        &self,
        items: &[(Size, SizeTag)],
    ) -> Result<Vec<Placement>, LayoutError> {
        let mut sizes = Vec::with_capacity(items.len());
        for (i, (image, tag)) in items.iter().enumerate() {
            sizes.push(classify(*image, *tag, i)?);
        }
        self.pack(&sizes)
    }
}

/// A packed item: top-left cell plus final spans.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Top row of the item, 0-based.
    pub row: u32,
    /// Leftmost column of the item, 0-based.
    pub col: u32,
    /// Final spans after clamping and widening.
    pub size: GridSize,
}

impl Placement {
    /// 1-based CSS grid line numbers: `(row_start, col_start, row_end, col_end)`.
    ///
    /// Suitable for `grid-area: row_start / col_start / row_end / col_end`.
    pub const fn grid_lines(&self) -> (u32, u32, u32, u32) {
        (
            self.row + 1,
            self.col + 1,
            self.row + 1 + self.size.row_span,
            self.col + 1 + self.size.col_span,
        )
    }
}

/// Pack spans and return only the adjusted spans, in input order.
///
/// The packing-contract form of [`GridConfig::pack`]: same length and order
/// as the input, `col_span` clamped to `columns` and possibly widened,
/// `row_span` clamped only by the default row ceiling.
///
/// # Example
///
/// ```
/// use bentolayout::{optimize, GridSize};
///
/// let out = optimize(&[GridSize::new(10, 2)], 5).unwrap();
/// assert_eq!(out, vec![GridSize::new(5, 2)]);
/// ```
pub fn optimize(sizes: &[GridSize], columns: u32) -> Result<Vec<GridSize>, LayoutError> {
    let placements = GridConfig::new(columns).pack(sizes)?;
    Ok(placements.iter().map(|p| p.size).collect())
}

/// Cell-occupancy matrix, grown by whole rows on demand.
///
/// Rows beyond the allocated height read as free. Storage never exceeds
/// `max_rows` rows: cells below the ceiling hold only force-placed items,
/// which nothing scans, so they are not recorded. Fresh per pack call.
struct OccupancyGrid {
    columns: u32,
    max_rows: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    fn new(columns: u32, max_rows: u32) -> Self {
        Self {
            columns,
            max_rows,
            rows: 0,
            cells: Vec::new(),
        }
    }

    fn is_free(&self, row: u32, col: u32) -> bool {
        if row >= self.rows {
            return true;
        }
        !self.cells[row as usize * self.columns as usize + col as usize]
    }

    /// Whether a `span` rectangle anchored at `(row, col)` covers only free
    /// cells. The caller guarantees `col + span.col_span <= columns`.
    fn rect_is_free(&self, row: u32, col: u32, span: GridSize) -> bool {
        for r in row..row + span.row_span {
            for c in col..col + span.col_span {
                if !self.is_free(r, c) {
                    return false;
                }
            }
        }
        true
    }

    /// First slot, in reading order, where `span` fits entirely above the
    /// row ceiling.
    fn first_fit(&self, span: GridSize) -> Option<(u32, u32)> {
        if span.row_span > self.max_rows || span.col_span > self.columns {
            return None;
        }
        for row in 0..=self.max_rows - span.row_span {
            for col in 0..=self.columns - span.col_span {
                if self.rect_is_free(row, col, span) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Count contiguous columns starting at `col` that are free across all
    /// of `row_span` rows, up to the right edge.
    ///
    /// The source checked only the starting row here; checking every row of
    /// the item keeps widening from overlapping cells claimed lower down.
    fn free_run(&self, row: u32, col: u32, row_span: u32) -> u32 {
        let mut run = 0;
        for c in col..self.columns {
            let column_free = (row..row + row_span).all(|r| self.is_free(r, c));
            if !column_free {
                break;
            }
            run += 1;
        }
        run
    }

    fn mark(&mut self, row: u32, col: u32, span: GridSize) {
        // Rows at or below the ceiling are never scanned again, so marking
        // clips there; forced placements can sit entirely outside storage.
        let end = row.saturating_add(span.row_span).min(self.max_rows);
        self.ensure_rows(end);
        for r in row..end {
            for c in col..col + span.col_span {
                self.cells[r as usize * self.columns as usize + c as usize] = true;
            }
        }
    }

    fn ensure_rows(&mut self, rows: u32) {
        if rows > self.rows {
            self.cells
                .resize(rows as usize * self.columns as usize, false);
            self.rows = rows;
        }
    }
}
