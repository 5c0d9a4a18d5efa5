//! Size classification for bento grid items.
//!
//! Maps an image's pixel aspect ratio (or an explicit authoring tag) to a
//! column/row span on a fixed-column grid. Pure geometry — no allocations,
//! `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use bentolayout::{classify, GridSize, Size, SizeTag};
//!
//! // A 3:1 panorama wants a wide cell.
//! let size = classify(Size::new(3000, 1000), SizeTag::Auto, 0).unwrap();
//! assert_eq!(size, GridSize::new(3, 2));
//!
//! // Manual tags bypass the ratio entirely.
//! let size = classify(Size::new(1, 1), SizeTag::ExtraWide, 0).unwrap();
//! assert_eq!(size, GridSize::new(3, 2));
//! ```

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Column and row spans for one grid cell.
///
/// Both spans are ≥ 1. After packing, `col_span` never exceeds the grid's
/// column count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Number of columns the cell spans.
    pub col_span: u32,
    /// Number of rows the cell spans.
    pub row_span: u32,
}

impl GridSize {
    /// Create a new span pair.
    pub const fn new(col_span: u32, row_span: u32) -> Self {
        Self { col_span, row_span }
    }

    /// Number of grid cells the span covers.
    pub const fn area(self) -> u32 {
        self.col_span * self.row_span
    }
}

/// Explicit authoring override for a grid item's size.
///
/// Editors can tag an image instead of relying on its aspect ratio.
/// [`Auto`](Self::Auto) defers to ratio classification.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeTag {
    /// Classify by aspect ratio.
    #[default]
    Auto,
    /// Single column, two rows.
    Small,
    /// Two columns, two rows.
    MediumWide,
    /// Single column, two rows (the "medium" height is visual, not span-level).
    MediumTall,
    /// Two columns, two rows.
    Large,
    /// Three columns, two rows.
    ExtraWide,
}

impl SizeTag {
    /// Fixed span for a non-[`Auto`](Self::Auto) tag. `None` for `Auto`.
    pub const fn grid_size(self) -> Option<GridSize> {
        match self {
            Self::Auto => None,
            Self::Small | Self::MediumTall => Some(GridSize::new(1, 2)),
            Self::MediumWide | Self::Large => Some(GridSize::new(2, 2)),
            Self::ExtraWide => Some(GridSize::new(3, 2)),
        }
    }

    /// Parse an authoring-side tag string, case-insensitively.
    ///
    /// Accepts the camelCase spellings used in content documents
    /// (`"small"`, `"mediumWide"`, `"mediumTall"`, `"large"`,
    /// `"extraWide"`, `"auto"`). Returns `None` for anything else;
    /// callers that must not fail treat unknown tags as [`Small`](Self::Small).
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("auto") {
            Some(Self::Auto)
        } else if s.eq_ignore_ascii_case("small") {
            Some(Self::Small)
        } else if s.eq_ignore_ascii_case("mediumwide") {
            Some(Self::MediumWide)
        } else if s.eq_ignore_ascii_case("mediumtall") {
            Some(Self::MediumTall)
        } else if s.eq_ignore_ascii_case("large") {
            Some(Self::Large)
        } else if s.eq_ignore_ascii_case("extrawide") {
            Some(Self::ExtraWide)
        } else {
            None
        }
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Image has zero width or height (only reachable with [`SizeTag::Auto`]).
    ZeroImageDimension,
    /// Grid column count is zero.
    ZeroColumnCount,
}

/// Number of span choices cycled per ratio bucket.
const VARIANTS: usize = 4;

/// Span choices per ratio bucket, indexed by `index % 4`.
///
/// Each row is one descending ratio bucket. Wider images get wider spans,
/// taller images taller spans; cycling by item index keeps runs of
/// similarly-shaped images from producing identical cells.
const BUCKETS: &[(f64, [GridSize; VARIANTS])] = &[
    // ≥ 3.0 — panorama
    (3.0, [
        GridSize::new(3, 2),
        GridSize::new(2, 2),
        GridSize::new(3, 2),
        GridSize::new(2, 2),
    ]),
    // ≥ 2.0 — wide landscape
    (2.0, [
        GridSize::new(2, 2),
        GridSize::new(3, 2),
        GridSize::new(2, 2),
        GridSize::new(2, 2),
    ]),
    // ≥ 1.3 — landscape
    (1.3, [
        GridSize::new(2, 2),
        GridSize::new(1, 2),
        GridSize::new(2, 2),
        GridSize::new(2, 2),
    ]),
    // ≥ 0.8 — squarish
    (0.8, [
        GridSize::new(1, 2),
        GridSize::new(2, 2),
        GridSize::new(1, 2),
        GridSize::new(2, 2),
    ]),
    // ≥ 0.5 — portrait
    (0.5, [
        GridSize::new(1, 3),
        GridSize::new(1, 2),
        GridSize::new(1, 3),
        GridSize::new(2, 3),
    ]),
    // ≥ 0.3 — tall portrait
    (0.3, [
        GridSize::new(1, 3),
        GridSize::new(1, 4),
        GridSize::new(1, 3),
        GridSize::new(1, 3),
    ]),
];

/// Fallback bucket for ratios below 0.3 (extreme vertical slivers).
const SLIVER: [GridSize; VARIANTS] = [
    GridSize::new(1, 4),
    GridSize::new(1, 3),
    GridSize::new(1, 4),
    GridSize::new(1, 4),
];

/// Classify an image into a grid span.
///
/// A non-[`Auto`](SizeTag::Auto) `tag` wins outright and never inspects
/// `size`. Otherwise the image's aspect ratio selects a bucket and
/// `index % 4` selects one of the bucket's span choices.
///
/// Deterministic for fixed inputs. Zero dimensions are rejected rather than
/// propagated as a NaN ratio.
pub fn classify(size: Size, tag: SizeTag, index: usize) -> Result<GridSize, LayoutError> {
    if let Some(fixed) = tag.grid_size() {
        return Ok(fixed);
    }
    if size.width == 0 || size.height == 0 {
        return Err(LayoutError::ZeroImageDimension);
    }

    let ratio = size.width as f64 / size.height as f64;
    let variant = index % VARIANTS;

    for (threshold, choices) in BUCKETS {
        if ratio >= *threshold {
            return Ok(choices[variant]);
        }
    }
    Ok(SLIVER[variant])
}
