//! Invariant sweep for the classifier and packer.
//!
//! Packs a large family of generated inputs and checks, for every output:
//! bounds, no-overlap, order preservation, determinism, and termination.
//! Failures accumulate into a list so one run reports every broken case.

use bentolayout::{GridConfig, GridSize, Placement, Size, SizeTag, classify, optimize};

/// Aspect-ratio pool covering every classifier bucket, including boundaries.
const DIMENSIONS: &[(u32, u32)] = &[
    (4000, 1000), // 4.0  panorama
    (3000, 1000), // 3.0  bucket boundary
    (2000, 1000), // 2.0  bucket boundary
    (1920, 1080), // 1.78 landscape
    (1300, 1000), // 1.3  bucket boundary
    (1000, 1000), // 1.0  square
    (800, 1000),  // 0.8  bucket boundary
    (600, 1000),  // 0.6  portrait
    (500, 1000),  // 0.5  bucket boundary
    (350, 1000),  // 0.35 tall
    (100, 1000),  // 0.1  sliver
];

fn check_placements(
    tag: &str,
    input: &[GridSize],
    placed: &[Placement],
    config: &GridConfig,
    failures: &mut Vec<String>,
) {
    let columns = config.columns;

    if placed.len() != input.len() {
        failures.push(format!(
            "{tag}: length changed ({} in, {} out)",
            input.len(),
            placed.len()
        ));
        return;
    }

    for (i, p) in placed.iter().enumerate() {
        if p.size.col_span < 1 || p.size.col_span > columns {
            failures.push(format!(
                "{tag}: item {i} col_span {} outside 1..={columns}",
                p.size.col_span
            ));
        }
        if p.size.row_span != input[i].row_span.clamp(1, config.max_rows.max(1)) {
            failures.push(format!(
                "{tag}: item {i} row_span changed ({} -> {})",
                input[i].row_span, p.size.row_span
            ));
        }
        if p.col + p.size.col_span > columns {
            failures.push(format!(
                "{tag}: item {i} overflows right edge (col {} span {})",
                p.col, p.size.col_span
            ));
        }
    }

    for i in 0..placed.len() {
        for j in i + 1..placed.len() {
            let a = &placed[i];
            let b = &placed[j];
            let disjoint = a.row + a.size.row_span <= b.row
                || b.row + b.size.row_span <= a.row
                || a.col + a.size.col_span <= b.col
                || b.col + b.size.col_span <= a.col;
            if !disjoint {
                failures.push(format!("{tag}: items {i} and {j} overlap ({a:?} vs {b:?})"));
            }
        }
    }

    // Density bound: disjoint placements can never cover more cells than
    // their bounding rows provide.
    let height = placed
        .iter()
        .map(|p| p.row + p.size.row_span)
        .max()
        .unwrap_or(0);
    let used: u64 = placed.iter().map(|p| u64::from(p.size.area())).sum();
    if used > u64::from(height) * u64::from(columns) {
        failures.push(format!(
            "{tag}: {used} cells claimed in a {height}x{columns} extent"
        ));
    }
}

#[test]
fn classify_covers_all_buckets_deterministically() {
    let mut failures: Vec<String> = Vec::new();

    for &(w, h) in DIMENSIONS {
        for index in 0..8 {
            let a = classify(Size::new(w, h), SizeTag::Auto, index);
            let b = classify(Size::new(w, h), SizeTag::Auto, index);
            if a != b {
                failures.push(format!("{w}x{h} index {index}: {a:?} != {b:?}"));
                continue;
            }
            let Ok(size) = a else {
                failures.push(format!("{w}x{h} index {index}: unexpected error {a:?}"));
                continue;
            };
            if size.col_span < 1 || size.row_span < 1 {
                failures.push(format!("{w}x{h} index {index}: degenerate span {size:?}"));
            }
            // Variant cycling wraps at 4.
            if index >= 4 {
                let wrapped = classify(Size::new(w, h), SizeTag::Auto, index - 4);
                if wrapped != a {
                    failures.push(format!("{w}x{h}: index {index} differs from {}", index - 4));
                }
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn pack_invariants_across_grid_sweep() {
    let mut failures: Vec<String> = Vec::new();

    for columns in 1..=8u32 {
        for count in 0..=16usize {
            // Deterministic pseudo-variety: walk the dimension pool with a
            // stride so neighboring items differ in shape.
            let sizes: Vec<GridSize> = (0..count)
                .map(|i| {
                    let (w, h) = DIMENSIONS[(i * 3 + columns as usize) % DIMENSIONS.len()];
                    classify(Size::new(w, h), SizeTag::Auto, i).unwrap()
                })
                .collect();

            let config = GridConfig::new(columns);
            let tag = format!("columns {columns}, {count} items");
            match config.pack(&sizes) {
                Ok(placed) => check_placements(&tag, &sizes, &placed, &config, &mut failures),
                Err(e) => failures.push(format!("{tag}: pack failed: {e:?}")),
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn pack_is_deterministic() {
    let sizes: Vec<GridSize> = (0..12)
        .map(|i| {
            let (w, h) = DIMENSIONS[i % DIMENSIONS.len()];
            classify(Size::new(w, h), SizeTag::Auto, i).unwrap()
        })
        .collect();

    let a = GridConfig::new(5).pack(&sizes).unwrap();
    let b = GridConfig::new(5).pack(&sizes).unwrap();
    assert_eq!(a, b);
}

#[test]
fn optimize_preserves_order_and_row_spans() {
    let mut failures: Vec<String> = Vec::new();

    for columns in 1..=6u32 {
        let input: Vec<GridSize> = (1u32..=10)
            .map(|i| GridSize::new(i % 4 + 1, i % 3 + 1))
            .collect();
        let out = optimize(&input, columns).unwrap();

        if out.len() != input.len() {
            failures.push(format!("columns {columns}: length changed"));
            continue;
        }
        for (i, (inp, outp)) in input.iter().zip(&out).enumerate() {
            if outp.row_span != inp.row_span {
                failures.push(format!("columns {columns}: item {i} row_span changed"));
            }
            if outp.col_span < 1 || outp.col_span > columns {
                failures.push(format!(
                    "columns {columns}: item {i} col_span {} out of range",
                    outp.col_span
                ));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// Regression for the unbounded decrement-and-retry loop: a tiny ceiling with
// items that can never fit must still return, with every item placed. The
// second vector stresses span clamping with type-extreme values.
#[test]
fn termination_under_exhausted_grid() {
    let mut failures: Vec<String> = Vec::new();

    for columns in 1..=4u32 {
        for max_rows in 0..=3u32 {
            let config = GridConfig::new(columns).max_rows(max_rows);
            for sizes in [
                vec![GridSize::new(columns + 3, 6); 8],
                vec![GridSize::new(u32::MAX, u32::MAX); 4],
            ] {
                let tag = format!(
                    "columns {columns}, max_rows {max_rows}, spans {:?}",
                    sizes[0]
                );
                match config.pack(&sizes) {
                    Ok(placed) => check_placements(&tag, &sizes, &placed, &config, &mut failures),
                    Err(e) => failures.push(format!("{tag}: pack failed: {e:?}")),
                }
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn single_item_wider_than_grid_is_clamped() {
    let out = optimize(&[GridSize::new(10, 2)], 5).unwrap();
    assert_eq!(out, vec![GridSize::new(5, 2)]);
}

#[test]
fn layout_end_to_end_matches_classify_then_pack() {
    let images: Vec<Size> = DIMENSIONS.iter().map(|&(w, h)| Size::new(w, h)).collect();

    let config = GridConfig::new(5).max_rows(10);
    let direct = config.layout(&images).unwrap();

    let sizes: Vec<GridSize> = images
        .iter()
        .enumerate()
        .map(|(i, s)| classify(*s, SizeTag::Auto, i).unwrap())
        .collect();
    let staged = config.pack(&sizes).unwrap();

    assert_eq!(direct, staged);
}
