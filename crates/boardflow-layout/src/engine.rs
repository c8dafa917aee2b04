//! Layout algorithms
//!
//! Each mode is an independent pure function; `run_layout` dispatches.
//! Sorting is stable everywhere so equal keys keep input order, which is
//! what makes the outputs exactly reproducible.

use crate::error::LayoutError;
use crate::types::{AlignEdge, CrossAlign, LayoutItem, LayoutMode, LayoutParams, Placement};
use std::f64::consts::PI;

/// Minimum radius for circular/fan layouts
const MIN_RADIUS: f64 = 150.0;

/// Shelf-width growth factor for pack layouts
const PACK_WIDTH_FACTOR: f64 = 1.3;

/// Compute new positions for `items` under `mode`
///
/// Returns one placement per input item (same ids, unspecified order for
/// modes that re-sort internally). Empty input yields an empty output.
pub fn run_layout(
    items: &[LayoutItem],
    mode: LayoutMode,
    params: &LayoutParams,
) -> Result<Vec<Placement>, LayoutError> {
    if !params.spacing.is_finite() || params.spacing < 0.0 {
        return Err(LayoutError::InvalidSpacing(params.spacing));
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }
    match mode {
        LayoutMode::Row => Ok(lay_line(items, params, true)),
        LayoutMode::Column => Ok(lay_line(items, params, false)),
        LayoutMode::Grid { columns } => lay_grid(items, columns, params, false),
        LayoutMode::Staggered { columns } => lay_grid(items, columns, params, true),
        LayoutMode::Circular { radius } => Ok(lay_circle(items, radius, 2.0 * PI, params)),
        LayoutMode::Fan { arc_degrees } => {
            if arc_degrees <= 0.0 {
                return Err(LayoutError::InvalidArc(arc_degrees));
            }
            Ok(lay_circle(items, 0.0, arc_degrees.to_radians(), params))
        }
        LayoutMode::Pack => Ok(lay_pack(items, params)),
        LayoutMode::Align { edge } => Ok(lay_align(items, edge, params)),
        LayoutMode::DistributeHorizontal => Ok(lay_distribute(items, params, true)),
        LayoutMode::DistributeVertical => Ok(lay_distribute(items, params, false)),
    }
}

/// Row/column: sort on the primary axis, pack with fixed gaps
fn lay_line(items: &[LayoutItem], params: &LayoutParams, horizontal: bool) -> Vec<Placement> {
    let mut sorted: Vec<&LayoutItem> = items.iter().collect();
    if horizontal {
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    } else {
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
    }

    let max_cross = sorted
        .iter()
        .map(|i| if horizontal { i.height } else { i.width })
        .fold(0.0_f64, f64::max);

    let mut cursor = if horizontal {
        params.origin.x
    } else {
        params.origin.y
    };
    let mut out = Vec::with_capacity(sorted.len());
    for item in sorted {
        let (main_size, cross_size) = if horizontal {
            (item.width, item.height)
        } else {
            (item.height, item.width)
        };
        let cross_offset = match params.cross_align {
            CrossAlign::Start => 0.0,
            CrossAlign::Center => (max_cross - cross_size) / 2.0,
            CrossAlign::End => max_cross - cross_size,
        };
        let (x, y) = if horizontal {
            (cursor, params.origin.y + cross_offset)
        } else {
            (params.origin.x + cross_offset, cursor)
        };
        out.push(Placement {
            id: item.id.clone(),
            x,
            y,
        });
        cursor += main_size + params.spacing;
    }
    out
}

/// Grid: per-column max widths, per-row max heights, prefix-sum offsets,
/// cell-centered objects. Staggered shifts odd rows right by half a cell
/// pitch of the first column.
fn lay_grid(
    items: &[LayoutItem],
    columns: usize,
    params: &LayoutParams,
    staggered: bool,
) -> Result<Vec<Placement>, LayoutError> {
    if columns == 0 {
        return Err(LayoutError::InvalidColumns);
    }
    let cols = columns.min(items.len());
    let rows = items.len().div_ceil(cols);

    let mut col_widths = vec![0.0_f64; cols];
    let mut row_heights = vec![0.0_f64; rows];
    for (i, item) in items.iter().enumerate() {
        let (r, c) = (i / cols, i % cols);
        col_widths[c] = col_widths[c].max(item.width);
        row_heights[r] = row_heights[r].max(item.height);
    }

    // Prefix sums of cell offsets
    let mut x_off = vec![0.0_f64; cols];
    for c in 1..cols {
        x_off[c] = x_off[c - 1] + col_widths[c - 1] + params.spacing;
    }
    let mut y_off = vec![0.0_f64; rows];
    for r in 1..rows {
        y_off[r] = y_off[r - 1] + row_heights[r - 1] + params.spacing;
    }

    let stagger_shift = (col_widths[0] + params.spacing) / 2.0;

    let out = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (r, c) = (i / cols, i % cols);
            let mut x = params.origin.x + x_off[c] + (col_widths[c] - item.width) / 2.0;
            if staggered && r % 2 == 1 {
                x += stagger_shift;
            }
            let y = params.origin.y + y_off[r] + (row_heights[r] - item.height) / 2.0;
            Placement {
                id: item.id.clone(),
                x,
                y,
            }
        })
        .collect();
    Ok(out)
}

/// Circular and fan placement
///
/// A full circle (`arc = 2π`) steps by `arc / n` starting at 12 o'clock
/// and walks clockwise. A fan centers its `arc` on 12 o'clock with n-1
/// equal steps, so the opening faces downward.
fn lay_circle(
    items: &[LayoutItem],
    given_radius: f64,
    arc: f64,
    params: &LayoutParams,
) -> Vec<Placement> {
    let n = items.len();
    let center = params.origin;
    if n == 1 {
        let item = &items[0];
        return vec![Placement {
            id: item.id.clone(),
            x: center.x - item.width / 2.0,
            y: center.y - item.height / 2.0,
        }];
    }

    let max_dim = items
        .iter()
        .map(|i| i.width.max(i.height))
        .fold(0.0_f64, f64::max);
    let derived = n as f64 * (max_dim + params.spacing) / (2.0 * PI);
    let radius = given_radius.max(derived).max(MIN_RADIUS);

    let full_circle = (arc - 2.0 * PI).abs() < f64::EPSILON;
    let (start, step) = if full_circle {
        (-PI / 2.0, arc / n as f64)
    } else {
        (-PI / 2.0 - arc / 2.0, arc / (n - 1) as f64)
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let angle = start + step * i as f64;
            Placement {
                id: item.id.clone(),
                x: center.x + radius * angle.cos() - item.width / 2.0,
                y: center.y + radius * angle.sin() - item.height / 2.0,
            }
        })
        .collect()
}

/// Shelf-based greedy bin packing, tallest first
fn lay_pack(items: &[LayoutItem], params: &LayoutParams) -> Vec<Placement> {
    let spacing = params.spacing;
    let mut sorted: Vec<&LayoutItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.height.total_cmp(&a.height));

    let total_area: f64 = items.iter().map(|i| i.width * i.height).sum();
    let widest = items.iter().map(|i| i.width).fold(0.0_f64, f64::max);
    let target_width = (PACK_WIDTH_FACTOR * total_area.sqrt()).max(widest + spacing);

    struct Shelf {
        y: f64,
        height: f64,
        used: f64,
    }
    let mut shelves: Vec<Shelf> = Vec::new();
    let mut out = Vec::with_capacity(sorted.len());
    for item in sorted {
        let found = shelves
            .iter()
            .position(|s| s.used + item.width + spacing <= target_width);
        let slot = match found {
            Some(i) => i,
            None => {
                let y = shelves
                    .last()
                    .map(|s| s.y + s.height + spacing)
                    .unwrap_or(params.origin.y);
                shelves.push(Shelf {
                    y,
                    height: item.height,
                    used: 0.0,
                });
                shelves.len() - 1
            }
        };
        let shelf = &mut shelves[slot];
        out.push(Placement {
            id: item.id.clone(),
            x: params.origin.x + shelf.used,
            y: shelf.y,
        });
        shelf.used += item.width + spacing;
    }
    out
}

/// Edge/center alignment with a perpendicular de-overlap pass
fn lay_align(items: &[LayoutItem], edge: AlignEdge, params: &LayoutParams) -> Vec<Placement> {
    let mut placed: Vec<Placement> = items
        .iter()
        .map(|i| Placement {
            id: i.id.clone(),
            x: i.x,
            y: i.y,
        })
        .collect();

    match edge {
        AlignEdge::Left => {
            let target = items.iter().map(|i| i.x).fold(f64::INFINITY, f64::min);
            for p in &mut placed {
                p.x = target;
            }
        }
        AlignEdge::Right => {
            let target = items
                .iter()
                .map(|i| i.x + i.width)
                .fold(f64::NEG_INFINITY, f64::max);
            for (p, i) in placed.iter_mut().zip(items) {
                p.x = target - i.width;
            }
        }
        AlignEdge::Top => {
            let target = items.iter().map(|i| i.y).fold(f64::INFINITY, f64::min);
            for p in &mut placed {
                p.y = target;
            }
        }
        AlignEdge::Bottom => {
            let target = items
                .iter()
                .map(|i| i.y + i.height)
                .fold(f64::NEG_INFINITY, f64::max);
            for (p, i) in placed.iter_mut().zip(items) {
                p.y = target - i.height;
            }
        }
        AlignEdge::CenterX => {
            let mean =
                items.iter().map(|i| i.x + i.width / 2.0).sum::<f64>() / items.len() as f64;
            for (p, i) in placed.iter_mut().zip(items) {
                p.x = mean - i.width / 2.0;
            }
        }
        AlignEdge::CenterY => {
            let mean =
                items.iter().map(|i| i.y + i.height / 2.0).sum::<f64>() / items.len() as f64;
            for (p, i) in placed.iter_mut().zip(items) {
                p.y = mean - i.height / 2.0;
            }
        }
    }

    // Objects that now share an axis range may overlap; nudge them apart
    // along the perpendicular axis in sorted order.
    let mut order: Vec<usize> = (0..placed.len()).collect();
    if edge.is_horizontal() {
        order.sort_by(|&a, &b| placed[a].y.total_cmp(&placed[b].y));
        let mut prev_far = f64::NEG_INFINITY;
        for idx in order {
            if placed[idx].y < prev_far {
                placed[idx].y = prev_far + params.spacing;
            }
            prev_far = placed[idx].y + items[idx].height;
        }
    } else {
        order.sort_by(|&a, &b| placed[a].x.total_cmp(&placed[b].x));
        let mut prev_far = f64::NEG_INFINITY;
        for idx in order {
            if placed[idx].x < prev_far {
                placed[idx].x = prev_far + params.spacing;
            }
            prev_far = placed[idx].x + items[idx].width;
        }
    }

    placed
}

/// Spread items evenly between the current extremes
fn lay_distribute(items: &[LayoutItem], params: &LayoutParams, horizontal: bool) -> Vec<Placement> {
    if items.len() < 2 {
        return items
            .iter()
            .map(|i| Placement {
                id: i.id.clone(),
                x: i.x,
                y: i.y,
            })
            .collect();
    }
    let mut sorted: Vec<&LayoutItem> = items.iter().collect();
    if horizontal {
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    } else {
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
    }

    let (first_pos, last_far) = if horizontal {
        (
            sorted[0].x,
            sorted
                .iter()
                .map(|i| i.x + i.width)
                .fold(f64::NEG_INFINITY, f64::max),
        )
    } else {
        (
            sorted[0].y,
            sorted
                .iter()
                .map(|i| i.y + i.height)
                .fold(f64::NEG_INFINITY, f64::max),
        )
    };
    let total_size: f64 = sorted
        .iter()
        .map(|i| if horizontal { i.width } else { i.height })
        .sum();
    let span = last_far - first_pos;
    let gap = ((span - total_size) / (sorted.len() - 1) as f64).max(params.spacing);

    let mut cursor = first_pos;
    sorted
        .iter()
        .map(|item| {
            let p = if horizontal {
                Placement {
                    id: item.id.clone(),
                    x: cursor,
                    y: item.y,
                }
            } else {
                Placement {
                    id: item.id.clone(),
                    x: item.x,
                    y: cursor,
                }
            };
            cursor += if horizontal { item.width } else { item.height } + gap;
            p
        })
        .collect()
}
