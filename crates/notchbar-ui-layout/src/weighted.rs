//! Weighted distribution of a row's width between its children.

/// Horizontal extent assigned to one weighted child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedSlot {
    pub x: f32,
    pub width: f32,
}

/// Splits `total_size` between children in proportion to `weights`,
/// placing them consecutively from the leading edge.
///
/// Non-positive weights receive no space. When no weight is positive every
/// slot is empty.
pub fn distribute_weighted(total_size: f32, weights: &[f32]) -> Vec<WeightedSlot> {
    let total_weight: f32 = weights.iter().copied().filter(|w| *w > 0.0).sum();
    let available = total_size.max(0.0);
    let mut cursor = 0.0;
    weights
        .iter()
        .map(|weight| {
            let width = if total_weight > 0.0 && *weight > 0.0 {
                available * weight / total_weight
            } else {
                0.0
            };
            let slot = WeightedSlot { x: cursor, width };
            cursor += width;
            slot
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/weighted_tests.rs"]
mod tests;
