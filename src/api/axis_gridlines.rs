use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ChartRange;

/// Inline storage for the gridlines of one frame.
pub type Gridlines = SmallVec<[Gridline; 8]>;

const LABEL_CACHE_CAPACITY: usize = 64;

/// One horizontal value gridline with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub value: f64,
    /// Vertical pixel of the rule, `0` at the top.
    pub y: f64,
    pub label: String,
}

/// Computes `count` evenly spaced gridlines from zero up to (but excluding)
/// `range.max()`, largest value first.
#[must_use]
pub fn compute_gridlines(range: ChartRange, height: f64, count: usize) -> Gridlines {
    compute_gridlines_with(range, height, count, format_gridline_label)
}

/// Same as [`compute_gridlines`] with a caller-supplied label formatter.
pub fn compute_gridlines_with<F>(
    range: ChartRange,
    height: f64,
    count: usize,
    mut label: F,
) -> Gridlines
where
    F: FnMut(f64) -> String,
{
    if count == 0 {
        return Gridlines::new();
    }

    let max = range.max();
    (0..count)
        .rev()
        .map(|index| {
            let value = (index as f64 / count as f64) * max;
            Gridline {
                value,
                y: gridline_y(value, max, height),
                label: label(value),
            }
        })
        .collect()
}

fn gridline_y(value: f64, max: f64, height: f64) -> f64 {
    (((max - value) / max) * height).round()
}

/// Formats a gridline value in its shortest form, e.g. `96`, `19.2`.
#[must_use]
pub fn format_gridline_label(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        return format!("{rounded:.0}");
    }

    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Runtime metrics exposed by the gridline label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridlineLabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Memoizes formatted gridline labels across frames.
///
/// The range usually moves between a handful of maxima, so the same label
/// strings come back frame after frame. Oldest entries are evicted first.
#[derive(Debug, Clone, Default)]
pub(crate) struct GridlineLabelCache {
    entries: IndexMap<OrderedFloat<f64>, String>,
    hits: u64,
    misses: u64,
}

impl GridlineLabelCache {
    pub(crate) fn label(&mut self, value: f64) -> String {
        let key = OrderedFloat(value);
        if let Some(label) = self.entries.get(&key) {
            self.hits += 1;
            return label.clone();
        }

        self.misses += 1;
        let label = format_gridline_label(value);
        if self.entries.len() >= LABEL_CACHE_CAPACITY {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, label.clone());
        label
    }

    pub(crate) fn stats(&self) -> GridlineLabelCacheStats {
        GridlineLabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridlineLabelCache, compute_gridlines, format_gridline_label};
    use crate::core::ChartRange;

    #[test]
    fn labels_use_shortest_form() {
        assert_eq!(format_gridline_label(96.0), "96");
        assert_eq!(format_gridline_label(0.0), "0");
        assert_eq!(format_gridline_label(19.2), "19.2");
        assert_eq!(format_gridline_label(60.6), "60.6");
        assert_eq!(format_gridline_label(0.25), "0.25");
    }

    #[test]
    fn zero_count_yields_no_gridlines() {
        assert!(compute_gridlines(ChartRange::new(100.0), 200.0, 0).is_empty());
    }

    #[test]
    fn gridline_positions_follow_value() {
        let gridlines = compute_gridlines(ChartRange::new(100.0), 250.0, 5);
        let ys: Vec<f64> = gridlines.iter().map(|line| line.y).collect();
        assert_eq!(ys, vec![50.0, 100.0, 150.0, 200.0, 250.0]);
    }

    #[test]
    fn label_cache_counts_hits_and_misses() {
        let mut cache = GridlineLabelCache::default();
        assert_eq!(cache.label(24.0), "24");
        assert_eq!(cache.label(24.0), "24");
        assert_eq!(cache.label(48.0), "48");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn label_cache_evicts_oldest_entries() {
        let mut cache = GridlineLabelCache::default();
        for value in 0..100 {
            cache.label(f64::from(value));
        }
        assert_eq!(cache.stats().size, 64);
        cache.label(99.0);
        assert_eq!(cache.stats().hits, 1);
    }
}
