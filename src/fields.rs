//! Field Utilities
//!
//! Pure helpers for list cleanup, index-scoped merges and image sizing.

/// Normalize a text commit: the trimmed value, or `None` when nothing
/// remains. A `None` commit never reaches the gateway.
pub fn clean_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim every entry and drop the ones that end up empty
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Copy `list` with the element at `index` replaced by `item`.
/// A sparse list is padded with defaults up to `index` first, so saving
/// into a slot the backend never materialized still works.
pub fn merge_at<T: Clone + Default>(list: &[T], index: usize, item: T) -> Vec<T> {
    let mut merged = list.to_vec();
    while merged.len() <= index {
        merged.push(T::default());
    }
    merged[index] = item;
    merged
}

/// Compute a display size for an image from its natural dimensions:
/// scaled down to fit `max_w` x `max_h` (never upscaled past natural size),
/// then scaled back up if the short edge would drop below `min_edge`.
/// The natural aspect ratio is always preserved.
pub fn fit_box(natural_w: f64, natural_h: f64, max_w: f64, max_h: f64, min_edge: f64) -> (f64, f64) {
    if natural_w <= 0.0 || natural_h <= 0.0 {
        return (max_w, max_h);
    }
    let fit = (max_w / natural_w).min(max_h / natural_h);
    let mut scale = fit.min(1.0);
    let short_edge = natural_w.min(natural_h);
    if short_edge * scale < min_edge {
        // Clamp the boost so the long edge never leaves the box
        scale = (min_edge / short_edge).min(fit);
    }
    (natural_w * scale, natural_h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mission;

    #[test]
    fn test_clean_text_rejects_whitespace_only_input() {
        assert_eq!(clean_text(""), None);
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text("\n\t"), None);
    }

    #[test]
    fn test_clean_text_trims_kept_input() {
        assert_eq!(clean_text("  Acme Corp  "), Some("Acme Corp".to_string()));
    }

    #[test]
    fn test_clean_list_filters_blank_entries() {
        let cleaned = clean_list(vec![
            "a".to_string(),
            "".to_string(),
            " ".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(cleaned, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_clean_list_trims_kept_entries() {
        let cleaned = clean_list(vec!["  Go  ".to_string()]);
        assert_eq!(cleaned, vec!["Go".to_string()]);
    }

    #[test]
    fn test_merge_at_replaces_in_place() {
        let list = vec!["a".to_string(), "b".to_string()];
        let merged = merge_at(&list, 1, "c".to_string());
        assert_eq!(merged, vec!["a".to_string(), "c".to_string()]);
        // Source list untouched
        assert_eq!(list[1], "b");
    }

    #[test]
    fn test_merge_at_materializes_sparse_slots() {
        let mut mission = Mission::default();
        mission.title = "Mission 3".to_string();
        let merged = merge_at(&[], 2, mission.clone());
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], Mission::default());
        assert_eq!(merged[2], mission);
    }

    #[test]
    fn test_merge_at_is_idempotent() {
        let once = merge_at(&["a".to_string()], 0, "x".to_string());
        let twice = merge_at(&once, 0, "x".to_string());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fit_box_shrinks_wide_image_into_box() {
        // 1600x900 screenshot into a 320x240 box
        let (w, h) = fit_box(1600.0, 900.0, 320.0, 240.0, 48.0);
        assert_eq!(w, 320.0);
        assert_eq!(h, 180.0);
    }

    #[test]
    fn test_fit_box_keeps_small_logo_at_natural_size() {
        let (w, h) = fit_box(120.0, 80.0, 320.0, 240.0, 48.0);
        assert_eq!((w, h), (120.0, 80.0));
    }

    #[test]
    fn test_fit_box_enforces_minimum_readable_edge() {
        // Extreme banner: fitting alone would leave a 16px tall strip
        let (w, h) = fit_box(2000.0, 100.0, 320.0, 240.0, 48.0);
        assert!(h >= 48.0 || w <= 320.0);
        // Aspect ratio preserved
        assert!((w / h - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_box_degenerate_dimensions_fall_back_to_box() {
        assert_eq!(fit_box(0.0, 0.0, 320.0, 240.0, 48.0), (320.0, 240.0));
    }
}
