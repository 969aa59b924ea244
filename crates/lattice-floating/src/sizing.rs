//! Overlay size and placement arithmetic.

use lattice_common::Size;
use lattice_config::FloatingPaneConfig;

/// Allocations below this are treated as "not laid out yet".
const MIN_PARENT_EXTENT: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingOptions {
    pub width_pct: f64,
    pub height_pct: f64,
    pub fallback_width: i32,
    pub fallback_height: i32,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            width_pct: 0.82,
            height_pct: 0.72,
            fallback_width: 1200,
            fallback_height: 800,
        }
    }
}

impl From<&FloatingPaneConfig> for FloatingOptions {
    fn from(cfg: &FloatingPaneConfig) -> Self {
        Self {
            width_pct: cfg.width_pct,
            height_pct: cfg.height_pct,
            fallback_width: cfg.fallback_width,
            fallback_height: cfg.fallback_height,
        }
    }
}

/// Desired overlay size for a parent allocation. Each axis falls back to
/// the configured default while the parent is smaller than 100px. Sizes
/// truncate toward zero.
pub fn overlay_dimensions(parent: Size, opts: &FloatingOptions) -> Size {
    let parent_width = if parent.width >= MIN_PARENT_EXTENT {
        parent.width
    } else {
        opts.fallback_width
    };
    let parent_height = if parent.height >= MIN_PARENT_EXTENT {
        parent.height
    } else {
        opts.fallback_height
    };
    Size::new(
        (f64::from(parent_width) * pct_or_full(opts.width_pct)) as i32,
        (f64::from(parent_height) * pct_or_full(opts.height_pct)) as i32,
    )
}

fn pct_or_full(pct: f64) -> f64 {
    if pct <= 0.0 || pct > 1.0 {
        1.0
    } else {
        pct
    }
}

/// Where an overlay of `desired` size sits inside `overlay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Center `desired` in `overlay`, shrinking it to fit. `None` when either
/// size is empty.
pub fn allocation_rect(overlay: Size, desired: Size) -> Option<Placement> {
    if overlay.width <= 0 || overlay.height <= 0 || desired.width <= 0 || desired.height <= 0 {
        return None;
    }
    let width = desired.width.min(overlay.width);
    let height = desired.height.min(overlay.height);
    Some(Placement {
        x: ((overlay.width - width) / 2).max(0),
        y: ((overlay.height - height) / 2).max(0),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_parent_allocation_when_laid_out() {
        let size = overlay_dimensions(Size::new(1000, 500), &FloatingOptions::default());
        assert_eq!(size, Size::new(820, 360));
    }

    #[test]
    fn falls_back_per_axis_below_threshold() {
        let opts = FloatingOptions::default();
        assert_eq!(overlay_dimensions(Size::ZERO, &opts), Size::new(983, 576));
        assert_eq!(overlay_dimensions(Size::new(99, 500), &opts), Size::new(983, 360));
    }

    #[test]
    fn out_of_range_percent_means_full_size() {
        let opts = FloatingOptions {
            width_pct: 1.5,
            height_pct: 0.0,
            ..FloatingOptions::default()
        };
        assert_eq!(overlay_dimensions(Size::new(400, 300), &opts), Size::new(400, 300));
    }

    #[test]
    fn placement_is_centered_and_clamped() {
        assert_eq!(
            allocation_rect(Size::new(1000, 800), Size::new(800, 600)),
            Some(Placement {
                x: 100,
                y: 100,
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            allocation_rect(Size::new(500, 400), Size::new(800, 600)),
            Some(Placement {
                x: 0,
                y: 0,
                width: 500,
                height: 400
            })
        );
        assert_eq!(allocation_rect(Size::ZERO, Size::new(10, 10)), None);
    }

    #[test]
    fn options_follow_config() {
        let cfg = FloatingPaneConfig {
            width_pct: 0.5,
            fallback_width: 640,
            ..FloatingPaneConfig::default()
        };
        let opts = FloatingOptions::from(&cfg);
        assert_eq!(opts.width_pct, 0.5);
        assert_eq!(opts.fallback_width, 640);
        assert_eq!(opts.height_pct, 0.72);
    }
}
