use super::Size;

/// Horizontal offset from cursor to tooltip when not flipped (pixels).
pub const TOOLTIP_OFFSET_X: f32 = 30.0;
/// Vertical offset from cursor to tooltip when not flipped (pixels).
pub const TOOLTIP_OFFSET_Y: f32 = 40.0;

/// Compute tooltip anchor (top-left) with edge-flipping.
///
/// Each axis flips independently: when the content would run past the
/// viewport's right (bottom) edge, it grows left (up) from the cursor and the
/// offset is dropped on that axis. Without a viewport the anchor is the
/// origin.
pub fn resolve_anchor(cursor: (f32, f32), content: Size, viewport: Option<Size>) -> (f32, f32) {
    let Some(screen) = viewport else {
        return (0.0, 0.0);
    };
    let (cx, cy) = cursor;

    let x = if cx > screen.width - content.width {
        cx - content.width
    } else {
        cx + TOOLTIP_OFFSET_X
    };
    let y = if cy > screen.height - content.height {
        cy - content.height
    } else {
        cy + TOOLTIP_OFFSET_Y
    };

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Size {
        Size {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn default_offset_away_from_edges() {
        let anchor = resolve_anchor((10.0, 10.0), Size::new(50.0, 50.0), Some(screen()));
        assert_eq!(anchor, (40.0, 50.0));
    }

    #[test]
    fn flips_both_axes_near_bottom_right() {
        let anchor = resolve_anchor((795.0, 595.0), Size::new(50.0, 50.0), Some(screen()));
        assert_eq!(anchor, (795.0 - 50.0, 595.0 - 50.0));
    }

    #[test]
    fn flips_only_the_clipping_axis() {
        let anchor = resolve_anchor((790.0, 100.0), Size::new(50.0, 50.0), Some(screen()));
        assert_eq!(anchor, (740.0, 140.0));

        let anchor = resolve_anchor((100.0, 590.0), Size::new(50.0, 50.0), Some(screen()));
        assert_eq!(anchor, (130.0, 540.0));
    }

    #[test]
    fn exactly_at_boundary_does_not_flip() {
        // cx == W - w is not past the edge.
        let anchor = resolve_anchor((750.0, 550.0), Size::new(50.0, 50.0), Some(screen()));
        assert_eq!(anchor, (780.0, 590.0));
    }

    #[test]
    fn missing_viewport_yields_origin() {
        let anchor = resolve_anchor((300.0, 200.0), Size::new(50.0, 50.0), None);
        assert_eq!(anchor, (0.0, 0.0));
    }
}
