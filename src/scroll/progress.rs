/// Percentage of the scrollable height already scrolled, in `[0, 100]`.
///
/// A page that fits the viewport reports 0.
pub fn scroll_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down() {
        assert_eq!(scroll_percent(500.0, 1900.0, 900.0), 50.0);
    }

    #[test]
    fn overscroll_is_capped() {
        assert_eq!(scroll_percent(1200.0, 1900.0, 900.0), 100.0);
        assert_eq!(scroll_percent(-30.0, 1900.0, 900.0), 0.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(scroll_percent(0.0, 700.0, 900.0), 0.0);
        assert_eq!(scroll_percent(0.0, 900.0, 900.0), 0.0);
    }
}
