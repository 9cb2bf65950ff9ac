//! Text helpers for the console UI.
//!
//! Lengths are entered in centimetres. Values above one metre (or one square
//! metre for areas) are shown in metres instead.

/// Left-pads `text` so it sits centred in `width` columns.
///
/// Only the left side is padded. Text at least as wide as `width` is returned
/// unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = (width - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

pub fn format_length(length: f64) -> String {
    if length <= 100.0 {
        format!("{:.2} cm", length)
    } else {
        format!("{:.2} m", length / 100.0)
    }
}

pub fn format_area(area: f64) -> String {
    if area <= 10_000.0 {
        format!("{:.2} cm²", area)
    } else {
        format!("{:.2} m²", area / 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_left_only() {
        assert_eq!(center("Test", 10), "   Test");
        assert_eq!(center("Test", 11), "   Test");
        assert_eq!(center("", 4), "  ");
    }

    #[test]
    fn test_center_leaves_wide_text_alone() {
        let wide = "A".repeat(100);
        assert_eq!(center(&wide, 50), wide);
        assert_eq!(center("Test", 4), "Test");
    }

    #[test]
    fn test_format_length_switches_to_metres_above_100() {
        assert_eq!(format_length(50.0), "50.00 cm");
        assert_eq!(format_length(100.0), "100.00 cm");
        assert_eq!(format_length(150.0), "1.50 m");
        assert_eq!(format_length(0.01), "0.01 cm");
    }

    #[test]
    fn test_format_area_switches_to_square_metres_above_10000() {
        assert_eq!(format_area(5000.0), "5000.00 cm²");
        assert_eq!(format_area(10_000.0), "10000.00 cm²");
        assert_eq!(format_area(20_000.0), "2.00 m²");
    }
}
