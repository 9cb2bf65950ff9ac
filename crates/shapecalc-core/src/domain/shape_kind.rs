use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Single-letter menu key used to select this kind.
    pub fn key(&self) -> char {
        match self {
            ShapeKind::Circle => 'c',
            ShapeKind::Square => 's',
            ShapeKind::Triangle => 't',
        }
    }

    /// Menu label, including any qualifier shown next to the name.
    pub fn label(&self) -> String {
        match self {
            ShapeKind::Triangle => format!("{} (equilateral)", self),
            _ => self.to_string(),
        }
    }

    /// Matches an already trimmed and lowercased menu key.
    pub fn from_key(key: &str) -> Option<ShapeKind> {
        ShapeKind::iter().find(|kind| {
            let mut chars = key.chars();
            chars.next() == Some(kind.key()) && chars.next().is_none()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_matches_each_kind() {
        assert_eq!(ShapeKind::from_key("c"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_key("s"), Some(ShapeKind::Square));
        assert_eq!(ShapeKind::from_key("t"), Some(ShapeKind::Triangle));
    }

    #[test]
    fn test_from_key_rejects_words_and_empty() {
        assert_eq!(ShapeKind::from_key(""), None);
        assert_eq!(ShapeKind::from_key("circle"), None);
        assert_eq!(ShapeKind::from_key("cs"), None);
        assert_eq!(ShapeKind::from_key("C"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ShapeKind::Circle.label(), "Circle");
        assert_eq!(ShapeKind::Triangle.label(), "Triangle (equilateral)");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SQUARE".parse::<ShapeKind>(), Ok(ShapeKind::Square));
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }
}
