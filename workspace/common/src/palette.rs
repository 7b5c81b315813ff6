//! Chart colors.
//!
//! Fixed category sets name their colors per category (see [`StatusLabel`],
//! [`ClientOrigin`], [`UserStatus`]); open-ended category sets use a cyclic
//! [`Palette`].

use serde::{Deserialize, Serialize};

/// Used when a palette has no colors at all.
pub const FALLBACK_COLOR: &str = "#8884d8";

pub const PROJECT_STATUS_COLOR: &str = "#FF6500";
pub const LEAD_STAGE_COLOR: &str = "#7E60BF";
pub const TREND_LINE_COLOR: &str = "#8884d8";

/// An ordered list of colors, indexed cyclically by category position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(color: &str) -> Self {
        Self::new([color])
    }

    /// Color of the category at `index`, wrapping around the palette.
    pub fn color_at(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.colors[index % self.colors.len()]
    }

    /// One color per category, for `len` categories.
    pub fn colors_for(&self, len: usize) -> Vec<String> {
        (0..len).map(|i| self.color_at(i).to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::single(FALLBACK_COLOR)
    }
}

/// A backend status identifier paired with its display label and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    pub id: &'static str,
    pub display: &'static str,
    pub color: &'static str,
}

impl StatusLabel {
    pub const fn new(id: &'static str, display: &'static str, color: &'static str) -> Self {
        Self { id, display, color }
    }
}

pub const PROJECT_STATUSES: [StatusLabel; 3] = [
    StatusLabel::new("pending", "Pending", PROJECT_STATUS_COLOR),
    StatusLabel::new("completed", "Completed", PROJECT_STATUS_COLOR),
    StatusLabel::new("ongoing", "Ongoing", PROJECT_STATUS_COLOR),
];

pub const QUERY_STATUSES: [StatusLabel; 2] = [
    StatusLabel::new("responded", "Responded", "#024CAA"),
    StatusLabel::new("pending", "Pending", "#EC8305"),
];

/// Palette matching the order of a status label set.
pub fn status_palette(labels: &[StatusLabel]) -> Palette {
    Palette::new(labels.iter().map(|label| label.color))
}

/// A category of a fixed split chart.
pub trait SplitCategory: Copy + 'static {
    /// Every category, in render order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn color(self) -> &'static str;

    fn palette() -> Palette {
        Palette::new(Self::ALL.iter().map(|category| category.color()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOrigin {
    Indian,
    Foreigner,
}

impl SplitCategory for ClientOrigin {
    const ALL: &'static [Self] = &[Self::Indian, Self::Foreigner];

    fn label(self) -> &'static str {
        match self {
            Self::Indian => "Indian Clients",
            Self::Foreigner => "Foreigner Clients",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Indian => "#3498DB",
            Self::Foreigner => "#E74C3C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Verify,
    Unverify,
}

impl SplitCategory for UserStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Verify, Self::Unverify];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Verify => "Verify",
            Self::Unverify => "Unverify",
        }
    }

    fn color(self) -> &'static str {
        TREND_LINE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_wraps() {
        let palette = Palette::new(["#111", "#222"]);

        assert_eq!(palette.color_at(0), "#111");
        assert_eq!(palette.color_at(1), "#222");
        assert_eq!(palette.color_at(2), "#111");
        assert_eq!(palette.color_at(5), "#222");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let palette = Palette::new(Vec::<String>::new());

        assert!(palette.is_empty());
        assert_eq!(palette.color_at(3), FALLBACK_COLOR);
        assert_eq!(palette.colors_for(2), vec![FALLBACK_COLOR, FALLBACK_COLOR]);
    }

    #[test]
    fn test_split_palettes_follow_category_order() {
        assert_eq!(
            ClientOrigin::palette(),
            Palette::new(["#3498DB", "#E74C3C"])
        );
        assert_eq!(UserStatus::palette().len(), 3);
    }

    #[test]
    fn test_status_palette_is_named_per_label() {
        let palette = status_palette(&QUERY_STATUSES);

        assert_eq!(palette.color_at(0), "#024CAA");
        assert_eq!(palette.color_at(1), "#EC8305");
    }
}
