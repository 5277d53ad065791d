//! Inline style values understood by a [`Surface`](crate::Surface).

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolves to pixels against the size of the containing block.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => reference * pct / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Length::Px(px)
    }
}

/// Style properties the panner reads or writes.
///
/// `X`/`Y` are translations in pixels, `XPercent`/`YPercent` translations in
/// percent of the element's own size. Both are composed into one transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    Left,
    Top,
    Width,
    Height,
    X,
    Y,
    XPercent,
    YPercent,
}

impl Prop {
    pub fn is_transform(self) -> bool {
        matches!(self, Prop::X | Prop::Y | Prop::XPercent | Prop::YPercent)
    }
}

/// Inline style of one element. `None` sizes fall back to the parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub left: Length,
    pub top: Length,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub y_percent: f64,
}

impl Style {
    pub fn set(&mut self, prop: Prop, value: Length) {
        // Transform components are plain numbers; a percentage makes no sense there.
        let number = match value {
            Length::Px(v) | Length::Percent(v) => v,
        };

        match prop {
            Prop::Left => self.left = value,
            Prop::Top => self.top = value,
            Prop::Width => self.width = Some(value),
            Prop::Height => self.height = Some(value),
            Prop::X => self.x = number,
            Prop::Y => self.y = number,
            Prop::XPercent => self.x_percent = number,
            Prop::YPercent => self.y_percent = number,
        }
    }

    pub fn get(&self, prop: Prop) -> Option<Length> {
        match prop {
            Prop::Left => Some(self.left),
            Prop::Top => Some(self.top),
            Prop::Width => self.width,
            Prop::Height => self.height,
            Prop::X => Some(Length::Px(self.x)),
            Prop::Y => Some(Length::Px(self.y)),
            Prop::XPercent => Some(Length::Percent(self.x_percent)),
            Prop::YPercent => Some(Length::Percent(self.y_percent)),
        }
    }

    pub fn has_transform(&self) -> bool {
        self.x != 0.0 || self.y != 0.0 || self.x_percent != 0.0 || self.y_percent != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_resolution() {
        assert_eq!(Length::Px(12.0).resolve(500.0), 12.0);
        assert_eq!(Length::Percent(50.0).resolve(900.0), 450.0);
        assert_eq!(Length::default(), Length::Px(0.0));
    }

    #[test]
    fn test_style_roundtrip() {
        let mut style = Style::default();
        style.set(Prop::Left, Length::Percent(50.0));
        style.set(Prop::XPercent, Length::Percent(-50.0));
        style.set(Prop::Y, Length::Px(-12.5));

        assert_eq!(style.get(Prop::Left), Some(Length::Percent(50.0)));
        assert_eq!(style.x_percent, -50.0);
        assert_eq!(style.y, -12.5);
        assert_eq!(style.get(Prop::Width), None);
        assert!(style.has_transform());
        assert!(!Style::default().has_transform());
    }
}
