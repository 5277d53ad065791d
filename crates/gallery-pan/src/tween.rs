//! Immediate property setting in the style of a tweening library's `set`.

use crate::{
    style::{Length, Prop},
    surface::{NodeId, Surface},
};

/// Property values to apply in one go. Unset fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TweenVars {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x_percent: Option<f64>,
    pub y_percent: Option<f64>,
    pub top: Option<f64>,
    pub left: Option<f64>,
}

impl TweenVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn x_percent(mut self, pct: f64) -> Self {
        self.x_percent = Some(pct);
        self
    }

    pub fn y_percent(mut self, pct: f64) -> Self {
        self.y_percent = Some(pct);
        self
    }

    pub fn top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    fn entries(&self) -> [(Prop, Option<Length>); 6] {
        [
            (Prop::X, self.x.map(Length::Px)),
            (Prop::Y, self.y.map(Length::Px)),
            (Prop::XPercent, self.x_percent.map(Length::Percent)),
            (Prop::YPercent, self.y_percent.map(Length::Percent)),
            (Prop::Top, self.top.map(Length::Px)),
            (Prop::Left, self.left.map(Length::Px)),
        ]
    }
}

pub fn set<S: Surface + ?Sized>(surface: &mut S, node: NodeId, vars: &TweenVars) {
    for (prop, value) in vars.entries() {
        if let Some(value) = value {
            surface.set_style(node, prop, value);
        }
    }
}

/// Current numeric value of an animated property.
pub fn get_property<S: Surface + ?Sized>(surface: &S, node: NodeId, prop: Prop) -> f64 {
    surface.property(node, prop)
}
