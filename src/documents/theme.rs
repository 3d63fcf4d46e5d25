use serde::Serialize;

/// Fixed bundle of colors, gradient stops, tagline and decoration used to
/// style a profile section. Themes are static constant data and only ever
/// flow outwards.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub background_gradient_stops: &'static [&'static str],
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub tagline: &'static str,
    pub decorative_shape: DecorativeShape,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecorativeShape {
    Hexagon,
    Cube,
    Dragon,
    Mask,
    Circle,
}
