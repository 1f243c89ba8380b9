use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Error, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Point, Polygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Text drawn at the anchor in text mode
    #[serde(default = "default_label")]
    pub label: String,
    ///Mark the centroid of the polygon
    #[serde(default)]
    pub centroid: bool,
    ///Draw the outline of the boundary rectangle
    #[serde(default)]
    pub bounds: bool,
}

fn default_label() -> String {
    "Hello!".to_string()
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            label: default_label(),
            centroid: false,
            bounds: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub background: Color,
    pub object: Color,
    pub stroke_width: f32,
    pub font_size: f32,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::DARK
    }
}

impl SvgTheme {
    pub const DARK: SvgTheme = SvgTheme {
        background: Color(0x1E, 0x1E, 0x1E),
        object: Color(0xFF, 0x64, 0x64),
        stroke_width: 4.0,
        font_size: 72.0,
    };

    pub const LIGHT: SvgTheme = SvgTheme {
        background: Color(0xFF, 0xFF, 0xFF),
        object: Color(0x2D, 0x2D, 0x2D),
        stroke_width: 2.0,
        font_size: 72.0,
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "expected a color of the form #RRGGBB, got {s:?}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outline of the polygon, with vertices snapped to the pixel grid.
pub fn polygon_data(polygon: &Polygon) -> Data {
    let vertices = polygon.quantized();
    let mut data = Data::new().move_to(to_f32(vertices[0]));
    for &v in &vertices[1..] {
        data = data.line_to(to_f32(v));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(p: Point, fill: Color, rad: f32) -> Circle {
    let (x, y) = to_f32(p.quantized());
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad)
        .set("fill", format!("{fill}"))
}

fn to_f32((x, y): (i64, i64)) -> (f32, f32) {
    (x as f32, y as f32)
}
