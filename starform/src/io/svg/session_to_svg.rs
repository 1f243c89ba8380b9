use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::session::{Session, Subject};

/// Renders the drawing area of a session: the outlined star in shape mode, the centered label in text mode.
///
/// This is the only place where coordinates are quantized (to whole pixels).
pub fn session_to_svg(session: &Session, options: &SvgDrawOptions, title: &str) -> Document {
    let bounds = session.bounds();
    let theme = &options.theme;
    let object_color = format!("{}", theme.object);

    let background = Rectangle::new()
        .set("x", bounds.x_min as f32)
        .set("y", bounds.y_min as f32)
        .set("width", bounds.width() as f32)
        .set("height", bounds.height() as f32)
        .set("fill", format!("{}", theme.background));

    let subject_group = match session.subject() {
        Subject::Shape(shape) => {
            Group::new()
                .set("id", "shape")
                .add(Title::new(format!(
                    "shape, {} vertices, centroid: {:?}",
                    shape.n_vertices(),
                    shape.centroid()
                )))
                .add(svg_util::data_to_path(
                    svg_util::polygon_data(shape),
                    &[
                        ("fill", "none"),
                        ("stroke", object_color.as_str()),
                        ("stroke-width", &*format!("{}", theme.stroke_width)),
                        ("stroke-linejoin", "miter"),
                    ],
                ))
        }
        Subject::Text(anchor) => {
            let (x, y) = anchor.quantized();
            Group::new().set("id", "text").add(
                Text::new(options.label.clone())
                    .set("x", x as f32)
                    .set("y", y as f32)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-size", theme.font_size)
                    .set("font-family", "sans-serif")
                    .set("fill", object_color.as_str()),
            )
        }
    };

    let optionals = {
        let mut group = Group::new().set("id", "optionals");
        if options.bounds {
            group = group.add(
                Rectangle::new()
                    .set("x", bounds.x_min as f32)
                    .set("y", bounds.y_min as f32)
                    .set("width", bounds.width() as f32)
                    .set("height", bounds.height() as f32)
                    .set("fill", "none")
                    .set("stroke", object_color.as_str())
                    .set("stroke-opacity", "0.5")
                    .set("stroke-dasharray", "8 8"),
            );
        }
        if options.centroid {
            if let Subject::Shape(shape) = session.subject() {
                group = group.add(svg_util::point(
                    shape.centroid(),
                    theme.object,
                    theme.stroke_width,
                ));
            }
        }
        group
    };

    let vbox_svg = (
        bounds.x_min as f32,
        bounds.y_min as f32,
        bounds.width() as f32,
        bounds.height() as f32,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(Title::new(title.to_string()))
        .add(background)
        .add(subject_group)
        .add(optionals)
}
