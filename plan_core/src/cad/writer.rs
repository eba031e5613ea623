//! Group-code writer for ASCII DXF (R12).
//!
//! A DXF file is a flat sequence of `(group code, value)` pairs, one per
//! line, with the code right-aligned in three columns. Closed shapes are
//! emitted as individual `LINE` entities; R12 readers handle those
//! universally.

use std::fmt::Write as _;

use super::layers::Layer;

/// Header variable value for `$INSUNITS` meaning meters
const UNITS_METERS: u8 = 6;

/// Appends DXF records to an in-memory buffer.
#[derive(Debug, Default)]
pub struct DxfWriter {
    buf: String,
}

impl DxfWriter {
    pub fn new() -> Self {
        DxfWriter {
            buf: String::with_capacity(8192),
        }
    }

    /// Write one `(code, value)` pair
    pub fn group(&mut self, code: u16, value: impl std::fmt::Display) {
        // Writing to a String cannot fail
        let _ = write!(self.buf, "{:>3}\n{}\n", code, value);
    }

    fn coord(&mut self, code: u16, value: f64) {
        self.group(code, fmt_num(value));
    }

    pub fn begin_section(&mut self, name: &str) {
        self.group(0, "SECTION");
        self.group(2, name);
    }

    pub fn end_section(&mut self) {
        self.group(0, "ENDSEC");
    }

    /// HEADER section: format revision, units, drawing limits
    pub fn header(&mut self, version: &str, limits_max: (f64, f64)) {
        self.begin_section("HEADER");
        self.group(9, "$ACADVER");
        self.group(1, version);
        self.group(9, "$INSUNITS");
        self.group(70, UNITS_METERS);
        self.group(9, "$LIMMIN");
        self.group(10, "0.0");
        self.group(20, "0.0");
        self.group(9, "$LIMMAX");
        self.group(10, format!("{:.1}", limits_max.0));
        self.group(20, format!("{:.1}", limits_max.1));
        self.end_section();
    }

    /// TABLES section with a single LAYER table
    pub fn layer_table(&mut self, layers: &[Layer]) {
        self.begin_section("TABLES");
        self.group(0, "TABLE");
        self.group(2, "LAYER");
        self.group(70, layers.len());
        for layer in layers {
            self.group(0, "LAYER");
            self.group(2, layer.name());
            self.group(70, 0);
            self.group(62, layer.color());
            self.group(6, layer.line_type());
        }
        self.group(0, "ENDTAB");
        self.end_section();
    }

    pub fn line(&mut self, layer: Layer, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
        self.group(0, "LINE");
        self.group(8, layer.name());
        self.coord(10, x1);
        self.coord(20, y1);
        self.group(30, "0.0");
        self.coord(11, x2);
        self.coord(21, y2);
        self.group(31, "0.0");
    }

    /// Closed axis-aligned rectangle as four lines, counter-clockwise from (x, y)
    pub fn rectangle(&mut self, layer: Layer, x: f64, y: f64, width: f64, height: f64) {
        let corners = [
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
            (x, y),
        ];
        for edge in corners.windows(2) {
            self.line(layer, edge[0], edge[1]);
        }
    }

    /// Horizontally centered single-line text. Line breaks in `content`
    /// become spaces so every value stays on one line.
    pub fn text(&mut self, layer: Layer, (x, y): (f64, f64), height: f64, content: &str) {
        self.group(0, "TEXT");
        self.group(8, layer.name());
        self.coord(10, x);
        self.coord(20, y);
        self.group(30, "0.0");
        self.coord(40, height);
        self.group(1, single_line(content));
        self.group(72, 1);
        self.coord(11, x);
        self.coord(21, y);
        self.group(31, "0.0");
    }

    /// Arc; angles in degrees, counter-clockwise
    pub fn arc(&mut self, layer: Layer, (cx, cy): (f64, f64), radius: f64, start_deg: f64, end_deg: f64) {
        self.group(0, "ARC");
        self.group(8, layer.name());
        self.coord(10, cx);
        self.coord(20, cy);
        self.group(30, "0.0");
        self.coord(40, radius);
        self.coord(50, start_deg);
        self.coord(51, end_deg);
    }

    pub fn end_of_file(&mut self) {
        self.group(0, "EOF");
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }
}

/// Fixed 4-decimal numeric field
fn fmt_num(value: f64) -> String {
    format!("{:.4}", value)
}

fn single_line(content: &str) -> String {
    content.replace("\r\n", " ").replace(&['\r', '\n'][..], " ")
}
