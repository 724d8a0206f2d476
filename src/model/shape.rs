use std::f64::consts::PI;

/// Closed set of shapes. Adding a variant forces every `match` below to be
/// updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        Shape::Triangle { a, b, c }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
            // Heron's formula
            Shape::Triangle { a, b, c } => {
                let s = (a + b + c) / 2.0;
                (s * (s - a) * (s - b) * (s - c)).sqrt()
            }
        }
    }

    pub fn perimeter(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => 2.0 * PI * radius,
            Shape::Rectangle { width, height } => 2.0 * (width + height),
            Shape::Triangle { a, b, c } => a + b + c,
        }
    }

    pub fn description(&self) -> String {
        match *self {
            Shape::Circle { radius } => format!("Circle with radius {:.2}", radius),
            Shape::Rectangle { width, height } => format!("Rectangle {:.2} x {:.2}", width, height),
            Shape::Triangle { a, b, c } => {
                format!("Triangle with sides {:.2}, {:.2}, {:.2}", a, b, c)
            }
        }
    }

    /// `<description> -> Area: x.xx, Perimeter: y.yy`
    pub fn summary(&self) -> String {
        format!(
            "{} -> Area: {:.2}, Perimeter: {:.2}",
            self.description(),
            self.area(),
            self.perimeter()
        )
    }
}
