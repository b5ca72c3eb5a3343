//! O: Open/Closed
//!
//! `AreaCalculator` only knows the `Shape` trait. Adding a shape adds a type
//! and an impl; the calculator is never edited.
//!
//! Run with: cargo run --bin p2_open_closed

use crate::error::Result;
use std::f64::consts::PI;
use std::io::Write;

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectángulo"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Círculo"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

// Added after the calculator was written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triángulo"
    }

    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }
}

pub struct AreaCalculator;

impl AreaCalculator {
    pub fn total(shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|shape| shape.area()).sum()
    }
}

pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle {
            width: 3.0,
            height: 4.0,
        }),
        Box::new(Circle { radius: 1.0 }),
        Box::new(Triangle {
            base: 6.0,
            height: 2.0,
        }),
    ];

    for shape in &shapes {
        writeln!(out, "{}: área {:.2}", shape.name(), shape.area())?;
    }
    writeln!(out, "Área total: {:.2}", AreaCalculator::total(&shapes))?;
    Ok(())
}
