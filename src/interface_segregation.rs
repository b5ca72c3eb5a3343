//! I: Interface Segregation
//!
//! Instead of one `Worker` trait with `work` and `eat`, each capability is
//! its own trait. `Robot` never has to stub out a meal.
//!
//! Run with: cargo run --bin p4_interface_segregation

use crate::error::Result;
use std::io::Write;

pub trait Workable {
    fn work(&self) -> String;
}

pub trait Feedable {
    fn eat(&self) -> String;
}

pub struct Human {
    pub name: String,
}

impl Workable for Human {
    fn work(&self) -> String {
        format!("{} está programando", self.name)
    }
}

impl Feedable for Human {
    fn eat(&self) -> String {
        format!("{} está almorzando", self.name)
    }
}

pub struct Robot {
    pub model: String,
}

impl Workable for Robot {
    fn work(&self) -> String {
        format!("{} está ensamblando piezas", self.model)
    }
}

pub fn start_shift(workers: &[&dyn Workable]) -> Vec<String> {
    workers.iter().map(|worker| worker.work()).collect()
}

pub fn lunch_break(diners: &[&dyn Feedable]) -> Vec<String> {
    diners.iter().map(|diner| diner.eat()).collect()
}

pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let ana = Human {
        name: "Ana".to_string(),
    };
    let robot = Robot {
        model: "R2-Ensamblador".to_string(),
    };

    for line in start_shift(&[&ana, &robot]) {
        writeln!(out, "{line}")?;
    }
    for line in lunch_break(&[&ana]) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
