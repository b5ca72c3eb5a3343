//! L: Liskov Substitution
//!
//! A `Bird` trait with a `fly` method would force `Penguin` to panic or lie.
//! Flying is a separate capability, so every type accepted by `migrate`
//! really can fly and every `Bird` really can eat.
//!
//! Run with: cargo run --bin p3_liskov_substitution

use crate::error::Result;
use std::io::Write;

pub trait Bird {
    fn name(&self) -> &str;

    fn eat(&self) -> String {
        format!("{} está comiendo", self.name())
    }
}

pub trait FlyingBird: Bird {
    fn fly(&self) -> String;
}

pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &str {
        "Gorrión"
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self) -> String {
        format!("{} vuela hacia el sur", self.name())
    }
}

pub struct Penguin;

impl Penguin {
    pub fn swim(&self) -> String {
        format!("{} nada en el océano", self.name())
    }
}

impl Bird for Penguin {
    fn name(&self) -> &str {
        "Pingüino"
    }
}

pub fn feed_all(birds: &[&dyn Bird]) -> Vec<String> {
    birds.iter().map(|bird| bird.eat()).collect()
}

pub fn migrate(flock: &[&dyn FlyingBird]) -> Vec<String> {
    flock.iter().map(|bird| bird.fly()).collect()
}

pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let sparrow = Sparrow;
    let penguin = Penguin;

    for line in feed_all(&[&sparrow, &penguin]) {
        writeln!(out, "{line}")?;
    }
    for line in migrate(&[&sparrow]) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", penguin.swim())?;
    Ok(())
}
