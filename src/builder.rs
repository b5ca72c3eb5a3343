//! Creational: Builder
//!
//! `Report` has no public constructor. The only way to get one is to
//! accumulate fields on a `ReportBuilder` and finish with `build()`.
//!
//! Run with: cargo run --bin p6_builder_report

use crate::config::ReportConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// An immutable report. Unset fields render as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: Option<String>,
    body: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

impl Report {
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reporte generado:")?;
        writeln!(f, "Título: {}", self.title().unwrap_or_default())?;
        writeln!(f, "Autor: {}", self.author().unwrap_or_default())?;
        writeln!(f, "Fecha: {}", self.date().unwrap_or_default())?;
        writeln!(f, "Contenido:")?;
        write!(f, "{}", self.body().unwrap_or_default())
    }
}

/// Consuming step-builder for [`Report`].
///
/// Setters take `self`, so `build()` consumes the builder. Clone it first
/// to produce several reports from a common base.
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct ReportBuilder {
    title: Option<String>,
    body: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn build(self) -> Report {
        debug!(
            title = self.title.is_some(),
            body = self.body.is_some(),
            author = self.author.is_some(),
            date = self.date.is_some(),
            "report built"
        );
        Report {
            title: self.title,
            body: self.body,
            author: self.author,
            date: self.date,
        }
    }
}

pub fn run_demo<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    let report = config.to_builder().build();
    writeln!(out, "{report}")?;
    Ok(())
}
