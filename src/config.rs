//! Demo scenarios, optionally overridden from a TOML file.
//!
//! ```toml
//! [[alerts]]
//! channel = "sms"
//! message = "Disco casi lleno"
//!
//! [report]
//! title = "Informe semanal"
//! author = "Equipo de soporte"
//! ```
//!
//! A missing section keeps the built-in scenario. Inside `[report]`, a
//! missing field stays unset.

use crate::builder::ReportBuilder;
use crate::dependency_inversion::Channel;
use crate::error::{DemoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub alerts: Vec<AlertScenario>,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertScenario {
    pub channel: Option<Channel>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            alerts: vec![
                AlertScenario {
                    channel: Some(Channel::Email),
                    message: "Servidor sobrecargado".to_string(),
                },
                AlertScenario {
                    channel: Some(Channel::Sms),
                    message: "Temperatura del CPU alta".to_string(),
                },
            ],
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: Some("Informe de Ventas Q1 2025".to_string()),
            body: Some(
                "Se registró un incremento del 15% respecto al trimestre anterior.".to_string(),
            ),
            author: Some("Ana López".to_string()),
            date: Some("04/11/2025".to_string()),
        }
    }
}

impl ReportConfig {
    pub fn to_builder(&self) -> ReportBuilder {
        let mut builder = ReportBuilder::new();
        if let Some(title) = &self.title {
            builder = builder.title(title);
        }
        if let Some(author) = &self.author {
            builder = builder.author(author);
        }
        if let Some(date) = &self.date {
            builder = builder.date(date);
        }
        if let Some(body) = &self.body {
            builder = builder.body(body);
        }
        builder
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| DemoError::config_read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), alerts = config.alerts.len(), "config loaded");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
