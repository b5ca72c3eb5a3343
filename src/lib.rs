//! # SOLID Principles & the Builder Pattern
//!
//! Small, self-contained examples for a presentation on object-oriented
//! design, written with traits and plain structs.
//!
//! ## Examples Covered
//!
//! 1. **S: Single Responsibility** (`single_responsibility`)
//!    - Data, formatting and persistence in separate types
//!
//! 2. **O: Open/Closed** (`open_closed`)
//!    - New shapes extend the calculator without editing it
//!
//! 3. **L: Liskov Substitution** (`liskov_substitution`)
//!    - Capabilities split so every subtype honours its contract
//!
//! 4. **I: Interface Segregation** (`interface_segregation`)
//!    - Narrow traits instead of one fat interface
//!
//! 5. **D: Dependency Inversion** (`dependency_inversion`)
//!    - `AlertManager` written against the `MessageSender` trait
//!    - Email and SMS senders are interchangeable
//!
//! 6. **Builder** (`builder`)
//!    - Consuming step-builder producing an immutable `Report`
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_single_responsibility
//! cargo run --bin p2_open_closed
//! cargo run --bin p3_liskov_substitution
//! cargo run --bin p4_interface_segregation
//! cargo run --bin p5_dependency_inversion
//! cargo run --bin p6_builder_report
//!
//! # Any demo accepts an optional TOML file overriding the built-in scenarios
//! cargo run --bin p5_dependency_inversion -- demo.toml
//!
//! # Diagnostics go to stderr
//! RUST_LOG=debug cargo run --bin p6_builder_report
//! ```

pub mod builder;
pub mod config;
pub mod dependency_inversion;
pub mod error;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod logging;
pub mod open_closed;
pub mod runner;
pub mod single_responsibility;

pub use builder::{Report, ReportBuilder};
pub use config::{AlertScenario, DemoConfig, ReportConfig};
pub use dependency_inversion::{AlertManager, Channel, EmailSender, MessageSender, SmsSender};
pub use error::{DemoError, Result};
