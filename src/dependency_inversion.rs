//! D: Dependency Inversion
//!
//! `AlertManager` is the high-level policy. It is written against the
//! `MessageSender` capability and never names a concrete sender, so email
//! and SMS delivery can be swapped without touching it.
//!
//! Run with: cargo run --bin p5_dependency_inversion

use crate::config::AlertScenario;
use crate::error::{DemoError, Result};
use serde::Deserialize;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::debug;

const ALERT_MARKER: &str = "[ALERTA] ";
const EMAIL_LABEL: &str = "EMAIL";
const SMS_LABEL: &str = "SMS";

// =============================================================================
// The abstraction both sides depend on
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait MessageSender {
    fn send(&self, message: &str) -> Result<()>;
}

impl<S: MessageSender + ?Sized> MessageSender for Box<S> {
    fn send(&self, message: &str) -> Result<()> {
        (**self).send(message)
    }
}

impl<S: MessageSender + ?Sized> MessageSender for &S {
    fn send(&self, message: &str) -> Result<()> {
        (**self).send(message)
    }
}

fn deliver<W: Write>(out: &RefCell<W>, label: &str, message: &str) -> Result<()> {
    let mut out = out.borrow_mut();
    writeln!(out, "Enviando {label}: {message}")?;
    out.flush()?;
    debug!(channel = label, "message delivered");
    Ok(())
}

// =============================================================================
// Low-level details: concrete senders
// =============================================================================

/// Emits `Enviando EMAIL: <message>` to its output (stdout by default).
pub struct EmailSender<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl EmailSender {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for EmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> EmailSender<W> {
    pub fn with_writer(out: W) -> Self {
        EmailSender {
            out: RefCell::new(out),
        }
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> MessageSender for EmailSender<W> {
    fn send(&self, message: &str) -> Result<()> {
        deliver(&self.out, EMAIL_LABEL, message)
    }
}

/// Emits `Enviando SMS: <message>` to its output (stdout by default).
pub struct SmsSender<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl SmsSender {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for SmsSender {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> SmsSender<W> {
    pub fn with_writer(out: W) -> Self {
        SmsSender {
            out: RefCell::new(out),
        }
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> MessageSender for SmsSender<W> {
    fn send(&self, message: &str) -> Result<()> {
        deliver(&self.out, SMS_LABEL, message)
    }
}

// =============================================================================
// Choosing a sender at runtime
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Email => EMAIL_LABEL,
            Channel::Sms => SMS_LABEL,
        }
    }

    pub fn sender(self) -> Box<dyn MessageSender> {
        self.sender_to(io::stdout())
    }

    pub fn sender_to<W: Write + 'static>(self, out: W) -> Box<dyn MessageSender> {
        match self {
            Channel::Email => Box::new(EmailSender::with_writer(out)),
            Channel::Sms => Box::new(SmsSender::with_writer(out)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            _ => Err(DemoError::UnknownChannel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Channel {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

// =============================================================================
// High-level policy
// =============================================================================

/// Raises alerts through whichever sender it was built with.
///
/// The sender is fixed at construction; there is no way to replace it.
pub struct AlertManager<S: MessageSender> {
    sender: S,
}

impl<S: MessageSender> AlertManager<S> {
    pub fn new(sender: S) -> Self {
        AlertManager { sender }
    }

    /// Fails fast when no sender is available, e.g. an alert in a config
    /// file without a `channel`.
    pub fn try_new(sender: Option<S>) -> Result<Self> {
        sender.map(Self::new).ok_or(DemoError::MissingSender)
    }

    pub fn raise_alert(&self, message: &str) -> Result<()> {
        debug!(message, "raising alert");
        self.sender.send(&format!("{ALERT_MARKER}{message}"))
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn into_sender(self) -> S {
        self.sender
    }
}

impl AlertManager<Box<dyn MessageSender>> {
    pub fn for_channel(channel: Channel) -> Self {
        Self::new(channel.sender())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn run_demo(scenarios: &[AlertScenario]) -> Result<()> {
    run_demo_with(scenarios, io::stdout)
}

/// Runs every scenario with a fresh sender writing to `make_writer()`.
pub fn run_demo_with<W, F>(scenarios: &[AlertScenario], mut make_writer: F) -> Result<()>
where
    W: Write + 'static,
    F: FnMut() -> W,
{
    for scenario in scenarios {
        let sender = scenario
            .channel
            .map(|channel| channel.sender_to(make_writer()));
        let manager = AlertManager::try_new(sender)?;
        manager.raise_alert(&scenario.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_email_sender_labels_output() {
        let sender = EmailSender::with_writer(Vec::new());
        sender.send("hola").unwrap();
        assert_eq!(sender.into_writer(), b"Enviando EMAIL: hola\n");
    }

    #[test]
    fn test_sms_sender_labels_output() {
        let sender = SmsSender::with_writer(Vec::new());
        sender.send("hola").unwrap();
        assert_eq!(sender.into_writer(), b"Enviando SMS: hola\n");
    }

    #[test]
    fn test_email_alert_scenario() {
        let manager = AlertManager::new(EmailSender::with_writer(Vec::new()));
        manager.raise_alert("Servidor sobrecargado").unwrap();

        let output = String::from_utf8(manager.into_sender().into_writer()).unwrap();
        assert_eq!(output, "Enviando EMAIL: [ALERTA] Servidor sobrecargado\n");
    }

    #[test]
    fn test_sms_alert_scenario() {
        let manager = AlertManager::new(SmsSender::with_writer(Vec::new()));
        manager.raise_alert("Temperatura del CPU alta").unwrap();

        let output = String::from_utf8(manager.into_sender().into_writer()).unwrap();
        assert_eq!(output, "Enviando SMS: [ALERTA] Temperatura del CPU alta\n");
    }

    #[test]
    fn test_manager_delegates_once_with_marker() {
        let mut sender = MockMessageSender::new();
        sender
            .expect_send()
            .withf(|message| message.to_string() == "[ALERTA] disco lleno")
            .times(1)
            .returning(|_| Ok(()));

        let manager = AlertManager::new(sender);
        manager.raise_alert("disco lleno").unwrap();
    }

    #[test]
    fn test_manager_propagates_sender_error() {
        let mut sender = MockMessageSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(DemoError::MissingSender));

        let manager = AlertManager::new(sender);
        assert!(matches!(
            manager.raise_alert("x"),
            Err(DemoError::MissingSender)
        ));
    }

    #[test]
    fn test_manager_over_borrowed_sender() {
        let sender = SmsSender::with_writer(Vec::new());
        AlertManager::new(&sender).raise_alert("ping").unwrap();
        assert_eq!(sender.into_writer(), b"Enviando SMS: [ALERTA] ping\n");
    }

    #[test]
    fn test_try_new_without_sender_fails_fast() {
        let result = AlertManager::<EmailSender<Vec<u8>>>::try_new(None);
        assert!(matches!(result, Err(DemoError::MissingSender)));
    }

    #[test]
    fn test_try_new_with_sender() {
        let manager = AlertManager::try_new(Some(EmailSender::with_writer(Vec::new()))).unwrap();
        manager.raise_alert("ok").unwrap();
        assert_eq!(manager.sender().out.borrow().as_slice(), b"Enviando EMAIL: [ALERTA] ok\n");
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        let manager = AlertManager::new(EmailSender::with_writer(BrokenPipe));
        assert!(matches!(manager.raise_alert("x"), Err(DemoError::Io(_))));
    }

    #[test]
    fn test_channel_parsing() {
        assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
        assert_eq!(" SMS ".parse::<Channel>().unwrap(), Channel::Sms);
        assert!(matches!(
            "fax".parse::<Channel>(),
            Err(DemoError::UnknownChannel(name)) if name == "fax"
        ));
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Email.to_string(), "EMAIL");
        assert_eq!(Channel::Sms.to_string(), "SMS");
    }

    #[test]
    fn test_channel_boxed_sender() {
        let buffer = SharedBuffer::default();
        let manager = AlertManager::new(Channel::Sms.sender_to(buffer.clone()));
        manager.raise_alert("a").unwrap();
        assert_eq!(buffer.contents(), "Enviando SMS: [ALERTA] a\n");
    }

    #[test]
    fn test_for_channel_uses_stdout_sender() {
        let manager = AlertManager::for_channel(Channel::Email);
        assert!(manager.raise_alert("prueba de stdout").is_ok());
    }

    #[test]
    fn test_run_demo_with_default_scenarios() {
        let buffer = SharedBuffer::default();
        let scenarios = crate::config::DemoConfig::default().alerts;
        run_demo_with(&scenarios, || buffer.clone()).unwrap();

        assert_eq!(
            buffer.contents(),
            "Enviando EMAIL: [ALERTA] Servidor sobrecargado\n\
             Enviando SMS: [ALERTA] Temperatura del CPU alta\n"
        );
    }

    #[test]
    fn test_run_demo_stops_at_missing_channel() {
        let buffer = SharedBuffer::default();
        let scenarios = vec![
            AlertScenario {
                channel: Some(Channel::Email),
                message: "primero".to_string(),
            },
            AlertScenario {
                channel: None,
                message: "sin canal".to_string(),
            },
            AlertScenario {
                channel: Some(Channel::Sms),
                message: "nunca".to_string(),
            },
        ];

        let result = run_demo_with(&scenarios, || buffer.clone());
        assert!(matches!(result, Err(DemoError::MissingSender)));
        assert_eq!(buffer.contents(), "Enviando EMAIL: [ALERTA] primero\n");
    }

    proptest! {
        #[test]
        fn test_senders_prefix_any_message(message in "\\PC*") {
            let email = EmailSender::with_writer(Vec::new());
            email.send(&message).unwrap();
            prop_assert_eq!(
                String::from_utf8(email.into_writer()).unwrap(),
                format!("Enviando EMAIL: {message}\n")
            );

            let sms = SmsSender::with_writer(Vec::new());
            sms.send(&message).unwrap();
            prop_assert_eq!(
                String::from_utf8(sms.into_writer()).unwrap(),
                format!("Enviando SMS: {message}\n")
            );
        }

        #[test]
        fn test_alert_equals_direct_send_for_every_channel(message in "\\PC*") {
            for channel in [Channel::Email, Channel::Sms] {
                let via_manager = SharedBuffer::default();
                AlertManager::new(channel.sender_to(via_manager.clone()))
                    .raise_alert(&message)
                    .unwrap();

                let direct = SharedBuffer::default();
                channel
                    .sender_to(direct.clone())
                    .send(&format!("[ALERTA] {message}"))
                    .unwrap();

                prop_assert_eq!(via_manager.contents(), direct.contents());
            }
        }
    }
}
