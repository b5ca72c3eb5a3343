//! S: Single Responsibility
//!
//! One reason to change per type: `Invoice` holds data and computes totals,
//! `InvoicePrinter` decides the layout, `InvoiceArchive` decides storage.
//!
//! Run with: cargo run --bin p1_single_responsibility

use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price_cents: u64,
}

impl LineItem {
    pub fn subtotal_cents(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price_cents
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    customer: String,
    items: Vec<LineItem>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>) -> Self {
        Invoice {
            customer: customer.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(
        &mut self,
        description: impl Into<String>,
        quantity: u32,
        unit_price_cents: u64,
    ) -> &mut Self {
        self.items.push(LineItem {
            description: description.into(),
            quantity,
            unit_price_cents,
        });
        self
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(LineItem::subtotal_cents).sum()
    }
}

fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub struct InvoicePrinter;

impl InvoicePrinter {
    pub fn render(invoice: &Invoice) -> String {
        let mut text = format!("Factura para: {}\n", invoice.customer());
        for item in invoice.items() {
            text.push_str(&format!(
                "  {} x{} = {}\n",
                item.description,
                item.quantity,
                format_cents(item.subtotal_cents())
            ));
        }
        text.push_str(&format!("Total: {}", format_cents(invoice.total_cents())));
        text
    }
}

/// Appends one `customer;total_cents` record per saved invoice.
pub struct InvoiceArchive<W: Write> {
    out: W,
    saved: usize,
}

impl<W: Write> InvoiceArchive<W> {
    pub fn new(out: W) -> Self {
        InvoiceArchive { out, saved: 0 }
    }

    pub fn save(&mut self, invoice: &Invoice) -> Result<()> {
        writeln!(self.out, "{};{}", invoice.customer(), invoice.total_cents())?;
        self.saved += 1;
        Ok(())
    }

    pub fn saved(&self) -> usize {
        self.saved
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut invoice = Invoice::new("Ana López");
    invoice
        .add_item("Licencia anual", 1, 120_000)
        .add_item("Horas de soporte", 3, 4_550);

    writeln!(out, "{}", InvoicePrinter::render(&invoice))?;

    let mut archive = InvoiceArchive::new(Vec::new());
    archive.save(&invoice)?;
    writeln!(
        out,
        "Archivado: {}",
        String::from_utf8_lossy(&archive.into_inner()).trim_end()
    )?;
    Ok(())
}
