use crate::domain::order::PersistedOrder;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One exported sale, flattened for CSV.
#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    id: String,
    placed_at: String,
    name: &'a str,
    email: &'a str,
    phone_number: &'a str,
    address: &'a str,
    city: &'a str,
    province: &'a str,
    apples: u64,
    bananas: u64,
    subtotal: String,
    tax_rate: String,
    tax: String,
    total: String,
}

impl<'a> From<&'a PersistedOrder> for OrderRow<'a> {
    fn from(record: &'a PersistedOrder) -> Self {
        let order = &record.order;
        let pricing = &record.pricing;
        Self {
            id: record.id.to_string(),
            placed_at: record.placed_at.to_rfc3339(),
            name: &order.name,
            email: &order.email,
            phone_number: &order.phone_number,
            address: &order.address,
            city: &order.city,
            province: &order.province,
            apples: order.apples,
            bananas: order.bananas,
            subtotal: pricing.subtotal.to_string(),
            tax_rate: pricing.tax_rate.normalize().to_string(),
            tax: pricing.tax.to_string(),
            total: pricing.total.to_string(),
        }
    }
}

/// Writes persisted orders as CSV with a header row.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every order and flushes. The header is written even when
    /// `orders` is empty.
    pub fn write_orders<'a, I>(&mut self, orders: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PersistedOrder>,
    {
        let mut wrote_any = false;
        for record in orders {
            self.writer.serialize(OrderRow::from(record))?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record(HEADER)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub const HEADER: [&str; 14] = [
    "id",
    "placed_at",
    "name",
    "email",
    "phone_number",
    "address",
    "city",
    "province",
    "apples",
    "bananas",
    "subtotal",
    "tax_rate",
    "tax",
    "total",
];
