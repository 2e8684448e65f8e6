//! Invoices and their line items.

use chrono::{DateTime, Utc};
use registrar_model::{IntegerConverter, NestedEntity, Result, SymbolConverter, TimeConverter, entity};

use crate::nested_list;

entity! {
    /// One billed product on an invoice.
    pub struct InvoiceLine as "invoice_line" {
        description,
        quantity,
        unit_price_cents { wire_key("unitPriceCents"), converter(IntegerConverter) },
        product { converter(SymbolConverter) },
    }
}

entity! {
    /// A billing document. Amounts are integer cents.
    pub struct Invoice as "invoice" {
        number { converter(IntegerConverter) },
        status { converter(SymbolConverter) },
        currency { converter(SymbolConverter) },
        issued_at { wire_key("issuedAt"), converter(TimeConverter) },
        due_at { wire_key("dueAt"), converter(TimeConverter) },
        total_cents { wire_key("totalCents"), converter(IntegerConverter) },
        lines { converter(NestedEntity::of::<InvoiceLine>()), array },
    }
}

impl Invoice {
    pub fn line_items(&self) -> Result<Vec<InvoiceLine>> {
        nested_list(self.lines())
    }

    #[must_use]
    pub fn total(&self) -> Option<i64> {
        self.total_cents().as_i64()
    }

    #[must_use]
    pub fn issued(&self) -> Option<DateTime<Utc>> {
        self.issued_at().as_time().copied()
    }

    #[must_use]
    pub fn due(&self) -> Option<DateTime<Utc>> {
        self.due_at().as_time().copied()
    }
}
