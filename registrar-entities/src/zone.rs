//! DNS zones and resource records.

use chrono::{DateTime, Utc};
use registrar_model::{EnumIndex, IntegerConverter, NestedEntity, Result, TimeConverter, entity};

use crate::nested_list;

/// Record types in the order the API numbers them.
pub const RECORD_KIND: EnumIndex =
    EnumIndex::new(&["A", "AAAA", "CNAME", "MX", "TXT", "NS", "SRV", "CAA"]);

entity! {
    /// A single resource record of a zone.
    pub struct DnsRecord as "dns_record" {
        id { converter(IntegerConverter) },
        kind { wire_key("type"), converter(RECORD_KIND) },
        name,
        content,
        ttl,
        priority,
    }
}

impl DnsRecord {
    #[must_use]
    pub fn kind_name(&self) -> Option<&str> {
        self.kind().as_symbol().map(|kind| kind.as_str())
    }
}

entity! {
    /// A DNS zone and its records.
    pub struct Zone as "zone" {
        name,
        serial { converter(IntegerConverter) },
        records { converter(NestedEntity::of::<DnsRecord>()), array },
        updated_at { wire_key("updatedAt"), converter(TimeConverter) },
    }
}

impl Zone {
    pub fn record_list(&self) -> Result<Vec<DnsRecord>> {
        nested_list(self.records())
    }

    /// Records whose type is `kind`, e.g. `"MX"`.
    pub fn records_of_kind(&self, kind: &str) -> Result<Vec<DnsRecord>> {
        Ok(self
            .record_list()?
            .into_iter()
            .filter(|record| record.kind_name() == Some(kind))
            .collect())
    }

    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.updated_at().as_time().copied()
    }
}
