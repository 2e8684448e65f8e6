//! Entity declarations shared by the mapping tests.

#![allow(dead_code)]

use registrar_model::{NestedEntity, SymbolConverter, entity};
use tracing_subscriber::EnvFilter;

entity! {
    /// The reference entity: one attribute per conversion path.
    pub struct Sample as "sample" {
        basic,
        str_to_sym { converter(SymbolConverter) },
        arr_of_str_to_sym { converter(SymbolConverter), array },
        diff_name { wire_key("DiffName") },
    }
}

entity! {
    pub struct Inner as "inner" {
        label,
        code { converter(SymbolConverter) },
    }
}

entity! {
    pub struct Parent as "parent" {
        basic { converter(NestedEntity::of::<Inner>()) },
        children { converter(NestedEntity::of::<Inner>()), array },
        note { wire_key("Note") },
    }
}

/// Routes `tracing` output to the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
