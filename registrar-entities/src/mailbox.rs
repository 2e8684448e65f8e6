//! Hosted mailboxes and their forwarding settings.

use registrar_model::{EnumIndex, FlagOrEntity, Result, entity};

use crate::{Value, nested};

/// Spam filter levels, transmitted by position.
pub const SPAM_FILTER: EnumIndex = EnumIndex::new(&["off", "moderate", "aggressive"]);

entity! {
    /// Where a mailbox forwards incoming mail.
    pub struct Forwarding as "forwarding" {
        destinations { array },
        keep_copy { wire_key("keepCopy") },
    }
}

impl Forwarding {
    #[must_use]
    pub fn destination_addresses(&self) -> Vec<&str> {
        self.destinations()
            .as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }
}

entity! {
    /// An email mailbox hosted under a domain.
    pub struct Mailbox as "mailbox" {
        address,
        domain,
        /// `false` when disabled, otherwise the forwarding configuration.
        forwarding { converter(FlagOrEntity::of::<Forwarding>()) },
        spam_filter { wire_key("spamFilter"), converter(SPAM_FILTER) },
        aliases { array },
        quota_mb { wire_key("quotaMb") },
    }
}

impl Mailbox {
    /// True when forwarding is configured or explicitly switched on.
    #[must_use]
    pub fn is_forwarding(&self) -> bool {
        match self.forwarding() {
            Value::Bool(enabled) => *enabled,
            Value::Entity(_) => true,
            _ => false,
        }
    }

    /// The forwarding configuration, when one was sent instead of a flag.
    pub fn forwarding_config(&self) -> Result<Option<Forwarding>> {
        nested(self.forwarding())
    }

    #[must_use]
    pub fn spam_level(&self) -> Option<&str> {
        self.spam_filter().as_symbol().map(|level| level.as_str())
    }
}
