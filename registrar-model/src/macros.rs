/// Declares an entity type: its struct, its schema, and its accessors.
///
/// Each attribute takes an optional `{ .. }` block of [`Attribute`](crate::Attribute)
/// builder calls: `wire_key("..")`, `converter(..)` and `array`.
///
/// ```
/// use registrar_model::{Entity, SymbolConverter, entity};
///
/// entity! {
///     /// A DNS host.
///     pub struct Host as "host" {
///         name,
///         state { converter(SymbolConverter) },
///         addresses { wire_key("ipAddresses"), array },
///     }
/// }
///
/// let host = Host::from_wire(&serde_json::json!({
///     "name": "ns1.example.com",
///     "state": "active",
///     "ipAddresses": ["192.0.2.1"],
/// }))
/// .unwrap()
/// .unwrap();
/// assert!(host.has_state());
/// assert_eq!(host.name().as_str(), Some("ns1.example.com"));
/// ```
///
/// For every attribute `x` this generates `x(&self) -> &Value`,
/// `has_x(&self) -> bool` and a crate-private `set_x(&mut self, impl Into<Value>)`.
/// The schema is built on first use; declaring a name or wire key twice
/// panics at that point.
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $entity_type:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident $({ $($option:ident $(( $($arg:tt)* ))?),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            record: $crate::Record,
        }

        impl $crate::Entity for $name {
            fn schema() -> &'static $crate::Schema {
                static SCHEMA: ::std::sync::LazyLock<$crate::Schema> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Schema::builder($entity_type)
                            $(
                                .declare(
                                    $crate::Attribute::new(stringify!($field))
                                        $($( .$option($($($arg)*)?) )*)?
                                )
                            )*
                            .build()
                    });
                &SCHEMA
            }

            fn from_record_unchecked(record: $crate::Record) -> Self {
                Self { record }
            }

            fn record(&self) -> &$crate::Record {
                &self.record
            }

            fn into_record(self) -> $crate::Record {
                self.record
            }
        }

        $crate::paste::paste! {
            impl $name {
                $(
                    $(#[$field_meta])*
                    #[must_use]
                    pub fn $field(&self) -> &$crate::Value {
                        self.record.declared(stringify!($field))
                    }

                    #[must_use]
                    pub fn [<has_ $field>](&self) -> bool {
                        !self.record.declared(stringify!($field)).is_null()
                    }

                    #[allow(dead_code)]
                    pub(crate) fn [<set_ $field>](&mut self, value: impl Into<$crate::Value>) {
                        self.record.assign(stringify!($field), value);
                    }
                )*
            }
        }

        impl From<$name> for $crate::Value {
            fn from(entity: $name) -> Self {
                $crate::Value::Entity(entity.record)
            }
        }
    };
}
