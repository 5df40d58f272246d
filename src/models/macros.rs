//! Macros for declaring models without boilerplate
//!
//! These macros generate the field accessor table and the trait
//! implementations a struct needs to supply values for link templates.

/// Implement [`Model`](crate::core::model::Model) for an existing struct
///
/// Every listed field becomes a template variable under its own name. Field
/// types must be `Clone` and convertible into
/// [`FieldValue`](crate::core::field::FieldValue); `Option<T>` fields that are
/// `None` make links using them unresolvable.
///
/// The accessor table is built once per type, on first lookup.
///
/// # Example
///
/// ```rust
/// use hypermedia::prelude::*;
///
/// struct User {
///     id: u32,
///     name: String,
///     manager_id: Option<u32>,
/// }
///
/// impl_model!(User, "user", [id, name, manager_id]);
///
/// let user = User { id: 7, name: "Ann".to_string(), manager_id: None };
/// assert_eq!(user.resolve_field("ID"), Some(FieldValue::Integer(7)));
/// assert_eq!(user.resolve_field("manager_id"), Some(FieldValue::Null));
/// ```
#[macro_export]
macro_rules! impl_model {
    (
        $type:ty,
        $model_name:expr,
        [ $( $field:ident ),* $(,)? ]
    ) => {
        impl $crate::core::model::StaticModel for $type {
            fn field_table() -> &'static $crate::core::model::FieldTable<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::core::model::FieldTable<$type>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::core::model::FieldTable::<$type>::new()
                        $(
                            .field(stringify!($field), |model: &$type| {
                                $crate::core::field::FieldValue::from(model.$field.clone())
                            })
                        )*
                })
            }
        }

        impl $crate::core::model::Model for $type {
            fn model_name(&self) -> &str {
                $model_name
            }

            fn field_names(&self) -> Vec<&str> {
                <$type as $crate::core::model::StaticModel>::field_table().names()
            }

            fn field_value(&self, name: &str) -> Option<$crate::core::field::FieldValue> {
                <$type as $crate::core::model::StaticModel>::field_table().get(self, name)
            }

            fn resolve_field(&self, name: &str) -> Option<$crate::core::field::FieldValue> {
                <$type as $crate::core::model::StaticModel>::field_table().resolve(self, name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::field::FieldValue;
    use crate::core::model::{Model, StaticModel};
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    #[derive(Clone)]
    struct Order {
        id: Uuid,
        #[allow(non_snake_case)]
        CustomerId: u64,
        total: f64,
        paid: bool,
        placed_at: DateTime<Utc>,
        note: Option<String>,
    }

    impl_model!(Order, "order", [id, CustomerId, total, paid, placed_at, note]);

    fn order() -> Order {
        Order {
            id: Uuid::nil(),
            CustomerId: 12,
            total: 9.5,
            paid: true,
            placed_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_model_name_and_fields() {
        let order = order();
        assert_eq!(order.model_name(), "order");
        assert_eq!(
            order.field_names(),
            vec!["id", "CustomerId", "total", "paid", "placed_at", "note"]
        );
    }

    #[test]
    fn test_exact_lookup_is_case_sensitive() {
        let order = order();
        assert_eq!(order.field_value("CustomerId"), Some(FieldValue::Integer(12)));
        assert_eq!(order.field_value("customerid"), None);
    }

    #[test]
    fn test_resolve_falls_back_ignoring_case() {
        let order = order();
        assert_eq!(order.resolve_field("customerID"), Some(FieldValue::Integer(12)));
        assert_eq!(order.resolve_field("PAID"), Some(FieldValue::Boolean(true)));
        assert_eq!(order.resolve_field("Total"), Some(FieldValue::Float(9.5)));
    }

    #[test]
    fn test_none_field_is_found_but_null() {
        let order = order();
        assert_eq!(order.resolve_field("note"), Some(FieldValue::Null));
        assert_eq!(order.resolve_field("notes"), None);
    }

    #[test]
    fn test_table_is_built_once() {
        let first = Order::field_table() as *const _;
        let second = Order::field_table() as *const _;
        assert_eq!(first, second);
    }
}
