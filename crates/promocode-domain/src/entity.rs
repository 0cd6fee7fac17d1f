//! Base contract shared by every stored record.

use uuid::Uuid;

/// A record with a unique identifier.
///
/// Uniqueness is advisory: collections do not enforce it on insert.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Implement [`Entity`] for a struct with a public `id: Uuid` field.
#[macro_export]
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entity::Entity for $ty {
                fn id(&self) -> ::uuid::Uuid {
                    self.id
                }
            }
        )+
    };
}

/// Join first and last name the way every person-like record displays it.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
