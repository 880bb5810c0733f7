//! The [`FieldName`] type and the [`Registry`] contract every feature area implements.
//!
//! Registries are declared with [`field_registry!`](crate::field_registry), which
//! rejects duplicate or non-snake_case keys at compile time.

use crate::areas::AreaSet;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt::{self, Display};

/// A key of the resource configuration mapping.
///
/// Only constructible from a `&'static str`, so a key read at runtime can never
/// stand in for a declared field. Deliberately not `Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// The exact key as expected by the configuration schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for FieldName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

/// A closed set of [`FieldName`] constants belonging to one feature area.
pub trait Registry {
    /// Registry name used in reports and logs.
    const REGISTRY: &'static str;
    /// The feature area this registry keys.
    const AREA: AreaSet;
    /// Every constant of the registry, in declaration order.
    const FIELDS: &'static [FieldName];
}

/// Returns `true` when no two fields share a key.
#[must_use]
pub const fn keys_distinct(fields: &[FieldName]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if bytes_eq(fields[i].0.as_bytes(), fields[j].0.as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns `true` when every key follows [`is_snake_case`].
#[must_use]
pub const fn keys_snake_case(fields: &[FieldName]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if !is_snake_case(fields[i].0) {
            return false;
        }
        i += 1;
    }
    true
}

/// Lowercase ASCII words joined by single underscores, e.g. `min_memory_gib`.
///
/// The first character must be a letter; digits are allowed afterwards.
#[must_use]
pub const fn is_snake_case(key: &str) -> bool {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    let mut after_separator = false;
    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'_' {
            if after_separator {
                return false;
            }
            after_separator = true;
        } else if b.is_ascii_lowercase() || b.is_ascii_digit() {
            after_separator = false;
        } else {
            return false;
        }
        i += 1;
    }

    !after_separator
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declares a field-name registry.
///
/// ```rust
/// use skyfleet_domain::{AreaSet, Registry, field_registry};
///
/// field_registry! {
///     /// Example registry.
///     pub struct ExampleField in AreaSet::COMPUTE_GROUP {
///         /// Display name.
///         NAME => "name",
///         MAX_SIZE => "max_size",
///     }
/// }
///
/// assert_eq!(ExampleField::MAX_SIZE.as_str(), "max_size");
/// assert_eq!(ExampleField::FIELDS.len(), 2);
/// ```
///
/// A duplicate key fails to compile:
///
/// ```rust,compile_fail
/// use skyfleet_domain::{AreaSet, field_registry};
///
/// field_registry! {
///     pub struct Broken in AreaSet::SCHEDULING {
///         A => "same",
///         B => "same",
///     }
/// }
/// ```
#[macro_export]
macro_rules! field_registry {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $area:path {
            $(
                $(#[$field_meta:meta])*
                $field:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$field_meta])*
                pub const $field: $crate::field::FieldName = $crate::field::FieldName::new($key);
            )+
        }

        impl $crate::field::Registry for $name {
            const REGISTRY: &'static str = stringify!($name);
            const AREA: $crate::areas::AreaSet = $area;
            const FIELDS: &'static [$crate::field::FieldName] = &[$($name::$field),+];
        }

        const _: () = {
            assert!(
                $crate::field::keys_distinct(<$name as $crate::field::Registry>::FIELDS),
                "registry keys must be pairwise distinct"
            );
            assert!(
                $crate::field::keys_snake_case(<$name as $crate::field::Registry>::FIELDS),
                "registry keys must be snake_case"
            );
        };
    };
}
