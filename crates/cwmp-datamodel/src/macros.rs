// crates/cwmp-datamodel/src/macros.rs

//! Declarative generators for data-model entities and enumerated strings.
//!
//! `entity!` turns one schema table into a struct with serde wire names,
//! get/set/with accessors, a static [`crate::schema::EntitySpec`] and an
//! [`crate::schema::Entity`] implementation. Field kinds select the accessor
//! shape:
//!
//! | kind     | getter            | extra          |
//! |----------|-------------------|----------------|
//! | `scalar` | `Option<T>`       |                |
//! | `text`   | `Option<&str>`    | `impl Into<String>` setters |
//! | `value`  | `Option<&T>`      |                |
//! | `object` | `Option<&T>`      | `_mut` get-or-create |
//!
//! Tables are declared in their own block and always hold a `Vec`.

// ===== entity! =====
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            path: $path:literal,
            version: $version:literal,
            unique: [$([$($key:literal),+ $(,)?]),* $(,)?],
            fields: {
                $(
                    $(#[$fmeta:meta])*
                    $kind:ident $field:ident : $ty:ty = $wire:literal, $($acc:ident),+ => $spec:expr
                ),* $(,)?
            },
            $(tables: {
                $(
                    $(#[$tmeta:meta])*
                    $tfield:ident : $tty:ty = $twire:literal, $tmut:ident, $tset:ident, $twith:ident => $tspec:expr
                ),* $(,)?
            },)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "crate::schema::is_unset")]
                $field: Option<$ty>,
            )*
            $($(
                $(#[$tmeta])*
                #[serde(rename = $twire, default, skip_serializing_if = "crate::schema::is_unset")]
                $tfield: Vec<$tty>,
            )*)?
        }

        impl $name {
            /// Creates an empty entity: every parameter unset, every table empty.
            pub fn new() -> Self {
                Self::default()
            }

            /// The static schema table of this entity.
            pub fn schema() -> &'static $crate::schema::EntitySpec {
                static SPEC: $crate::schema::EntitySpec = $crate::schema::EntitySpec {
                    name: stringify!($name),
                    path: $path,
                    version: $version,
                    unique: &[$(&[$($key),+]),*],
                    fields: &[
                        $(($spec).named($wire),)*
                        $($(($tspec).named($twire),)*)?
                    ],
                };
                &SPEC
            }

            $(
                $crate::macros::field_accessors!($kind $field: $ty = $wire; $($acc),+);
            )*

            $($(
                $crate::macros::table_accessors!($tfield: $tty = $twire; $tmut, $tset, $twith);
            )*)?
        }

        impl $crate::schema::Entity for $name {
            fn spec(&self) -> &'static $crate::schema::EntitySpec {
                Self::schema()
            }

            fn parameter(&self, name: &str) -> Option<$crate::schema::ParameterValue> {
                match name {
                    $($wire => $crate::macros::field_value!($kind self.$field),)*
                    _ => None,
                }
            }

            #[allow(unused_mut)]
            fn children(&self) -> Vec<$crate::schema::Child<'_>> {
                let mut children = Vec::new();
                $($crate::macros::field_child!($kind $wire, self.$field, children);)*
                $($(
                    for (i, entity) in self.$tfield.iter().enumerate() {
                        children.push($crate::schema::Child {
                            name: $twire,
                            index: Some(i + 1),
                            entity,
                        });
                    }
                )*)?
                children
            }

            fn table_len(&self, name: &str) -> Option<usize> {
                match name {
                    $($($twire => Some(self.$tfield.len()),)*)?
                    _ => None,
                }
            }
        }
    };
}

// ===== field_accessors! =====
macro_rules! field_accessors {
    (scalar $field:ident : $ty:ty = $wire:literal; $set:ident, $with:ident) => {
        #[doc = concat!("Returns `", $wire, "`, or `None` when unset.")]
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        #[doc = concat!("Sets `", $wire, "`. No constraint is checked.")]
        pub fn $set(&mut self, value: $ty) {
            self.$field = Some(value);
        }

        #[doc = concat!("Sets `", $wire, "` and returns the entity.")]
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$set(value);
            self
        }
    };
    (text $field:ident : $ty:ty = $wire:literal; $set:ident, $with:ident) => {
        #[doc = concat!("Returns `", $wire, "`, or `None` when unset.")]
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets `", $wire, "`. No constraint is checked.")]
        pub fn $set(&mut self, value: impl Into<String>) {
            self.$field = Some(value.into());
        }

        #[doc = concat!("Sets `", $wire, "` and returns the entity.")]
        #[must_use]
        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$set(value);
            self
        }
    };
    (value $field:ident : $ty:ty = $wire:literal; $set:ident, $with:ident) => {
        #[doc = concat!("Returns `", $wire, "`, or `None` when unset.")]
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        #[doc = concat!("Sets `", $wire, "`. No constraint is checked.")]
        pub fn $set(&mut self, value: $ty) {
            self.$field = Some(value);
        }

        #[doc = concat!("Sets `", $wire, "` and returns the entity.")]
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$set(value);
            self
        }
    };
    (object $field:ident : $ty:ty = $wire:literal; $mut:ident, $set:ident, $with:ident) => {
        #[doc = concat!("Returns the `", $wire, "` object, or `None` when absent.")]
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        #[doc = concat!("Returns the `", $wire, "` object, creating an empty one first if absent.")]
        pub fn $mut(&mut self) -> &mut $ty {
            self.$field.get_or_insert_with(Default::default)
        }

        #[doc = concat!("Replaces the `", $wire, "` object.")]
        pub fn $set(&mut self, value: $ty) {
            self.$field = Some(value);
        }

        #[doc = concat!("Replaces the `", $wire, "` object and returns the entity.")]
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$set(value);
            self
        }
    };
}

// ===== table_accessors! =====
macro_rules! table_accessors {
    ($field:ident : $ty:ty = $wire:literal; $mut:ident, $set:ident, $with:ident) => {
        #[doc = concat!("Rows of the `", $wire, "` table. Empty, never absent, on a new entity.")]
        pub fn $field(&self) -> &[$ty] {
            &self.$field
        }

        #[doc = concat!("Mutable access to the `", $wire, "` rows.")]
        pub fn $mut(&mut self) -> &mut Vec<$ty> {
            &mut self.$field
        }

        #[doc = concat!("Replaces all `", $wire, "` rows.")]
        pub fn $set(&mut self, rows: Vec<$ty>) {
            self.$field = rows;
        }

        #[doc = concat!("Appends one `", $wire, "` row and returns the entity.")]
        #[must_use]
        pub fn $with(mut self, row: $ty) -> Self {
            self.$field.push(row);
            self
        }
    };
}

// ===== field_value! =====
macro_rules! field_value {
    (object $slot:expr) => {
        None
    };
    ($kind:ident $slot:expr) => {
        $slot.as_ref().map($crate::schema::ParameterType::to_value)
    };
}

// ===== field_child! =====
macro_rules! field_child {
    (object $wire:literal, $slot:expr, $children:ident) => {
        if let Some(entity) = &$slot {
            $children.push($crate::schema::Child {
                name: $wire,
                index: None,
                entity,
            });
        }
    };
    ($kind:ident $wire:literal, $slot:expr, $children:ident) => {};
}

// ===== wire_enum! =====
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every wire value, in schema order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// The wire string of this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::ModelError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }

        impl $crate::schema::ParameterType for $name {
            fn to_value(&self) -> $crate::schema::ParameterValue {
                $crate::schema::ParameterValue::Text(self.as_str().into())
            }
        }
    };
}

// Re-export macros for use in other files
pub(crate) use entity;
pub(crate) use field_accessors;
pub(crate) use field_child;
pub(crate) use field_value;
pub(crate) use table_accessors;
pub(crate) use wire_enum;
