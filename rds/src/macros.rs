/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Declarations the generated shape modules expand through.
//!
//! Generated code only lists members: wire name, field name, setter name and member kind.
//! Everything else (accessors, builders, equality, hashing, rendering and the Query protocol
//! bindings) is produced here.

/// Declares a structure shape and its builder.
///
/// ```ignore
/// shape! {
///     /// Metadata assigned to a resource.
///     pub struct Tag => TagBuilder {
///         /// Key of the tag.
///         "Key" => key, set_key: string,
///         "Value" => value, set_value: string,
///     }
/// }
/// ```
///
/// Member kinds:
/// - `string`: stored as `String`, read back as `Option<&str>`.
/// - `value<T>`: a `Copy` value such as `bool`, `i32`, `DateTime` or an enum, read back as
///   `Option<T>`.
/// - `shape<T>`: a nested structure, read back as `Option<&T>`.
/// - `list<T> as "Member"`: stored as `Vec<T>`, read back as `Option<&[T]>`. `Member` names
///   the entries in Query requests, e.g. `Tags.Tag.1`. The fluent builder method appends one
///   entry.
macro_rules! shape {
    (@ty string) => { String };
    (@ty value<$ty:ty>) => { $ty };
    (@ty shape<$ty:ty>) => { $ty };
    (@ty list<$ty:ty>) => { Vec<$ty> };

    (@getter $(#[$doc:meta])* $field:ident, string) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    (@getter $(#[$doc:meta])* $field:ident, value<$ty:ty>) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }
    };
    (@getter $(#[$doc:meta])* $field:ident, shape<$ty:ty>) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (@getter $(#[$doc:meta])* $field:ident, list<$ty:ty>) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }
    };

    (@builder $(#[$doc:meta])* $field:ident, $setter:ident, string) => {
        $(#[$doc])*
        pub fn $field(mut self, input: impl Into<String>) -> Self {
            self.$field = Some(input.into());
            self
        }

        $(#[$doc])*
        pub fn $setter(mut self, input: Option<String>) -> Self {
            self.$field = input;
            self
        }
    };
    (@builder $(#[$doc:meta])* $field:ident, $setter:ident, list<$ty:ty>) => {
        /// Appends an item to the list.
        ///
        $(#[$doc])*
        pub fn $field(mut self, input: impl Into<$ty>) -> Self {
            let mut items = self.$field.unwrap_or_default();
            items.push(input.into());
            self.$field = Some(items);
            self
        }

        $(#[$doc])*
        pub fn $setter(mut self, input: Option<Vec<$ty>>) -> Self {
            self.$field = input;
            self
        }
    };
    (@builder $(#[$doc:meta])* $field:ident, $setter:ident, $kind:ident<$ty:ty>) => {
        $(#[$doc])*
        pub fn $field(mut self, input: $ty) -> Self {
            self.$field = Some(input);
            self
        }

        $(#[$doc])*
        pub fn $setter(mut self, input: Option<$ty>) -> Self {
            self.$field = input;
            self
        }
    };

    (@ser $writer:ident, $value:ident, $wire:literal, list<$ty:ty> as $member:literal) => {{
        let mut list = $writer.prefix($wire).start_list(false, Some($member));
        for item in $value {
            $crate::protocol::SerializeQuery::serialize_query(item, list.entry())?;
        }
        list.finish();
    }};
    (@ser $writer:ident, $value:ident, $wire:literal, $kind:ident $(<$ty:ty>)?) => {
        $crate::protocol::SerializeQuery::serialize_query($value, $writer.prefix($wire))?;
    };

    (@display $display:ident, $this:ident, $field:ident, $wire:literal, list<$ty:ty>) => {
        $display.list($wire, $this.$field.as_deref());
    };
    (@display $display:ident, $this:ident, $field:ident, $wire:literal, $kind:ident $(<$ty:ty>)?) => {
        $display.field($wire, $this.$field.as_ref());
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal => $field:ident, $setter:ident: $kind:ident $(<$ty:ty>)? $(as $member:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<shape!(@ty $kind $(<$ty>)?)>,
            )*
        }

        impl $name {
            $(
                shape!(@getter $(#[$field_meta])* $field, $kind $(<$ty>)?);
            )*

            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $builder {
            $(
                $field: Option<shape!(@ty $kind $(<$ty>)?)>,
            )*
        }

        impl $builder {
            $(
                shape!(@builder $(#[$field_meta])* $field, $setter, $kind $(<$ty>)?);
            )*

            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $(
                        $field: self.$field,
                    )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut display = smithy_types::display::ShapeDisplay::new(f);
                $(
                    shape!(@display display, self, $field, $wire, $kind $(<$ty>)?);
                )*
                display.finish()
            }
        }

        impl $crate::protocol::SerializeQuery for $name {
            #[allow(unused_mut)]
            fn serialize_query(
                &self,
                mut writer: smithy_query::QueryValueWriter<'_>,
            ) -> Result<(), $crate::error::BuildError> {
                $(
                    if let Some(value) = &self.$field {
                        shape!(@ser writer, value, $wire, $kind $(<$ty>)? $(as $member)?);
                    }
                )*
                Ok(())
            }
        }

        impl $crate::protocol::DeserializeXml for $name {
            fn deserialize_xml(
                decoder: &mut smithy_xml::decode::ScopedDecoder<'_, '_>,
            ) -> Result<Self, smithy_xml::XmlDecodeError> {
                let mut builder = $builder::default();
                while let Some(mut tag) = decoder.next_tag()? {
                    match tag.start_el().local() {
                        $(
                            $wire => {
                                builder = builder.$setter(Some(
                                    $crate::protocol::DeserializeXml::deserialize_xml(&mut tag)?,
                                ));
                            }
                        )*
                        other => {
                            tracing::trace!(
                                shape = stringify!($name),
                                element = other,
                                "skipping unrecognized element"
                            );
                        }
                    }
                }
                Ok(builder.build())
            }
        }
    };
}

/// Declares a closed enumeration of string values.
///
/// ```ignore
/// string_enum! {
///     /// Mode of a replica.
///     pub enum ReplicaMode {
///         Mounted = "mounted",
///         OpenReadOnly = "open-read-only",
///     }
/// }
/// ```
///
/// Every variant maps to exactly one wire value and back. Parsing is case-sensitive and
/// rejects anything that is not a declared value.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the wire value of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        $name::$variant => $value,
                    )*
                }
            }

            /// Returns every wire value, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$($value),*]
            }

            /// Parses a wire value.
            ///
            /// Fails for the empty string and for any value that is not declared. Matching is
            /// case-sensitive.
            pub fn from_value(value: &str) -> Result<Self, smithy_types::InvalidEnumValue> {
                match value {
                    $(
                        $value => Ok($name::$variant),
                    )*
                    other => Err(smithy_types::InvalidEnumValue::new(stringify!($name), other)),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = smithy_types::InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_value(s)
            }
        }

        impl<'a> std::convert::TryFrom<&'a str> for $name {
            type Error = smithy_types::InvalidEnumValue;

            fn try_from(s: &'a str) -> Result<Self, Self::Error> {
                $name::from_value(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::protocol::SerializeQuery for $name {
            fn serialize_query(
                &self,
                writer: smithy_query::QueryValueWriter<'_>,
            ) -> Result<(), $crate::error::BuildError> {
                writer.string(self.as_str());
                Ok(())
            }
        }

        impl $crate::protocol::DeserializeXml for $name {
            fn deserialize_xml(
                decoder: &mut smithy_xml::decode::ScopedDecoder<'_, '_>,
            ) -> Result<Self, smithy_xml::XmlDecodeError> {
                let data = smithy_xml::decode::try_data(decoder)?;
                $name::from_value(&data)
                    .map_err(|err| smithy_xml::XmlDecodeError::custom(err.to_string()))
            }
        }
    };
}
