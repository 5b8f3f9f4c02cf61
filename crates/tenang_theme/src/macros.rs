//! Closed id enums with lenient parsing
//!
//! Style intents arrive as strings from config files and renderers. Every
//! id enum is a closed set with one default arm: unknown ids resolve to the
//! default (logged at debug level) instead of failing the render.

/// Declare a closed id enum with a default arm
///
/// ```rust
/// tenang_theme::lenient_id! {
///     /// Card density
///     pub enum Density {
///         Compact => "compact",
///         Cozy => "cozy",
///     }
///     default = Cozy;
/// }
///
/// assert_eq!(Density::from_id("compact"), Density::Compact);
/// assert_eq!(Density::from_id("roomy"), Density::Cozy);
/// assert_eq!(Density::try_from_id("roomy"), None);
/// ```
#[macro_export]
macro_rules! lenient_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string id
            pub fn id(self) -> &'static str {
                match self {
                    $( $name::$variant => $id ),+
                }
            }

            /// Strict lookup (case-insensitive)
            pub fn try_from_id(id: &str) -> Option<Self> {
                let id = id.trim();
                $(
                    if id.eq_ignore_ascii_case($id) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Lenient lookup: unknown ids resolve to the default arm
            pub fn from_id(id: &str) -> Self {
                match Self::try_from_id(id) {
                    Some(value) => value,
                    None => {
                        let fallback = $name::$default;
                        $crate::__private::tracing::debug!(
                            kind = stringify!($name),
                            id,
                            fallback = fallback.id(),
                            "unknown id, using default"
                        );
                        fallback
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::from_id(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::from_id(&id)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.id())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.id())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from_id(&raw))
            }
        }
    };
}
