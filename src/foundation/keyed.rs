/// Declares a closed, string-keyed enum.
///
/// Generates `ALL`, `as_str`, `Display`, plus `FromStr` and `TryFrom<&str>` that trim and
/// match keys ASCII case-insensitively, raising the named [`SpecimenError`] variant on a miss.
/// Serde goes through the same parser, so a bad key in JSON fails with the same typed
/// message as a bad key passed to `str::parse`.
///
/// [`SpecimenError`]: crate::foundation::error::SpecimenError
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical key spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::foundation::error::SpecimenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(key))
                    .ok_or_else(|| $crate::foundation::error::SpecimenError::$err(key.to_string()))
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::foundation::error::SpecimenError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<$name>().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use keyed_enum;
