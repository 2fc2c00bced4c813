//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// Parsing trims surrounding whitespace and ignores ASCII/Unicode case, so
/// `"HIGH"`, `" high "` and `"High"` all resolve to the same variant.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::IncidentError;
///
/// enum_display_fromstr!(
///     MyEnum,
///     IncidentError::invalid_my_enum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "Variant2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_fn:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::IncidentError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let needle = ::unicase::UniCase::new(s.trim());
                $(
                    if needle == ::unicase::UniCase::new($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_fn(s.to_string()))
            }
        }
    };
}

/// Macro to generate only Display implementation for enums
///
/// # Usage
///
/// ```rust,ignore
/// enum_display!(
///     MyEnum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variant2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display {
    (
        $enum_name:ident,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }
    };
}
