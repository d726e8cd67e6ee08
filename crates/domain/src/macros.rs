//! Macros for wire-name enums and JSON response bodies
//!
//! `impl_wire_name_conversions!` gives closed enumerations (connector OS,
//! connector platform, settings feature) a canonical wire spelling for
//! `Display` and a case-insensitive `FromStr`, so user input such as
//! `"MFACACHING"` resolves to the `mfaCaching` path segment.
//!
//! `impl_json_body!` marks schema types as structured JSON decode targets for
//! the invocation engine.
//!
//! # Example
//!
//! ```rust
//! use dpa_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Cloud {
//!     Aws,
//!     OnPremise,
//! }
//!
//! impl_wire_name_conversions!(Cloud {
//!     Aws => "AWS",
//!     OnPremise => "ON-PREMISE",
//! });
//!
//! assert_eq!(Cloud::OnPremise.to_string(), "ON-PREMISE");
//! assert_eq!("aws".parse::<Cloud>().unwrap(), Cloud::Aws);
//! ```

/// Implements `Display`, `FromStr` and `as_wire_name` for wire-name enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical wire
///   spelling
///
/// Parsing ignores ASCII case; output always uses the canonical spelling.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical spelling used on the wire.
            pub const fn as_wire_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire_name())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!(
                    "Invalid {} {:?}, valid options are {}",
                    stringify!($enum_name),
                    s,
                    [$($str),+].join(", ")
                ))
            }
        }
    };
}

/// Implements [`ResponseBody`](crate::body::ResponseBody) as a structured JSON
/// target for each listed type.
#[macro_export]
macro_rules! impl_json_body {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::body::ResponseBody for $ty {
                const KIND: $crate::body::BodyKind = $crate::body::BodyKind::Json;

                fn from_body(body: &[u8]) -> Result<Self, $crate::body::DecodeError> {
                    $crate::body::decode_json(body)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPlatform {
        Aws,
        OnPremise,
    }

    impl_wire_name_conversions!(TestPlatform {
        Aws => "AWS",
        OnPremise => "ON-PREMISE",
    });

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(TestPlatform::Aws.to_string(), "AWS");
        assert_eq!(TestPlatform::OnPremise.to_string(), "ON-PREMISE");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestPlatform::from_str("aws").unwrap(), TestPlatform::Aws);
        assert_eq!(TestPlatform::from_str("On-Premise").unwrap(), TestPlatform::OnPremise);
    }

    #[test]
    fn test_fromstr_invalid_lists_options() {
        let err = TestPlatform::from_str("azure").unwrap_err();
        assert!(err.contains("Invalid TestPlatform"));
        assert!(err.contains("AWS, ON-PREMISE"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestPlatform::from_str("").is_err());
    }
}
