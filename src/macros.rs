/// Declares a fieldless enum whose cases carry literal raw values.
///
/// Each case is paired with a literal string; the raw value is that literal parsed
/// as the declared raw type. The macro derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash`, and generates:
///
/// - `ALL`: every case, in declaration order
/// - `literal()` and `name()`
/// - `raw_value()`: the parsed raw value
/// - `from_raw_value()`: the first case whose raw value equals the argument
/// - `from_name()`, plus `FromStr` and `Display` by case name
/// - `validate()`: every literal parses and no two cases share a raw value
///
/// # Examples
///
/// ```rust
/// use rawlit::literal_enum;
/// use std::ops::RangeInclusive;
///
/// literal_enum! {
///     pub enum Band: RangeInclusive<u32> {
///         Low = "1...3",
///         High = "4...10",
///     }
/// }
///
/// assert_eq!(Band::Low.raw_value().unwrap(), 1..=3);
/// assert_eq!(Band::from_raw_value(&(4..=10)), Some(Band::High));
/// assert_eq!("High".parse::<Band>().unwrap(), Band::High);
/// assert!(Band::validate().is_ok());
/// ```
#[macro_export]
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $(
                $(#[$case_meta:meta])*
                $case:ident = $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$case_meta])*
                $case,
            )+
        }

        impl $name {
            /// Every case, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$case),+];

            /// The literal string declared for this case.
            pub const fn literal(&self) -> &'static str {
                match self {
                    $($name::$case => $literal,)+
                }
            }

            pub const fn name(&self) -> &'static str {
                match self {
                    $($name::$case => stringify!($case),)+
                }
            }

            /// Parses this case's literal into its raw value.
            pub fn raw_value(&self) -> $crate::Result<$raw> {
                <$raw as $crate::FromLiteral>::from_literal(
                    self.literal(),
                    &$crate::Parser::default(),
                )
            }

            /// Returns the first case whose raw value equals `raw`.
            pub fn from_raw_value(raw: &$raw) -> ::std::option::Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|case| case.raw_value().ok().as_ref() == ::std::option::Option::Some(raw))
            }

            pub fn from_name(name: &str) -> $crate::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|case| case.name() == name)
                    .ok_or_else(|| $crate::Error::unknown_case(name))
            }

            /// Checks that every literal parses and that raw values are distinct.
            pub fn validate() -> $crate::Result<()> {
                let mut seen: ::std::vec::Vec<($name, $raw)> = ::std::vec::Vec::new();
                for &case in Self::ALL {
                    let raw = case.raw_value()?;
                    if let ::std::option::Option::Some((first, _)) =
                        seen.iter().find(|(_, other)| *other == raw)
                    {
                        return ::std::result::Result::Err($crate::Error::DuplicateRawValue {
                            first: first.name(),
                            second: case.name(),
                        });
                    }
                    seen.push((case, raw));
                }
                ::std::result::Result::Ok(())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::from_name(s.trim())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
