//! Declarative helper for closed unit enums

/// Define a unit enum and implement [`Unit`](crate::Unit), `Display` and
/// `FromStr` for it.
///
/// ```ignore
/// unit_enum! {
///     /// Pressure units
///     pub enum PressureUnit {
///         kind: QuantityKind::Pressure,
///         base: Pascal,
///         default: Pascal,
///         rules: SymbolRules::BASIC,
///         units: {
///             Pascal => ("Pa", Scale::IDENTITY),
///             Bar => ("bar", Scale::linear(100_000.0)),
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            kind: $kind:expr,
            base: $base:ident,
            default: $default:ident,
            rules: $rules:expr,
            units: {
                $( $(#[$vmeta:meta])* $variant:ident => ($symbol:expr, $scale:expr) ),+ $(,)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::Unit for $name {
            const KIND: $crate::QuantityKind = $kind;
            const BASE: Self = $name::$base;
            const DEFAULT: Self = $name::$default;
            const RULES: $crate::SymbolRules = $rules;

            fn units() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn symbol(&self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }

            fn scale(&self) -> $crate::Scale {
                match self {
                    $( $name::$variant => $scale, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Unit::symbol(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnitError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::Unit>::from_symbol(s)
            }
        }
    };
}
