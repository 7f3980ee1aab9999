//! Complex number value types.
//!
//! [`Complex64`] and [`Complex128`] are plain pairs of 32-bit and 64-bit
//! float components. They exist so the complex set instantiations have a
//! value type with the documented textual contract: members render as
//! `a+bi` with an explicit sign on the imaginary part and a trailing `i`
//! (`1+0i`, `2.5-3i`), and [`FromStr`] parses that same form back.

use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;

use super::Scalar;

/// Error produced when parsing a complex number from text fails.
///
/// # Examples
///
/// ```rust
/// use scalarset::Complex64;
///
/// assert!("1+2".parse::<Complex64>().is_err());
/// assert!("1+2i".parse::<Complex64>().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseComplexError;

impl fmt::Display for ParseComplexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("invalid complex number: expected the `a+bi` form")
    }
}

impl std::error::Error for ParseComplexError {}

/// Returns the byte index where the imaginary part begins.
///
/// That is the rightmost `+`/`-` that is neither the leading sign of the
/// real part nor part of an exponent such as `1e-3`.
fn imaginary_start(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&index| matches!(bytes[index], b'+' | b'-') && !matches!(bytes[index - 1], b'e' | b'E'))
}

macro_rules! define_complex {
    ($name:ident, $float:ty, $total:literal, $component:literal) => {
        #[doc = concat!(
            "A ", $total, "-bit complex number: a pair of `", stringify!($float), "` components."
        )]
        ///
        #[doc = concat!(
            "Renders as `a+bi` (explicit sign, trailing `i`); parses the same form, ",
            "including components in scientific notation."
        )]
        ///
        /// # Examples
        ///
        /// ```rust
        #[doc = concat!("use scalarset::", stringify!($name), ";")]
        ///
        #[doc = concat!("let value = ", stringify!($name), "::new(1.0, 0.0);")]
        /// assert_eq!(value.to_string(), "1+0i");
        #[doc = concat!(
            "assert_eq!(\"2.5-3i\".parse::<", stringify!($name),
            ">(), Ok(", stringify!($name), "::new(2.5, -3.0)));"
        )]
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            #[doc = concat!("The real component (", $component, "-bit float).")]
            pub re: $float,
            #[doc = concat!("The imaginary component (", $component, "-bit float).")]
            pub im: $float,
        }

        impl $name {
            /// Creates a complex number from its real and imaginary components.
            #[inline]
            #[must_use]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im.is_sign_negative() && !self.im.is_nan() {
                    write!(formatter, "{}-{}i", self.re, -self.im)
                } else {
                    write!(formatter, "{}+{}i", self.re, self.im)
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseComplexError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                let body = text.strip_suffix('i').ok_or(ParseComplexError)?;
                let start = imaginary_start(body).ok_or(ParseComplexError)?;
                let re = body[..start].parse().map_err(|_| ParseComplexError)?;
                let im = body[start..].parse().map_err(|_| ParseComplexError)?;
                Ok(Self::new(re, im))
            }
        }

        impl Scalar for $name {
            type Key = (OrderedFloat<$float>, OrderedFloat<$float>);

            #[inline]
            fn to_key(&self) -> Option<Self::Key> {
                Some((OrderedFloat(self.re), OrderedFloat(self.im)))
            }

            #[inline]
            fn from_key(key: Self::Key) -> Self {
                Self::new(key.0.into_inner(), key.1.into_inner())
            }
        }
    };
}

define_complex!(Complex64, f32, "64", "32");
define_complex!(Complex128, f64, "128", "64");

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Complex128::new(1.0, 0.0), "1+0i")]
    #[case(Complex128::new(2.5, -3.0), "2.5-3i")]
    #[case(Complex128::new(-1.5, 2.0), "-1.5+2i")]
    #[case(Complex128::new(0.0, -0.0), "0-0i")]
    fn display_renders_explicit_sign(#[case] value: Complex128, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case("1+0i", Complex64::new(1.0, 0.0))]
    #[case("-1.5+2i", Complex64::new(-1.5, 2.0))]
    #[case("2.5-3i", Complex64::new(2.5, -3.0))]
    #[case("1e-3+2i", Complex64::new(0.001, 2.0))]
    #[case("1e+3-2e-1i", Complex64::new(1000.0, -0.2))]
    fn parse_accepts_signed_forms(#[case] text: &str, #[case] expected: Complex64) {
        assert_eq!(text.parse::<Complex64>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("1+2")]
    #[case("i")]
    #[case("1+i+2i")]
    #[case("nonsense")]
    fn parse_rejects_malformed_input(#[case] text: &str) {
        assert!(text.parse::<Complex128>().is_err());
    }

    #[rstest]
    fn display_parse_round_trip() {
        let value = Complex128::new(-12.75, 0.5);
        assert_eq!(value.to_string().parse::<Complex128>(), Ok(value));
    }
}
