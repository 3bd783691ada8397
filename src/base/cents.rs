use std::fmt::Write as _;

use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Cents(pub i64);

// Arithmetic saturates so that absurd amounts clamp instead of wrapping.

impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + x)
    }
}

impl Cents {
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.0.unsigned_abs().max(100);
        let mut len = base::util::count_digits(n);
        len += (len - 3) / 3; // thousands separators
        len += 1; // decimal comma
        len += CURRENCY_PREFIX.len();
        if self.0 < 0 {
            len += 1; // minus sign
        }
        len
    }
}

const CURRENCY_PREFIX: &str = "R$ ";

impl std::fmt::Display for Cents {
    /// Formats the pt-BR way: `R$ 1.234,56`. Negative quantities are prefixed
    /// with a minus sign, `-R$ 1.234,56`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b',');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b'.');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        if self.0 < 0 {
            f.write_char('-')?;
        }
        f.write_str(CURRENCY_PREFIX)?;
        f.write_str(s)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a canonical decimal string such as `-1234.5`. Decimal places
    /// beyond the second are discarded. Locale-specific input goes through
    /// [`base::locale::parse_currency`] first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.to_string();
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cents(0), "R$ 0,00")]
    #[case(Cents(10), "R$ 0,10")]
    #[case(Cents(-123), "-R$ 1,23")]
    #[case(Cents(100000), "R$ 1.000,00")]
    #[case(Cents(74950), "R$ 749,50")]
    #[case(Cents(123456789), "R$ 1.234.567,89")]
    #[case(Cents(-123456789), "-R$ 1.234.567,89")]
    #[case(Cents(i64::MIN), "-R$ 92.233.720.368.547.758,08")]
    fn test_to_string(#[case] cents: Cents, #[case] want: &str) {
        let got = cents.to_string();
        assert_eq!(got, want);
        assert_eq!(cents.charlen(), got.len());
    }

    #[rstest]
    #[case(Cents(i64::MAX) + Cents(1), Cents(i64::MAX))]
    #[case(Cents(i64::MIN) - Cents(1), Cents(i64::MIN))]
    #[case(-Cents(i64::MIN), Cents(i64::MAX))]
    #[case([Cents(i64::MAX), Cents(i64::MAX), Cents(-5)].into_iter().sum(), Cents(i64::MAX - 5))]
    fn test_arithmetic_saturates(#[case] got: Cents, #[case] want: Cents) {
        assert_eq!(got, want)
    }

    #[rstest]
    #[case("0", Cents(0))]
    #[case("0.", Cents(0))]
    #[case(".0", Cents(0))]
    #[case("-0", Cents(0))]
    #[case("1", Cents(100))]
    #[case("+1.", Cents(100))]
    #[case("-.1", Cents(-10))]
    #[case("1234.56", Cents(123456))]
    #[case("0001234.56789", Cents(123456))]
    #[case("2.5", Cents(250))]
    fn test_from_str(#[case] s: &str, #[case] want: Cents) {
        assert_eq!(s.parse::<Cents>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case(".")]
    #[case("+a.")]
    #[case("1,234.56")]
    #[case("1.2.3")]
    #[case("1e3")]
    #[case("inf")]
    #[case("99999999999999999999")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Cents>().is_err())
    }

    #[test]
    fn test_arithmetic() {
        let total = [Cents(100000), Cents(-25050)].into_iter().sum::<Cents>();
        assert_eq!(total, Cents(74950));
        assert_eq!(Cents(100000) - Cents(25050), Cents(74950));
        assert_eq!(-Cents(5), Cents(-5));
    }
}
