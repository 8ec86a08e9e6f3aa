use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::polynomial::{Bits, Polynomial};
use crate::error::PolyError;

/// Сколько значащих бит помещается в `i32` без знакового.
pub const INT_CAPACITY: u32 = i32::BITS - 1;

/// Вид строкового представления.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `x^3 + x + 1`
    #[default]
    Polynomial,
    /// `[1 0 1 1]`
    Binary,
}

impl Polynomial {
    /// Строка вида `[1 0 0 1 1]`, от старшего разряда к младшему.
    /// Ноль выводится как `[]`.
    pub fn to_binary_string(&self) -> String {
        let digits: Vec<&str> = (0..self.len())
            .rev()
            .map(|i| if self.coefficient(i) { "1" } else { "0" })
            .collect();
        format!("[{}]", digits.join(" "))
    }

    /// Строка вида `x^3 + x + 1`. Ноль выводится как `0`.
    pub fn to_polynomial_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let terms: Vec<String> = self
            .exponents()
            .rev()
            .map(|exp| match exp {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{}", exp),
            })
            .collect();
        terms.join(" + ")
    }

    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Polynomial => self.to_polynomial_string(),
            Notation::Binary => self.to_binary_string(),
        }
    }

    /// Адаптер для `format!` с выбранным представлением.
    pub fn display(&self, notation: Notation) -> PolyDisplay<'_> {
        PolyDisplay {
            poly: self,
            notation,
        }
    }

    /// Перевод в десятичное число.
    ///
    /// Коэффициенты читаются как двоичная запись числа. Если старшая единица
    /// не помещается в [`INT_CAPACITY`] бит, возвращается
    /// [`PolyError::NumericOverflow`].
    pub fn to_int(&self) -> Result<i32, PolyError> {
        let length = self.len();
        if length > INT_CAPACITY as usize {
            return Err(PolyError::NumericOverflow {
                length,
                capacity: INT_CAPACITY,
            });
        }
        Ok(self.exponents().fold(0i32, |acc, exp| acc | (1 << exp)))
    }

    /// Разбор строки (в свободном формате) и перевод в число.
    pub fn int_value(input: &str) -> Result<i32, PolyError> {
        Polynomial::parse(input).to_int()
    }

    /// Перевод в число без ограничения разрядности.
    pub fn to_biguint(&self) -> BigUint {
        let mut value = BigUint::zero();
        for exp in self.exponents() {
            value.set_bit(exp as u64, true);
        }
        value
    }
}

impl From<&BigUint> for Polynomial {
    fn from(value: &BigUint) -> Self {
        let bits: Bits = (0..value.bits()).map(|i| value.bit(i)).collect();
        Polynomial::from_bits(bits)
    }
}

impl From<BigUint> for Polynomial {
    fn from(value: BigUint) -> Self {
        Polynomial::from(&value)
    }
}

pub struct PolyDisplay<'a> {
    poly: &'a Polynomial,
    notation: Notation,
}

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.poly.render(self.notation))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_polynomial_string())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({})", self.to_binary_string())
    }
}
