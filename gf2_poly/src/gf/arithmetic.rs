use std::ops::{Add, Mul, Shl, Shr, Sub};

use bitvec::prelude::*;
use log::{debug, trace};

use super::polynomial::{Bits, Polynomial};
use crate::error::PolyError;

/// acc ^= term * x^shift, с расширением acc при необходимости
fn xor_shifted_into(acc: &mut Bits, term: &BitSlice<usize, Lsb0>, shift: usize) {
    let needed = term.len() + shift;
    if acc.len() < needed {
        acc.resize(needed, false);
    }
    for i in term.iter_ones() {
        let bit = acc[i + shift];
        acc.set(i + shift, !bit);
    }
}

/// Сложение многочленов в GF(2): XOR поразрядно
pub fn poly_add(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut bits = long.bits().to_bitvec();
    xor_shifted_into(&mut bits, short.bits(), 0);
    Polynomial::from_bits(bits)
}

/// Вычитание совпадает со сложением (характеристика 2)
pub fn poly_sub(a: &Polynomial, b: &Polynomial) -> Polynomial {
    poly_add(a, b)
}

/// Умножение «сдвиг и сложение» без приведения по модулю
pub fn poly_mul(a: &Polynomial, b: &Polynomial) -> Polynomial {
    if a.is_zero() || b.is_zero() {
        return Polynomial::zero();
    }
    let mut acc = Bits::repeat(false, a.len() + b.len() - 1);
    for k in b.exponents() {
        xor_shifted_into(&mut acc, a.bits(), k);
    }
    Polynomial::from_bits(acc)
}

/// Деление с остатком: (частное, остаток).
///
/// Пока степень остатка не меньше степени делителя, из него вычитается
/// делитель, сдвинутый так, чтобы старшие степени совпали, а к частному
/// добавляется `x^shift`. Каждая итерация понижает старшую степень остатка,
/// поэтому цикл конечен и `remainder.len() < divisor.len()` на выходе.
pub fn poly_divmod(
    dividend: &Polynomial,
    divisor: &Polynomial,
) -> Result<(Polynomial, Polynomial), PolyError> {
    if divisor.is_zero() {
        return Err(PolyError::DivisionByZero);
    }
    debug!(
        "Dividing polynomial of length {} by polynomial of length {}",
        dividend.len(),
        divisor.len()
    );

    let mut quotient = Bits::new();
    let mut remainder = dividend.clone();

    while remainder.len() >= divisor.len() {
        let shift = remainder.len() - divisor.len();
        let term = divisor.shl_by(shift);
        xor_shifted_into(&mut quotient, bits![usize, Lsb0; 1], shift);
        remainder = poly_add(&remainder, &term);
        trace!("Reduction step: shift {}, remainder length {}", shift, remainder.len());
    }

    let quotient = Polynomial::from_bits(quotient);
    debug!(
        "Division finished: quotient length {}, remainder length {}",
        quotient.len(),
        remainder.len()
    );
    Ok((quotient, remainder))
}

/// Частное от деления
pub fn poly_div(dividend: &Polynomial, divisor: &Polynomial) -> Result<Polynomial, PolyError> {
    poly_divmod(dividend, divisor).map(|(q, _)| q)
}

/// Остаток от деления: a mod divisor
pub fn poly_rem(dividend: &Polynomial, divisor: &Polynomial) -> Result<Polynomial, PolyError> {
    poly_divmod(dividend, divisor).map(|(_, r)| r)
}

impl Polynomial {
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), PolyError> {
        poly_divmod(self, divisor)
    }

    /// `None` при делении на ноль.
    pub fn checked_div(&self, divisor: &Polynomial) -> Option<Polynomial> {
        poly_div(self, divisor).ok()
    }

    /// `None` при делении на ноль.
    pub fn checked_rem(&self, divisor: &Polynomial) -> Option<Polynomial> {
        poly_rem(self, divisor).ok()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $func:ident) => {
        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $func(self, rhs)
            }
        }

        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, poly_add);
forward_binop!(Sub, sub, poly_sub);
forward_binop!(Mul, mul, poly_mul);

impl Shl<isize> for &Polynomial {
    type Output = Polynomial;

    fn shl(self, n: isize) -> Polynomial {
        self.shift_left(n)
    }
}

impl Shl<isize> for Polynomial {
    type Output = Polynomial;

    fn shl(self, n: isize) -> Polynomial {
        self.shift_left(n)
    }
}

impl Shr<isize> for &Polynomial {
    type Output = Polynomial;

    fn shr(self, n: isize) -> Polynomial {
        self.shift_right(n)
    }
}

impl Shr<isize> for Polynomial {
    type Output = Polynomial;

    fn shr(self, n: isize) -> Polynomial {
        self.shift_right(n)
    }
}
