use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use bitvec::prelude::*;

/// Битовый вектор коэффициентов: bits[i] — коэффициент при x^i
pub(crate) type Bits = BitVec<usize, Lsb0>;

/// Порядок записи разрядов во входной строке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// От старших разрядов к младшим: "1101" = x^3 + x^2 + 1
    #[default]
    MsbFirst,
    /// От младших разрядов к старшим: "1101" = x^3 + x + 1
    LsbFirst,
}

/// Многочлен над GF(2).
///
/// Хранится без старших нулей, поэтому длина (степень + 1) всегда
/// вычисляется по содержимому, а равенство и хеш совпадают со структурным
/// равенством множеств ненулевых коэффициентов.
///
/// Значения неизменяемы: каждая операция возвращает новый многочлен.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    bits: Bits,
}

impl Polynomial {
    /// Нулевой многочлен (длина 0).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Многочлен `1`.
    pub fn one() -> Self {
        Self::monomial(0)
    }

    /// Одночлен `x^exp`.
    pub fn monomial(exp: usize) -> Self {
        let mut bits = Bits::repeat(false, exp + 1);
        bits.set(exp, true);
        Self { bits }
    }

    /// Разбор строки "от старших к младшим".
    ///
    /// Все символы, кроме `0` и `1`, отбрасываются, поэтому `"1101100"`,
    /// `"[1,1 ,0,1, 1 0, 0]"` и `"110 1100"` дают один и тот же многочлен.
    /// Строка без двоичных цифр даёт ноль.
    pub fn parse(input: &str) -> Self {
        Self::parse_with(Direction::MsbFirst, input)
    }

    /// Разбор строки с явно заданным порядком разрядов.
    pub fn parse_with(direction: Direction, input: &str) -> Self {
        let digits = input.chars().filter_map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        });

        let mut bits: Bits = digits.collect();
        if direction == Direction::MsbFirst {
            bits.reverse();
        }
        Self::from_bits(bits)
    }

    /// Обёртка над готовым вектором; старшие нули отрезаются.
    pub(crate) fn from_bits(mut bits: Bits) -> Self {
        let len = bits.last_one().map_or(0, |i| i + 1);
        bits.truncate(len);
        Self { bits }
    }

    pub(crate) fn bits(&self) -> &BitSlice<usize, Lsb0> {
        &self.bits
    }

    /// Количество используемых бит: индекс старшей единицы + 1.
    pub fn len(&self) -> usize {
        self.bits.last_one().map_or(0, |i| i + 1)
    }

    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// Степень многочлена, `None` для нуля.
    pub fn degree(&self) -> Option<usize> {
        self.bits.last_one()
    }

    /// Коэффициент при `x^exp`.
    pub fn coefficient(&self, exp: usize) -> bool {
        exp < self.bits.len() && self.bits[exp]
    }

    /// Показатели степеней с единичными коэффициентами, по возрастанию.
    pub fn exponents(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Нециклический сдвиг влево (умножение на `x^n`).
    /// Отрицательный `n` означает сдвиг вправо на `-n`.
    pub fn shift_left(&self, n: isize) -> Self {
        if n >= 0 {
            self.shl_by(n as usize)
        } else {
            self.shr_by(n.unsigned_abs())
        }
    }

    /// Нециклический сдвиг вправо: младшие `n` бит теряются.
    /// Отрицательный `n` означает сдвиг влево на `-n`.
    pub fn shift_right(&self, n: isize) -> Self {
        if n >= 0 {
            self.shr_by(n as usize)
        } else {
            self.shl_by(n.unsigned_abs())
        }
    }

    pub(crate) fn shl_by(&self, n: usize) -> Self {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let mut bits = Bits::repeat(false, self.len() + n);
        for i in self.bits.iter_ones() {
            bits.set(i + n, true);
        }
        Self { bits }
    }

    pub(crate) fn shr_by(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        if n >= self.len() {
            return Self::zero();
        }
        Self::from_bits(self.bits[n..].to_bitvec())
    }

    /// Сравнение в стиле `compareTo`: -1, 0 или 1.
    pub fn compare(x: &Polynomial, y: &Polynomial) -> i32 {
        match x.cmp(y) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

/// Порядок по численному значению (коэффициенты как двоичные разряды).
///
/// Сначала сравниваются старшие степени, затем остальные разряды сверху вниз,
/// так что переполнения не бывает при любой длине.
impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.iter_ones().rev().cmp(other.bits.iter_ones().rev())
    }
}

impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Polynomial {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
