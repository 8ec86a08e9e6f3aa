//! Арифметика в кольце многочленов GF(2)[x].
//!
//! Многочлен хранится как битовый вектор: бит `i` — коэффициент при `x^i`.
//! Результаты не приводятся по модулю неприводимого многочлена, так что это
//! именно кольцо многочленов, а не поле GF(2^m).

pub mod calculator;
pub mod demo;
pub mod error;
pub mod gf;

pub use calculator::{evaluate, CalculatorForm, Operation, Outcome};
pub use error::PolyError;
pub use gf::arithmetic::{poly_add, poly_div, poly_divmod, poly_mul, poly_rem, poly_sub};
pub use gf::format::{Notation, PolyDisplay, INT_CAPACITY};
pub use gf::polynomial::{Direction, Polynomial};
