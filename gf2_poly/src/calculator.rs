//! Модель экрана калькулятора: два поля ввода, выбор операции и четыре
//! поля вывода (результат и остаток, каждый в двух видах).

use std::fmt;

use log::{debug, warn};

use crate::error::PolyError;
use crate::gf::arithmetic::{poly_add, poly_divmod, poly_mul};
use crate::gf::polynomial::{Direction, Polynomial};

/// Операция, выбираемая по индексу пункта в выпадающем списке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    Addition,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn index(self) -> usize {
        match self {
            Operation::Addition => 0,
            Operation::Multiplication => 1,
            Operation::Division => 2,
        }
    }
}

impl TryFrom<usize> for Operation {
    type Error = PolyError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Operation::Addition),
            1 => Ok(Operation::Multiplication),
            2 => Ok(Operation::Division),
            other => Err(PolyError::UnknownOperation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Addition => "a + b",
            Operation::Multiplication => "a * b",
            Operation::Division => "a / b",
        };
        f.write_str(label)
    }
}

/// Результат операции.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Single(Polynomial),
    Division {
        quotient: Polynomial,
        remainder: Polynomial,
    },
}

pub fn evaluate(op: Operation, a: &Polynomial, b: &Polynomial) -> Result<Outcome, PolyError> {
    match op {
        Operation::Addition => Ok(Outcome::Single(poly_add(a, b))),
        Operation::Multiplication => Ok(Outcome::Single(poly_mul(a, b))),
        Operation::Division => {
            let (quotient, remainder) = poly_divmod(a, b)?;
            Ok(Outcome::Division {
                quotient,
                remainder,
            })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    pub first: String,
    pub second: String,
    pub direction: Direction,
    pub operation: Operation,

    pub result_polynomial: String,
    pub result_binary: String,
    pub remainder_polynomial: String,
    pub remainder_binary: String,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбор операции по индексу пункта списка.
    pub fn select(&mut self, index: usize) -> Result<(), PolyError> {
        self.operation = Operation::try_from(index)?;
        Ok(())
    }

    /// Нажатие кнопки расчёта. При ошибке поля вывода не меняются.
    pub fn calculate(&mut self) -> Result<(), PolyError> {
        let a = Polynomial::parse_with(self.direction, &self.first);
        let b = Polynomial::parse_with(self.direction, &self.second);
        debug!("Calculating {} for a = {} and b = {}", self.operation, a, b);

        let outcome = evaluate(self.operation, &a, &b).map_err(|e| {
            warn!("Calculation failed: {}", e);
            e
        })?;

        match outcome {
            Outcome::Single(result) => {
                self.result_polynomial = result.to_polynomial_string();
                self.result_binary = result.to_binary_string();
                self.remainder_polynomial.clear();
                self.remainder_binary.clear();
            }
            Outcome::Division {
                quotient,
                remainder,
            } => {
                self.result_polynomial = quotient.to_polynomial_string();
                self.result_binary = quotient.to_binary_string();
                self.remainder_polynomial = remainder.to_polynomial_string();
                self.remainder_binary = remainder.to_binary_string();
            }
        }
        Ok(())
    }

    /// Нажатие кнопки очистки: все поля становятся пустыми.
    pub fn clear(&mut self) {
        debug!("Clearing calculator form");
        self.first.clear();
        self.second.clear();
        self.result_polynomial.clear();
        self.result_binary.clear();
        self.remainder_polynomial.clear();
        self.remainder_binary.clear();
    }
}
