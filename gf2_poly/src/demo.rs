//! Демонстрационный набор операций над a = x^6 + x^5 + x^3 + x^2 и b = x^2 + 1.

use crate::error::PolyError;
use crate::gf::arithmetic::{poly_add, poly_divmod, poly_mul};
use crate::gf::format::Notation;
use crate::gf::polynomial::{Direction, Polynomial};

/// Строки демонстрации: (подпись, значение).
pub fn sample_session() -> Result<Vec<(&'static str, String)>, PolyError> {
    let a = Polynomial::parse("1101100");
    let b = Polynomial::parse("101");
    let poly = Notation::Polynomial;
    let bin = Notation::Binary;

    let mut lines = vec![
        ("a:", a.render(poly)),
        ("b:", b.render(poly)),
        ("empty set:", Polynomial::zero().render(poly)),
        (
            "ascending:",
            Polynomial::parse_with(Direction::LsbFirst, "0011011").render(poly),
        ),
        (
            "descending:",
            Polynomial::parse_with(Direction::MsbFirst, "1101100").render(poly),
        ),
        (
            "with brackets:",
            Polynomial::parse("[1,1 ,0,1, 1 0, 0]").render(poly),
        ),
        ("a + b:", poly_add(&a, &b).render(bin)),
        (
            "in decimal:",
            Polynomial::parse("[100 0000 0000]").to_int()?.to_string(),
        ),
        (
            "from string:",
            Polynomial::int_value("[100 0000 0010]")?.to_string(),
        ),
        ("shift a left by 3:", a.shift_left(3).render(bin)),
        ("shift a right by 3:", a.shift_right(3).render(bin)),
        ("a * b:", poly_mul(&a, &b).render(bin)),
    ];

    let relation = if a > b { "a > b" } else { "a <= b" };
    lines.push(("compare:", relation.to_string()));

    let samples = [
        ("a / b:", a.clone(), b.clone()),
        (
            "110101011 / 1101:",
            Polynomial::parse("110101011"),
            Polynomial::parse("1101"),
        ),
    ];
    for (label, dividend, divisor) in samples {
        let (q, r) = poly_divmod(&dividend, &divisor)?;
        lines.push((label, format!("[{}, {}]", q.render(bin), r.render(bin))));
    }

    Ok(lines)
}
