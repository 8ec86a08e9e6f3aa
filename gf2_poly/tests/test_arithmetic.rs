use gf2_poly::{poly_add, poly_div, poly_divmod, poly_mul, poly_rem, PolyError, Polynomial};

fn poly_from_bits(bits: &[u8]) -> Polynomial {
    // вспомогательная функция: bits[i]==1 → коэффициент при x^i
    let s: String = bits.iter().rev().map(|&b| if b != 0 { '1' } else { '0' }).collect();
    Polynomial::parse(&s)
}

#[test]
fn test_poly_add_same_length() {
    // (1 + x^2) + (1 + x) = x^2 + x
    let a = poly_from_bits(&[1, 0, 1]);
    let b = poly_from_bits(&[1, 1, 0]);
    let c = poly_add(&a, &b);
    assert_eq!(c, poly_from_bits(&[0, 1, 1]));
}

#[test]
fn test_poly_add_diff_length() {
    // x^3 + 1 + (x + 1) = x^3 + x
    let a = poly_from_bits(&[1, 0, 0, 1]);
    let b = poly_from_bits(&[1, 1]);
    assert_eq!(poly_add(&a, &b), poly_from_bits(&[0, 1, 0, 1]));
}

#[test]
fn test_poly_add_zero() {
    let a = poly_from_bits(&[1, 0, 1, 1]);
    assert_eq!(poly_add(&a, &Polynomial::zero()), a);
}

#[test]
fn test_poly_add_sample() {
    let a = Polynomial::parse("1101100");
    let b = Polynomial::parse("101");
    let c = poly_add(&a, &b);
    assert_eq!(c.to_polynomial_string(), "x^6 + x^5 + x^3 + 1");
    assert_eq!(c.to_binary_string(), "[1 1 0 1 0 0 1]");
}

#[test]
fn test_poly_mul_simple() {
    // (x + 1)*(x^2 + 1) = x^3 + x^2 + x + 1
    let a = poly_from_bits(&[1, 1]);
    let b = poly_from_bits(&[1, 0, 1]);
    assert_eq!(poly_mul(&a, &b), poly_from_bits(&[1, 1, 1, 1]));
}

#[test]
fn test_poly_mul_degree_sum() {
    // deg(a)=2, deg(b)=3 → deg=5
    let a = poly_from_bits(&[1, 0, 1]); // x^2 + 1
    let b = poly_from_bits(&[0, 1, 0, 1]); // x^3 + x
    let p = poly_mul(&a, &b);
    assert_eq!(p.len(), 6);
    // x^5 + 2x^3 + x = x^5 + x
    assert_eq!(p, poly_from_bits(&[0, 1, 0, 0, 0, 1]));
}

#[test]
fn test_poly_mul_no_reduction() {
    // x^7 * x^7 = x^14, никакого приведения по модулю
    let a = Polynomial::monomial(7);
    assert_eq!(poly_mul(&a, &a), Polynomial::monomial(14));
}

#[test]
fn test_poly_mul_sample() {
    let a = Polynomial::parse("1101100");
    let b = Polynomial::parse("101");
    assert_eq!(
        poly_mul(&a, &b).to_polynomial_string(),
        "x^8 + x^7 + x^6 + x^4 + x^3 + x^2"
    );
}

#[test]
fn test_poly_divmod_exact() {
    // (x^2 + 1) / (x + 1) = (x + 1), rem = 0
    let dividend = poly_from_bits(&[1, 0, 1]);
    let divisor = poly_from_bits(&[1, 1]);
    let (q, r) = poly_divmod(&dividend, &divisor).unwrap();
    assert_eq!(q, poly_from_bits(&[1, 1]));
    assert!(r.is_zero());
}

#[test]
fn test_poly_divmod_with_remainder() {
    // (x^3 + x + 1) / (x^2 + 1) = x, rem = 1
    let dividend = poly_from_bits(&[1, 1, 0, 1]);
    let divisor = poly_from_bits(&[1, 0, 1]);
    let (q, r) = poly_divmod(&dividend, &divisor).unwrap();
    assert_eq!(q, Polynomial::monomial(1));
    assert_eq!(r, Polynomial::one());
}

#[test]
fn test_poly_divmod_sample() {
    let a = Polynomial::parse("1101100");
    let b = Polynomial::parse("101");
    let (q, r) = poly_divmod(&a, &b).unwrap();
    assert_eq!(q.to_polynomial_string(), "x^4 + x^3 + x^2");
    assert_eq!(q.to_binary_string(), "[1 1 1 0 0]");
    assert_eq!(r.to_polynomial_string(), "0");
    assert_eq!(r.to_binary_string(), "[]");
}

#[test]
fn test_poly_divmod_second_sample() {
    let a = Polynomial::parse("110101011");
    let b = Polynomial::parse("1101");
    let (q, r) = poly_divmod(&a, &b).unwrap();
    assert_eq!(q.to_binary_string(), "[1 0 0 0 0 1]");
    assert_eq!(r.to_binary_string(), "[1 1 0]");
    assert_eq!(poly_add(&poly_mul(&q, &b), &r), a);
}

#[test]
fn test_poly_divmod_remainder_shorter_than_divisor() {
    // после первого шага остаток 1011: той же степени, что и 1101, но меньше по значению
    let a = Polynomial::parse("110101011");
    let b = Polynomial::parse("1101");
    let (q, r) = poly_divmod(&a, &b).unwrap();
    assert!(r.is_zero() || r.len() < b.len(), "remainder {:?} divisor {:?}", r, b);
    assert_eq!(q, Polynomial::parse("100001"));
}

#[test]
fn test_poly_div_and_rem() {
    let a = Polynomial::parse("110101011");
    let b = Polynomial::parse("1101");
    assert_eq!(poly_div(&a, &b).unwrap(), Polynomial::parse("100001"));
    assert_eq!(poly_rem(&a, &b).unwrap(), Polynomial::parse("110"));
}

#[test]
fn test_poly_divmod_by_zero() {
    let a = Polynomial::parse("1101");
    assert_eq!(
        poly_divmod(&a, &Polynomial::parse("")),
        Err(PolyError::DivisionByZero)
    );
    assert_eq!(
        poly_divmod(&Polynomial::zero(), &Polynomial::zero()),
        Err(PolyError::DivisionByZero)
    );
}

#[test]
fn test_poly_divmod_zero_dividend() {
    let (q, r) = poly_divmod(&Polynomial::zero(), &Polynomial::parse("11")).unwrap();
    assert!(q.is_zero());
    assert!(r.is_zero());
}

#[test]
fn test_poly_divmod_beyond_int_range() {
    // степени выше 31 бита: сравнение не должно переполняться
    let a = Polynomial::monomial(80) + Polynomial::parse("1011");
    let b = Polynomial::monomial(40) + Polynomial::one();
    let (q, r) = poly_divmod(&a, &b).unwrap();
    assert!(r.len() < b.len());
    assert_eq!(poly_add(&poly_mul(&q, &b), &r), a);
}
