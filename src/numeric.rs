//! Numeric token conversion.
//!
//! HYSPLIT writes plain fixed-point numbers, so a single-pass byte scanner
//! is enough and avoids the general float parser on every field. The
//! converter is permissive: it stops at the first byte it does not
//! understand and returns what it has accumulated so far.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Integer,
    Fraction,
    Exponent,
}

/// Convert a whitespace-bounded token into an `f64`.
///
/// Accepts an optional sign, an optional fractional part and an optional
/// `e`/`E` exponent with its own sign. Never fails: `"12.5abc"` yields
/// `12.5` and `"abc"` yields `0.0`.
pub fn parse_number(token: &str) -> f64 {
    let bytes = token.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }

    let mut sign = 1.0;
    match bytes.get(pos) {
        Some(b'-') => {
            sign = -1.0;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }

    let mut mode = Mode::Integer;
    let mut integer = 0.0_f64;
    let mut fraction = 0.0_f64;
    let mut divisor = 1.0_f64;
    let mut exponent: i32 = 0;
    let mut exponent_sign: i32 = 1;

    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'0'..=b'9' => {
                let digit = byte - b'0';
                match mode {
                    Mode::Integer => integer = integer * 10.0 + f64::from(digit),
                    Mode::Fraction => {
                        fraction = fraction * 10.0 + f64::from(digit);
                        divisor *= 10.0;
                    }
                    Mode::Exponent => {
                        exponent = exponent
                            .saturating_mul(10)
                            .saturating_add(i32::from(digit));
                    }
                }
            }
            b'.' => {
                if mode == Mode::Integer {
                    mode = Mode::Fraction;
                }
            }
            b'e' | b'E' => {
                mode = Mode::Exponent;
                match bytes.get(pos + 1) {
                    Some(b'-') => {
                        exponent_sign = -1;
                        pos += 1;
                    }
                    Some(b'+') => pos += 1,
                    _ => {}
                }
            }
            _ => break,
        }
        pos += 1;
    }

    let value = sign * (integer + fraction / divisor);
    if mode == Mode::Exponent {
        value * 10.0_f64.powi(exponent_sign.saturating_mul(exponent))
    } else {
        value
    }
}
