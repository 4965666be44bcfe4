//! Decimal rendering of `f64` values with a fixed, locale-independent rule:
//! shortest round-trip digits, `.` as the decimal separator, no digit
//! grouping, and positional notation whenever the decimal exponent lies in
//! `(-5, 16)`. Outside that range the value renders in scientific form with
//! an uppercase marker, a signed exponent, and at least two exponent digits
//! (`1E+16`, `1.5E-07`).

pub(crate) fn render(value: f64) -> String {
    let lit = format!("{value:E}");
    let Some(position) = lit.find('E') else {
        // Finite values always carry an exponent in `UpperExp` form; the
        // specials that don't are filtered out before rendering.
        return lit;
    };
    let exponent = lit[position + 1..].parse::<i32>().unwrap();
    if exponent > -5 && exponent < 16 {
        // Integral values render without a fractional part: `1`, not `1.0`.
        value.to_string()
    } else {
        let significand = &lit[..position];
        format!("{significand}E{exponent:+03}")
    }
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn positional() {
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-0.0), "-0");
        assert_eq!(render(2.345), "2.345");
        assert_eq!(render(0.1), "0.1");
        assert_eq!(render(-2.5), "-2.5");
        assert_eq!(render(123.456), "123.456");
        assert_eq!(render(0.0001), "0.0001");
    }

    #[test]
    fn integral_values_have_no_fractional_part() {
        assert_eq!(render(1.0), "1");
        assert_eq!(render(-42.0), "-42");
        assert_eq!(render(1e15), "1000000000000000");
    }

    #[test]
    fn scientific_above_threshold() {
        assert_eq!(render(1e16), "1E+16");
        assert_eq!(render(-1e20), "-1E+20");
        assert_eq!(render(2.5e100), "2.5E+100");
    }

    #[test]
    fn scientific_below_threshold() {
        assert_eq!(render(1e-5), "1E-05");
        assert_eq!(render(1.5e-7), "1.5E-07");
        assert_eq!(render(5e-324), "5E-324");
    }

    #[test]
    fn round_trip_digits_are_shortest() {
        assert_eq!(render(0.3), "0.3");
        assert_eq!(render(1.0 / 3.0), "0.3333333333333333");
    }
}
