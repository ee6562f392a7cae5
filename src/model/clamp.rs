/// Builds a clamping function for the range `[min, max]`.
///
/// When `inclusive` is false the upper bound becomes `max - 1`.
pub fn clamp(min: i64, max: i64, inclusive: bool) -> impl Fn(i64) -> i64 {
    let lower_bound = min;
    let upper_bound = if inclusive { max } else { max - 1 };

    move |value| {
        if value < lower_bound {
            lower_bound
        } else if value >= upper_bound {
            upper_bound
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-1, 0)]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(5, 5)]
    #[case(10, 5)]
    fn test_clamp_inclusive(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(clamp(0, 5, true)(value), expected);
    }

    #[rstest]
    #[case(-1, 0)]
    #[case(4, 4)]
    #[case(5, 4)]
    #[case(10, 4)]
    fn test_clamp_exclusive(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(clamp(0, 5, false)(value), expected);
    }

    #[test]
    fn test_clamp_empty_range() {
        let f = clamp(0, 0, true);
        assert_eq!(f(-3), 0);
        assert_eq!(f(0), 0);
        assert_eq!(f(7), 0);
    }
}
