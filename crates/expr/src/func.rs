use std::fmt;

/// Named functions available in formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Exp,
    Sqrt,
    Abs,
    /// `pow(base, exponent)`.
    Pow,
    /// Smallest of one or more arguments.
    Min,
    /// Largest of one or more arguments.
    Max,
}

impl Func {
    /// All supported functions.
    pub const ALL: [Func; 10] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Log,
        Func::Exp,
        Func::Sqrt,
        Func::Abs,
        Func::Pow,
        Func::Min,
        Func::Max,
    ];

    /// Looks up a function by its formula name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the name used in formulas.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Log => "log",
            Func::Exp => "exp",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Pow => "pow",
            Func::Min => "min",
            Func::Max => "max",
        }
    }

    /// Checks an argument count, returning the expected count on mismatch.
    pub(crate) fn check_arity(self, count: usize) -> Result<(), &'static str> {
        match self {
            Func::Pow if count != 2 => Err("2"),
            Func::Min | Func::Max if count == 0 => Err("at least 1"),
            Func::Sin
            | Func::Cos
            | Func::Tan
            | Func::Log
            | Func::Exp
            | Func::Sqrt
            | Func::Abs
                if count != 1 =>
            {
                Err("1")
            }
            _ => Ok(()),
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// Argument counts are validated at parse time; missing arguments
    /// evaluate as NaN.
    pub(crate) fn apply(self, mut args: impl Iterator<Item = f64>) -> f64 {
        let first = args.next().unwrap_or(f64::NAN);
        match self {
            Func::Sin => first.sin(),
            Func::Cos => first.cos(),
            Func::Tan => first.tan(),
            Func::Log => first.ln(),
            Func::Exp => first.exp(),
            Func::Sqrt => first.sqrt(),
            Func::Abs => first.abs(),
            Func::Pow => first.powf(args.next().unwrap_or(f64::NAN)),
            Func::Min => args.fold(first, f64::min),
            Func::Max => args.fold(first, f64::max),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("ln"), None);
    }

    #[test]
    fn arity_rules() {
        assert!(Func::Sin.check_arity(1).is_ok());
        assert_eq!(Func::Sin.check_arity(2), Err("1"));
        assert!(Func::Pow.check_arity(2).is_ok());
        assert_eq!(Func::Pow.check_arity(1), Err("2"));
        assert!(Func::Max.check_arity(4).is_ok());
        assert_eq!(Func::Min.check_arity(0), Err("at least 1"));
    }

    #[test]
    fn min_and_max_fold_all_arguments() {
        assert_eq!(Func::Min.apply([3.0, -1.0, 2.0].into_iter()), -1.0);
        assert_eq!(Func::Max.apply([3.0, -1.0, 2.0].into_iter()), 3.0);
    }
}
