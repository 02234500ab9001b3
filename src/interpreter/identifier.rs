/// Defines the special identifiers by generating an enum and a lookup table.
///
/// Each entry provides:
/// - the enum variant,
/// - the source name (matched case-insensitively),
/// - the number of arguments the identifier must be applied to.
///
/// The macro produces:
/// - `Special` (one variant per entry, in table order),
/// - `SPECIAL_TABLE` (static table for lookup and listing).
macro_rules! special_identifiers {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => { name: $name:literal, arity: $arity:literal $(,)? }
        ),* $(,)?
    ) => {
        /// A builtin identifier with a fixed arity.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Special {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        struct SpecialDef {
            name:    &'static str,
            special: Special,
            arity:   usize,
        }

        static SPECIAL_TABLE: &[SpecialDef] = &[
            $(
                SpecialDef { name: $name, special: Special::$variant, arity: $arity },
            )*
        ];
    };
}

special_identifiers! {
    /// `sin(x)`
    Sin   => { name: "sin",   arity: 1 },
    /// `cos(x)`
    Cos   => { name: "cos",   arity: 1 },
    /// `tan(x)`
    Tan   => { name: "tan",   arity: 1 },
    /// `sqrt(x)`
    Sqrt  => { name: "sqrt",  arity: 1 },
    /// Natural logarithm, `log(x)`.
    Log   => { name: "log",   arity: 1 },
    /// `log10(x)`
    Log10 => { name: "log10", arity: 1 },
    /// `floor(x)`
    Floor => { name: "floor", arity: 1 },
    /// `ceil(x)`
    Ceil  => { name: "ceil",  arity: 1 },
    /// Rounds half away from zero, `round(x)`.
    Round => { name: "round", arity: 1 },
    /// `tanh(x)`
    Tanh  => { name: "tanh",  arity: 1 },
    /// `exp(x)`
    Exp   => { name: "exp",   arity: 1 },
    /// `pow(base, exponent)`
    Pow   => { name: "pow",   arity: 2 },
    /// Floating-point remainder, `mod(a, b)`.
    Mod   => { name: "mod",   arity: 2 },
    /// π
    Pi    => { name: "pi",    arity: 0 },
    /// τ = 2π
    Tau   => { name: "tau",   arity: 0 },
    /// Euler's number e.
    Euler => { name: "euler", arity: 0 },
    /// The curve parameter.
    T     => { name: "t",     arity: 0 },
}

impl Special {
    /// Resolves a source name against the special table, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::identifier::Special;
    ///
    /// assert_eq!(Special::lookup("SIN"), Some(Special::Sin));
    /// assert_eq!(Special::lookup("radius"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        SPECIAL_TABLE.iter()
                     .find(|def| def.name.eq_ignore_ascii_case(name))
                     .map(|def| def.special)
    }

    /// Iterates over every builtin as `(name, arity)`, in table order.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::identifier::Special;
    ///
    /// assert_eq!(Special::table().next(), Some(("sin", 1)));
    /// assert!(Special::table().any(|entry| entry == ("pow", 2)));
    /// ```
    pub fn table() -> impl Iterator<Item = (&'static str, usize)> {
        SPECIAL_TABLE.iter().map(|def| (def.name, def.arity))
    }

    /// The canonical (lowercase) source name.
    #[must_use]
    pub fn name(self) -> &'static str {
        SPECIAL_TABLE[self as usize].name
    }

    /// Number of arguments this identifier must be applied to.
    #[must_use]
    pub fn arity(self) -> usize {
        SPECIAL_TABLE[self as usize].arity
    }
}

/// The target of an application node: a builtin or a user variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// One of the builtin names from the special table.
    Special(Special),
    /// Any other name; must be bound by the caller's variables.
    Variable(String),
}

impl Identifier {
    /// Resolves an identifier as written in the source.
    ///
    /// Names found in the special table (case-insensitively) become
    /// [`Identifier::Special`]; everything else is a user variable and keeps
    /// its exact spelling.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::identifier::{Identifier, Special};
    ///
    /// assert_eq!(Identifier::resolve("Pi"), Identifier::Special(Special::Pi));
    /// assert_eq!(Identifier::resolve("r'"), Identifier::Variable("r'".to_string()));
    /// ```
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Special::lookup(name).map_or_else(|| Self::Variable(name.to_string()), Self::Special)
    }

    /// The name used in diagnostics and when printing.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Special(special) => special.name(),
            Self::Variable(name) => name,
        }
    }

    /// Declared arity; user variables are never functions.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Special(special) => special.arity(),
            Self::Variable(_) => 0,
        }
    }
}
