//! # builtins
//!
//! The registry of names the evaluator understands, built on
//! [`indexmap::IndexMap`] so entries keep their registration order.
//!
//! A name is either a unary [`Builtin::Function`] (called as `name(x)`) or a
//! [`Builtin::Constant`] (written bare). Trigonometric functions interpret
//! their argument (and inverse functions their result) according to the
//! registry's [`AngleMode`].
//!
//! ## Example
//! ```rust
//! # use calcpad_expr::{AngleMode, Builtin, Builtins};
//! let mut builtins = Builtins::new();
//! assert!(matches!(builtins.get("pi"), Some(Builtin::Constant(_))));
//! assert_eq!(builtins.call("sqrt", 81.0), Some(9.0));
//!
//! builtins.define_constant("answer", 42.0);
//! assert_eq!(builtins.constant("answer"), Some(42.0));
//!
//! builtins.set_angle_mode(AngleMode::Radians);
//! assert_eq!(builtins.call("sin", 0.0), Some(0.0));
//! ```

use indexmap::IndexMap;
use smartstring::alias::String;
use std::f64::consts;
use std::fmt;
use std::str::FromStr;

/// How trigonometric functions interpret angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Angles are in degrees, `sin(30) = 0.5`.
    #[default]
    Degrees,
    /// Angles are in radians.
    Radians,
}

impl AngleMode {
    /// String representations of each mode, in declaration order.
    pub const STRS: &[&str] = &["deg", "rad"];

    /// Converts an angle expressed in this mode into radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }

    /// Converts an angle in radians into this mode.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => radians.to_degrees(),
            AngleMode::Radians => radians,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AngleMode::STRS[*self as usize])
    }
}

/// Error returned when parsing an [`AngleMode`] from a string fails.
#[derive(Debug, Clone)]
pub struct ParseAngleModeError(String);

impl fmt::Display for ParseAngleModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid angle mode: {}", self.0)
    }
}
impl std::error::Error for ParseAngleModeError {}

/// Accepts `deg`/`degrees` and `rad`/`radians`.
impl FromStr for AngleMode {
    type Err = ParseAngleModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radians" => Ok(AngleMode::Radians),
            other => Err(ParseAngleModeError(String::from(other))),
        }
    }
}

/// A unary function. The [`AngleMode`] is passed so trigonometric entries
/// can convert; other functions ignore it.
pub type UnaryFn = fn(f64, AngleMode) -> f64;

/// A registry entry.
#[derive(Clone, Copy)]
pub enum Builtin {
    /// Called as `name(x)`.
    Function(UnaryFn),
    /// Written bare as `name`.
    Constant(f64),
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Builtin::Function(_) => f.write_str("Function(..)"),
            Builtin::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
        }
    }
}

/// Named functions and constants available to expressions.
#[derive(Debug, Clone)]
pub struct Builtins {
    tab: IndexMap<String, Builtin>,
    angle_mode: AngleMode,
}

impl Builtins {
    /// Creates a registry with the standard calculator functions and
    /// constants, in degree mode.
    ///
    /// Functions: `sin cos tan asin acos atan sqrt ln log abs exp`
    /// (`log` is base 10). Constants: `pi`, `e`.
    pub fn new() -> Self {
        Self::with_angle_mode(AngleMode::default())
    }

    /// Like [`Builtins::new`] with an explicit angle mode.
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        let mut builtins = Self::empty(angle_mode);
        builtins.define_function("sin", |x, m| m.to_radians(x).sin());
        builtins.define_function("cos", |x, m| m.to_radians(x).cos());
        builtins.define_function("tan", |x, m| m.to_radians(x).tan());
        builtins.define_function("asin", |x, m| m.from_radians(x.asin()));
        builtins.define_function("acos", |x, m| m.from_radians(x.acos()));
        builtins.define_function("atan", |x, m| m.from_radians(x.atan()));
        builtins.define_function("sqrt", |x, _| x.sqrt());
        builtins.define_function("ln", |x, _| x.ln());
        builtins.define_function("log", |x, _| x.log10());
        builtins.define_function("abs", |x, _| x.abs());
        builtins.define_function("exp", |x, _| x.exp());
        builtins.define_constant("pi", consts::PI);
        builtins.define_constant("e", consts::E);
        builtins
    }

    /// Creates a registry with no entries.
    pub fn empty(angle_mode: AngleMode) -> Self {
        Self {
            tab: IndexMap::new(),
            angle_mode,
        }
    }

    /// Returns the number of registered names.
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// The angle mode used by trigonometric functions.
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Switches the angle mode.
    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    /// Registers (or replaces) a unary function.
    pub fn define_function(&mut self, name: impl AsRef<str>, f: UnaryFn) {
        self.tab
            .insert(String::from(name.as_ref()), Builtin::Function(f));
    }

    /// Registers (or replaces) a constant.
    pub fn define_constant(&mut self, name: impl AsRef<str>, value: f64) {
        self.tab
            .insert(String::from(name.as_ref()), Builtin::Constant(value));
    }

    /// Looks up a name.
    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.tab.get(name).copied()
    }

    /// The value of a constant, or `None` if `name` is not a constant.
    pub fn constant(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Builtin::Constant(v) => Some(v),
            Builtin::Function(_) => None,
        }
    }

    /// Applies a function to `arg`, or `None` if `name` is not a function.
    pub fn call(&self, name: &str, arg: f64) -> Option<f64> {
        match self.get(name)? {
            Builtin::Function(f) => Some(f(arg, self.angle_mode)),
            Builtin::Constant(_) => None,
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tab.keys().map(|k| k.as_str())
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn defaults_register_functions_then_constants() {
        let b = Builtins::new();
        let names: Vec<&str> = b.names().collect();
        assert_eq!(
            names,
            [
                "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "ln", "log", "abs", "exp",
                "pi", "e"
            ]
        );
        assert_eq!(b.len(), 13);
    }

    #[test]
    fn trig_uses_degrees_by_default() {
        let b = Builtins::new();
        assert!(close(b.call("sin", 30.0).unwrap(), 0.5));
        assert!(close(b.call("cos", 60.0).unwrap(), 0.5));
        assert!(close(b.call("tan", 45.0).unwrap(), 1.0));
        assert!(close(b.call("asin", 1.0).unwrap(), 90.0));
    }

    #[test]
    fn trig_in_radians() {
        let b = Builtins::with_angle_mode(AngleMode::Radians);
        assert!(close(b.call("sin", consts::FRAC_PI_2).unwrap(), 1.0));
        assert!(close(b.call("atan", 1.0).unwrap(), consts::FRAC_PI_4));
    }

    #[test]
    fn logarithms() {
        let b = Builtins::new();
        assert!(close(b.call("ln", consts::E).unwrap(), 1.0));
        assert!(close(b.call("log", 1000.0).unwrap(), 3.0));
    }

    #[test]
    fn constant_is_not_callable_and_function_is_not_constant() {
        let b = Builtins::new();
        assert_eq!(b.call("pi", 1.0), None);
        assert_eq!(b.constant("sqrt"), None);
        assert_eq!(b.constant("nope"), None);
    }

    #[test]
    fn redefining_keeps_position() {
        let mut b = Builtins::new();
        b.define_constant("pi", 3.0);
        assert_eq!(b.constant("pi"), Some(3.0));
        assert_eq!(b.len(), 13);
    }

    #[test]
    fn angle_mode_parses_and_displays() {
        assert_eq!("deg".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
        assert_eq!("radians".parse::<AngleMode>().unwrap(), AngleMode::Radians);
        assert_eq!(AngleMode::Radians.to_string(), "rad");
        let err = "grad".parse::<AngleMode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid angle mode: grad");
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let b = Builtins::empty(AngleMode::Degrees);
        assert!(b.is_empty());
        assert!(b.get("sin").is_none());
    }
}
