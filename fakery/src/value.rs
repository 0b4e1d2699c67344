//! The [`value`](self) module contains the [`Value`] type that is used to
//! script the outputs of a faked method and to record the arguments it was
//! called with.

use std::any::{type_name, Any};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use thiserror::Error;

/// Error value that can be scripted as output of a faked method.
///
/// Plain strings that are read back with [`Return::error`](crate::Return::error)
/// are converted into a [`ScriptedError`] carrying the string as message.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{message}")]
pub struct ScriptedError {
    message: String,
}

impl ScriptedError {
    /// Create a new [`ScriptedError`] with the passed `message`.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message of the error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single scripted output or recorded argument.
///
/// Every variant except [`Value::Nil`] and [`Value::Any`] carries a value of a
/// specific kind. Typed extraction checks the kind and fails loudly if it does
/// not match.
#[derive(Clone, Debug)]
pub enum Value {
    /// Explicitly absent value.
    Nil,

    /// Wildcard marker: matches any argument in an argument matcher.
    Any,

    Str(String),
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Error(ScriptedError),

    /// Any other type, see [`Value::custom`].
    Custom(Custom),
}

impl Value {
    /// Wrap a value of a user defined type.
    ///
    /// Custom values compare equal if they have the same type and the
    /// [`PartialEq`] implementation of that type says so.
    pub fn custom<T>(value: T) -> Self
    where
        T: Any + Debug + PartialEq,
    {
        Self::Custom(Custom(Rc::new(value)))
    }

    /// Name of the kind of value that is stored.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Any => "any",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Error(_) => "error",
            Self::Custom(x) => x.type_name(),
        }
    }

    /// Returns `true` if this is [`Value::Nil`].
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if this is the [`Value::Any`] wildcard.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns a reference to the wrapped custom value if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(x) => x.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) | (Self::Any, Self::Any) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::Isize(a), Self::Isize(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::Usize(a), Self::Usize(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a == b,
            (_, _) => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Nil => write!(f, "<nil>"),
            Self::Any => write!(f, "<any>"),
            Self::Str(x) => write!(f, "{x}"),
            Self::Bool(x) => write!(f, "{x}"),
            Self::Char(x) => write!(f, "{x}"),
            Self::I8(x) => write!(f, "{x}"),
            Self::I16(x) => write!(f, "{x}"),
            Self::I32(x) => write!(f, "{x}"),
            Self::I64(x) => write!(f, "{x}"),
            Self::Isize(x) => write!(f, "{x}"),
            Self::U8(x) => write!(f, "{x}"),
            Self::U16(x) => write!(f, "{x}"),
            Self::U32(x) => write!(f, "{x}"),
            Self::U64(x) => write!(f, "{x}"),
            Self::Usize(x) => write!(f, "{x}"),
            Self::F32(x) => write!(f, "{x}"),
            Self::F64(x) => write!(f, "{x}"),
            Self::Error(x) => write!(f, "{x}"),
            Self::Custom(x) => write!(f, "{x:?}"),
        }
    }
}

/* Custom */

/// Type erased value of a user defined type, see [`Value::custom`].
#[derive(Clone)]
pub struct Custom(Rc<dyn Opaque>);

impl Custom {
    fn type_name(&self) -> &'static str {
        <dyn Opaque>::type_name(&*self.0)
    }

    fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Opaque>::as_any(&*self.0).downcast_ref()
    }
}

impl PartialEq for Custom {
    fn eq(&self, other: &Self) -> bool {
        <dyn Opaque>::eq_dyn(&*self.0, &*other.0)
    }
}

impl Debug for Custom {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        <dyn Opaque>::fmt_dyn(&*self.0, f)
    }
}

trait Opaque {
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn Opaque) -> bool;
    fn fmt_dyn(&self, f: &mut Formatter<'_>) -> FmtResult;
    fn type_name(&self) -> &'static str;
}

impl<T> Opaque for T
where
    T: Any + Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Opaque) -> bool {
        <dyn Opaque>::as_any(other)
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn fmt_dyn(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(self, f)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/* From */

macro_rules! impl_from {
    ($( $variant:ident($type:ty) ),+ $(,)?) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from!(
    Str(String),
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Error(ScriptedError),
);

macro_rules! impl_from_ref {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl From<&$type> for Value {
                fn from(value: &$type) -> Self {
                    Self::from(*value)
                }
            }
        )+
    };
}

impl_from_ref!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&ScriptedError> for Value {
    fn from(value: &ScriptedError) -> Self {
        Self::Error(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/* FromValue */

/// Types that can be extracted from a [`Value`] by the typed getters of
/// [`Return`](crate::Return).
pub trait FromValue: Sized {
    /// Name of the kind this type is extracted from.
    const KIND: &'static str;

    /// Returns `Some` if the passed `value` is of the kind of `Self`.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($( $variant:ident($type:ty) => $kind:literal ),+ $(,)?) => {
        $(
            impl FromValue for $type {
                const KIND: &'static str = $kind;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(x) => Some(x.clone()),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_from_value!(
    Str(String) => "string",
    Bool(bool) => "bool",
    Char(char) => "char",
    I8(i8) => "i8",
    I16(i16) => "i16",
    I32(i32) => "i32",
    I64(i64) => "i64",
    Isize(isize) => "isize",
    U8(u8) => "u8",
    U16(u16) => "u16",
    U32(u32) => "u32",
    U64(u64) => "u64",
    Usize(usize) => "usize",
    F32(f32) => "f32",
    F64(f64) => "f64",
    Error(ScriptedError) => "error",
);

/* IntoValues */

/// Conversion into an ordered list of values.
///
/// Implemented for single values, for `()` (no values), for `Vec<Value>` and
/// for tuples of up to ten elements that are convertible into [`Value`].
pub trait IntoValues {
    /// Convert `self` into a list of values.
    fn into_values(self) -> Vec<Value>;
}

impl IntoValues for () {
    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoValues for Vec<Value> {
    fn into_values(self) -> Vec<Value> {
        self
    }
}

impl<T> IntoValues for Option<T>
where
    T: Into<Value>,
{
    fn into_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

macro_rules! impl_into_values_single {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl IntoValues for $type {
                fn into_values(self) -> Vec<Value> {
                    vec![self.into()]
                }
            }
        )+
    };
}

impl_into_values_single!(
    Value,
    &str,
    &String,
    String,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    ScriptedError,
);

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

macro_rules! impl_into_values_tuple {
    ($( $name:ident: $type:ident ),+) => {
        impl<$( $type ),+> IntoValues for ($( $type, )+)
        where
            $(
                $type: Into<Value>,
            )+
        {
            fn into_values(self) -> Vec<Value> {
                let ($( $name, )+) = self;

                vec![ $( $name.into() ),+ ]
            }
        }
    };
}

impl_into_values_tuple!(a0: T0);
impl_into_values_tuple!(a0: T0, a1: T1);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8);
impl_into_values_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8, a9: T9);
