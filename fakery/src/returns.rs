//! The [`returns`](self) module contains the [`Return`] type a faked method
//! uses to read the values scripted for the current call.

use std::any::{type_name, Any};

use crate::{FromValue, ScriptedError, Value, ValueError};

/// Values that were scripted for a single call of a faked method.
///
/// Every getter takes the index of the value and a default that is returned
/// if nothing usable was scripted at that index. If no behavior was bound for
/// the method, the [`Return`] is empty and every getter returns its default.
///
/// Reading a value with a type that does not match the scripted value is a
/// mistake in the test setup and panics.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Return {
    values: Vec<Value>,
}

macro_rules! impl_getter {
    ($( $name:ident: $type:ty ),+ $(,)?) => {
        $(
            #[doc = concat!("Get the `", stringify!($type), "` at `index`, or `default` if it is missing or nil.")]
            #[must_use]
            pub fn $name(&self, index: usize, default: $type) -> $type {
                self.get(index, default)
            }
        )+
    };
}

impl Return {
    /// Create a new [`Return`] instance from the passed `values`.
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get all scripted values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of scripted values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was scripted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the raw value at `index`, or `default` if `index` is out of range.
    ///
    /// An explicitly scripted [`Value::Nil`] is returned as is.
    #[must_use]
    pub fn at(&self, index: usize, default: Value) -> Value {
        self.values.get(index).cloned().unwrap_or(default)
    }

    /// Get the value at `index` as `T`, or `default` if it is missing or nil.
    ///
    /// # Errors
    /// Returns [`ValueError::KindMismatch`] if the scripted value is not of
    /// the kind of `T`.
    pub fn try_get<T: FromValue>(&self, index: usize, default: T) -> Result<T, ValueError> {
        let Some(value) = self.scripted(index) else {
            return Ok(default);
        };

        T::from_value(value).ok_or_else(|| ValueError::KindMismatch {
            index,
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Get the value at `index` as `T`, or `default` if it is missing or nil.
    ///
    /// # Panics
    /// Panics if the scripted value is not of the kind of `T`.
    #[must_use]
    pub fn get<T: FromValue>(&self, index: usize, default: T) -> T {
        self.try_get(index, default).unwrap_or_else(|err| fatal(&err))
    }

    /// Get the string at `index`, or `default` if it is missing or nil.
    #[must_use]
    pub fn string<S: Into<String>>(&self, index: usize, default: S) -> String {
        self.get(index, default.into())
    }

    impl_getter!(
        bool: bool,
        char: char,
        i8: i8,
        i16: i16,
        i32: i32,
        i64: i64,
        isize: isize,
        u8: u8,
        u16: u16,
        u32: u32,
        u64: u64,
        usize: usize,
        f32: f32,
        f64: f64,
    );

    /// Get the error at `index`.
    ///
    /// Returns `default` if `index` is out of range and `None` if nil was
    /// scripted. A scripted string is turned into a [`ScriptedError`] with the
    /// string as message.
    ///
    /// # Errors
    /// Returns [`ValueError::KindMismatch`] if the scripted value is neither
    /// an error nor a string.
    pub fn try_error(
        &self,
        index: usize,
        default: Option<ScriptedError>,
    ) -> Result<Option<ScriptedError>, ValueError> {
        match self.values.get(index) {
            None => Ok(default),
            Some(Value::Nil) => Ok(None),
            Some(Value::Str(message)) => Ok(Some(ScriptedError::new(message.as_str()))),
            Some(Value::Error(err)) => Ok(Some(err.clone())),
            Some(value) => Err(ValueError::KindMismatch {
                index,
                expected: "error",
                found: value.kind(),
            }),
        }
    }

    /// Same as [`Return::try_error`] but panics on a kind mismatch.
    ///
    /// # Panics
    /// Panics if the scripted value is neither an error nor a string.
    #[must_use]
    pub fn error(&self, index: usize, default: Option<ScriptedError>) -> Option<ScriptedError> {
        self.try_error(index, default)
            .unwrap_or_else(|err| fatal(&err))
    }

    /// Get the custom value (see [`Value::custom`]) at `index`, or `default`
    /// if it is missing or nil.
    ///
    /// # Panics
    /// Panics if the scripted value is not of type `T`.
    #[must_use]
    pub fn custom<T: Any + Clone>(&self, index: usize, default: T) -> T {
        let Some(value) = self.scripted(index) else {
            return default;
        };

        match value.downcast_ref::<T>() {
            Some(x) => x.clone(),
            None => fatal(&ValueError::KindMismatch {
                index,
                expected: type_name::<T>(),
                found: value.kind(),
            }),
        }
    }

    fn scripted(&self, index: usize) -> Option<&Value> {
        self.values.get(index).filter(|value| !value.is_nil())
    }
}

impl From<Vec<Value>> for Return {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

fn fatal(err: &ValueError) -> ! {
    panic!("{err}");
}
