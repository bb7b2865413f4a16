use std::fmt;

/// A named integer record.
///
/// Plain mutable data with no internal synchronization. A storage layer
/// embedding records that are shared between threads must provide its own
/// locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    value: i32,
}

impl Record {
    /// Create a record with the given name. The value starts at zero.
    ///
    /// The name is taken as-is: empty strings are accepted.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            value: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name unconditionally.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replace the value unconditionally. The full `i32` range is accepted.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} value: {}", self.name, self.value)
    }
}
