//! Value cells used to combine pipeline stages

/// Holds the most recently pushed value, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Latest<T> {
    value: Option<T>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held value
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Take the held value, leaving the cell empty
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Copy> Latest<T> {
    pub fn value(&self) -> Option<T> {
        self.value
    }
}

/// Passes a value through only when it differs from the last one passed.
///
/// Starts with no previous value, so the first update always passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Distinct<T> {
    last: Option<T>,
}

impl<T> Default for Distinct<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Copy> Distinct<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: T) -> Option<T> {
        if self.last == Some(value) {
            None
        } else {
            self.last = Some(value);
            Some(value)
        }
    }

    pub fn last(&self) -> Option<T> {
        self.last
    }
}
