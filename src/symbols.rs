use crate::error::ResourceError;

pub const DEFAULT_CAPACITY: usize = 100;

/// Variables in first-assignment order.
///
/// The order is observable: it is the order in which the generated program
/// declares its variables.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(String, i32)>,
    capacity: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SymbolTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![],
            capacity,
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.find(name).map(|idx| self.entries[idx].1)
    }

    /// Updates `name` in place or appends it. Only appending can run into the
    /// capacity limit.
    pub fn set(&mut self, name: &str, value: i32) -> Result<(), ResourceError> {
        if let Some(idx) = self.find(name) {
            self.entries[idx].1 = value;
            return Ok(());
        }

        if self.entries.len() >= self.capacity {
            return Err(ResourceError::Capacity {
                limit: self.capacity,
            });
        }

        self.entries.push((name.to_string(), value));

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
