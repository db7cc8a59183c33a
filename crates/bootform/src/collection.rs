//! Ordered field sequence with a restartable cursor.

use crate::field::Field;

/// Fields in insertion order.
///
/// The cursor (`rewind`, `valid`, `current`, `advance`) can be walked any
/// number of times. [`FieldCollection::iter`] does not touch it, which is
/// how the renderers walk the sequence.
#[derive(Debug, Clone, Default)]
pub struct FieldCollection {
    fields: Vec<Field>,
    position: usize,
}

impl FieldCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn append(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Moves the cursor back to the first field.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns whether the cursor points at a field.
    pub fn valid(&self) -> bool {
        self.position < self.fields.len()
    }

    /// Returns the field under the cursor.
    pub fn current(&self) -> Option<&Field> {
        self.fields.get(self.position)
    }

    /// Moves the cursor to the next field.
    pub fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }

    /// Returns the cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the first field with the given name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Iterates over the fields without moving the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Field> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            position: 0,
        }
    }
}
