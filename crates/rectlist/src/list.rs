use rectlist_geom::Rectangle;

use crate::input::InputError;

/// Ordered collection of rectangles with unique names
#[derive(Debug, Clone, Default)]
pub struct RectangleList {
    rectangles: Vec<Rectangle>,
}

impl RectangleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a rectangle with exactly this name is already in the list
    pub fn contains_name(&self, name: &str) -> bool {
        self.rectangles.iter().any(|r| r.name() == name)
    }

    /// Check that `name` could be added.
    pub fn check_name(&self, name: &str) -> Result<(), InputError> {
        if self.contains_name(name) {
            return Err(InputError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Append a rectangle, rejecting a name that is already taken.
    pub fn push(&mut self, rectangle: Rectangle) -> Result<(), InputError> {
        self.check_name(rectangle.name())?;
        self.rectangles.push(rectangle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rectangles.iter()
    }
}

impl<'a> IntoIterator for &'a RectangleList {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
