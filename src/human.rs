//! The `Human` capability and the people who have it.

/// Anything that can tell us its name.
///
/// There is no base struct here: a type is a `Human` because it implements
/// this trait, nothing more. The trait is object safe so it can be used behind
/// `&dyn Human` and `Box<dyn Human>`.
pub trait Human {
    fn name(&self) -> &str;
}

impl<T: Human + ?Sized> Human for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Human + ?Sized> Human for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

// =============================================================================
// Plain records: same shape, no relationship between them
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Human for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Human for Student {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Human for Teacher {
    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Composition: a Professor has a Teacher, it is not a subclass of one
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    teacher: Teacher,
    achievements: Vec<String>,
}

impl Professor {
    pub fn new<I, S>(teacher: Teacher, achievements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teacher,
            achievements: achievements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// Scientific achievements in the order they were given.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }
}

impl Human for Professor {
    fn name(&self) -> &str {
        self.teacher.name()
    }
}
