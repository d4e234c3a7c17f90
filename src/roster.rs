//! The three people the demo binary greets.

use crate::human::{Human, Professor, Student, Teacher};

pub fn sample_professor() -> Professor {
    Professor::new(
        Teacher::new("Профессор"),
        ["Достижение 1", "Достижение 2"],
    )
}

/// Student, teacher and professor, in greeting order.
pub fn sample_roster() -> Vec<Box<dyn Human>> {
    vec![
        Box::new(Student::new("Студент")),
        Box::new(Teacher::new("Преподаватель")),
        Box::new(sample_professor()),
    ]
}
