use crate::error::Error;
use crate::model::{Discipline, IdGenerator, Professor, ProfessorJobRole, Student};

use Discipline::*;

pub fn sample_students(ids: &mut IdGenerator) -> Result<Vec<Student>, Error> {
    Ok(vec![
        Student::new(
            "Beth Smith",
            ids.next_id()?,
            Some(vec![ComputerScience]),
            Some(vec![Mathematics]),
        )?,
        Student::new(
            "Ben Jones",
            ids.next_id()?,
            Some(vec![ElectricalEngineering]),
            Some(vec![Physics, Mathematics]),
        )?,
        Student::new(
            "Sarah Simpson",
            ids.next_id()?,
            Some(vec![BusinessAdministration]),
            None,
        )?,
    ])
}

pub fn sample_professors(ids: &mut IdGenerator) -> Result<Vec<Professor>, Error> {
    Ok(vec![
        Professor::new(
            "Tom Reynolds",
            ids.next_id()?,
            Some(vec![Mathematics]),
            Some(ProfessorJobRole::AssistantProfessor),
        )?,
        Professor::new(
            "Shelly Robertson",
            ids.next_id()?,
            Some(vec![ComputerScience]),
            Some(ProfessorJobRole::Professor),
        )?,
        Professor::new(
            "Leo Miller",
            ids.next_id()?,
            Some(vec![ElectricalEngineering]),
            Some(ProfessorJobRole::AssociateProfessor),
        )?,
        // Teaches physics, researches computer science.
        Professor::new(
            "Randy Gibbons",
            ids.next_id()?,
            Some(vec![Physics, ComputerScience]),
            Some(ProfessorJobRole::Professor),
        )?,
        Professor::new(
            "Shannon Meadows",
            ids.next_id()?,
            Some(vec![BusinessAdministration]),
            Some(ProfessorJobRole::Professor),
        )?,
    ])
}
