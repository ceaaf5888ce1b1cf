use serde::Deserialize;
use std::fmt;

/// Area of study or teaching.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    ComputerScience,
    ElectricalEngineering,
    MechanicalEngineering,
    Biology,
    Psychology,
    BusinessAdministration,
    English,
    Mathematics,
    History,
    Nursing,
    Chemistry,
    Physics,
}

impl Discipline {
    pub const ALL: [Discipline; 12] = [
        Discipline::ComputerScience,
        Discipline::ElectricalEngineering,
        Discipline::MechanicalEngineering,
        Discipline::Biology,
        Discipline::Psychology,
        Discipline::BusinessAdministration,
        Discipline::English,
        Discipline::Mathematics,
        Discipline::History,
        Discipline::Nursing,
        Discipline::Chemistry,
        Discipline::Physics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Discipline::ComputerScience => "Computer Science",
            Discipline::ElectricalEngineering => "Electrical Engineering",
            Discipline::MechanicalEngineering => "Mechanical Engineering",
            Discipline::Biology => "Biology",
            Discipline::Psychology => "Psychology",
            Discipline::BusinessAdministration => "Business Administration",
            Discipline::English => "English",
            Discipline::Mathematics => "Mathematics",
            Discipline::History => "History",
            Discipline::Nursing => "Nursing",
            Discipline::Chemistry => "Chemistry",
            Discipline::Physics => "Physics",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank of a professor.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum ProfessorJobRole {
    AssistantProfessor,
    AssociateProfessor,
    Professor,
}

impl ProfessorJobRole {
    pub const ALL: [ProfessorJobRole; 3] = [
        ProfessorJobRole::AssistantProfessor,
        ProfessorJobRole::AssociateProfessor,
        ProfessorJobRole::Professor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfessorJobRole::AssistantProfessor => "Assistant Professor",
            ProfessorJobRole::AssociateProfessor => "Associate Professor",
            ProfessorJobRole::Professor => "Professor",
        }
    }
}

impl fmt::Display for ProfessorJobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
