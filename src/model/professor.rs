use super::{Discipline, Member, MemberId, ProfessorJobRole, UniversityMember};
use crate::error::Error;
use std::fmt;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Professor {
    member: Member,
    disciplines: Vec<Discipline>,
    job_role: Option<ProfessorJobRole>,
}

impl Professor {
    pub fn new(
        name: impl Into<String>,
        id: MemberId,
        disciplines: Option<Vec<Discipline>>,
        job_role: Option<ProfessorJobRole>,
    ) -> Result<Self, Error> {
        let member = Member::new(name, id)?;
        let disciplines = disciplines.ok_or_else(|| {
            Error::invalid(format!(
                "cannot create professor {member} without teaching or research disciplines"
            ))
        })?;
        Ok(Self {
            member,
            disciplines,
            job_role,
        })
    }

    /// Disciplines taught and/or researched.
    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    pub fn job_role(&self) -> Option<ProfessorJobRole> {
        self.job_role
    }

    pub fn covers(&self, discipline: Discipline) -> bool {
        self.disciplines.contains(&discipline)
    }
}

impl UniversityMember for Professor {
    fn name(&self) -> &str {
        self.member.name()
    }

    fn id(&self) -> MemberId {
        self.member.id()
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.member, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let p = Professor::new(
            "Randy Gibbons",
            MemberId(7),
            Some(vec![Discipline::Physics, Discipline::ComputerScience]),
            Some(ProfessorJobRole::Professor),
        )
        .unwrap();
        assert_eq!(p.name(), "Randy Gibbons");
        assert_eq!(p.id(), MemberId(7));
        assert!(p.covers(Discipline::ComputerScience));
        assert!(!p.covers(Discipline::Biology));
        assert_eq!(p.job_role(), Some(ProfessorJobRole::Professor));
        let p = Professor::new("Guest", MemberId(8), Some(vec![]), None).unwrap();
        assert_eq!(p.job_role(), None);
        assert!(p.disciplines().is_empty());
    }

    #[test]
    fn disciplines_are_required() {
        assert!(matches!(
            Professor::new("Leo Miller", MemberId(1), None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Professor::new("", MemberId(1), Some(vec![]), None).is_err());
    }
}
