use super::{Discipline, Member, MemberId, UniversityMember};
use crate::error::Error;
use std::fmt;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Student {
    member: Member,
    majors: Vec<Discipline>,
    minors: Vec<Discipline>,
}

impl Student {
    /// Build a student. Majors are mandatory, while missing minors are
    /// recorded as an empty list.
    pub fn new(
        name: impl Into<String>,
        id: MemberId,
        majors: Option<Vec<Discipline>>,
        minors: Option<Vec<Discipline>>,
    ) -> Result<Self, Error> {
        let member = Member::new(name, id)?;
        let majors = majors.ok_or_else(|| {
            Error::invalid(format!("cannot create student {member} without a major"))
        })?;
        Ok(Self {
            member,
            majors,
            minors: minors.unwrap_or_default(),
        })
    }

    pub fn majors(&self) -> &[Discipline] {
        &self.majors
    }

    pub fn minors(&self) -> &[Discipline] {
        &self.minors
    }

    pub fn studies(&self, discipline: Discipline) -> bool {
        self.majors.contains(&discipline) || self.minors.contains(&discipline)
    }
}

impl UniversityMember for Student {
    fn name(&self) -> &str {
        self.member.name()
    }

    fn id(&self) -> MemberId {
        self.member.id()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.member, f)
    }
}
