use super::*;
use crate::error::Error;
use std::collections::BTreeSet;
use std::fmt;

/// Students and professors along with the associations between them.
///
/// Each side of an association is recorded independently: the student side
/// holds `(student, professor)` pairs and the professor side holds
/// `(professor, student)` pairs.
#[derive(Debug)]
pub struct Roster {
    students: Vec<Student>,
    professors: Vec<Professor>,
    professors_of: BTreeSet<(MemberId, MemberId)>,
    students_of: BTreeSet<(MemberId, MemberId)>,
}

#[allow(dead_code)]
impl Roster {
    pub fn new(students: Vec<Student>, professors: Vec<Professor>) -> Roster {
        Roster {
            students,
            professors,
            professors_of: BTreeSet::new(),
            students_of: BTreeSet::new(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn student(&self, id: MemberId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn professor(&self, id: MemberId) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id() == id)
    }

    pub fn filter_students<F>(&self, condition: F) -> Vec<MemberId>
    where
        F: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|&s| condition(s))
            .map(|s| s.id())
            .collect()
    }

    pub fn filter_professors<F>(&self, condition: F) -> Vec<MemberId>
    where
        F: Fn(&Professor) -> bool,
    {
        self.professors
            .iter()
            .filter(|&p| condition(p))
            .map(|p| p.id())
            .collect()
    }

    fn check_student(&self, id: MemberId) -> Result<(), Error> {
        match self.student(id) {
            Some(_) => Ok(()),
            None => Err(Error::invalid(format!("unknown student {id}"))),
        }
    }

    fn check_professor(&self, id: MemberId) -> Result<(), Error> {
        match self.professor(id) {
            Some(_) => Ok(()),
            None => Err(Error::invalid(format!("unknown professor {id}"))),
        }
    }

    /// Associate professors with a student. Professors already associated
    /// are left alone. Nothing is recorded if any id is unknown.
    pub fn add_professor_associations(
        &mut self,
        student: MemberId,
        professors: &[MemberId],
    ) -> Result<(), Error> {
        self.check_student(student)?;
        for &p in professors {
            self.check_professor(p)?;
        }
        self.professors_of
            .extend(professors.iter().map(|&p| (student, p)));
        Ok(())
    }

    /// Remove professors from a student's associations. Professors which
    /// are not associated are ignored.
    pub fn remove_professor_associations(
        &mut self,
        student: MemberId,
        professors: &[MemberId],
    ) -> Result<(), Error> {
        self.check_student(student)?;
        for &p in professors {
            self.check_professor(p)?;
        }
        for &p in professors {
            self.professors_of.remove(&(student, p));
        }
        Ok(())
    }

    pub fn add_student_associations(
        &mut self,
        professor: MemberId,
        students: &[MemberId],
    ) -> Result<(), Error> {
        self.check_professor(professor)?;
        for &s in students {
            self.check_student(s)?;
        }
        self.students_of
            .extend(students.iter().map(|&s| (professor, s)));
        Ok(())
    }

    pub fn remove_student_associations(
        &mut self,
        professor: MemberId,
        students: &[MemberId],
    ) -> Result<(), Error> {
        self.check_professor(professor)?;
        for &s in students {
            self.check_student(s)?;
        }
        for &s in students {
            self.students_of.remove(&(professor, s));
        }
        Ok(())
    }

    /// Remove the association between a student and a professor on both
    /// sides at once.
    pub fn dissociate(&mut self, student: MemberId, professor: MemberId) -> Result<(), Error> {
        self.check_student(student)?;
        self.check_professor(professor)?;
        self.professors_of.remove(&(student, professor));
        self.students_of.remove(&(professor, student));
        Ok(())
    }

    /// Professors associated with a student, by ascending id.
    pub fn professors_of(&self, student: MemberId) -> Vec<MemberId> {
        self.professors_of
            .range((student, MemberId(u32::MIN))..=(student, MemberId(u32::MAX)))
            .map(|&(_, p)| p)
            .collect()
    }

    /// Students associated with a professor, by ascending id.
    pub fn students_of(&self, professor: MemberId) -> Vec<MemberId> {
        self.students_of
            .range((professor, MemberId(u32::MIN))..=(professor, MemberId(u32::MAX)))
            .map(|&(_, s)| s)
            .collect()
    }

    pub fn is_associated(&self, student: MemberId, professor: MemberId) -> bool {
        self.professors_of.contains(&(student, professor))
    }

    /// Pairs recorded on the student side only.
    pub fn one_sided_from_students(&self) -> Vec<(MemberId, MemberId)> {
        self.professors_of
            .iter()
            .filter(|&&(s, p)| !self.students_of.contains(&(p, s)))
            .cloned()
            .collect()
    }

    /// Pairs recorded on the professor side only, as `(student, professor)`.
    pub fn one_sided_from_professors(&self) -> Vec<(MemberId, MemberId)> {
        self.students_of
            .iter()
            .filter(|&&(p, s)| !self.professors_of.contains(&(s, p)))
            .map(|&(p, s)| (s, p))
            .collect()
    }

    /// Number of associations recorded on the student side.
    pub fn association_count(&self) -> usize {
        self.professors_of.len()
    }

    pub fn student_snapshot(&self, id: MemberId) -> Option<StudentSnapshot> {
        self.student(id).map(|student| StudentSnapshot {
            student: student.clone(),
            professors: self.professors_of(id).into_iter().collect(),
        })
    }

    pub fn professor_snapshot(&self, id: MemberId) -> Option<ProfessorSnapshot> {
        self.professor(id).map(|professor| ProfessorSnapshot {
            professor: professor.clone(),
            students: self.students_of(id).into_iter().collect(),
        })
    }
}

/// A student together with its associations at the time the snapshot was
/// taken. Two snapshots of the same student differ once associations change.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StudentSnapshot {
    pub student: Student,
    pub professors: BTreeSet<MemberId>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ProfessorSnapshot {
    pub professor: Professor,
    pub students: BTreeSet<MemberId>,
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &BTreeSet<MemberId>) -> fmt::Result {
    let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    write!(f, "[{}]", ids.join(", "))
}

impl fmt::Display for StudentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} majors={:?} minors={:?} professors=",
            self.student,
            self.student.majors(),
            self.student.minors()
        )?;
        write_ids(f, &self.professors)
    }
}

impl fmt::Display for ProfessorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Professor {} disciplines={:?} role={:?} students=",
            self.professor,
            self.professor.disciplines(),
            self.professor.job_role()
        )?;
        write_ids(f, &self.students)
    }
}
