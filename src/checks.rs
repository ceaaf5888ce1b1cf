use crate::model::*;
use eyre::bail;
use std::collections::HashSet;
use tracing::warn;

/// Ids used by more than one member. They are not rejected, but lookups
/// by id will only find the first member.
pub fn check_unique_ids(students: &[Student], professors: &[Professor]) -> Vec<MemberId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in students
        .iter()
        .map(|s| s.id())
        .chain(professors.iter().map(|p| p.id()))
    {
        if !seen.insert(id) {
            warn!(%id, "member id is used more than once");
            duplicates.push(id);
        }
    }
    duplicates
}

pub fn check_symmetry(r: &Roster) {
    for (s, p) in r.one_sided_from_students() {
        warn!(student = %s, professor = %p, "professor does not list associated student");
    }
    for (s, p) in r.one_sided_from_professors() {
        warn!(student = %s, professor = %p, "student does not list associated professor");
    }
}

/// Members without any association.
pub fn unmatched(r: &Roster) -> (Vec<MemberId>, Vec<MemberId>) {
    (
        r.filter_students(|s| r.professors_of(s.id()).is_empty()),
        r.filter_professors(|p| r.students_of(p.id()).is_empty()),
    )
}

pub fn ensure_associated(r: &Roster) -> eyre::Result<()> {
    let (students, professors) = unmatched(r);
    if !students.is_empty() || !professors.is_empty() {
        bail!(
            "{} students and {} professors have no association",
            students.len(),
            professors.len()
        );
    }
    Ok(())
}
