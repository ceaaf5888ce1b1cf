use crate::error::Error;
use crate::model::*;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Every discipline appearing as a major, a minor, or a professor
/// discipline.
pub fn find_distinct_disciplines(
    students: &[Student],
    professors: &[Professor],
) -> BTreeSet<Discipline> {
    students
        .iter()
        .flat_map(|s| s.majors().iter().chain(s.minors()))
        .chain(professors.iter().flat_map(|p| p.disciplines()))
        .copied()
        .collect()
}

/// Link every student to every professor sharing one of its disciplines,
/// on both sides. Existing associations are kept.
pub fn run_associations(roster: &mut Roster) -> Result<(), Error> {
    let disciplines = find_distinct_disciplines(roster.students(), roster.professors());
    debug!(count = disciplines.len(), "distinct disciplines found");
    for discipline in disciplines {
        let students = roster.filter_students(|s| s.studies(discipline));
        let professors = roster.filter_professors(|p| p.covers(discipline));
        trace!(
            %discipline,
            students = students.len(),
            professors = professors.len(),
            "matching members"
        );
        for &s in &students {
            roster.add_professor_associations(s, &professors)?;
        }
        for &p in &professors {
            roster.add_student_associations(p, &students)?;
        }
    }
    debug!(
        associations = roster.association_count(),
        "associations established"
    );
    Ok(())
}

/// Disciplines a student and a professor have in common.
pub fn shared_disciplines(student: &Student, professor: &Professor) -> Vec<Discipline> {
    let mut shared = professor
        .disciplines()
        .iter()
        .copied()
        .filter(|&d| student.studies(d))
        .collect::<Vec<_>>();
    shared.sort();
    shared.dedup();
    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_professors, sample_students};

    fn sample_roster() -> Roster {
        let mut ids = IdGenerator::default();
        let students = sample_students(&mut ids).unwrap();
        let professors = sample_professors(&mut ids).unwrap();
        Roster::new(students, professors)
    }

    fn student_id(r: &Roster, name: &str) -> MemberId {
        r.students().iter().find(|s| s.name() == name).unwrap().id()
    }

    fn professor_id(r: &Roster, name: &str) -> MemberId {
        r.professors()
            .iter()
            .find(|p| p.name() == name)
            .unwrap()
            .id()
    }

    fn ids(r: &Roster, names: &[&str]) -> Vec<MemberId> {
        let mut ids = names
            .iter()
            .map(|n| professor_id(r, n))
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[test]
    fn distinct_disciplines_of_sample() {
        let r = sample_roster();
        let disciplines = find_distinct_disciplines(r.students(), r.professors());
        assert_eq!(
            disciplines,
            BTreeSet::from([
                Discipline::ComputerScience,
                Discipline::ElectricalEngineering,
                Discipline::BusinessAdministration,
                Discipline::Mathematics,
                Discipline::Physics,
            ])
        );
        assert!(!disciplines.contains(&Discipline::Nursing));
    }

    #[test]
    fn distinct_disciplines_of_empty_rosters() {
        assert!(find_distinct_disciplines(&[], &[]).is_empty());
    }

    #[test]
    fn sample_associations() {
        let mut r = sample_roster();
        run_associations(&mut r).unwrap();
        let beth = student_id(&r, "Beth Smith");
        let ben = student_id(&r, "Ben Jones");
        let sarah = student_id(&r, "Sarah Simpson");
        assert_eq!(
            r.professors_of(beth),
            ids(&r, &["Shelly Robertson", "Randy Gibbons", "Tom Reynolds"])
        );
        assert_eq!(
            r.professors_of(ben),
            ids(&r, &["Leo Miller", "Randy Gibbons", "Tom Reynolds"])
        );
        assert_eq!(r.professors_of(sarah), ids(&r, &["Shannon Meadows"]));

        // Every link is recorded on both sides.
        for s in r.students() {
            for p in r.professors_of(s.id()) {
                assert!(r.students_of(p).contains(&s.id()));
            }
        }
        for p in r.professors() {
            for s in r.students_of(p.id()) {
                assert!(r.is_associated(s, p.id()));
            }
        }
        assert_eq!(
            r.students_of(professor_id(&r, "Tom Reynolds")),
            vec![beth, ben]
        );
        assert_eq!(r.association_count(), 7);
    }

    #[test]
    fn running_twice_is_idempotent() {
        let mut r = sample_roster();
        run_associations(&mut r).unwrap();
        let first = r
            .students()
            .iter()
            .map(|s| r.student_snapshot(s.id()).unwrap())
            .collect::<Vec<_>>();
        run_associations(&mut r).unwrap();
        let second = r
            .students()
            .iter()
            .map(|s| r.student_snapshot(s.id()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshots_differ_before_and_after_associations() {
        let mut r = sample_roster();
        let beth = student_id(&r, "Beth Smith");
        let before = r.student_snapshot(beth).unwrap();
        run_associations(&mut r).unwrap();
        let after = r.student_snapshot(beth).unwrap();
        assert_ne!(before, after);
        assert_eq!(before.student, after.student);
    }

    #[test]
    fn members_without_disciplines_get_nothing() {
        let students = vec![
            Student::new("Idle", MemberId(1), Some(vec![]), None).unwrap(),
            Student::new("Nurse", MemberId(2), Some(vec![Discipline::Nursing]), None).unwrap(),
        ];
        let professors = vec![
            Professor::new("Empty", MemberId(3), Some(vec![]), None).unwrap(),
            Professor::new("Chemist", MemberId(4), Some(vec![Discipline::Chemistry]), None)
                .unwrap(),
        ];
        let mut r = Roster::new(students, professors);
        assert_eq!(
            find_distinct_disciplines(r.students(), r.professors()),
            BTreeSet::from([Discipline::Nursing, Discipline::Chemistry])
        );
        run_associations(&mut r).unwrap();
        assert_eq!(r.association_count(), 0);
        assert!(r.students_of(MemberId(3)).is_empty());
        assert!(r.students_of(MemberId(4)).is_empty());
    }

    #[test]
    fn shared_disciplines_are_sorted_and_unique() {
        let s = Student::new(
            "Ben",
            MemberId(1),
            Some(vec![Discipline::Physics]),
            Some(vec![Discipline::ComputerScience, Discipline::Physics]),
        )
        .unwrap();
        let p = Professor::new(
            "Randy",
            MemberId(2),
            Some(vec![
                Discipline::Physics,
                Discipline::ComputerScience,
                Discipline::Physics,
            ]),
            None,
        )
        .unwrap();
        assert_eq!(
            shared_disciplines(&s, &p),
            vec![Discipline::ComputerScience, Discipline::Physics]
        );
    }
}
