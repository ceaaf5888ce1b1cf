use crate::associate::{find_distinct_disciplines, shared_disciplines};
use crate::checks;
use crate::model::*;
use crate::stats;
use std::io;

fn labels(disciplines: &[Discipline]) -> String {
    disciplines
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_details(r: &Roster) {
    let mut students = r.students().iter().collect::<Vec<_>>();
    students.sort_by_key(|s| s.name().to_owned());
    for s in students {
        let professors = r.professors_of(s.id());
        if professors.is_empty() {
            continue;
        }
        println!("{}:", s.name());
        for p in professors.into_iter().filter_map(|p| r.professor(p)) {
            print!("  - {}", p.name());
            if let Some(role) = p.job_role() {
                print!(" ({role})");
            }
            println!(" [{}]", labels(&shared_disciplines(s, p)));
        }
        println!();
    }
    let mut professors = r.professors().iter().collect::<Vec<_>>();
    professors.sort_by_key(|p| p.name().to_owned());
    for p in professors {
        let mut students = r
            .students_of(p.id())
            .into_iter()
            .filter_map(|s| r.student(s))
            .collect::<Vec<_>>();
        if students.is_empty() {
            continue;
        }
        students.sort_by_key(|s| s.name().to_owned());
        println!("{}:", p.name());
        for s in students {
            println!("  - {} [{}]", s.name(), labels(&shared_disciplines(s, p)));
        }
        println!();
    }
}

pub fn display_stats(r: &Roster) {
    let disciplines = find_distinct_disciplines(r.students(), r.professors());
    println!(
        "Students/professors/disciplines: {}/{}/{}",
        r.students().len(),
        r.professors().len(),
        disciplines.len()
    );
    println!("Associations: {}", r.association_count());
    let shares = stats::share_of_associations(r);
    if !shares.is_empty() {
        println!("Associations per discipline (a pair may share several disciplines):");
        for (d, n) in stats::links_per_discipline(r) {
            println!("  - {}: {} ({:.2}% of associations)", d, n, shares[&d]);
        }
    }
    let unlinked = stats::unlinked_disciplines(r);
    if !unlinked.is_empty() {
        println!("Disciplines without associations: {}", labels(&unlinked));
    }
    println!("Professors per role:");
    for (role, n) in stats::professors_per_role(r) {
        println!("  - {role}: {n}");
    }
}

pub fn display_unmatched(r: &Roster) {
    let (students, professors) = checks::unmatched(r);
    let mut names = students
        .into_iter()
        .filter_map(|s| r.student(s))
        .map(|s| s.name())
        .chain(
            professors
                .into_iter()
                .filter_map(|p| r.professor(p))
                .map(|p| p.name()),
        )
        .collect::<Vec<_>>();
    names.sort();
    if !names.is_empty() {
        println!("Members without associations:");
        for name in names {
            println!("  - {name}");
        }
    }
}

/// Write the student side of the associations as CSV.
pub fn write_csv<W: io::Write>(r: &Roster, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["student_id", "student", "professor_id", "professor", "disciplines"])?;
    for s in r.students() {
        for p in r.professors_of(s.id()).into_iter().filter_map(|p| r.professor(p)) {
            let disciplines = shared_disciplines(s, p)
                .iter()
                .map(|d| d.label())
                .collect::<Vec<_>>()
                .join(";");
            wtr.write_record([
                s.id().0.to_string(),
                s.name().to_owned(),
                p.id().0.to_string(),
                p.name().to_owned(),
                disciplines,
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
