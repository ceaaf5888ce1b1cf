use crate::associate::shared_disciplines;
use crate::model::*;
use std::collections::BTreeMap;

/// Number of associated student/professor pairs sharing each discipline.
/// A pair sharing several disciplines is counted once for each of them.
pub fn links_per_discipline(r: &Roster) -> BTreeMap<Discipline, usize> {
    let mut links = BTreeMap::new();
    for s in r.students() {
        for p in r.professors_of(s.id()) {
            if let Some(professor) = r.professor(p) {
                for d in shared_disciplines(s, professor) {
                    *links.entry(d).or_insert(0) += 1;
                }
            }
        }
    }
    links
}

/// Share of all associations backed by each discipline, in percent.
pub fn share_of_associations(r: &Roster) -> BTreeMap<Discipline, f32> {
    let total = r.association_count();
    if total == 0 {
        return BTreeMap::new();
    }
    links_per_discipline(r)
        .into_iter()
        .map(|(d, n)| (d, 100.0 * n as f32 / total as f32))
        .collect()
}

/// Disciplines backing no association at all.
pub fn unlinked_disciplines(r: &Roster) -> Vec<Discipline> {
    let links = links_per_discipline(r);
    Discipline::ALL
        .into_iter()
        .filter(|d| !links.contains_key(d))
        .collect()
}

/// Number of professors holding each job role, unranked professors excluded.
pub fn professors_per_role(r: &Roster) -> Vec<(ProfessorJobRole, usize)> {
    ProfessorJobRole::ALL
        .into_iter()
        .map(|role| {
            let n = r
                .professors()
                .iter()
                .filter(|p| p.job_role() == Some(role))
                .count();
            (role, n)
        })
        .collect()
}
