use crate::model::*;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RosterFile {
    students: Vec<StudentEntry>,
    professors: Vec<ProfessorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StudentEntry {
    name: String,
    id: Option<MemberId>,
    majors: Option<Vec<Discipline>>,
    minors: Option<Vec<Discipline>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfessorEntry {
    name: String,
    id: Option<MemberId>,
    disciplines: Option<Vec<Discipline>>,
    job_role: Option<ProfessorJobRole>,
}

pub fn load_roster(path: &Path, ids: &mut IdGenerator) -> Result<(Vec<Student>, Vec<Professor>)> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot load roster file {}", path.display()))?;
    parse_roster(&content, ids).wrap_err_with(|| format!("invalid roster file {}", path.display()))
}

/// Build students and professors from a TOML roster. Explicit ids are
/// reserved first so that generated ids never collide with them.
pub fn parse_roster(
    content: &str,
    ids: &mut IdGenerator,
) -> Result<(Vec<Student>, Vec<Professor>)> {
    let file: RosterFile = toml::from_str(content).wrap_err("cannot parse roster")?;
    for &id in file
        .students
        .iter()
        .filter_map(|s| s.id.as_ref())
        .chain(file.professors.iter().filter_map(|p| p.id.as_ref()))
    {
        ids.skip_past(id);
    }
    let students = file
        .students
        .into_iter()
        .map(|s| {
            let id = match s.id {
                Some(id) => id,
                None => ids.next_id().wrap_err("cannot number student")?,
            };
            trace!(name = %s.name, %id, "loading student");
            Student::new(s.name, id, s.majors, s.minors).wrap_err("cannot load student")
        })
        .collect::<Result<Vec<_>>>()?;
    let professors = file
        .professors
        .into_iter()
        .map(|p| {
            let id = match p.id {
                Some(id) => id,
                None => ids.next_id().wrap_err("cannot number professor")?,
            };
            trace!(name = %p.name, %id, "loading professor");
            Professor::new(p.name, id, p.disciplines, p.job_role).wrap_err("cannot load professor")
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((students, professors))
}
