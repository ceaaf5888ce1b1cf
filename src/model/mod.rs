pub use self::discipline::{Discipline, ProfessorJobRole};
pub use self::member::{IdGenerator, Member, MemberId, UniversityMember};
pub use self::professor::Professor;
pub use self::roster::Roster;
pub use self::student::Student;

mod discipline;
mod member;
mod professor;
mod roster;
mod student;
