use crate::error::Error;
use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity shared by every university member.
pub trait UniversityMember {
    fn name(&self) -> &str;
    fn id(&self) -> MemberId;
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Member {
    name: String,
    id: MemberId,
}

impl Member {
    pub fn new(name: impl Into<String>, id: MemberId) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid(format!(
                "cannot create university member {id} with an empty name"
            )));
        }
        Ok(Self { name, id })
    }
}

impl UniversityMember for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> MemberId {
        self.id
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Source of fresh member ids, threaded through the construction code.
#[derive(Debug)]
pub struct IdGenerator {
    /// `None` once the id space is exhausted.
    next: Option<u32>,
}

impl IdGenerator {
    pub fn new(first: u32) -> Self {
        Self { next: Some(first) }
    }

    pub fn next_id(&mut self) -> Result<MemberId, Error> {
        let id = self
            .next
            .ok_or_else(|| Error::invalid("no member id left to hand out"))?;
        self.next = id.checked_add(1);
        Ok(MemberId(id))
    }

    /// Make sure no id up to and including `id` will ever be generated.
    pub fn skip_past(&mut self, MemberId(id): MemberId) {
        self.next = match (self.next, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_construction_values() {
        let m = Member::new("Beth Smith", MemberId(12)).unwrap();
        assert_eq!(m.name(), "Beth Smith");
        assert_eq!(m.id(), MemberId(12));
        let s = m.to_string();
        assert!(s.contains("Beth Smith") && s.contains("12"));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Member::new("", MemberId(1)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Member::new("   ", MemberId(1)).is_err());
    }

    #[test]
    fn equality_covers_id_and_name() {
        let a = Member::new("Leo", MemberId(3)).unwrap();
        assert_eq!(a, Member::new("Leo", MemberId(3)).unwrap());
        assert_ne!(a, Member::new("Leo", MemberId(4)).unwrap());
        assert_ne!(a, Member::new("Leon", MemberId(3)).unwrap());
    }

    #[test]
    fn generator_yields_increasing_ids() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(), Ok(MemberId(1)));
        assert_eq!(ids.next_id(), Ok(MemberId(2)));
        ids.skip_past(MemberId(10));
        assert_eq!(ids.next_id(), Ok(MemberId(11)));
        ids.skip_past(MemberId(5));
        assert_eq!(ids.next_id(), Ok(MemberId(12)));
    }

    #[test]
    fn generator_stops_at_the_largest_id() {
        let mut ids = IdGenerator::new(u32::MAX);
        assert_eq!(ids.next_id(), Ok(MemberId(u32::MAX)));
        assert!(matches!(ids.next_id(), Err(Error::InvalidArgument(_))));
        assert!(ids.next_id().is_err());

        let mut ids = IdGenerator::default();
        ids.skip_past(MemberId(u32::MAX));
        assert!(ids.next_id().is_err());
        ids.skip_past(MemberId(3));
        assert!(ids.next_id().is_err());
    }
}
