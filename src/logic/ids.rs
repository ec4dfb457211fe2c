//! Identifier capability for players and matches.

use uuid::Uuid;

/// Produces unique-enough string ids. Passed explicitly wherever ids are minted.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Length of ids produced by [`RandomIds`].
const SHORT_ID_LEN: usize = 12;

/// Short random ids: the first 12 hex characters of a v4 UUID.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SHORT_ID_LEN);
        id
    }
}

/// Predictable ids `"{prefix}1"`, `"{prefix}2"`, ... for tests and fixtures.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
