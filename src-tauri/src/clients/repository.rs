use super::types::ClientRecord;

/// Read-only access to a client data set.
pub trait ClientRepository {
    /// Every record, in fixture order.
    fn all(&self) -> &[ClientRecord];

    /// Look up a record by its id.
    fn get(&self, id: &str) -> Option<&ClientRecord> {
        self.all().iter().find(|r| r.id == id)
    }
}

/// Repository backed by an in-memory fixture vector.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    records: Vec<ClientRecord>,
}

impl FixtureRepository {
    pub fn new(records: Vec<ClientRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ClientRepository for FixtureRepository {
    fn all(&self) -> &[ClientRecord] {
        &self.records
    }
}
