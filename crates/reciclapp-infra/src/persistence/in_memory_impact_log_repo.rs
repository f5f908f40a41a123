//! In-memory impact log, for tests and dry runs

use std::cell::RefCell;

use reciclapp_domain::repository::ImpactLogRepository;
use reciclapp_types::{Error, ImpactRecord};

#[derive(Debug, Default)]
pub struct InMemoryImpactLogRepository {
    records: RefCell<Vec<ImpactRecord>>,
}

impl InMemoryImpactLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl ImpactLogRepository for InMemoryImpactLogRepository {
    fn append(&self, record: &ImpactRecord) -> Result<(), Error> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<ImpactRecord>, Error> {
        Ok(self.records.borrow().clone())
    }

    fn clear(&self) -> Result<bool, Error> {
        let mut records = self.records.borrow_mut();
        let had_records = !records.is_empty();
        records.clear();
        Ok(had_records)
    }
}
