//! Impact Service - registration and reporting use cases
//!
//! Registration workflow:
//! 1. Resolve the material (free text or catalog number)
//! 2. Stop unless a non-recyclable catalog entry was confirmed
//! 3. Classify the size and scale the impact
//! 4. Stamp id and time, append to the log

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use reciclapp_domain::model::Catalog;
use reciclapp_domain::repository::ImpactLogRepository;
use reciclapp_domain::service::{
    accumulate, accumulate_by_material, estimate, MaterialMatcher, Resolution,
};
use reciclapp_infra::csv_export::export_to_csv;
use reciclapp_types::{AccumulatedImpact, ImpactRecord, Result, SizingInput};

/// How the user named the material
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialInput {
    /// Free text, matched against the catalog
    Name(String),
    /// 1-based number from the catalog menu
    Selection(String),
}

/// Input for one registration
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub material: MaterialInput,
    pub description: Option<String>,
    pub sizing: SizingInput,
    /// Log a "not recyclable" catalog entry anyway
    pub confirm_non_recyclable: bool,
}

impl RegistrationRequest {
    pub fn by_name(name: impl Into<String>, sizing: SizingInput) -> Self {
        Self {
            material: MaterialInput::Name(name.into()),
            description: None,
            sizing,
            confirm_non_recyclable: false,
        }
    }

    pub fn by_selection(selection: impl Into<String>, sizing: SizingInput) -> Self {
        Self {
            material: MaterialInput::Selection(selection.into()),
            ..Self::by_name(String::new(), sizing)
        }
    }

    /// Blank descriptions are dropped
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_confirmation(mut self, confirmed: bool) -> Self {
        self.confirm_non_recyclable = confirmed;
        self
    }
}

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Record appended to the log
    Registered(ImpactRecord),
    /// Non-recyclable entry without confirmation; nothing written
    Declined { material: String },
}

/// Registration and reporting over a catalog and a history log
pub struct ImpactService<R> {
    catalog: Catalog,
    log: R,
}

impl<R: ImpactLogRepository> ImpactService<R> {
    pub fn new(catalog: Catalog, log: R) -> Self {
        Self { catalog, log }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn log(&self) -> &R {
        &self.log
    }

    pub fn matcher(&self) -> MaterialMatcher<'_> {
        MaterialMatcher::new(&self.catalog)
    }

    /// Resolve a material input; an out-of-range number is an error
    pub fn resolve(&self, input: &MaterialInput) -> Result<Resolution<'_>> {
        let matcher = self.matcher();
        match input {
            MaterialInput::Name(name) => Ok(matcher.resolve(name)),
            MaterialInput::Selection(number) => Ok(Resolution::Matched(matcher.select(number)?)),
        }
    }

    /// Register one item
    pub fn register(&self, request: RegistrationRequest) -> Result<RegistrationOutcome> {
        let resolution = self.resolve(&request.material)?;

        if resolution.is_non_recyclable_entry() && !request.confirm_non_recyclable {
            debug!(material = resolution.material_name(), "non-recyclable entry not confirmed");
            return Ok(RegistrationOutcome::Declined {
                material: resolution.material_name().to_string(),
            });
        }

        let record = estimate(&resolution, request.description, request.sizing)?
            .stamped(Uuid::new_v4(), Utc::now());
        self.log.append(&record)?;

        info!(
            material = %record.material,
            tier = %record.size_tier,
            recyclable = record.recyclable,
            "item registered"
        );
        Ok(RegistrationOutcome::Registered(record))
    }

    /// All records in insertion order
    pub fn history(&self) -> Result<Vec<ImpactRecord>> {
        self.log.find_all()
    }

    /// Most recent records first, at most `limit`
    pub fn recent(&self, limit: usize) -> Result<Vec<ImpactRecord>> {
        Ok(self.history()?.into_iter().rev().take(limit).collect())
    }

    /// Totals recomputed from the whole log
    pub fn accumulated(&self) -> Result<AccumulatedImpact> {
        Ok(accumulate(&self.history()?))
    }

    pub fn accumulated_by_material(&self) -> Result<Vec<(String, AccumulatedImpact)>> {
        Ok(accumulate_by_material(&self.history()?))
    }

    /// Delete every record; `false` if the log was already empty
    pub fn clear(&self) -> Result<bool> {
        self.log.clear()
    }

    /// Write the log as CSV, returning the number of rows
    pub fn export_csv(&self, output_path: &Path) -> Result<usize> {
        let records = self.history()?;
        export_to_csv(&records, output_path)?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reciclapp_infra::persistence::InMemoryImpactLogRepository;
    use reciclapp_types::{Error, ImpactValues, SizeTier};

    fn service() -> ImpactService<InMemoryImpactLogRepository> {
        ImpactService::new(Catalog::builtin(), InMemoryImpactLogRepository::new())
    }

    fn registered(outcome: RegistrationOutcome) -> ImpactRecord {
        match outcome {
            RegistrationOutcome::Registered(record) => record,
            other => panic!("expected a registered record, got {:?}", other),
        }
    }

    #[test]
    fn test_register_bottle_by_capacity() {
        let service = service();
        let record = registered(
            service
                .register(RegistrationRequest::by_name(
                    "botella de plástico",
                    SizingInput::capacity(3.0),
                ))
                .unwrap(),
        );
        assert_eq!(record.impact, ImpactValues::new(4.5, 0.75, 0.3));
        assert_eq!(record.size_tier, SizeTier::Large);
        assert!(record.id.is_some());
        assert!(record.recorded_at.is_some());
        assert_eq!(service.log().len(), 1);
    }

    #[test]
    fn test_register_unmatched_still_logged() {
        let service = service();
        let record = registered(
            service
                .register(RegistrationRequest::by_name(
                    "zapato viejo",
                    SizingInput::height(28.0),
                ))
                .unwrap(),
        );
        assert_eq!(record.material, "zapato viejo");
        assert!(!record.recyclable);
        assert!(record.impact.is_zero());
        assert_eq!(service.history().unwrap().len(), 1);
    }

    #[test]
    fn test_non_recyclable_requires_confirmation() {
        let service = service();
        let outcome = service
            .register(RegistrationRequest::by_selection("10", SizingInput::height(10.0)))
            .unwrap();
        assert!(matches!(outcome, RegistrationOutcome::Declined { .. }));
        assert!(service.log().is_empty());

        let record = registered(
            service
                .register(
                    RegistrationRequest::by_selection("10", SizingInput::height(10.0))
                        .with_confirmation(true),
                )
                .unwrap(),
        );
        assert!(!record.recyclable);
        assert_eq!(service.log().len(), 1);
    }

    #[test]
    fn test_selection_out_of_range_creates_nothing() {
        let service = service();
        let result =
            service.register(RegistrationRequest::by_selection("42", SizingInput::height(10.0)));
        assert!(matches!(
            result,
            Err(Error::SelectionOutOfRange { max: 10, .. })
        ));
        assert!(service.log().is_empty());
    }

    #[test]
    fn test_invalid_measurement_creates_nothing() {
        let service = service();
        let result = service.register(RegistrationRequest::by_name("lata", SizingInput::height(-4.0)));
        assert!(matches!(result, Err(Error::InvalidMeasurement { .. })));
        assert!(service.log().is_empty());
    }

    #[test]
    fn test_blank_description_dropped() {
        let request = RegistrationRequest::by_name("lata", SizingInput::height(10.0))
            .with_description("   ");
        assert!(request.description.is_none());

        let request = RegistrationRequest::by_name("lata", SizingInput::height(10.0))
            .with_description("  lata de tomate ");
        assert_eq!(request.description.as_deref(), Some("lata de tomate"));
    }

    #[test]
    fn test_accumulated_and_recent() {
        let service = service();
        service
            .register(RegistrationRequest::by_name("botella de plástico", SizingInput::capacity(1.5)))
            .unwrap();
        service
            .register(RegistrationRequest::by_name("lata", SizingInput::height(10.0)))
            .unwrap();

        let total = service.accumulated().unwrap();
        assert_eq!(total.water, 7.0);
        assert_eq!(total.record_count, 2);

        let recent = service.recent(1).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].material, "lata");
    }

    #[test]
    fn test_clear() {
        let service = service();
        assert!(!service.clear().unwrap());
        service
            .register(RegistrationRequest::by_name("papel", SizingInput::height(20.0)))
            .unwrap();
        assert!(service.clear().unwrap());
        assert_eq!(service.accumulated().unwrap(), AccumulatedImpact::default());
    }
}
