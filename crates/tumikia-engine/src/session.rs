//! The interactive session
//!
//! One `Session` per open page: it owns the store, the draft, the wizard
//! step and the listing filters, processes one intent at a time, and
//! exposes fragment accessors the presentation layer pulls after each
//! refresh notice. Validation failures are advisory - they notify and
//! refuse the intent without escalating or mutating anything.

use chrono::NaiveDate;
use tumikia_core::model::{NewCaregiver, RegistrationDraft};
use tumikia_core::notify::{Notification, NotificationSink};
use tumikia_core::ops::{caregiver_ops, registration_ops, Store};
use tumikia_core::queries::{
    dashboard_summary, record_queries, report_summary, DashboardSummary, RecordFilters,
    ReportSummary,
};
use tumikia_core::render::{detail_render, option_render, table_render, OptionItem};
use tumikia_core::rules::{section_visibility, SectionVisibility};
use tumikia_core::wizard::{self, StepView, Transition, WizardEvent, WizardStep};
use tumikia_core::{age, errors::Result, log_op_end, log_op_error, log_op_start};
use tumikia_core_types::{CaregiverId, OvcId, RequestContext};

use crate::events::{SurfaceRefresh, UiEvent};
use crate::views::AgeSummary;

/// Message shown when forward navigation or submit hits missing fields
const VALIDATION_NOTICE: &str = "Please fill in all required fields";

/// How many rows the dashboard's recent listing shows
const RECENT_LIMIT: usize = 5;

/// An interactive registration session over an owned store
#[derive(Debug)]
pub struct Session {
    store: Store,
    draft: RegistrationDraft,
    step: WizardStep,
    filters: RecordFilters,
    today: NaiveDate,
}

impl Session {
    /// Open a session over a seeded store
    ///
    /// `today` is the reference date for age computation, registration
    /// stamps and the dashboard's month bucket; the engine never reads the
    /// wall clock itself.
    pub fn new(store: Store, today: NaiveDate) -> Self {
        Self {
            store,
            draft: RegistrationDraft::new(),
            step: WizardStep::Location,
            filters: RecordFilters::default(),
            today,
        }
    }

    /// Handle one user intent to completion
    ///
    /// Returns the surfaces whose fragments must be re-pulled. Validation
    /// failures notify through the sink and return an empty refresh list;
    /// hard errors (dangling references) propagate.
    ///
    /// # Errors
    /// Returns non-advisory registry errors only; `ValidationFailed` is
    /// absorbed into an error notification.
    pub fn handle_event(
        &mut self,
        event: UiEvent,
        sink: &mut dyn NotificationSink,
    ) -> Result<Vec<SurfaceRefresh>> {
        let ctx = RequestContext::new();
        log_op_start!(
            "handle_event",
            request_id = %ctx.request_id,
            intent = event.name(),
        );

        let outcome = self.dispatch(event, sink);
        match &outcome {
            Ok(refreshes) => {
                log_op_end!(
                    "handle_event",
                    request_id = %ctx.request_id,
                    refreshed = refreshes.len(),
                );
            }
            Err(err) => {
                log_op_error!("handle_event", err.clone(), request_id = %ctx.request_id);
            }
        }
        outcome
    }

    fn dispatch(
        &mut self,
        event: UiEvent,
        sink: &mut dyn NotificationSink,
    ) -> Result<Vec<SurfaceRefresh>> {
        use SurfaceRefresh::*;

        match event {
            UiEvent::CountySelected(county) => {
                self.draft.location.select_county(county);
                Ok(vec![ConstituencyOptions, WardOptions])
            }
            UiEvent::ConstituencySelected(constituency) => {
                self.draft.location.select_constituency(constituency);
                Ok(vec![WardOptions])
            }
            UiEvent::WardSelected(ward) => {
                self.draft.location.select_ward(ward);
                Ok(vec![])
            }

            UiEvent::DateOfBirthEntered(dob) => {
                self.draft.date_of_birth = dob;
                Ok(vec![Sections])
            }
            UiEvent::HivStatusChanged(status) => {
                self.draft.hiv_status = status;
                Ok(vec![Sections])
            }
            UiEvent::AttendsSchoolToggled(attends) => {
                self.draft.attends_school = attends;
                Ok(vec![Sections])
            }
            UiEvent::BirthCertificateToggled(has) => {
                self.draft.has_birth_certificate = has;
                Ok(vec![Sections])
            }
            UiEvent::RelationshipChanged(relationship) => {
                self.draft.relationship = relationship;
                Ok(vec![Sections])
            }
            UiEvent::CaregiverPicked(caregiver) => {
                self.draft.existing_caregiver = caregiver;
                Ok(vec![Sections])
            }

            UiEvent::GenderSelected(gender) => {
                self.draft.gender = gender;
                Ok(vec![])
            }
            UiEvent::CboSelected(cbo) => {
                self.draft.cbo = cbo;
                Ok(vec![])
            }
            UiEvent::SchoolSelected(school) => {
                self.draft.school = school;
                Ok(vec![])
            }
            UiEvent::FacilitySelected(facility) => {
                self.draft.facility = facility;
                Ok(vec![])
            }
            UiEvent::DateOfLinkageEntered(date) => {
                self.draft.date_of_linkage = date;
                Ok(vec![])
            }
            UiEvent::CaregiverGenderSelected(gender) => {
                self.draft.caregiver_gender = gender;
                Ok(vec![])
            }
            UiEvent::CaregiverHivStatusChanged(status) => {
                self.draft.caregiver_hiv_status = status;
                Ok(vec![])
            }
            UiEvent::CaregiverTypeSelected(caregiver_type) => {
                self.draft.caregiver_type = caregiver_type;
                Ok(vec![])
            }
            UiEvent::TextFieldChanged(field, value) => {
                self.draft.apply_text(field, value)?;
                Ok(vec![])
            }

            UiEvent::NextStep => Ok(self.navigate(WizardEvent::Next, sink)),
            UiEvent::PreviousStep => Ok(self.navigate(WizardEvent::Previous, sink)),

            UiEvent::Submit => self.submit(sink),

            UiEvent::CaregiverAdded(new) => self.add_caregiver(new, sink),

            UiEvent::FiltersChanged(filters) => {
                self.filters = filters;
                Ok(vec![RecordsTable])
            }
        }
    }

    fn navigate(&mut self, event: WizardEvent, sink: &mut dyn NotificationSink) -> Vec<SurfaceRefresh> {
        match wizard::transition(self.step, event, &self.draft) {
            Transition::Moved(step) => {
                self.step = step;
                vec![SurfaceRefresh::StepIndicator]
            }
            Transition::Rejected { .. } => {
                sink.notify(Notification::error(VALIDATION_NOTICE));
                vec![]
            }
        }
    }

    fn submit(&mut self, sink: &mut dyn NotificationSink) -> Result<Vec<SurfaceRefresh>> {
        use SurfaceRefresh::*;

        match registration_ops::submit(&mut self.store, &self.draft, self.today) {
            Ok(outcome) => {
                sink.notify(Notification::success(format!(
                    "Successfully registered {}",
                    outcome.names
                )));
                // Discard the draft and return to step 1
                self.draft = RegistrationDraft::new();
                self.step = WizardStep::Location;
                Ok(vec![
                    StepIndicator,
                    Sections,
                    ConstituencyOptions,
                    WardOptions,
                    CaregiverOptions,
                    RecordsTable,
                    CaregiversTable,
                    Dashboard,
                    Reports,
                ])
            }
            Err(err) if err.is_advisory() => {
                sink.notify(Notification::error(VALIDATION_NOTICE));
                Ok(vec![])
            }
            Err(err) => Err(err),
        }
    }

    fn add_caregiver(
        &mut self,
        new: NewCaregiver,
        sink: &mut dyn NotificationSink,
    ) -> Result<Vec<SurfaceRefresh>> {
        use SurfaceRefresh::*;

        match caregiver_ops::add_caregiver(&mut self.store, new) {
            Ok(_) => {
                sink.notify(Notification::success("Caregiver added successfully"));
                Ok(vec![CaregiverOptions, CaregiversTable, Dashboard, Reports])
            }
            Err(err) if err.is_advisory() => {
                sink.notify(Notification::error(VALIDATION_NOTICE));
                Ok(vec![])
            }
            Err(err) => Err(err),
        }
    }

    // ===== Fragment accessors =====

    pub fn county_options(&self) -> Vec<OptionItem> {
        option_render::county_options(&self.store)
    }

    pub fn constituency_options(&self) -> Vec<OptionItem> {
        option_render::constituency_options(&self.store, self.draft.location.county())
    }

    pub fn ward_options(&self) -> Vec<OptionItem> {
        option_render::ward_options(&self.store, self.draft.location.constituency())
    }

    pub fn cbo_options(&self) -> Vec<OptionItem> {
        option_render::cbo_options(&self.store, self.draft.location.ward())
    }

    pub fn school_options(&self) -> Vec<OptionItem> {
        option_render::school_options(&self.store)
    }

    pub fn facility_options(&self) -> Vec<OptionItem> {
        option_render::facility_options(&self.store)
    }

    pub fn caregiver_options(&self) -> Vec<OptionItem> {
        option_render::caregiver_options(&self.store)
    }

    /// Step indicator, progress and navigation-button state
    pub fn step_view(&self) -> StepView {
        wizard::step_view(self.step)
    }

    /// Conditional section visibility for the current draft
    pub fn sections(&self) -> SectionVisibility {
        section_visibility(&self.draft, self.today)
    }

    /// The derived age display, present once a birth date is entered
    pub fn age_summary(&self) -> Option<AgeSummary> {
        self.draft.age(self.today).map(|years| AgeSummary {
            years,
            range: age::age_range(years),
            child: age::is_child(years),
        })
    }

    /// The filtered registrations listing
    pub fn records_table(&self) -> String {
        table_render::records_table(&self.store, &self.filters)
    }

    pub fn caregivers_table(&self) -> String {
        table_render::caregivers_table(&self.store)
    }

    pub fn recent_registrations_table(&self) -> String {
        table_render::recent_registrations_table(&self.store, RECENT_LIMIT)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        dashboard_summary(&self.store, self.today)
    }

    pub fn reports(&self) -> ReportSummary {
        report_summary(&self.store)
    }

    /// Detail fragment for one registration
    ///
    /// # Errors
    /// Returns `RegistrationNotFound` if the id does not resolve.
    pub fn registration_detail(&self, ovc_id: OvcId) -> Result<String> {
        detail_render::registration_detail(&self.store, ovc_id)
    }

    /// Detail fragment for one caregiver
    ///
    /// # Errors
    /// Returns `CaregiverNotFound` if the id does not resolve.
    pub fn caregiver_detail(&self, caregiver_id: CaregiverId) -> Result<String> {
        detail_render::caregiver_detail(&self.store, caregiver_id)
    }

    // ===== State accessors =====

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn filters(&self) -> RecordFilters {
        self.filters
    }

    /// Registrations matching the current filters (record-level view)
    pub fn filtered_records(&self) -> Vec<&tumikia_core::Registration> {
        record_queries::filter_records(&self.store, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core::model::{Constituency, County, FieldId, Ward};
    use tumikia_core_types::{ConstituencyId, CountyId, WardId};

    use tumikia_core::notify::VecSink;

    fn session() -> Session {
        let mut store = Store::new();
        store.insert_county(County::new(CountyId(1), "Mombasa"));
        store.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
        store.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
        Session::new(store, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn test_county_selection_refreshes_dependents() {
        let mut session = session();
        let mut sink = VecSink::new();

        let refreshes = session
            .handle_event(UiEvent::CountySelected(Some(CountyId(1))), &mut sink)
            .unwrap();

        assert_eq!(
            refreshes,
            vec![SurfaceRefresh::ConstituencyOptions, SurfaceRefresh::WardOptions]
        );
        assert!(sink.notifications.is_empty());
    }

    #[test]
    fn test_text_change_to_select_field_is_hard_error() {
        let mut session = session();
        let mut sink = VecSink::new();

        let result = session.handle_event(
            UiEvent::TextFieldChanged(FieldId::Ward, "1".to_string()),
            &mut sink,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_previous_from_step_one_stays() {
        let mut session = session();
        let mut sink = VecSink::new();

        let refreshes = session
            .handle_event(UiEvent::PreviousStep, &mut sink)
            .unwrap();

        assert_eq!(session.step(), WizardStep::Location);
        assert_eq!(refreshes, vec![SurfaceRefresh::StepIndicator]);
    }
}
