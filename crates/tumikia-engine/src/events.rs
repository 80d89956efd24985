//! User intents and refresh targets
//!
//! The presentation layer sends intents as discrete events; the session
//! answers with the list of surfaces whose fragments must be re-pulled.

use chrono::NaiveDate;
use tumikia_core::model::{CaregiverType, FieldId, Gender, HivStatus, NewCaregiver, Relationship};
use tumikia_core::queries::RecordFilters;
use tumikia_core_types::{CaregiverId, CboId, ConstituencyId, CountyId, FacilityId, SchoolId, WardId};

/// A discrete user intent
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Cascading location selection
    CountySelected(Option<CountyId>),
    ConstituencySelected(Option<ConstituencyId>),
    WardSelected(Option<WardId>),

    // Field changes with reactive side effects
    DateOfBirthEntered(Option<NaiveDate>),
    HivStatusChanged(HivStatus),
    AttendsSchoolToggled(bool),
    BirthCertificateToggled(bool),
    RelationshipChanged(Option<Relationship>),
    CaregiverPicked(Option<CaregiverId>),

    // Plain field changes
    GenderSelected(Option<Gender>),
    CboSelected(Option<CboId>),
    SchoolSelected(Option<SchoolId>),
    FacilitySelected(Option<FacilityId>),
    DateOfLinkageEntered(Option<NaiveDate>),
    CaregiverGenderSelected(Option<Gender>),
    CaregiverHivStatusChanged(HivStatus),
    CaregiverTypeSelected(Option<CaregiverType>),
    TextFieldChanged(FieldId, String),

    // Wizard navigation and submission
    NextStep,
    PreviousStep,
    Submit,

    // Standalone caregiver creation (the side-modal path)
    CaregiverAdded(NewCaregiver),

    // Listing filters
    FiltersChanged(RecordFilters),
}

impl UiEvent {
    /// Short intent name for structured logs
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::CountySelected(_) => "county_selected",
            UiEvent::ConstituencySelected(_) => "constituency_selected",
            UiEvent::WardSelected(_) => "ward_selected",
            UiEvent::DateOfBirthEntered(_) => "date_of_birth_entered",
            UiEvent::HivStatusChanged(_) => "hiv_status_changed",
            UiEvent::AttendsSchoolToggled(_) => "attends_school_toggled",
            UiEvent::BirthCertificateToggled(_) => "birth_certificate_toggled",
            UiEvent::RelationshipChanged(_) => "relationship_changed",
            UiEvent::CaregiverPicked(_) => "caregiver_picked",
            UiEvent::GenderSelected(_) => "gender_selected",
            UiEvent::CboSelected(_) => "cbo_selected",
            UiEvent::SchoolSelected(_) => "school_selected",
            UiEvent::FacilitySelected(_) => "facility_selected",
            UiEvent::DateOfLinkageEntered(_) => "date_of_linkage_entered",
            UiEvent::CaregiverGenderSelected(_) => "caregiver_gender_selected",
            UiEvent::CaregiverHivStatusChanged(_) => "caregiver_hiv_status_changed",
            UiEvent::CaregiverTypeSelected(_) => "caregiver_type_selected",
            UiEvent::TextFieldChanged(_, _) => "text_field_changed",
            UiEvent::NextStep => "next_step",
            UiEvent::PreviousStep => "previous_step",
            UiEvent::Submit => "submit",
            UiEvent::CaregiverAdded(_) => "caregiver_added",
            UiEvent::FiltersChanged(_) => "filters_changed",
        }
    }
}

/// A view fragment the presentation layer must re-pull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRefresh {
    ConstituencyOptions,
    WardOptions,
    CaregiverOptions,
    /// Conditional section visibility and the derived age display
    Sections,
    /// Step indicator, progress bar and navigation buttons
    StepIndicator,
    RecordsTable,
    CaregiversTable,
    Dashboard,
    Reports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_stable() {
        assert_eq!(UiEvent::Submit.name(), "submit");
        assert_eq!(UiEvent::NextStep.name(), "next_step");
        assert_eq!(
            UiEvent::CountySelected(Some(CountyId(1))).name(),
            "county_selected"
        );
    }
}
