pub mod affiliate;
pub mod caregiver;
pub mod form;
pub mod location;
pub mod registration;

pub use affiliate::{Cbo, ChvUser, Facility, School};
pub use caregiver::{Caregiver, CaregiverType, NewCaregiver};
pub use form::{FieldId, RegistrationDraft};
pub use location::{Constituency, County, Ward};
pub use registration::{
    ArtStatus, Gender, HivStatus, Parental, Registration, Relationship, SchoolLevel, Suppression,
};
