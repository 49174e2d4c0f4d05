mod activity;
mod emergency_contact;
mod guardian;
mod participant;
mod submission;

pub use activity::{Activity, NewActivity};
pub use emergency_contact::{EmergencyContact, NewEmergencyContact};
pub use guardian::{Guardian, NewGuardian};
pub use participant::{NewParticipant, Participant};
pub use submission::{NewSubmission, Submission, SubmissionBundle};
