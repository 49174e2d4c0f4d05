use std::sync::LazyLock;

use regex::Regex;
use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::{
    NewActivity, NewEmergencyContact, NewGuardian, NewParticipant, NewSubmission, SubmissionBundle,
};

use super::fields::{AnswerMap, answer};

const GUARDIAN_KEYS: [&str; 5] = [
    "guardianname",
    "guardiannric",
    "guardianemail",
    "guardianphone",
    "guardiansignature",
];

const EMERGENCY_KEYS: [&str; 3] = [
    "emergencyfullname",
    "emergencyphone",
    "emergencyrelationship",
];

const ACTIVITY_SLOTS: usize = 7;

static NATIONALITY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid nationality regex"));

/// Everything the webhook wants to write, derived from one answer map.
/// Building the plan is pure; `persist` runs the writes in one transaction.
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    pub participant: NewParticipant,
    pub guardian: Option<NewGuardian>,
    pub emergency: Option<NewEmergencyContact>,
    pub submission: NewSubmission,
    pub activities: Vec<NewActivity>,
    pub insurance: InsuranceIntake,
}

/// The participant/submission fields the insurance request is built from,
/// with contact details already routed to guardian or participant.
#[derive(Debug, Clone)]
pub struct InsuranceIntake {
    pub fullname: Option<String>,
    pub dob: Option<String>,
    pub nric: Option<String>,
    pub nationality_code: String,
    pub minor: bool,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub branch: Option<String>,
    pub coverage_start: Option<String>,
}

impl SubmissionPlan {
    pub fn from_answers(
        answers: &AnswerMap,
        tally_submission_id: Option<String>,
        tally_respondent_id: Option<String>,
    ) -> Self {
        let get = |key: &str| answer(answers, key).map(|s| s.to_string());

        let participant = NewParticipant {
            fullname: get("fullname"),
            dob: get("dob"),
            age: get("age"),
            nric: get("nric"),
            nationality: get("nationality"),
            phone_number: get("phonenumber"),
            email: get("email"),
            address: get("address"),
            gender: get("gender"),
            race: get("race"),
            health_declaration: get("healthdeclaration"),
            participant_signature: get("participantsignature"),
        };

        // Guardian exists only when the form supplied the full set.
        let guardian = if GUARDIAN_KEYS.iter().all(|k| answer(answers, k).is_some()) {
            Some(NewGuardian {
                guardian_name: get("guardianname").unwrap_or_default(),
                guardian_nric: get("guardiannric").unwrap_or_default(),
                guardian_email: get("guardianemail").unwrap_or_default(),
                guardian_phone: get("guardianphone").unwrap_or_default(),
                guardian_signature: get("guardiansignature").unwrap_or_default(),
            })
        } else {
            None
        };

        let emergency = if EMERGENCY_KEYS.iter().all(|k| answer(answers, k).is_some()) {
            Some(NewEmergencyContact {
                emergency_fullname: get("emergencyfullname").unwrap_or_default(),
                emergency_phone: get("emergencyphone").unwrap_or_default(),
                emergency_relationship: get("emergencyrelationship").unwrap_or_default(),
            })
        } else {
            None
        };

        let submission = NewSubmission {
            tally_submission_id,
            tally_respondent_id,
            branch: get("BRANCH"),
            group: get("groupname"),
            booking_status: get("bookingstatus"),
            activity_amount: get("activityamount"),
        };

        let mut activities = Vec::new();
        for i in 1..=ACTIVITY_SLOTS {
            let slot = NewActivity {
                activity_name: get(&format!("activity{i}")),
                activity_date: get(&format!("activitydate{i}")),
                activity_time: get(&format!("actime{i}")),
            };
            if slot.activity_name.is_some()
                || slot.activity_date.is_some()
                || slot.activity_time.is_some()
            {
                activities.push(slot);
            }
        }

        let minor = is_minor(answer(answers, "age"));
        let insurance = InsuranceIntake {
            fullname: get("fullname"),
            dob: get("dob"),
            nric: get("nric"),
            nationality_code: nationality_code(answer(answers, "nationality")),
            minor,
            phone: if minor { get("guardianphone") } else { get("phonenumber") },
            email: if minor { get("guardianemail") } else { get("email") },
            branch: get("BRANCH"),
            coverage_start: get("activitydate1"),
        };

        SubmissionPlan {
            participant,
            guardian,
            emergency,
            submission,
            activities,
            insurance,
        }
    }
}

/// A participant aged 6..=16 is a minor for insurance purposes and gets the
/// guardian's contact details on the policy.
pub fn is_minor(age: Option<&str>) -> bool {
    age.and_then(|a| a.trim().parse::<i64>().ok())
        .is_some_and(|a| (6..=16).contains(&a))
}

/// Extract the two-letter code from a parenthesized suffix, e.g.
/// "Malaysian (MY)" → "MY". No suffix defaults to "MY".
pub fn nationality_code(nationality: Option<&str>) -> String {
    nationality
        .and_then(|raw| NATIONALITY_CODE.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| "MY".to_string())
}

pub enum PersistOutcome {
    Created(Box<SubmissionBundle>),
    /// The tally submission id already exists; nothing was written.
    Duplicate,
}

/// Write participant → guardian → emergency contact → submission →
/// activities in dependency order, inside one transaction. A redelivered
/// webhook trips the unique index on `tally_submission_id` and rolls back.
pub async fn persist(pool: &PgPool, plan: &SubmissionPlan) -> Result<PersistOutcome, AppError> {
    let mut tx = pool.begin().await?;

    let participant = db::participants::create(&mut *tx, &plan.participant).await?;

    let guardian = match &plan.guardian {
        Some(new) => Some(db::guardians::create(&mut *tx, new).await?),
        None => None,
    };

    let emergency = match &plan.emergency {
        Some(new) => Some(db::emergency_contacts::create(&mut *tx, new).await?),
        None => None,
    };

    let submission = match db::submissions::create(
        &mut *tx,
        &plan.submission,
        participant.id,
        guardian.as_ref().map(|g| g.id),
        emergency.as_ref().map(|e| e.id),
    )
    .await
    {
        Ok(submission) => submission,
        Err(e) if is_duplicate_submission(&e) => {
            tx.rollback().await?;
            return Ok(PersistOutcome::Duplicate);
        }
        Err(e) => return Err(e.into()),
    };

    let activities =
        db::activities::create_batch(&mut *tx, participant.id, submission.id, &plan.activities)
            .await?;

    tx.commit().await?;

    Ok(PersistOutcome::Created(Box::new(SubmissionBundle {
        submission,
        participant,
        guardian,
        emergency,
        activities,
    })))
}

fn is_duplicate_submission(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if db.constraint() == Some("submissions_tally_submission_id_key")
    )
}
