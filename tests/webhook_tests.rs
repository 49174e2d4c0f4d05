use std::collections::HashMap;

use serde_json::json;

use parkform::webhook::fields::{self, AnswerMap, RawField};
use parkform::webhook::mapper::{self, SubmissionPlan};

fn field(label: &str, value: serde_json::Value) -> RawField {
    serde_json::from_value(json!({
        "label": label,
        "id": format!("id_{label}"),
        "value": value,
    }))
    .unwrap()
}

fn field_with_options(
    label: &str,
    value: serde_json::Value,
    options: serde_json::Value,
) -> RawField {
    serde_json::from_value(json!({
        "label": label,
        "id": format!("id_{label}"),
        "value": value,
        "options": options,
    }))
    .unwrap()
}

fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Some(v.to_string())))
        .collect()
}

// ── Field Normalizer ────────────────────────────────────────────

#[test]
fn scalar_string_resolves_against_options() {
    let f = field_with_options(
        "gender",
        json!("opt_1"),
        json!([{"id": "opt_1", "text": "Male"}, {"id": "opt_2", "text": "Female"}]),
    );
    assert_eq!(fields::readable_value(&f), Some("Male".to_string()));
}

#[test]
fn scalar_string_without_match_is_kept() {
    let f = field_with_options("gender", json!("opt_9"), json!([{"id": "opt_1", "text": "Male"}]));
    assert_eq!(fields::readable_value(&f), Some("opt_9".to_string()));
}

#[test]
fn array_joins_resolved_elements_in_order() {
    let f = field_with_options(
        "healthdeclaration",
        json!(["opt_b", "opt_a", "free text"]),
        json!([{"id": "opt_a", "text": "Asthma"}, {"id": "opt_b", "text": "Diabetes"}]),
    );
    assert_eq!(
        fields::readable_value(&f),
        Some("Diabetes, Asthma, free text".to_string())
    );
}

#[test]
fn array_objects_prefer_url_then_text() {
    let f = field(
        "participantsignature",
        json!([
            {"url": "https://files.example/sig.png", "name": "sig.png"},
            {"text": "inline"},
            {"mimeType": "image/png"}
        ]),
    );
    let resolved = fields::readable_value(&f).unwrap();
    let parts: Vec<&str> = resolved.split(", ").collect();
    assert_eq!(parts[0], "https://files.example/sig.png");
    assert_eq!(parts[1], "inline");
    assert_eq!(parts[2], r#"{"mimeType":"image/png"}"#);
}

#[test]
fn object_value_resolves_url_text_then_option_id() {
    let with_url = field("sig", json!({"url": "https://u", "text": "t"}));
    assert_eq!(fields::readable_value(&with_url), Some("https://u".to_string()));

    let with_text = field("sig", json!({"text": "t"}));
    assert_eq!(fields::readable_value(&with_text), Some("t".to_string()));

    let with_id = field_with_options(
        "sig",
        json!({"id": "opt_1"}),
        json!([{"id": "opt_1", "text": "Resolved"}]),
    );
    assert_eq!(fields::readable_value(&with_id), Some("Resolved".to_string()));

    let with_unknown_id = field("sig", json!({"id": "opt_x"}));
    assert_eq!(fields::readable_value(&with_unknown_id), Some("opt_x".to_string()));
}

#[test]
fn object_without_url_text_or_id_keeps_json_form() {
    let f = field("upload", json!({"mimeType": "image/png"}));
    assert_eq!(
        fields::readable_value(&f),
        Some(r#"{"mimeType":"image/png"}"#.to_string())
    );
}

#[test]
fn missing_value_is_none() {
    let f: RawField = serde_json::from_value(json!({"label": "empty", "id": "x"})).unwrap();
    assert_eq!(fields::readable_value(&f), None);

    let null = field("empty", json!(null));
    assert_eq!(fields::readable_value(&null), None);
}

#[test]
fn parse_answers_keys_by_label_falling_back_to_id() {
    let labeled = field("fullname", json!("Jane"));
    let unlabeled: RawField =
        serde_json::from_value(json!({"id": "question_77", "value": "yes"})).unwrap();

    let map = fields::parse_answers(&[labeled, unlabeled]);
    assert_eq!(map["fullname"], Some("Jane".to_string()));
    assert_eq!(map["question_77"], Some("yes".to_string()));
}

#[test]
fn parse_answers_last_duplicate_key_wins() {
    let first = field("fullname", json!("First"));
    let second = field("fullname", json!("Second"));

    let map = fields::parse_answers(&[first, second]);
    assert_eq!(map.len(), 1);
    assert_eq!(map["fullname"], Some("Second".to_string()));
}

// ── Submission Mapper ───────────────────────────────────────────

#[test]
fn guardian_omitted_when_any_key_missing() {
    // Four of five guardian keys: no guardian record.
    let map = answers(&[
        ("fullname", "Jane Tan"),
        ("guardianname", "Tan Ah Kow"),
        ("guardiannric", "800101-10-5555"),
        ("guardianemail", "g@x.com"),
        ("guardianphone", "+60123456789"),
    ]);
    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert!(plan.guardian.is_none());
}

#[test]
fn guardian_omitted_when_key_is_empty_string() {
    let mut map = answers(&[
        ("guardianname", "Tan Ah Kow"),
        ("guardiannric", "800101-10-5555"),
        ("guardianemail", "g@x.com"),
        ("guardianphone", "+60123456789"),
    ]);
    map.insert("guardiansignature".to_string(), Some(String::new()));

    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert!(plan.guardian.is_none());
}

#[test]
fn emergency_contact_needs_all_three_keys() {
    let partial = answers(&[("emergencyfullname", "Lim"), ("emergencyphone", "+60111")]);
    assert!(SubmissionPlan::from_answers(&partial, None, None).emergency.is_none());

    let full = answers(&[
        ("emergencyfullname", "Lim"),
        ("emergencyphone", "+60111"),
        ("emergencyrelationship", "Mother"),
    ]);
    let plan = SubmissionPlan::from_answers(&full, None, None);
    let emergency = plan.emergency.unwrap();
    assert_eq!(emergency.emergency_relationship, "Mother");
}

#[test]
fn activity_slot_kept_when_any_field_present() {
    let map = answers(&[
        ("activity1", "ATV"),
        ("activitydate2", "2024-06-02"),
        ("actime3", "14:00"),
        // slot 4 untouched
        ("activity5", "Paintball"),
        ("activitydate5", "2024-06-03"),
        ("actime5", "09:00"),
    ]);
    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert_eq!(plan.activities.len(), 4);
    assert_eq!(plan.activities[0].activity_name.as_deref(), Some("ATV"));
    assert_eq!(plan.activities[1].activity_date.as_deref(), Some("2024-06-02"));
    assert_eq!(plan.activities[2].activity_time.as_deref(), Some("14:00"));
    assert_eq!(plan.activities[3].activity_name.as_deref(), Some("Paintball"));
}

#[test]
fn no_activities_is_valid() {
    let plan = SubmissionPlan::from_answers(&answers(&[("fullname", "Jane")]), None, None);
    assert!(plan.activities.is_empty());
}

#[test]
fn minor_band_is_six_to_sixteen_inclusive() {
    assert!(!mapper::is_minor(Some("5")));
    assert!(mapper::is_minor(Some("6")));
    assert!(mapper::is_minor(Some("10")));
    assert!(mapper::is_minor(Some("16")));
    assert!(!mapper::is_minor(Some("17")));
    assert!(!mapper::is_minor(Some("adult")));
    assert!(!mapper::is_minor(None));
}

#[test]
fn minor_routes_contact_details_to_guardian() {
    let map = answers(&[
        ("age", "10"),
        ("phonenumber", "+60100000000"),
        ("email", "jane@x.com"),
        ("guardianphone", "+60123456789"),
        ("guardianemail", "g@x.com"),
    ]);
    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert!(plan.insurance.minor);
    assert_eq!(plan.insurance.phone.as_deref(), Some("+60123456789"));
    assert_eq!(plan.insurance.email.as_deref(), Some("g@x.com"));
}

#[test]
fn adult_keeps_own_contact_details() {
    let map = answers(&[
        ("age", "34"),
        ("phonenumber", "+60100000000"),
        ("email", "jane@x.com"),
        ("guardianphone", "+60123456789"),
        ("guardianemail", "g@x.com"),
    ]);
    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert!(!plan.insurance.minor);
    assert_eq!(plan.insurance.phone.as_deref(), Some("+60100000000"));
    assert_eq!(plan.insurance.email.as_deref(), Some("jane@x.com"));
}

#[test]
fn nationality_code_extracted_from_parenthesized_suffix() {
    assert_eq!(mapper::nationality_code(Some("Malaysian (MY)")), "MY");
    assert_eq!(mapper::nationality_code(Some("Singaporean (SG)")), "SG");
    assert_eq!(mapper::nationality_code(Some("Malaysian")), "MY");
    assert_eq!(mapper::nationality_code(None), "MY");
}

// ── End-to-end mapping scenarios ────────────────────────────────

fn minor_submission() -> AnswerMap {
    answers(&[
        ("fullname", "Jane Tan"),
        ("age", "10"),
        ("dob", "2015-01-01"),
        ("nric", "150101-10-1234"),
        ("nationality", "Malaysian (MY)"),
        ("guardianname", "Tan Ah Kow"),
        ("guardiannric", "800101-10-5555"),
        ("guardianemail", "g@x.com"),
        ("guardianphone", "+60123456789"),
        ("guardiansignature", "data:image/png;base64,AAAA"),
        ("activity1", "ATV"),
        ("activitydate1", "2024-06-01"),
        ("actime1", "10:00"),
        ("BRANCH", "GOPENG GLAMPING PARK"),
    ])
}

#[test]
fn minor_scenario_produces_guardian_and_one_activity() {
    let plan = SubmissionPlan::from_answers(
        &minor_submission(),
        Some("sub_1".to_string()),
        Some("resp_1".to_string()),
    );

    assert_eq!(plan.participant.fullname.as_deref(), Some("Jane Tan"));
    assert_eq!(
        plan.guardian.as_ref().unwrap().guardian_name,
        "Tan Ah Kow".to_string()
    );
    assert!(plan.emergency.is_none());
    assert_eq!(plan.submission.tally_submission_id.as_deref(), Some("sub_1"));
    assert_eq!(plan.activities.len(), 1);
    assert_eq!(plan.activities[0].activity_name.as_deref(), Some("ATV"));

    // Insurance routing: minor → guardian contact, MY code, coverage from slot 1.
    assert!(plan.insurance.minor);
    assert_eq!(plan.insurance.phone.as_deref(), Some("+60123456789"));
    assert_eq!(plan.insurance.email.as_deref(), Some("g@x.com"));
    assert_eq!(plan.insurance.nationality_code, "MY");
    assert_eq!(plan.insurance.coverage_start.as_deref(), Some("2024-06-01"));
}

#[test]
fn foreign_scenario_keeps_dob_for_applicant() {
    let mut map = minor_submission();
    map.insert(
        "nationality".to_string(),
        Some("Singaporean (SG)".to_string()),
    );
    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert_eq!(plan.insurance.nationality_code, "SG");
    assert_eq!(plan.insurance.dob.as_deref(), Some("2015-01-01"));
}

#[test]
fn answer_map_blanks_become_none() {
    let mut map: AnswerMap = HashMap::new();
    map.insert("fullname".to_string(), Some(String::new()));
    map.insert("email".to_string(), None);

    let plan = SubmissionPlan::from_answers(&map, None, None);
    assert!(plan.participant.fullname.is_none());
    assert!(plan.participant.email.is_none());
}
