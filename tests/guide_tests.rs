use parkform::guides::{self, normalize_ic};

fn sheet() -> Vec<Vec<String>> {
    // Row layout mirrors the certification sheet: A=RegNo, B=Name,
    // C=Nickname, D=IC, then category blocks starting at column G.
    let mut row: Vec<String> = vec!["".to_string(); 34];
    row[0] = "G-042".to_string();
    row[1] = "Ahmad Faiz".to_string();
    row[2] = "Faiz".to_string();
    row[3] = "900101-10-1234".to_string();
    row[6] = "Level 2".to_string(); // white water rafting
    row[7] = "2026-01-01".to_string();
    row[8] = "CERT-881".to_string();
    row[9] = "Issued".to_string();
    row[14] = "Level 1".to_string(); // ATV
    row[15] = "2025-09-30".to_string();

    let mut other: Vec<String> = vec!["".to_string(); 34];
    other[0] = "G-001".to_string();
    other[3] = "850505-05-5555".to_string();

    vec![other, row]
}

// ── IC normalization ────────────────────────────────────────────

#[test]
fn normalize_strips_spaces_and_dashes() {
    assert_eq!(normalize_ic("900101-10-1234"), "900101101234");
    assert_eq!(normalize_ic(" 900101 10 1234 "), "900101101234");
}

// ── Lookup ──────────────────────────────────────────────────────

#[test]
fn finds_guide_by_ic_ignoring_formatting() {
    let rows = sheet();
    let record = guides::lookup(&rows, "900101 10 1234").unwrap();

    assert_eq!(record.reg_no, "G-042");
    assert_eq!(record.name, "Ahmad Faiz");
    assert_eq!(record.nickname, "Faiz");
    assert_eq!(record.certifications.len(), 7);

    let rafting = &record.certifications[0];
    assert_eq!(rafting.category, "WHITE WATER RAFTING");
    assert_eq!(rafting.level, "Level 2");
    assert_eq!(rafting.validity, "2026-01-01");
    assert_eq!(rafting.certificate, "CERT-881");
    assert_eq!(rafting.card, "Issued");

    let atv = &record.certifications[2];
    assert_eq!(atv.category, "ALL-TERRAIN VEHICLE");
    assert_eq!(atv.level, "Level 1");
    assert_eq!(atv.validity, "2025-09-30");
    assert_eq!(atv.certificate, "");
}

#[test]
fn unknown_ic_is_none() {
    assert!(guides::lookup(&sheet(), "000000-00-0000").is_none());
}

#[test]
fn short_rows_read_missing_columns_as_empty() {
    let rows = vec![vec![
        "G-007".to_string(),
        "Lim Wei".to_string(),
        "Wei".to_string(),
        "880808-08-8888".to_string(),
    ]];
    let record = guides::lookup(&rows, "8808080888 88").unwrap();
    assert_eq!(record.reg_no, "G-007");
    for cert in &record.certifications {
        assert_eq!(cert.level, "");
        assert_eq!(cert.card, "");
    }
}
