//! End-to-end diff scenarios over complete pack documents.
//!
//! Each scenario parses full YAML documents and checks the classified
//! changes, the change codes, and the version recommendation together.

use pack_tools::diff::ChangeType;
use pack_tools::policy::VersionBump;
use pack_tools::reports::{DiffReport, JsonReporter};
use pack_tools::{parse_pack_str, ContextPack, PackDiffEngine};

fn pack(content: &str) -> ContextPack {
    parse_pack_str(content).expect("scenario document should parse")
}

#[test]
fn state_removed_and_added_recommends_major() {
    let base = pack(
        r#"
feature:
  name: publishing
  version: 1.2.0
states:
  draft:
    entry: user starts writing
    exit: user submits for review
  review:
    entry: editor receives the draft
vocabulary:
  draft: an unpublished piece of writing
"#,
    );
    let head = pack(
        r#"
feature:
  name: publishing
  version: 1.2.0
states:
  draft:
    entry: user starts writing
    exit: user submits for review
  published:
    entry: the piece is visible to readers
vocabulary:
  draft: an unpublished piece of writing
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);

    assert_eq!(result.breaking().count(), 1);
    assert_eq!(result.additive().count(), 1);

    let removal = result.breaking().next().unwrap();
    assert_eq!(removal.code, "BREAK-001");
    assert_eq!(removal.section, "states.review");
    assert_eq!(
        removal.migration.as_deref(),
        Some("Remove all content referencing 'review' state")
    );

    assert_eq!(result.version_bump(), VersionBump::Major);
    assert_eq!(result.recommended_version(), "2.0.0");
}

#[test]
fn vocabulary_clarification_recommends_patch() {
    let base = pack(
        r#"
feature: {name: messaging, version: 1.2.0}
vocabulary:
  retry: try again
"#,
    );
    let head = pack(
        r#"
feature: {name: messaging, version: 1.2.0}
vocabulary:
  retry: try the operation again
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);

    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].change_type, ChangeType::Corrective);
    assert_eq!(result.changes[0].code, "CORR-001");
    assert_eq!(result.recommended_version(), "1.2.1");
}

#[test]
fn meaning_change_in_state_field_recommends_major() {
    let base = pack(
        r#"
feature: {name: billing, version: 2.3.0}
states:
  invoice:
    content_guidance: mention the payment deadline prominently
"#,
    );
    let head = pack(
        r#"
feature: {name: billing, version: 2.3.0}
states:
  invoice:
    content_guidance: never reference concrete dates in customer text
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);

    assert_eq!(result.breaking().count(), 1);
    let change = result.breaking().next().unwrap();
    assert_eq!(change.section, "states.invoice.content_guidance");
    assert!(change.description.contains("Meaning changed"));
    assert_eq!(result.recommended_version(), "3.0.0");
}

#[test]
fn goal_and_action_changes_combine_with_priority() {
    let base = pack(
        r#"
feature: {name: search, version: 0.9.0}
user_goals:
  - find a product
core_actions:
  - filter results
"#,
    );
    let head = pack(
        r#"
feature: {name: search, version: 0.9.0}
user_goals:
  - find a product
  - compare prices
core_actions: []
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);

    // Removal outranks the addition
    assert_eq!(result.version_bump(), VersionBump::Major);
    assert_eq!(result.recommended_version(), "1.0.0");
    assert_eq!(result.additive().count(), 1);
    assert_eq!(result.breaking().count(), 1);
}

#[test]
fn error_message_rewording_stays_corrective() {
    let base = pack(
        r#"
feature: {name: uploads, version: 3.1.4}
error_taxonomy:
  - code: UP-001
    message_pattern: Something went wrong during upload
  - code: UP-002
    message_pattern: The file is too large
"#,
    );
    let head = pack(
        r#"
feature: {name: uploads, version: 3.1.4}
error_taxonomy:
  - code: UP-001
    message_pattern: We could not reach the storage service
  - code: UP-002
    message_pattern: The file is too large
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);

    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].change_type, ChangeType::Corrective);
    assert_eq!(
        result.changes[0].section,
        "error_taxonomy.UP-001.message_pattern"
    );
    assert_eq!(result.version_bump(), VersionBump::Patch);
    assert_eq!(result.recommended_version(), "3.1.5");
}

#[test]
fn unparseable_base_version_reports_unknown_recommendation() {
    let base = pack("feature: {name: legacy, version: v1}\nuser_goals: [browse]");
    let head = pack("feature: {name: legacy, version: v1}\nuser_goals: [browse, export]");

    let result = PackDiffEngine::new().diff(&base, &head);

    assert_eq!(result.version_bump(), VersionBump::Minor);
    assert_eq!(result.recommended_version(), "unknown");
}

#[test]
fn report_json_contract_round_trip() {
    let base = pack(
        r#"
feature: {name: checkout, version: 1.0.0}
vocabulary:
  cart: the items selected for purchase
user_goals: [complete a purchase]
"#,
    );
    let head = pack(
        r#"
feature: {name: checkout, version: 1.0.0}
user_goals: [complete a purchase, save for later]
"#,
    );

    let result = PackDiffEngine::new().diff(&base, &head);
    let report = DiffReport::from_result(&result);
    let output = JsonReporter::new().generate(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["pack"], "checkout");
    assert_eq!(value["base_version"], "1.0.0");
    assert_eq!(value["increment_type"], "MAJOR");
    assert_eq!(value["recommended_version"], "2.0.0");
    assert_eq!(value["summary"]["breaking"], 1);
    assert_eq!(value["summary"]["additive"], 1);
    assert_eq!(value["breaking"][0]["section"], "vocabulary.cart");
    assert_eq!(
        value["breaking"][0]["migration"],
        "Replace all uses of 'cart' with new terminology"
    );

    // The document parses back into the typed report
    let parsed: DiffReport = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.summary.breaking, 1);
}

#[test]
fn wrong_shaped_section_degrades_to_empty() {
    let base = pack(
        r#"
feature: {name: degraded, version: 1.0.0}
user_goals: not a list
vocabulary:
  term: a definition
"#,
    );
    let head = pack(
        r#"
feature: {name: degraded, version: 1.0.0}
user_goals: [a goal]
vocabulary:
  term: a definition
"#,
    );

    // The malformed list acts as empty, so the head goal is an addition
    let result = PackDiffEngine::new().diff(&base, &head);
    assert_eq!(result.additive().count(), 1);
    assert_eq!(result.breaking().count(), 0);
}

#[test]
fn change_codes_are_stable_across_sections() {
    let base = pack(
        r#"
feature: {name: ordering, version: 1.0.0}
states:
  gone: {entry: will be removed}
vocabulary:
  dropped: an old term
user_goals: [removed goal]
error_taxonomy:
  - {code: E-GONE, message_pattern: Old error}
"#,
    );
    let head = pack("feature: {name: ordering, version: 1.0.0}");

    let result = PackDiffEngine::new().diff(&base, &head);

    let codes: Vec<&str> = result.breaking().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["BREAK-001", "BREAK-002", "BREAK-003", "BREAK-004"]);
    let sections: Vec<&str> = result.breaking().map(|c| c.section.as_str()).collect();
    assert_eq!(
        sections,
        [
            "states.gone",
            "vocabulary.dropped",
            "user_goals",
            "error_taxonomy.E-GONE"
        ]
    );
}
