//! End-to-end quote request flow through the binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use quotedesk_testing::{TestWorld, assertions, fixtures};

fn with_fields<'a>(head: &[&'a str], fields: &'a [String]) -> Vec<&'a str> {
    head.iter()
        .copied()
        .chain(fields.iter().map(String::as_str))
        .collect()
}

#[test]
fn test_submit_then_list_newest_first() {
    let world = TestWorld::new();

    let first = fixtures::quote_fields("Meera", "meera@gmail.com", "Duplex");
    let second = fixtures::quote_fields("Arun", "arun@yahoo.com", "Garage");

    let a = world
        .run_json(&with_fields(&["quote", "submit"], &first))
        .expect("first submit");
    let b = world
        .run_json(&with_fields(&["quote", "submit"], &second))
        .expect("second submit");

    let a_id = assertions::submitted_id(&a).unwrap();
    let b_id = assertions::submitted_id(&b).unwrap();
    assert!(b_id > a_id);
    assert_eq!(a["content"]["request"]["clientUser"], "meera");
    assert_eq!(a["content"]["request"]["status"], "pending");
    assert_eq!(a["badge"]["kind"], "success");

    let listed = world.run_json(&["quote", "list"]).unwrap();
    assertions::assert_card_count(&listed, 2).unwrap();
    assertions::assert_newest_first(&listed).unwrap();
    assert_eq!(assertions::card_ids(&listed).unwrap(), vec![b_id, a_id]);
    assert_eq!(listed["content"]["viewer"], "Engineer");
}

#[test]
fn test_validation_error_is_reported_and_nothing_saved() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "quote",
            "submit",
            "--field",
            "email=meera@gmail.com",
            "--field",
            "budget=0",
        ])
        .unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Error: Please enter a positive value for budget."),
        "stderr: {}",
        result.stderr()
    );

    let listed = world.run_json(&["quote", "list"]).unwrap();
    assertions::assert_card_count(&listed, 0).unwrap();
}

#[test]
fn test_email_local_part_rule_applies_to_quote_form() {
    let world = TestWorld::new();
    let result = world
        .run(&["quote", "submit", "--field", "email=1abc@x.com"])
        .unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Email local part must start with a letter.")
    );
}

#[test]
fn test_malformed_field_flag_is_rejected() {
    let world = TestWorld::new();
    let result = world.run(&["quote", "submit", "--field", "budget"]).unwrap();
    assert!(!result.success());
}

#[test]
fn test_complete_is_idempotent_and_filterable() {
    let world = TestWorld::new();
    let fields = fixtures::quote_fields("Meera", "meera@gmail.com", "Duplex");
    let submitted = world
        .run_json(&with_fields(&["quote", "submit"], &fields))
        .unwrap();
    let id = assertions::submitted_id(&submitted).unwrap().to_string();

    for _ in 0..2 {
        let done = world.run_json(&["quote", "complete", &id]).unwrap();
        assert_eq!(done["content"]["request"]["status"], "completed");
    }

    let completed = world
        .run_json(&["quote", "list", "--status", "completed"])
        .unwrap();
    assertions::assert_card_count(&completed, 1).unwrap();
    assertions::assert_all_status(&completed, "completed").unwrap();

    let pending = world
        .run_json(&["quote", "list", "--status", "pending"])
        .unwrap();
    assertions::assert_card_count(&pending, 0).unwrap();
}

#[test]
fn test_complete_unknown_id_fails() {
    let world = TestWorld::new();
    let result = world.run(&["quote", "complete", "12345"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("failed to complete request 12345"));
}

#[test]
fn test_client_dashboard_is_scoped_to_login() {
    let world = TestWorld::new();
    assert!(world.login_as("client").unwrap().success());

    let missing_phone = world
        .run(&[
            "quote",
            "submit",
            "--as-client",
            "--field",
            "project_details=Bathroom retile",
        ])
        .unwrap();
    assert!(!missing_phone.success());
    assert!(
        missing_phone
            .stderr()
            .contains("Please enter a 10-digit phone number.")
    );

    let mine = world
        .run_json(&[
            "quote",
            "submit",
            "--as-client",
            "--field",
            "phone=555 987 6543",
            "--field",
            "project_details=Bathroom retile",
        ])
        .unwrap();
    assert_eq!(mine["content"]["request"]["clientUser"], "client");
    assert_eq!(mine["content"]["request"]["name"], "client");

    let other = fixtures::quote_fields("Arun", "arun@yahoo.com", "Garage");
    world
        .run_json(&with_fields(&["quote", "submit"], &other))
        .unwrap();

    let scoped = world.run_json(&["quote", "list", "--mine"]).unwrap();
    assertions::assert_card_count(&scoped, 1).unwrap();
    assert_eq!(scoped["content"]["viewer"], "client");
    assert_eq!(scoped["content"]["cards"][0]["title"], "Bathroom retile");

    let by_name = world
        .run_json(&["quote", "list", "--client", "arun"])
        .unwrap();
    assertions::assert_card_count(&by_name, 1).unwrap();
}

#[test]
fn test_legacy_browser_data_is_listed() {
    let world = TestWorld::new();
    fixtures::seed_legacy_quotes(&world.db_path()).unwrap();

    let listed = world.run_json(&["quote", "list"]).unwrap();
    assertions::assert_card_count(&listed, 2).unwrap();
    assertions::assert_newest_first(&listed).unwrap();
    assert_eq!(listed["content"]["cards"][1]["status"], "completed");

    let ravi = world
        .run_json(&["quote", "list", "--client", "ravi"])
        .unwrap();
    assertions::assert_card_count(&ravi, 1).unwrap();
}

#[test]
fn test_corrupt_collection_lists_empty() {
    let world = TestWorld::new();
    fixtures::seed_raw(&world.db_path(), "quoteRequests", "{not json").unwrap();

    let listed = world.run_json(&["quote", "list"]).unwrap();
    assertions::assert_card_count(&listed, 0).unwrap();
}

#[test]
fn test_html_format_prints_card_markup() {
    let world = TestWorld::new().with_format("html");

    let empty = world.run(&["quote", "list"]).unwrap();
    assert!(empty.success());
    assert!(
        empty
            .stdout()
            .contains("No requests found. Submit one from the homepage contact form.")
    );

    let fields = fixtures::quote_fields("Meera", "meera@gmail.com", "Roof <repair> & gutters");
    assert!(world.run(&with_fields(&["quote", "submit"], &fields)).unwrap().success());

    let listed = world.run(&["quote", "list"]).unwrap();
    assert!(listed.stdout().contains("<div class=\"card\" data-id=\""));
    assert!(listed.stdout().contains("Roof &lt;repair&gt; &amp; gutters"));

    let json = world.run_json(&["quote", "list"]).unwrap();
    assert_eq!(json["content"]["cards"][0]["title"], "Roof <repair> & gutters");
}

#[test]
fn test_export_csv_to_stdout_and_file() {
    let world = TestWorld::new();
    let fields = fixtures::quote_fields("Meera", "meera@gmail.com", "Duplex");
    world
        .run_json(&with_fields(&["quote", "submit"], &fields))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("quotedesk");
    world
        .configure_command(&mut cmd)
        .args(["quote", "export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,submittedAt,clientUser,status,name,email,phone,area_size,budget,project_details\n",
        ))
        .stdout(predicate::str::contains(",meera,pending,Meera,meera@gmail.com,5551234567,"));

    let out = world.temp_dir().join("quotes.csv");
    let exported = world
        .run_json(&["quote", "export", "--output", out.to_str().unwrap()])
        .unwrap();
    assert_eq!(exported["content"]["rows"], 1);
    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 2);
}
