use apns_protocol::{
    ApnItem, ApnList, ApnType, CarrierEntry, CarrierId, CarrierList, CarrierSettings, Message,
    MultiCarrierSettings, Mvno, Protocol,
};
use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const OUTPUT: &str = "apns-full-conf.xml";

#[allow(deprecated)]
fn extractor(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("apns-extract").expect("binary");
    cmd.current_dir(workdir).env("RUST_LOG", "warn");
    cmd
}

fn entry(name: &str, mcc_mnc: &str, mvno: Option<Mvno>) -> CarrierEntry {
    CarrierEntry {
        canonical_name: Some(name.to_string()),
        carrier_id: Some(CarrierId {
            mcc_mnc: Some(mcc_mnc.to_string()),
            mvno,
        }),
    }
}

fn settings(name: &str, apns: Vec<ApnItem>) -> CarrierSettings {
    CarrierSettings {
        canonical_name: Some(name.to_string()),
        version: Some(1),
        apns: Some(ApnList { apn: apns }),
    }
}

fn write_record(dir: &Path, file: &str, message: &impl Message) {
    fs::write(dir.join(file), message.encode_to_vec()).unwrap();
}

/// Index: op1 (gid1 MVNO), op2. op1 is a single record, op2 lives in others.pb.
fn setup_dump(dir: &Path) {
    write_record(
        dir,
        "carrier_list.pb",
        &CarrierList {
            entry: vec![
                entry("op1", "310260", Some(Mvno::Gid1("BA00".to_string()))),
                entry("op2", "26202", None),
            ],
            version: Some(1),
        },
    );
    write_record(
        dir,
        "op1.pb",
        &settings(
            "op1",
            vec![ApnItem {
                name: Some("Op One".to_string()),
                value: Some("op1.apn".to_string()),
                r#type: vec![ApnType::Default as i32],
                ..Default::default()
            }],
        ),
    );
    write_record(
        dir,
        "others.pb",
        &MultiCarrierSettings {
            version: Some(1),
            setting: vec![settings(
                "op2",
                vec![
                    ApnItem {
                        name: Some("Vodafone Web".to_string()),
                        value: Some("web.vodafone.de".to_string()),
                        r#type: vec![ApnType::Default as i32, ApnType::Supl as i32],
                        protocol: Some(Protocol::Ipv4v6 as i32),
                        carrier_enabled: Some(true),
                        ..Default::default()
                    },
                    ApnItem {
                        name: Some("Vodafone MMS".to_string()),
                        value: Some("event.vodafone.de".to_string()),
                        r#type: vec![ApnType::Mms as i32],
                        mmsc: Some("http://139.7.24.1/servlets/mms".to_string()),
                        mmsc_proxy: Some("139.7.29.17".to_string()),
                        mmsc_proxy_port: Some("80".to_string()),
                        ..Default::default()
                    },
                ],
            )],
        },
    );
}

#[test]
fn writes_document_in_legacy_layout() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    setup_dump(input.path());

    extractor(work.path()).arg(input.path()).assert().success();

    let text = fs::read_to_string(work.path().join(OUTPUT)).unwrap();
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
        "\n",
        "<apns version=\"8\">\n",
        "\n",
        "  <apn carrier=\"Op One\"\n",
        "      mcc=\"310\"\n",
        "      mnc=\"260\"\n",
        "      apn=\"op1.apn\"\n",
        "      type=\"default\"\n",
        "      mvno_type=\"gid\"\n",
        "      mvno_match_data=\"BA00\"\n",
        "  />\n",
        "\n",
        "  <apn carrier=\"Vodafone Web\"\n",
        "      mcc=\"262\"\n",
        "      mnc=\"02\"\n",
        "      apn=\"web.vodafone.de\"\n",
        "      type=\"default,supl\"\n",
        "      protocol=\"IPV4V6\"\n",
        "      carrier_enabled=\"true\"\n",
        "  />\n",
        "\n",
        "  <apn carrier=\"Vodafone MMS\"\n",
        "      mcc=\"262\"\n",
        "      mnc=\"02\"\n",
        "      apn=\"event.vodafone.de\"\n",
        "      mmsc=\"http://139.7.24.1/servlets/mms\"\n",
        "      mmsproxy=\"139.7.29.17\"\n",
        "      mmsport=\"80\"\n",
        "      type=\"mms\"\n",
        "  />\n",
        "\n",
        "</apns>\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn json_summary_reports_counts() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    setup_dump(input.path());

    let output = extractor(work.path())
        .arg(input.path())
        .arg("--json")
        .arg("--output")
        .arg("out/apns.xml")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["apn_blocks"], 3);
    assert_eq!(body["stats"]["entries"], 2);
    assert_eq!(body["stats"]["files"], 3);
    assert_eq!(body["stats"]["single_records"], 1);
    assert_eq!(body["stats"]["combined_blocks"], 1);
    assert!(work.path().join("out/apns.xml").exists());
    assert!(!work.path().join(OUTPUT).exists());
}

#[test]
fn duplicate_definition_aborts_before_output() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    setup_dump(input.path());
    write_record(input.path(), "op2.pb", &settings("op2", vec![]));

    extractor(work.path())
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate definition of carrier 'op2'"));

    assert!(!work.path().join(OUTPUT).exists());
}

#[test]
fn unresolved_index_entry_aborts() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    setup_dump(input.path());
    fs::remove_file(input.path().join("op1.pb")).unwrap();

    extractor(work.path())
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No settings for carrier 'op1'"));

    assert!(!work.path().join(OUTPUT).exists());
}

#[test]
fn malformed_record_aborts() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    setup_dump(input.path());
    fs::write(input.path().join("broken.pb"), b"\x0a\x05ab").unwrap();

    extractor(work.path())
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.pb"));

    assert!(!work.path().join(OUTPUT).exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let input = tempdir().unwrap();
    let work = tempdir().unwrap();
    fs::write(work.path().join(OUTPUT), "previous").unwrap();

    extractor(work.path())
        .arg(input.path().join("missing"))
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(work.path().join(OUTPUT)).unwrap(), "previous");
}

#[test]
fn input_directory_is_required() {
    let work = tempdir().unwrap();
    extractor(work.path()).assert().failure();
}
