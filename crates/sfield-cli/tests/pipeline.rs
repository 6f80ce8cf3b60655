//! End-to-end runs of the generation pipeline.

use std::fs;
use std::path::Path;

use sfield_cli::pipeline::{evaluate, generate};
use sfield_cli::project::resolve_output_dir;
use sfield_ingest::IngestOptions;

const HEADER: &str = "objectName,label,fullname,type,description,inlineHelpText,text-length,text-caseSensitive,lookup-referenceTo,lookup-relationshipLabel,lookup-relationshipName,lookup-deleteConstraint";

fn write_definition(dir: &Path, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join("fields.csv");
    let mut contents = String::from(HEADER);
    for line in lines {
        contents.push('\n');
        contents.push_str(line);
    }
    contents.push('\n');
    fs::write(&path, contents).expect("write definition file");
    path
}

#[test]
fn generates_clean_rows_and_skips_broken_ones() {
    let dir = tempfile::tempdir().expect("temp dir");
    let definition = write_definition(
        dir.path(),
        &[
            "Account,Code,Code__c,Text,Customer code,Help,18,false,,,,",
            "Account,Parent,Parent__c,Lookup,Parent account,Help,,,Account,Children,Children,",
        ],
    );
    let output = dir.path().join("force-app");

    let result = generate(&definition, output.clone(), IngestOptions::default())
        .expect("generation runs");

    assert_eq!(result.path, output);
    assert_eq!(result.file_created, 1);
    assert_eq!(result.file_error, 0);
    // Missing deleteConstraint, then the invalid-value check.
    assert_eq!(result.field_errors, 2);
    assert_eq!(result.field_warnings, 0);

    let written = output.join("main/default/objects/Account/Code__c.field-meta.xml");
    let xml = fs::read_to_string(&written).expect("field file written");
    assert!(xml.contains("<fullname>Code__c</fullname>"));
    assert!(xml.contains("<length>18</length>"));
    assert!(!output
        .join("main/default/objects/Account/Parent__c.field-meta.xml")
        .exists());
}

#[test]
fn unsupported_type_counts_one_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let definition = write_definition(
        dir.path(),
        &["Account,Calc,Calc__c,Formula,Computed,Help,,,,,,"],
    );

    let evaluation = evaluate(&definition, IngestOptions::default()).expect("evaluation runs");

    assert!(evaluation.queued.is_empty());
    assert_eq!(evaluation.field_errors, 1);
    assert_eq!(evaluation.field_warnings, 0);
}

#[test]
fn missing_definition_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = generate(
        &dir.path().join("absent.csv"),
        dir.path().to_path_buf(),
        IngestOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn output_dir_comes_from_project_default_package() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("sfdx-project.json"),
        r#"{"packageDirectories":[{"path":"lib"},{"path":"force-app","default":true}],"sourceApiVersion":"58.0"}"#,
    )
    .expect("write project file");

    let resolved = resolve_output_dir(None, None, dir.path()).expect("project found");
    assert_eq!(resolved, dir.path().join("force-app"));

    let chosen = resolve_output_dir(None, Some("lib"), dir.path()).expect("package found");
    assert_eq!(chosen, dir.path().join("lib"));
}

#[test]
fn missing_project_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(resolve_output_dir(None, None, dir.path()).is_err());
}
