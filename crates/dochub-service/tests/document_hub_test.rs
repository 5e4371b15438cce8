//! End-to-end behaviour of the document hub.

mod common;

use std::collections::HashSet;

use dochub_core::error::ErrorKind;
use dochub_core::types::{FileId, FolderId};
use dochub_entity::{FolderItem, NodeRef, UploadBlob};
use dochub_service::{ViewQuery, flatten_forest};

use common::{deep_forest, file, hub, scenario_forest};

#[test]
fn test_flatten_returns_every_reachable_file() {
    for forest in [scenario_forest(), deep_forest(), Vec::new()] {
        let expected: usize = forest.iter().map(FolderItem::file_count).sum();
        let hub = hub(forest);
        assert_eq!(hub.flatten().len(), expected);
        assert_eq!(hub.tree().total_files(), expected);
    }
}

#[test]
fn test_flatten_path_for_nested_payslip() {
    let forest = vec![FolderItem::new("hr", "HR").with_folder(
        FolderItem::new("payslips", "Payslips").with_file(file("p1", "Payslip_Jan.pdf")),
    )];
    let flat = hub(forest).flatten();
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].folder_path, "HR / Payslips");
}

#[test]
fn test_empty_search_matches_unfiltered_view() {
    let hub = hub(deep_forest());
    let all = hub.matching(&ViewQuery::default()).expect("view");
    let empty = hub
        .matching(&ViewQuery {
            search: Some(String::new()),
            ..Default::default()
        })
        .expect("view");
    assert_eq!(all, empty);
}

#[test]
fn test_pages_reconstruct_filtered_sequence() {
    let hub = hub(deep_forest());
    for size in 1..=7u64 {
        let base = ViewQuery {
            search: Some("doc".to_string()),
            page_size: Some(size),
            ..Default::default()
        };
        let expected = hub.matching(&base).expect("view");
        let first = hub.view(&base).expect("page");
        assert_eq!(first.total_pages, (expected.len() as u64).div_ceil(size).max(1));

        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages {
            let query = ViewQuery {
                page: Some(page),
                ..base.clone()
            };
            rebuilt.extend(hub.view(&query).expect("page").items);
        }
        let ids: HashSet<_> = rebuilt.iter().map(|f| f.id.clone()).collect();
        assert_eq!(ids.len(), rebuilt.len(), "no duplicates for size {size}");
        assert_eq!(rebuilt, expected);
    }
}

#[test]
fn test_upload_appends_to_existing_files() {
    let forest = vec![FolderItem::new("1", "Personal").with_file(file("f1", "Aadhar.pdf"))];
    let mut hub = hub(forest);
    let target = FolderId::from("1");

    hub.upload(
        Some(&target),
        vec![UploadBlob::new("PAN.pdf", 2_000), UploadBlob::new("Passport.pdf", 3_000)],
    )
    .expect("upload");

    let node = hub.tree().require_folder(&target).expect("folder");
    assert_eq!(node.files.len(), 3);
    let first = hub.tree().require_file(&node.files[0]).expect("file");
    assert_eq!(first.item.id, FileId::from("f1"));
    assert_eq!(first.item.name, "Aadhar.pdf");
}

#[test]
fn test_rename_folder_is_node_local() {
    let mut hub = hub(deep_forest());
    let target = FolderId::from("r1-c0");
    let before = hub.tree().require_folder(&target).expect("folder").clone();
    let sibling_name = hub
        .tree()
        .require_folder(&FolderId::from("r1-c1"))
        .expect("sibling")
        .name
        .clone();

    hub.rename(&NodeRef::Folder(target.clone()), "Renamed")
        .expect("rename");

    let after = hub.tree().require_folder(&target).expect("folder");
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, "Renamed");
    assert_eq!(after.folders, before.folders);
    assert_eq!(after.files, before.files);
    for child in &after.folders {
        assert_eq!(hub.tree().require_folder(child).expect("child").name, "Empty");
    }
    let sibling = hub.tree().require_folder(&FolderId::from("r1-c1")).expect("sibling");
    assert_eq!(sibling.name, sibling_name);
}

#[test]
fn test_end_to_end_scenario() {
    let hub = hub(scenario_forest());

    let flat = hub.flatten();
    let pairs: Vec<(&str, &str)> = flat
        .iter()
        .map(|f| (f.name.as_str(), f.folder_path.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Aadhar.pdf", "Personal"), ("Payslip_Jan.pdf", "HR / Payslips")]
    );
    assert_eq!(flatten_forest(&scenario_forest()), flat);

    let found = hub
        .matching(&ViewQuery {
            search: Some("payslip".to_string()),
            ..Default::default()
        })
        .expect("view");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Payslip_Jan.pdf");
}

#[test]
fn test_uploaded_file_path_is_recomputed_on_flatten() {
    let mut hub = hub(scenario_forest());
    let created = hub
        .upload(Some(&FolderId::from("2-1")), vec![UploadBlob::new("Payslip_Feb.pdf", 10)])
        .expect("upload");
    assert_eq!(created[0].folder_path, "Payslips");

    let flat = hub.flatten();
    let uploaded = flat.iter().find(|f| f.id == created[0].id).expect("present");
    assert_eq!(uploaded.folder_path, "HR / Payslips");
}

#[test]
fn test_errors_are_reported_not_ignored() {
    let mut hub = hub(scenario_forest());

    let err = hub
        .upload(None, vec![UploadBlob::new("a.pdf", 1)])
        .expect_err("no folder");
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = hub
        .rename(&NodeRef::Folder(FolderId::from("1")), "")
        .expect_err("blank");
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = hub
        .rename(&NodeRef::File(FileId::from("gone")), "x.pdf")
        .expect_err("missing");
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = hub
        .view(&ViewQuery {
            scope: Some(FolderId::from("gone")),
            ..Default::default()
        })
        .expect_err("missing scope");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_export_import_preserves_tree() {
    let mut hub = hub(deep_forest());
    hub.upload(Some(&FolderId::from("r0")), vec![UploadBlob::new("new.pdf", 5)])
        .expect("upload");

    let json = serde_json::to_string(&hub.export()).expect("serialize");
    let forest: Vec<FolderItem> = serde_json::from_str(&json).expect("deserialize");
    let reloaded = common::hub(forest);
    assert_eq!(reloaded.flatten(), hub.flatten());
}
