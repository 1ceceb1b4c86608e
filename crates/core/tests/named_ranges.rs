//! Named range registration and removal.

mod common;
use common::*;

use sheetlink_core::model::{
    AddNamedRange, BatchRequest, DeleteNamedRange, NewNamedRange, SheetGridRange,
};
use sheetlink_core::{
    ConnectionConfig, CreateNamedRangeOptions, DeleteNamedRangeOptions, ErrorKind, GridRange,
    SheetsError,
};

fn named(name: &str, range: &str) -> CreateNamedRangeOptions {
    CreateNamedRangeOptions {
        name: name.to_string(),
        range: range.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_named_range_by_sheet_name() {
    let conn = sheet1(FakeService {
        metadata: metadata(&[("Sheet1", 7)], &[]),
        ..FakeService::default()
    });

    conn.create_named_range(CreateNamedRangeOptions {
        sheet_name: Some("Sheet1".to_string()),
        ..named("n", "A1:B4")
    })
    .await
    .unwrap();

    assert_eq!(
        conn.service().calls(),
        vec![
            Call::Describe,
            Call::Batch(vec![BatchRequest::AddNamedRange(AddNamedRange {
                named_range: NewNamedRange {
                    name: "n".to_string(),
                    range: SheetGridRange {
                        sheet_id: 7,
                        bounds: GridRange {
                            start_row_index: 0,
                            end_row_index: 4,
                            start_column_index: 0,
                            end_column_index: 2,
                        },
                    },
                },
            })]),
        ]
    );
}

#[tokio::test]
async fn test_create_named_range_by_sheet_id() {
    let conn = sheet1(FakeService::default());
    conn.create_named_range(CreateNamedRangeOptions {
        sheet_id: Some(42),
        ..named("totals", "C2:E10")
    })
    .await
    .unwrap();

    match &conn.service().calls()[..] {
        [Call::Batch(requests)] => match &requests[..] {
            [BatchRequest::AddNamedRange(add)] => {
                assert_eq!(add.named_range.range.sheet_id, 42);
                assert_eq!(
                    add.named_range.range.bounds,
                    GridRange {
                        start_row_index: 1,
                        end_row_index: 10,
                        start_column_index: 2,
                        end_column_index: 5,
                    }
                );
            }
            other => panic!("unexpected requests: {other:?}"),
        },
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_named_range_defaults_to_bound_sheet() {
    let conn = sheet1(FakeService::default());
    conn.create_named_range(named("n", "A1:A1")).await.unwrap();

    match conn.service().batches().as_slice() {
        [BatchRequest::AddNamedRange(add)] => assert_eq!(add.named_range.range.sheet_id, 0),
        other => panic!("unexpected requests: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_named_range_invalid_range() {
    let conn = sheet1(FakeService::default());
    for bad in ["A1", "A1:", "A1:B"] {
        let err = conn.create_named_range(named("n", bad)).await.unwrap_err();
        assert!(matches!(err, SheetsError::InvalidRange(_)), "{bad}");
    }
    assert!(conn.service().calls().is_empty());
}

#[tokio::test]
async fn test_create_named_range_without_sheet() {
    let conn = connect(ConnectionConfig::new("id"), FakeService::default());
    let err = conn
        .create_named_range(named("n", "A1:B4"))
        .await
        .unwrap_err();
    assert!(matches!(err, SheetsError::MissingSheetReference));
    assert!(conn.service().calls().is_empty());
}

#[tokio::test]
async fn test_create_named_range_unknown_sheet() {
    let conn = sheet1(FakeService::default());
    let err = conn
        .create_named_range(CreateNamedRangeOptions {
            sheet_name: Some("Ghost".to_string()),
            ..named("n", "A1:B4")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SheetsError::SheetNotFound { ref name } if name == "Ghost"));
    assert_eq!(conn.service().calls(), vec![Call::Describe]);
}

#[tokio::test]
async fn test_delete_named_range() {
    let conn = sheet1(FakeService::default());
    conn.delete_named_range(DeleteNamedRangeOptions {
        name: "n".to_string(),
    })
    .await
    .unwrap();

    assert_eq!(
        conn.service().batches(),
        vec![BatchRequest::DeleteNamedRange(DeleteNamedRange {
            named_range_id: "nr-1".to_string()
        })]
    );
}

#[tokio::test]
async fn test_delete_named_range_not_found() {
    let conn = sheet1(FakeService::default());
    let err = conn
        .delete_named_range(DeleteNamedRangeOptions {
            name: "missing".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "named range: missing not found");
    assert_eq!(conn.service().calls(), vec![Call::Describe]);
}
