//! Failure handling between the live table and `column_metadata`.

use crm_admin::{ColumnType, Db, Strategy};
use crm_core::Residue;
use pretty_assertions::assert_eq;
use tests::{assert_classified, assert_ok, tests, DbTest, Faults};

async fn live_columns(db: &Db) -> Vec<String> {
    assert_ok!(db.columns().list_schema().await)
        .into_iter()
        .filter(|c| c.is_custom())
        .map(|c| c.column_name)
        .collect()
}

async fn metadata_insert_failure_is_rolled_back(mut test: DbTest) {
    let db = test.setup_db(Strategy::Transactional).await;
    test.faults().fail_once(Faults::insert_into("column_metadata"));

    let err = assert_classified!(
        db.columns().add_column("Score", ColumnType::Integer, None).await,
        is_metadata_failure
    );
    assert!(err.root().is_driver());

    assert_eq!(
        test.log().ddl(),
        ["begin", "add custom_score", "rollback"]
    );
    assert!(live_columns(&db).await.is_empty());
    assert!(assert_ok!(db.columns().list_columns().await).is_empty());
}

async fn metadata_insert_failure_is_compensated(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    test.faults().fail_once(Faults::insert_into("column_metadata"));

    let err = assert_classified!(
        db.columns().add_column("Score", ColumnType::Integer, None).await,
        is_metadata_failure
    );
    assert!(!err.is_dangling_metadata());

    assert_eq!(test.log().ddl(), ["add custom_score", "drop custom_score"]);
    assert!(live_columns(&db).await.is_empty());
    assert!(assert_ok!(db.columns().audit().await).is_consistent());
}

async fn compensation_is_retried(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    test.faults()
        .fail_once(Faults::insert_into("column_metadata"))
        .fail_times(2, Faults::drop_column);

    assert_classified!(
        db.columns().add_column("Score", ColumnType::Integer, None).await,
        is_metadata_failure
    );

    assert_eq!(
        test.log().ddl(),
        [
            "add custom_score",
            "drop custom_score !",
            "drop custom_score !",
            "drop custom_score",
        ]
    );
    assert!(live_columns(&db).await.is_empty());
}

async fn failed_compensation_leaves_orphan(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    test.faults()
        .fail_once(Faults::insert_into("column_metadata"))
        .fail_always(Faults::drop_column);

    let err = assert_classified!(
        db.columns().add_column("Score", ColumnType::Integer, None).await,
        is_unrepaired_inconsistency
    );
    assert_eq!(
        err.residue(),
        Some(&Residue::OrphanColumn {
            column: "custom_score".into()
        })
    );

    // The metadata failure stays attached as the cause
    assert!(err.chain().any(|cause| cause.is_metadata_failure()));

    // One attempt plus the configured retries
    let drops = test.log().ddl().iter().filter(|op| op.starts_with("drop")).count();
    assert_eq!(drops, 4);

    test.faults().clear();

    let report = assert_ok!(db.columns().audit().await);
    assert_eq!(report.orphan_columns.len(), 1);
    assert_eq!(report.orphan_columns[0].column_name, "custom_score");
    assert!(report.dangling_descriptors.is_empty());
}

async fn structural_failure_stops_before_metadata(mut test: DbTest) {
    for strategy in [Strategy::Transactional, Strategy::Compensating] {
        let db = test.setup_db(strategy).await;
        test.faults().fail_once(Faults::add_column);

        let err = assert_classified!(
            db.columns().add_column("Score", ColumnType::Integer, None).await,
            is_structural_failure
        );
        assert!(err.root().is_driver());

        assert!(assert_ok!(db.columns().list_columns().await).is_empty());
        assert!(live_columns(&db).await.is_empty());
    }
}

async fn rename_metadata_failure_is_compensated(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    let column = assert_ok!(db.columns().add_column("Region", ColumnType::String, None).await);
    test.log().clear();
    test.faults().fail_once(Faults::update_of("column_metadata"));

    assert_classified!(
        db.columns().rename_column(column.id, "Territory").await,
        is_metadata_failure
    );

    assert_eq!(
        test.log().ddl(),
        [
            "rename custom_region custom_territory",
            "rename custom_territory custom_region",
        ]
    );
    assert_eq!(live_columns(&db).await, ["custom_region"]);
    assert_eq!(assert_ok!(db.columns().list_columns().await), [column]);
}

async fn rename_metadata_failure_is_rolled_back(mut test: DbTest) {
    let db = test.setup_db(Strategy::Transactional).await;
    let column = assert_ok!(db.columns().add_column("Region", ColumnType::String, None).await);
    test.faults().fail_once(Faults::update_of("column_metadata"));

    assert_classified!(
        db.columns().rename_column(column.id, "Territory").await,
        is_metadata_failure
    );

    assert_eq!(live_columns(&db).await, ["custom_region"]);
    assert_eq!(assert_ok!(db.columns().list_columns().await), [column]);
}

async fn failed_rename_compensation(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    let column = assert_ok!(db.columns().add_column("Region", ColumnType::String, None).await);

    // The forward rename succeeds, every rename back fails
    test.faults()
        .fail_once(Faults::update_of("column_metadata"))
        .fail_after(1, usize::MAX, Faults::rename_column);

    let err = assert_classified!(
        db.columns().rename_column(column.id, "Territory").await,
        is_unrepaired_inconsistency
    );
    assert_eq!(
        err.residue(),
        Some(&Residue::RenamedColumn {
            live: "custom_territory".into(),
            described: "custom_region".into(),
        })
    );

    test.faults().clear();

    let report = assert_ok!(db.columns().audit().await);
    assert_eq!(report.orphan_columns[0].column_name, "custom_territory");
    assert_eq!(report.dangling_descriptors, [column]);
}

async fn delete_with_failing_metadata_dangles(mut test: DbTest) {
    let db = test.setup_db(Strategy::Compensating).await;
    let column = assert_ok!(db.columns().add_column("Score", ColumnType::Integer, None).await);
    test.log().clear();
    test.faults().fail_once(Faults::delete_from("column_metadata"));

    let err = assert_classified!(db.columns().delete_column(column.id).await, is_metadata_failure);
    assert!(err.is_dangling_metadata());

    // No compensation for a dropped column
    assert_eq!(test.log().ddl(), ["drop custom_score"]);

    let report = assert_ok!(db.columns().audit().await);
    assert!(report.orphan_columns.is_empty());
    assert_eq!(report.dangling_descriptors, [column.clone()]);

    // Dropping the absent column again succeeds and clears the descriptor
    assert_ok!(db.columns().delete_column(column.id).await);
    assert!(assert_ok!(db.columns().audit().await).is_consistent());
}

async fn delete_with_failing_metadata_rolls_back(mut test: DbTest) {
    let db = test.setup_db(Strategy::Transactional).await;
    let column = assert_ok!(db.columns().add_column("Score", ColumnType::Integer, None).await);
    test.faults().fail_once(Faults::delete_from("column_metadata"));

    let err = assert_classified!(db.columns().delete_column(column.id).await, is_metadata_failure);
    assert!(!err.is_dangling_metadata());

    assert_eq!(live_columns(&db).await, ["custom_score"]);
    assert!(assert_ok!(db.columns().audit().await).is_consistent());
}

async fn auto_picks_transactional(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    assert!(test.capability().transactional_ddl);

    assert_ok!(db.columns().add_column("Score", ColumnType::Integer, None).await);
    assert_eq!(
        test.log().ddl(),
        ["begin", "add custom_score", "commit"]
    );
}

tests!(
    metadata_insert_failure_is_rolled_back,
    metadata_insert_failure_is_compensated,
    compensation_is_retried,
    failed_compensation_leaves_orphan,
    structural_failure_stops_before_metadata,
    rename_metadata_failure_is_compensated,
    rename_metadata_failure_is_rolled_back,
    failed_rename_compensation,
    delete_with_failing_metadata_dangles,
    delete_with_failing_metadata_rolls_back,
    auto_picks_transactional,
);
