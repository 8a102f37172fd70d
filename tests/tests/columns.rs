use crm_admin::{ColumnType, Strategy};
use pretty_assertions::assert_eq;
use tests::{assert_classified, assert_ok, tests, DbTest};

async fn add_integer_column(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    let column = assert_ok!(
        db.columns()
            .add_column("Lead Score", ColumnType::Integer, None)
            .await
    );
    assert_eq!(column.column_name, "custom_lead_score");
    assert_eq!(column.column_type, ColumnType::Integer);
    assert_eq!(column.dropdown_options, None);
    assert_eq!(column.display_name(), "lead score");

    let live = assert_ok!(db.columns().list_schema().await);
    let added = live
        .iter()
        .find(|c| c.column_name == "custom_lead_score")
        .expect("live column");
    assert_eq!(added.data_type, "integer");

    // Appended after the built-in columns
    assert_eq!(live.last(), Some(added));

    let described = assert_ok!(db.columns().list_columns().await);
    assert_eq!(described, [column]);

    assert!(assert_ok!(db.columns().audit().await).is_consistent());
}

async fn add_column_of_every_type(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let columns = db.columns();

    for ty in ColumnType::ALL {
        let options = ty.is_dropdown().then(|| vec!["a".to_string()]);
        let column = assert_ok!(columns.add_column(&format!("field {ty}"), ty, options).await);
        assert_eq!(column.column_type, ty);
    }

    let report = assert_ok!(columns.audit().await);
    assert!(report.is_consistent(), "{report:#?}");
    assert_eq!(
        assert_ok!(columns.list_columns().await).len(),
        ColumnType::ALL.len()
    );
}

async fn columns_are_listed_newest_first(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let columns = db.columns();

    for name in ["First", "Second", "Third"] {
        assert_ok!(columns.add_column(name, ColumnType::String, None).await);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let names: Vec<_> = assert_ok!(columns.list_columns().await)
        .into_iter()
        .map(|c| c.column_name.to_string())
        .collect();
    assert_eq!(names, ["custom_third", "custom_second", "custom_first"]);
}

async fn add_dropdown_then_rename(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let columns = db.columns();

    let region = assert_ok!(
        columns
            .add_column(
                "Region",
                ColumnType::Dropdown,
                Some(vec![" North ".into(), "".into(), "South".into()]),
            )
            .await
    );
    assert_eq!(region.column_name, "custom_region");
    assert_eq!(
        region.dropdown_options,
        Some(vec![" North ".to_string(), "South".to_string()])
    );

    let territory = assert_ok!(columns.rename_column(region.id, "Territory").await);
    assert_eq!(territory.id, region.id);
    assert_eq!(territory.column_name, "custom_territory");
    assert_eq!(territory.column_type, ColumnType::Dropdown);
    assert_eq!(territory.dropdown_options, region.dropdown_options);
    assert_eq!(territory.created_at, region.created_at);

    let live: Vec<_> = assert_ok!(columns.list_schema().await)
        .into_iter()
        .map(|c| c.column_name)
        .collect();
    assert!(live.contains(&"custom_territory".to_string()));
    assert!(!live.contains(&"custom_region".to_string()));

    assert!(assert_ok!(columns.audit().await).is_consistent());
}

async fn dropdown_without_options_changes_nothing(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    for options in [None, Some(vec![]), Some(vec!["  ".to_string()])] {
        assert_classified!(
            db.columns()
                .add_column("Stage", ColumnType::Dropdown, options)
                .await,
            is_validation
        );
    }

    assert!(test.log().is_empty(), "{:#?}", test.log());
    assert!(assert_ok!(db.columns().list_columns().await).is_empty());
}

async fn options_for_other_types_are_dropped(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    let column = assert_ok!(
        db.columns()
            .add_column("Notes", ColumnType::String, Some(vec!["x".into()]))
            .await
    );
    assert_eq!(column.dropdown_options, None);
}

async fn invalid_names(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    assert_classified!(
        db.columns().add_column("   ", ColumnType::String, None).await,
        is_validation
    );
    assert_classified!(
        db.columns().add_column("%%%", ColumnType::String, None).await,
        is_validation
    );

    assert!(test.log().is_empty());
}

async fn duplicate_add_is_rejected_before_ddl(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    assert_ok!(db.columns().add_column("Region", ColumnType::String, None).await);
    test.log().clear();

    // Derives the same identifier
    assert_classified!(
        db.columns().add_column("REGION", ColumnType::Integer, None).await,
        is_duplicate
    );

    assert!(test.log().ddl().is_empty(), "{:?}", test.log().ddl());
}

async fn rename_to_same_name(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let column = assert_ok!(db.columns().add_column("Region", ColumnType::String, None).await);
    test.log().clear();

    assert_classified!(
        db.columns().rename_column(column.id, "region").await,
        is_same_name
    );

    assert!(test.log().ddl().is_empty());
    assert_eq!(assert_ok!(db.columns().list_columns().await), [column]);
}

async fn rename_collision(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let columns = db.columns();

    let region = assert_ok!(columns.add_column("Region", ColumnType::String, None).await);
    assert_ok!(columns.add_column("Territory", ColumnType::String, None).await);
    test.log().clear();

    assert_classified!(
        columns.rename_column(region.id, "Territory").await,
        is_duplicate
    );
    assert!(test.log().ddl().is_empty());
}

async fn unknown_ids(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let id = uuid::Uuid::new_v4();

    assert_classified!(
        db.columns().rename_column(id, "Anything").await,
        is_record_not_found
    );
    assert_classified!(db.columns().delete_column(id).await, is_record_not_found);

    assert!(test.log().ddl().is_empty());
}

async fn delete_column(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let columns = db.columns();

    let kept = assert_ok!(columns.add_column("Kept", ColumnType::Boolean, None).await);
    let column = assert_ok!(columns.add_column("Score", ColumnType::Integer, None).await);

    assert_ok!(columns.delete_column(column.id).await);

    let live = assert_ok!(columns.list_schema().await);
    assert!(live.iter().all(|c| c.column_name != "custom_score"));
    assert_eq!(assert_ok!(columns.list_columns().await), [kept]);
    assert!(assert_ok!(columns.audit().await).is_consistent());
}

async fn list_schema_of_fresh_table(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    let live = assert_ok!(db.columns().list_schema().await);
    let names: Vec<_> = live.iter().map(|c| c.column_name.as_str()).collect();

    assert_eq!(
        names,
        ["id", "name", "email", "phone", "created_at", "updated_at"]
    );
    assert!(live.iter().all(|c| !c.is_custom()));
}

tests!(
    add_integer_column,
    add_column_of_every_type,
    columns_are_listed_newest_first,
    add_dropdown_then_rename,
    dropdown_without_options_changes_nothing,
    options_for_other_types_are_dropped,
    invalid_names,
    duplicate_add_is_rejected_before_ddl,
    rename_to_same_name,
    rename_collision,
    unknown_ids,
    delete_column,
    list_schema_of_fresh_table,
);
