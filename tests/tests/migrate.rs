use crm_admin::Strategy;
use tests::{assert_ok, tests, DbTest};

async fn migrate_is_idempotent(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    assert_ok!(db.migrate().await);
    assert_ok!(db.migrate().await);

    assert!(assert_ok!(db.columns().list_columns().await).is_empty());
    assert!(assert_ok!(db.users().list().await).is_empty());
    assert!(assert_ok!(db.clients().list().await).is_empty());
}

async fn migrate_keeps_data(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    let column = assert_ok!(
        db.columns()
            .add_column("Score", crm_admin::ColumnType::Integer, None)
            .await
    );

    assert_ok!(db.migrate().await);

    assert_eq!(assert_ok!(db.columns().list_columns().await), [column]);
}

tests!(migrate_is_idempotent, migrate_keeps_data);
