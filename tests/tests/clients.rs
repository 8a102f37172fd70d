use crm_admin::{ClientUpdate, ColumnType, NewClient, Strategy};
use pretty_assertions::assert_eq;
use tests::{assert_classified, assert_none, assert_ok, assert_some, tests, DbTest};

fn acme() -> NewClient {
    NewClient {
        name: "Acme".into(),
        email: "sales@acme.test".into(),
        phone: "555 0100".into(),
    }
}

async fn crud(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let clients = db.clients();

    let client = assert_ok!(clients.create(acme()).await);
    assert_eq!(client.name, "Acme");

    assert_eq!(assert_some!(assert_ok!(clients.get(client.id).await)), client);
    assert_eq!(assert_ok!(clients.list().await), [client.clone()]);

    let updated = assert_ok!(
        clients
            .update(
                client.id,
                ClientUpdate {
                    phone: Some("555 0199".into()),
                    ..Default::default()
                }
            )
            .await
    );
    assert_eq!(updated.phone, "555 0199");
    assert_eq!(updated.name, client.name);

    assert_ok!(clients.delete(client.id).await);
    assert_none!(assert_ok!(clients.get(client.id).await));
    assert_classified!(clients.delete(client.id).await, is_record_not_found);
}

async fn name_is_required(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    assert_classified!(
        db.clients()
            .create(NewClient {
                name: "  ".into(),
                ..acme()
            })
            .await,
        is_validation
    );
    assert!(test.log().is_empty());
}

async fn custom_columns_get_defaults(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;

    let before = assert_ok!(db.clients().create(acme()).await);

    // Adding columns to a populated table fills existing rows with defaults
    assert_ok!(db.columns().add_column("Score", ColumnType::Integer, None).await);
    assert_ok!(db.columns().add_column("Active", ColumnType::Boolean, None).await);
    assert_ok!(db.columns().add_column("Notes", ColumnType::String, None).await);
    assert_ok!(db.columns().add_column("Signed On", ColumnType::Date, None).await);
    assert_ok!(db.columns().add_column("Seen At", ColumnType::Timestamp, None).await);

    let live: Vec<_> = assert_ok!(db.columns().list_schema().await)
        .into_iter()
        .map(|column| column.column_name)
        .filter(|name| name.starts_with("custom_"))
        .collect();
    assert_eq!(
        live,
        [
            "custom_score",
            "custom_active",
            "custom_notes",
            "custom_signed_on",
            "custom_seen_at"
        ]
    );

    let after = assert_ok!(
        db.clients()
            .create(NewClient {
                name: "Globex".into(),
                ..NewClient::default()
            })
            .await
    );

    let all = assert_ok!(db.clients().list().await);
    assert_eq!(all.len(), 2);
    assert!(all.contains(&before));
    assert!(all.contains(&after));
}

tests!(crud, name_is_required, custom_columns_get_defaults);
