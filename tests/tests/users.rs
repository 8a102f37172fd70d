use crm_admin::{
    Authenticator, CreateUser, Credentials, Sessions, Strategy, UpdateUser, UserDirectory,
};
use pretty_assertions::assert_eq;
use tests::{assert_classified, assert_none, assert_ok, assert_some, tests, DbTest};

fn ada() -> CreateUser {
    CreateUser {
        email: "ada@example.com".into(),
        password: "analytical".into(),
        name: "Ada".into(),
        phone_number: "+44 20 7946 0000".into(),
    }
}

async fn create_and_read(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let users = db.users();

    let user = assert_ok!(users.create(ada()).await);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.created_at, user.updated_at);

    // Only the hash is stored
    assert!(user.password_hash.verify("analytical"));
    assert!(!user.password_hash.to_string().contains("analytical"));

    let found = assert_some!(assert_ok!(users.get_by_email("ada@example.com").await));
    assert_eq!(found, user);

    assert_eq!(assert_ok!(users.list().await), [user]);
    assert_none!(assert_ok!(users.get_by_email("bob@example.com").await));
}

async fn validation_happens_before_storage(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let users = db.users();

    let invalid = [
        CreateUser { email: "".into(), ..ada() },
        CreateUser { email: "ada.example.com".into(), ..ada() },
        CreateUser { password: "short".into(), ..ada() },
        CreateUser { name: " ".into(), ..ada() },
        CreateUser { phone_number: "".into(), ..ada() },
        CreateUser { phone_number: "12345".into(), ..ada() },
        CreateUser { phone_number: "call me maybe".into(), ..ada() },
    ];

    for user in invalid {
        assert_classified!(users.create(user).await, is_validation);
    }

    assert!(test.log().is_empty());
}

async fn email_and_phone_are_unique(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let users = db.users();

    assert_ok!(users.create(ada()).await);

    assert_classified!(
        users
            .create(CreateUser {
                phone_number: "+1 555 010 0000".into(),
                ..ada()
            })
            .await,
        is_duplicate
    );

    assert_classified!(
        users
            .create(CreateUser {
                email: "grace@example.com".into(),
                ..ada()
            })
            .await,
        is_duplicate
    );

    assert_eq!(assert_ok!(users.list().await).len(), 1);
}

async fn partial_update(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let users = db.users();
    let user = assert_ok!(users.create(ada()).await);

    let updated = assert_ok!(
        users
            .update(
                user.id,
                UpdateUser {
                    name: Some("Ada Lovelace".into()),
                    password: Some("difference engine".into()),
                    ..Default::default()
                },
            )
            .await
    );

    assert_eq!(updated.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.phone_number, user.phone_number);
    assert!(updated.password_hash.verify("difference engine"));
    assert!(!updated.password_hash.verify("analytical"));
    assert!(updated.updated_at >= user.updated_at);
    assert_eq!(updated.created_at, user.created_at);

    assert_classified!(
        users
            .update(
                user.id,
                UpdateUser {
                    email: Some("not an email".into()),
                    ..Default::default()
                },
            )
            .await,
        is_validation
    );
}

async fn update_and_delete_unknown(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let id = uuid::Uuid::new_v4();

    assert_classified!(
        db.users()
            .update(
                id,
                UpdateUser {
                    name: Some("Nobody".into()),
                    ..Default::default()
                }
            )
            .await,
        is_record_not_found
    );
    assert_classified!(db.users().delete(id).await, is_record_not_found);
}

async fn delete(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let user = assert_ok!(db.users().create(ada()).await);

    assert_ok!(db.users().delete(user.id).await);
    assert!(assert_ok!(db.users().list().await).is_empty());
}

async fn login_through_directory(mut test: DbTest) {
    let db = test.setup_db(Strategy::Auto).await;
    let user = assert_ok!(db.users().create(ada()).await);

    let directory = UserDirectory::new(db.clone());
    let sessions = Sessions::new(&db.config().sessions);

    let session = assert_ok!(
        sessions
            .login(&directory, &Credentials::new("ada@example.com", "analytical"))
            .await
    );
    assert_eq!(session.identity.user_id, Some(user.id));
    assert_eq!(assert_ok!(sessions.validate(&session.token)), session);

    let wrong_password = assert_classified!(
        directory
            .authenticate(&Credentials::new("ada@example.com", "analytic"))
            .await,
        is_authentication_failed
    );
    let unknown_email = assert_classified!(
        directory
            .authenticate(&Credentials::new("eve@example.com", "analytical"))
            .await,
        is_authentication_failed
    );
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());

    assert!(sessions.revoke(&session.token));
    assert_classified!(sessions.validate(&session.token), is_authentication_failed);
}

tests!(
    create_and_read,
    validation_happens_before_storage,
    email_and_phone_are_unique,
    partial_update,
    update_and_delete_unknown,
    delete,
    login_through_directory,
);
