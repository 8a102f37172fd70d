/// Runs each listed `async fn(DbTest)` once per enabled database.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::CrmTest::new(
                        $crate::db::sqlite::SetupSqlite::new()
                    );

                    test.run_test(|test| async move {
                        super::$f(test).await;
                    });
                }
            )*
        }

        #[cfg(feature = "postgresql")]
        mod postgresql {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::CrmTest::new(
                        $crate::db::postgresql::SetupPostgreSQL::new()
                    );

                    test.run_test(|test| async move {
                        super::$f(test).await;
                    });
                }
            )*
        }
    };
}
