use crate::{ExecLog, FaultyDriver, Faults, Setup};

use crm_admin::{Config, Db, MutatorConfig, Strategy};
use crm_core::driver::Capability;

use std::{future::Future, sync::Arc, time::Duration};

/// Owns the runtime a test runs on and cleans up after it.
///
/// Tests use `#[test]` instead of `#[tokio::test]` so cleanup can block
/// before the test process exits, even when the test panics.
pub struct CrmTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Arc<S>,
}

impl<S: Setup> CrmTest<S> {
    /// Create a new CrmTest with a current-thread runtime.
    pub fn new(setup: S) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Arc::new(setup),
        }
    }

    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(DbTest) -> Fut,
        Fut: Future<Output = ()>,
    {
        let test = DbTest::new(self.setup.clone());
        self.runtime.block_on(test_fn(test));
    }
}

impl<S: Setup> Drop for CrmTest<S> {
    fn drop(&mut self) {
        let setup = self.setup.clone();
        self.runtime.block_on(async {
            let _ = setup.cleanup().await;
        });
    }
}

/// Per-test access to the database under test.
pub struct DbTest {
    setup: Arc<dyn Setup>,
    log: ExecLog,
    faults: Faults,
}

impl DbTest {
    fn new(setup: Arc<dyn Setup>) -> Self {
        Self {
            setup,
            log: ExecLog::new(Default::default()),
            faults: Faults::default(),
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.setup.capability()
    }

    /// Connects with the given strategy, a short compensation backoff and
    /// migrated tables.
    pub async fn setup_db(&mut self, strategy: Strategy) -> Db {
        let mutator = MutatorConfig::default()
            .strategy(strategy)
            .compensation_backoff(Duration::from_millis(1));

        self.setup_db_with(Config::default().mutator(mutator)).await
    }

    pub async fn setup_db_with(&mut self, config: Config) -> Db {
        let driver = FaultyDriver::new(self.setup.driver().await.unwrap());
        self.log = driver.log();
        self.faults = driver.faults();

        let db = Db::builder().config(config).build(driver).await.unwrap();
        db.migrate().await.unwrap();

        self.log.clear();
        db
    }

    /// Operations executed since the database was set up
    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }

    pub fn faults(&self) -> &Faults {
        &self.faults
    }
}
