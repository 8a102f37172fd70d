use crate::exec_log::{DriverOp, ExecLog};

use crm_core::{
    async_trait,
    driver::{
        operation::{AlterTableAction, Transaction},
        Capability, Connection, Driver, Operation, Response,
    },
    Error, Result, Schema,
};

use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

type Matcher = Box<dyn Fn(&Schema, &Operation) -> bool + Send>;

/// A driver wrapper that logs every operation and fails the ones matching
/// an armed fault.
#[derive(Debug)]
pub struct FaultyDriver {
    inner: Box<dyn Driver>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    faults: Faults,
}

impl FaultyDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            faults: Faults::default(),
        }
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    pub fn faults(&self) -> Faults {
        self.faults.clone()
    }
}

#[async_trait]
impl Driver for FaultyDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(FaultyConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log.clone(),
            faults: self.faults.clone(),
        }))
    }
}

#[derive(Debug)]
struct FaultyConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    faults: Faults,
}

#[async_trait]
impl Connection for FaultyConnection {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn exec(&mut self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let result = if self.faults.trip(schema, &operation) {
            Err(Error::driver(std::io::Error::other("injected fault")))
        } else {
            self.inner.exec(schema, operation).await
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                failed: result.is_err(),
            });

        result
    }
}

/// Faults armed on a [`FaultyDriver`].
///
/// Each fault fails the next `times` operations it matches, then disarms.
#[derive(Clone, Default)]
pub struct Faults {
    armed: Arc<Mutex<Vec<Fault>>>,
}

struct Fault {
    matcher: Matcher,
    skip: usize,
    remaining: usize,
}

impl Faults {
    /// Fails every matching operation until [`Faults::clear`] is called.
    pub fn fail_always(
        &self,
        matcher: impl Fn(&Schema, &Operation) -> bool + Send + 'static,
    ) -> &Self {
        self.fail_times(usize::MAX, matcher)
    }

    pub fn fail_once(
        &self,
        matcher: impl Fn(&Schema, &Operation) -> bool + Send + 'static,
    ) -> &Self {
        self.fail_times(1, matcher)
    }

    pub fn fail_times(
        &self,
        times: usize,
        matcher: impl Fn(&Schema, &Operation) -> bool + Send + 'static,
    ) -> &Self {
        self.fail_after(0, times, matcher)
    }

    /// Lets the first `skip` matching operations through, then fails the next
    /// `times`.
    pub fn fail_after(
        &self,
        skip: usize,
        times: usize,
        matcher: impl Fn(&Schema, &Operation) -> bool + Send + 'static,
    ) -> &Self {
        self.armed.lock().unwrap().push(Fault {
            matcher: Box::new(matcher),
            skip,
            remaining: times,
        });
        self
    }

    pub fn clear(&self) {
        self.armed.lock().unwrap().clear();
    }

    fn trip(&self, schema: &Schema, operation: &Operation) -> bool {
        let mut armed = self.armed.lock().unwrap();

        for fault in armed.iter_mut() {
            if fault.remaining == 0 || !(fault.matcher)(schema, operation) {
                continue;
            }

            if fault.skip > 0 {
                fault.skip -= 1;
                continue;
            }

            fault.remaining -= 1;
            return true;
        }

        false
    }

    /// Matches inserts into the named table.
    pub fn insert_into(table: &'static str) -> impl Fn(&Schema, &Operation) -> bool + Send {
        move |schema: &Schema, op: &Operation| {
            matches!(op, Operation::Insert(insert) if schema.table(insert.table).name == table)
        }
    }

    /// Matches updates of the named table.
    pub fn update_of(table: &'static str) -> impl Fn(&Schema, &Operation) -> bool + Send {
        move |schema: &Schema, op: &Operation| {
            matches!(op, Operation::Update(update) if schema.table(update.table).name == table)
        }
    }

    /// Matches deletes from the named table.
    pub fn delete_from(table: &'static str) -> impl Fn(&Schema, &Operation) -> bool + Send {
        move |schema: &Schema, op: &Operation| {
            matches!(op, Operation::Delete(delete) if schema.table(delete.table).name == table)
        }
    }

    pub fn add_column(_: &Schema, op: &Operation) -> bool {
        matches!(
            op,
            Operation::AlterTable(alter)
                if matches!(alter.action, AlterTableAction::AddColumnIfNotExists(_))
        )
    }

    pub fn rename_column(_: &Schema, op: &Operation) -> bool {
        matches!(
            op,
            Operation::AlterTable(alter)
                if matches!(alter.action, AlterTableAction::RenameColumn { .. })
        )
    }

    pub fn drop_column(_: &Schema, op: &Operation) -> bool {
        matches!(
            op,
            Operation::AlterTable(alter)
                if matches!(alter.action, AlterTableAction::DropColumnIfExists(_))
        )
    }

    pub fn commit(_: &Schema, op: &Operation) -> bool {
        matches!(op, Operation::Transaction(Transaction::Commit))
    }
}

impl std::fmt::Debug for Faults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let armed = self.armed.lock().unwrap();
        f.debug_struct("Faults")
            .field("armed", &armed.len())
            .finish()
    }
}
