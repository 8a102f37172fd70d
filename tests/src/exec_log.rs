use crm_core::driver::{
    operation::{AlterTableAction, Transaction},
    Operation,
};

use std::{
    fmt,
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone)]
pub(crate) struct DriverOp {
    pub(crate) operation: Operation,
    pub(crate) failed: bool,
}

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log, and whether it
    /// failed
    #[track_caller]
    pub fn pop(&mut self) -> (Operation, bool) {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            panic!("no operations in log");
        } else {
            let driver_op = ops.remove(0);
            (driver_op.operation, driver_op.failed)
        }
    }

    /// Structural changes and transaction boundaries, in order, as short labels
    /// like `add custom_x`, `drop custom_x`, `rename custom_a custom_b`,
    /// `begin`. Failed operations are suffixed with ` !`.
    pub fn ddl(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| {
                let label = match &op.operation {
                    Operation::AlterTable(alter) => match &alter.action {
                        AlterTableAction::AddColumnIfNotExists(column) => {
                            format!("add {}", column.name)
                        }
                        AlterTableAction::RenameColumn { from, to } => {
                            format!("rename {from} {to}")
                        }
                        AlterTableAction::DropColumnIfExists(name) => format!("drop {name}"),
                    },
                    Operation::Transaction(Transaction::Start) => "begin".to_string(),
                    Operation::Transaction(Transaction::Commit) => "commit".to_string(),
                    Operation::Transaction(Transaction::Rollback) => "rollback".to_string(),
                    _ => return None,
                };

                Some(if op.failed { format!("{label} !") } else { label })
            })
            .collect()
    }

    /// Number of logged operations for which `f` holds.
    pub fn count(&self, f: impl Fn(&Operation) -> bool) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| f(&op.operation))
            .count()
    }
}

impl fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops = self.ops.lock().unwrap();
        f.debug_struct("ExecLog").field("ops", &*ops).finish()
    }
}
