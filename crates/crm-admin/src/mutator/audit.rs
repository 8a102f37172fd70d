use crate::{ColumnDescriptor, LiveColumn};

use crm_core::schema::db::Type;

/// Differences between the live custom columns and their descriptors.
///
/// Produced by [`SchemaMutator::audit`](super::SchemaMutator::audit). Nothing
/// is repaired.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuditReport {
    /// Live `custom_` columns without a descriptor
    pub orphan_columns: Vec<LiveColumn>,

    /// Descriptors whose live column does not exist
    pub dangling_descriptors: Vec<ColumnDescriptor>,

    /// Columns whose live type is not the one their descriptor maps to
    pub type_mismatches: Vec<TypeMismatch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    pub descriptor: ColumnDescriptor,
    pub live: LiveColumn,
}

impl AuditReport {
    pub(crate) fn diff(live: &[LiveColumn], descriptors: &[ColumnDescriptor]) -> AuditReport {
        let mut report = AuditReport::default();

        for column in live.iter().filter(|column| column.is_custom()) {
            let described = descriptors
                .iter()
                .find(|descriptor| descriptor.column_name == column.column_name.as_str());

            match described {
                None => report.orphan_columns.push(column.clone()),
                Some(descriptor) => {
                    let expected = descriptor.column_type.storage_ty();

                    if Type::from_data_type(&column.data_type) != Some(expected) {
                        report.type_mismatches.push(TypeMismatch {
                            descriptor: descriptor.clone(),
                            live: column.clone(),
                        });
                    }
                }
            }
        }

        for descriptor in descriptors {
            if !live
                .iter()
                .any(|column| descriptor.column_name == column.column_name.as_str())
            {
                report.dangling_descriptors.push(descriptor.clone());
            }
        }

        report
    }

    /// Returns `true` if every live custom column is described with its type.
    pub fn is_consistent(&self) -> bool {
        self.orphan_columns.is_empty()
            && self.dangling_descriptors.is_empty()
            && self.type_mismatches.is_empty()
    }
}
