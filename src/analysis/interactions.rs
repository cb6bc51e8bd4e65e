use crate::models::InteractionRecord;
use crate::reference::InteractionTable;

/// Resolve interactions for every unordered pair of `drugs`.
///
/// Pairs are generated in caller order (`i` outer, `j > i` inner), so the
/// output order is deterministic and driven entirely by the input sequence.
/// Each unordered pair yields at most one record.
pub fn resolve(table: &InteractionTable, drugs: &[String]) -> Vec<InteractionRecord> {
    let mut found = Vec::new();

    for i in 0..drugs.len() {
        for j in (i + 1)..drugs.len() {
            if let Some(record) = table.between(&drugs[i], &drugs[j]) {
                found.push(record);
            }
        }
    }

    found
}
