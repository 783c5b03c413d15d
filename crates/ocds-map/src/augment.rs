//! Array-path augmentation: party index assignment and default
//! identifier inference.
//!
//! The parties array is shared between roles: simple templates address
//! the buyer and the supplier through fixed slots rather than explicit
//! enumeration, so the engine has to decide which `parties/N` each role
//! occupies and synthesize ids where the source left them out. The
//! assignment policy lives in [`party_slots`] so it can be tested (and
//! changed) in one place.

use ocds_model::{ReleaseType, Table};

/// Default id for a buyer party with no explicit identifier.
pub const BUYER_DEFAULT_ID: &str = "buyer";
/// Default id for a supplier party with no explicit identifier.
pub const SUPPLIER_DEFAULT_ID: &str = "supplier";

/// Which slot of the shared parties array each role occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartySlots {
    pub buyer: Option<usize>,
    pub supplier: Option<usize>,
}

/// Assigns parties-array indices from the columns present in a table.
///
/// The buyer claims index 0 when any `parties/0/...` column exists; the
/// supplier takes the lowest remaining populated slot. Buyer-first is
/// the tie-break: a table carrying only supplier columns keeps whatever
/// index the mapping gave them, index 0 is never reassigned away from
/// the buyer.
pub fn party_slots(table: &Table) -> PartySlots {
    let mut indices: Vec<usize> = table
        .columns
        .iter()
        .filter_map(|column| party_name_index(column))
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let buyer = indices.iter().find(|&&idx| idx == 0).copied();
    let supplier = indices.iter().find(|&&idx| idx != 0).copied();
    PartySlots { buyer, supplier }
}

/// Parses `parties/N/name` into `N`; anything else is not a party name
/// column.
fn party_name_index(column: &str) -> Option<usize> {
    let mut segments = column.split('/');
    if segments.next() != Some("parties") {
        return None;
    }
    let index = segments.next()?.parse::<usize>().ok()?;
    if segments.next() != Some("name") || segments.next().is_some() {
        return None;
    }
    Some(index)
}

/// Fills in inferred columns on a canonical-path table.
///
/// All steps are idempotent: columns are only appended when absent,
/// defaults only fill empty cells, and derived values are recomputed
/// from their source columns.
pub fn augment_cols(mut table: Table, release_type: ReleaseType) -> Table {
    let slots = party_slots(&table);
    tracing::debug!(?slots, %release_type, "augmenting columns");

    if let Some(buyer) = slots.buyer {
        fill_party_id(&mut table, buyer, BUYER_DEFAULT_ID);
    }
    if release_type != ReleaseType::Tender
        && let Some(supplier) = slots.supplier
    {
        fill_party_id(&mut table, supplier, SUPPLIER_DEFAULT_ID);
        if release_type == ReleaseType::Award {
            link_award_suppliers(&mut table, supplier);
        }
    }

    ensure_constant_column(&mut table, "initiationType", "tender");
    ensure_constant_column(&mut table, "tag", release_type.release_tag());
    table
}

fn fill_party_id(table: &mut Table, index: usize, default: &str) {
    let id_column = format!("parties/{index}/id");
    table.ensure_column(&id_column);
    for row in &mut table.rows {
        if row.get(&id_column).is_empty() {
            row.set(&id_column, default);
        }
    }
}

/// Points `awards/0/suppliers/0/id` at each row's supplier party id.
/// The value is derived, so it is overwritten on every pass.
fn link_award_suppliers(table: &mut Table, supplier_index: usize) {
    let supplier_id_column = format!("parties/{supplier_index}/id");
    table.ensure_column("awards/0/suppliers/0/id");
    for row in &mut table.rows {
        let supplier_id = row.get(&supplier_id_column).to_string();
        row.set("awards/0/suppliers/0/id", supplier_id);
    }
}

fn ensure_constant_column(table: &mut Table, column: &str, value: &str) {
    table.ensure_column(column);
    for row in &mut table.rows {
        if row.get(column).is_empty() {
            row.set(column, value);
        }
    }
}
