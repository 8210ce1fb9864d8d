/// Table of single-bit flags and their names, in display order
pub type FlagTable = [(u32, &'static str)];

/// Expand `bitmask` into the names of all flags set in it.
///
/// Labels come out in the order of `table`, not in bit order. Bits that have
/// no entry in the table are ignored.
#[must_use]
pub fn labels(bitmask: u32, table: &FlagTable) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(bit, _)| bitmask & bit != 0)
        .map(|(_, name)| *name)
        .collect()
}
