pub mod child_care_authorization;
pub mod power_of_attorney;

use legaldraft::testing::StaticReferenceData;

/// A small country/state table: the United States (`"1"`) and Canada (`"2"`).
pub fn sample_reference_data() -> StaticReferenceData {
    StaticReferenceData::new()
        .with_country("1", "United States")
        .with_country("2", "Canada")
        .with_state("1", "CA", "California")
        .with_state("1", "NY", "New York")
        .with_state("1", "TX", "Texas")
        .with_state("1", "WA", "Washington")
        .with_state("2", "BC", "British Columbia")
        .with_state("2", "ON", "Ontario")
        .with_state("2", "QC", "Quebec")
}
