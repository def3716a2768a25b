//! Ingest volume conversion
//!
//! Converts a user-entered volume (magnitude + unit + time base) into the
//! normalized rates the rest of the engine works with: documents per second,
//! PB per day, and GB per month.

use crate::models::{IngestVolumeConfig, TimeUnit, VolumeUnit};

const KB: f64 = 1024.0;
const PB_BYTES: f64 = KB * KB * KB * KB * KB;

/// Bytes represented by `value` in the given unit (binary multipliers)
pub fn volume_to_bytes(value: f64, unit: VolumeUnit) -> f64 {
    let multiplier = match unit {
        VolumeUnit::PB => PB_BYTES,
        VolumeUnit::TB => KB * KB * KB * KB,
        VolumeUnit::GB => KB * KB * KB,
        VolumeUnit::MB => KB * KB,
    };
    value * multiplier
}

/// Seconds in one period of the given time base
pub fn time_unit_seconds(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Day => 86_400.0,
        TimeUnit::Hour => 3600.0,
        TimeUnit::Minute => 60.0,
    }
}

/// Effective average document size in KB for a volume spec.
///
/// An explicit positive override wins; otherwise the data type's built-in
/// OTLP estimate applies (custom defaults to 1.0 KB with no override).
pub fn effective_document_size_kb(volume: &IngestVolumeConfig) -> f64 {
    volume
        .avg_document_size_kb
        .filter(|size| *size > 0.0)
        .unwrap_or_else(|| volume.data_type.default_document_size_kb())
}

/// Convert an ingest volume to documents per second
pub fn docs_per_second(volume: &IngestVolumeConfig) -> f64 {
    let doc_size_bytes = effective_document_size_kb(volume) * KB;
    let bytes_per_second =
        volume_to_bytes(volume.value, volume.volume_unit) / time_unit_seconds(volume.time_unit);
    bytes_per_second / doc_size_bytes
}

/// Convert an ingest volume to PB per day, used by the recommendation engine
pub fn daily_ingest_pb(volume: &IngestVolumeConfig) -> f64 {
    let bytes_per_second =
        volume_to_bytes(volume.value, volume.volume_unit) / time_unit_seconds(volume.time_unit);
    bytes_per_second * 86_400.0 / PB_BYTES
}

/// Convert an ingest volume to GB per month (30-day month), used by the
/// serverless cost model
pub fn monthly_ingest_gb(volume: &IngestVolumeConfig) -> f64 {
    let gb = match volume.volume_unit {
        VolumeUnit::PB => volume.value * 1024.0 * 1024.0,
        VolumeUnit::TB => volume.value * 1024.0,
        VolumeUnit::GB => volume.value,
        VolumeUnit::MB => volume.value / 1024.0,
    };
    match volume.time_unit {
        TimeUnit::Day => gb * 30.0,
        TimeUnit::Hour => gb * 30.0 * 24.0,
        TimeUnit::Minute => gb * 30.0 * 24.0 * 60.0,
    }
}
