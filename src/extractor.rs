//! Snowflake component extraction
//!
//! The layout is fixed, from most to least significant bit:
//!
//! | field       | bits |
//! |-------------|------|
//! | timestamp   | 41   |
//! | data center | 5    |
//! | worker      | 5    |
//! | sequence    | 12   |
//!
//! The top bit is never written by a generator. Decoding still treats
//! everything above bit 22 as timestamp, so `timestamp == id >> 22` holds for
//! every `u64`.

pub const TIMESTAMP_BITS: u8 = 41;
pub const DATA_CENTER_BITS: u8 = 5;
pub const WORKER_BITS: u8 = 5;
pub const SEQUENCE_BITS: u8 = 12;

const WORKER_SHIFT: u8 = SEQUENCE_BITS;
const DATA_CENTER_SHIFT: u8 = WORKER_SHIFT + WORKER_BITS;
const TIMESTAMP_SHIFT: u8 = DATA_CENTER_SHIFT + DATA_CENTER_BITS;

pub const MAX_DATA_CENTER: u8 = (1 << DATA_CENTER_BITS) - 1;
pub const MAX_WORKER: u8 = (1 << WORKER_BITS) - 1;
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

/// Snowflake component extractor
#[derive(Debug, Default, Copy, Clone)]
pub struct FlakeExtractor;

impl FlakeExtractor {
    /// Milliseconds since the snowflake's epoch
    #[inline(always)]
    pub const fn timestamp(&self, id: u64) -> u64 {
        id >> TIMESTAMP_SHIFT
    }

    #[inline(always)]
    pub const fn data_center(&self, id: u64) -> u8 {
        ((id >> DATA_CENTER_SHIFT) & MAX_DATA_CENTER as u64) as u8
    }

    #[inline(always)]
    pub const fn worker(&self, id: u64) -> u8 {
        ((id >> WORKER_SHIFT) & MAX_WORKER as u64) as u8
    }

    #[inline(always)]
    pub const fn sequence(&self, id: u64) -> u16 {
        (id & MAX_SEQUENCE as u64) as u16
    }

    /// Decompose a snowflake into timestamp, data center, worker and sequence
    #[inline]
    pub const fn decompose(&self, id: u64) -> Melted {
        Melted {
            timestamp_ms: self.timestamp(id),
            data_center: self.data_center(id),
            worker: self.worker(id),
            sequence: self.sequence(id),
        }
    }
}

/// The parts of a melted snowflake.
///
/// `timestamp_ms` is relative to whatever epoch the generator used; the epoch
/// is only applied when the instant is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Melted {
    pub timestamp_ms: u64,
    pub data_center: u8,
    pub worker: u8,
    pub sequence: u16,
}

impl Melted {
    /// Break a snowflake into its component parts.
    #[inline]
    pub const fn melt(id: u64) -> Self {
        FlakeExtractor.decompose(id)
    }

    /// Put the parts back together.
    ///
    /// Fields wider than their slot are truncated to it, so this is the
    /// inverse of [`Melted::melt`] for anything `melt` produced.
    #[inline]
    pub const fn freeze(&self) -> u64 {
        (self.timestamp_ms << TIMESTAMP_SHIFT)
            | (((self.data_center & MAX_DATA_CENTER) as u64) << DATA_CENTER_SHIFT)
            | (((self.worker & MAX_WORKER) as u64) << WORKER_SHIFT)
            | (self.sequence & MAX_SEQUENCE) as u64
    }
}

impl From<u64> for Melted {
    fn from(id: u64) -> Self {
        Self::melt(id)
    }
}
