use crate::{Bloom, Log};

/// Computes the bloom filter over a sequence of logs.
///
/// Accrues the contract address and every topic of every log into a single
/// 2048-bit `m3:2048` bloom, the same construction `alloy_primitives::Bloom`
/// already implements via [`Bloom::m3_2048`] and which every mainstream
/// client (including the teacher) reuses rather than hand-rolling.
pub fn logs_bloom<'a>(logs: impl IntoIterator<Item = &'a Log>) -> Bloom {
    let mut bloom = Bloom::ZERO;
    for log in logs {
        bloom.m3_2048(log.address.as_slice());
        for topic in &log.topics {
            bloom.m3_2048(topic.as_slice());
        }
    }
    bloom
}
