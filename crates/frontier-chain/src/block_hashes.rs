use frontier_primitives::{Header, B256};

/// The ancestor block-hash window consumed by the EVM collaborator's
/// `BLOCKHASH` opcode (`spec.md` §4.8).
///
/// Returns up to 256 header hashes, newest-last: `headers` is expected to be
/// every header on the chain so far, in ascending block-number order (i.e.
/// the chain's own storage order), and only its last 256 entries matter —
/// walking further back than that is never observable from the EVM.
pub fn block_hash_window(headers: &[Header]) -> Vec<B256> {
    let take = headers.len().min(256);
    headers[headers.len() - take..].iter().map(Header::hash_slow).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_capped_at_256_entries() {
        let headers: Vec<Header> =
            (0..300).map(|number| Header { number, ..Default::default() }).collect();
        let window = block_hash_window(&headers);
        assert_eq!(window.len(), 256);
        // newest-last: the final entry is the hash of the highest-numbered header.
        assert_eq!(window.last(), Some(&headers.last().unwrap().hash_slow()));
    }

    #[test]
    fn window_is_shorter_than_256_for_a_young_chain() {
        let headers: Vec<Header> =
            (0..3).map(|number| Header { number, ..Default::default() }).collect();
        let window = block_hash_window(&headers);
        assert_eq!(window.len(), 3);
    }
}
