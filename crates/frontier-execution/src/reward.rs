use alloy_primitives::U256;
use frontier_chainspec::BLOCK_REWARD;
use frontier_primitives::{add_ether, Address, Header, State};

/// Pays block and ommer rewards (`spec.md` §4.5).
///
/// Mirrors the teacher's `post_block_balance_increments`: the miner's
/// reward scales with how many ommers were included, and each ommer's own
/// coinbase is paid separately, decaying with how old the ommer is.
pub fn pay_rewards(state: &mut State, coinbase: Address, block_number: u64, ommers: &[Header]) {
    let miner_reward =
        BLOCK_REWARD + (BLOCK_REWARD * U256::from(ommers.len() as u64)) / U256::from(32u64);
    add_ether(state, coinbase, miner_reward);

    for ommer in ommers {
        let age = U256::from(block_number - ommer.number);
        let ommer_reward = BLOCK_REWARD - (BLOCK_REWARD * age) / U256::from(8u64);
        add_ether(state, ommer.beneficiary, ommer_reward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_primitives::StateExt;

    #[test]
    fn miner_reward_with_no_ommers_is_the_base_reward() {
        let mut state = State::new();
        let coinbase = Address::repeat_byte(0x01);
        pay_rewards(&mut state, coinbase, 1, &[]);
        assert_eq!(state.account(coinbase).balance, BLOCK_REWARD);
    }

    #[test]
    fn ommer_bonus_scales_with_count() {
        let mut state = State::new();
        let coinbase = Address::repeat_byte(0x01);
        let ommer = Header { number: 9, beneficiary: Address::repeat_byte(0x02), ..Default::default() };
        pay_rewards(&mut state, coinbase, 10, std::slice::from_ref(&ommer));

        let expected_miner_reward = BLOCK_REWARD + BLOCK_REWARD / U256::from(32u64);
        assert_eq!(state.account(coinbase).balance, expected_miner_reward);

        let expected_ommer_reward = BLOCK_REWARD - BLOCK_REWARD / U256::from(8u64);
        assert_eq!(state.account(ommer.beneficiary).balance, expected_ommer_reward);
    }
}
