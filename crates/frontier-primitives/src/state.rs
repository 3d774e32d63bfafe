use crate::{Account, Address, U256};
use std::collections::BTreeMap;

/// The world state: a mapping from address to account.
///
/// An absent address is equivalent to [`Account::empty`]; readers should
/// use [`State::account`] rather than indexing the map directly so that
/// default accounts don't need to be materialized ahead of time.
pub type State = BTreeMap<Address, Account>;

/// Extension methods mirroring the small set of state helpers the Python
/// reference implementation exposes from `eth_types` (`add_ether`,
/// `move_ether`, `modify_state`) so that callers in `frontier-execution`
/// read the same way the original `apply_body`/`process_transaction` do.
pub trait StateExt {
    /// Returns the account at `address`, or the empty default if absent.
    fn account(&self, address: Address) -> Account;

    /// Applies `f` to the account at `address`, inserting a fresh default
    /// account first if one is not already present.
    fn modify<F: FnOnce(&mut Account)>(&mut self, address: Address, f: F);
}

impl StateExt for State {
    fn account(&self, address: Address) -> Account {
        self.get(&address).cloned().unwrap_or_default()
    }

    fn modify<F: FnOnce(&mut Account)>(&mut self, address: Address, f: F) {
        let account = self.entry(address).or_default();
        f(account);
    }
}

/// Credits `amount` wei to `address`, creating the account if necessary.
///
/// Per `spec.md` §3, `U256` arithmetic wraps modulo 2²⁵⁶ unless the caller
/// has already bounded the value (as the transaction processor and reward
/// payment do via the balance/gas checks in §4.3/§4.5).
pub fn add_ether(state: &mut State, address: Address, amount: U256) {
    state.modify(address, |account| {
        account.balance = account.balance.wrapping_add(amount);
    });
}

/// Moves `amount` wei from `sender` to `recipient`.
///
/// Callers are responsible for having already checked that `sender` can
/// afford the transfer; this performs the debit and credit unconditionally,
/// matching the Python reference's `move_ether`.
pub fn move_ether(state: &mut State, sender: Address, recipient: Address, amount: U256) {
    state.modify(sender, |account| {
        account.balance = account.balance.wrapping_sub(amount);
    });
    add_ether(state, recipient, amount);
}
