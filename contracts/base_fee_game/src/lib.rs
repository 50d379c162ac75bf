#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Base-Fee Game — Round Ledger & Settlement Engine
///
/// **Role:** A continuous prediction game on the network's per-period base
/// fee.  Bettors wager native value; the wager *amount itself* encodes the
/// prediction: the first three significant digits become a guess in
/// [100, 999], and the number of decimal shifts needed to produce those
/// digits becomes the wager's *scale class*.  Wagers only compete against
/// other wagers in the same (round, scale) group, so a 0.000003-unit bet
/// never shares a pot with a 300-unit bet.
///
/// **Round lifecycle (time-indices, 1 000 steps per round):**
/// ```text
///   round n betting window   [start(n), start(n) + 999]
///   round n+1 betting window [start(n) + 1000, start(n) + 1999]
///   round n reveal target     start(n) + 2000
///   round n refundable after  start(n) + 2000 + 256   (oracle never answered)
/// ```
/// Rounds overlap: while round n waits for its reveal, round n+1 is open for
/// betting.  No explicit "round closed" transition exists — everything is
/// derived from the current time-index.
///
/// **Settlement is lazy.**  Nothing is computed when the signal arrives.  The
/// first claim against a group after the signal is known runs the winner
/// search once (binary nearest-neighbor over the group's sorted guess index),
/// fixes the commission and per-winner shares, and caches the result in the
/// group.  Every later claim in that group reads the cache.  No code path
/// iterates over all bettors or over the 900 possible guesses.
///
/// **External collaborators:**
/// - An oracle contract that, for a fee, delivers the raw record for a
///   requested time-index within 256 steps via `submit_signal`.
/// - The host's native transfer primitive for stakes, payouts and refunds.
#[ink::contract]
mod base_fee_game {
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::DefaultEnvironment;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;
    use scale::Decode;

    // =========================================================================
    // CONSTANTS
    // =========================================================================

    /// Time-steps per round.
    pub const ROUND_SPAN: u64 = 1_000;

    /// Last step of a round's betting window, relative to its start.
    pub const BETTING_WINDOW: u64 = 999;

    /// Offset from a round's start to its reveal target.
    pub const REVEAL_OFFSET: u64 = 2_000;

    /// Steps past the reveal target the oracle has to answer.  Once elapsed
    /// with no signal, every wager in the round becomes refundable.
    pub const ORACLE_WINDOW: u64 = 256;

    /// Guess domain bounds (three significant digits).
    pub const GUESS_MIN: u128 = 100;
    pub const GUESS_MAX: u128 = 999;

    /// Number of decimal shifts tried during guess extraction; also the
    /// exclusive upper bound of the scale-class domain.
    pub const SCALE_CLASSES: u8 = 18;

    /// One whole native unit (18 fractional digits).
    pub const ONE: u128 = 1_000_000_000_000_000_000;

    // =========================================================================
    // STORAGE TYPES
    // =========================================================================

    /// Terminal-state machine of a single wager: `Pending` transitions exactly
    /// once, to either `Claimed` or `Withdrawn`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub enum WagerState {
        Pending,
        Claimed,
        Withdrawn,
    }

    /// One recorded wager.  Never deleted — kept for audit and idempotency.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct Wager {
        pub round: u32,
        pub scale: u8,
        pub guess: u16,
        pub amount: Balance,
        pub state: WagerState,
    }

    /// Per-guess slot inside a group.  First writer wins; ownership is never
    /// transferred.  `amount` is the remaining (not yet refunded/paid) stake.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct BetSlot {
        pub bettor: AccountId,
        pub amount: Balance,
    }

    /// Fairness bucket: all wagers of one round that share a scale class.
    ///
    /// `guesses` is kept ascending and duplicate-free (capped at 900 entries
    /// by the guess domain).  The settlement fields are written exactly once,
    /// by the first claim after the round's signal is known.
    #[derive(Debug, Default, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct Group {
        pub guesses: Vec<u16>,
        pub pool: Balance,
        pub winners_computed: bool,
        /// 0, 1 or 2 winning guesses, ascending.
        pub winners: Vec<u16>,
        pub commission: Balance,
        pub commission_taken: bool,
        /// Fixed payout per winner (pot, or half the pot on a tie).
        pub share: Balance,
        /// Odd unit left over by a tie split; granted to whichever of the two
        /// winners claims first.  Claim-order dependent on purpose.
        pub remainder: Balance,
    }

    /// Raw oracle record: a variable-length structure whose numeric field of
    /// interest (`base_fee`) sits at a fixed field position.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub struct RawRecord {
        pub number: u64,
        pub digest: Vec<u8>,
        pub base_fee: Balance,
    }

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct BaseFeeGame {
        /// Deployer / operator; receives the commission.
        owner: AccountId,

        /// The only account allowed to call `submit_signal`.
        oracle: AccountId,

        /// Time-index the game began at.  Fixed at construction.
        game_start: Timestamp,

        /// Commission percentage taken from a winning group's pool.
        commission_rate: u8,

        /// Fee paid per outbound oracle request.
        oracle_fee: Balance,

        // ── Round ledger (all lazily created, keyed, never enumerated) ────
        /// Round → revealed signal value.  Absent or 0 means "unknown".
        /// Set-once by the oracle callback.
        signals: Mapping<u32, Balance>,

        /// Round → an oracle request has already been paid for.
        signal_requested: Mapping<u32, bool>,

        /// Round → total wagered across all of its groups.  Feeds only the
        /// fee-coverage check of the request trigger.
        round_pools: Mapping<u32, Balance>,

        /// (round, scale) → group state.
        groups: Mapping<(u32, u8), Group>,

        /// (round, scale, guess) → occupying wager.
        slots: Mapping<(u32, u8, u16), BetSlot>,

        /// Bettor → every wager they ever placed.  A claim references a wager
        /// by its index in this list.
        wagers: Mapping<AccountId, Vec<Wager>>,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Emitted when a deposit is accepted into a group.
    #[ink(event)]
    pub struct BetPlaced {
        #[ink(topic)]
        bettor: AccountId,
        #[ink(topic)]
        round: u32,
        scale: u8,
        guess: u16,
        amount: Balance,
    }

    /// Emitted when the paid oracle request for a round goes out.
    #[ink(event)]
    pub struct SignalRequested {
        #[ink(topic)]
        round: u32,
        target: Timestamp,
        fee: Balance,
    }

    /// Emitted when the oracle delivers a round's signal value.
    #[ink(event)]
    pub struct SignalReceived {
        #[ink(topic)]
        round: u32,
        value: Balance,
    }

    /// Emitted when a wager is resolved against a settled group.  `payout`
    /// is zero for losing wagers.
    #[ink(event)]
    pub struct Claimed {
        #[ink(topic)]
        bettor: AccountId,
        #[ink(topic)]
        round: u32,
        scale: u8,
        guess: u16,
        payout: Balance,
    }

    /// Emitted when a wager is refunded (no signal, or no computable winner).
    #[ink(event)]
    pub struct Withdrawn {
        #[ink(topic)]
        bettor: AccountId,
        #[ink(topic)]
        round: u32,
        scale: u8,
        guess: u16,
        amount: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Deposited value was zero.
        ZeroBet,
        /// The current time-index is outside every betting window.
        NotBettingPhase,
        /// The amount's leading digits exceed 999 before landing in range.
        InvalidGuess,
        /// No scale class brings the amount into [100, 999].
        GuessOutOfRange,
        /// The derived guess is already occupied in this round and group.
        GuessTaken,
        /// The referenced wager already reached a terminal state.
        AlreadySettled,
        /// The round's signal value has already been set.
        AlreadySet,
        /// No wager exists at the given index for the caller.
        InvalidWagerReference,
        /// `submit_signal` called by anyone but the configured oracle.
        UnauthorizedCaller,
        /// The oracle may still answer — retry after the response window.
        ResultPending,
        /// Target time-index precedes the earliest possible reveal.
        InvalidTarget,
        /// Signal arrived after the response window; the round is
        /// refund-only and must stay that way.
        ResponseWindowElapsed,
        /// Commission rate above 100 percent at construction.
        InvalidCommissionRate,
        /// The oracle record could not be decoded.
        MalformedRecord,
        /// The outbound oracle request call failed.
        OracleRequestFailed,
        /// A payout or refund transfer failed.
        TransferFailed,
        /// Arithmetic overflow.
        Overflow,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl BaseFeeGame {
        // ---------------------------------------------------------------------
        // Constructor
        // ---------------------------------------------------------------------

        /// All configuration is fixed here and read-only afterwards.  The
        /// game start is the time-index of the deploying block.
        #[ink(constructor)]
        pub fn new(
            oracle: AccountId,
            commission_rate: u8,
            oracle_fee: Balance,
        ) -> Result<Self, Error> {
            if commission_rate > 100 {
                return Err(Error::InvalidCommissionRate);
            }
            Ok(Self {
                owner: Self::env().caller(),
                oracle,
                game_start: Self::env().block_timestamp(),
                commission_rate,
                oracle_fee,
                signals: Mapping::default(),
                signal_requested: Mapping::default(),
                round_pools: Mapping::default(),
                groups: Mapping::default(),
                slots: Mapping::default(),
                wagers: Mapping::default(),
            })
        }

        // =====================================================================
        // DEPOSIT — wager acceptance
        // =====================================================================

        /// Place a wager.  The transferred value is the entire payload: it is
        /// the stake, and its digits encode the guess and scale class.
        #[ink(message, payable)]
        pub fn place_bet(&mut self) -> Result<(), Error> {
            let bettor = self.env().caller();
            let amount = self.env().transferred_value();
            if amount == 0 {
                return Err(Error::ZeroBet);
            }

            let now = self.env().block_timestamp();
            let round = self.round_index(now)?;
            if !self.in_betting_window(round, now) {
                return Err(Error::NotBettingPhase);
            }

            let (guess, scale) = Self::extract_guess(amount)?;

            if self.slots.contains((round, scale, guess)) {
                return Err(Error::GuessTaken);
            }

            let mut group = self.groups.get((round, scale)).unwrap_or_default();
            group.pool = group.pool.checked_add(amount).ok_or(Error::Overflow)?;
            Self::insert_guess(&mut group.guesses, guess);
            self.groups.insert((round, scale), &group);

            self.slots
                .insert((round, scale, guess), &BetSlot { bettor, amount });

            let round_pool = self
                .round_pools
                .get(round)
                .unwrap_or(0)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            self.round_pools.insert(round, &round_pool);

            let mut list = self.wagers.get(bettor).unwrap_or_default();
            list.push(Wager {
                round,
                scale,
                guess,
                amount,
                state: WagerState::Pending,
            });
            self.wagers.insert(bettor, &list);

            self.env().emit_event(BetPlaced {
                bettor,
                round,
                scale,
                guess,
                amount,
            });

            // Any deposit may find an older round past its reveal target with
            // no signal yet; the fee comes out of the contract balance, never
            // out of pool accounting.
            self.maybe_request_signal(now);

            Ok(())
        }

        // =====================================================================
        // ORACLE HANDSHAKE
        // =====================================================================

        /// Fire the paid oracle request for the most recent round whose reveal
        /// target has passed, if its signal is still missing and its pool can
        /// cover the fee.  A failed call leaves the flag clear so the next
        /// deposit retries.
        fn maybe_request_signal(&mut self, now: Timestamp) {
            let Ok(current) = self.round_index(now) else {
                return;
            };
            let target_round = current.saturating_sub(2);
            if target_round == 0 {
                return;
            }
            if self.signal_requested.get(target_round).unwrap_or(false) {
                return;
            }
            if self.signals.get(target_round).unwrap_or(0) != 0 {
                return;
            }
            if self.round_pools.get(target_round).unwrap_or(0) < self.oracle_fee {
                return;
            }

            let target = self.reveal_time(target_round);
            if self.request_record(target).is_ok() {
                self.signal_requested.insert(target_round, &true);
                self.env().emit_event(SignalRequested {
                    round: target_round,
                    target,
                    fee: self.oracle_fee,
                });
            }
        }

        fn request_record(&self, target: Timestamp) -> Result<(), Error> {
            let result = build_call::<DefaultEnvironment>()
                .call(self.oracle)
                .transferred_value(self.oracle_fee)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("request_record")))
                        .push_arg(target),
                )
                .returns::<()>()
                .try_invoke();

            match result {
                Ok(Ok(())) => Ok(()),
                _ => Err(Error::OracleRequestFailed),
            }
        }

        /// Oracle callback: store the signal value for the round whose reveal
        /// target is `target`.  Sole writer of `signals`; set-once.
        #[ink(message)]
        pub fn submit_signal(&mut self, target: Timestamp, record: Vec<u8>) -> Result<(), Error> {
            if self.env().caller() != self.oracle {
                return Err(Error::UnauthorizedCaller);
            }

            let earliest = self
                .game_start
                .checked_add(REVEAL_OFFSET)
                .ok_or(Error::Overflow)?;
            if target < earliest {
                return Err(Error::InvalidTarget);
            }
            let round = ((target - earliest) / ROUND_SPAN) as u32 + 1;

            // Once the response window has elapsed the round's wagers are
            // refundable; accepting a signal now could settle a group whose
            // pool was already partially refunded and strand the difference.
            let deadline = self
                .reveal_time(round)
                .checked_add(ORACLE_WINDOW)
                .ok_or(Error::Overflow)?;
            if self.env().block_timestamp() > deadline {
                return Err(Error::ResponseWindowElapsed);
            }

            if self.signals.get(round).unwrap_or(0) != 0 {
                return Err(Error::AlreadySet);
            }

            let raw =
                RawRecord::decode(&mut record.as_slice()).map_err(|_| Error::MalformedRecord)?;
            self.signals.insert(round, &raw.base_fee);

            self.env().emit_event(SignalReceived {
                round,
                value: raw.base_fee,
            });
            Ok(())
        }

        // =====================================================================
        // CLAIM / WITHDRAW — per-wager dispatcher
        // =====================================================================

        /// Resolve one of the caller's wagers to a payout, a refund, or a
        /// "come back later" rejection.  Idempotent: a wager settles exactly
        /// once.  Returns the amount transferred to the caller.
        #[ink(message)]
        pub fn claim(&mut self, wager_ref: u32) -> Result<Balance, Error> {
            let caller = self.env().caller();
            let mut list = self.wagers.get(caller).ok_or(Error::InvalidWagerReference)?;
            let wager = list
                .get(wager_ref as usize)
                .cloned()
                .ok_or(Error::InvalidWagerReference)?;
            if wager.state != WagerState::Pending {
                return Err(Error::AlreadySettled);
            }

            let signal = self.signals.get(wager.round).unwrap_or(0);
            if signal == 0 {
                // Distinguish "oracle may still answer" from "never will".
                let deadline = self
                    .reveal_time(wager.round)
                    .checked_add(ORACLE_WINDOW)
                    .ok_or(Error::Overflow)?;
                if self.env().block_timestamp() <= deadline {
                    return Err(Error::ResultPending);
                }
                return self.withdraw(caller, &mut list, wager_ref, &wager);
            }

            let mut group = self.settle_group(wager.round, wager.scale, signal);
            if group.winners.is_empty() {
                // Signal known but no computable winner: everyone withdraws.
                return self.withdraw(caller, &mut list, wager_ref, &wager);
            }

            // Terminal state is written before any value leaves the contract,
            // so a re-entrant call sees the wager as settled.
            list[wager_ref as usize].state = WagerState::Claimed;
            self.wagers.insert(caller, &list);

            if !group.winners.contains(&wager.guess) {
                self.env().emit_event(Claimed {
                    bettor: caller,
                    round: wager.round,
                    scale: wager.scale,
                    guess: wager.guess,
                    payout: 0,
                });
                return Ok(0);
            }

            let mut payout = group.share;
            if group.remainder > 0 {
                payout = payout
                    .checked_add(group.remainder)
                    .ok_or(Error::Overflow)?;
                group.remainder = 0;
            }

            if !group.commission_taken {
                group.commission_taken = true;
                group.pool = group.pool.saturating_sub(group.commission);
                // A misbehaving operator account or a balance shortfall must
                // never block a winner's payout: skip the commission when the
                // contract cannot cover it, and swallow any other failure.
                if self.env().balance() >= group.commission {
                    let _ = self.env().transfer(self.owner, group.commission);
                }
            }

            group.pool = group.pool.saturating_sub(payout);
            self.groups.insert((wager.round, wager.scale), &group);
            self.slots.insert(
                (wager.round, wager.scale, wager.guess),
                &BetSlot {
                    bettor: caller,
                    amount: 0,
                },
            );

            // All-or-nothing with the state mutation above: an Err return
            // reverts the whole call, including the Claimed transition.
            self.env()
                .transfer(caller, payout)
                .map_err(|_| Error::TransferFailed)?;

            self.env().emit_event(Claimed {
                bettor: caller,
                round: wager.round,
                scale: wager.scale,
                guess: wager.guess,
                payout,
            });
            Ok(payout)
        }

        /// Refund a wager's original stake and mark it withdrawn.
        fn withdraw(
            &mut self,
            caller: AccountId,
            list: &mut Vec<Wager>,
            wager_ref: u32,
            wager: &Wager,
        ) -> Result<Balance, Error> {
            list[wager_ref as usize].state = WagerState::Withdrawn;
            self.wagers.insert(caller, list);

            let mut group = self.groups.get((wager.round, wager.scale)).unwrap_or_default();
            group.pool = group.pool.saturating_sub(wager.amount);
            self.groups.insert((wager.round, wager.scale), &group);

            let round_pool = self.round_pools.get(wager.round).unwrap_or(0);
            self.round_pools
                .insert(wager.round, &round_pool.saturating_sub(wager.amount));

            self.slots.insert(
                (wager.round, wager.scale, wager.guess),
                &BetSlot {
                    bettor: caller,
                    amount: 0,
                },
            );

            self.env()
                .transfer(caller, wager.amount)
                .map_err(|_| Error::TransferFailed)?;

            self.env().emit_event(Withdrawn {
                bettor: caller,
                round: wager.round,
                scale: wager.scale,
                guess: wager.guess,
                amount: wager.amount,
            });
            Ok(wager.amount)
        }

        // =====================================================================
        // SETTLEMENT — lazy, once per group
        // =====================================================================

        /// Compute (or fetch) a group's settlement result.  Runs the winner
        /// search at most once; every later call reads the cached outcome.
        fn settle_group(&mut self, round: u32, scale: u8, signal: Balance) -> Group {
            let mut group = self.groups.get((round, scale)).unwrap_or_default();
            if group.winners_computed {
                return group;
            }

            // A signal that maps to no 3-digit guess leaves the winner set
            // empty and the whole group refundable.
            if let Ok((key, _)) = Self::extract_guess(signal) {
                group.winners = Self::nearest_guesses(&group.guesses, key);
            }

            if !group.winners.is_empty() {
                let commission = group
                    .pool
                    .checked_mul(self.commission_rate as u128)
                    .map(|c| c / 100)
                    .unwrap_or(0);
                let pot = group.pool.saturating_sub(commission);

                group.commission = commission;
                if group.winners.len() == 1 {
                    group.share = pot;
                    group.remainder = 0;
                } else {
                    group.share = pot / 2;
                    group.remainder = pot - group.share * 2;
                }
            }

            group.winners_computed = true;
            self.groups.insert((round, scale), &group);
            group
        }

        // =====================================================================
        // INTERNAL — Guess extraction
        // =====================================================================

        /// Map a raw fixed-point value to (guess, scale class): shift the
        /// value by one decimal digit at a time, up to 18 times, until its
        /// integer part lands in [100, 999].  Overshooting 999 before landing
        /// in range is unrecoverable (more shifts only move further away).
        fn extract_guess(amount: Balance) -> Result<(u16, u8), Error> {
            let mut scaled = amount;
            for scale in 0..SCALE_CLASSES {
                let value = scaled / ONE;
                if (GUESS_MIN..=GUESS_MAX).contains(&value) {
                    return Ok((value as u16, scale));
                }
                if value > GUESS_MAX {
                    return Err(Error::InvalidGuess);
                }
                scaled = scaled.checked_mul(10).ok_or(Error::Overflow)?;
            }
            Err(Error::GuessOutOfRange)
        }

        // =====================================================================
        // INTERNAL — Sorted guess index
        // =====================================================================

        /// Shift-insert `guess` at its binary-searched position.  The caller
        /// has already rejected duplicates via the slot mapping.
        fn insert_guess(guesses: &mut Vec<u16>, guess: u16) {
            let at = guesses.partition_point(|&g| g < guess);
            guesses.insert(at, guess);
        }

        /// Nearest-neighbor search over an ascending, duplicate-free index.
        ///
        /// Returns 0, 1 or 2 winners in ascending order:
        /// - empty index → no winners;
        /// - one adjacent candidate → sole winner;
        /// - two candidates → strictly closer one wins, an exact distance tie
        ///   returns both.
        fn nearest_guesses(guesses: &[u16], key: u16) -> Vec<u16> {
            let low = guesses.partition_point(|&g| g < key);
            let left = low.checked_sub(1).and_then(|i| guesses.get(i)).copied();
            let right = guesses.get(low).copied();

            let mut winners = Vec::new();
            match (left, right) {
                (None, None) => {}
                (Some(g), None) | (None, Some(g)) => winners.push(g),
                (Some(l), Some(r)) => {
                    let left_dist = key - l;
                    let right_dist = r - key;
                    if left_dist < right_dist {
                        winners.push(l);
                    } else if right_dist < left_dist {
                        winners.push(r);
                    } else {
                        winners.push(l);
                        winners.push(r);
                    }
                }
            }
            winners
        }

        // =====================================================================
        // INTERNAL — Timing policy
        // =====================================================================

        /// Round the time-index `t` falls into (1-based).
        fn round_index(&self, t: Timestamp) -> Result<u32, Error> {
            if t < self.game_start {
                return Err(Error::NotBettingPhase);
            }
            Ok(((t - self.game_start) / ROUND_SPAN) as u32 + 1)
        }

        /// Saturates rather than wrapping at the far end of the timestamp
        /// domain; a saturated deadline simply never elapses.
        fn round_start(&self, round: u32) -> Timestamp {
            self.game_start
                .saturating_add((round as u64 - 1).saturating_mul(ROUND_SPAN))
        }

        /// The time-index whose base fee decides round `round`.
        fn reveal_time(&self, round: u32) -> Timestamp {
            self.round_start(round).saturating_add(REVEAL_OFFSET)
        }

        fn in_betting_window(&self, round: u32, t: Timestamp) -> bool {
            let start = self.round_start(round);
            t >= start && t <= start.saturating_add(BETTING_WINDOW)
        }

        // =====================================================================
        // VIEW FUNCTIONS
        // =====================================================================

        #[ink(message)]
        pub fn get_config(&self) -> (AccountId, AccountId, Timestamp, u8, Balance) {
            (
                self.owner,
                self.oracle,
                self.game_start,
                self.commission_rate,
                self.oracle_fee,
            )
        }

        /// Round the current time-index belongs to, if the game has started.
        #[ink(message)]
        pub fn current_round(&self) -> Option<u32> {
            self.round_index(self.env().block_timestamp()).ok()
        }

        /// 0 means "unknown".
        #[ink(message)]
        pub fn get_signal(&self, round: u32) -> Balance {
            self.signals.get(round).unwrap_or(0)
        }

        #[ink(message)]
        pub fn is_signal_requested(&self, round: u32) -> bool {
            self.signal_requested.get(round).unwrap_or(false)
        }

        #[ink(message)]
        pub fn get_group(&self, round: u32, scale: u8) -> Option<Group> {
            self.groups.get((round, scale))
        }

        #[ink(message)]
        pub fn get_guesses(&self, round: u32, scale: u8) -> Vec<u16> {
            self.groups
                .get((round, scale))
                .map(|g| g.guesses)
                .unwrap_or_default()
        }

        #[ink(message)]
        pub fn get_slot(&self, round: u32, scale: u8, guess: u16) -> Option<BetSlot> {
            self.slots.get((round, scale, guess))
        }

        #[ink(message)]
        pub fn get_wagers(&self, bettor: AccountId) -> Vec<Wager> {
            self.wagers.get(bettor).unwrap_or_default()
        }

        #[ink(message)]
        pub fn wager_count(&self, bettor: AccountId) -> u32 {
            self.wagers.get(bettor).map(|w| w.len() as u32).unwrap_or(0)
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
