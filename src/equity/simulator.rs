use super::canceller::Canceller;
use super::canceller::Ticket;
use super::result::EquityResult;
use super::tally::Tally;
use crate::BATCH_SIZE;
use crate::Error;
use crate::MAX_TRIALS;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::cards::score::Score;
use crate::range::combos::combos;
use crate::range::range::Range;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelBridge;
use rayon::iter::ParallelIterator;
use std::sync::Arc;

/// Everything a trial needs that does not depend on the villain holding.
#[derive(Debug, Clone, Copy)]
struct Table {
    hero: Hand,
    board: Hand,
    seed: u64,
}

/// A contiguous block of trials against one villain holding.
#[derive(Debug, Clone, Copy)]
struct Batch {
    combo: usize,
    index: usize,
    villain: Hand,
    trials: usize,
}

impl Table {
    fn missing(&self) -> usize {
        Board::MAX - self.board.size()
    }

    /// one independent stream per (call, combo, batch).
    /// which worker picks the batch up has no effect on what it draws.
    fn rng(&self, batch: &Batch) -> SmallRng {
        let seed = [batch.combo as u64, batch.index as u64]
            .into_iter()
            .fold(splitmix(self.seed), |acc, x| splitmix(acc ^ x));
        SmallRng::seed_from_u64(seed)
    }

    /// deal out every trial of a batch and tally the showdowns
    fn play(&self, batch: &Batch, ticket: &Ticket) -> Result<Tally, Error> {
        let ref mut rng = self.rng(batch);
        let dead = Hand::add(Hand::add(self.hero, self.board), batch.villain);
        let mut tally = Tally::default();
        for _ in 0..batch.trials {
            if ticket.is_cancelled() {
                return Err(Error::Cancelled);
            }
            let mut deck = Deck::seeded(rng.random());
            deck.remove_all(dead);
            let board = Hand::add(self.board, deck.draw(self.missing())?);
            let hero = Score::from(Hand::add(self.hero, board));
            let villain = Score::from(Hand::add(batch.villain, board));
            tally.witness(hero, villain);
        }
        Ok(tally)
    }
}

/// SplitMix64 finalizer. Fixed, so batch streams do not move between
/// toolchains the way a std hasher may.
fn splitmix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Parallel Monte Carlo equity over a dedicated rayon pool.
///
/// Trials are cut into fixed-size batches, each with its own seeded
/// generator, and the partial tallies are reduced fork-join style.
/// With a fixed seed the result is identical for any thread count.
/// The pool lives as long as the last simulator sharing it.
pub struct Simulator {
    pool: Arc<rayon::ThreadPool>,
    seed: Option<u64>,
    canceller: Canceller,
}

impl Simulator {
    /// one worker per logical cpu
    pub fn new() -> Result<Self, Error> {
        Self::with_threads(num_cpus::get())
    }
    pub fn with_threads(threads: usize) -> Result<Self, Error> {
        if threads == 0 {
            return Err(Error::InvalidInput("thread count must be positive".into()));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("equity-{}", i))
            .build()?;
        log::debug!("{:<32}{:<32}", "spawned simulator pool", threads);
        Ok(Self {
            pool: Arc::new(pool),
            seed: None,
            canceller: Canceller::default(),
        })
    }
    /// Fix the base seed so repeated calls reproduce exactly,
    /// on any machine and thread count.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
    /// A handle that stops every call in flight on this simulator.
    /// Calls that start after `cancel` run normally.
    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }
    /// Same pool and seed, but a canceller of its own, so concurrent
    /// callers can stop their own calls without touching anyone else's.
    pub fn session(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            seed: self.seed,
            canceller: Canceller::default(),
        }
    }

    /// Hero against one known villain holding.
    pub fn head_to_head(
        &self,
        hero: &[Card],
        villain: &[Card],
        board: &[Card],
        trials: usize,
    ) -> Result<EquityResult, Error> {
        Self::check_trials(trials)?;
        let hero = Self::seat(hero, "hero")?;
        let villain = Self::seat(villain, "villain")?;
        let board = Hand::from(Board::try_from(board)?);
        Self::disjoint(&[hero, villain, board])?;
        log::info!(
            "{:<32}{:<32}",
            "simulating  head to head",
            format!("{} v {} [{}] x{}", hero, villain, board, trials)
        );
        let table = self.table(hero, board);
        let batches = Self::batches(0, villain, trials).collect::<Vec<Batch>>();
        self.run(table, batches)
    }

    /// Hero against every unblocked holding of a range.
    ///
    /// Trials are split evenly over the combos, remainder to the earliest,
    /// and every combo plays at least once. Counts are summed across combos.
    pub fn versus_range(
        &self,
        hero: &[Card],
        range: &Range,
        board: &[Card],
        trials: usize,
    ) -> Result<EquityResult, Error> {
        Self::check_trials(trials)?;
        let hero = Self::seat(hero, "hero")?;
        let board = Hand::from(Board::try_from(board)?);
        Self::disjoint(&[hero, board])?;
        let holes = combos(range, Hand::add(hero, board))?;
        let n = holes.len();
        log::info!(
            "{:<32}{:<32}",
            "simulating  versus range",
            format!("{} v {} combos [{}] x{}", hero, n, board, trials)
        );
        let table = self.table(hero, board);
        let batches = holes
            .into_iter()
            .enumerate()
            .flat_map(|(i, hole)| Self::batches(i, Hand::from(hole), Self::allot(trials, n, i)))
            .collect::<Vec<Batch>>();
        self.run(table, batches)
    }

    /// Exact equity over every possible runout of the missing board cards.
    pub fn enumerate(
        &self,
        hero: &[Card],
        villain: &[Card],
        board: &[Card],
    ) -> Result<EquityResult, Error> {
        let hero = Self::seat(hero, "hero")?;
        let villain = Self::seat(villain, "villain")?;
        let board = Board::try_from(board)?;
        let dead = Self::disjoint(&[hero, villain, Hand::from(board)])?;
        let runouts = HandIterator::from((board.missing(), dead));
        log::info!(
            "{:<32}{:<32}",
            "enumerating runouts",
            format!("{} v {} [{}] x{}", hero, villain, board, runouts.combinations())
        );
        let board = Hand::from(board);
        let ref ticket = self.canceller.ticket();
        let result = self.pool.install(|| {
            runouts
                .par_bridge()
                .try_fold(Tally::default, |mut tally, runout| {
                    if ticket.is_cancelled() {
                        return Err(Error::Cancelled);
                    }
                    let runout = Hand::add(board, runout);
                    let h = Score::from(Hand::add(hero, runout));
                    let v = Score::from(Hand::add(villain, runout));
                    tally.witness(h, v);
                    Ok(tally)
                })
                .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
        });
        self.finish(result)
    }

    fn table(&self, hero: Hand, board: Hand) -> Table {
        Table {
            hero,
            board,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }

    fn run(&self, table: Table, batches: Vec<Batch>) -> Result<EquityResult, Error> {
        log::debug!("{:<32}{:<32}", "dispatching batches", batches.len());
        let ref ticket = self.canceller.ticket();
        let result = self.pool.install(|| {
            batches
                .par_iter()
                .map(|batch| table.play(batch, ticket))
                .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
        });
        self.finish(result)
    }

    fn finish(&self, result: Result<Tally, Error>) -> Result<EquityResult, Error> {
        match result {
            Err(Error::Cancelled) => {
                log::warn!("{:<32}", "simulation cancelled");
                Err(Error::Cancelled)
            }
            Err(e) => Err(e),
            Ok(tally) => {
                let result = EquityResult::from(tally);
                log::info!("{:<32}{:<32}", "equity", result);
                Ok(result)
            }
        }
    }

    /// fixed-size blocks covering `trials`
    fn batches(combo: usize, villain: Hand, trials: usize) -> impl Iterator<Item = Batch> {
        (0..trials.div_ceil(BATCH_SIZE)).map(move |index| Batch {
            combo,
            index,
            villain,
            trials: BATCH_SIZE.min(trials - index * BATCH_SIZE),
        })
    }
    /// trials owed to the i-th of n combos
    fn allot(trials: usize, n: usize, i: usize) -> usize {
        (trials / n + usize::from(i < trials % n)).max(1)
    }

    fn check_trials(trials: usize) -> Result<(), Error> {
        match trials {
            1..=MAX_TRIALS => Ok(()),
            n => Err(Error::InvalidInput(format!(
                "trials must be between 1 and {}, got {}",
                MAX_TRIALS, n
            ))),
        }
    }
    fn seat(cards: &[Card], who: &str) -> Result<Hand, Error> {
        match cards.len() {
            2 => Hole::try_from(cards).map(Hand::from),
            n => Err(Error::InvalidInput(format!(
                "{} must have exactly 2 cards, got {}",
                who, n
            ))),
        }
    }
    /// union of the known cards, refusing any card dealt twice
    fn disjoint(hands: &[Hand]) -> Result<Hand, Error> {
        hands.iter().try_fold(Hand::empty(), |dead, hand| {
            match dead.overlaps(hand) {
                true => Err(Error::InvalidInput(format!(
                    "duplicate card: {}",
                    Hand::from(u64::from(dead) & u64::from(*hand))
                ))),
                false => Ok(Hand::add(dead, *hand)),
            }
        })
    }
}
