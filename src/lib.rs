//! Texas Hold'em hand evaluation and Monte Carlo equity.
//!
//! Cards, hands and decks live in [`cards`], starting-hand grids in [`range`],
//! and the parallel simulator in [`equity`].
pub mod cards;
pub mod equity;
pub mod error;
pub mod range;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Equity shares and frequencies.
pub type Probability = f64;

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Trials run when the caller does not ask for a specific count.
pub const DEFAULT_TRIALS: usize = 20_000;
/// Upper bound on trials for a single call.
pub const MAX_TRIALS: usize = 10_000_000;
/// Trials per unit of parallel work. Each batch gets its own seeded generator,
/// so results depend on the seed and never on the thread count.
pub const BATCH_SIZE: usize = 1024;

// ============================================================================
// VERDICT THRESHOLDS
// Hero equity at or above each bound earns the tier.
// ============================================================================
/// Lower bound of a strong favourite.
pub const VERDICT_STRONG: Probability = 0.65;
/// Lower bound of a slight favourite.
pub const VERDICT_AHEAD: Probability = 0.50;
/// Lower bound of a live underdog.
pub const VERDICT_UNDERDOG: Probability = 0.35;
/// Expected value within this many chips of zero reads as break even.
pub const EV_MARGIN: f64 = 0.01;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
