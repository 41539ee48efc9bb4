//! Equity Calculator Binary
//!
//! Hero against a known hand or a range, by simulation or exact enumeration.

use anyhow::Context;
use clap::ArgGroup;
use clap::Parser;
use holdem_equity::cards::card::Card;
use holdem_equity::equity::odds::PotOdds;
use holdem_equity::equity::result::EquityResult;
use holdem_equity::equity::simulator::Simulator;
use holdem_equity::range::range::Range;

#[derive(Parser)]
#[command(author, version, about = "Texas Hold'em equity calculator", long_about = None)]
#[command(group(ArgGroup::new("opponent").required(true).args(["villain", "range", "range_json"])))]
struct Args {
    /// hero hole cards, e.g. AsKs
    #[arg(long)]
    hero: String,
    /// villain hole cards, e.g. QdQc
    #[arg(long)]
    villain: Option<String>,
    /// villain range as a comma list, e.g. "AA,KK,AKs:call"
    #[arg(long)]
    range: Option<String>,
    /// villain range as a json map of notation to action
    #[arg(long)]
    range_json: Option<String>,
    /// zero to five community cards
    #[arg(long, default_value = "")]
    board: String,
    #[arg(long, default_value_t = holdem_equity::DEFAULT_TRIALS)]
    trials: usize,
    /// fix the seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// worker threads, one per cpu by default
    #[arg(long)]
    threads: Option<usize>,
    /// enumerate every runout instead of sampling
    #[arg(long, alias = "enum")]
    exact: bool,
    /// chips in the pot before villain's bet
    #[arg(long, requires = "bet")]
    pot: Option<f64>,
    /// villain's bet, the amount hero has to call
    #[arg(long, requires = "pot")]
    bet: Option<f64>,
    /// print the result as json
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn simulator(&self) -> anyhow::Result<Simulator> {
        let simulator = match self.threads {
            Some(n) => Simulator::with_threads(n)?,
            None => Simulator::new()?,
        };
        Ok(match self.seed {
            Some(seed) => simulator.with_seed(seed),
            None => simulator,
        })
    }
    fn opponent(&self) -> anyhow::Result<Option<Range>> {
        match (&self.range, &self.range_json) {
            (Some(list), _) => Ok(Some(Range::try_from(list.as_str())?)),
            (_, Some(json)) => Ok(Some(
                serde_json::from_str::<Range>(json).context("parsing --range-json")?,
            )),
            _ => Ok(None),
        }
    }
    fn odds(&self) -> anyhow::Result<Option<PotOdds>> {
        match (self.pot, self.bet) {
            (Some(pot), Some(bet)) => Ok(Some(PotOdds::new(pot, bet)?)),
            _ => Ok(None),
        }
    }
}

fn report(result: &EquityResult, odds: Option<PotOdds>) {
    println!("{}", result);
    println!(
        "{:<10}{:>10} ({:.1}%)",
        "wins",
        result.wins,
        result.share(result.wins)
    );
    println!(
        "{:<10}{:>10} ({:.1}%)",
        "ties",
        result.ties,
        result.share(result.ties)
    );
    println!(
        "{:<10}{:>10} ({:.1}%)",
        "losses",
        result.losses,
        result.share(result.losses)
    );
    println!("{:<10}{:>10}", "trials", result.trials);
    println!("{:<10}{}", "hero", result.hero_category);
    println!("{:<10}{}", "villain", result.villain_category);
    println!("{}", result.verdict().describe(result.hero));
    if let Some(odds) = odds {
        println!("{}", odds);
        println!("{:<10}{:.2}", "ev", odds.ev(result.hero));
        println!("{}", odds.describe(result.hero));
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    holdem_equity::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    let hero = Card::parse(&args.hero).context("parsing --hero")?;
    let board = Card::parse(&args.board).context("parsing --board")?;
    let odds = args.odds()?;
    let simulator = args.simulator()?;
    let result = match (args.opponent()?, &args.villain) {
        (Some(range), _) if args.exact => {
            anyhow::bail!("--exact needs a single villain hand, got a {} combo range", range.combo_count())
        }
        (Some(range), _) => simulator.versus_range(&hero, &range, &board, args.trials)?,
        (None, Some(villain)) => {
            let villain = Card::parse(villain).context("parsing --villain")?;
            match args.exact {
                true => simulator.enumerate(&hero, &villain, &board)?,
                false => simulator.head_to_head(&hero, &villain, &board, args.trials)?,
            }
        }
        (None, None) => anyhow::bail!("one of --villain, --range or --range-json is required"),
    };
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&result)?),
        false => report(&result, odds),
    }
    Ok(())
}
