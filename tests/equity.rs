use holdem_equity::Error;
use holdem_equity::cards::card::Card;
use holdem_equity::cards::category::Category;
use holdem_equity::cards::score::evaluate;
use holdem_equity::equity::result::EquityResult;
use holdem_equity::equity::simulator::Simulator;
use holdem_equity::range::action::Action;
use holdem_equity::range::range::Range;

fn cards(s: &str) -> Vec<Card> {
    Card::parse(s).unwrap()
}

fn mirrored(a: &EquityResult, b: &EquityResult) {
    assert_eq!(a.trials, b.trials);
    assert_eq!(a.wins, b.losses);
    assert_eq!(a.ties, b.ties);
    assert_eq!(a.losses, b.wins);
    assert!((a.hero - b.villain).abs() < 1e-12);
    assert_eq!(a.hero_category, b.villain_category);
}

#[test]
fn aces_against_kings() {
    let sim = Simulator::new().unwrap().with_seed(42);
    let r = sim
        .head_to_head(&cards("AsAh"), &cards("KdKc"), &[], 100_000)
        .unwrap();
    assert!(r.hero >= 0.78 && r.hero <= 0.82, "{}", r);
    assert_eq!(r.wins + r.ties + r.losses, r.trials);
}

#[test]
fn suited_big_slick_against_queens() {
    let sim = Simulator::new().unwrap().with_seed(42);
    let r = sim
        .head_to_head(&cards("AsKs"), &cards("QhQd"), &[], 100_000)
        .unwrap();
    assert!(r.hero >= 0.45 && r.hero <= 0.49, "{}", r);
}

#[test]
fn seats_are_symmetric() {
    let sim = Simulator::with_threads(4).unwrap().with_seed(9);
    let board = cards("Jh Ts 2c");
    let a = sim
        .head_to_head(&cards("AsKs"), &cards("QhQd"), &board, 30_000)
        .unwrap();
    let b = sim
        .head_to_head(&cards("QhQd"), &cards("AsKs"), &board, 30_000)
        .unwrap();
    mirrored(&a, &b);
}

#[test]
fn enumeration_is_symmetric() {
    let sim = Simulator::with_threads(4).unwrap();
    let board = cards("9c 8c 2d");
    let a = sim.enumerate(&cards("AcKd"), &cards("7h7s"), &board).unwrap();
    let b = sim.enumerate(&cards("7h7s"), &cards("AcKd"), &board).unwrap();
    assert_eq!(a.trials, 45 * 44 / 2);
    mirrored(&a, &b);
}

#[test]
fn simulation_converges_on_enumeration() {
    let sim = Simulator::new().unwrap().with_seed(11);
    let board = cards("Kh 7c 2s");
    let exact = sim.enumerate(&cards("AsKs"), &cards("QhQd"), &board).unwrap();
    let guess = sim
        .head_to_head(&cards("AsKs"), &cards("QhQd"), &board, 200_000)
        .unwrap();
    assert!((exact.hero - guess.hero).abs() < 0.01, "{} vs {}", exact, guess);
}

#[test]
fn seeded_runs_ignore_thread_count() {
    let range = Range::try_from("AA,KK,QQ,AKs,AKo:call").unwrap();
    let hero = cards("JsJh");
    let one = Simulator::with_threads(1).unwrap().with_seed(7);
    let many = Simulator::with_threads(8).unwrap().with_seed(7);
    let a = one.versus_range(&hero, &range, &[], 20_000).unwrap();
    let b = many.versus_range(&hero, &range, &[], 20_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn range_covers_every_combo() {
    let sim = Simulator::with_threads(2).unwrap().with_seed(1);
    let range = Range::uniform(Action::Call);
    // 1225 unblocked combos, more than the trials asked for
    let r = sim.versus_range(&cards("AsKs"), &range, &[], 1_000).unwrap();
    assert_eq!(r.trials, 1_225);
}

#[test]
fn folded_range_is_empty() {
    let sim = Simulator::with_threads(1).unwrap();
    let r = sim.versus_range(&cards("AsKs"), &Range::empty(), &[], 1_000);
    assert!(matches!(r, Err(Error::EmptyRange)));
}

#[test]
fn cancelled_from_another_thread() {
    let sim = Simulator::with_threads(2).unwrap().with_seed(3);
    let canceller = sim.canceller();
    let handle = std::thread::spawn(move || {
        while canceller.in_flight() == 0 {
            std::thread::yield_now();
        }
        canceller.cancel();
    });
    let r = sim.head_to_head(&cards("AsKs"), &cards("QhQd"), &[], 10_000_000);
    handle.join().unwrap();
    assert!(matches!(r, Err(Error::Cancelled)));
    assert_eq!(sim.canceller().in_flight(), 0);
    let r = sim.head_to_head(&cards("AsKs"), &cards("QhQd"), &[], 1_000);
    assert_eq!(r.unwrap().trials, 1_000);
}

#[test]
fn categories_are_totally_ordered() {
    let ladder = [
        ("As Kh 9d 6c 3s 2h 4d", Category::HighCard),
        ("As Ah 9d 6c 3s 2h Jd", Category::OnePair),
        ("As Ah 9d 9c 3s 2h Jd", Category::TwoPair),
        ("9s 9h 9d Ac 3s 2h Jd", Category::ThreeOfAKind),
        ("5s 6h 7d 8c 9s 2h Jd", Category::Straight),
        ("Ks Ts 7s 4s 2s 3h Jd", Category::Flush),
        ("9s 9h 9d 3c 3s 2h Jd", Category::FullHouse),
        ("9s 9h 9d 9c 3s 2h Jd", Category::FourOfAKind),
        ("5s 6s 7s 8s 9s 2h Jd", Category::StraightFlush),
        ("Ts Js Qs Ks As 2h 3d", Category::RoyalFlush),
    ];
    let scores = ladder
        .iter()
        .map(|(hand, category)| {
            let score = evaluate(&cards(hand)).unwrap();
            assert_eq!(score.category(), *category, "{}", hand);
            score
        })
        .collect::<Vec<_>>();
    assert!(scores.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn wheel_is_five_high() {
    let wheel = evaluate(&cards("As 2d 3c 4h 5s")).unwrap();
    let six = evaluate(&cards("2d 3c 4h 5s 6d")).unwrap();
    assert_eq!(wheel.category(), Category::Straight);
    assert!(wheel < six);
    assert_eq!(u32::from(wheel), 5 * 13u32.pow(5) + 3);
}

#[test]
fn royal_flush_is_the_ceiling() {
    let royal = evaluate(&cards("Ts Js Qs Ks As")).unwrap();
    assert_eq!(u32::from(royal), 10 * 13u32.pow(5));
    assert_eq!(royal.tiebreak(), 0);
}

#[test]
fn kickers_break_ties() {
    let better = evaluate(&cards("As Ah Kd Qc 9s")).unwrap();
    let worse = evaluate(&cards("Ac Ad Kh Qs 8s")).unwrap();
    let same = evaluate(&cards("Ac Ad Kh Qs 9h")).unwrap();
    assert!(better > worse);
    assert_eq!(better, same);
}

#[test]
fn evaluation_is_deterministic() {
    let hand = cards("Qs Qh 4d 4c 9s 9h 2d");
    assert_eq!(evaluate(&hand).unwrap(), evaluate(&hand).unwrap());
}

#[test]
fn evaluation_rejects_bad_sizes() {
    assert!(matches!(
        evaluate(&cards("As Kh Qd Jc")),
        Err(Error::InvalidHandSize(4))
    ));
    assert!(matches!(
        evaluate(&cards("As Kh Qd Jc Ts 9s 8s 7s")),
        Err(Error::InvalidHandSize(8))
    ));
    assert!(matches!(
        evaluate(&cards("As As Qd Jc Ts")),
        Err(Error::InvalidInput(_))
    ));
}
