use mastermind_solver::search::{distinguished_pairs, minimax_score};
use mastermind_solver::space::{filter, universe};
use mastermind_solver::{grade, Code, Config, ConfigError, HistoryEntry, Scoring, SearchEngine};

fn code(text: &str) -> Code {
    Code::parse(text, &Config::default()).unwrap()
}

/// Straightforward pairwise count used to check the grouped version.
fn pairwise_reference(guess: &Code, pool: &[Code]) -> u64 {
    let mut distinguished = 0;
    for (i, b) in pool.iter().enumerate() {
        for c in &pool[i + 1..] {
            if grade(guess, b) != grade(guess, c) {
                distinguished += 1;
            }
        }
    }
    distinguished
}

fn narrowed_pool() -> Vec<Code> {
    let secret = code("ADBC");
    let history = [HistoryEntry::new(code("AABB"), grade(&code("AABB"), &secret))];
    filter(&universe(&Config::default()), &history)
}

#[test]
fn test_distinguished_pairs_matches_pairwise_loop() {
    let pool: Vec<Code> = universe(&Config::default()).into_iter().step_by(17).collect();
    for guess in ["AABB", "ABCD", "FFFF", "ADBC"] {
        let guess = code(guess);
        assert_eq!(
            distinguished_pairs(&guess, &pool),
            pairwise_reference(&guess, &pool),
            "mismatch for {}",
            guess
        );
    }
}

#[test]
fn test_scores_on_tiny_pool() {
    let pool = [code("AAAA"), code("BBBB"), code("AAAB")];
    // AAAA rates the three codes (4,0), (0,0), (3,0)
    assert_eq!(distinguished_pairs(&code("AAAA"), &pool), 3);
    assert_eq!(minimax_score(&code("AAAA"), &pool), 2);
    // CCCC rates all three (0,0)
    assert_eq!(distinguished_pairs(&code("CCCC"), &pool), 0);
    assert_eq!(minimax_score(&code("CCCC"), &pool), 0);
}

#[test]
fn test_engine_rejects_zero_threads() {
    assert_eq!(
        SearchEngine::new(0, Scoring::DistinguishedPairs).unwrap_err(),
        ConfigError::ZeroThreads
    );
}

#[test]
fn test_engine_from_config() {
    let config = Config::default().with_threads(3).with_scoring(Scoring::Minimax);
    let engine = SearchEngine::from_config(&config).unwrap();
    assert_eq!(engine.threads(), 3);
    assert_eq!(engine.scoring(), Scoring::Minimax);
}

#[test]
fn test_empty_guess_list() {
    let engine = SearchEngine::new(4, Scoring::DistinguishedPairs).unwrap();
    assert!(engine.best_guess(&[], &narrowed_pool()).unwrap().is_none());
}

#[test]
fn test_best_guess_has_maximum_score() {
    let pool = narrowed_pool();
    let engine = SearchEngine::new(4, Scoring::DistinguishedPairs).unwrap();
    let best = engine.best_guess(&pool, &pool).unwrap().unwrap();

    assert!(pool.contains(&best.guess));
    let max = pool
        .iter()
        .map(|g| distinguished_pairs(g, &pool))
        .max()
        .unwrap();
    assert_eq!(best.score, max);

    // first code reaching the maximum wins
    let first = pool
        .iter()
        .find(|g| distinguished_pairs(g, &pool) == max)
        .unwrap();
    assert_eq!(&best.guess, first);
}

#[test]
fn test_repeated_searches_agree() {
    let pool = narrowed_pool();
    let all = universe(&Config::default());
    let engine = SearchEngine::new(8, Scoring::DistinguishedPairs).unwrap();

    let first = engine.best_guess(&all, &pool[..40]).unwrap();
    for _ in 0..3 {
        assert_eq!(engine.best_guess(&all, &pool[..40]).unwrap(), first);
    }
}

#[test]
fn test_worker_count_does_not_change_result() {
    let pool = narrowed_pool();
    let all = universe(&Config::default());
    let sequential = SearchEngine::new(1, Scoring::DistinguishedPairs).unwrap();
    let expected = sequential.best_guess(&all, &pool[..30]).unwrap();

    for threads in [2, 3, 7, 16, 64] {
        let engine = SearchEngine::new(threads, Scoring::DistinguishedPairs).unwrap();
        assert_eq!(
            engine.best_guess(&all, &pool[..30]).unwrap(),
            expected,
            "{} workers",
            threads
        );
    }
}

#[test]
fn test_minimax_scoring() {
    let pool = narrowed_pool();
    let engine = SearchEngine::new(4, Scoring::Minimax).unwrap();
    let best = engine.best_guess(&pool, &pool).unwrap().unwrap();
    let max = pool.iter().map(|g| minimax_score(g, &pool)).max().unwrap();
    assert_eq!(best.score, max);
    assert_eq!(engine.score(&best.guess, &pool), max);
}
