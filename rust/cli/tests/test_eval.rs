use blackjack_cli::run;

fn eval(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["bjack", "eval"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn mean_reward(report: &str) -> f64 {
    report
        .lines()
        .find_map(|l| l.strip_prefix("Mean reward: "))
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn eval_reports_for_the_requested_agent() {
    let (code, out, _) = eval(&["--agent", "threshold:18", "--episodes", "100", "--seed", "4"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("eval: agent=threshold:18 seed=4\n"));
    assert!(out.contains("Episodes: 100\n"));
}

#[test]
fn eval_is_deterministic_with_seed() {
    let args = ["--agent", "random:5", "--episodes", "200", "--seed", "12"];
    assert_eq!(eval(&args).1, eval(&args).1);
}

#[test]
fn unseeded_eval_runs() {
    let (code, out, _) = eval(&["--episodes", "10", "--unseeded"]);
    assert_eq!(code, 0);
    assert!(out.contains("seed=none"));
}

#[test]
fn sticking_at_17_beats_always_hitting() {
    // threshold:30 hits on every live total, so only naturals survive
    let n = "2000";
    let (_, sensible, _) = eval(&["--agent", "threshold:17", "--episodes", n, "--seed", "1"]);
    let (_, reckless, _) = eval(&["--agent", "threshold:30", "--episodes", n, "--seed", "1"]);
    let sensible = mean_reward(&sensible);
    let reckless = mean_reward(&reckless);
    assert!(sensible > reckless, "{} <= {}", sensible, reckless);
    assert!(reckless < -0.5);
}

#[test]
fn window_zero_is_rejected() {
    let (code, _, err) = eval(&["--episodes", "10", "--window", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("window must be >= 1"));
}
