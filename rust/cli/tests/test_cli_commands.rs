use bluffsim_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn ev_of_preflop_bluff_against_scaredy_cat() {
    let (code, stdout, _) = run_args(&[
        "bluffsim", "ev", "--vs", "SCAREDY_CAT", "--action", "raise",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("raise 3.00"), "{stdout}");
    assert!(stdout.contains("0.6000 BB"), "{stdout}");
}

#[test]
fn ev_of_all_in_is_the_pot() {
    let (code, stdout, _) = run_args(&[
        "bluffsim", "ev", "--vs", "la", "--action", "all-in", "--size", "90", "--pot", "12.5",
        "--stage", "turn",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("12.5000 BB"), "{stdout}");
}

#[test]
fn ev_of_fold_is_zero() {
    let (code, stdout, _) = run_args(&["bluffsim", "ev", "--vs", "tp", "--action", "fold"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("0.0000 BB"), "{stdout}");
}

#[test]
fn ev_on_the_river_needs_cards() {
    let (code, _, stderr) = run_args(&[
        "bluffsim", "ev", "--vs", "tp", "--action", "bet", "--stage", "river",
    ]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--cards"), "{stderr}");

    let (code, stdout, _) = run_args(&[
        "bluffsim", "ev", "--vs", "tp", "--action", "bet", "--stage", "river", "--cards",
        "7♦ 2♣",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("bet 8.00"), "{stdout}");
}

#[test]
fn ev_rejects_negative_size() {
    let (code, _, stderr) = run_args(&[
        "bluffsim", "ev", "--vs", "tp", "--action", "bet", "--size=-1",
    ]);
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error:"), "{stderr}");
}

#[test]
fn equity_of_seven_deuce_is_the_floor() {
    let (code, stdout, _) = run_args(&["bluffsim", "equity", "--cards", "7♦ 2♣"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PREFLOP"), "{stdout}");
    assert!(stdout.trim_end().ends_with("0.0500"), "{stdout}");
}

#[test]
fn equity_accepts_ascii_suits_and_stage() {
    let (code, stdout, _) = run_args(&[
        "bluffsim", "equity", "--cards", "As,Ah", "--stage", "showdown",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SHOWDOWN"), "{stdout}");
    assert!(stdout.trim_end().ends_with("0.9500"), "{stdout}");
}

#[test]
fn equity_rejects_three_cards() {
    let (code, _, stderr) = run_args(&["bluffsim", "equity", "--cards", "A♠ K♠ Q♠"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("exactly 2 hole cards"), "{stderr}");
}

#[test]
fn unknown_archetype_is_an_input_error() {
    let (code, _, stderr) = run_args(&["bluffsim", "ev", "--vs", "maniac", "--action", "bet"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid input"), "{stderr}");
    assert!(stderr.contains("maniac"), "{stderr}");
}

#[test]
fn unknown_command_lists_commands() {
    let (code, _, stderr) = run_args(&["bluffsim", "deal"]);
    assert_eq!(code, 2);
    for c in ["hand", "batch", "equity", "ev", "cfg"] {
        assert!(stderr.contains(&format!("  {c}")), "missing {c}: {stderr}");
    }
}

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_args(&["bluffsim", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("batch"));
    assert!(stderr.is_empty());
}
