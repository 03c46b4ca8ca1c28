use powerset::{
    format::to_table_string, parse_file, parse_table_str, to_deterministic, to_minimized_deterministic,
    to_minimized_nondeterministic_form, to_nondeterministic_form, CompositeNaming, Options,
};

#[test]
fn canonical_single_destinations() {
    let a = parse_file("res/tables/canonical_single.txt", &Options::default()).unwrap();
    assert_eq!(a.num_states(), 4);
    assert_eq!(a.alphabet().len(), 3);
    assert_eq!(a.initial_state().name(), "s0");
    assert_eq!(a.num_transitions(), 7);

    assert!(a.accepts_str("b"));
    assert!(!a.accepts_str("bx"));
    assert!(a.accepts_str(""));
    assert!(a.accepts_str("ccccac"));
    assert!(!a.accepts_str("bb"));
}

#[test]
fn canonical_first_match() {
    let a = parse_file("res/tables/canonical.txt", &Options::default()).unwrap();
    assert_eq!(a.num_transitions(), 10);
    assert!(!a.is_deterministic());
    // `s0:c>s1` comes first, so `ca` reaches `s2` through `s1`
    assert!(a.accepts_str("ca"));
    // `s1:a>s2` is taken, `s2` has no `a` transition
    assert!(!a.accepts_str("caa"));
    assert!(a.accepts_any_path("caa".chars()));
}

#[test]
fn canonical_positional_conversions() {
    let options = Options::default();
    let a = parse_file("res/tables/canonical.txt", &options).unwrap();

    let dfa = to_deterministic(&a, &options).unwrap();
    let nfa = to_nondeterministic_form(&a, &options).unwrap();
    assert_eq!(dfa.num_states(), 6);
    assert_eq!(dfa.to_string(), nfa.to_string());
    assert_eq!(
        dfa.to_string(),
        "s0:a>s2s3,b>s3,c>s1s2s1s2
s2s3:a>s2s3s1,b>s3,c>s1s2s1s2s3s1
s3:a>s2s3,b>s3,c>s1s2s1s2
s1s2s1s2:a>s2s3s1,b>s3,c>s1s2s1s2s3s1
s2s3s1:a>s2s3s1,b>s3,c>s1s2s1s2s3s1
s1s2s1s2s3s1:a>s2s3s1,b>s3,c>s1s2s1s2s3s1
"
    );
    assert!(dfa.accepts_str("b"));
    assert!(dfa.accepts_str("bbb"));
    assert!(!dfa.accepts_str("a"));

    let min_dfa = to_minimized_deterministic(&a, &options).unwrap();
    let min_nfa = to_minimized_nondeterministic_form(&a, &options).unwrap();
    assert_eq!(min_dfa.num_states(), 11);
    assert_eq!(min_dfa.to_string(), min_nfa.to_string());
}

#[test]
fn ends_with_ab_state_sets() {
    let options = Options::default().with_naming(CompositeNaming::StateSet);
    let a = parse_file("res/tables/ends_with_ab.txt", &options).unwrap();
    let dfa = to_deterministic(&a, &options).unwrap();
    assert_eq!(
        to_table_string(&dfa),
        "#states
s0
{s0 s1}
{s0 s2}
#initial
s0
#accepting
{s0 s2}
#alphabet
a
b
#transitions
s0:a>{s0 s1}
s0:b>s0
{s0 s1}:a>{s0 s1}
{s0 s1}:b>{s0 s2}
{s0 s2}:a>{s0 s1}
{s0 s2}:b>s0
"
    );
    assert!(dfa.accepts_str("aab"));
    assert!(dfa.accepts_str("bab"));
    assert!(!dfa.accepts_str("aba"));
}

#[test]
fn state_set_table_reads_back() {
    let options = Options::default().with_naming(CompositeNaming::StateSet);
    let a = parse_file("res/tables/ends_with_ab.txt", &options).unwrap();
    let dfa = to_deterministic(&a, &options).unwrap();
    let reread = parse_table_str(&to_table_string(&dfa), &Options::default()).unwrap();
    assert_eq!(reread.to_string(), dfa.to_string());
    assert_eq!(reread.num_transitions(), 6);
    assert!(reread.is_accepting_name("{s0 s2}"));
}

#[test]
fn mod3_is_already_deterministic() {
    let options = Options::default().with_naming(CompositeNaming::StateSet);
    let a = parse_file("res/tables/mod3.txt", &options).unwrap();
    assert!(a.is_deterministic());
    let dfa = to_deterministic(&a, &options).unwrap();
    assert_eq!(dfa.to_string(), a.to_string());
    // 6 = 0b110, 7 = 0b111
    assert!(dfa.accepts_str("110"));
    assert!(!dfa.accepts_str("111"));
}

#[test]
fn crlf_table() {
    let a = parse_file("res/tables/crlf.txt", &Options::default()).unwrap();
    assert_eq!(a.num_states(), 2);
    assert_eq!(a.alphabet().len(), 2);
    assert!(a.accepts_str("xyxx"));
    assert!(!a.accepts_str("xy"));
}

#[test]
fn missing_file() {
    assert!(parse_file("res/tables/does_not_exist.txt", &Options::default()).is_err());
}
