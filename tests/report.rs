use pairsofwords::report::{collect_pairs, count_pairs, sort_pairs, write_report, PairCount};
use pairsofwords::FreqTable;
use std::io::Cursor;

#[test]
fn pairs_do_not_span_inputs() {
    let mut t: FreqTable<String> = FreqTable::new();
    assert_eq!(count_pairs(&mut t, Cursor::new("alpha beta")).unwrap(), 1);
    assert_eq!(count_pairs(&mut t, Cursor::new("gamma delta")).unwrap(), 1);
    let keys: Vec<&str> = {
        let mut rows = collect_pairs(&t);
        sort_pairs(&mut rows);
        rows.into_iter().map(|p| p.key).collect()
    };
    assert_eq!(keys, vec!["alpha beta", "gamma delta"]);
}

#[test]
fn end_to_end_report() {
    let text = "It was the best of times, it was the worst of times.\n\
                It was the age of wisdom, it was the age of foolishness.";
    let mut t: FreqTable<String> = FreqTable::new();
    count_pairs(&mut t, Cursor::new(text)).unwrap();

    let mut rows = collect_pairs(&t);
    sort_pairs(&mut rows);
    assert_eq!(
        &rows[..3],
        &[
            PairCount { key: "it was", frequency: 4 },
            PairCount { key: "was the", frequency: 4 },
            PairCount { key: "age of", frequency: 2 },
        ]
    );

    let mut out = Vec::new();
    write_report(&mut out, &rows, 2).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "         4 it was\n         4 was the\n"
    );
}
