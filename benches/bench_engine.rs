use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spellward::checker::suggestions;
use spellward::dict::Trie;
use spellward::distance::distance;

fn sample_dictionary() -> Trie {
    let words = [
        "hello", "help", "helmet", "hollow", "world", "word", "work", "wordy", "kitten",
        "sitting", "mitten", "cat", "bat", "rat", "hat", "mat", "banana", "bandana", "orange",
        "organ", "origin", "spell", "spill", "spool", "school", "scholar", "letter", "better",
        "butter", "bitter", "matter", "checker", "checked", "checking",
    ];

    let mut trie = Trie::new();
    for word in words {
        trie.insert(word);
    }
    trie
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance kitten/sitting", |b| {
        b.iter(|| distance(black_box("kitten"), black_box("sitting")))
    });
}

fn bench_trie_lookup(c: &mut Criterion) {
    let trie = sample_dictionary();
    c.bench_function("trie contains", |b| {
        b.iter(|| {
            black_box(trie.contains(black_box("scholar")));
            black_box(trie.contains(black_box("scholsr")));
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let trie = sample_dictionary();
    c.bench_function("rank suggestions", |b| {
        b.iter(|| suggestions::rank(black_box("helo"), &trie, suggestions::MAX_SUGGESTIONS))
    });
}

criterion_group!(benches, bench_distance, bench_trie_lookup, bench_rank);
criterion_main!(benches);
