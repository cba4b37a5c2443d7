use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use xrpl_codec::Codec;
use xrpl_codec_core::sha512_half;
use xrpl_codec_shamap::{AccountState, LedgerEntry};
use xrpl_codec_testkit::TestFixture;

fn entries(fixture: &TestFixture, n: u64) -> Vec<LedgerEntry> {
    (0..n)
        .map(|i| {
            let index = *sha512_half(&i.to_be_bytes()).as_bytes();
            fixture.account_root(index, 1_000_000 + i, 1)
        })
        .collect()
}

fn state_from(entries: &[LedgerEntry]) -> AccountState {
    let mut state = AccountState::new();
    for entry in entries {
        state.add(entry.clone()).unwrap();
    }
    state
}

fn criterion_benchmark(c: &mut Criterion) {
    let fixture = TestFixture::with_passphrase("bench");
    let entries = entries(&fixture, 1000);

    c.bench_function("account_state insert 1000", |b| {
        b.iter(|| state_from(black_box(&entries)))
    });

    c.bench_function("account_state root_hash 1000", |b| {
        b.iter_batched(
            || state_from(&entries),
            |state| state.root_hash(),
            BatchSize::SmallInput,
        )
    });

    let mut base = state_from(&entries);
    c.bench_function("account_state snapshot then update", |b| {
        b.iter(|| {
            let mut next = base.snapshot();
            next.update(fixture.account_root(*entries[0].index().as_bytes(), 1, 2));
            next.root_hash()
        })
    });

    let codec = Codec::default();
    let tx = fixture.payment(&fixture.account(), 1_000_000, 1);
    c.bench_function("encode payment", |b| b.iter(|| codec.encode(black_box(&tx)).unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
