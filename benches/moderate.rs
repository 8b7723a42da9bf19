use chaperone::{moderate, Moderator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

static SAMPLES: &[&str] = &[
    "Hello, how are you?",
    "call me on 98 76 54 32 10",
    "email me at john [at] gmail [dot] com",
    "My appointment is on 2025-01-15 at 14:30",
    "pay 9876543210@paytm",
    "nine eight seven six five four three two one zero",
    "n!n#e$8%7^6&5*4(3)2+1=0",
    "meet.google.com/abc-defg-hij",
    "девять восемь семь шесть пять",
    "The quarterly report shows a 12% increase over version 2.3.1",
];

fn bench_moderate(c: &mut Criterion) {
    c.bench_function("moderate_mixed_corpus", |b| {
        b.iter(|| {
            for text in SAMPLES {
                black_box(moderate(black_box(text)));
            }
        })
    });

    let moderator = Moderator::default();
    c.bench_function("moderate_clean_message", |b| {
        b.iter(|| black_box(moderator.moderate(black_box("see you at the standup tomorrow"), None)))
    });

    let long = "lorem ipsum dolor sit amet consectetur ".repeat(250);
    c.bench_function("moderate_long_clean_message", |b| {
        b.iter(|| black_box(moderator.moderate(black_box(long.as_str()), None)))
    });
}

criterion_group!(benches, bench_moderate);
criterion_main!(benches);
