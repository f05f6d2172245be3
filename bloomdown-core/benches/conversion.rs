//! Conversion benchmarks

use bloomdown_core::{classify, BloomDecoder, BloomEncoder, ContentToken};
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_book(pages: usize) -> String {
    let mut input = String::from(
        "---\nallTitles:\n  en: Bench\n  es: Banco\nlanguages:\n  en: English\n  es: Spanish\nl1: en\nl2: es\n---\n",
    );
    for i in 0..pages {
        input.push_str(&format!(
            "\n<!-- lang=en -->\nPage {i} has **bold** and *italic* text.\n\n![Picture](p{i}.png)\n\n<!-- lang=es -->\nLa pagina {i}.\n\n<!-- page-break -->\n"
        ));
    }
    input
}

fn conversion_benchmark(c: &mut Criterion) {
    let input = sample_book(200);
    let book = BloomDecoder::new().decode(&input).unwrap().book;

    c.bench_function("decode_200_pages", |b| {
        b.iter(|| BloomDecoder::new().decode(std::hint::black_box(&input)).unwrap())
    });

    c.bench_function("render_200_pages", |b| {
        b.iter(|| BloomEncoder::new().render(std::hint::black_box(&book)))
    });

    let sequence = vec![
        ContentToken::text("en"),
        ContentToken::Image,
        ContentToken::text("fr"),
        ContentToken::Image,
        ContentToken::text("es"),
    ];
    c.bench_function("classify", |b| {
        b.iter(|| classify(std::hint::black_box(&sequence), "en", Some("es")))
    });
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
