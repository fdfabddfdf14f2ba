//! Benchmarks for the saga parsing pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use kringla::{parse, split_sentences};

/// Build a synthetic saga document with the given number of chapters.
fn synthetic_saga(chapter_count: u32) -> String {
    let mut html = String::from("<html><head><title>Сага</title></head><body><h1>Сага</h1>");
    for n in 1..=chapter_count {
        let numeral = kringla::roman::numeral(n).unwrap();
        html.push_str(&format!(r#"<h3 id="{numeral}">{numeral}</h3>"#));
        for i in 0..8 {
            html.push_str(&format!(
                "<p>Конунг правил {i} зим<a class=\"note\" href=\"#n{i}\">{i}</a>. \
                 Потом пришли другие времена. Не было мира в той стране</p>"
            ));
        }
    }
    html.push_str("<h2>Примечания</h2><p>1 Сноска.</p></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let html = synthetic_saga(50);
    c.bench_function("parse_50_chapters", |b| {
        b.iter(|| parse(&html));
    });
}

fn bench_split_sentences(c: &mut Criterion) {
    let text = "Конунг правил долго. Потом пришли другие времена! Не было мира? "
        .repeat(200);
    c.bench_function("split_sentences", |b| {
        b.iter(|| split_sentences(&text));
    });
}

criterion_group!(benches, bench_parse, bench_split_sentences);
criterion_main!(benches);
