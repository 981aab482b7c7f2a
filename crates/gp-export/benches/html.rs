use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gp_core::color::BackgroundColor;
use gp_core::frame::{AsciiCell, AsciiGrid};
use gp_export::html::build_html;

const CHARSET: &[&str] = &[" ", ".", ":", "-", "=", "+", "*", "#", "%", "@"];

fn make_grid(width: usize, height: usize) -> AsciiGrid {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let v = ((x * 7 + y * 13) % 256) as u8;
                    AsciiCell::new(CHARSET[usize::from(v) % CHARSET.len()], (v, 255 - v, v / 2))
                })
                .collect()
        })
        .collect();
    AsciiGrid::from_rows(rows)
}

fn bench_build_html(c: &mut Criterion) {
    let grid = make_grid(200, 80);
    let bg = BackgroundColor::default();

    c.bench_function("build_html_colored_200x80", |b| {
        b.iter(|| build_html(black_box(&grid), true, bg));
    });
    c.bench_function("build_html_mono_200x80", |b| {
        b.iter(|| build_html(black_box(&grid), false, bg));
    });
}

criterion_group!(benches, bench_build_html);
criterion_main!(benches);
