// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cms_text::{clean_rich_text, is_valid_utf8, split_camel_case, to_slug};

fn benchmark_slug(c: &mut Criterion,)
{
    let title = "L’été indien — Crème brûlée & œufs à la neige (édition 2024)";

    c.bench_function("to_slug_accented_title", |b| b.iter(|| to_slug(black_box(title,),),),);
}

fn benchmark_rich_text(c: &mut Criterion,)
{
    let mut html = String::new();
    for i in 0..50 {
        html.push_str(&format!(
            "<p>Paragraph&nbsp;{i}<img src=\"placeholder.gif\" data-src=\"image-{i}.png\" \
             alt=\"Image {i}\"></p><div class=\"redactor-iframe-clickable\"></div>"
        ),);
    }

    c.bench_function("clean_rich_text_50_images", |b| {
        b.iter(|| clean_rich_text(black_box(&html,),),)
    },);
}

fn benchmark_utf8_validation(c: &mut Criterion,)
{
    let text = "héllo wörld 世界 🎉 ".repeat(256,);

    c.bench_function("is_valid_utf8_mixed_5kb", |b| {
        b.iter(|| is_valid_utf8(black_box(text.as_bytes(),),),)
    },);
}

fn benchmark_split_camel_case(c: &mut Criterion,)
{
    c.bench_function("split_camel_case_identifier", |b| {
        b.iter(|| split_camel_case(black_box("ThisIsA_NASAAstronautWithHTMLParserID",),),)
    },);
}

criterion_group!(
    benches,
    benchmark_slug,
    benchmark_rich_text,
    benchmark_utf8_validation,
    benchmark_split_camel_case
);
criterion_main!(benches);
