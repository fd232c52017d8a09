// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use syllabus::catalog;
use syllabus::model::SectionId;
use syllabus::page::PageComposer;
use syllabus::render::{content_view_to_text, render_content};

mod profiler;

// Case ids stay stable so results remain comparable across refactors:
// `lesson_standard` (definition + key points + case study), `lesson_rich` (all SEO blocks),
// `placeholder` (section without content).
const CASES: [(&str, &str); 3] = [
    ("lesson_standard", "email-fundamentals"),
    ("lesson_rich", "seo-fundamentals"),
    ("placeholder", "on-page-seo"),
];

fn benches_render(c: &mut Criterion) {
    let course = catalog::digital_marketing().expect("builtin course");

    let mut group = c.benchmark_group("render.content");
    for (case, section_id) in CASES {
        let store = course.content().clone();
        group.bench_function(case, move |b| {
            b.iter(|| {
                let view = render_content(black_box(&store), black_box(section_id));
                black_box(view.is_placeholder())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.text");
    for (case, section_id) in CASES {
        let view = render_content(course.content(), section_id);
        group.bench_function(case, move |b| {
            b.iter(|| {
                let text = content_view_to_text(black_box(&view), black_box(80));
                black_box(text.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.page");
    let section_id = SectionId::new("seo-fundamentals");
    let composer = PageComposer::new(course.clone(), section_id);
    group.bench_function("page_view", |b| {
        b.iter(|| black_box(composer.page_view()).navigation.rows.len())
    });
    group.bench_function("page_view_json", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&composer.page_view()).expect("json");
            black_box(json.len())
        })
    });
    group.finish();

    let mut group = c.benchmark_group("page.select");
    let mut composer = PageComposer::new(
        course,
        catalog::default_section_id().expect("default section"),
    );
    let ids = CASES
        .iter()
        .map(|(_, id)| SectionId::new(*id))
        .collect::<Vec<_>>();
    group.bench_function("cycle", |b| {
        b.iter(|| {
            for id in &ids {
                composer.select_section(id.clone());
                black_box(composer.content_view());
            }
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
