use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use outline_core::{
    ColonHeaders, GroupIndex, LineIndex, MergeConfig, MergeItem, detect_indent_unit,
    merge_items_into_content,
};

fn large_archive(group_count: usize, items_per_group: usize) -> String {
    let mut out = String::with_capacity(group_count * items_per_group * 48);
    for g in 0..group_count {
        out.push_str(&format!("Project {g:04}:\n"));
        out.push_str(&format!("  Sub {g:04}:\n"));
        for i in 0..items_per_group {
            out.push_str(&format!("    ✔ archived item {i} @done(2025-01-01)\n"));
        }
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn batch(count: usize, group_count: usize) -> Vec<MergeItem> {
    (0..count)
        .map(|i| {
            let g = (i * 7) % group_count;
            MergeItem::in_group(format!("  ✔ new item {i} @done(2025-02-01)"), [
                format!("Project {g:04}"),
                format!("Sub {g:04}"),
            ])
            .with_source_order(i)
        })
        .collect()
}

fn bench_group_index(c: &mut Criterion) {
    let text = large_archive(500, 20);
    let lines: Vec<&str> = text.split('\n').collect();
    c.bench_function("group_index/10k_lines", |b| {
        b.iter(|| {
            let index = GroupIndex::parse(
                black_box(&lines),
                &MergeConfig::default(),
                &ColonHeaders::new(),
            );
            black_box(index.len());
        })
    });
}

fn bench_indent_detection(c: &mut Criterion) {
    let text = large_archive(500, 20);
    let index = LineIndex::from_text(&text);
    c.bench_function("indent_detection/10k_lines", |b| {
        b.iter(|| black_box(detect_indent_unit(index.lines())))
    });
}

fn bench_merge_batch(c: &mut Criterion) {
    let text = large_archive(200, 20);
    let items = batch(50, 200);
    c.bench_function("merge/50_items_into_4k_lines", |b| {
        b.iter_batched(
            || text.clone(),
            |existing| {
                let merged =
                    merge_items_into_content(&existing, black_box(&items), &MergeConfig::default());
                black_box(merged.len());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_merge_new_chains(c: &mut Criterion) {
    let items: Vec<MergeItem> = (0..50)
        .map(|i| MergeItem::in_group(format!("✔ item {i}"), [format!("A{}", i % 5), format!("B{i}")]))
        .collect();
    c.bench_function("merge/50_new_chains_into_empty", |b| {
        b.iter(|| {
            let merged = merge_items_into_content("", black_box(&items), &MergeConfig::default());
            black_box(merged.len());
        })
    });
}

criterion_group!(
    benches,
    bench_group_index,
    bench_indent_detection,
    bench_merge_batch,
    bench_merge_new_chains
);
criterion_main!(benches);
