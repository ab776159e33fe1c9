use std::collections::HashSet;

use outline_core::{ColonHeaders, GroupIndex, MergeConfig, MergeItem, merge_items_into_content};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: [&str; 4] = ["Home", "Work", "Errands", "Garden"];

fn random_path(rng: &mut StdRng) -> Vec<String> {
    let depth = rng.gen_range(0..=3);
    (0..depth)
        .map(|_| NAMES[rng.gen_range(0..NAMES.len())].to_string())
        .collect()
}

/// Root blocks are kept verbatim, so they stay unindented to keep the detected unit stable.
fn random_block(rng: &mut StdRng, id: usize, root: bool) -> String {
    let indent = if root {
        String::new()
    } else {
        "  ".repeat(rng.gen_range(0..4))
    };
    let mut block = format!("{indent}✔ task {id} @done(2025-01-01)");
    if rng.gen_bool(0.3) {
        block.push_str(&format!("\n{indent}  - note {id}"));
    }
    block
}

#[test]
fn test_random_merges_never_duplicate_headers() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = MergeConfig::default();

    for round in 0..50 {
        let mut archive = String::new();
        let mut expected_tasks = 0;
        let mut expected_paths: HashSet<String> = HashSet::new();

        for _ in 0..rng.gen_range(1..6) {
            let batch: Vec<MergeItem> = (0..rng.gen_range(1..8))
                .map(|_| {
                    expected_tasks += 1;
                    let path = random_path(&mut rng);
                    for depth in 1..=path.len() {
                        expected_paths.insert(path[..depth].join("."));
                    }
                    let block = random_block(&mut rng, expected_tasks, path.is_empty());
                    if path.is_empty() {
                        MergeItem::root(block)
                    } else {
                        MergeItem::in_group(block, path)
                    }
                })
                .collect();

            archive = merge_items_into_content(&archive, &batch, &config);
        }

        let lines: Vec<&str> = archive.split('\n').collect();
        let index = GroupIndex::parse(&lines, &config, &ColonHeaders::new());

        let mut seen = HashSet::new();
        for group in index.groups() {
            assert!(
                seen.insert(group.full_path.clone()),
                "round {round}: duplicate header `{}` in:\n{archive}",
                group.full_path
            );
        }
        assert_eq!(seen, expected_paths, "round {round}:\n{archive}");

        let tasks = lines.iter().filter(|l| l.trim_start().starts_with('✔')).count();
        assert_eq!(tasks, expected_tasks, "round {round}: lost content in:\n{archive}");
    }
}
