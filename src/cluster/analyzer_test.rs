use super::*;

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn empty_input_yields_empty_partition() {
    assert!(cluster_files(&[], 10, 1).is_empty());
}

#[test]
fn single_file_keeps_its_full_path() {
    let clusters = cluster_files(&paths(&["src/main/java/Foo.java"]), 10, 1);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].path, "src/main/java/Foo.java");
    assert_eq!(clusters[0].files, vec!["src/main/java/Foo.java"]);
    assert_eq!(clusters[0].weight, 1);
    assert!(!clusters[0].is_leftovers);
}

#[test]
fn small_tree_partitions_by_directory() {
    let input = paths(&[
        "src/main/java/Foo.java",
        "src/main/java/Bar.java",
        "src/main/java/Baz.java",
        "src/main/resources/config.properties",
        "src/test/java/FooTest.java",
        "src/test/java/BarTest.java",
        "src/test/java/BazTest.java",
        ".gitignore",
    ]);

    let clusters = cluster_files(&input, 5, 1);

    assert_eq!(clusters.len(), 3);

    assert_eq!(clusters[0].path, "src/main");
    assert_eq!(clusters[0].weight, 4);
    assert!(!clusters[0].is_leftovers);
    assert_eq!(
        sorted(clusters[0].files.clone()),
        sorted(paths(&[
            "src/main/java/Foo.java",
            "src/main/java/Bar.java",
            "src/main/java/Baz.java",
            "src/main/resources/config.properties",
        ]))
    );

    assert_eq!(clusters[1].path, "src");
    assert_eq!(clusters[1].weight, 3);
    assert!(clusters[1].is_leftovers);
    assert_eq!(
        sorted(clusters[1].files.clone()),
        sorted(paths(&[
            "src/test/java/FooTest.java",
            "src/test/java/BarTest.java",
            "src/test/java/BazTest.java",
        ]))
    );

    assert_eq!(clusters[2].path, "");
    assert_eq!(clusters[2].files, vec![".gitignore"]);
    assert_eq!(clusters[2].weight, 1);
    assert!(clusters[2].is_leftovers);
}

fn seven_flat_files() -> Vec<String> {
    paths(&[
        "src/main/java/Foo1.java",
        "src/main/java/Foo2.java",
        "src/main/java/Foo3.java",
        "src/main/java/Foo4.java",
        "src/main/java/Foo5.java",
        "src/main/java/Foo6.java",
        "src/main/java/Foo7.java",
    ])
}

#[test]
fn oversized_directory_sheds_leading_singletons() {
    let clusters = cluster_files(&seven_flat_files(), 5, 1);

    // The first two files stay behind as their own clean clusters; the
    // other five merge at the directory and are marked as residue.
    assert_eq!(clusters.len(), 3);

    assert_eq!(clusters[0].path, "src/main/java/Foo2.java");
    assert_eq!(clusters[0].weight, 1);
    assert!(!clusters[0].is_leftovers);

    assert_eq!(clusters[1].path, "src/main/java/Foo1.java");
    assert_eq!(clusters[1].weight, 1);
    assert!(!clusters[1].is_leftovers);

    assert_eq!(clusters[2].path, "src/main/java");
    assert_eq!(clusters[2].weight, 5);
    assert!(clusters[2].is_leftovers);
    assert_eq!(
        sorted(clusters[2].files.clone()),
        sorted(paths(&[
            "src/main/java/Foo3.java",
            "src/main/java/Foo4.java",
            "src/main/java/Foo5.java",
            "src/main/java/Foo6.java",
            "src/main/java/Foo7.java",
        ]))
    );
}

#[test]
fn min_size_two_forces_full_merge() {
    let clusters = cluster_files(&seven_flat_files(), 5, 2);

    // Peeling singletons off would leave clusters below the minimum,
    // so the whole directory stays together even though it exceeds the
    // maximum — the only structurally-unavoidable bound violation.
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].path, "src/main/java");
    assert_eq!(clusters[0].weight, 7);
    assert!(!clusters[0].is_leftovers);
    assert_eq!(
        sorted(clusters[0].files.clone()),
        sorted(seven_flat_files())
    );
}

#[test]
fn root_level_files_without_separator() {
    let clusters = cluster_files(&paths(&["README.md", "LICENSE", "Makefile"]), 10, 1);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].path, "");
    assert_eq!(clusters[0].weight, 3);
}

#[test]
fn deep_chain_collects_at_the_branch_point() {
    // No siblings anywhere above "pkg", so the whole subtree collapses
    // at the deepest shared prefix, not at the root.
    let clusters = cluster_files(
        &paths(&["pkg/a/one.rs", "pkg/a/two.rs", "pkg/b/three.rs"]),
        10,
        1,
    );

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].path, "pkg");
    assert_eq!(clusters[0].weight, 3);
    assert!(!clusters[0].is_leftovers);
}

#[test]
fn coverage_no_file_dropped_or_duplicated() {
    let input = paths(&[
        "a/b/c/one.txt",
        "a/b/c/two.txt",
        "a/b/d/three.txt",
        "a/e/four.txt",
        "f/five.txt",
        "f/g/six.txt",
        "f/g/h/seven.txt",
        "eight.txt",
        "a/nine.txt",
        "a/b/ten.txt",
    ]);

    for (max, min) in [(1, 1), (3, 1), (3, 2), (5, 2), (10, 1), (100, 1)] {
        let clusters = cluster_files(&input, max, min);
        let mut seen: Vec<String> = clusters.iter().flat_map(|c| c.files.clone()).collect();
        seen.sort();
        assert_eq!(
            seen,
            sorted(input.clone()),
            "coverage broken for max={max} min={min}"
        );
    }
}

#[test]
fn non_leftover_clusters_respect_max_size() {
    let input = paths(&[
        "a/b/c/one.txt",
        "a/b/c/two.txt",
        "a/b/d/three.txt",
        "a/e/four.txt",
        "f/five.txt",
        "f/g/six.txt",
        "f/g/h/seven.txt",
        "eight.txt",
    ]);

    // With min == 1 no directory is forced over budget.
    for max in [1, 2, 3, 5, 8] {
        for c in cluster_files(&input, max, 1) {
            assert!(
                c.weight <= max,
                "cluster {} has weight {} over max {max}",
                c.path,
                c.weight
            );
        }
    }
}

#[test]
fn deterministic_across_calls() {
    let input = paths(&[
        "x/a.rs", "x/b.rs", "x/y/c.rs", "x/y/d.rs", "z/e.rs", "z/f.rs", "g.rs",
    ]);

    let first = cluster_files(&input, 3, 1);
    let second = cluster_files(&input, 3, 1);
    assert_eq!(first, second);
}

#[test]
fn sorted_by_descending_path() {
    let input = paths(&[
        "src/main/java/Foo.java",
        "src/main/java/Bar.java",
        "src/main/java/Baz.java",
        "src/main/resources/config.properties",
        "src/test/java/FooTest.java",
        "src/test/java/BarTest.java",
        "src/test/java/BazTest.java",
        ".gitignore",
    ]);

    let clusters = cluster_files(&input, 5, 1);
    for pair in clusters.windows(2) {
        assert!(
            pair[0].path > pair[1].path,
            "{} should sort before {}",
            pair[0].path,
            pair[1].path
        );
    }
}

#[test]
fn duplicate_paths_both_survive() {
    let clusters = cluster_files(&paths(&["a/x.rs", "a/x.rs", "a/y.rs"]), 10, 1);
    let total: usize = clusters.iter().map(|c| c.weight).sum();
    assert_eq!(total, 3);
}
