use super::analyzer::FileCluster;
use crate::report_helpers;

pub fn print_report(clusters: &[FileCluster]) {
    if clusters.is_empty() {
        println!("No files to cluster.");
        return;
    }

    let max_path_len = clusters
        .iter()
        .map(|c| display_path(c).len())
        .max()
        .unwrap_or(4)
        .max(4);

    let width = (max_path_len + 26).max(48);
    let separator = report_helpers::separator(width);

    println!("File Clusters");
    println!("{separator}");
    println!(
        " {:<pw$}  {:>6}  {:>9}",
        "Path",
        "Files",
        "Leftovers",
        pw = max_path_len
    );
    println!("{separator}");

    for cluster in clusters {
        println!(
            " {:<pw$}  {:>6}  {:>9}",
            display_path(cluster),
            cluster.weight,
            if cluster.is_leftovers { "yes" } else { "" },
            pw = max_path_len
        );
    }

    println!("{separator}");

    let total: usize = clusters.iter().map(|c| c.weight).sum();
    println!("{} clusters, {total} files", clusters.len());
}

fn display_path(cluster: &FileCluster) -> &str {
    if cluster.path.is_empty() {
        "(root)"
    } else {
        &cluster.path
    }
}

pub fn print_json(clusters: &[FileCluster]) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&clusters)
}
