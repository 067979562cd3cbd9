//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use gunc_types::TaxonomicLevel;

pub const HEADER: &str = "genome\tn_genes_called\tn_genes_mapped\tn_contigs\ttaxonomic_level\t\
    proportion_genes_retained_in_major_clades\tgenes_retained_index\tclade_separation_score\t\
    contamination_portion\tn_effective_surplus_clades\tmean_hit_identity\t\
    reference_representation_score\tpass.GUNC";

pub const MAGS: [&str; 2] = [
    "0c20367d-4775-43f1-90c6-1a36afc5e4da",
    "1da59757-769b-4713-923d-e3d2e60690c9",
];

pub const MAGS_SAMPLE_2: [&str; 2] = [
    "24dee6fe-9b84-45bb-8145-de7b092533a1",
    "ca7012fc-ba65-40c3-84f5-05aa478a7585",
];

/// One result row per taxonomic level for each genome.
pub fn result_table(genomes: &[&str]) -> String {
    let mut content = format!("{HEADER}\n");
    for genome in genomes {
        for (i, level) in TaxonomicLevel::ALL.iter().enumerate() {
            let contamination = 0.01 * i as f64;
            content.push_str(&format!(
                "{genome}\t2174\t2040\t77\t{level}\t0.99\t0.93\t{css:.2}\t{contamination:.2}\t1.02\t0.96\t0.93\tTrue\n",
                css = 0.05 * i as f64,
            ));
        }
    }
    content
}

/// Write a complete unpartitioned result set.
pub fn write_result_set(dir: &Path, genomes: &[&str], with_plots: bool) {
    fs::create_dir_all(dir.join("gunc_output")).unwrap();
    fs::create_dir_all(dir.join("gene_calls")).unwrap();
    fs::create_dir_all(dir.join("diamond_output")).unwrap();

    fs::write(
        dir.join("GUNC.progenomes_2.1.maxCSS_level.tsv"),
        result_table(genomes),
    )
    .unwrap();

    let mut counts = Vec::new();
    for genome in genomes {
        fs::write(
            dir.join("gunc_output").join(format!("{genome}.all_levels.tsv")),
            result_table(&[genome]),
        )
        .unwrap();
        fs::write(
            dir.join("gene_calls").join(format!("{genome}.genecalls.faa")),
            format!(">{genome}_1 # 3 # 548 # 1\nMKKLLVAGLLSA*\n"),
        )
        .unwrap();
        fs::write(
            dir.join("diamond_output").join(format!("{genome}.out")),
            format!("{genome}_1\t1280.SAOUHSC_00001\t98.5\t453\t7\t0\t1\t453\t1\t453\t1.2e-250\t870\n"),
        )
        .unwrap();
        counts.push(format!("\"{genome}\": 2174"));
    }
    fs::write(
        dir.join("gene_calls").join("gene_counts.json"),
        format!("{{{}}}", counts.join(", ")),
    )
    .unwrap();

    if with_plots {
        fs::create_dir_all(dir.join("plots")).unwrap();
        for genome in genomes {
            fs::write(
                dir.join("plots").join(format!("{genome}.viz.html")),
                "<!DOCTYPE html><html><body><div class=\"sankey\"></div></body></html>",
            )
            .unwrap();
        }
    }
}

/// Install a test subscriber so `RUST_LOG=debug` shows library events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
