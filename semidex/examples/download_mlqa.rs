//! Downloads the English MLQA test and validation splits from the Hugging
//! Face Hub into a local `datasets/` directory.
//!
//! Set `HF_TOKEN` (or `HUGGING_FACE_ACCESS_TOKEN`) before running if the
//! dataset requires authentication.
use std::path::Path;

use anyhow::Result;
use semidex::integrations::huggingface::HfHub;

const DATASETS_DIR: &str = "datasets";
const DATASETS_REPO: &str = "datasets/google/xtreme";
// https://huggingface.co/datasets/google/xtreme/tree/main/MLQA.en.en
const DATASET_FILES: &[(&str, &str)] = &[
    ("MLQA.en.en/test-00000-of-00001.parquet", "train.parquet"),
    ("MLQA.en.en/validation-00000-of-00001.parquet", "test.parquet"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let hub = HfHub::builder().build()?;

    fs_err::create_dir_all(DATASETS_DIR)?;

    for (source_path, file_name) in DATASET_FILES {
        let destination = Path::new(DATASETS_DIR).join(file_name);
        hub.download_to(DATASETS_REPO, source_path, &destination)
            .await?;
    }

    println!("Done!");

    Ok(())
}
