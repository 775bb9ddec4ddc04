use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::fs;

/// Filesystem storage. Reads resolve the path as given (the input file is
/// wherever the user said it is); writes land under the output root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_root: String,
}

impl LocalStorage {
    pub fn new(output_root: String) -> Self {
        Self { output_root }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_root).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}
