use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;

impl Repository {
    /// Stage one file: store its current bytes as a blob and point the
    /// index entry for the path at the blob's fingerprint
    pub async fn add(&mut self, file_path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let data = self.workspace().read_file(file_path)?;
        let blob = Blob::new(data);

        // the blob lands in the database before the index references it
        let blob_id = self.database().store(blob)?;
        index.add(file_path.to_string(), blob_id.clone());

        index.write_updates()?;

        writeln!(
            self.writer(),
            "Added file: {} ({})",
            file_path,
            blob_id.to_short_oid()
        )?;

        Ok(())
    }
}
