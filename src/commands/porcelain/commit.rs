use crate::areas::repository::Repository;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.write_commit(message, None)?;

        Ok(())
    }
}
