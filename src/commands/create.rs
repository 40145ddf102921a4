use crate::db::db::Db;

/// First-time store creation at the `$PUNCH_CARD` path.
pub fn cmd() -> anyhow::Result<()> {
    Db::bootstrap()?;
    Ok(())
}
