use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        output,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, format, output, *force)?;

        stlog(
            &pool.conn,
            "export",
            format.as_str(),
            "Exported schedule and preferences",
        )?;
    }

    Ok(())
}
