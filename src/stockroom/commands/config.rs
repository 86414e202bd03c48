use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.data_dir();
    match action {
        ConfigAction::ShowAll => {
            let config = StockroomConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockroomConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockroomConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}
