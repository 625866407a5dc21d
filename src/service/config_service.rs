use std::io;
use crate::config::config::validate_input_path;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：不加 BOM、無大小上限
pub struct DefaultConfigAdapter {
    input: String,
    output: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_input_path(&self.input)?;

        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            add_bom: false,
            no_progress: false,
            max_file_size: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_keeps_paths() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new("in".into(), "out".into())));
        let config = service.get_config().unwrap();
        assert_eq!(config.input, "in");
        assert_eq!(config.output, "out");
        assert!(!config.add_bom);
        assert_eq!(config.max_file_size, None);
    }

    #[test]
    fn default_adapter_rejects_empty_input() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(String::new(), "out".into())));
        assert!(service.get_config().is_err());
    }
}
