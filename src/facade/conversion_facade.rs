use std::io;
use std::path::PathBuf;
use log::info;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::models::diagnostics::Diagnostics;
use crate::models::file::PathPair;
use crate::service::dir::DirService;
use crate::service::file::FileService;
use crate::service::traits::i_service::{DirServiceTrait, FileServiceTrait};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    dir_service: Box<dyn DirServiceTrait>,
}

impl ConversionFacade {
    pub fn new(file_service: Box<dyn FileServiceTrait>, dir_service: Box<dyn DirServiceTrait>) -> Self {
        ConversionFacade {
            file_service,
            dir_service,
        }
    }

    /// 依配置組裝預設的服務
    pub fn from_config(config: &AppConfig) -> Self {
        let file_service = || {
            let service = FileService::new();
            match config.max_file_size {
                Some(limit) => service.with_max_file_size(limit),
                None => service,
            }
        };
        ConversionFacade::new(
            Box::new(file_service()),
            Box::new(DirService::new(Box::new(file_service()), config.no_progress)),
        )
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput> {
        let mut diagnostics = Diagnostics::new();
        let input_path = &input.input_path;
        let output_path = &input.output_path;

        if input_path.is_dir() {
            if output_path.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "輸入為目錄時輸出也必須是目錄，但 '{}' 是檔案",
                        output_path.display()
                    ),
                ));
            }

            info!("開始目錄轉換，輸入目錄：{}，輸出目錄：{}", input_path.display(), output_path.display());
            let pair = PathPair::new(input_path, output_path);
            let (outcome, summary) = self.dir_service.convert_dir(&pair, input.add_bom, &mut diagnostics);
            return Ok(ConversionOutput {
                outcome,
                diagnostics,
                output_path: output_path.clone(),
                summary: Some(summary),
            });
        }

        // 輸出為目錄時，在其中建立同名檔案
        let output_file: PathBuf = match (output_path.is_dir(), input_path.file_name()) {
            (true, Some(name)) => output_path.join(name),
            _ => output_path.clone(),
        };

        info!("開始單檔轉換，輸入檔案：{}，輸出檔案：{}", input_path.display(), output_file.display());
        let pair = PathPair::new(input_path, &output_file);
        let outcome = self.file_service.convert_file(&pair, input.add_bom, &mut diagnostics);

        Ok(ConversionOutput {
            outcome,
            diagnostics,
            output_path: output_file,
            summary: None,
        })
    }
}

// 以配置驅動轉換的適配器
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let facade = ConversionFacade::from_config(&config);
        facade.execute_conversion(ConversionInput {
            input_path: PathBuf::from(&config.input),
            output_path: PathBuf::from(&config.output),
            add_bom: config.add_bom,
        })
    }
}
